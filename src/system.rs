//! Non-stiff vector field contract.

/// The non-stiff part of a split system `dz/dt = A z + g(t, z)`.
///
/// Implementations compute the derivative in place into `dxdt`; the
/// integrator owns the output register, so evaluation never allocates.
///
/// Any closure `Fn(f64, &S, &mut S)` is a vector field:
///
/// ```
/// use imexrk::VectorField;
///
/// let field = |_t: f64, x: &Vec<f64>, dxdt: &mut Vec<f64>| {
///     for (d, v) in dxdt.iter_mut().zip(x) {
///         *d = -*v;
///     }
/// };
/// let mut dxdt = vec![0.0; 2];
/// field.eval(0.0, &vec![1.0, 2.0], &mut dxdt);
/// assert_eq!(dxdt, vec![-1.0, -2.0]);
/// ```
pub trait VectorField<S> {
    /// Compute the non-stiff derivative: dxdt <- g(t, x).
    fn eval(&self, t: f64, x: &S, dxdt: &mut S);
}

impl<S, F> VectorField<S> for F
where
    F: Fn(f64, &S, &mut S),
{
    fn eval(&self, t: f64, x: &S, dxdt: &mut S) {
        self(t, x, dxdt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_field_sees_time() {
        let field = |t: f64, _x: &f64, dxdt: &mut f64| *dxdt = t;
        let mut d = 0.0;
        field.eval(2.5, &0.0, &mut d);
        assert!((d - 2.5).abs() < 1e-14);
    }
}
