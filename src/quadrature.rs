//! Augmentation of a base system with a running quadrature.
//!
//! A quadrature accumulator `q` evolves by `dq/dt = r(t, x)` alongside the
//! primary state `x`. Augmentation packs both into a [`Couple`] and wraps the
//! base vector field so one integration call advances the pair together:
//!
//! - the base field writes the derivative of the first part,
//! - the quadrature rate writes the derivative of the second part.
//!
//! The rate sees time and the primary state only; the accumulator never feeds
//! back into the dynamics.

use crate::couple::Couple;
use crate::system::VectorField;

/// Derivative of the quadrature accumulator: dqdt <- r(t, x).
pub trait QuadratureRule<X, Q> {
    /// Evaluate the accumulator's rate of change in place.
    fn rate(&self, t: f64, x: &X, dqdt: &mut Q);
}

impl<X, Q, F> QuadratureRule<X, Q> for F
where
    F: Fn(f64, &X, &mut Q),
{
    fn rate(&self, t: f64, x: &X, dqdt: &mut Q) {
        self(t, x, dqdt);
    }
}

/// A base vector field augmented with a quadrature rate.
///
/// Acts as a [`VectorField`] over `Couple<X, Q>`. The two derivative parts
/// are written independently; no cross-mixing happens here.
#[derive(Clone, Debug)]
pub struct AugmentedField<G, R> {
    field: G,
    rate: R,
}

impl<G, R> AugmentedField<G, R> {
    /// Wrap a base field and a quadrature rate.
    pub fn new(field: G, rate: R) -> Self {
        Self { field, rate }
    }
}

impl<X, Q, G, R> VectorField<Couple<X, Q>> for AugmentedField<G, R>
where
    G: VectorField<X>,
    R: QuadratureRule<X, Q>,
{
    fn eval(&self, t: f64, z: &Couple<X, Q>, dzdt: &mut Couple<X, Q>) {
        let (dxdt, dqdt) = dzdt.parts_mut();
        self.field.eval(t, z.first(), dxdt);
        self.rate.rate(t, z.first(), dqdt);
    }
}

/// Build the augmented initial state for a quadrature run.
pub fn coupled<X, Q>(x: X, q0: Q) -> Couple<X, Q> {
    Couple::new(x, q0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateVector;

    #[test]
    fn test_augmented_field_routes_parts() {
        // dx/dt = -x, dq/dt = x[0]
        let field = |_t: f64, x: &Vec<f64>, dxdt: &mut Vec<f64>| {
            for (d, v) in dxdt.iter_mut().zip(x) {
                *d = -v;
            }
        };
        let rate = |_t: f64, x: &Vec<f64>, dqdt: &mut f64| *dqdt = x[0];

        let aug = AugmentedField::new(field, rate);
        let z = coupled(vec![2.0, 3.0], 0.0);
        let mut dzdt = z.similar();
        aug.eval(0.0, &z, &mut dzdt);

        assert_eq!(dzdt.first(), &vec![-2.0, -3.0]);
        assert!((dzdt.last() - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_rate_sees_time() {
        let field = |_t: f64, _x: &f64, dxdt: &mut f64| *dxdt = 0.0;
        let rate = |t: f64, _x: &f64, dqdt: &mut f64| *dqdt = t.cos();
        let aug = AugmentedField::new(field, rate);

        let z = coupled(1.0, 0.0);
        let mut dzdt = z.similar();
        aug.eval(0.0, &z, &mut dzdt);
        assert!((dzdt.last() - 1.0).abs() < 1e-14);
    }
}
