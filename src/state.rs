//! State duplication and linear-combination capabilities.
//!
//! Every state type advanced by the integrator must support the small set of
//! vector-space operations the step kernels are written against:
//! - `scale`: x <- c * x
//! - `axpy`: x <- x + c * y
//! - `copy_from`: value assignment into existing storage
//! - `similar`: a fresh same-shape duplicate used for scheme registers
//!
//! These operations must not allocate beyond `similar` itself; the step
//! kernels call them inside the hot loop.

/// Trait for state types that can be time-integrated.
///
/// `Clone` provides the value-identical, storage-independent duplicate;
/// [`similar`](StateVector::similar) provides the cheap same-shape duplicate
/// whose contents the caller will overwrite before reading.
///
/// # Example
/// ```
/// use imexrk::StateVector;
///
/// let mut x = vec![1.0, 2.0];
/// let y = vec![0.5, 0.5];
/// x.scale(2.0);      // x = [2, 4]
/// x.axpy(2.0, &y);   // x = [3, 5]
/// assert_eq!(x, vec![3.0, 5.0]);
/// ```
pub trait StateVector: Clone {
    /// Create a same-shape duplicate with unspecified (zero-filled) contents.
    fn similar(&self) -> Self;

    /// Assign the values of `other` into `self`: self <- other.
    ///
    /// Storage stays independent; `other` must have the same shape.
    fn copy_from(&mut self, other: &Self);

    /// Scale by a constant: self <- c * self.
    fn scale(&mut self, c: f64);

    /// Add a scaled state: self <- self + c * other.
    fn axpy(&mut self, c: f64, other: &Self);
}

impl StateVector for f64 {
    fn similar(&self) -> Self {
        0.0
    }

    fn copy_from(&mut self, other: &Self) {
        *self = *other;
    }

    fn scale(&mut self, c: f64) {
        *self *= c;
    }

    fn axpy(&mut self, c: f64, other: &Self) {
        *self += c * other;
    }
}

impl StateVector for Vec<f64> {
    fn similar(&self) -> Self {
        vec![0.0; self.len()]
    }

    fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.len(), other.len());
        self.copy_from_slice(other);
    }

    fn scale(&mut self, c: f64) {
        for v in self.iter_mut() {
            *v *= c;
        }
    }

    fn axpy(&mut self, c: f64, other: &Self) {
        debug_assert_eq!(self.len(), other.len());
        for (v, o) in self.iter_mut().zip(other) {
            *v += c * o;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_ops() {
        let mut x = 3.0;
        x.scale(2.0);
        assert!((x - 6.0).abs() < 1e-14);
        x.axpy(0.5, &4.0);
        assert!((x - 8.0).abs() < 1e-14);
    }

    #[test]
    fn test_vec_scale_axpy() {
        let mut x = vec![1.0, -2.0, 3.0];
        let y = vec![1.0, 1.0, 1.0];
        x.scale(2.0);
        x.axpy(3.0, &y);
        assert_eq!(x, vec![5.0, -1.0, 9.0]);
    }

    #[test]
    fn test_similar_is_independent() {
        let x = vec![1.0, 2.0, 3.0];
        let mut s = x.similar();
        assert_eq!(s.len(), 3);
        s[0] = 42.0;
        // Mutating the duplicate must leave the source untouched.
        assert_eq!(x[0], 1.0);
    }

    #[test]
    fn test_copy_from() {
        let src = vec![1.0, 2.0];
        let mut dst = src.similar();
        dst.copy_from(&src);
        assert_eq!(dst, src);
        dst[1] = 99.0;
        assert_eq!(src[1], 2.0);
    }
}
