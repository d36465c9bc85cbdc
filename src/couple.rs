//! Pair container for coupled integration states.
//!
//! [`Couple`] carries a primary state together with an auxiliary quantity —
//! a running quadrature integral, or a second subsystem such as the tangent
//! (linearized) equations — so both advance under a single integration call.
//!
//! The container itself never mixes the two parts: every operation applies
//! componentwise to `a` and to `b` independently. Any actual coupling between
//! them belongs in the caller's vector field, which sees the whole pair and
//! may read one part while writing the derivative of the other.

use crate::state::StateVector;

/// An ordered pair of two owned sub-states.
#[derive(Clone, Debug, PartialEq)]
pub struct Couple<A, B> {
    a: A,
    b: B,
}

impl<A, B> Couple<A, B> {
    /// Create a pair from its two parts.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// The first (primary) part.
    pub fn first(&self) -> &A {
        &self.a
    }

    /// The second (auxiliary) part.
    pub fn last(&self) -> &B {
        &self.b
    }

    /// Mutable access to the first part.
    pub fn first_mut(&mut self) -> &mut A {
        &mut self.a
    }

    /// Mutable access to the second part.
    pub fn last_mut(&mut self) -> &mut B {
        &mut self.b
    }

    /// Mutable access to both parts at once.
    pub fn parts_mut(&mut self) -> (&mut A, &mut B) {
        (&mut self.a, &mut self.b)
    }

    /// Consume the pair, returning its parts.
    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

/// Componentwise forwarding: each operation acts on `a` with `other.a` and
/// on `b` with `other.b`, never across.
impl<A: StateVector, B: StateVector> StateVector for Couple<A, B> {
    fn similar(&self) -> Self {
        Self {
            a: self.a.similar(),
            b: self.b.similar(),
        }
    }

    fn copy_from(&mut self, other: &Self) {
        self.a.copy_from(&other.a);
        self.b.copy_from(&other.b);
    }

    fn scale(&mut self, c: f64) {
        self.a.scale(c);
        self.b.scale(c);
    }

    fn axpy(&mut self, c: f64, other: &Self) {
        self.a.axpy(c, &other.a);
        self.b.axpy(c, &other.b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Couple<Vec<f64>, Vec<f64>> {
        Couple::new(vec![1.0, 2.0, 3.0], vec![10.0, 20.0])
    }

    #[test]
    fn test_accessors() {
        let p = sample();
        assert_eq!(p.first(), &vec![1.0, 2.0, 3.0]);
        assert_eq!(p.last(), &vec![10.0, 20.0]);
        let (a, b) = p.into_parts();
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_similar_shapes_and_independence() {
        let p = sample();
        let mut s = p.similar();
        assert_eq!(s.first().len(), 3);
        assert_eq!(s.last().len(), 2);
        s.first_mut()[0] = 7.0;
        assert_eq!(p.first()[0], 1.0);
    }

    #[test]
    fn test_copy_from_no_cross_mixing() {
        let p = sample();
        let mut d = p.similar();
        d.copy_from(&p);
        // Each part equals the source part; no value from `a` lands in `b`.
        assert_eq!(d.first(), p.first());
        assert_eq!(d.last(), p.last());
        // Storage independence both ways.
        d.last_mut()[0] = -1.0;
        assert_eq!(p.last()[0], 10.0);
    }

    #[test]
    fn test_clone_is_value_equal_but_independent() {
        let p = sample();
        let mut c = p.clone();
        assert_eq!(c, p);
        c.first_mut()[2] = 0.0;
        assert_eq!(p.first()[2], 3.0);
    }

    #[test]
    fn test_componentwise_axpy() {
        let mut p = sample();
        let q = Couple::new(vec![1.0, 1.0, 1.0], vec![2.0, 2.0]);
        p.axpy(2.0, &q);
        assert_eq!(p.first(), &vec![3.0, 4.0, 5.0]);
        assert_eq!(p.last(), &vec![14.0, 24.0]);
    }

    #[test]
    fn test_mixed_part_types() {
        // Primary vector state with a scalar quadrature accumulator.
        let mut p = Couple::new(vec![1.0, 1.0], 0.5);
        p.scale(2.0);
        assert_eq!(p.first(), &vec![2.0, 2.0]);
        assert!((p.last() - 1.0).abs() < 1e-14);
    }
}
