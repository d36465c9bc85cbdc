//! Stiff linear operator contract and reference implementations.
//!
//! The stiff part of the split system is a linear operator `A` advanced
//! implicitly. The scheme kernels need exactly two primitives from it:
//! the forward application `out = A x`, and the implicit solve
//! `out = (I - c A)^{-1} rhs`, where `c` bundles the scheme's implicit
//! coefficient with the step size.

use crate::couple::Couple;
use crate::state::StateVector;

/// Stiff linear operator acting on states of type `S`.
pub trait StiffOperator<S> {
    /// Forward application: out <- A x.
    fn apply(&self, x: &S, out: &mut S);

    /// Implicit solve: out <- (I - c A)^{-1} rhs.
    fn solve(&self, c: f64, rhs: &S, out: &mut S);
}

/// The zero operator: no stiff dynamics.
///
/// Used for the quadrature part of an augmented system, and for running a
/// fully explicit problem through the IMEX driver.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOperator;

impl<S: StateVector> StiffOperator<S> for NoOperator {
    fn apply(&self, x: &S, out: &mut S) {
        out.copy_from(x);
        out.scale(0.0);
    }

    fn solve(&self, _c: f64, rhs: &S, out: &mut S) {
        // (I - c * 0)^{-1} = I
        out.copy_from(rhs);
    }
}

/// A scalar multiple of the identity: A = lambda I.
#[derive(Clone, Copy, Debug)]
pub struct ScalarOperator(pub f64);

impl StiffOperator<f64> for ScalarOperator {
    fn apply(&self, x: &f64, out: &mut f64) {
        *out = self.0 * x;
    }

    fn solve(&self, c: f64, rhs: &f64, out: &mut f64) {
        *out = rhs / (1.0 - c * self.0);
    }
}

impl StiffOperator<Vec<f64>> for ScalarOperator {
    fn apply(&self, x: &Vec<f64>, out: &mut Vec<f64>) {
        debug_assert_eq!(x.len(), out.len());
        for (o, v) in out.iter_mut().zip(x) {
            *o = self.0 * v;
        }
    }

    fn solve(&self, c: f64, rhs: &Vec<f64>, out: &mut Vec<f64>) {
        debug_assert_eq!(rhs.len(), out.len());
        let denom = 1.0 - c * self.0;
        for (o, r) in out.iter_mut().zip(rhs) {
            *o = r / denom;
        }
    }
}

/// A diagonal operator with one coefficient per state component.
///
/// The workhorse for spectral discretizations where the stiff term
/// (e.g. diffusion) is diagonal in the chosen basis.
#[derive(Clone, Debug)]
pub struct DiagonalOperator {
    coeffs: Vec<f64>,
}

impl DiagonalOperator {
    /// Create from per-component coefficients.
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    /// The diagonal coefficients.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }
}

impl StiffOperator<Vec<f64>> for DiagonalOperator {
    fn apply(&self, x: &Vec<f64>, out: &mut Vec<f64>) {
        debug_assert_eq!(x.len(), self.coeffs.len());
        debug_assert_eq!(out.len(), self.coeffs.len());
        for i in 0..out.len() {
            out[i] = self.coeffs[i] * x[i];
        }
    }

    fn solve(&self, c: f64, rhs: &Vec<f64>, out: &mut Vec<f64>) {
        debug_assert_eq!(rhs.len(), self.coeffs.len());
        debug_assert_eq!(out.len(), self.coeffs.len());
        for i in 0..out.len() {
            out[i] = rhs[i] / (1.0 - c * self.coeffs[i]);
        }
    }
}

/// Componentwise operator over a [`Couple`]: `oa` acts on the first part,
/// `ob` on the second. No cross-part action.
#[derive(Clone, Copy, Debug)]
pub struct PairOperator<OA, OB> {
    oa: OA,
    ob: OB,
}

impl<OA, OB> PairOperator<OA, OB> {
    /// Create a pair operator from the two sub-operators.
    pub fn new(oa: OA, ob: OB) -> Self {
        Self { oa, ob }
    }
}

impl<A, B, OA, OB> StiffOperator<Couple<A, B>> for PairOperator<OA, OB>
where
    OA: StiffOperator<A>,
    OB: StiffOperator<B>,
{
    fn apply(&self, x: &Couple<A, B>, out: &mut Couple<A, B>) {
        let (oa, ob) = out.parts_mut();
        self.oa.apply(x.first(), oa);
        self.ob.apply(x.last(), ob);
    }

    fn solve(&self, c: f64, rhs: &Couple<A, B>, out: &mut Couple<A, B>) {
        let (oa, ob) = out.parts_mut();
        self.oa.solve(c, rhs.first(), oa);
        self.ob.solve(c, rhs.last(), ob);
    }
}
