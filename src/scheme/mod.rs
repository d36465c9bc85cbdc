//! IMEX step kernels.
//!
//! A scheme advances a state in place by one step, treating the linear
//! operator implicitly and the vector field explicitly. Schemes own their
//! temporary registers, allocated once from a template state via
//! [`StateVector::similar`](crate::StateVector::similar), so repeated
//! stepping does not allocate.

mod cnrk3;
mod imex_euler;

pub use cnrk3::CnRk3;
pub use imex_euler::ImexEuler;

use crate::operator::StiffOperator;
use crate::state::StateVector;
use crate::system::VectorField;

/// Non-generic information about a step kernel.
///
/// Separate from [`Scheme`] so it stays dyn-compatible and callable without
/// naming a state type.
pub trait SchemeInfo {
    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Order of accuracy of the explicit part.
    fn order(&self) -> usize;

    /// Number of stages per step.
    fn n_stages(&self) -> usize;

    /// Times at which the vector field is evaluated, relative to the step
    /// start, for a step of size `dt`.
    fn stage_times(&self, dt: f64) -> Vec<f64>;
}

/// One-step IMEX kernel over states of type `S`.
pub trait Scheme<S: StateVector>: SchemeInfo {
    /// Advance `z` in place by one step of size `dt` starting at time `t`.
    ///
    /// `system` is the non-stiff field evaluated explicitly; `operator` is
    /// the stiff linear part handled through its implicit-solve primitive.
    fn step<G, A>(&mut self, system: &G, operator: &A, t: f64, dt: f64, z: &mut S)
    where
        G: VectorField<S>,
        A: StiffOperator<S>;
}
