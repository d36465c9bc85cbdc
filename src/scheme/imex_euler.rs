//! First-order IMEX Euler scheme.

use super::{Scheme, SchemeInfo};
use crate::operator::StiffOperator;
use crate::state::StateVector;
use crate::system::VectorField;

/// Explicit Euler on the vector field, implicit Euler on the operator:
///
/// ```text
/// z_new = (I - dt A)^{-1} (z + dt g(t, z))
/// ```
///
/// One field evaluation and one implicit solve per step. Mainly useful for
/// testing and as a fallback when the problem is too rough for higher order.
pub struct ImexEuler<S> {
    dqdt: S,
    rhs: S,
}

impl<S: StateVector> ImexEuler<S> {
    /// Create the scheme, allocating registers shaped like `template`.
    pub fn new(template: &S) -> Self {
        Self {
            dqdt: template.similar(),
            rhs: template.similar(),
        }
    }
}

impl<S> SchemeInfo for ImexEuler<S> {
    fn name(&self) -> &'static str {
        "imex-euler"
    }

    fn order(&self) -> usize {
        1
    }

    fn n_stages(&self) -> usize {
        1
    }

    fn stage_times(&self, _dt: f64) -> Vec<f64> {
        vec![0.0]
    }
}

impl<S: StateVector> Scheme<S> for ImexEuler<S> {
    fn step<G, A>(&mut self, system: &G, operator: &A, t: f64, dt: f64, z: &mut S)
    where
        G: VectorField<S>,
        A: StiffOperator<S>,
    {
        system.eval(t, z, &mut self.dqdt);
        self.rhs.copy_from(z);
        self.rhs.axpy(dt, &self.dqdt);
        operator.solve(dt, &self.rhs, z);
    }
}
