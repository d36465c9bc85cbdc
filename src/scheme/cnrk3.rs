//! Three-stage low-storage IMEX scheme: RK3 with Crank-Nicolson.

use std::mem;

use super::{Scheme, SchemeInfo};
use crate::operator::StiffOperator;
use crate::state::StateVector;
use crate::system::VectorField;

/// Explicit-part weights for the current stage's field evaluation.
const GAMMA: [f64; 3] = [8.0 / 15.0, 5.0 / 12.0, 3.0 / 4.0];

/// Explicit-part weights for the previous stage's field evaluation.
const ZETA: [f64; 3] = [0.0, -17.0 / 60.0, -5.0 / 12.0];

/// Crank-Nicolson half-weights for the stiff operator; the implicit and
/// explicit halves are equal, alpha_k = (gamma_k + zeta_k) / 2.
const ALPHA: [f64; 3] = [4.0 / 15.0, 1.0 / 15.0, 1.0 / 6.0];

/// Stage times relative to the step start, as fractions of dt.
const C: [f64; 3] = [0.0, 8.0 / 15.0, 2.0 / 3.0];

/// Low-storage third-order Runge-Kutta for the vector field combined with
/// Crank-Nicolson for the stiff operator.
///
/// Each stage advances
///
/// ```text
/// w = z + alpha_k dt A z + gamma_k dt g(t_k, z) + zeta_k dt g_prev
/// z = (I - alpha_k dt A)^{-1} w
/// ```
///
/// with stage times `t_k = t + c_k dt`, `c = [0, 8/15, 2/3]`. Third order in
/// the explicit part, second order in the stiff part; the standard choice
/// for split stiff/non-stiff systems at fixed step size.
///
/// Three field evaluations, three operator applications and three implicit
/// solves per step; four registers, allocated once at construction.
pub struct CnRk3<S> {
    az: S,
    dqdt: S,
    dqdt_prev: S,
    rhs: S,
}

impl<S: StateVector> CnRk3<S> {
    /// Create the scheme, allocating registers shaped like `template`.
    pub fn new(template: &S) -> Self {
        Self {
            az: template.similar(),
            dqdt: template.similar(),
            dqdt_prev: template.similar(),
            rhs: template.similar(),
        }
    }
}

impl<S> SchemeInfo for CnRk3<S> {
    fn name(&self) -> &'static str {
        "cn-rk3"
    }

    fn order(&self) -> usize {
        3
    }

    fn n_stages(&self) -> usize {
        3
    }

    fn stage_times(&self, dt: f64) -> Vec<f64> {
        C.iter().map(|c| c * dt).collect()
    }
}

impl<S: StateVector> Scheme<S> for CnRk3<S> {
    fn step<G, A>(&mut self, system: &G, operator: &A, t: f64, dt: f64, z: &mut S)
    where
        G: VectorField<S>,
        A: StiffOperator<S>,
    {
        for k in 0..3 {
            let tk = t + C[k] * dt;

            operator.apply(z, &mut self.az);
            system.eval(tk, z, &mut self.dqdt);

            self.rhs.copy_from(z);
            self.rhs.axpy(ALPHA[k] * dt, &self.az);
            self.rhs.axpy(GAMMA[k] * dt, &self.dqdt);
            if k > 0 {
                self.rhs.axpy(ZETA[k] * dt, &self.dqdt_prev);
            }

            operator.solve(ALPHA[k] * dt, &self.rhs, z);

            mem::swap(&mut self.dqdt, &mut self.dqdt_prev);
        }
    }
}
