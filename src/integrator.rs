//! Fixed-step propagation driver.
//!
//! An [`Integrator`] bundles the non-stiff vector field, the stiff linear
//! operator, a step kernel and a fixed step size, validated once at
//! construction. Propagation is a straight-line loop: record the monitor at
//! the current time, clamp the step so the final one lands exactly on the
//! requested span, advance the state in place, repeat. Time starts at zero
//! for every call; time-offset problems fold the offset into the field.
//!
//! [`AugmentedIntegrator`] is the same driver over a [`Couple`] of primary
//! state and quadrature accumulator. Plain and augmented drivers are distinct
//! types, so calling a quadrature entry point on a plain integrator is a
//! compile error rather than a silently wrong result.

use crate::couple::Couple;
use crate::error::IntegrationError;
use crate::monitor::Monitor;
use crate::operator::{NoOperator, PairOperator, StiffOperator};
use crate::quadrature::{coupled, AugmentedField, QuadratureRule};
use crate::scheme::Scheme;
use crate::state::StateVector;
use crate::system::VectorField;

/// Clamped step size for the next iteration.
///
/// Returns `min(t + dt, t_final) - t`, recomputing the remaining span from
/// scratch each call so accumulated rounding in `t` can never produce an
/// overshoot or a stalled loop. For `t < t_final` the result lies in
/// `(0, dt]` and the produced sequence sums to exactly `t_final`.
pub fn next_dt(t: f64, t_final: f64, dt: f64) -> f64 {
    (t + dt).min(t_final) - t
}

/// Fixed-step IMEX integrator.
///
/// Immutable configuration after construction; the only interior mutation is
/// the step kernel writing its own registers. The state is owned exclusively
/// by the caller and mutated in place for the duration of one call.
pub struct Integrator<G, A, Sch> {
    system: G,
    operator: A,
    scheme: Sch,
    dt: f64,
}

impl<G, A, Sch> Integrator<G, A, Sch> {
    /// Create an integrator with a fixed step size.
    ///
    /// # Errors
    /// [`IntegrationError::InvalidTimeStep`] if `dt <= 0`.
    pub fn new(system: G, operator: A, scheme: Sch, dt: f64) -> Result<Self, IntegrationError> {
        if dt <= 0.0 {
            return Err(IntegrationError::InvalidTimeStep(dt));
        }
        Ok(Self {
            system,
            operator,
            scheme,
            dt,
        })
    }

    /// The fixed step size.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Propagate `z` in place over a total time `span`.
    ///
    /// Returns the number of steps taken. The final step is shortened so the
    /// trajectory ends exactly at `span`.
    ///
    /// # Errors
    /// [`IntegrationError::InvalidSpan`] if `span <= 0`.
    pub fn integrate<S>(&mut self, z: &mut S, span: f64) -> Result<usize, IntegrationError>
    where
        S: StateVector,
        G: VectorField<S>,
        A: StiffOperator<S>,
        Sch: Scheme<S>,
    {
        self.propagate(z, span, None)
    }

    /// Propagate with a monitor observing each iteration.
    ///
    /// The monitor is called at the *current* time before each step, so over
    /// a span `T` it receives `ceil(T/dt)` samples, all at times strictly
    /// less than `T`, in strictly increasing order. The post-integration
    /// state is never recorded; read it from `z` after the call.
    pub fn integrate_monitored<S, M>(
        &mut self,
        z: &mut S,
        span: f64,
        monitor: &mut M,
    ) -> Result<usize, IntegrationError>
    where
        S: StateVector,
        G: VectorField<S>,
        A: StiffOperator<S>,
        Sch: Scheme<S>,
        M: Monitor<S>,
    {
        self.propagate(z, span, Some(monitor))
    }

    /// Build the forward map over a fixed span: a closure taking the state
    /// by value and returning it propagated.
    ///
    /// The closure advances its argument in place; composing forward maps
    /// therefore consumes each intermediate state. That destructive contract
    /// is deliberate: the hot path never copies the state.
    pub fn forward_map<S>(
        &mut self,
        span: f64,
    ) -> impl FnMut(S) -> Result<S, IntegrationError> + '_
    where
        S: StateVector,
        G: VectorField<S>,
        A: StiffOperator<S>,
        Sch: Scheme<S>,
    {
        move |mut z: S| {
            self.integrate(&mut z, span)?;
            Ok(z)
        }
    }

    /// The propagation loop shared by all entry points.
    ///
    /// Failures inside the field, the operator or the kernel propagate
    /// unchanged; `z` is left in whatever state the failing step produced.
    fn propagate<S>(
        &mut self,
        z: &mut S,
        span: f64,
        mut monitor: Option<&mut dyn Monitor<S>>,
    ) -> Result<usize, IntegrationError>
    where
        S: StateVector,
        G: VectorField<S>,
        A: StiffOperator<S>,
        Sch: Scheme<S>,
    {
        if span <= 0.0 {
            return Err(IntegrationError::InvalidSpan(span));
        }

        let mut t = 0.0;
        let mut n_steps = 0;

        while t < span {
            if let Some(m) = monitor.as_mut() {
                m.record(t, z);
            }

            let dt_step = next_dt(t, span, self.dt);
            self.scheme
                .step(&self.system, &self.operator, t, dt_step, z);

            t += dt_step;
            n_steps += 1;
        }

        Ok(n_steps)
    }
}

/// Fixed-step IMEX integrator for a system augmented with a quadrature.
///
/// Built from a base field, a stiff operator on the primary state and a
/// quadrature rate. Internally the field is wrapped into an
/// [`AugmentedField`] over `Couple<X, Q>` and the operator is paired with
/// [`NoOperator`] on the accumulator, which has no stiff dynamics.
pub struct AugmentedIntegrator<G, R, A, Sch> {
    inner: Integrator<AugmentedField<G, R>, PairOperator<A, NoOperator>, Sch>,
}

impl<G, R, A, Sch> AugmentedIntegrator<G, R, A, Sch> {
    /// Create an augmented integrator with a fixed step size.
    ///
    /// # Errors
    /// [`IntegrationError::InvalidTimeStep`] if `dt <= 0`.
    pub fn new(
        system: G,
        operator: A,
        rate: R,
        scheme: Sch,
        dt: f64,
    ) -> Result<Self, IntegrationError> {
        Ok(Self {
            inner: Integrator::new(
                AugmentedField::new(system, rate),
                PairOperator::new(operator, NoOperator),
                scheme,
                dt,
            )?,
        })
    }

    /// The fixed step size.
    pub fn dt(&self) -> f64 {
        self.inner.dt()
    }

    /// Propagate the pair `(x, q0)` over a total time `span`.
    ///
    /// Returns the final coupled state; the accumulator part holds
    /// `q0 + integral of rate(t, x(t)) dt` over the span.
    pub fn integrate<X, Q>(
        &mut self,
        x: X,
        q0: Q,
        span: f64,
    ) -> Result<Couple<X, Q>, IntegrationError>
    where
        X: StateVector,
        Q: StateVector,
        G: VectorField<X>,
        R: QuadratureRule<X, Q>,
        A: StiffOperator<X>,
        Sch: Scheme<Couple<X, Q>>,
    {
        let mut z = coupled(x, q0);
        self.inner.integrate(&mut z, span)?;
        Ok(z)
    }

    /// Propagate with a monitor observing the coupled state each iteration.
    pub fn integrate_monitored<X, Q, M>(
        &mut self,
        x: X,
        q0: Q,
        span: f64,
        monitor: &mut M,
    ) -> Result<Couple<X, Q>, IntegrationError>
    where
        X: StateVector,
        Q: StateVector,
        G: VectorField<X>,
        R: QuadratureRule<X, Q>,
        A: StiffOperator<X>,
        Sch: Scheme<Couple<X, Q>>,
        M: Monitor<Couple<X, Q>>,
    {
        let mut z = coupled(x, q0);
        self.inner.integrate_monitored(&mut z, span, monitor)?;
        Ok(z)
    }
}
