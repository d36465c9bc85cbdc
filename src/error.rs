//! Error types for integrator construction and propagation.

use thiserror::Error;

/// Errors raised by eager argument validation.
///
/// Everything else — numerical divergence, shape mismatches inside a scheme
/// or operator, panics from a user-supplied vector field — propagates to the
/// caller unchanged, leaving the state in whatever condition the failing step
/// left it. There is no retry and no partial-result salvage.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntegrationError {
    /// The fixed step size must be strictly positive.
    #[error("time step must be positive, got {0}")]
    InvalidTimeStep(f64),

    /// The total integration span must be strictly positive.
    #[error("integration span must be positive, got {0}")]
    InvalidSpan(f64),
}
