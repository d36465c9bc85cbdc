//! # imexrk
//!
//! Fixed-step Implicit-Explicit Runge-Kutta time integration for split
//! stiff/non-stiff dynamical systems.
//!
//! This crate provides the building blocks for advancing `dz/dt = A z + g(t, z)`
//! where the linear operator `A` is treated implicitly and the vector field
//! `g` explicitly:
//! - State capabilities (duplication, scale/axpy) for arbitrary state types
//! - A pair container for coupled states (quadrature, tangent equations)
//! - Vector-field and stiff-operator contracts
//! - Step kernels (IMEX Euler, low-storage RK3 with Crank-Nicolson)
//! - The propagation driver with exact end-time clamping
//! - Monitors recording (time, observable) samples during propagation
//!
//! # Example
//! ```
//! use imexrk::{CnRk3, Integrator, ScalarOperator};
//!
//! // dz/dt = -4 z - z: the -4 z part is stiff, the rest explicit.
//! let field = |_t: f64, x: &f64, dxdt: &mut f64| *dxdt = -x;
//! let mut z = 1.0;
//! let mut integrator =
//!     Integrator::new(field, ScalarOperator(-4.0), CnRk3::new(&z), 1e-3).unwrap();
//!
//! integrator.integrate(&mut z, 1.0).unwrap();
//! assert!((z - (-5.0f64).exp()).abs() < 1e-6);
//! ```

pub mod couple;
pub mod error;
pub mod integrator;
pub mod monitor;
pub mod operator;
pub mod quadrature;
pub mod scheme;
pub mod state;
pub mod system;

// Re-export main types for convenience
pub use couple::Couple;
pub use error::IntegrationError;
pub use integrator::{next_dt, AugmentedIntegrator, Integrator};
pub use monitor::{Monitor, SampleHistory};
pub use operator::{DiagonalOperator, NoOperator, PairOperator, ScalarOperator, StiffOperator};
pub use quadrature::{coupled, AugmentedField, QuadratureRule};
pub use scheme::{CnRk3, ImexEuler, Scheme, SchemeInfo};
pub use state::StateVector;
pub use system::VectorField;
