//! # specfit-rs
//!
//! `specfit-rs` provides parametric basis functions ("components") for
//! nonlinear least-squares fitting of spectral and line-profile data, as used
//! in electron microscopy.
//!
//! The library provides:
//! - Drude interface-plasmon shapes (boundary loss and interface-mode
//!   intensity) with side-restricted and asymmetric configurations
//! - Gaussian and Lorentzian cumulative steps with their density forms
//! - A ramp background
//! - A parameter system with bounds, free/fixed flags and JSON serialization
//! - Analytic gradients where a closed form exists, finite differences
//!   elsewhere
//! - A summed model with an optional instrument-response convolution
//!
//! The optimizer itself is not part of this crate: it reads and writes
//! parameter values and calls [`Model::evaluate`], [`Model::residuals`] and
//! [`Model::jacobian`].
//!
//! ## Basic Usage
//!
//! ```
//! use ndarray::array;
//! use specfit_rs::component::Component;
//! use specfit_rs::components::{LossMode, Ramp, Side, BoundaryLoss};
//! use specfit_rs::model::Model;
//!
//! let mut model = Model::new();
//! model
//!     .add_component("loss", BoundaryLoss::new(LossMode::Side(Side::Both)))
//!     .unwrap();
//! model.add_component("background", Ramp::with_values(0.5, 2.0)).unwrap();
//!
//! let x = array![-1.0, 0.0, 1.0, 3.0];
//! let y = model.evaluate(&x).unwrap();
//! assert_eq!(y.len(), x.len());
//! assert_eq!(y[1], 0.0);
//! ```

// Public modules
pub mod error;

// Parameter system
pub mod parameters;

// Numerics
pub mod piecewise;
pub mod special;
pub mod utils;

// Components and the summed model
pub mod component;
pub mod components;
pub mod model;

// Re-exports for convenience
pub use component::{Component, ComponentFlags, Position};
pub use error::{Result, SpecFitError};
pub use model::Model;
pub use parameters::{Bounds, ParamIndex, Parameter, Parameters};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
