//! # Parameter System
//!
//! Every component owns a [`Parameters`] table of named scalar fit variables.
//! The table keeps declaration order, so a [`ParamIndex`] stays valid for the
//! lifetime of the component and can be used as a stable reference (for
//! example by a component's position).
//!
//! ## Core Components
//!
//! - [`Parameter`]: a value with declarative bounds, a free flag and an optional
//!   standard error
//! - [`Parameters`]: the ordered, uniquely named table
//! - [`Bounds`]: lower/upper limits, infinite meaning unbounded
//!
//! ## Example Usage
//!
//! ```rust
//! use specfit_rs::parameters::Parameters;
//!
//! let mut params = Parameters::new();
//! params.add_param_with_bounds("A", 1.0, 0.0, f64::INFINITY).unwrap();
//! let sigma = params.add_param("sigma", 0.5).unwrap();
//!
//! params.by_index_mut(sigma).unwrap().set_value(0.8);
//! assert_eq!(params.values(), vec![1.0, 0.8]);
//! ```

pub mod bounds;
pub mod parameter;
pub mod parameters;


// Re-export key types
pub use bounds::{Bounds, BoundsError};
pub use parameter::Parameter;
pub use parameters::{ParamIndex, Parameters};
