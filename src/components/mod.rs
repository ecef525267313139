//! Built-in spectral components.
//!
//! This module provides the interface-plasmon shapes used for EELS line
//! profiles across an interface, cumulative step functions, their density
//! forms, and a ramp background.

mod boundary_loss;
mod config;
mod estimate;
mod gaussian_cdf;
mod interface_mode;
mod lorentzian_cdf;
pub mod mode;
mod peak;
pub(crate) mod plasmon;
mod ramp;

pub use boundary_loss::BoundaryLoss;
pub use config::{ComponentConfig, EntryConfig, ModelConfig};
pub use gaussian_cdf::GaussianCdf;
pub use interface_mode::InterfaceModeIntensity;
pub use lorentzian_cdf::LorentzianCdf;
pub use mode::{LossMode, Side, Symmetry};
pub use peak::{Gaussian, Lorentzian, GAUSSIAN_FWHM_FACTOR};
pub use ramp::Ramp;

use crate::error::Result;

/// Create a boundary loss component from a mode string
///
/// # Arguments
///
/// * `mode` - One of `both`, `left`, `right`, `symmetric`, `asymmetric`
///
/// # Returns
///
/// * A boundary loss with `A = B = C = 1` and `x0 = 0`
pub fn boundary_loss(mode: &str) -> Result<BoundaryLoss> {
    BoundaryLoss::from_mode_str(mode)
}

/// Create an interface-mode intensity component from a mode string
///
/// # Arguments
///
/// * `mode` - One of `both`, `left`, `right`, `symmetric`, `asymmetric`
///
/// # Returns
///
/// * An interface-mode intensity with `A = C = 1` and `x0 = 0`
pub fn interface_mode_intensity(mode: &str) -> Result<InterfaceModeIntensity> {
    InterfaceModeIntensity::from_mode_str(mode)
}

/// Create a Gaussian CDF step
///
/// # Arguments
///
/// * `a` - Step height
/// * `sigma` - Width
/// * `origin` - Half-height position
pub fn gaussian_cdf(a: f64, sigma: f64, origin: f64) -> GaussianCdf {
    GaussianCdf::with_values(a, sigma, origin)
}

/// Create a Lorentzian CDF step
pub fn lorentzian_cdf(a: f64, gamma: f64, centre: f64) -> LorentzianCdf {
    LorentzianCdf::with_values(a, gamma, centre)
}

/// Create a ramp background starting at `x0` with slope `m`
pub fn ramp(m: f64, x0: f64) -> Ramp {
    Ramp::with_values(m, x0)
}
