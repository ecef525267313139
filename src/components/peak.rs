//! Peak (density) components.
//!
//! These are the density forms of the cumulative components. `A` is the area
//! under the peak, not its height.

use crate::component::{check_values, Component, Position};
use crate::components::estimate;
use crate::error::Result;
use crate::parameters::{ParamIndex, Parameter, Parameters};
use ndarray::Array1;
use std::f64::consts::PI;

/// `FWHM = 2 * sqrt(2 * ln 2) * sigma`
pub const GAUSSIAN_FWHM_FACTOR: f64 = 2.354_820_045_030_949;

fn sqrt_2pi() -> f64 {
    (2.0 * PI).sqrt()
}

/// A normalised Gaussian peak.
///
/// The Gaussian function is defined as:
/// f(x) = A / (sigma * sqrt(2π)) * exp(-(x - centre)² / (2 * sigma²))
///
/// It is characterized by:
/// - `A`: The area under the peak (bounded below by 0)
/// - `sigma`: The standard deviation, controlling the width
/// - `centre`: The position of the peak centre
#[derive(Debug, Clone, PartialEq)]
pub struct Gaussian {
    parameters: Parameters,
}

impl Gaussian {
    const A: ParamIndex = ParamIndex(0);
    const SIGMA: ParamIndex = ParamIndex(1);
    const CENTRE: ParamIndex = ParamIndex(2);

    /// Create a new Gaussian with `A = 1`, `sigma = 1`, `centre = 0`.
    pub fn new() -> Self {
        Self::with_values(1.0, 1.0, 0.0)
    }

    /// Create a new Gaussian.
    ///
    /// # Arguments
    ///
    /// * `a` - Area under the peak
    /// * `sigma` - Standard deviation
    /// * `centre` - Position of the maximum
    ///
    /// # Returns
    ///
    /// * A new Gaussian instance
    pub fn with_values(a: f64, sigma: f64, centre: f64) -> Self {
        let mut parameters = Parameters::new();
        parameters.declare(Parameter::new("A", a).with_lower_bound(0.0).with_gradient());
        parameters.declare(Parameter::new("sigma", sigma).with_gradient());
        parameters.declare(Parameter::new("centre", centre).with_gradient());

        log::debug!("created Gaussian (A = {}, sigma = {}, centre = {})", a, sigma, centre);
        Self { parameters }
    }

    /// Full width at half maximum for the current `sigma`.
    pub fn fwhm(&self) -> f64 {
        GAUSSIAN_FWHM_FACTOR * self.parameters.values()[Self::SIGMA.get()]
    }

    /// Set `A`, `sigma` and `centre` from a sampled peak.
    ///
    /// The centre is placed on the maximum sample and the width is taken
    /// from the half-maximum crossings.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `x` and `y` differ in length and
    /// `InvalidConfiguration` for empty or non-finite data.
    pub fn estimate(&mut self, x: &Array1<f64>, y: &Array1<f64>) -> Result<()> {
        let est = estimate::peak(x, y)?;
        let sigma = est.fwhm / GAUSSIAN_FWHM_FACTOR;
        let area = (est.height * sigma * sqrt_2pi()).max(0.0);

        self.parameters.set_values(&[area, sigma, est.centre])?;
        log::debug!("Gaussian estimate: A = {}, sigma = {}, centre = {}", area, sigma, est.centre);
        Ok(())
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Gaussian {
    fn name(&self) -> &str {
        "Gaussian"
    }

    fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    fn function_at(&self, values: &[f64], x: &Array1<f64>) -> Result<Array1<f64>> {
        check_values(&self.parameters, values)?;
        let (a, sigma, centre) = (values[0], values[1], values[2]);
        let norm = a / (sigma * sqrt_2pi());

        Ok(x.mapv(|v| {
            let arg = (v - centre) / sigma;
            norm * (-0.5 * arg * arg).exp()
        }))
    }

    fn gradient_at(
        &self,
        values: &[f64],
        index: ParamIndex,
        x: &Array1<f64>,
    ) -> Option<Result<Array1<f64>>> {
        if index.get() >= 3 {
            return None;
        }
        if let Err(e) = check_values(&self.parameters, values) {
            return Some(Err(e));
        }
        let (a, sigma, centre) = (values[0], values[1], values[2]);
        let unit = 1.0 / (sigma * sqrt_2pi());

        Some(Ok(x.mapv(|v| {
            let arg = (v - centre) / sigma;
            let shape = unit * (-0.5 * arg * arg).exp();
            match index {
                Self::A => shape,
                Self::SIGMA => a * shape * (arg * arg - 1.0) / sigma,
                _ => a * shape * arg / sigma,
            }
        })))
    }

    fn position(&self) -> Position {
        Position::Parameter(Self::CENTRE)
    }
}

/// A normalised Lorentzian peak.
///
/// The Lorentzian function is defined as:
/// f(x) = A / π * gamma / ((x - centre)² + gamma²)
///
/// `gamma` is the half width at half maximum, so FWHM = 2 * gamma.
#[derive(Debug, Clone, PartialEq)]
pub struct Lorentzian {
    parameters: Parameters,
}

impl Lorentzian {
    const A: ParamIndex = ParamIndex(0);
    const GAMMA: ParamIndex = ParamIndex(1);
    const CENTRE: ParamIndex = ParamIndex(2);

    /// Create a new Lorentzian with `A = 1`, `gamma = 1`, `centre = 0`.
    pub fn new() -> Self {
        Self::with_values(1.0, 1.0, 0.0)
    }

    /// Create a new Lorentzian.
    ///
    /// # Arguments
    ///
    /// * `a` - Area under the peak
    /// * `gamma` - Half width at half maximum
    /// * `centre` - Position of the maximum
    pub fn with_values(a: f64, gamma: f64, centre: f64) -> Self {
        let mut parameters = Parameters::new();
        parameters.declare(Parameter::new("A", a).with_lower_bound(0.0).with_gradient());
        parameters.declare(Parameter::new("gamma", gamma).with_gradient());
        parameters.declare(Parameter::new("centre", centre).with_gradient());

        log::debug!("created Lorentzian (A = {}, gamma = {}, centre = {})", a, gamma, centre);
        Self { parameters }
    }

    /// Full width at half maximum for the current `gamma`.
    pub fn fwhm(&self) -> f64 {
        2.0 * self.parameters.values()[Self::GAMMA.get()]
    }

    /// Set `A`, `gamma` and `centre` from a sampled peak.
    pub fn estimate(&mut self, x: &Array1<f64>, y: &Array1<f64>) -> Result<()> {
        let est = estimate::peak(x, y)?;
        let gamma = est.fwhm / 2.0;
        let area = (est.height * PI * gamma).max(0.0);

        self.parameters.set_values(&[area, gamma, est.centre])?;
        log::debug!("Lorentzian estimate: A = {}, gamma = {}, centre = {}", area, gamma, est.centre);
        Ok(())
    }
}

impl Default for Lorentzian {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Lorentzian {
    fn name(&self) -> &str {
        "Lorentzian"
    }

    fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    fn function_at(&self, values: &[f64], x: &Array1<f64>) -> Result<Array1<f64>> {
        check_values(&self.parameters, values)?;
        let (a, gamma, centre) = (values[0], values[1], values[2]);

        Ok(x.mapv(|v| {
            let dx = v - centre;
            a / PI * gamma / (dx * dx + gamma * gamma)
        }))
    }

    fn gradient_at(
        &self,
        values: &[f64],
        index: ParamIndex,
        x: &Array1<f64>,
    ) -> Option<Result<Array1<f64>>> {
        if index.get() >= 3 {
            return None;
        }
        if let Err(e) = check_values(&self.parameters, values) {
            return Some(Err(e));
        }
        let (a, gamma, centre) = (values[0], values[1], values[2]);

        Some(Ok(x.mapv(|v| {
            let dx = v - centre;
            let denom = dx * dx + gamma * gamma;
            match index {
                Self::A => gamma / (PI * denom),
                Self::GAMMA => a / PI * (dx * dx - gamma * gamma) / (denom * denom),
                _ => a / PI * 2.0 * gamma * dx / (denom * denom),
            }
        })))
    }

    fn position(&self) -> Position {
        Position::Parameter(Self::CENTRE)
    }
}
