//! Cumulative distribution function of a Gaussian.

use crate::component::{check_values, Component, ComponentFlags, Position};
use crate::components::estimate;
use crate::components::peak::Gaussian;
use crate::error::Result;
use crate::parameters::{ParamIndex, Parameter, Parameters};
use crate::special::erf;
use ndarray::Array1;
use std::f64::consts::{PI, SQRT_2};

/// Gaussian CDF component.
///
/// ```text
/// y = A / 2 * (1 + erf((x - origin) / (sigma * sqrt(2))))
/// ```
///
/// `A >= 0` is declared as a lower bound and left to the fitting engine.
/// `sigma = 0` is not guarded. All three parameters have analytic gradients;
/// the `origin` gradient is the Gaussian density, [`GaussianCdf::gaussian`].
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use specfit_rs::component::Component;
/// use specfit_rs::components::GaussianCdf;
///
/// let cdf = GaussianCdf::with_values(2.0, 1.0, 0.0);
/// let y = cdf.function(&array![0.0]).unwrap();
/// assert!((y[0] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianCdf {
    parameters: Parameters,
}

impl GaussianCdf {
    const A: ParamIndex = ParamIndex(0);
    const SIGMA: ParamIndex = ParamIndex(1);
    const ORIGIN: ParamIndex = ParamIndex(2);

    /// Create a Gaussian CDF with `A = 1`, `sigma = 1`, `origin = 0`.
    pub fn new() -> Self {
        Self::with_values(1.0, 1.0, 0.0)
    }

    /// Create a Gaussian CDF with explicit initial values.
    ///
    /// # Arguments
    ///
    /// * `a` - Step height
    /// * `sigma` - Width of the underlying Gaussian
    /// * `origin` - Position of the half-height point
    pub fn with_values(a: f64, sigma: f64, origin: f64) -> Self {
        let mut parameters = Parameters::new();
        parameters.declare(Parameter::new("A", a).with_lower_bound(0.0).with_gradient());
        parameters.declare(Parameter::new("sigma", sigma).with_gradient());
        parameters.declare(Parameter::new("origin", origin).with_gradient());

        log::debug!("created GaussianCdf (A = {}, sigma = {}, origin = {})", a, sigma, origin);
        Self { parameters }
    }

    /// The Gaussian density whose integral this component is, evaluated with
    /// the current parameter values.
    pub fn gaussian(&self, x: &Array1<f64>) -> Array1<f64> {
        gaussian_density(&self.parameters.values(), x)
    }

    /// A [`Gaussian`] density component with the current `A`, `sigma` and
    /// `origin` (as its `centre`).
    pub fn as_gaussian(&self) -> Gaussian {
        let v = self.parameters.values();
        Gaussian::with_values(v[Self::A.get()], v[Self::SIGMA.get()], v[Self::ORIGIN.get()])
    }

    /// Set `A`, `sigma` and `origin` from a sampled rising edge.
    ///
    /// `A` is the largest sample, `origin` the half-height crossing, and
    /// `sigma` half the distance between the 15.87% and 84.13% crossings.
    pub fn estimate(&mut self, x: &Array1<f64>, y: &Array1<f64>) -> Result<()> {
        let est = estimate::step(x, y)?;
        let sigma = estimate::step_half_width(x, y, est.height, 0.158_655_253_931_457, 0.841_344_746_068_543);

        self.parameters.set_values(&[est.height.max(0.0), sigma, est.position])?;
        log::debug!("GaussianCdf estimate: A = {}, sigma = {}, origin = {}", est.height, sigma, est.position);
        Ok(())
    }
}

impl Default for GaussianCdf {
    fn default() -> Self {
        Self::new()
    }
}

fn gaussian_density(values: &[f64], x: &Array1<f64>) -> Array1<f64> {
    let (a, sigma, origin) = (values[0], values[1], values[2]);
    let norm = a / ((2.0 * PI).sqrt() * sigma);
    x.mapv(|v| {
        let arg = (v - origin) / sigma;
        norm * (-arg * arg / 2.0).exp()
    })
}

impl Component for GaussianCdf {
    fn name(&self) -> &str {
        "GaussianCDF"
    }

    fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    fn function_at(&self, values: &[f64], x: &Array1<f64>) -> Result<Array1<f64>> {
        check_values(&self.parameters, values)?;
        log::trace!("GaussianCdf::function_at on {} samples", x.len());
        let (a, sigma, origin) = (values[0], values[1], values[2]);

        Ok(x.mapv(|v| a / 2.0 * (1.0 + erf((v - origin) / SQRT_2 / sigma))))
    }

    fn gradient_at(
        &self,
        values: &[f64],
        index: ParamIndex,
        x: &Array1<f64>,
    ) -> Option<Result<Array1<f64>>> {
        let (sigma, origin) = match check_values(&self.parameters, values) {
            Ok(()) => (values[1], values[2]),
            Err(e) => return Some(Err(e)),
        };

        let gradient = match index {
            Self::A => x.mapv(|v| 0.5 * (1.0 + erf((v - origin) / SQRT_2 / sigma))),
            Self::SIGMA => {
                let density = gaussian_density(values, x);
                ndarray::Zip::from(x)
                    .and(&density)
                    .map_collect(|&v, &d| -(v - origin) / sigma * d)
            }
            // Reported as the density itself, the slope of the step in `x`
            Self::ORIGIN => gaussian_density(values, x),
            _ => return None,
        };
        Some(Ok(gradient))
    }

    fn flags(&self) -> ComponentFlags {
        ComponentFlags::SIGNAL
    }

    fn position(&self) -> Position {
        Position::Parameter(Self::ORIGIN)
    }
}
