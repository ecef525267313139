//! Cumulative distribution function of a Lorentzian (arctan step).

use crate::component::{check_values, Component, ComponentFlags, Position};
use crate::components::estimate;
use crate::components::peak::Lorentzian;
use crate::error::Result;
use crate::parameters::{ParamIndex, Parameter, Parameters};
use ndarray::{Array1, Zip};
use std::f64::consts::PI;

/// Lorentzian CDF component.
///
/// ```text
/// y = A * (atan((x - centre) / gamma) / π + 1/2)
/// ```
///
/// Neither a background component nor convolved. `gamma = 0` is not guarded.
#[derive(Debug, Clone, PartialEq)]
pub struct LorentzianCdf {
    parameters: Parameters,
}

impl LorentzianCdf {
    const A: ParamIndex = ParamIndex(0);
    const GAMMA: ParamIndex = ParamIndex(1);
    const CENTRE: ParamIndex = ParamIndex(2);

    /// Create a Lorentzian CDF with `A = 1`, `gamma = 1`, `centre = 1`.
    pub fn new() -> Self {
        Self::with_values(1.0, 1.0, 1.0)
    }

    /// Create a Lorentzian CDF with explicit initial values.
    ///
    /// # Arguments
    ///
    /// * `a` - Step height
    /// * `gamma` - Half width of the underlying Lorentzian
    /// * `centre` - Position of the half-height point
    pub fn with_values(a: f64, gamma: f64, centre: f64) -> Self {
        let mut parameters = Parameters::new();
        parameters.declare(Parameter::new("A", a).with_gradient());
        parameters.declare(Parameter::new("gamma", gamma).with_gradient());
        parameters.declare(Parameter::new("centre", centre).with_gradient());

        log::debug!("created LorentzianCdf (A = {}, gamma = {}, centre = {})", a, gamma, centre);
        Self { parameters }
    }

    /// The Lorentzian density `A/π · γ / ((x − centre)² + γ²)` for the current
    /// parameter values.
    pub fn lorentzian(&self, x: &Array1<f64>) -> Array1<f64> {
        lorentzian_density(&self.parameters.values(), x)
    }

    /// A [`Lorentzian`] density component with the current parameter values.
    pub fn as_lorentzian(&self) -> Lorentzian {
        let v = self.parameters.values();
        Lorentzian::with_values(v[Self::A.get()], v[Self::GAMMA.get()], v[Self::CENTRE.get()])
    }

    /// Set `A`, `gamma` and `centre` from a sampled rising edge.
    ///
    /// `gamma` is half the distance between the 25% and 75% crossings.
    pub fn estimate(&mut self, x: &Array1<f64>, y: &Array1<f64>) -> Result<()> {
        let est = estimate::step(x, y)?;
        let gamma = estimate::step_half_width(x, y, est.height, 0.25, 0.75);

        self.parameters.set_values(&[est.height, gamma, est.position])?;
        log::debug!(
            "LorentzianCdf estimate: A = {}, gamma = {}, centre = {}",
            est.height,
            gamma,
            est.position
        );
        Ok(())
    }
}

impl Default for LorentzianCdf {
    fn default() -> Self {
        Self::new()
    }
}

fn lorentzian_density(values: &[f64], x: &Array1<f64>) -> Array1<f64> {
    let (a, gamma, centre) = (values[0], values[1], values[2]);
    x.mapv(|v| a / PI * (gamma / ((v - centre).powi(2) + gamma * gamma)))
}

impl Component for LorentzianCdf {
    fn name(&self) -> &str {
        "LorentzianCDF"
    }

    fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    fn function_at(&self, values: &[f64], x: &Array1<f64>) -> Result<Array1<f64>> {
        check_values(&self.parameters, values)?;
        log::trace!("LorentzianCdf::function_at on {} samples", x.len());
        let (a, gamma, centre) = (values[0], values[1], values[2]);

        Ok(x.mapv(|v| a * (((v - centre) / gamma).atan() / PI + 0.5)))
    }

    /// The derivatives with respect to `gamma` and `centre` are written in
    /// terms of the density, recomputed from `values` on every call.
    fn gradient_at(
        &self,
        values: &[f64],
        index: ParamIndex,
        x: &Array1<f64>,
    ) -> Option<Result<Array1<f64>>> {
        if let Err(e) = check_values(&self.parameters, values) {
            return Some(Err(e));
        }
        let (gamma, centre) = (values[1], values[2]);

        let gradient = match index {
            Self::A => x.mapv(|v| ((v - centre) / gamma).atan() / PI + 0.5),
            Self::GAMMA => {
                let density = lorentzian_density(values, x);
                Zip::from(x)
                    .and(&density)
                    .map_collect(|&v, &d| -(v - centre) / gamma * d)
            }
            Self::CENTRE => -lorentzian_density(values, x),
            _ => return None,
        };
        Some(Ok(gradient))
    }

    fn flags(&self) -> ComponentFlags {
        ComponentFlags::new(false, false)
    }

    fn position(&self) -> Position {
        Position::Parameter(Self::CENTRE)
    }
}
