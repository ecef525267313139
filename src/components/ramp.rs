//! Heaviside-gated linear ramp background.

use crate::component::{check_values, Component, ComponentFlags, Position};
use crate::error::Result;
use crate::parameters::{ParamIndex, Parameter, Parameters};
use crate::piecewise::{mask, select, select_or};
use ndarray::Array1;

/// Ramp component: `y = m * (x - x0) * H(x - x0)`.
///
/// Zero below `x0`, linear from `x0` on. A background component that is not
/// convolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    parameters: Parameters,
}

impl Ramp {
    const M: ParamIndex = ParamIndex(0);
    const X0: ParamIndex = ParamIndex(1);

    /// Create a ramp with slope `m = 1` starting at `x0 = 0`.
    pub fn new() -> Self {
        Self::with_values(1.0, 0.0)
    }

    /// Create a ramp with explicit slope and start.
    pub fn with_values(m: f64, x0: f64) -> Self {
        let mut parameters = Parameters::new();
        parameters.declare(Parameter::new("m", m).with_gradient());
        parameters.declare(Parameter::new("x0", x0).with_gradient());

        log::debug!("created Ramp (m = {}, x0 = {})", m, x0);
        Self { parameters }
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Ramp {
    fn name(&self) -> &str {
        "Ramp"
    }

    fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    fn function_at(&self, values: &[f64], x: &Array1<f64>) -> Result<Array1<f64>> {
        check_values(&self.parameters, values)?;
        let (m, x0) = (values[0], values[1]);

        let below = mask(x, |v| v < x0);
        let rising = x.mapv(|v| m * (v - x0));
        select(&below, &Array1::zeros(x.len()), &rising)
    }

    /// `∂y/∂x0` is `-m/2` exactly at `x0`, halfway across the kink.
    fn gradient_at(
        &self,
        values: &[f64],
        index: ParamIndex,
        x: &Array1<f64>,
    ) -> Option<Result<Array1<f64>>> {
        if let Err(e) = check_values(&self.parameters, values) {
            return Some(Err(e));
        }
        let (m, x0) = (values[0], values[1]);
        let below = mask(x, |v| v < x0);

        let gradient = match index {
            Self::M => select(&below, &Array1::zeros(x.len()), &x.mapv(|v| v - x0)),
            Self::X0 => select_or(&mask(x, |v| v == x0), &Array1::from_elem(x.len(), -0.5 * m), -m)
                .and_then(|at_or_above| select(&below, &Array1::zeros(x.len()), &at_or_above)),
            _ => return None,
        };
        Some(gradient)
    }

    fn flags(&self) -> ComponentFlags {
        ComponentFlags::BACKGROUND
    }

    fn position(&self) -> Position {
        Position::Parameter(Self::X0)
    }
}
