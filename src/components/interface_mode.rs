//! Interface-mode intensity of a Drude interface plasmon.
//!
//! ```text
//! y = A * K0(2 * C * |x - x0|)
//! ```
//!
//! The distance enters through its absolute value on every branch, so the K0
//! argument is strictly positive wherever the shape is evaluated, and the
//! amplitude is not negated.

use crate::component::{Component, Position};
use crate::components::mode::LossMode;
use crate::components::plasmon::{Initial, PlasmonShape};
use crate::error::Result;
use crate::parameters::{ParamIndex, Parameters};
use crate::special::bessel_k0;
use ndarray::Array1;

/// Interface-mode intensity component.
///
/// Parameters `A, C, x0`, or `A_left, C_left, A_right, C_right, x0` in the
/// asymmetric mode. Zero at `x = x0` and outside the active side.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceModeIntensity {
    shape: PlasmonShape,
}

impl InterfaceModeIntensity {
    /// Create an interface-mode intensity with `A = C = 1` and `x0 = 0`.
    pub fn new(mode: LossMode) -> Self {
        Self::with_values(mode, 1.0, 1.0, 0.0)
    }

    /// Create an interface-mode intensity with explicit initial values.
    pub fn with_values(mode: LossMode, a: f64, c: f64, x0: f64) -> Self {
        let shape = PlasmonShape::new(mode, false, Initial { a, b: 1.0, c, x0 });
        log::debug!("created InterfaceModeIntensity (mode = {})", mode);
        Self { shape }
    }

    /// Create from a mode string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a string outside
    /// `both, left, right, symmetric, asymmetric`.
    pub fn from_mode_str(mode: &str) -> Result<Self> {
        Ok(Self::new(mode.parse()?))
    }

    pub fn mode(&self) -> LossMode {
        self.shape.mode()
    }

    pub fn x0_index(&self) -> ParamIndex {
        self.shape.x0()
    }
}

impl Component for InterfaceModeIntensity {
    fn name(&self) -> &str {
        "InterfaceModeIntensity"
    }

    fn parameters(&self) -> &Parameters {
        self.shape.parameters()
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        self.shape.parameters_mut()
    }

    fn function_at(&self, values: &[f64], x: &Array1<f64>) -> Result<Array1<f64>> {
        log::trace!("InterfaceModeIntensity::function_at on {} samples", x.len());
        self.shape
            .evaluate(values, x, |t, distance| t.a * bessel_k0(2.0 * t.c * distance))
    }

    fn position(&self) -> Position {
        Position::Parameter(self.shape.x0())
    }
}
