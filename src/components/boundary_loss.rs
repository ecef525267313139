//! Drude interface-plasmon boundary ("Begrenzungs") loss.
//!
//! Energy loss of a beam travelling parallel to an interface, as a function of
//! the beam position `x` relative to the interface at `x0`:
//!
//! ```text
//! y = A * (ln(1/B) - K0(2 * C * |x - x0|))
//! ```
//!
//! with `A = I * Im(1/eps)`, `B = k_y,max * v / omega` and `C = omega / v`.
//! See Wang, Z.L., Micron 27 (1996) 265-299, doi:10.1016/0968-4328(96)00011-X.

use crate::component::{Component, Position};
use crate::components::mode::LossMode;
use crate::components::plasmon::{Initial, PlasmonShape};
use crate::error::Result;
use crate::parameters::{ParamIndex, Parameters};
use crate::special::bessel_k0;
use ndarray::Array1;

/// Boundary loss component.
///
/// Parameters `A, B, C, x0` for single-triple modes and
/// `A_left, B_left, C_left, A_right, B_right, C_right, x0` for the asymmetric
/// mode. The output is exactly zero at `x = x0` and outside the active side.
///
/// `B <= 0` and the like are not guarded: the logarithm yields NaN/inf and
/// that value is returned as-is. No analytic gradient is provided.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use specfit_rs::component::Component;
/// use specfit_rs::components::BoundaryLoss;
///
/// let loss = BoundaryLoss::from_mode_str("left").unwrap();
/// let y = loss.function(&array![-1.0, 0.0, 1.0]).unwrap();
/// assert!(y[0] < 0.0);
/// assert_eq!(y[1], 0.0);
/// assert_eq!(y[2], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLoss {
    shape: PlasmonShape,
}

impl BoundaryLoss {
    /// Create a boundary loss with `A = B = C = 1` and `x0 = 0`.
    pub fn new(mode: LossMode) -> Self {
        Self::with_values(mode, 1.0, 1.0, 1.0, 0.0)
    }

    /// Create a boundary loss with explicit initial values. In the asymmetric
    /// mode both triples start from the same values.
    pub fn with_values(mode: LossMode, a: f64, b: f64, c: f64, x0: f64) -> Self {
        let shape = PlasmonShape::new(mode, true, Initial { a, b, c, x0 });
        log::debug!("created BoundaryLoss (mode = {})", mode);
        Self { shape }
    }

    /// Create a boundary loss from a mode string
    /// (`both`, `left`, `right`, `symmetric` or `asymmetric`).
    ///
    /// # Errors
    ///
    /// Returns [`SpecFitError::InvalidConfiguration`](crate::error::SpecFitError::InvalidConfiguration)
    /// for any other string; no component is built in that case.
    pub fn from_mode_str(mode: &str) -> Result<Self> {
        Ok(Self::new(mode.parse()?))
    }

    /// The branching configuration chosen at construction
    pub fn mode(&self) -> LossMode {
        self.shape.mode()
    }

    /// Index of the interface position parameter `x0`
    pub fn x0_index(&self) -> ParamIndex {
        self.shape.x0()
    }
}

impl Component for BoundaryLoss {
    fn name(&self) -> &str {
        "BoundaryLoss"
    }

    fn parameters(&self) -> &Parameters {
        self.shape.parameters()
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        self.shape.parameters_mut()
    }

    fn function_at(&self, values: &[f64], x: &Array1<f64>) -> Result<Array1<f64>> {
        log::trace!("BoundaryLoss::function_at on {} samples", x.len());
        self.shape.evaluate(values, x, |t, distance| {
            t.a * ((1.0 / t.b).ln() - bessel_k0(2.0 * t.c * distance))
        })
    }

    fn position(&self) -> Position {
        Position::Parameter(self.shape.x0())
    }
}
