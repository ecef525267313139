//! Parameter definition and implementation
//!
//! A [`Parameter`] is one named scalar fit variable of a component. Its value is
//! mutated in place by the fitting engine between iterations; the component
//! only reads it.

use crate::parameters::bounds::{Bounds, BoundsError};
use serde::{Deserialize, Serialize};

/// A named fit variable with optional bounds
///
/// Bounds are declarative: [`Parameter::set_value`] accepts any value and it is
/// up to the fitting engine to respect [`Parameter::bounds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Name of the parameter
    name: String,

    /// Current value of the parameter
    value: f64,

    /// Value at construction (for reset operations)
    init_value: f64,

    /// Whether this parameter is free during fitting
    #[serde(default = "default_vary")]
    vary: bool,

    /// Minimum and maximum bounds for the parameter value
    #[serde(default)]
    bounds: Bounds,

    /// Standard error of the parameter (set after fitting)
    #[serde(default)]
    stderr: Option<f64>,

    /// Whether the owning component provides an analytic partial derivative
    #[serde(default)]
    gradient_available: bool,
}

fn default_vary() -> bool {
    true
}

impl Parameter {
    /// Create a new unbounded, free parameter
    ///
    /// # Examples
    ///
    /// ```
    /// use specfit_rs::parameters::parameter::Parameter;
    ///
    /// let param = Parameter::new("A", 10.0);
    /// assert_eq!(param.name(), "A");
    /// assert_eq!(param.value(), 10.0);
    /// assert!(param.vary());
    /// assert_eq!(param.lower_bound(), None);
    /// ```
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
            init_value: value,
            vary: true,
            bounds: Bounds::default(),
            stderr: None,
            gradient_available: false,
        }
    }

    /// Create a new parameter with the given name, value, and bounds
    ///
    /// The value is stored as given, even when it lies outside the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::InvalidBounds`] if `min > max`.
    pub fn with_bounds(name: &str, value: f64, min: f64, max: f64) -> Result<Self, BoundsError> {
        let mut param = Self::new(name, value);
        param.bounds = Bounds::new(min, max)?;
        Ok(param)
    }

    /// Builder-style marker that an analytic gradient exists for this parameter
    pub fn with_gradient(mut self) -> Self {
        self.gradient_available = true;
        self
    }

    /// Builder-style lower bound with no upper bound
    ///
    /// # Examples
    ///
    /// ```
    /// use specfit_rs::parameters::parameter::Parameter;
    ///
    /// let area = Parameter::new("A", 1.0).with_lower_bound(0.0);
    /// assert_eq!(area.lower_bound(), Some(0.0));
    /// assert_eq!(area.upper_bound(), None);
    /// ```
    pub fn with_lower_bound(mut self, min: f64) -> Self {
        self.bounds = Bounds::min_only(min);
        self
    }

    /// Get the name of the parameter
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current value of the parameter
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value of the parameter
    ///
    /// No bounds check is performed here.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Get the value the parameter was created with
    pub fn init_value(&self) -> f64 {
        self.init_value
    }

    /// Reset the parameter to its initial value
    pub fn reset(&mut self) {
        self.value = self.init_value;
    }

    /// Check if the parameter is varied during fitting
    pub fn vary(&self) -> bool {
        self.vary
    }

    /// Set whether the parameter is varied during fitting
    pub fn set_vary(&mut self, vary: bool) {
        self.vary = vary;
    }

    /// Get the bounds of the parameter
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The lower bound, `None` when unbounded below
    pub fn lower_bound(&self) -> Option<f64> {
        self.bounds.lower()
    }

    /// The upper bound, `None` when unbounded above
    pub fn upper_bound(&self) -> Option<f64> {
        self.bounds.upper()
    }

    /// Set both bounds, `None` meaning unbounded on that side
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::InvalidBounds`] if both are set and `min > max`.
    /// The previous bounds are kept in that case.
    pub fn set_bounds(&mut self, min: Option<f64>, max: Option<f64>) -> Result<(), BoundsError> {
        self.bounds = Bounds::from_options(min, max)?;
        Ok(())
    }

    /// Set the lower bound, keeping the upper one
    pub fn set_lower_bound(&mut self, min: Option<f64>) -> Result<(), BoundsError> {
        self.set_bounds(min, self.upper_bound())
    }

    /// Set the upper bound, keeping the lower one
    pub fn set_upper_bound(&mut self, max: Option<f64>) -> Result<(), BoundsError> {
        self.set_bounds(self.lower_bound(), max)
    }

    /// Whether the current value satisfies the declared bounds
    pub fn is_within_bounds(&self) -> bool {
        self.bounds.is_within_bounds(self.value)
    }

    /// The current value clamped into the declared bounds
    pub fn clamped_value(&self) -> f64 {
        self.bounds.clamp(self.value)
    }

    /// Get the standard error of the parameter (if available)
    pub fn stderr(&self) -> Option<f64> {
        self.stderr
    }

    /// Set the standard error of the parameter
    pub fn set_stderr(&mut self, stderr: Option<f64>) {
        self.stderr = stderr;
    }

    /// Whether the owning component exposes an analytic partial derivative
    pub fn gradient_available(&self) -> bool {
        self.gradient_available
    }
}
