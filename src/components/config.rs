//! Declarative component and model configuration.
//!
//! A [`ComponentConfig`] names a component kind and its initial values. It is
//! usually read from JSON:
//!
//! ```json
//! { "kind": "boundary_loss", "mode": "asymmetric", "A": 2.0, "x0": 10.5 }
//! ```
//!
//! Omitted values take the component's constructor defaults.

use crate::component::Component;
use crate::components::{
    BoundaryLoss, Gaussian, GaussianCdf, InterfaceModeIntensity, LossMode, Lorentzian,
    LorentzianCdf, Ramp,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};

fn one() -> f64 {
    1.0
}

fn both() -> String {
    "both".to_string()
}

/// Configuration of a single component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentConfig {
    BoundaryLoss {
        #[serde(default = "both")]
        mode: String,
        #[serde(rename = "A", default = "one")]
        a: f64,
        #[serde(rename = "B", default = "one")]
        b: f64,
        #[serde(rename = "C", default = "one")]
        c: f64,
        #[serde(default)]
        x0: f64,
    },
    InterfaceModeIntensity {
        #[serde(default = "both")]
        mode: String,
        #[serde(rename = "A", default = "one")]
        a: f64,
        #[serde(rename = "C", default = "one")]
        c: f64,
        #[serde(default)]
        x0: f64,
    },
    GaussianCdf {
        #[serde(rename = "A", default = "one")]
        a: f64,
        #[serde(default = "one")]
        sigma: f64,
        #[serde(default)]
        origin: f64,
    },
    LorentzianCdf {
        #[serde(rename = "A", default = "one")]
        a: f64,
        #[serde(default = "one")]
        gamma: f64,
        #[serde(default = "one")]
        centre: f64,
    },
    Ramp {
        #[serde(default = "one")]
        m: f64,
        #[serde(default)]
        x0: f64,
    },
    Gaussian {
        #[serde(rename = "A", default = "one")]
        a: f64,
        #[serde(default = "one")]
        sigma: f64,
        #[serde(default)]
        centre: f64,
    },
    Lorentzian {
        #[serde(rename = "A", default = "one")]
        a: f64,
        #[serde(default = "one")]
        gamma: f64,
        #[serde(default)]
        centre: f64,
    },
}

impl ComponentConfig {
    /// Build the configured component.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for an unknown `mode` string.
    pub fn build(&self) -> Result<Box<dyn Component>> {
        let component: Box<dyn Component> = match self {
            ComponentConfig::BoundaryLoss { mode, a, b, c, x0 } => {
                let mode: LossMode = mode.parse()?;
                Box::new(BoundaryLoss::with_values(mode, *a, *b, *c, *x0))
            }
            ComponentConfig::InterfaceModeIntensity { mode, a, c, x0 } => {
                let mode: LossMode = mode.parse()?;
                Box::new(InterfaceModeIntensity::with_values(mode, *a, *c, *x0))
            }
            ComponentConfig::GaussianCdf { a, sigma, origin } => {
                Box::new(GaussianCdf::with_values(*a, *sigma, *origin))
            }
            ComponentConfig::LorentzianCdf { a, gamma, centre } => {
                Box::new(LorentzianCdf::with_values(*a, *gamma, *centre))
            }
            ComponentConfig::Ramp { m, x0 } => Box::new(Ramp::with_values(*m, *x0)),
            ComponentConfig::Gaussian { a, sigma, centre } => {
                Box::new(Gaussian::with_values(*a, *sigma, *centre))
            }
            ComponentConfig::Lorentzian { a, gamma, centre } => {
                Box::new(Lorentzian::with_values(*a, *gamma, *centre))
            }
        };
        Ok(component)
    }

    /// Parse a single component configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One entry of a [`ModelConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryConfig {
    /// Name of the entry in the model; defaults to the component name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(flatten)]
    pub component: ComponentConfig,
}

fn default_active() -> bool {
    true
}

impl From<ComponentConfig> for EntryConfig {
    fn from(component: ComponentConfig) -> Self {
        Self {
            name: None,
            active: true,
            component,
        }
    }
}

/// Configuration of a summed model, in component order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub components: Vec<EntryConfig>,
}

impl ModelConfig {
    /// Parse a model configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
