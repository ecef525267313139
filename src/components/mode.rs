//! Branching configuration of the plasmon-loss components.
//!
//! The configuration is chosen once at construction. Parsing accepts the
//! closed sets `{both, left, right}` and `{symmetric, asymmetric}`,
//! case-insensitively.

use crate::error::{Result, SpecFitError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of `x0` a single-triple shape is evaluated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Everywhere except exactly at `x0`
    Both,
    /// Strictly below `x0`
    Left,
    /// Strictly above `x0`
    Right,
}

/// Whether the two sides of `x0` share one parameter triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symmetry {
    Symmetric,
    Asymmetric,
}

/// Full branching configuration: a side restriction or a symmetry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LossMode {
    Side(Side),
    Symmetry(Symmetry),
}

impl LossMode {
    /// Whether the component carries separate left and right triples.
    pub fn is_asymmetric(self) -> bool {
        matches!(self, LossMode::Symmetry(Symmetry::Asymmetric))
    }
}

impl Default for LossMode {
    fn default() -> Self {
        LossMode::Side(Side::Both)
    }
}

impl FromStr for Side {
    type Err = SpecFitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_side(s).ok_or_else(|| invalid("side", s, "both, left, right"))
    }
}

impl FromStr for Symmetry {
    type Err = SpecFitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_symmetry(s).ok_or_else(|| invalid("symmetry", s, "symmetric, asymmetric"))
    }
}

impl FromStr for LossMode {
    type Err = SpecFitError;

    /// Parses any of `both`, `left`, `right`, `symmetric`, `asymmetric`.
    ///
    /// # Examples
    ///
    /// ```
    /// use specfit_rs::components::{LossMode, Side, Symmetry};
    ///
    /// assert_eq!("Both".parse::<LossMode>().unwrap(), LossMode::Side(Side::Both));
    /// assert_eq!(
    ///     "asymmetric".parse::<LossMode>().unwrap(),
    ///     LossMode::Symmetry(Symmetry::Asymmetric)
    /// );
    /// assert!("middle".parse::<LossMode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        if let Some(side) = parse_side(s) {
            return Ok(LossMode::Side(side));
        }
        if let Some(symmetry) = parse_symmetry(s) {
            return Ok(LossMode::Symmetry(symmetry));
        }
        Err(invalid(
            "mode",
            s,
            "both, left, right, symmetric, asymmetric",
        ))
    }
}

fn parse_side(s: &str) -> Option<Side> {
    match s.trim().to_ascii_lowercase().as_str() {
        "both" => Some(Side::Both),
        "left" => Some(Side::Left),
        "right" => Some(Side::Right),
        _ => None,
    }
}

fn parse_symmetry(s: &str) -> Option<Symmetry> {
    match s.trim().to_ascii_lowercase().as_str() {
        "symmetric" => Some(Symmetry::Symmetric),
        "asymmetric" => Some(Symmetry::Asymmetric),
        _ => None,
    }
}

fn invalid(what: &str, got: &str, accepted: &str) -> SpecFitError {
    log::warn!("rejected {} '{}' (accepted: {})", what, got, accepted);
    SpecFitError::InvalidConfiguration(format!(
        "unknown {} '{}', expected one of: {}",
        what, got, accepted
    ))
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::Both => "both",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Symmetry::Symmetric => "symmetric",
            Symmetry::Asymmetric => "asymmetric",
        };
        f.write_str(s)
    }
}

impl fmt::Display for LossMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossMode::Side(side) => side.fmt(f),
            LossMode::Symmetry(symmetry) => symmetry.fmt(f),
        }
    }
}

impl TryFrom<String> for LossMode {
    type Error = SpecFitError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<LossMode> for String {
    fn from(mode: LossMode) -> Self {
        mode.to_string()
    }
}
