//! Initial-value estimation from sampled data.
//!
//! Peak shapes read their height and centre off the maximum sample and their
//! width off the half-height crossings; step shapes read their position and
//! width off level crossings of the rising edge.

use crate::error::{Result, SpecFitError};
use ndarray::Array1;

/// Rough characteristics of a single peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PeakEstimate {
    pub height: f64,
    pub centre: f64,
    pub fwhm: f64,
}

/// Rough characteristics of a rising step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct StepEstimate {
    pub height: f64,
    pub position: f64,
}

/// Checks that `x` and `y` are non-empty and of equal length.
pub(crate) fn check_data(x: &Array1<f64>, y: &Array1<f64>) -> Result<()> {
    if x.len() != y.len() {
        return Err(SpecFitError::shape_mismatch("estimate (y data)", x.len(), y.len()));
    }
    if x.is_empty() {
        return Err(SpecFitError::InvalidConfiguration(
            "cannot estimate parameters from empty data".to_string(),
        ));
    }
    Ok(())
}

/// Fallback width when no crossing is found: a fifth of the sampled span.
fn fallback_width(x: &Array1<f64>) -> f64 {
    let span = (x[x.len() - 1] - x[0]).abs() / 5.0;
    if span > 0.0 {
        span
    } else {
        1.0
    }
}

/// Estimate height, centre and FWHM of the dominant peak in `y`.
pub(crate) fn peak(x: &Array1<f64>, y: &Array1<f64>) -> Result<PeakEstimate> {
    check_data(x, y)?;

    let (max_idx, max_y) = y
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .fold((0, f64::NEG_INFINITY), |best, (i, v)| if v > best.1 { (i, v) } else { best });
    if !max_y.is_finite() {
        return Err(SpecFitError::InvalidConfiguration(
            "cannot estimate parameters: no finite samples".to_string(),
        ));
    }

    let half_height = max_y / 2.0;

    let mut left_idx = max_idx;
    while left_idx > 0 && y[left_idx] > half_height {
        left_idx -= 1;
    }

    let mut right_idx = max_idx;
    while right_idx < y.len() - 1 && y[right_idx] > half_height {
        right_idx += 1;
    }

    let fwhm = if left_idx < right_idx {
        (x[right_idx] - x[left_idx]).abs()
    } else {
        fallback_width(x)
    };

    Ok(PeakEstimate {
        height: max_y,
        centre: x[max_idx],
        fwhm,
    })
}

/// First `x` at which `y` rises through `level`, linearly interpolated.
pub(crate) fn crossing(x: &Array1<f64>, y: &Array1<f64>, level: f64) -> Option<f64> {
    (0..y.len().saturating_sub(1)).find_map(|i| {
        let (y0, y1) = (y[i], y[i + 1]);
        if y0 <= level && level <= y1 && y0 < y1 {
            let t = (level - y0) / (y1 - y0);
            Some(x[i] + t * (x[i + 1] - x[i]))
        } else if y0 == level {
            Some(x[i])
        } else {
            None
        }
    })
}

/// Estimate height and half-height position of a rising step.
pub(crate) fn step(x: &Array1<f64>, y: &Array1<f64>) -> Result<StepEstimate> {
    check_data(x, y)?;

    let height = y
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if !height.is_finite() {
        return Err(SpecFitError::InvalidConfiguration(
            "cannot estimate parameters: no finite samples".to_string(),
        ));
    }

    let position = crossing(x, y, height / 2.0).unwrap_or(x[x.len() / 2]);
    Ok(StepEstimate { height, position })
}

/// Half the distance between the rising crossings of `lower * height` and
/// `upper * height`, or the fallback width if either is missing.
pub(crate) fn step_half_width(
    x: &Array1<f64>,
    y: &Array1<f64>,
    height: f64,
    lower: f64,
    upper: f64,
) -> f64 {
    match (crossing(x, y, lower * height), crossing(x, y, upper * height)) {
        (Some(a), Some(b)) if b > a => (b - a) / 2.0,
        _ => fallback_width(x),
    }
}
