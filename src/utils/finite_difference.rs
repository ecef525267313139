//! Finite difference methods for numerical differentiation.
//!
//! Components without a closed-form gradient (the Bessel-based plasmon shapes)
//! are differentiated here. The same routines are used in tests to check the
//! analytic gradients of the other components.

use crate::error::{Result, SpecFitError};
use ndarray::Array1;

/// Default relative step size for central differences.
const DEFAULT_EPSILON: f64 = 1e-6;

/// Step used for a parameter of the given magnitude.
fn step_for(value: f64, eps: f64) -> f64 {
    // Adapt epsilon to parameter scale
    if value.abs() > 1.0 {
        value.abs() * eps
    } else {
        eps
    }
}

/// Partial derivative of a vector-valued function of a parameter snapshot,
/// using central finite differences.
///
/// # Arguments
///
/// * `f` - Maps a parameter snapshot to an output array
/// * `values` - The parameter snapshot at which to differentiate
/// * `index` - Which parameter to perturb
/// * `epsilon` - The step size for finite differences (optional)
///
/// # Returns
///
/// * `Result<Array1<f64>>` - `∂f/∂values[index]` at every output element
pub fn partial_derivative<F>(
    f: F,
    values: &[f64],
    index: usize,
    epsilon: Option<f64>,
) -> Result<Array1<f64>>
where
    F: Fn(&[f64]) -> Result<Array1<f64>>,
{
    if index >= values.len() {
        return Err(SpecFitError::shape_mismatch(
            "partial_derivative index",
            values.len(),
            index + 1,
        ));
    }

    let eps_j = step_for(values[index], epsilon.unwrap_or(DEFAULT_EPSILON));

    let mut forward = values.to_vec();
    forward[index] += eps_j;
    let mut backward = values.to_vec();
    backward[index] -= eps_j;

    let f_forward = f(&forward)?;
    let f_backward = f(&backward)?;

    if f_forward.len() != f_backward.len() {
        return Err(SpecFitError::shape_mismatch(
            "partial_derivative output",
            f_forward.len(),
            f_backward.len(),
        ));
    }

    Ok((f_forward - f_backward) / (2.0 * eps_j))
}

/// Derivative of a scalar function of one variable, using central differences.
pub fn derivative<F>(f: F, x: f64, epsilon: Option<f64>) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = step_for(x, epsilon.unwrap_or(DEFAULT_EPSILON));
    (f(x + h) - f(x - h)) / (2.0 * h)
}
