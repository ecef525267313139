//! Element-wise selection helpers for piecewise component shapes.
//!
//! Components build a boolean mask from comparisons against a boundary
//! (for example `x < x0`) and pick values from branch arrays. Comparisons
//! involving NaN are false, so a NaN sample falls through to the `otherwise`
//! branch of every mask.

use crate::error::{Result, SpecFitError};
use ndarray::{Array1, Zip};

/// Build a mask by applying `predicate` to every sample.
pub fn mask<F>(x: &Array1<f64>, predicate: F) -> Array1<bool>
where
    F: Fn(f64) -> bool,
{
    x.mapv(predicate)
}

/// Pick `then[i]` where `mask[i]` holds and `otherwise[i]` elsewhere.
///
/// # Errors
///
/// Returns [`SpecFitError::ShapeMismatch`] if the three arrays do not share a
/// length. Nothing is broadcast.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use specfit_rs::piecewise::select;
///
/// let mask = array![true, false, true];
/// let y = select(&mask, &array![1.0, 2.0, 3.0], &array![-1.0, -2.0, -3.0]).unwrap();
/// assert_eq!(y, array![1.0, -2.0, 3.0]);
///
/// assert!(select(&mask, &array![1.0], &array![0.0, 0.0, 0.0]).is_err());
/// ```
pub fn select(
    mask: &Array1<bool>,
    then: &Array1<f64>,
    otherwise: &Array1<f64>,
) -> Result<Array1<f64>> {
    check_len("select (then branch)", mask.len(), then.len())?;
    check_len("select (otherwise branch)", mask.len(), otherwise.len())?;

    Ok(Zip::from(mask)
        .and(then)
        .and(otherwise)
        .map_collect(|&m, &a, &b| if m { a } else { b }))
}

/// Pick `then[i]` where `mask[i]` holds and the scalar `otherwise` elsewhere.
pub fn select_or(mask: &Array1<bool>, then: &Array1<f64>, otherwise: f64) -> Result<Array1<f64>> {
    check_len("select_or (then branch)", mask.len(), then.len())?;

    Ok(Zip::from(mask)
        .and(then)
        .map_collect(|&m, &a| if m { a } else { otherwise }))
}

fn check_len(context: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(SpecFitError::shape_mismatch(context, expected, actual));
    }
    Ok(())
}
