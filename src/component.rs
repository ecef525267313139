//! The component contract shared by every basis function.
//!
//! A component owns an ordered [`Parameters`] table and maps a sample grid `x`
//! to an output of the same length. Evaluation is a pure function of a
//! parameter snapshot (`function_at`), so the fitting engine can evaluate a
//! perturbed parameter vector without mutating the component.

use crate::error::{Result, SpecFitError};
use crate::parameters::{ParamIndex, Parameters};
use crate::utils::finite_difference;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Flags read by the fitting engine when assembling a summed model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentFlags {
    /// Background-type component (ramps, power laws, ...)
    pub is_background: bool,
    /// Whether the component goes through the instrument-response convolution
    pub is_convolved: bool,
}

impl ComponentFlags {
    /// A signal component that is convolved with the instrument response.
    pub const SIGNAL: Self = Self {
        is_background: false,
        is_convolved: true,
    };

    /// A background component added after convolution.
    pub const BACKGROUND: Self = Self {
        is_background: true,
        is_convolved: false,
    };

    pub fn new(is_background: bool, is_convolved: bool) -> Self {
        Self {
            is_background,
            is_convolved,
        }
    }
}

impl Default for ComponentFlags {
    fn default() -> Self {
        Self::SIGNAL
    }
}

/// Where a component is located on the x axis.
///
/// `Parameter` refers into the component's own table, so updates to that
/// parameter are visible through the position without duplicated storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Position {
    Value(f64),
    Parameter(ParamIndex),
}

/// A parametric basis function used as one term of a summed spectral model.
///
/// Implementors provide [`Component::function_at`] and, where a closed form
/// exists, [`Component::gradient_at`]. Everything else has a default built on
/// top of those two methods.
pub trait Component: Debug + Send + Sync {
    /// Short name of the component kind, e.g. `"GaussianCDF"`.
    fn name(&self) -> &str;

    /// Returns a reference to the component's parameters.
    fn parameters(&self) -> &Parameters;

    /// Returns a mutable reference to the component's parameters.
    fn parameters_mut(&mut self) -> &mut Parameters;

    /// Evaluates the component for an explicit parameter snapshot.
    ///
    /// # Arguments
    ///
    /// * `values` - One value per parameter, in declaration order
    /// * `x` - The sample grid
    ///
    /// # Returns
    ///
    /// * An array with the same length and order as `x`
    fn function_at(&self, values: &[f64], x: &Array1<f64>) -> Result<Array1<f64>>;

    /// Analytic partial derivative with respect to the parameter at `index`.
    ///
    /// Returns `None` when no closed form is available for that parameter.
    fn gradient_at(
        &self,
        _values: &[f64],
        _index: ParamIndex,
        _x: &Array1<f64>,
    ) -> Option<Result<Array1<f64>>> {
        None
    }

    /// Flags consumed by the fitting engine.
    fn flags(&self) -> ComponentFlags {
        ComponentFlags::default()
    }

    /// The component's position on the x axis.
    fn position(&self) -> Position;

    /// Evaluates the component using the current parameter values.
    fn function(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        let values = self.parameters().values();
        self.function_at(&values, x)
    }

    /// Analytic partial derivative with respect to a named parameter, using the
    /// current parameter values.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` if the parameter has no analytic gradient
    /// * `Err(ParameterNotFound)` if the name is not declared
    fn gradient(&self, name: &str, x: &Array1<f64>) -> Result<Option<Array1<f64>>> {
        let index = self
            .parameters()
            .index_of(name)
            .ok_or_else(|| SpecFitError::ParameterNotFound(name.to_string()))?;
        let values = self.parameters().values();
        self.gradient_at(&values, index, x).transpose()
    }

    /// Partial derivative for the parameter at `index`, analytic when
    /// available and by central finite differences otherwise.
    fn derivative_at(
        &self,
        values: &[f64],
        index: ParamIndex,
        x: &Array1<f64>,
    ) -> Result<Array1<f64>> {
        match self.gradient_at(values, index, x) {
            Some(gradient) => gradient,
            None => finite_difference::partial_derivative(
                |v| self.function_at(v, x),
                values,
                index.get(),
                None,
            ),
        }
    }

    /// Jacobian over all parameters: column `j` is `∂y/∂p_j` at every sample.
    fn jacobian(&self, x: &Array1<f64>) -> Result<Array2<f64>> {
        let indices: Vec<ParamIndex> = (0..self.parameters().len()).map(ParamIndex).collect();
        self.jacobian_for(&indices, x)
    }

    /// Jacobian restricted to the free parameters, in declaration order.
    fn free_jacobian(&self, x: &Array1<f64>) -> Result<Array2<f64>> {
        let indices = self.parameters().free_indices();
        self.jacobian_for(&indices, x)
    }

    /// Jacobian columns for the given parameter indices.
    fn jacobian_for(&self, indices: &[ParamIndex], x: &Array1<f64>) -> Result<Array2<f64>> {
        let values = self.parameters().values();
        let mut jac = Array2::zeros((x.len(), indices.len()));

        for (column, &index) in indices.iter().enumerate() {
            let derivative = self.derivative_at(&values, index, x)?;
            if derivative.len() != x.len() {
                return Err(SpecFitError::shape_mismatch(
                    "jacobian column",
                    x.len(),
                    derivative.len(),
                ));
            }
            jac.column_mut(column).assign(&derivative);
        }

        Ok(jac)
    }

    /// Resolves [`Component::position`] to a number.
    ///
    /// Returns `None` if the position refers to a missing parameter.
    fn position_value(&self) -> Option<f64> {
        match self.position() {
            Position::Value(value) => Some(value),
            Position::Parameter(index) => self.parameters().by_index(index).map(|p| p.value()),
        }
    }

    /// Whether the parameter at `index` has an analytic gradient.
    fn has_analytic_gradient(&self, index: ParamIndex) -> bool {
        self.parameters()
            .by_index(index)
            .map_or(false, |p| p.gradient_available())
    }
}

/// Checks that a parameter snapshot matches the declared table.
pub(crate) fn check_values(params: &Parameters, values: &[f64]) -> Result<()> {
    if values.len() != params.len() {
        return Err(SpecFitError::shape_mismatch(
            "parameter snapshot",
            params.len(),
            values.len(),
        ));
    }
    Ok(())
}
