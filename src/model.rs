//! Summed spectral model.
//!
//! A [`Model`] is the boundary to the fitting engine: an ordered list of
//! named components whose outputs are added up. Components flagged
//! `is_convolved` are summed first and, when an instrument response is set,
//! convolved with it before the remaining components are added.

use crate::component::Component;
use crate::components::ModelConfig;
use crate::error::{Result, SpecFitError};
use ndarray::{Array1, Array2};

/// One named component of a [`Model`].
#[derive(Debug)]
pub struct ModelEntry {
    name: String,
    active: bool,
    component: Box<dyn Component>,
}

impl ModelEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the component contributes to the model output
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn component(&self) -> &dyn Component {
        self.component.as_ref()
    }
}

/// A sum of components, optionally convolved with an instrument response.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use specfit_rs::components::{GaussianCdf, Ramp};
/// use specfit_rs::model::Model;
///
/// let mut model = Model::new();
/// model.add_component("edge", GaussianCdf::with_values(2.0, 1.0, 0.0)).unwrap();
/// model.add_component("background", Ramp::with_values(1.0, 0.0)).unwrap();
///
/// let y = model.evaluate(&array![0.0, 1.0]).unwrap();
/// assert!((y[0] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Default)]
pub struct Model {
    entries: Vec<ModelEntry>,
    response: Option<Array1<f64>>,
}

impl Model {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from a configuration.
    ///
    /// Entries without a name are named after their component kind, with a
    /// numeric suffix when that name is already taken.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for an unknown mode string or a
    /// repeated explicit name.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let mut model = Self::new();
        for entry in &config.components {
            let component = entry.component.build()?;
            let name = match &entry.name {
                Some(name) => name.clone(),
                None => model.unique_name(component.name()),
            };
            model.add_boxed(&name, component)?;
            if !entry.active {
                model.set_active(&name, false)?;
            }
        }
        log::debug!("built model with {} components from config", model.len());
        Ok(model)
    }

    fn unique_name(&self, base: &str) -> String {
        if self.component(base).is_none() {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{}_{}", base, n))
            .find(|name| self.component(name).is_none())
            .unwrap_or_else(|| base.to_string())
    }

    /// Append a component under a unique name
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the name is already used.
    pub fn add_component<C: Component + 'static>(&mut self, name: &str, component: C) -> Result<()> {
        self.add_boxed(name, Box::new(component))
    }

    /// Append an already boxed component under a unique name
    pub fn add_boxed(&mut self, name: &str, component: Box<dyn Component>) -> Result<()> {
        if self.component(name).is_some() {
            log::warn!("rejected duplicate component name '{}'", name);
            return Err(SpecFitError::InvalidConfiguration(format!(
                "component name '{}' is already used",
                name
            )));
        }

        log::debug!(
            "adding component '{}' ({}, {} parameters)",
            name,
            component.name(),
            component.parameters().len()
        );
        self.entries.push(ModelEntry {
            name: name.to_string(),
            active: true,
            component,
        });
        Ok(())
    }

    /// Remove a component, returning it
    pub fn remove_component(&mut self, name: &str) -> Result<Box<dyn Component>> {
        let index = self.position(name)?;
        Ok(self.entries.remove(index).component)
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| SpecFitError::ComponentNotFound(name.to_string()))
    }

    /// Look up a component by entry name
    pub fn component(&self, name: &str) -> Option<&dyn Component> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.component.as_ref())
    }

    /// Look up a component mutably, e.g. to change its parameters
    pub fn component_mut(&mut self, name: &str) -> Option<&mut dyn Component> {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => Some(entry.component.as_mut()),
            None => None,
        }
    }

    /// Include or exclude a component from the sum
    pub fn set_active(&mut self, name: &str, active: bool) -> Result<()> {
        let index = self.position(name)?;
        self.entries[index].active = active;
        Ok(())
    }

    /// Number of components, active or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in model order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelEntry> {
        self.entries.iter()
    }

    fn active(&self) -> impl Iterator<Item = &ModelEntry> {
        self.entries.iter().filter(|e| e.active)
    }

    /// Set the instrument response the convolved components are folded with.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for an empty kernel.
    pub fn set_response(&mut self, kernel: Array1<f64>) -> Result<()> {
        if kernel.is_empty() {
            return Err(SpecFitError::InvalidConfiguration(
                "instrument response kernel is empty".to_string(),
            ));
        }
        log::debug!("instrument response set ({} samples)", kernel.len());
        self.response = Some(kernel);
        Ok(())
    }

    pub fn clear_response(&mut self) {
        self.response = None;
    }

    pub fn response(&self) -> Option<&Array1<f64>> {
        self.response.as_ref()
    }

    fn fold(&self, signal: Array1<f64>) -> Array1<f64> {
        match &self.response {
            Some(kernel) => convolve_same(&signal, kernel),
            None => signal,
        }
    }

    /// Output of the active components split into the convolved group (with
    /// the response applied) and the unconvolved group.
    pub fn evaluate_parts(&self, x: &Array1<f64>) -> Result<(Array1<f64>, Array1<f64>)> {
        let mut convolved = Array1::zeros(x.len());
        let mut unconvolved = Array1::zeros(x.len());

        for entry in self.active() {
            let y = entry.component.function(x)?;
            if y.len() != x.len() {
                return Err(SpecFitError::shape_mismatch(&entry.name, x.len(), y.len()));
            }
            if entry.component.flags().is_convolved {
                convolved += &y;
            } else {
                unconvolved += &y;
            }
        }

        Ok((self.fold(convolved), unconvolved))
    }

    /// Sum of the active components.
    ///
    /// Non-finite values are passed through unchanged.
    pub fn evaluate(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        let (convolved, unconvolved) = self.evaluate_parts(x)?;
        let y = convolved + unconvolved;

        let non_finite = y.iter().filter(|v| !v.is_finite()).count();
        if non_finite > 0 {
            log::debug!("model output has {} non-finite values", non_finite);
        }
        Ok(y)
    }

    /// Calculates the residuals (y_obs - y_pred) using the current parameter values.
    ///
    /// # Arguments
    ///
    /// * `x` - The independent variable values
    /// * `y` - The observed dependent variable values
    ///
    /// # Returns
    ///
    /// * The residuals (y_obs - y_pred)
    pub fn residuals(&self, x: &Array1<f64>, y: &Array1<f64>) -> Result<Array1<f64>> {
        if y.len() != x.len() {
            return Err(SpecFitError::shape_mismatch("Model::residuals", x.len(), y.len()));
        }
        let y_pred = self.evaluate(x)?;
        Ok(y - &y_pred)
    }

    /// Names of the free parameters of the active components, as
    /// `"<entry>.<parameter>"`, in jacobian column order.
    pub fn free_parameter_names(&self) -> Vec<String> {
        self.active()
            .flat_map(|e| {
                e.component
                    .parameters()
                    .iter()
                    .filter(|p| p.vary())
                    .map(move |p| format!("{}.{}", e.name, p.name()))
            })
            .collect()
    }

    /// Values of the free parameters of the active components
    pub fn free_values(&self) -> Vec<f64> {
        self.active()
            .flat_map(|e| e.component.parameters().free_values())
            .collect()
    }

    /// Write free parameter values back, in the order of [`Model::free_values`]
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the slice length differs from the number of
    /// free parameters. Nothing is written in that case.
    pub fn set_free_values(&mut self, values: &[f64]) -> Result<()> {
        let expected = self.free_values().len();
        if values.len() != expected {
            return Err(SpecFitError::shape_mismatch(
                "Model::set_free_values",
                expected,
                values.len(),
            ));
        }

        let mut offset = 0;
        for entry in self.entries.iter_mut().filter(|e| e.active) {
            let params = entry.component.parameters_mut();
            let n = params.free_indices().len();
            params.set_free_values(&values[offset..offset + n])?;
            offset += n;
        }
        Ok(())
    }

    /// Calculates the Jacobian matrix of the model with respect to the free
    /// parameters of the active components.
    ///
    /// J[i,j] = dy(x_i)/dp_j. Columns of convolved components are folded with
    /// the instrument response, like their output.
    ///
    /// # Arguments
    ///
    /// * `x` - The independent variable values
    ///
    /// # Returns
    ///
    /// * The Jacobian matrix
    pub fn jacobian(&self, x: &Array1<f64>) -> Result<Array2<f64>> {
        let n_free = self.free_values().len();
        let mut jac = Array2::zeros((x.len(), n_free));

        let mut column = 0;
        for entry in self.active() {
            let block = entry.component.free_jacobian(x)?;
            let convolved = entry.component.flags().is_convolved;
            for j in 0..block.ncols() {
                let col = block.column(j).to_owned();
                let col = if convolved { self.fold(col) } else { col };
                jac.column_mut(column).assign(&col);
                column += 1;
            }
        }

        Ok(jac)
    }
}

/// Discrete convolution of `signal` with `kernel`, trimmed to the length of
/// `signal` with the kernel centred (index `(k - 1) / 2`).
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use specfit_rs::model::convolve_same;
///
/// let y = convolve_same(&array![0.0, 1.0, 0.0, 0.0], &array![0.25, 0.5, 0.25]);
/// assert_eq!(y, array![0.25, 0.5, 0.25, 0.0]);
/// ```
pub fn convolve_same(signal: &Array1<f64>, kernel: &Array1<f64>) -> Array1<f64> {
    let n = signal.len() as isize;
    let k = kernel.len() as isize;
    let shift = (k - 1) / 2;

    Array1::from_shape_fn(signal.len(), |i| {
        let m = i as isize + shift;
        (0..k)
            .filter_map(|j| {
                let s = m - j;
                (0..n).contains(&s).then(|| signal[s as usize] * kernel[j as usize])
            })
            .sum()
    })
}
