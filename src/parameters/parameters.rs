//! Parameters collection implementation
//!
//! [`Parameters`] is the ordered parameter table owned by every component.
//! Declaration order is preserved for reporting and for the column order of
//! jacobians; evaluation never depends on it.

use crate::error::{Result, SpecFitError};
use crate::parameters::parameter::Parameter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Position of a parameter inside its owning [`Parameters`] table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParamIndex(pub usize);

impl ParamIndex {
    /// The raw table index
    pub fn get(self) -> usize {
        self.0
    }
}

/// An insertion-ordered collection of uniquely named parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Parameter>", try_from = "Vec<Parameter>")]
pub struct Parameters {
    params: Vec<Parameter>,
}

impl From<Parameters> for Vec<Parameter> {
    fn from(params: Parameters) -> Self {
        params.params
    }
}

impl TryFrom<Vec<Parameter>> for Parameters {
    type Error = SpecFitError;

    fn try_from(list: Vec<Parameter>) -> Result<Self> {
        let mut params = Parameters::new();
        for param in list {
            params.add(param)?;
        }
        Ok(params)
    }
}

impl Parameters {
    /// Create a new empty parameters collection
    ///
    /// # Examples
    ///
    /// ```
    /// use specfit_rs::parameters::Parameters;
    ///
    /// let params = Parameters::new();
    /// assert!(params.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Append a parameter, returning its index
    ///
    /// # Errors
    ///
    /// Returns [`SpecFitError::DuplicateParameter`] if the name is taken.
    ///
    /// # Examples
    ///
    /// ```
    /// use specfit_rs::parameters::{Parameter, Parameters};
    ///
    /// let mut params = Parameters::new();
    /// let a = params.add(Parameter::new("A", 1.0)).unwrap();
    /// let c = params.add(Parameter::new("C", 2.0)).unwrap();
    /// assert_eq!(a.get(), 0);
    /// assert_eq!(c.get(), 1);
    /// assert!(params.add(Parameter::new("A", 3.0)).is_err());
    /// ```
    pub fn add(&mut self, param: Parameter) -> Result<ParamIndex> {
        if self.contains(param.name()) {
            return Err(SpecFitError::DuplicateParameter(param.name().to_string()));
        }

        self.params.push(param);
        Ok(ParamIndex(self.params.len() - 1))
    }

    /// Append a parameter declared by a component constructor.
    ///
    /// Constructors use fixed, distinct names, so no duplicate check is done
    /// outside debug builds.
    pub(crate) fn declare(&mut self, param: Parameter) -> ParamIndex {
        debug_assert!(!self.contains(param.name()), "duplicate {}", param.name());
        self.params.push(param);
        ParamIndex(self.params.len() - 1)
    }

    /// Append a new unbounded parameter with the given name and value
    pub fn add_param(&mut self, name: &str, value: f64) -> Result<ParamIndex> {
        self.add(Parameter::new(name, value))
    }

    /// Append a new parameter with the given name, value, and bounds
    pub fn add_param_with_bounds(
        &mut self,
        name: &str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<ParamIndex> {
        let param = Parameter::with_bounds(name, value, min, max)?;
        self.add(param)
    }

    /// Get a parameter by name
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name() == name)
    }

    /// Get a mutable reference to a parameter by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.params.iter_mut().find(|p| p.name() == name)
    }

    /// Get a parameter by index
    pub fn by_index(&self, index: ParamIndex) -> Option<&Parameter> {
        self.params.get(index.0)
    }

    /// Get a mutable parameter by index
    pub fn by_index_mut(&mut self, index: ParamIndex) -> Option<&mut Parameter> {
        self.params.get_mut(index.0)
    }

    /// Look up the index of a named parameter
    pub fn index_of(&self, name: &str) -> Option<ParamIndex> {
        self.params
            .iter()
            .position(|p| p.name() == name)
            .map(ParamIndex)
    }

    /// Check if a parameter with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Current value of a named parameter
    ///
    /// # Errors
    ///
    /// Returns [`SpecFitError::ParameterNotFound`] if no such parameter exists.
    pub fn value_of(&self, name: &str) -> Result<f64> {
        self.get(name)
            .map(Parameter::value)
            .ok_or_else(|| SpecFitError::ParameterNotFound(name.to_string()))
    }

    /// Set the value of a named parameter
    pub fn set_value(&mut self, name: &str, value: f64) -> Result<()> {
        let param = self
            .get_mut(name)
            .ok_or_else(|| SpecFitError::ParameterNotFound(name.to_string()))?;
        param.set_value(value);
        Ok(())
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter names in declaration order
    pub fn names(&self) -> Vec<String> {
        self.params.iter().map(|p| p.name().to_string()).collect()
    }

    /// Iterate over parameters in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    /// Iterate mutably over parameters in declaration order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Parameter> {
        self.params.iter_mut()
    }

    /// Snapshot of all values in declaration order
    pub fn values(&self) -> Vec<f64> {
        self.params.iter().map(Parameter::value).collect()
    }

    /// Overwrite all values from a slice in declaration order
    ///
    /// # Errors
    ///
    /// Returns [`SpecFitError::ShapeMismatch`] if the slice length differs
    /// from the number of parameters. Nothing is written in that case.
    pub fn set_values(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.params.len() {
            return Err(SpecFitError::shape_mismatch(
                "Parameters::set_values",
                self.params.len(),
                values.len(),
            ));
        }

        for (param, &value) in self.params.iter_mut().zip(values) {
            param.set_value(value);
        }
        Ok(())
    }

    /// Indices of the parameters that are varied during fitting
    pub fn free_indices(&self) -> Vec<ParamIndex> {
        self.params
            .iter()
            .enumerate()
            .filter(|(_, p)| p.vary())
            .map(|(i, _)| ParamIndex(i))
            .collect()
    }

    /// Values of the free parameters in declaration order
    pub fn free_values(&self) -> Vec<f64> {
        self.params
            .iter()
            .filter(|p| p.vary())
            .map(Parameter::value)
            .collect()
    }

    /// Overwrite the free parameter values, fixed ones are skipped
    ///
    /// # Errors
    ///
    /// Returns [`SpecFitError::ShapeMismatch`] if the slice length differs
    /// from the number of free parameters.
    pub fn set_free_values(&mut self, values: &[f64]) -> Result<()> {
        let n_free = self.params.iter().filter(|p| p.vary()).count();
        if values.len() != n_free {
            return Err(SpecFitError::shape_mismatch(
                "Parameters::set_free_values",
                n_free,
                values.len(),
            ));
        }

        for (param, &value) in self.params.iter_mut().filter(|p| p.vary()).zip(values) {
            param.set_value(value);
        }
        Ok(())
    }

    /// Reset every parameter to its initial value
    pub fn reset(&mut self) {
        self.params.iter_mut().for_each(Parameter::reset);
    }

    /// Copy values from another table, matching by name
    ///
    /// Parameters absent from `other` keep their value. Returns how many
    /// values were copied.
    pub fn load_values_from(&mut self, other: &Parameters) -> usize {
        let mut copied = 0;
        for param in self.params.iter_mut() {
            if let Some(source) = other.get(param.name()) {
                param.set_value(source.value());
                copied += 1;
            }
        }
        copied
    }

    /// Serialize the table to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a table from a JSON string
    ///
    /// # Errors
    ///
    /// Returns a JSON error for malformed input, including duplicate names.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save the table to a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Load a table from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_json(&contents)
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
