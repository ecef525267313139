//! Branching shared by the Bessel-K0 interface plasmon shapes.
//!
//! Both [`BoundaryLoss`](super::BoundaryLoss) and
//! [`InterfaceModeIntensity`](super::InterfaceModeIntensity) evaluate a kernel of
//! the distance `|x - x0|` on one or both sides of the interface position `x0`
//! and are exactly zero at `x0`, where K0 is singular.

use crate::component::check_values;
use crate::components::mode::{LossMode, Side, Symmetry};
use crate::error::Result;
use crate::parameters::{ParamIndex, Parameter, Parameters};
use crate::piecewise::{mask, select, select_or};
use ndarray::Array1;

/// Indices of one (A, B, C) parameter triple. `b` is absent for shapes
/// without a logarithmic term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Triple {
    pub a: ParamIndex,
    pub b: Option<ParamIndex>,
    pub c: ParamIndex,
}

/// Values of one triple read from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TripleValues {
    pub a: f64,
    /// 1.0 when the shape has no B term
    pub b: f64,
    pub c: f64,
}

impl Triple {
    fn read(&self, values: &[f64]) -> TripleValues {
        TripleValues {
            a: values[self.a.get()],
            b: self.b.map_or(1.0, |b| values[b.get()]),
            c: values[self.c.get()],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Layout {
    Single { side: Side, triple: Triple },
    Split { left: Triple, right: Triple },
}

/// Initial values for a newly built parameter table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Initial {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub x0: f64,
}

/// Parameter table plus branching layout of a plasmon shape.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlasmonShape {
    mode: LossMode,
    layout: Layout,
    x0: ParamIndex,
    parameters: Parameters,
}

impl PlasmonShape {
    /// Declare the parameters for `mode`.
    ///
    /// Single-triple modes get `A, [B,] C, x0`; the asymmetric mode gets
    /// `A_left, [B_left,] C_left, A_right, [B_right,] C_right, x0`.
    pub fn new(mode: LossMode, with_b: bool, initial: Initial) -> Self {
        let mut parameters = Parameters::new();

        let layout = match mode {
            LossMode::Side(side) => Layout::Single {
                side,
                triple: declare_triple(&mut parameters, "", with_b, initial),
            },
            LossMode::Symmetry(Symmetry::Symmetric) => Layout::Single {
                side: Side::Both,
                triple: declare_triple(&mut parameters, "", with_b, initial),
            },
            LossMode::Symmetry(Symmetry::Asymmetric) => Layout::Split {
                left: declare_triple(&mut parameters, "_left", with_b, initial),
                right: declare_triple(&mut parameters, "_right", with_b, initial),
            },
        };
        let x0 = parameters.declare(Parameter::new("x0", initial.x0));

        Self {
            mode,
            layout,
            x0,
            parameters,
        }
    }

    pub fn mode(&self) -> LossMode {
        self.mode
    }

    pub fn x0(&self) -> ParamIndex {
        self.x0
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    /// Evaluate `kernel(triple, |x - x0|)` on the active branches, zero elsewhere.
    pub fn evaluate<K>(&self, values: &[f64], x: &Array1<f64>, kernel: K) -> Result<Array1<f64>>
    where
        K: Fn(TripleValues, f64) -> f64,
    {
        check_values(&self.parameters, values)?;
        let x0 = values[self.x0.get()];

        match &self.layout {
            Layout::Single { side, triple } => {
                let t = triple.read(values);
                let y = x.mapv(|v| kernel(t, (v - x0).abs()));
                let active = match side {
                    Side::Both => mask(x, |v| v != x0),
                    Side::Left => mask(x, |v| v < x0),
                    Side::Right => mask(x, |v| v > x0),
                };
                select_or(&active, &y, 0.0)
            }
            Layout::Split { left, right } => {
                let (l, r) = (left.read(values), right.read(values));
                let y_left = x.mapv(|v| kernel(l, (v - x0).abs()));
                let y_right = x.mapv(|v| kernel(r, (v - x0).abs()));

                let right_part = select_or(&mask(x, |v| v > x0), &y_right, 0.0)?;
                select(&mask(x, |v| v < x0), &y_left, &right_part)
            }
        }
    }
}

fn declare_triple(
    parameters: &mut Parameters,
    suffix: &str,
    with_b: bool,
    initial: Initial,
) -> Triple {
    let a = parameters.declare(Parameter::new(&format!("A{}", suffix), initial.a));
    let b = with_b.then(|| parameters.declare(Parameter::new(&format!("B{}", suffix), initial.b)));
    let c = parameters.declare(Parameter::new(&format!("C{}", suffix), initial.c));
    Triple { a, b, c }
}
