//! Properties every component satisfies

use crate::test_helpers::{init_logger, random_grid};
use ndarray::{array, Array1};
use specfit_rs::component::Component;
use specfit_rs::components::{
    BoundaryLoss, Gaussian, GaussianCdf, InterfaceModeIntensity, LossMode, Lorentzian,
    LorentzianCdf, Ramp, Side, Symmetry,
};
use specfit_rs::{ParamIndex, SpecFitError};

fn all_components() -> Vec<Box<dyn Component>> {
    let mut components: Vec<Box<dyn Component>> = Vec::new();
    for mode in [
        LossMode::Side(Side::Both),
        LossMode::Side(Side::Left),
        LossMode::Side(Side::Right),
        LossMode::Symmetry(Symmetry::Symmetric),
        LossMode::Symmetry(Symmetry::Asymmetric),
    ] {
        components.push(Box::new(BoundaryLoss::new(mode)));
        components.push(Box::new(InterfaceModeIntensity::new(mode)));
    }
    components.push(Box::new(GaussianCdf::new()));
    components.push(Box::new(LorentzianCdf::new()));
    components.push(Box::new(Ramp::new()));
    components.push(Box::new(Gaussian::new()));
    components.push(Box::new(Lorentzian::new()));
    components
}

#[test]
fn test_output_matches_input_length_and_order() {
    init_logger();
    let x = random_grid(1, 37, -5.0, 5.0);
    let reversed: Array1<f64> = x.iter().rev().copied().collect();

    for component in all_components() {
        let y = component.function(&x).unwrap();
        assert_eq!(y.len(), x.len(), "{}", component.name());

        // Evaluation is element-wise
        let y_rev = component.function(&reversed).unwrap();
        for (a, b) in y.iter().zip(y_rev.iter().rev()) {
            assert!(a == b || (a.is_nan() && b.is_nan()), "{}", component.name());
        }

        assert!(component.function(&Array1::zeros(0)).unwrap().is_empty());
    }
}

#[test]
fn test_snapshot_length_is_checked() {
    for component in all_components() {
        let too_short = vec![1.0; component.parameters().len() - 1];
        assert!(matches!(
            component.function_at(&too_short, &array![0.0]),
            Err(SpecFitError::ShapeMismatch { .. })
        ));
    }
}

#[test]
fn test_position_resolves_to_a_parameter() {
    for component in all_components() {
        assert!(component.position_value().is_some(), "{}", component.name());
    }
}

#[test]
fn test_jacobian_has_one_column_per_parameter() {
    let x = array![-1.5, -0.5, 0.5, 1.5];
    for component in all_components() {
        let jac = component.jacobian(&x).unwrap();
        assert_eq!(jac.shape(), &[4, component.parameters().len()]);
    }
}

#[test]
fn test_gradient_flags_agree_with_gradient_at() {
    let x = array![-1.5, -0.5, 0.5, 1.5];
    for component in all_components() {
        let values = component.parameters().values();
        for (i, param) in component.parameters().iter().enumerate() {
            let index = ParamIndex(i);
            let exposed = component.gradient_at(&values, index, &x).is_some();
            assert_eq!(
                param.gradient_available(),
                exposed,
                "{}.{}",
                component.name(),
                param.name()
            );
            assert_eq!(component.has_analytic_gradient(index), exposed);
        }
    }
}
