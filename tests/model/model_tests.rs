//! Integration tests for Model

use crate::test_helpers::{array_approx_eq, init_logger};
use approx::assert_relative_eq;
use ndarray::{array, Array1};
use specfit_rs::component::Component;
use specfit_rs::components::{BoundaryLoss, GaussianCdf, LossMode, Ramp, Side};
use specfit_rs::model::{convolve_same, Model};
use specfit_rs::utils::partial_derivative;

fn eels_like_model() -> Model {
    let mut model = Model::new();
    model
        .add_component("edge", GaussianCdf::with_values(1.5, 0.4, 1.0))
        .unwrap();
    model
        .add_component(
            "loss",
            BoundaryLoss::with_values(LossMode::Side(Side::Left), 0.5, 0.3, 0.8, -1.05),
        )
        .unwrap();
    // Interface and ramp start sit between grid points, away from the kinks
    model.add_component("background", Ramp::with_values(0.2, -2.05)).unwrap();

    // The origin column is the edge density, not the slope in origin
    model
        .component_mut("edge")
        .unwrap()
        .parameters_mut()
        .get_mut("origin")
        .unwrap()
        .set_vary(false);
    model
}

#[test]
fn test_evaluate_is_sum_of_parts() {
    init_logger();
    let model = eels_like_model();
    let x = Array1::linspace(-4.0, 4.0, 33);

    let mut expected = Array1::zeros(x.len());
    for entry in model.iter() {
        expected += &entry.component().function(&x).unwrap();
    }
    assert!(array_approx_eq(&model.evaluate(&x).unwrap(), &expected, 1e-12));
}

#[test]
fn test_jacobian_matches_finite_differences_of_model() {
    let mut model = eels_like_model();
    model.set_response(array![0.2, 0.6, 0.2]).unwrap();
    let x = Array1::linspace(-4.0, 4.0, 41);

    let jac = model.jacobian(&x).unwrap();
    let p0 = model.free_values();
    assert_eq!(jac.shape(), &[x.len(), p0.len()]);

    for j in 0..p0.len() {
        let numeric = partial_derivative(
            |p| {
                let mut probe = eels_like_model();
                probe.set_response(array![0.2, 0.6, 0.2])?;
                probe.set_free_values(p)?;
                probe.evaluate(&x)
            },
            &p0,
            j,
            None,
        )
        .unwrap();
        for i in 0..x.len() {
            assert_relative_eq!(jac[[i, j]], numeric[i], epsilon = 1e-4);
        }
    }
}

#[test]
fn test_edge_origin_column_is_the_density() {
    let mut model = eels_like_model();
    model
        .component_mut("edge")
        .unwrap()
        .parameters_mut()
        .get_mut("origin")
        .unwrap()
        .set_vary(true);
    let x = Array1::linspace(-4.0, 4.0, 17);

    let names = model.free_parameter_names();
    let column = names.iter().position(|n| n == "edge.origin").unwrap();
    let jac = model.jacobian(&x).unwrap();

    let density = GaussianCdf::with_values(1.5, 0.4, 1.0).gaussian(&x);
    assert!(array_approx_eq(&jac.column(column).to_owned(), &density, 1e-12));
}

#[test]
fn test_residuals_vanish_at_truth() {
    let model = eels_like_model();
    let x = Array1::linspace(-3.0, 3.0, 25);
    let y = model.evaluate(&x).unwrap();
    let r = model.residuals(&x, &y).unwrap();
    assert!(r.iter().all(|v| v.abs() < 1e-15));
}

#[test]
fn test_background_is_not_convolved() {
    let mut model = eels_like_model();
    let x = Array1::linspace(-4.0, 4.0, 17);
    let kernel = array![0.1, 0.2, 0.4, 0.2, 0.1];
    model.set_response(kernel.clone()).unwrap();

    let (convolved, unconvolved) = model.evaluate_parts(&x).unwrap();
    let background = model.component("background").unwrap().function(&x).unwrap();
    assert_eq!(unconvolved, background);

    let signal = model.component("edge").unwrap().function(&x).unwrap()
        + model.component("loss").unwrap().function(&x).unwrap();
    assert!(array_approx_eq(&convolved, &convolve_same(&signal, &kernel), 1e-12));

    model.clear_response();
    assert!(model.response().is_none());
}

#[test]
fn test_non_finite_values_flow_through() {
    let mut model = eels_like_model();
    model
        .component_mut("loss")
        .unwrap()
        .parameters_mut()
        .set_value("B", -1.0)
        .unwrap();
    let y = model.evaluate(&array![-3.0, 0.0]).unwrap();
    assert!(y[0].is_nan());
    assert!(y[1].is_finite());
}
