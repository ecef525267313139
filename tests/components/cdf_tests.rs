//! Integration tests for the cumulative steps and their density forms

use crate::test_helpers::{
    array_approx_eq, init_logger, max_gradient_error, max_gradient_error_except, random_grid,
};
use approx::assert_relative_eq;
use ndarray::{array, Array1};
use specfit_rs::component::{Component, ComponentFlags};
use specfit_rs::components::{GaussianCdf, LorentzianCdf};
use specfit_rs::utils::derivative;

#[test]
fn test_gaussian_cdf_scenario() {
    init_logger();
    let cdf = GaussianCdf::with_values(2.0, 1.0, 0.0);
    let y = cdf.function(&array![-2.0, -1.0, 0.0, 1.0, 2.0]).unwrap();
    assert!(array_approx_eq(
        &y,
        &array![0.0455, 0.3173, 1.0, 1.6827, 1.9545],
        1e-4
    ));
}

#[test]
fn test_gaussian_cdf_properties() {
    let cdf = GaussianCdf::with_values(0.8, 2.5, -1.0);
    let x = random_grid(3, 200, -12.0, 10.0);
    let y = cdf.function(&x).unwrap();

    assert!(y.windows(2).into_iter().all(|w| w[1] >= w[0]));
    assert_relative_eq!(cdf.function(&array![-1.0]).unwrap()[0], 0.4, epsilon = 1e-12);
    assert!(max_gradient_error_except(&cdf, &x, &["origin"]) < 1e-5);
}

#[test]
fn test_gaussian_cdf_origin_gradient_is_density() {
    let mut cdf = GaussianCdf::with_values(2.0, 1.0, 0.0);
    let x = array![-1.0, 0.0, 1.0];

    let grad = cdf.gradient("origin", &x).unwrap().unwrap();
    assert_eq!(grad, cdf.gaussian(&x));
    assert!(array_approx_eq(&grad, &array![0.4839, 0.7979, 0.4839], 1e-4));

    // The jacobian carries the same column
    let jac = cdf.jacobian(&x).unwrap();
    assert_eq!(jac.column(2).to_owned(), grad);

    cdf.parameters_mut().set_value("sigma", 0.25).unwrap();
    let x = random_grid(11, 40, -2.0, 2.0);
    assert_eq!(cdf.gradient("origin", &x).unwrap().unwrap(), cdf.gaussian(&x));
}

#[test]
fn test_gaussian_density_is_the_slope() {
    let cdf = GaussianCdf::with_values(1.3, 0.6, 0.2);
    for &xi in &[-1.0, 0.0, 0.2, 0.9] {
        let slope = derivative(
            |v| cdf.function(&array![v]).unwrap()[0],
            xi,
            None,
        );
        assert_relative_eq!(cdf.gaussian(&array![xi])[0], slope, epsilon = 1e-6);
    }
}

#[test]
fn test_lorentzian_cdf_scenario() {
    let cdf = LorentzianCdf::with_values(1.0, 1.0, 0.0);
    let y = cdf.function(&array![-1.0, 0.0, 1.0]).unwrap();
    assert!(array_approx_eq(&y, &array![0.25, 0.5, 0.75], 1e-12));
}

#[test]
fn test_lorentzian_cdf_properties() {
    let mut cdf = LorentzianCdf::new();
    cdf.parameters_mut().set_values(&[2.0, 0.3, 4.0]).unwrap();

    assert_relative_eq!(cdf.function(&array![4.0]).unwrap()[0], 1.0, epsilon = 1e-12);
    let tails = cdf.function(&array![-1e8, 1e8]).unwrap();
    assert_relative_eq!(tails[0], 0.0, epsilon = 1e-6);
    assert_relative_eq!(tails[1], 2.0, epsilon = 1e-6);

    let x = random_grid(5, 100, 0.0, 8.0);
    assert!(max_gradient_error(&cdf, &x) < 1e-5);
}

#[test]
fn test_lorentzian_gradients_track_parameter_updates() {
    let mut cdf = LorentzianCdf::with_values(1.0, 1.0, 0.0);
    let x = Array1::linspace(-3.0, 3.0, 13);
    let first = cdf.gradient("centre", &x).unwrap().unwrap();

    cdf.parameters_mut().set_value("gamma", 0.5).unwrap();
    let second = cdf.gradient("centre", &x).unwrap().unwrap();
    assert!(!array_approx_eq(&first, &second, 1e-6));
    assert!(max_gradient_error(&cdf, &x) < 1e-5);
}

#[test]
fn test_density_conversions() {
    let gcdf = GaussianCdf::with_values(3.0, 0.5, 2.0);
    let gaussian = gcdf.as_gaussian();
    let x = Array1::linspace(0.0, 4.0, 21);
    assert!(array_approx_eq(&gaussian.function(&x).unwrap(), &gcdf.gaussian(&x), 1e-12));
    assert_eq!(gaussian.position_value(), Some(2.0));

    let lcdf = LorentzianCdf::with_values(3.0, 0.5, 2.0);
    let lorentzian = lcdf.as_lorentzian();
    assert!(array_approx_eq(&lorentzian.function(&x).unwrap(), &lcdf.lorentzian(&x), 1e-12));
}

#[test]
fn test_flags() {
    assert_eq!(GaussianCdf::new().flags(), ComponentFlags::SIGNAL);
    assert_eq!(LorentzianCdf::new().flags(), ComponentFlags::new(false, false));
}
