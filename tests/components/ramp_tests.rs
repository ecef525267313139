//! Integration tests for the ramp background

use crate::test_helpers::max_gradient_error;
use approx::assert_relative_eq;
use ndarray::array;
use specfit_rs::component::Component;
use specfit_rs::components::Ramp;

#[test]
fn test_ramp_scenario() {
    let ramp = Ramp::with_values(2.0, 5.0);
    let y = ramp.function(&array![3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
    assert_eq!(y, array![0.0, 0.0, 0.0, 2.0, 4.0]);
}

#[test]
fn test_ramp_kink_gradient() {
    let ramp = Ramp::with_values(3.0, -1.0);
    let dx0 = ramp.gradient("x0", &array![-2.0, -1.0, 0.0]).unwrap().unwrap();
    assert_eq!(dx0, array![0.0, -1.5, -3.0]);

    let dm = ramp.gradient("m", &array![-2.0, -1.0, 0.5]).unwrap().unwrap();
    assert_eq!(dm, array![0.0, 0.0, 1.5]);
}

#[test]
fn test_ramp_gradients_away_from_kink() {
    let ramp = Ramp::with_values(0.7, 1.0);
    // No sample within a finite-difference step of x0
    let x = array![-3.0, 0.0, 0.9, 1.1, 2.0, 8.0];
    assert!(max_gradient_error(&ramp, &x) < 1e-6);

    let y = ramp.function(&x).unwrap();
    assert_relative_eq!(y[5], 0.7 * 7.0, epsilon = 1e-12);
}
