//! Integration tests for the interface-plasmon components

use crate::test_helpers::{init_logger, random_grid};
use approx::assert_relative_eq;
use ndarray::{array, Array1};
use specfit_rs::component::{Component, Position};
use specfit_rs::components::{BoundaryLoss, InterfaceModeIntensity, LossMode, Side, Symmetry};
use specfit_rs::special::bessel_k0;
use specfit_rs::SpecFitError;

#[test]
fn test_boundary_loss_sides() {
    init_logger();
    let x = random_grid(11, 64, -4.0, 4.0);
    let x0 = 0.5;

    for side in [Side::Left, Side::Right, Side::Both] {
        let mut loss = BoundaryLoss::new(LossMode::Side(side));
        loss.parameters_mut().set_value("x0", x0).unwrap();
        loss.parameters_mut().set_value("B", 0.2).unwrap();
        let y = loss.function(&x).unwrap();
        assert_eq!(y.len(), x.len());

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let active = match side {
                Side::Left => xi < x0,
                Side::Right => xi > x0,
                Side::Both => xi != x0,
            };
            if active {
                let expected = (1.0f64 / 0.2).ln() - bessel_k0(2.0 * (xi - x0).abs());
                assert_relative_eq!(yi, expected, epsilon = 1e-12);
            } else {
                assert_eq!(yi, 0.0);
            }
        }
    }
}

#[test]
fn test_boundary_loss_exactly_zero_at_interface() {
    let mut loss = BoundaryLoss::new(LossMode::Side(Side::Both));
    loss.parameters_mut().set_value("x0", 2.0).unwrap();
    let y = loss.function(&array![1.0, 2.0, 3.0]).unwrap();
    assert_eq!(y[1], 0.0);
    assert!(y[0].is_finite() && y[2].is_finite());
    assert_relative_eq!(y[0], y[2], epsilon = 1e-15);
}

#[test]
fn test_boundary_loss_asymmetric_parameters() {
    let loss = BoundaryLoss::new(LossMode::Symmetry(Symmetry::Asymmetric));
    assert_eq!(
        loss.parameters().names(),
        vec!["A_left", "B_left", "C_left", "A_right", "B_right", "C_right", "x0"]
    );
    assert_eq!(loss.position(), Position::Parameter(loss.x0_index()));
}

#[test]
fn test_boundary_loss_asymmetric_uses_each_triple_on_its_side() {
    init_logger();
    let mut loss = BoundaryLoss::new(LossMode::Symmetry(Symmetry::Asymmetric));
    let x0 = 0.4;
    for (name, value) in [
        ("A_left", 2.0),
        ("B_left", 0.5),
        ("C_left", 0.3),
        ("A_right", 0.7),
        ("B_right", 3.0),
        ("C_right", 1.2),
        ("x0", x0),
    ] {
        loss.parameters_mut().set_value(name, value).unwrap();
    }

    let left = |v: f64| 2.0 * ((1.0f64 / 0.5).ln() - bessel_k0(0.6 * (v - x0).abs()));
    let right = |v: f64| 0.7 * ((1.0f64 / 3.0).ln() - bessel_k0(2.4 * (v - x0).abs()));

    let x = array![-2.0, -0.6, 0.4, 0.9, 2.4];
    let y = loss.function(&x).unwrap();
    assert_relative_eq!(y[0], left(-2.0), epsilon = 1e-12);
    assert_relative_eq!(y[1], left(-0.6), epsilon = 1e-12);
    assert_eq!(y[2], 0.0);
    assert_relative_eq!(y[3], right(0.9), epsilon = 1e-12);
    assert_relative_eq!(y[4], right(2.4), epsilon = 1e-12);

    // ln(1/B) differs in sign between the two sides
    assert!(y[0] > 0.0);
    assert!(y[4] < 0.0);

    let x = random_grid(23, 80, -3.0, 3.0);
    let y = loss.function(&x).unwrap();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        if xi < x0 {
            assert_relative_eq!(yi, left(xi), epsilon = 1e-12);
        } else if xi > x0 {
            assert_relative_eq!(yi, right(xi), epsilon = 1e-12);
        } else {
            assert_eq!(yi, 0.0);
        }
    }
}

#[test]
fn test_interface_mode_asymmetric_triples() {
    init_logger();
    let mut imi = InterfaceModeIntensity::with_values(
        LossMode::Symmetry(Symmetry::Asymmetric),
        1.0,
        1.0,
        0.0,
    );
    imi.parameters_mut().set_value("A_right", 10.0).unwrap();
    imi.parameters_mut().set_value("C_left", 0.25).unwrap();

    let x = Array1::linspace(-2.0, 2.0, 9);
    let y = imi.function(&x).unwrap();

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        if xi < 0.0 {
            assert_relative_eq!(yi, bessel_k0(0.5 * xi.abs()), epsilon = 1e-12);
        } else if xi > 0.0 {
            assert_relative_eq!(yi, 10.0 * bessel_k0(2.0 * xi), epsilon = 1e-12);
        } else {
            assert_eq!(yi, 0.0);
        }
    }
}

#[test]
fn test_mode_strings_are_a_closed_set() {
    for mode in ["both", "LEFT", "Right", "symmetric", "asymmetric"] {
        assert!(BoundaryLoss::from_mode_str(mode).is_ok(), "{}", mode);
        assert!(InterfaceModeIntensity::from_mode_str(mode).is_ok(), "{}", mode);
    }
    for mode in ["", "up", "symmetrical", "left-right"] {
        assert!(matches!(
            BoundaryLoss::from_mode_str(mode),
            Err(SpecFitError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn test_finite_difference_jacobian() {
    let loss = BoundaryLoss::with_values(LossMode::Side(Side::Right), 2.0, 0.5, 0.7, 0.0);
    let x = array![0.5, 1.0, 2.0];
    let jac = loss.jacobian(&x).unwrap();
    assert_eq!(jac.shape(), &[3, 4]);

    // dy/dB = -A / B
    for i in 0..3 {
        assert_relative_eq!(jac[[i, 1]], -4.0, epsilon = 1e-5);
    }
    assert!(!loss.parameters().iter().any(|p| p.gradient_available()));
}
