//! Integration tests for the Parameter struct

use specfit_rs::parameters::{Bounds, BoundsError, Parameter};

#[test]
fn test_parameter_lifecycle() {
    let mut param = Parameter::new("A", 10.0);

    assert_eq!(param.name(), "A");
    assert_eq!(param.value(), 10.0);
    assert!(param.vary());
    assert_eq!(param.lower_bound(), None);
    assert_eq!(param.upper_bound(), None);
    assert!(param.stderr().is_none());
    assert!(!param.gradient_available());

    // The optimizer writes values in place
    param.set_value(15.0);
    assert_eq!(param.value(), 15.0);
    assert_eq!(param.init_value(), 10.0);

    param.reset();
    assert_eq!(param.value(), 10.0);

    param.set_vary(false);
    assert!(!param.vary());

    param.set_stderr(Some(0.25));
    assert_eq!(param.stderr(), Some(0.25));
}

#[test]
fn test_bounds_are_declarative() {
    let mut param = Parameter::with_bounds("sigma", 2.0, 0.0, 5.0).unwrap();

    // Out-of-range values are stored as given
    param.set_value(-1.0);
    assert_eq!(param.value(), -1.0);
    assert!(!param.is_within_bounds());
    assert_eq!(param.clamped_value(), 0.0);

    param.set_value(3.0);
    assert!(param.is_within_bounds());
}

#[test]
fn test_invalid_bounds() {
    assert!(matches!(
        Parameter::with_bounds("x0", 0.0, 2.0, 1.0),
        Err(BoundsError::InvalidBounds { .. })
    ));

    let mut param = Parameter::new("x0", 0.0);
    param.set_bounds(Some(-1.0), Some(1.0)).unwrap();
    assert!(param.set_upper_bound(Some(-2.0)).is_err());
    assert_eq!(param.upper_bound(), Some(1.0));

    param.set_lower_bound(None).unwrap();
    assert_eq!(param.bounds(), &Bounds::max_only(1.0));
}

#[test]
fn test_parameter_json() {
    let param = Parameter::new("A", 1.5).with_lower_bound(0.0).with_gradient();
    let json = serde_json::to_string(&param).unwrap();
    assert!(json.contains("null"));

    let back: Parameter = serde_json::from_str(&json).unwrap();
    assert_eq!(back, param);

    // Optional fields default when omitted
    let minimal: Parameter =
        serde_json::from_str(r#"{ "name": "C", "value": 2.0, "init_value": 2.0 }"#).unwrap();
    assert!(minimal.vary());
    assert_eq!(minimal.lower_bound(), None);
}
