//! Integration tests for JSON configuration

use ndarray::array;
use specfit_rs::components::{ComponentConfig, ModelConfig};
use specfit_rs::model::Model;
use specfit_rs::SpecFitError;

const CONFIG: &str = r#"{
    "components": [
        { "kind": "interface_mode_intensity", "mode": "right", "A": 2.0, "x0": 1.0 },
        { "kind": "interface_mode_intensity", "mode": "left", "x0": 1.0 },
        { "kind": "ramp", "name": "background", "m": 0.5, "active": false }
    ]
}"#;

#[test]
fn test_model_from_config() {
    let config = ModelConfig::from_json(CONFIG).unwrap();
    let model = Model::from_config(&config).unwrap();

    assert_eq!(
        model.names(),
        vec!["InterfaceModeIntensity", "InterfaceModeIntensity_2", "background"]
    );
    assert!(!model.iter().nth(2).unwrap().is_active());

    // The inactive ramp does not contribute
    let y = model.evaluate(&array![1.0, 5.0]).unwrap();
    assert_eq!(y[0], 0.0);
    assert!(y[1] > 0.0);
}

#[test]
fn test_invalid_mode_in_config() {
    let config = ModelConfig::from_json(
        r#"{ "components": [ { "kind": "boundary_loss", "mode": "inside" } ] }"#,
    )
    .unwrap();
    assert!(matches!(
        Model::from_config(&config),
        Err(SpecFitError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_duplicate_explicit_names() {
    let config = ModelConfig {
        components: vec![
            ComponentConfig::Ramp { m: 1.0, x0: 0.0 }.into(),
            ComponentConfig::Ramp { m: 1.0, x0: 0.0 }.into(),
        ],
    };
    // Generated names stay unique
    assert_eq!(Model::from_config(&config).unwrap().names(), vec!["Ramp", "Ramp_2"]);

    let mut named = config.clone();
    for entry in named.components.iter_mut() {
        entry.name = Some("bg".to_string());
    }
    assert!(Model::from_config(&named).is_err());
}
