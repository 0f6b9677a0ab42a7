use kitchen_core::{ConfigError, KitchenConfig};

#[test]
fn empty_object_yields_defaults() {
    let config = KitchenConfig::from_json_str("{}").unwrap();
    assert_eq!(config, KitchenConfig::default());
    assert_eq!(config.default_category, "Other");
    assert_eq!(config.default_quantity, 1);
    assert_eq!(config.expiring_soon_days, 3);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config =
        KitchenConfig::from_json_str(r#"{"default_category": "Pantry", "expiring_soon_days": 5}"#)
            .unwrap();
    assert_eq!(config.default_category, "Pantry");
    assert_eq!(config.expiring_soon_days, 5);
    assert_eq!(config.default_shelf_life_days, 7);
}

#[test]
fn unknown_field_is_a_parse_error() {
    let err = KitchenConfig::from_json_str(r#"{"expiring_days": 5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err}");
}

#[test]
fn negative_window_and_blank_category_are_invalid() {
    let negative = KitchenConfig::from_json_str(r#"{"expiring_soon_days": -1}"#).unwrap_err();
    assert!(matches!(negative, ConfigError::Invalid(_)));

    let blank = KitchenConfig::from_json_str(r#"{"default_category": "  "}"#).unwrap_err();
    assert!(blank.to_string().contains("default_category"));
}

#[test]
fn unknown_log_level_is_invalid() {
    let err = KitchenConfig::from_json_str(r#"{"log_level": "verbose"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "unexpected error: {err}");
    assert!(err.to_string().contains("log_level"));

    let config = KitchenConfig::from_json_str(r#"{"log_level": "WARNING"}"#).unwrap();
    assert!(config.validate().is_ok());
}
