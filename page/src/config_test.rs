use super::*;

#[test]
fn default_config_is_valid() {
    let config = PageConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.submit_delay_ms, 2000);
    assert_eq!(config.log_level(), log::Level::Info);
}

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}").unwrap();
    assert_eq!(config, PageConfig::default());
}

#[test]
fn from_json_overrides_only_named_fields() {
    let config = PageConfig::from_json(r#"{ "submitDelayMs": 50, "cardStaggerMs": 20, "logLevel": "debug" }"#).unwrap();
    assert_eq!(config.submit_delay_ms, 50);
    assert_eq!(config.card_stagger_ms, 20);
    assert_eq!(config.section_stagger_ms, consts::SECTION_STAGGER_MS);
    assert_eq!(config.log_level(), log::Level::Debug);
}

#[test]
fn from_json_rejects_unknown_keys() {
    let err = PageConfig::from_json(r#"{ "submitDelay": 50 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = PageConfig::from_json("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("config is not valid JSON"));
}

#[test]
fn threshold_outside_unit_interval_is_rejected() {
    for raw in [r#"{ "revealThreshold": 0 }"#, r#"{ "revealThreshold": 1.5 }"#] {
        let err = PageConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "revealThreshold", .. }), "{raw}");
    }
}

#[test]
fn zero_typing_cadence_is_rejected() {
    let err = PageConfig::from_json(r#"{ "titleCadenceMs": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "titleCadenceMs", .. }));
    let err = PageConfig::from_json(r#"{ "taglineCadenceMs": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "taglineCadenceMs", .. }));
}

#[test]
fn blank_storage_key_is_rejected() {
    let err = PageConfig::from_json(r#"{ "themeStorageKey": "  " }"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid config value for themeStorageKey: must not be empty");
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = PageConfig::from_json(r#"{ "logLevel": "loud" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "logLevel", .. }));
}
