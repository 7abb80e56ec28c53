//! Tests for scan settings

use reuse::{Classifier, ReuseError, Settings};

#[test]
fn test_settings_default() {
    let settings = Settings::default();
    assert!(!settings.include_meson_subprojects);
}

#[test]
fn test_empty_document_uses_defaults() {
    let settings = Settings::from_toml_str("").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_parse_meson_flag() {
    let settings = Settings::from_toml_str("include_meson_subprojects = true\n").unwrap();
    assert!(settings.include_meson_subprojects);
    assert!(!Classifier::new(settings).ignores_subprojects_under("subprojects"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let result = Settings::from_toml_str("include_meson_subprojects = ");
    assert!(matches!(result, Err(ReuseError::Config(_))));
}

#[test]
fn test_wrong_type_is_config_error() {
    let result = Settings::from_toml_str("include_meson_subprojects = \"yes\"");
    assert!(matches!(result, Err(ReuseError::Config(_))));
}

#[test]
fn test_settings_save_and_load() {
    let settings = Settings::default().with_meson_subprojects(true);
    let content = settings.to_toml_string().unwrap();
    assert!(content.contains("include_meson_subprojects = true"));

    let loaded = Settings::from_toml_str(&content).unwrap();
    assert_eq!(loaded, settings);
}
