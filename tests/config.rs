use selectbox::config::Config;
use selectbox::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.placeholder, "-- Select --");
    assert_eq!(config.ui.modal_width_percent, 60);
    assert_eq!(config.ui.modal_height_percent, 60);
    assert!(config.ui.show_title);
    assert!(config.ui.show_search_bar);
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.display.icon_theme, IconTheme::Ascii);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Out-of-bounds modal width should fail
    config.ui.modal_width_percent = 10;
    assert!(config.validate().is_err());

    // Reset and test the height bound
    config.ui.modal_width_percent = 60;
    config.ui.modal_height_percent = 99;
    assert!(config.validate().is_err());

    // Empty placeholder should fail
    config.ui.modal_height_percent = 60;
    config.ui.placeholder = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_title_requires_text_when_shown() {
    let mut config = Config::default();
    config.ui.modal_title = String::new();
    assert!(config.validate().is_err());

    config.ui.show_title = false;
    assert!(config.validate().is_ok());
}

#[test]
fn test_logging_requires_file_when_enabled() {
    let mut config = Config::default();
    config.logging.enabled = true;
    assert!(config.validate().is_ok());

    config.logging.file = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("placeholder = \"-- Select --\""));
    assert!(toml_str.contains("modal_width_percent = 60"));
    assert!(toml_str.contains("icon_theme = \"ascii\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
placeholder = "Pick one"
show_search_bar = false

[display]
icon_theme = "unicode"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.placeholder, "Pick one");
    assert!(!config.ui.show_search_bar);
    assert_eq!(config.display.icon_theme, IconTheme::Unicode);

    // Check that unspecified values use defaults
    assert!(config.ui.show_title);
    assert_eq!(config.ui.modal_width_percent, 60);
    assert!(!config.logging.enabled);
}

#[test]
fn test_empty_config_deserialization() {
    // Empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.placeholder, default_config.ui.placeholder);
    assert_eq!(config.ui.modal_title, default_config.ui.modal_title);
    assert_eq!(config.display.icon_theme, default_config.display.icon_theme);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}
