//! Tests for editor configuration loading.

use std::io::Write;

use studio::border::{BorderStyle, BorderValue};
use studio::{BorderEditor, EditorConfig, StudioError};

#[test]
fn test_defaults() {
    let config = EditorConfig::default();

    assert_eq!(config.border, BorderValue::new(2, BorderStyle::Solid, "#a6deba"));
    assert!(config.border_unified);
    assert_eq!(config.radius, 10);
    assert!(config.radius_unified);
    assert_eq!(config.gradient_direction, "90deg");
    assert_eq!(config.stop_color, "#ffffff");
}

#[test]
fn test_empty_object_is_default() {
    assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
}

#[test]
fn test_border_override() {
    let config = EditorConfig::from_json(
        r##"{ "border": { "width": 1, "style": "dotted", "color": "#333" } }"##,
    )
    .unwrap();
    let editor = BorderEditor::with_config(&config);

    assert_eq!(editor.css(), "border: 1px dotted #333; border-radius: 10px;");
}

#[test]
fn test_unknown_border_style_is_rejected() {
    let result = EditorConfig::from_json(
        r#"{ "border": { "width": 1, "style": "wavy", "color": "red" } }"#,
    );
    assert!(matches!(result, Err(StudioError::Config(_))));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "radius": 4, "radiusUnified": true }}"#).unwrap();

    let config = EditorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.radius, 4);
    assert_eq!(config.border, BorderValue::default());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = EditorConfig::from_file(dir.path().join("missing.json"));
    assert!(matches!(result, Err(StudioError::Io(_))));
}
