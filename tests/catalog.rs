//! Integration tests for catalog loading.

use std::fs;

use heycss::catalog::{Catalog, StyleTab};
use heycss::hcss::types::{Property, StyleValue};
use heycss::Error;
use insta::assert_snapshot;

const BORDER_JSON: &str = r##"[
  {
    "id": 1,
    "name": "Mint Outline",
    "style": { "border": "2px solid #a6deba", "borderRadius": "10px" },
    "css": "border: 2px solid #a6deba; border-radius: 10px;"
  },
  {
    "id": 2,
    "name": "Dashed Hover",
    "style": {
      "border": "2px dashed #94a3b8",
      "padding": null,
      "&:hover": { "borderColor": "#0f172a" }
    },
    "css": ""
  }
]"##;

fn write_catalog(dir: &std::path::Path) {
    fs::write(dir.join("boxShadow.json"), r#"[{ "id": 1, "name": "Soft", "style": { "boxShadow": "0 1px 2px #0002" }, "css": "box-shadow: 0 1px 2px #0002;" }]"#).unwrap();
    fs::write(dir.join("border.json"), BORDER_JSON).unwrap();
    fs::write(dir.join("gradient.json"), "[]").unwrap();
    fs::write(dir.join("text.json"), r#"[{ "id": 7, "name": "Shout", "style": { "textTransform": "uppercase", "letterSpacing": 2 } }]"#).unwrap();
}

// ============================================================================
// TABS
// ============================================================================

#[test]
fn test_tab_keys_and_labels() {
    let tabs: Vec<(&str, &str)> = StyleTab::ALL
        .iter()
        .map(|tab| (tab.key(), tab.label()))
        .collect();

    assert_eq!(
        tabs,
        [
            ("boxShadow", "Box Shadows"),
            ("border", "Borders"),
            ("gradient", "Gradients"),
            ("text", "Text"),
        ]
    );
    assert_eq!(StyleTab::from_key("gradient"), Some(StyleTab::Gradient));
    assert_eq!(StyleTab::from_key("Gradient"), None);
}

// ============================================================================
// LOADING
// ============================================================================

#[test]
fn test_from_json_files() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());

    let catalog = Catalog::from_json_files(dir.path()).unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.items(StyleTab::Border).len(), 2);
    assert!(catalog.items(StyleTab::Gradient).is_empty());

    let dashed = catalog.find(StyleTab::Border, 2).unwrap();
    assert_eq!(dashed.name, "Dashed Hover");
    assert_eq!(
        dashed.style.get(&Property::Padding.into()),
        Some(&StyleValue::Unset)
    );
    assert!(dashed.style.nested(":hover").is_some());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("border.json"), BORDER_JSON).unwrap();

    assert!(matches!(Catalog::from_json_files(dir.path()), Err(Error::Io(_))));
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());
    fs::write(dir.path().join("gradient.json"), r#"{ "not": "an array" }"#).unwrap();

    assert!(matches!(Catalog::from_json_files(dir.path()), Err(Error::Json(_))));
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_display_css_prefers_stored_text() {
    let catalog = Catalog::from_json(&format!(r#"{{ "border": {BORDER_JSON} }}"#)).unwrap();

    let mint = catalog.find(StyleTab::Border, 1).unwrap();
    assert_eq!(mint.display_css(), "border: 2px solid #a6deba; border-radius: 10px;");

    let dashed = catalog.find(StyleTab::Border, 2).unwrap();
    assert_eq!(
        dashed.display_css(),
        "border: 2px dashed #94a3b8; :hover { border-color: #0f172a; }"
    );
}

#[test]
fn test_stylesheet_for_previews() {
    let catalog = Catalog::from_json(&format!(r#"{{ "border": {BORDER_JSON} }}"#)).unwrap();

    assert_snapshot!(catalog.stylesheet(StyleTab::Border), @r"
    .style-border-1 { border: 2px solid #a6deba; border-radius: 10px; }
    .style-border-2 { border: 2px dashed #94a3b8; } .style-border-2:hover { border-color: #0f172a; }
    ");
}
