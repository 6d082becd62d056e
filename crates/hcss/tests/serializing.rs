//! Integration tests for object → text serialization.
//!
//! Covers the declaration-list output format:
//! - casing of property names, including vendor prefixes
//! - omission of unset and empty values
//! - one level of `&` nesting
//! - determinism

use hcss::serialize::{declarations, serialize, serialize_nested, serialize_rule};
use hcss::types::{Property, StyleKey, StyleRecord, StyleValue};
use insta::assert_snapshot;

fn record(entries: &[(&str, &str)]) -> StyleRecord {
    entries
        .iter()
        .map(|(key, value)| (Property::from_camel(key), *value))
        .collect()
}

// ============================================================================
// PROPERTY NAMES
// ============================================================================

#[test]
fn test_camel_keys_become_kebab_names() {
    let style = record(&[
        ("backgroundColor", "#fff"),
        ("borderTopLeftRadius", "4px"),
        ("textShadow", "0 1px 2px #000"),
    ]);

    assert_eq!(
        serialize(&style),
        "background-color: #fff; border-top-left-radius: 4px; text-shadow: 0 1px 2px #000;"
    );
}

#[test]
fn test_vendor_prefixed_keys() {
    let style = record(&[
        ("WebkitMaskImage", "linear-gradient(black, transparent)"),
        ("WebkitBackgroundClip", "text"),
        ("msTransform", "rotate(2deg)"),
    ]);

    assert_eq!(
        serialize(&style),
        "-webkit-mask-image: linear-gradient(black, transparent); \
         -webkit-background-clip: text; -ms-transform: rotate(2deg);"
    );
}

#[test]
fn test_single_word_key_is_unchanged() {
    assert_eq!(serialize(&record(&[("color", "red")])), "color: red;");
}

// ============================================================================
// OMISSION
// ============================================================================

#[test]
fn test_unset_and_empty_values_are_omitted() {
    let mut style = StyleRecord::new();
    style.insert(Property::Color, StyleValue::Unset);
    style.insert(Property::Background, "");
    style.insert(Property::BoxShadow, "0 0 0 1px #ddd");
    style.insert(Property::Opacity, None::<f64>);

    let css = serialize(&style);
    assert_eq!(css, "box-shadow: 0 0 0 1px #ddd;");
    assert!(!css.contains("color"));
    assert!(!css.contains("background"));
    assert!(!css.contains("opacity"));
}

#[test]
fn test_all_unset_record_is_empty_text() {
    let mut style = StyleRecord::new();
    style.insert(Property::Color, StyleValue::Unset);
    assert_eq!(serialize(&style), "");
}

// ============================================================================
// KEY UNIQUENESS
// ============================================================================

#[test]
fn test_other_key_with_known_css_name_is_same_entry() {
    let mut style = StyleRecord::new();
    style.insert(Property::Other("color".into()), "red");
    style.insert(Property::Color, "blue");

    assert_eq!(style.len(), 1);
    assert_eq!(style.text(&Property::Color), Some("blue"));
    assert_eq!(serialize(&style), "color: blue;");
}

#[test]
fn test_vendor_spellings_share_one_entry() {
    let mut style = StyleRecord::new();
    style.insert(Property::Other("webkitMaskImage".into()), "none");
    style.insert(Property::WebkitMaskImage, "linear-gradient(black, transparent)");
    style.insert(Property::Other("MozAppearance".into()), "none");
    style.insert(Property::Other("mozAppearance".into()), "auto");

    assert_eq!(style.len(), 2);
    assert_eq!(
        serialize(&style),
        "-webkit-mask-image: linear-gradient(black, transparent); -moz-appearance: auto;"
    );
}

#[test]
fn test_lookups_accept_other_spelling() {
    let style = record(&[("borderRadius", "4px")]);

    assert!(style.contains(&Property::Other("borderRadius".into())));
    assert_eq!(
        style.get(&StyleKey::Property(Property::Other("borderRadius".into()))),
        Some(&StyleValue::Text("4px".into()))
    );
}

// ============================================================================
// NUMBERS
// ============================================================================

#[test]
fn test_numbers_use_shortest_form() {
    let mut style = StyleRecord::new();
    style.insert(Property::Opacity, 0.75);
    style.insert(Property::FontWeight, 700);
    style.insert(Property::Other("zIndex".into()), -1);

    assert_eq!(serialize(&style), "opacity: 0.75; font-weight: 700; z-index: -1;");
}

// ============================================================================
// NESTED RULES
// ============================================================================

#[test]
fn test_nested_hover_block() {
    let mut style = record(&[("boxShadow", "0 1px 3px #0003")]);
    style.insert_nested(":hover", record(&[("boxShadow", "0 10px 20px #0004")]));

    assert_snapshot!(
        serialize(&style),
        @"box-shadow: 0 1px 3px #0003; :hover { box-shadow: 0 10px 20px #0004; }"
    );
}

#[test]
fn test_nested_block_with_outer_selector() {
    let mut style = record(&[("color", "#333")]);
    style.insert_nested(":hover", record(&[("color", "#000"), ("letterSpacing", "1px")]));
    style.insert_nested("::after", record(&[("content", "''")]));

    assert_snapshot!(
        serialize_nested(&style, ".style-text-2"),
        @"color: #333; .style-text-2:hover { color: #000; letter-spacing: 1px; } .style-text-2::after { content: ''; }"
    );
}

#[test]
fn test_rule_for_preview_injection() {
    let mut style = record(&[("border", "2px dashed #a6deba"), ("borderRadius", "10px")]);
    style.insert_nested(":hover", record(&[("borderColor", "#2f855a")]));

    assert_snapshot!(
        serialize_rule(".style-border-1", &style),
        @".style-border-1 { border: 2px dashed #a6deba; border-radius: 10px; } .style-border-1:hover { border-color: #2f855a; }"
    );
}

#[test]
fn test_rule_with_only_nested_declarations() {
    let mut style = StyleRecord::new();
    style.insert_nested(":hover", record(&[("opacity", "1")]));

    assert_eq!(serialize_rule(".a", &style), ".a:hover { opacity: 1; }");
}

// ============================================================================
// DOM MAPPING
// ============================================================================

#[test]
fn test_declarations_skip_nested_and_unset() {
    let mut style = record(&[("backgroundImage", "linear-gradient(red, blue)")]);
    style.insert(Property::Color, StyleValue::Unset);
    style.insert_nested(":hover", record(&[("opacity", "0.9")]));

    assert_eq!(
        declarations(&style),
        vec![(
            "background-image".to_string(),
            "linear-gradient(red, blue)".to_string()
        )]
    );
}

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn test_serialize_is_deterministic() {
    let mut style = record(&[
        ("background", "linear-gradient(135deg, #ff7e5f 0%, #feb47b 100%)"),
        ("borderRadius", "16px"),
        ("boxShadow", "0 4px 6px rgba(0, 0, 0, 0.1)"),
    ]);
    style.insert_nested(":hover", record(&[("transform", "scale(1.05)")]));

    let first = serialize(&style);
    let second = serialize(&style);
    assert_eq!(first, second);
    assert_eq!(first, style.to_string());
}

#[test]
fn test_insertion_order_is_output_order() {
    let a = record(&[("color", "red"), ("opacity", "1")]);
    let b = record(&[("opacity", "1"), ("color", "red")]);

    assert_eq!(serialize(&a), "color: red; opacity: 1;");
    assert_eq!(serialize(&b), "opacity: 1; color: red;");
}
