//! Object → text serialization.
//!
//! Turns a [`StyleRecord`] into CSS declaration text for display, preview
//! injection and clipboard export.
//!
//! ## Output Shape
//!
//! ```text
//! box-shadow: 0 4px 6px #0002; opacity: 0.5; :hover { opacity: 1; }
//! ```
//!
//! - Each set property becomes `<css-name>: <value>; `
//! - Unset values and empty strings are skipped
//! - A nested `&<suffix>` entry becomes `<outer><suffix> { ... }`
//! - The result is trimmed
//!
//! Only one level of nesting is supported. Blocks nested inside a nested
//! block are skipped with a warning.

use std::fmt::Write;

use crate::types::{StyleKey, StyleRecord, StyleValue};

/// Serializes a record into a CSS declaration list.
///
/// # Examples
///
/// ```
/// use hcss::serialize;
/// use hcss::types::{Property, StyleRecord, StyleValue};
///
/// let mut record = StyleRecord::new();
/// record.insert(Property::BackgroundColor, "#fff");
/// record.insert(Property::Color, StyleValue::Unset);
/// record.insert(Property::Opacity, 0.5);
///
/// assert_eq!(serialize(&record), "background-color: #fff; opacity: 0.5;");
/// ```
pub fn serialize(record: &StyleRecord) -> String {
    serialize_nested(record, "")
}

/// Serializes a record, prefixing nested rule selectors with `outer`.
///
/// ```
/// use hcss::serialize::serialize_nested;
/// use hcss::types::{Property, StyleRecord};
///
/// let hover: StyleRecord = [(Property::Color, "blue")].into_iter().collect();
/// let mut record: StyleRecord = [(Property::Color, "red")].into_iter().collect();
/// record.insert_nested(":hover", hover);
///
/// assert_eq!(
///     serialize_nested(&record, ".card"),
///     "color: red; .card:hover { color: blue; }"
/// );
/// ```
pub fn serialize_nested(record: &StyleRecord, outer: &str) -> String {
    let mut css = String::new();

    for (key, value) in record.iter() {
        match (key, value) {
            (StyleKey::Nested(suffix), StyleValue::Block(block)) => {
                let body = write_declarations(block);
                if !body.is_empty() {
                    let _ = write!(css, "{outer}{suffix} {{ {body} }} ");
                }
            }
            (StyleKey::Nested(suffix), _) => {
                log::debug!("skipping non-block value for nested rule &{suffix}");
            }
            (StyleKey::Property(property), value) => {
                write_declaration(&mut css, &property.css_name(), value);
            }
        }
    }

    css.trim().to_string()
}

/// Renders a complete rule for live previews.
///
/// Top-level declarations go into `selector { ... }`; each nested entry
/// becomes its own rule appended after it. Rules without declarations are
/// left out.
///
/// ```
/// use hcss::serialize::serialize_rule;
/// use hcss::types::{Property, StyleRecord};
///
/// let hover: StyleRecord = [(Property::Opacity, 1)].into_iter().collect();
/// let mut record: StyleRecord = [(Property::Opacity, "0.8")].into_iter().collect();
/// record.insert_nested(":hover", hover);
///
/// assert_eq!(
///     serialize_rule(".style-3", &record),
///     ".style-3 { opacity: 0.8; } .style-3:hover { opacity: 1; }"
/// );
/// ```
pub fn serialize_rule(selector: &str, record: &StyleRecord) -> String {
    let mut rules = Vec::new();

    let body = write_declarations(record);
    if !body.is_empty() {
        rules.push(format!("{selector} {{ {body} }}"));
    }

    for (key, value) in record.iter() {
        if let (StyleKey::Nested(suffix), StyleValue::Block(block)) = (key, value) {
            let body = write_declarations(block);
            if !body.is_empty() {
                rules.push(format!("{selector}{suffix} {{ {body} }}"));
            }
        }
    }

    rules.join(" ")
}

/// Returns the set top-level declarations as `(css-name, value)` pairs, the
/// mapping a rendering layer applies to a DOM node.
///
/// ```
/// use hcss::serialize::declarations;
/// use hcss::types::{Property, StyleRecord};
///
/// let record: StyleRecord = [(Property::BorderRadius, "8px")].into_iter().collect();
/// assert_eq!(
///     declarations(&record),
///     vec![("border-radius".to_string(), "8px".to_string())]
/// );
/// ```
pub fn declarations(record: &StyleRecord) -> Vec<(String, String)> {
    record
        .iter()
        .filter_map(|(key, value)| match (key, value) {
            (StyleKey::Property(property), StyleValue::Text(_) | StyleValue::Number(_))
                if !value.is_unset() =>
            {
                Some((property.css_name().into_owned(), value.to_string()))
            }
            _ => None,
        })
        .collect()
}

/// Writes the flat declarations of a record, skipping deeper nesting.
fn write_declarations(record: &StyleRecord) -> String {
    let mut css = String::new();
    for (key, value) in record.iter() {
        match key {
            StyleKey::Property(property) => write_declaration(&mut css, &property.css_name(), value),
            StyleKey::Nested(suffix) => {
                log::warn!("nested rule &{suffix} is more than one level deep; skipped");
            }
        }
    }
    css.trim().to_string()
}

fn write_declaration(css: &mut String, name: &str, value: &StyleValue) {
    match value {
        StyleValue::Text(_) | StyleValue::Number(_) if !value.is_unset() => {
            let _ = write!(css, "{name}: {value}; ");
        }
        StyleValue::Block(_) => {
            log::debug!("skipping block value for property {name}");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Property;

    #[test]
    fn empty_record_serializes_to_empty_string() {
        assert_eq!(serialize(&StyleRecord::new()), "");
    }

    #[test]
    fn empty_nested_block_is_omitted() {
        let mut record: StyleRecord = [(Property::Color, "red")].into_iter().collect();
        record.insert_nested(":hover", [(Property::Color, "")].into_iter().collect());
        assert_eq!(serialize(&record), "color: red;");
    }

    #[test]
    fn deeper_nesting_is_skipped() {
        let inner: StyleRecord = [(Property::Color, "green")].into_iter().collect();
        let mut hover: StyleRecord = [(Property::Color, "blue")].into_iter().collect();
        hover.insert_nested(":focus", inner);
        let mut record = StyleRecord::new();
        record.insert_nested(":hover", hover);

        assert_eq!(serialize(&record), ":hover { color: blue; }");
    }
}
