//! Text → object parsing.
//!
//! This module turns CSS declaration text back into a [`StyleRecord`]:
//!
//! - [`deserialize`]: lenient entry point; malformed segments are skipped
//! - [`parse_declarations`]: strict variant reporting the first malformed
//!   segment
//! - [`expand_border_shorthand`] / [`deserialize_border`]: split `border`
//!   into its four side longhands for border editing
//!
//! ## Submodules
//!
//! - [`segments`]: splitting text into declarations and nested `&` blocks
//! - [`values`]: scanning helpers for colors, percentages, lengths and
//!   function arguments
//!
//! ## Example
//!
//! ```rust
//! use hcss::parser::deserialize;
//! use hcss::types::Property;
//!
//! let record = deserialize("background-color: #fff; border-radius : 8px; junk;");
//! assert_eq!(record.len(), 2);
//! assert_eq!(record.text(&Property::BorderRadius), Some("8px"));
//! ```

pub mod segments;
pub mod values;

use crate::HcssError;
use crate::parser::segments::{Segment, split_declaration, split_segments};
use crate::types::{Property, StyleKey, StyleRecord};

/// Parses declaration text into a record, skipping anything malformed.
///
/// Property names are converted to camel case; later duplicates replace
/// earlier values. One level of `&<suffix> { ... }` nesting is understood.
/// Never fails.
///
/// Every value comes back as [`StyleValue::Text`](crate::types::StyleValue::Text),
/// so a serialized `Number(0.5)` parses as `Text("0.5")`. Round trips are
/// exact for text values and equal up to this for numbers.
pub fn deserialize(css: &str) -> StyleRecord {
    let mut record = StyleRecord::new();

    for segment in split_segments(css) {
        match segment {
            Segment::Declaration(text) => match split_declaration(text) {
                Some((name, value)) => {
                    record.insert(Property::from_css_name(name), value);
                }
                None => log::debug!("skipping malformed declaration {text:?}"),
            },
            Segment::Nested { suffix, body } => {
                record.insert_nested(suffix, deserialize_flat(body));
            }
            Segment::Unclosed(text) => log::debug!("skipping unclosed nested block {text:?}"),
        }
    }

    record
}

/// Parses declaration text like [`deserialize`], then expands a `border`
/// shorthand into its four sides.
///
/// ```
/// use hcss::parser::deserialize_border;
/// use hcss::types::Property;
///
/// let record = deserialize_border("border: 2px solid red; border-radius: 4px;");
/// assert!(!record.contains(&Property::Border));
/// assert_eq!(record.text(&Property::BorderLeft), Some("2px solid red"));
/// ```
pub fn deserialize_border(css: &str) -> StyleRecord {
    let mut record = deserialize(css);
    expand_border_shorthand(&mut record);
    record
}

/// Replaces a top-level `border` entry with `borderTop`, `borderRight`,
/// `borderBottom` and `borderLeft` carrying the same value, at the position
/// the shorthand occupied.
///
/// A side that is also declared elsewhere in the record keeps whichever
/// value comes last in the record.
pub fn expand_border_shorthand(record: &mut StyleRecord) {
    if !record.contains(&Property::Border) {
        return;
    }

    let mut expanded = StyleRecord::new();
    for (key, value) in std::mem::take(record) {
        if key == StyleKey::Property(Property::Border) {
            for side in BORDER_SIDES {
                expanded.insert(side, value.clone());
            }
        } else {
            expanded.insert(key, value);
        }
    }
    *record = expanded;
}

/// Parses declaration text, failing on the first malformed segment.
///
/// # Errors
///
/// - [`HcssError::InvalidSyntax`] for a segment without `name: value`
/// - [`HcssError::UnclosedBlock`] for a nested block missing its `}`
///
/// ```
/// use hcss::HcssError;
/// use hcss::parser::parse_declarations;
///
/// assert!(parse_declarations("color: red; &:hover { color: blue; }").is_ok());
/// assert_eq!(
///     parse_declarations("color red;"),
///     Err(HcssError::InvalidSyntax("color red".to_string()))
/// );
/// ```
pub fn parse_declarations(css: &str) -> Result<StyleRecord, HcssError> {
    let mut record = StyleRecord::new();

    for segment in split_segments(css) {
        match segment {
            Segment::Declaration(text) => {
                let (name, value) = split_declaration(text)
                    .ok_or_else(|| HcssError::InvalidSyntax(text.to_string()))?;
                record.insert(Property::from_css_name(name), value);
            }
            Segment::Nested { suffix, body } => {
                let block = parse_declarations(body)?;
                record.insert_nested(suffix, block);
            }
            Segment::Unclosed(text) => return Err(HcssError::UnclosedBlock(text.to_string())),
        }
    }

    Ok(record)
}

const BORDER_SIDES: [Property; 4] = [
    Property::BorderTop,
    Property::BorderRight,
    Property::BorderBottom,
    Property::BorderLeft,
];

/// Parses the body of a nested block; nothing inside it nests further.
fn deserialize_flat(body: &str) -> StyleRecord {
    let mut record = StyleRecord::new();
    for segment in split_segments(body) {
        if let Segment::Declaration(text) = segment {
            if let Some((name, value)) = split_declaration(text) {
                record.insert(Property::from_css_name(name), value);
            }
        }
    }
    record
}

impl From<&str> for StyleRecord {
    fn from(css: &str) -> Self {
        deserialize(css)
    }
}
