//! The structured style representation.
//!
//! A [`StyleRecord`] is an insertion-ordered map of [`StyleKey`] to
//! [`StyleValue`]. It drives live previews and form controls, and is the input
//! of [`serialize`](crate::serialize::serialize).
//!
//! ## Keys
//!
//! - [`StyleKey::Property`]: a CSS property ([`Property`])
//! - [`StyleKey::Nested`]: a nested rule introduced by `&` (e.g. `&:hover`),
//!   holding the selector suffix after the `&`
//!
//! ## Unset values
//!
//! [`StyleValue::Unset`] and empty text mean "not set"; they are kept in the
//! record but never serialized.
//!
//! ## JSON
//!
//! Records deserialize from the gallery's catalog objects:
//!
//! ```
//! use hcss::types::{Property, StyleRecord, StyleValue};
//!
//! let record: StyleRecord = serde_json::from_str(
//!     r#"{ "boxShadow": "0 4px 6px #0002", "opacity": 0.5, "&:hover": { "opacity": 1 } }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(record.text(&Property::BoxShadow), Some("0 4px 6px #0002"));
//! assert_eq!(record.get(&Property::Opacity.into()), Some(&StyleValue::Number(0.5)));
//! assert!(record.nested(":hover").is_some());
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::property::Property;

/// Key of a [`StyleRecord`] entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// A CSS property declaration.
    Property(Property),
    /// A nested rule; holds the selector suffix after `&` (e.g. `:hover`).
    Nested(String),
}

impl StyleKey {
    /// Parses a raw record key: `&`-prefixed keys are nested rules, anything
    /// else is a camel-case property key.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.strip_prefix('&') {
            Some(suffix) => StyleKey::Nested(suffix.to_string()),
            None => StyleKey::Property(Property::from_camel(raw).normalized()),
        }
    }

    /// Folds property keys that share a CSS name onto one key.
    pub fn normalized(self) -> Self {
        match self {
            StyleKey::Property(property) => StyleKey::Property(property.normalized()),
            nested => nested,
        }
    }

    /// The raw record key (`boxShadow`, `&:hover`).
    pub fn raw(&self) -> String {
        match self {
            StyleKey::Property(property) => property.camel_name().to_string(),
            StyleKey::Nested(suffix) => format!("&{suffix}"),
        }
    }
}

impl From<Property> for StyleKey {
    fn from(property: Property) -> Self {
        StyleKey::Property(property.normalized())
    }
}

/// Value of a [`StyleRecord`] entry.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A textual CSS value (`2px solid #fff`).
    Text(String),
    /// A bare number (`0.5`, `700`).
    Number(f64),
    /// Explicitly unset; omitted from serialized output.
    Unset,
    /// Declarations of a nested `&` rule.
    Block(StyleRecord),
}

impl StyleValue {
    /// Returns `true` if this value is omitted from serialized output.
    pub fn is_unset(&self) -> bool {
        match self {
            StyleValue::Unset => true,
            StyleValue::Text(text) => text.is_empty(),
            StyleValue::Number(n) => !n.is_finite(),
            StyleValue::Block(_) => false,
        }
    }

    /// Returns the text of a [`StyleValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(text) => f.write_str(text),
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Unset => Ok(()),
            StyleValue::Block(record) => write!(f, "{{ {record} }}"),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        StyleValue::Text(text.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        StyleValue::Text(text)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<StyleRecord> for StyleValue {
    fn from(record: StyleRecord) -> Self {
        StyleValue::Block(record)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleValue::Unset, Into::into)
    }
}

/// An ordered set of CSS declarations with unique keys.
///
/// Inserting an existing key replaces its value in place, keeping the
/// original position. Keys are unique by CSS name: `Property::Other("color")`
/// and `Property::Color` address the same entry.
///
/// # Examples
///
/// ```
/// use hcss::types::{Property, StyleRecord};
///
/// let mut record = StyleRecord::new();
/// record.insert(Property::Color, "red");
/// record.insert(Property::Color, "blue");
///
/// assert_eq!(record.len(), 1);
/// assert_eq!(record.text(&Property::Color), Some("blue"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleRecord {
    entries: IndexMap<StyleKey, StyleValue>,
}

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<StyleKey>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.entries.insert(key.into().normalized(), value.into())
    }

    /// Inserts or replaces a nested `&<suffix>` rule.
    pub fn insert_nested(&mut self, suffix: &str, block: StyleRecord) -> Option<StyleValue> {
        self.entries
            .insert(StyleKey::Nested(suffix.to_string()), StyleValue::Block(block))
    }

    pub fn get(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.entries.get(&key.clone().normalized())
    }

    /// Returns the value of a property if it is set and textual.
    pub fn text(&self, property: &Property) -> Option<&str> {
        self.entries
            .get(&StyleKey::from(property.clone()))
            .filter(|value| !value.is_unset())
            .and_then(StyleValue::as_text)
    }

    /// Returns the declarations of a nested `&<suffix>` rule.
    pub fn nested(&self, suffix: &str) -> Option<&StyleRecord> {
        match self.entries.get(&StyleKey::Nested(suffix.to_string())) {
            Some(StyleValue::Block(block)) => Some(block),
            _ => None,
        }
    }

    pub fn contains(&self, property: &Property) -> bool {
        self.entries.contains_key(&StyleKey::from(property.clone()))
    }

    /// Removes an entry, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &StyleKey) -> Option<StyleValue> {
        self.entries.shift_remove(&key.clone().normalized())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &StyleValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &StyleKey> {
        self.entries.keys()
    }
}

impl<K: Into<StyleKey>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = StyleRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl IntoIterator for StyleRecord {
    type Item = (StyleKey, StyleValue);
    type IntoIter = indexmap::map::IntoIter<StyleKey, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for StyleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize::serialize(self))
    }
}

/// Untyped JSON value accepted in catalog objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Block(StyleRecord),
    Null,
}

impl<'de> Deserialize<'de> for StyleRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StyleRecordVisitor)
    }
}

struct StyleRecordVisitor;

impl<'de> Visitor<'de> for StyleRecordVisitor {
    type Value = StyleRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of CSS property names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut record = StyleRecord::new();

        while let Some((raw_key, raw_value)) = map.next_entry::<String, RawValue>()? {
            let key = StyleKey::parse(&raw_key);
            let value = match (&key, raw_value) {
                (StyleKey::Nested(_), RawValue::Block(block)) => StyleValue::Block(block),
                (StyleKey::Nested(_), _) => {
                    log::debug!("ignoring non-object value for nested rule {raw_key}");
                    continue;
                }
                (StyleKey::Property(_), RawValue::Block(_)) => {
                    log::debug!("ignoring object value for property {raw_key}");
                    continue;
                }
                (_, RawValue::Text(text)) => StyleValue::Text(text),
                (_, RawValue::Number(n)) => StyleValue::Number(n),
                (_, RawValue::Bool(b)) => StyleValue::Text(b.to_string()),
                (_, RawValue::Null) => StyleValue::Unset,
            };
            record.insert(key, value);
        }

        Ok(record)
    }
}

impl Serialize for StyleRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            let key = key.raw();
            match value {
                StyleValue::Text(text) => map.serialize_entry(&key, text)?,
                StyleValue::Number(n) => map.serialize_entry(&key, n)?,
                StyleValue::Unset => map.serialize_entry(&key, &())?,
                StyleValue::Block(block) => map.serialize_entry(&key, block)?,
            }
        }
        map.end()
    }
}
