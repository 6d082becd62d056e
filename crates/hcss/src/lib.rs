//! # HCSS - HeyCSS style serializer
//!
//! The translation layer between the gallery's structured style records and
//! flat CSS declaration text.
//!
//! - **Serializing**: [`StyleRecord`](types::StyleRecord) → `"prop: value; ..."`
//!   for display, preview injection and clipboard export
//! - **Parsing**: hand-typed declaration text → [`StyleRecord`](types::StyleRecord),
//!   lenient by default
//! - **Types**: the record model, known CSS properties and color parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use hcss::{deserialize, serialize};
//! use hcss::types::{Property, StyleRecord};
//!
//! let mut record = StyleRecord::new();
//! record.insert(Property::BoxShadow, "0 10px 15px rgba(0, 0, 0, 0.1)");
//! record.insert(Property::BorderRadius, "12px");
//!
//! let css = serialize(&record);
//! assert_eq!(
//!     css,
//!     "box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); border-radius: 12px;"
//! );
//! assert_eq!(deserialize(&css), record);
//! ```
//!
//! ## Supported Syntax
//!
//! - Flat `property: value;` lists
//! - One level of nested rules: `&:hover { ... }`
//!
//! Selectors, at-rules, comments and quoted values containing `;` are not
//! understood.
//!
//! ## Modules
//!
//! - [`serialize`]: object → text
//! - [`parser`]: text → object
//! - [`casing`]: camel ↔ kebab property-name conversion
//! - [`types`]: records, properties and colors
//! - [`error`]: error types for the strict parser and color parsing

pub mod casing;
pub mod error;
pub mod parser;
pub mod serialize;
pub mod types;

pub use error::{ColorParseError, HcssError};
pub use parser::{deserialize, deserialize_border, expand_border_shorthand};
pub use serialize::serialize;
pub use types::{Property, StyleKey, StyleRecord, StyleValue};
