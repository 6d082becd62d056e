//! # HeyCSS
//!
//! Core of a gallery of CSS effects: box-shadows, borders, gradients and
//! text styles.
//!
//! - [`hcss`]: the style record model and the record ↔ CSS text serializer
//! - [`studio`]: structured border, gradient and shadow editors
//! - [`catalog`]: the style catalog read from JSON
//! - [`clipboard`]: copying CSS through a pluggable clipboard sink
//!
//! ```rust
//! use heycss::catalog::{Catalog, StyleTab};
//!
//! let catalog = Catalog::from_json(
//!     r#"{ "border": [{ "id": 1, "name": "Mint", "style": { "border": "2px solid #a6deba" }, "css": "" }] }"#,
//! )
//! .unwrap();
//!
//! let item = catalog.find(StyleTab::Border, 1).unwrap();
//! assert_eq!(item.display_css(), "border: 2px solid #a6deba;");
//! ```

pub mod catalog;
pub mod clipboard;
pub mod error;

pub use hcss;
pub use studio;

pub use catalog::{Catalog, StyleItem, StyleTab};
pub use clipboard::{ClipboardError, ClipboardSink, CopyNotice, FallbackClipboard, copy_css, copy_style, write_style};
pub use error::{Error, Result};
