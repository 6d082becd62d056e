//! # Studio - structured style editors
//!
//! Editors that keep form-control state and CSS text in sync, built on
//! [`hcss`].
//!
//! - [`BorderEditor`]: border sides, corner radii, a background gradient and
//!   a mask
//! - [`ShadowEditor`]: a single box-shadow
//!
//! Every operation runs to completion and returns an [`EditorOutput`] with
//! the updated state and freshly generated text. Editors own their state;
//! nothing is shared between instances.
//!
//! ## Quick Start
//!
//! ```rust
//! use studio::BorderEditor;
//! use studio::gradient::GradientStopUpdate;
//!
//! let mut editor = BorderEditor::new();
//! editor.set_unified_radius(false);
//! editor.add_gradient_stop();
//! let id = editor.state().gradient.stops()[0].id;
//! let output = editor.update_gradient_stop(id, GradientStopUpdate::Color("#0000ff".into()));
//!
//! assert_eq!(
//!     output.css,
//!     "border: 2px solid #a6deba; border-radius: 10px 10px 10px 10px; \
//!      background: linear-gradient(90deg, #0000ff 0%);"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`border`]: sides, corners, styles and their text forms
//! - [`gradient`]: gradient stops and `linear-gradient` parsing
//! - [`editor`]: the combined border editor
//! - [`shadow`]: the box-shadow editor
//! - [`config`]: opening defaults, loadable from JSON
//! - [`log_init`]: file logger for editor sessions

pub mod border;
pub mod config;
pub mod editor;
pub mod error;
pub mod gradient;
pub mod log_init;
pub mod shadow;

pub use config::{EditorConfig, ShadowConfig};
pub use editor::{BorderEditor, EditorOutput, EditorState};
pub use error::{Result, StudioError};
pub use log_init::init_logger;
pub use shadow::{ShadowEditor, ShadowUpdate};
