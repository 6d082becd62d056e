//! Clipboard plumbing for copying CSS.
//!
//! The core only hands text to a [`ClipboardSink`]; the UI shows the
//! returned [`CopyNotice`]. Nothing here waits or retries.
//!
//! ```
//! use heycss::clipboard::{copy_css, MemoryClipboard};
//!
//! let mut clipboard = MemoryClipboard::default();
//! let notice = copy_css(&mut clipboard, "color: red;");
//!
//! assert_eq!(notice.title, "Copied!");
//! assert_eq!(clipboard.contents(), Some("color: red;"));
//! ```

use hcss::{StyleRecord, serialize};
use thiserror::Error;

/// Why a clipboard write failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,

    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Something that accepts text for the system clipboard.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Toast content describing a copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyNotice {
    pub title: &'static str,
    pub description: &'static str,
    /// Shown in the error style.
    pub destructive: bool,
}

impl CopyNotice {
    pub const COPIED: CopyNotice = CopyNotice {
        title: "Copied!",
        description: "CSS code copied to clipboard",
        destructive: false,
    };

    pub const FAILED: CopyNotice = CopyNotice {
        title: "Copy Failed",
        description: "Please copy the CSS manually",
        destructive: true,
    };

    pub fn is_success(&self) -> bool {
        !self.destructive
    }
}

/// Copies `text` and describes the outcome.
pub fn copy_css(sink: &mut impl ClipboardSink, text: &str) -> CopyNotice {
    match sink.write_text(text) {
        Ok(()) => CopyNotice::COPIED,
        Err(err) => {
            log::warn!("failed to copy css: {err}");
            CopyNotice::FAILED
        }
    }
}

/// Serializes `style` and copies the result.
pub fn copy_style(sink: &mut impl ClipboardSink, style: &StyleRecord) -> CopyNotice {
    copy_css(sink, &serialize(style))
}

/// Serializes `style` and copies it, reporting failure as an error instead
/// of a notice.
pub fn write_style(sink: &mut impl ClipboardSink, style: &StyleRecord) -> crate::Result<()> {
    sink.write_text(&serialize(style))?;
    Ok(())
}

/// Tries `primary`, then `fallback` if the primary write fails.
#[derive(Debug, Clone, Default)]
pub struct FallbackClipboard<P, F> {
    pub primary: P,
    pub fallback: F,
}

impl<P, F> FallbackClipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ClipboardSink, F: ClipboardSink> ClipboardSink for FallbackClipboard<P, F> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.primary.write_text(text) {
            Ok(()) => Ok(()),
            Err(err) => {
                log::debug!("primary clipboard failed ({err}); trying fallback");
                self.fallback.write_text(text)
            }
        }
    }
}

/// An in-process clipboard holding the last written text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// A clipboard that is never available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoClipboard;

impl ClipboardSink for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

impl<S: ClipboardSink + ?Sized> ClipboardSink for &mut S {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}
