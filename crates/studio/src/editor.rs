//! The combined border editor.
//!
//! [`BorderEditor`] owns border sides, corner radii, a background gradient
//! and a mask, plus the CSS text generated from them. Two directions keep
//! them in sync:
//!
//! - **Controls → text**: every named operation mutates the state and
//!   regenerates the whole text from scratch.
//! - **Text → controls**: [`BorderEditor::apply_hand_edited_text`] parses
//!   hand-typed CSS back into the state, falling back to defaults for
//!   anything it cannot read. The typed text is kept as the current text.
//!
//! ## Generated Text
//!
//! Declarations appear in this order, separated by single spaces:
//!
//! 1. `border: ...;` or the four `border-<side>: ...;`
//! 2. `border-radius: ...;`
//! 3. `background: linear-gradient(...);` when there are stops
//! 4. `-webkit-mask-image: ...; mask-image: ...;` when a mask is set
//!
//! ## Example
//!
//! ```
//! use studio::BorderEditor;
//! use studio::border::{BorderSide, BorderStyle, BorderUpdate};
//!
//! let mut editor = BorderEditor::new();
//! assert_eq!(editor.css(), "border: 2px solid #a6deba; border-radius: 10px;");
//!
//! let output = editor.update_border(BorderSide::Left, BorderUpdate::Style(BorderStyle::Dashed));
//! assert_eq!(output.css, "border: 2px dashed #a6deba; border-radius: 10px;");
//! ```

use hcss::types::{Property, StyleRecord};
use hcss::{deserialize, serialize};

use crate::border::{BorderCorner, BorderSide, BorderSides, BorderUpdate, BorderValues, RadiusValues};
use crate::config::EditorConfig;
use crate::gradient::{Gradient, GradientStopUpdate, StopId};

/// Borrowed view returned by every editor operation.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOutput<'a, S = EditorState> {
    pub state: &'a S,
    pub css: &'a str,
}

/// Structured state of the border editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub border: BorderValues,
    pub radius: RadiusValues,
    pub gradient: Gradient,
    pub mask: String,
}

impl EditorState {
    pub fn with_config(config: &EditorConfig) -> Self {
        let mut border = BorderValues::all(config.border.clone());
        border.unified = config.border_unified;
        let mut radius = RadiusValues::all(config.radius);
        radius.unified = config.radius_unified;

        Self {
            border,
            radius,
            gradient: Gradient::new(config.gradient_direction.as_str()),
            mask: String::new(),
        }
    }

    /// The state as a style record, for live previews.
    pub fn to_style(&self) -> StyleRecord {
        let mut record = StyleRecord::new();
        self.border.write_to(&mut record);
        self.radius.write_to(&mut record);
        if let Some(background) = self.gradient.to_css_value() {
            record.insert(Property::Background, background);
        }
        if !self.mask.is_empty() {
            record.insert(Property::WebkitMaskImage, self.mask.as_str());
            record.insert(Property::MaskImage, self.mask.as_str());
        }
        record
    }

    /// Generated CSS text; a pure function of the state.
    pub fn to_css(&self) -> String {
        serialize(&self.to_style())
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::with_config(&EditorConfig::default())
    }
}

/// Border, radius, gradient and mask editor.
#[derive(Debug, Clone)]
pub struct BorderEditor {
    state: EditorState,
    css: String,
    stop_color: String,
}

impl BorderEditor {
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        let mut editor = Self {
            state: EditorState::with_config(config),
            css: String::new(),
            stop_color: config.stop_color.clone(),
        };
        editor.regenerate();
        editor
    }

    /// Opens the editor on an existing style, reading it like hand-edited
    /// text.
    pub fn open(style: &StyleRecord, config: &EditorConfig) -> Self {
        let mut editor = Self::with_config(config);
        editor.apply_hand_edited_text(&serialize(style));
        editor
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// The current text: generated, or as typed after a hand edit.
    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn output(&self) -> EditorOutput<'_> {
        EditorOutput {
            state: &self.state,
            css: &self.css,
        }
    }

    pub fn update_border(&mut self, side: BorderSide, update: BorderUpdate) -> EditorOutput<'_> {
        self.state.border.update(side, &update);
        self.regenerate();
        self.output()
    }

    pub fn update_radius(&mut self, corner: BorderCorner, px: u32) -> EditorOutput<'_> {
        self.state.radius.update(corner, px);
        self.regenerate();
        self.output()
    }

    pub fn set_unified_border(&mut self, unified: bool) -> EditorOutput<'_> {
        self.state.border.set_unified(unified);
        self.regenerate();
        self.output()
    }

    pub fn set_unified_radius(&mut self, unified: bool) -> EditorOutput<'_> {
        self.state.radius.set_unified(unified);
        self.regenerate();
        self.output()
    }

    /// Adds a stop with the configured color; see [`Gradient::add_stop`].
    pub fn add_gradient_stop(&mut self) -> EditorOutput<'_> {
        self.state.gradient.add_stop(self.stop_color.as_str());
        self.regenerate();
        self.output()
    }

    pub fn remove_gradient_stop(&mut self, id: StopId) -> EditorOutput<'_> {
        self.state.gradient.remove_stop(id);
        self.regenerate();
        self.output()
    }

    pub fn update_gradient_stop(
        &mut self,
        id: StopId,
        update: GradientStopUpdate,
    ) -> EditorOutput<'_> {
        self.state.gradient.update_stop(id, update);
        self.regenerate();
        self.output()
    }

    pub fn set_gradient_direction(&mut self, direction: &str) -> EditorOutput<'_> {
        self.state.gradient.set_direction(direction.trim());
        self.regenerate();
        self.output()
    }

    pub fn set_mask(&mut self, mask: &str) -> EditorOutput<'_> {
        self.state.mask = mask.trim().to_string();
        self.regenerate();
        self.output()
    }

    /// Reads hand-typed CSS back into the state.
    ///
    /// - Border: unified iff no `border-<side>` declaration is present;
    ///   sides without a readable `<w>px <style> <color>` become
    ///   `0px solid transparent`.
    /// - Radius: 1-4 lengths expanded per CSS; left unchanged when
    ///   `border-radius` is absent or unreadable.
    /// - Gradient: first `linear-gradient(...)` in `background` or
    ///   `background-image`; stops cleared when there is none.
    /// - Mask: from `mask-image` (or `-webkit-mask-image`), cleared when
    ///   absent.
    pub fn apply_hand_edited_text(&mut self, text: &str) -> EditorOutput<'_> {
        let record = deserialize(text);

        let (border, matched) = BorderValues::from_record(&record);
        if matched != BorderSides::ALL {
            log::debug!("hand edit described border sides {matched:?} only");
        }
        self.state.border = border;

        match record.text(&Property::BorderRadius) {
            Some(value) => match RadiusValues::parse(value) {
                Some(radius) => self.state.radius = radius,
                None => log::debug!("unreadable border-radius {value:?}; radius unchanged"),
            },
            None => log::debug!("no border-radius in hand edit; radius unchanged"),
        }

        let background = record
            .text(&Property::Background)
            .or_else(|| record.text(&Property::BackgroundImage))
            .unwrap_or_default();
        self.state.gradient.apply_text(background);

        self.state.mask = record
            .text(&Property::MaskImage)
            .or_else(|| record.text(&Property::WebkitMaskImage))
            .unwrap_or_default()
            .to_string();

        self.css = text.to_string();
        self.output()
    }

    fn regenerate(&mut self) {
        self.css = self.state.to_css();
        log::trace!("regenerated border css: {}", self.css);
    }
}

impl Default for BorderEditor {
    fn default() -> Self {
        Self::new()
    }
}
