//! The box-shadow editor.
//!
//! Holds offsets, blur, spread, color and opacity, and renders
//!
//! ```css
//! box-shadow: <x>px <y>px <blur>px <spread>px rgba(r, g, b, a);
//! ```

use hcss::serialize;
use hcss::types::color::{hex_to_rgba, normalize_hex};
use hcss::types::{Property, StyleRecord};

use crate::config::{EditorConfig, ShadowConfig};
use crate::editor::EditorOutput;

/// Current values of the shadow controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowValues {
    pub offset_x: i32,
    pub offset_y: i32,
    pub blur_radius: u32,
    pub spread_radius: i32,
    /// Always `#rrggbb`.
    pub color: String,
    /// 0.0..=1.0
    pub opacity: f64,
}

impl ShadowValues {
    /// The `box-shadow` value.
    pub fn to_css_value(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x,
            self.offset_y,
            self.blur_radius,
            self.spread_radius,
            hex_to_rgba(&self.color, self.opacity)
        )
    }
}

impl From<&ShadowConfig> for ShadowValues {
    fn from(config: &ShadowConfig) -> Self {
        Self {
            offset_x: config.offset_x,
            offset_y: config.offset_y,
            blur_radius: config.blur_radius,
            spread_radius: config.spread_radius,
            color: normalize_hex(&config.color),
            opacity: config.opacity.clamp(0.0, 1.0),
        }
    }
}

/// A single-control change.
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowUpdate {
    OffsetX(i32),
    OffsetY(i32),
    BlurRadius(u32),
    SpreadRadius(i32),
    /// Any CSS color; stored as `#rrggbb`, unparseable colors become black.
    Color(String),
    /// Clamped to 0.0..=1.0.
    Opacity(f64),
}

/// Box-shadow editor state and its generated text.
///
/// ```
/// use studio::shadow::{ShadowEditor, ShadowUpdate};
///
/// let mut editor = ShadowEditor::new();
/// assert_eq!(editor.css(), "box-shadow: 0px 4px 6px 0px rgba(0, 0, 0, 0.1);");
///
/// let output = editor.update(ShadowUpdate::Color("coral".into()));
/// assert_eq!(output.state.color, "#ff7f50");
/// assert_eq!(output.css, "box-shadow: 0px 4px 6px 0px rgba(255, 127, 80, 0.1);");
/// ```
#[derive(Debug, Clone)]
pub struct ShadowEditor {
    values: ShadowValues,
    css: String,
}

impl ShadowEditor {
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        let mut editor = Self {
            values: ShadowValues::from(&config.shadow),
            css: String::new(),
        };
        editor.regenerate();
        editor
    }

    pub fn values(&self) -> &ShadowValues {
        &self.values
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn output(&self) -> EditorOutput<'_, ShadowValues> {
        EditorOutput {
            state: &self.values,
            css: &self.css,
        }
    }

    /// The preview style: a single `boxShadow` entry.
    pub fn style(&self) -> StyleRecord {
        let mut record = StyleRecord::new();
        record.insert(Property::BoxShadow, self.values.to_css_value());
        record
    }

    pub fn update(&mut self, update: ShadowUpdate) -> EditorOutput<'_, ShadowValues> {
        let values = &mut self.values;
        match update {
            ShadowUpdate::OffsetX(px) => values.offset_x = px,
            ShadowUpdate::OffsetY(px) => values.offset_y = px,
            ShadowUpdate::BlurRadius(px) => values.blur_radius = px,
            ShadowUpdate::SpreadRadius(px) => values.spread_radius = px,
            ShadowUpdate::Color(color) => values.color = normalize_hex(&color),
            ShadowUpdate::Opacity(opacity) => values.opacity = opacity.clamp(0.0, 1.0),
        }
        self.regenerate();
        self.output()
    }

    fn regenerate(&mut self) {
        self.css = serialize(&self.style());
        log::trace!("regenerated shadow css: {}", self.css);
    }
}

impl Default for ShadowEditor {
    fn default() -> Self {
        Self::new()
    }
}
