//! Opening state for the editors.
//!
//! Every field has a default, so a config file only needs the fields it
//! overrides:
//!
//! ```
//! use studio::EditorConfig;
//!
//! let config = EditorConfig::from_json(r#"{ "radius": 24, "shadow": { "opacity": 0.3 } }"#).unwrap();
//! assert_eq!(config.radius, 24);
//! assert_eq!(config.shadow.opacity, 0.3);
//! assert_eq!(config.shadow.offset_y, 4);
//! assert_eq!(config.gradient_direction, "90deg");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::border::BorderValue;
use crate::error::Result;

/// Defaults an editor starts from when it opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Border applied to all four sides.
    pub border: BorderValue,
    pub border_unified: bool,
    /// Radius in pixels applied to all four corners.
    pub radius: u32,
    pub radius_unified: bool,
    pub gradient_direction: String,
    /// Color of newly added gradient stops.
    pub stop_color: String,
    pub shadow: ShadowConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            border: BorderValue::default(),
            border_unified: true,
            radius: 10,
            radius_unified: true,
            gradient_direction: "90deg".to_string(),
            stop_color: "#ffffff".to_string(),
            shadow: ShadowConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Parses a JSON config, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Opening values of the box-shadow editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShadowConfig {
    pub offset_x: i32,
    pub offset_y: i32,
    pub blur_radius: u32,
    pub spread_radius: i32,
    pub color: String,
    pub opacity: f64,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            offset_x: 0,
            offset_y: 4,
            blur_radius: 6,
            spread_radius: 0,
            color: "#000000".to_string(),
            opacity: 0.1,
        }
    }
}
