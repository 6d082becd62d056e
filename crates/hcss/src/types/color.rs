//! RGBA color parsing and normalization.
//!
//! Editors keep colors as the text the user typed, but color-picker controls
//! need a fixed `#rrggbb` form and the shadow editor needs `rgba(...)`. This
//! module converts between them.
//!
//! ## Supported Color Formats
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **HSL**: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! - **Named**: the CSS named colors (`red`, `aliceblue`, `rebeccapurple`)
//! - **Special**: `transparent`
//!
//! ```
//! use hcss::types::color::{normalize_hex, hex_to_rgba};
//!
//! assert_eq!(normalize_hex("coral"), "#ff7f50");
//! assert_eq!(normalize_hex("not a color"), "#000000");
//! assert_eq!(hex_to_rgba("#ff0000", 0.5), "rgba(255, 0, 0, 0.5)");
//! ```

use std::fmt;

use phf::phf_map;
use thiserror::Error;

/// Fallback used wherever a color cannot be understood.
pub const FALLBACK_HEX: &str = "#000000";

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Empty input.
    #[error("empty color string")]
    Empty,

    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Invalid `rgb()`/`rgba()` color format.
    #[error("invalid RGB color: {0}")]
    InvalidRgb(String),

    /// Invalid `hsl()`/`hsla()` color format.
    #[error("invalid HSL color: {0}")]
    InvalidHsl(String),
}

/// An sRGB color with alpha.
///
/// # Examples
///
/// ```
/// use hcss::types::RgbaColor;
///
/// let red = RgbaColor::parse("#f00").unwrap();
/// assert_eq!(red, RgbaColor::rgb(255, 0, 0));
/// assert_eq!(red.to_hex(), "#ff0000");
///
/// let green = RgbaColor::parse("hsl(120, 100%, 25%)").unwrap();
/// assert_eq!(green.to_hex(), "#008000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbaColor {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl RgbaColor {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a fully transparent color.
    pub fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    /// Parse a color string in any supported format.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let lower = input.to_lowercase();

        if lower == "transparent" {
            return Ok(Self::transparent());
        }

        if let Some(hex) = lower.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if lower.starts_with("rgb") {
            return Self::parse_rgb_func(&lower);
        }

        if lower.starts_with("hsl") {
            return Self::parse_hsl_func(&lower);
        }

        NAMED_COLORS
            .get(lower.as_str())
            .map(|&(r, g, b)| Self::rgb(r, g, b))
            .ok_or(ColorParseError::UnknownName(lower))
    }

    /// Formats the color as `#rrggbb`, dropping alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Formats the color as `rgba(r, g, b, a)`.
    pub fn to_rgba_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{hex}"));
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|d| d * 17);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);

        let color = match hex.len() {
            3 => Self::rgb(digit(0)?, digit(1)?, digit(2)?),
            4 => Self::rgba(digit(0)?, digit(1)?, digit(2)?, f32::from(digit(3)?) / 255.0),
            6 => Self::rgb(pair(0)?, pair(2)?, pair(4)?),
            8 => Self::rgba(pair(0)?, pair(2)?, pair(4)?, f32::from(pair(6)?) / 255.0),
            _ => return Err(invalid()),
        };
        Ok(color)
    }

    fn parse_rgb_func(input: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidRgb(input.to_string());
        let parts = function_args(input).ok_or_else(invalid)?;

        if parts.len() < 3 {
            return Err(invalid());
        }

        let channel = |s: &str| s.parse::<u8>().map_err(|_| invalid());
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = match parts.get(3) {
            Some(alpha) => parse_alpha(alpha).ok_or_else(invalid)?,
            None => 1.0,
        };

        Ok(Self::rgba(r, g, b, a))
    }

    fn parse_hsl_func(input: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHsl(input.to_string());
        let parts = function_args(input).ok_or_else(invalid)?;

        if parts.len() < 3 {
            return Err(invalid());
        }

        let h: f32 = parts[0]
            .trim_end_matches("deg")
            .parse()
            .map_err(|_| invalid())?;
        let percentage = |s: &str| {
            s.trim_end_matches('%')
                .parse::<f32>()
                .map(|v| (v / 100.0).clamp(0.0, 1.0))
                .map_err(|_| invalid())
        };
        let s = percentage(parts[1])?;
        let l = percentage(parts[2])?;
        let a = match parts.get(3) {
            Some(alpha) => parse_alpha(alpha).ok_or_else(invalid)?,
            None => 1.0,
        };

        let (r, g, b) = Self::hsl_to_rgb(h, s, l);
        Ok(Self::rgba(r, g, b, a))
    }

    fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
        let to_byte = |v: f32| (v * 255.0).round() as u8;

        if s == 0.0 {
            let gray = to_byte(l);
            return (gray, gray, gray);
        }

        let h = h.rem_euclid(360.0) / 360.0;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        (
            to_byte(Self::hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_byte(Self::hue_to_rgb(p, q, h)),
            to_byte(Self::hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            f.write_str(&self.to_hex())
        } else {
            f.write_str(&self.to_rgba_css())
        }
    }
}

impl From<std::num::ParseIntError> for ColorParseError {
    fn from(err: std::num::ParseIntError) -> Self {
        ColorParseError::InvalidHex(err.to_string())
    }
}

/// Splits the comma-separated arguments of `name(a, b, c)`.
fn function_args(input: &str) -> Option<Vec<&str>> {
    let start = input.find('(')?;
    let end = input.rfind(')')?;
    if end <= start {
        return None;
    }
    Some(input[start + 1..end].split(',').map(str::trim).collect())
}

/// Parses `0.5` or `50%` into 0.0..=1.0.
fn parse_alpha(s: &str) -> Option<f32> {
    let value = match s.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f32>().ok()? / 100.0,
        None => s.parse::<f32>().ok()?,
    };
    Some(value.clamp(0.0, 1.0))
}

/// Returns `true` if `name` is a CSS named color or `transparent`.
pub fn is_named_color(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower == "transparent" || NAMED_COLORS.contains_key(lower.as_str())
}

/// Converts any supported color to `#rrggbb` for color-picker controls.
///
/// Never fails: unparseable input becomes [`FALLBACK_HEX`].
pub fn normalize_hex(input: &str) -> String {
    match RgbaColor::parse(input) {
        Ok(color) => color.to_hex(),
        Err(err) => {
            log::debug!("color {input:?} replaced by {FALLBACK_HEX}: {err}");
            FALLBACK_HEX.to_string()
        }
    }
}

/// Renders a hex color with the given opacity as `rgba(r, g, b, a)`.
///
/// Unparseable colors are treated as black.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let color = RgbaColor::parse(hex).unwrap_or_else(|err| {
        log::debug!("color {hex:?} treated as black: {err}");
        RgbaColor::default()
    });
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, alpha.clamp(0.0, 1.0))
}

static NAMED_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf_map! {
    "aliceblue" => (240, 248, 255),
    "antiquewhite" => (250, 235, 215),
    "aqua" => (0, 255, 255),
    "aquamarine" => (127, 255, 212),
    "azure" => (240, 255, 255),
    "beige" => (245, 245, 220),
    "bisque" => (255, 228, 196),
    "black" => (0, 0, 0),
    "blanchedalmond" => (255, 235, 205),
    "blue" => (0, 0, 255),
    "blueviolet" => (138, 43, 226),
    "brown" => (165, 42, 42),
    "burlywood" => (222, 184, 135),
    "cadetblue" => (95, 158, 160),
    "chartreuse" => (127, 255, 0),
    "chocolate" => (210, 105, 30),
    "coral" => (255, 127, 80),
    "cornflowerblue" => (100, 149, 237),
    "cornsilk" => (255, 248, 220),
    "crimson" => (220, 20, 60),
    "cyan" => (0, 255, 255),
    "darkblue" => (0, 0, 139),
    "darkcyan" => (0, 139, 139),
    "darkgoldenrod" => (184, 134, 11),
    "darkgray" => (169, 169, 169),
    "darkgreen" => (0, 100, 0),
    "darkgrey" => (169, 169, 169),
    "darkkhaki" => (189, 183, 107),
    "darkmagenta" => (139, 0, 139),
    "darkolivegreen" => (85, 107, 47),
    "darkorange" => (255, 140, 0),
    "darkorchid" => (153, 50, 204),
    "darkred" => (139, 0, 0),
    "darksalmon" => (233, 150, 122),
    "darkseagreen" => (143, 188, 143),
    "darkslateblue" => (72, 61, 139),
    "darkslategray" => (47, 79, 79),
    "darkslategrey" => (47, 79, 79),
    "darkturquoise" => (0, 206, 209),
    "darkviolet" => (148, 0, 211),
    "deeppink" => (255, 20, 147),
    "deepskyblue" => (0, 191, 255),
    "dimgray" => (105, 105, 105),
    "dimgrey" => (105, 105, 105),
    "dodgerblue" => (30, 144, 255),
    "firebrick" => (178, 34, 34),
    "floralwhite" => (255, 250, 240),
    "forestgreen" => (34, 139, 34),
    "fuchsia" => (255, 0, 255),
    "gainsboro" => (220, 220, 220),
    "ghostwhite" => (248, 248, 255),
    "gold" => (255, 215, 0),
    "goldenrod" => (218, 165, 32),
    "gray" => (128, 128, 128),
    "green" => (0, 128, 0),
    "greenyellow" => (173, 255, 47),
    "grey" => (128, 128, 128),
    "honeydew" => (240, 255, 240),
    "hotpink" => (255, 105, 180),
    "indianred" => (205, 92, 92),
    "indigo" => (75, 0, 130),
    "ivory" => (255, 255, 240),
    "khaki" => (240, 230, 140),
    "lavender" => (230, 230, 250),
    "lavenderblush" => (255, 240, 245),
    "lawngreen" => (124, 252, 0),
    "lemonchiffon" => (255, 250, 205),
    "lightblue" => (173, 216, 230),
    "lightcoral" => (240, 128, 128),
    "lightcyan" => (224, 255, 255),
    "lightgoldenrodyellow" => (250, 250, 210),
    "lightgray" => (211, 211, 211),
    "lightgreen" => (144, 238, 144),
    "lightgrey" => (211, 211, 211),
    "lightpink" => (255, 182, 193),
    "lightsalmon" => (255, 160, 122),
    "lightseagreen" => (32, 178, 170),
    "lightskyblue" => (135, 206, 250),
    "lightslategray" => (119, 136, 153),
    "lightslategrey" => (119, 136, 153),
    "lightsteelblue" => (176, 196, 222),
    "lightyellow" => (255, 255, 224),
    "lime" => (0, 255, 0),
    "limegreen" => (50, 205, 50),
    "linen" => (250, 240, 230),
    "magenta" => (255, 0, 255),
    "maroon" => (128, 0, 0),
    "mediumaquamarine" => (102, 205, 170),
    "mediumblue" => (0, 0, 205),
    "mediumorchid" => (186, 85, 211),
    "mediumpurple" => (147, 112, 219),
    "mediumseagreen" => (60, 179, 113),
    "mediumslateblue" => (123, 104, 238),
    "mediumspringgreen" => (0, 250, 154),
    "mediumturquoise" => (72, 209, 204),
    "mediumvioletred" => (199, 21, 133),
    "midnightblue" => (25, 25, 112),
    "mintcream" => (245, 255, 250),
    "mistyrose" => (255, 228, 225),
    "moccasin" => (255, 228, 181),
    "navajowhite" => (255, 222, 173),
    "navy" => (0, 0, 128),
    "oldlace" => (253, 245, 230),
    "olive" => (128, 128, 0),
    "olivedrab" => (107, 142, 35),
    "orange" => (255, 165, 0),
    "orangered" => (255, 69, 0),
    "orchid" => (218, 112, 214),
    "palegoldenrod" => (238, 232, 170),
    "palegreen" => (152, 251, 152),
    "paleturquoise" => (175, 238, 238),
    "palevioletred" => (219, 112, 147),
    "papayawhip" => (255, 239, 213),
    "peachpuff" => (255, 218, 185),
    "peru" => (205, 133, 63),
    "pink" => (255, 192, 203),
    "plum" => (221, 160, 221),
    "powderblue" => (176, 224, 230),
    "purple" => (128, 0, 128),
    "rebeccapurple" => (102, 51, 153),
    "red" => (255, 0, 0),
    "rosybrown" => (188, 143, 143),
    "royalblue" => (65, 105, 225),
    "saddlebrown" => (139, 69, 19),
    "salmon" => (250, 128, 114),
    "sandybrown" => (244, 164, 96),
    "seagreen" => (46, 139, 87),
    "seashell" => (255, 245, 238),
    "sienna" => (160, 82, 45),
    "silver" => (192, 192, 192),
    "skyblue" => (135, 206, 235),
    "slateblue" => (106, 90, 205),
    "slategray" => (112, 128, 144),
    "slategrey" => (112, 128, 144),
    "snow" => (255, 250, 250),
    "springgreen" => (0, 255, 127),
    "steelblue" => (70, 130, 180),
    "tan" => (210, 180, 140),
    "teal" => (0, 128, 128),
    "thistle" => (216, 191, 216),
    "tomato" => (255, 99, 71),
    "turquoise" => (64, 224, 208),
    "violet" => (238, 130, 238),
    "wheat" => (245, 222, 179),
    "white" => (255, 255, 255),
    "whitesmoke" => (245, 245, 245),
    "yellow" => (255, 255, 0),
    "yellowgreen" => (154, 205, 50),
};
