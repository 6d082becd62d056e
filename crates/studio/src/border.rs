//! Border and radius state for the border editor.
//!
//! ## Types
//!
//! - [`BorderStyle`]: the eight CSS line styles the editor offers
//! - [`BorderValue`]: one side as `<width>px <style> <color>`
//! - [`BorderValues`]: all four sides plus the `unified` flag
//! - [`RadiusValues`]: all four corners plus the `unified` flag
//!
//! ## Unified Contract
//!
//! While `unified` is set, every mutation writes all four slots. The flag is
//! enforced when writing, so readers can rely on the slots being equal.
//!
//! ## Text Shapes
//!
//! ```css
//! border: 2px solid #a6deba;              /* unified */
//! border-top: 1px dashed red; ...         /* per side: top, right, bottom, left */
//! border-radius: 10px;                    /* unified */
//! border-radius: 4px 8px 4px 8px;         /* tl tr br bl */
//! ```

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use hcss::parser::values::{find_color, parse_ident, parse_px};
use hcss::types::{Property, StyleKey, StyleRecord};
use nom::{
    IResult,
    bytes::complete::tag_no_case,
    character::complete::{digit1, multispace1},
    combinator::{map_res, rest},
    sequence::{preceded, terminated},
};
use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// A side of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl BorderSide {
    /// All sides in CSS order.
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Top,
        BorderSide::Right,
        BorderSide::Bottom,
        BorderSide::Left,
    ];

    /// The per-side longhand property (`border-top`, ...).
    pub fn property(self) -> Property {
        match self {
            BorderSide::Top => Property::BorderTop,
            BorderSide::Right => Property::BorderRight,
            BorderSide::Bottom => Property::BorderBottom,
            BorderSide::Left => Property::BorderLeft,
        }
    }

    fn flag(self) -> BorderSides {
        match self {
            BorderSide::Top => BorderSides::TOP,
            BorderSide::Right => BorderSides::RIGHT,
            BorderSide::Bottom => BorderSides::BOTTOM,
            BorderSide::Left => BorderSides::LEFT,
        }
    }
}

/// A corner of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderCorner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl BorderCorner {
    /// All corners in CSS order (clockwise from top-left).
    pub const ALL: [BorderCorner; 4] = [
        BorderCorner::TopLeft,
        BorderCorner::TopRight,
        BorderCorner::BottomRight,
        BorderCorner::BottomLeft,
    ];
}

bitflags! {
    /// Set of sides, used to report which sides a hand edit declared.
    ///
    /// ```
    /// use studio::border::BorderSides;
    ///
    /// let sides = BorderSides::TOP | BorderSides::LEFT;
    /// assert!(sides.contains(BorderSides::TOP));
    /// assert!(!sides.contains(BorderSides::ALL));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BorderSides: u8 {
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
        const ALL = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

/// Line style of a border side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

impl BorderStyle {
    /// All styles, in the order the editor lists them.
    pub const ALL: [BorderStyle; 8] = [
        BorderStyle::Solid,
        BorderStyle::Dashed,
        BorderStyle::Dotted,
        BorderStyle::Double,
        BorderStyle::Groove,
        BorderStyle::Ridge,
        BorderStyle::Inset,
        BorderStyle::Outset,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Double => "double",
            BorderStyle::Groove => "groove",
            BorderStyle::Ridge => "ridge",
            BorderStyle::Inset => "inset",
            BorderStyle::Outset => "outset",
        }
    }
}

/// Try to parse a border style keyword, case-insensitively.
fn try_parse_border_style(s: &str) -> Option<BorderStyle> {
    BorderStyle::ALL
        .into_iter()
        .find(|style| style.as_str().eq_ignore_ascii_case(s))
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderStyle {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse_border_style(s.trim()).ok_or_else(|| StudioError::UnknownBorderStyle(s.to_string()))
    }
}

/// One border side: `<width>px <style> <color>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderValue {
    pub width: u32,
    pub style: BorderStyle,
    pub color: String,
}

impl BorderValue {
    pub fn new(width: u32, style: BorderStyle, color: impl Into<String>) -> Self {
        Self {
            width,
            style,
            color: color.into(),
        }
    }

    /// The value a side takes when hand-edited text does not describe it:
    /// `0px solid transparent`.
    pub fn missing() -> Self {
        Self::new(0, BorderStyle::Solid, "transparent")
    }

    /// Parses `<width>px <style> <color>`.
    ///
    /// The color is the first hex, `rgb()`, `hsl()` or named color after the
    /// style; other trailing text is dropped. A value without a color does
    /// not parse.
    ///
    /// ```
    /// use studio::border::{BorderStyle, BorderValue};
    ///
    /// assert_eq!(
    ///     BorderValue::parse("3px dotted rgb(0, 0, 0)"),
    ///     Some(BorderValue::new(3, BorderStyle::Dotted, "rgb(0, 0, 0)"))
    /// );
    /// assert_eq!(
    ///     BorderValue::parse("2px solid #ff0000 !important").map(|value| value.color),
    ///     Some("#ff0000".to_string())
    /// );
    /// assert_eq!(BorderValue::parse("thin solid red"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        parse_border_value(value.trim()).ok().map(|(_, value)| value)
    }

    /// Applies a single-field update.
    pub fn apply(&mut self, update: &BorderUpdate) {
        match update {
            BorderUpdate::Width(width) => self.width = *width,
            BorderUpdate::Style(style) => self.style = *style,
            BorderUpdate::Color(color) => self.color.clone_from(color),
        }
    }
}

impl Default for BorderValue {
    fn default() -> Self {
        Self::new(2, BorderStyle::Solid, "#a6deba")
    }
}

impl fmt::Display for BorderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {} {}", self.width, self.style, self.color)
    }
}

/// Parse `<digits>px <ws> <style> <ws> ... <color> ...`.
fn parse_border_value(input: &str) -> IResult<&str, BorderValue> {
    let (input, width) = terminated(map_res(digit1, str::parse::<u32>), tag_no_case("px"))(input)?;
    let (input, style) = preceded(multispace1, parse_ident)(input)?;
    let style = try_parse_border_style(style).ok_or_else(|| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Tag))
    })?;
    let (input, remainder) = preceded(multispace1, rest)(input)?;

    let color = find_color(remainder).ok_or_else(|| {
        nom::Err::Error(nom::error::Error::new(remainder, nom::error::ErrorKind::Verify))
    })?;
    Ok((input, BorderValue::new(width, style, color)))
}

/// A single-field change to a border side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorderUpdate {
    Width(u32),
    Style(BorderStyle),
    Color(String),
}

/// Four border sides plus the unified flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderValues {
    pub top: BorderValue,
    pub right: BorderValue,
    pub bottom: BorderValue,
    pub left: BorderValue,
    pub unified: bool,
}

impl BorderValues {
    /// The same value on every side, unified.
    pub fn all(value: BorderValue) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
            unified: true,
        }
    }

    pub fn get(&self, side: BorderSide) -> &BorderValue {
        match side {
            BorderSide::Top => &self.top,
            BorderSide::Right => &self.right,
            BorderSide::Bottom => &self.bottom,
            BorderSide::Left => &self.left,
        }
    }

    fn get_mut(&mut self, side: BorderSide) -> &mut BorderValue {
        match side {
            BorderSide::Top => &mut self.top,
            BorderSide::Right => &mut self.right,
            BorderSide::Bottom => &mut self.bottom,
            BorderSide::Left => &mut self.left,
        }
    }

    /// Applies an update to every side when unified, else to `side` only.
    pub fn update(&mut self, side: BorderSide, update: &BorderUpdate) {
        if self.unified {
            for side in BorderSide::ALL {
                self.get_mut(side).apply(update);
            }
        } else {
            self.get_mut(side).apply(update);
        }
    }

    /// Turning unified on copies the top side to all four.
    pub fn set_unified(&mut self, unified: bool) {
        if unified {
            let top = self.top.clone();
            self.right = top.clone();
            self.bottom = top.clone();
            self.left = top;
        }
        self.unified = unified;
    }

    /// Reads sides back from parsed declarations.
    ///
    /// Unified iff no `border-<side>` longhand is present. A `border`
    /// shorthand feeds every side; a longhand overrides it for its side.
    /// Sides with no parseable value become [`BorderValue::missing`].
    /// Returns the values and the set of sides that parsed.
    pub fn from_record(record: &StyleRecord) -> (Self, BorderSides) {
        let unified = !record
            .keys()
            .any(|key| matches!(key, StyleKey::Property(property) if property.is_border_side()));

        let shorthand = record.text(&Property::Border);
        let mut values = Self::all(BorderValue::missing());
        values.unified = unified;
        let mut matched = BorderSides::empty();

        for side in BorderSide::ALL {
            let text = record.text(&side.property()).or(shorthand);
            match text.and_then(BorderValue::parse) {
                Some(value) => {
                    *values.get_mut(side) = value;
                    matched |= side.flag();
                }
                None => log::debug!("border side {side:?} reset to 0px solid transparent"),
            }
        }

        (values, matched)
    }

    /// Writes the border declarations into `record`.
    pub fn write_to(&self, record: &mut StyleRecord) {
        if self.unified {
            record.insert(Property::Border, self.top.to_string());
        } else {
            for side in BorderSide::ALL {
                record.insert(side.property(), self.get(side).to_string());
            }
        }
    }
}

impl Default for BorderValues {
    fn default() -> Self {
        Self::all(BorderValue::default())
    }
}

/// Four corner radii in pixels plus the unified flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusValues {
    pub top_left: u32,
    pub top_right: u32,
    pub bottom_right: u32,
    pub bottom_left: u32,
    pub unified: bool,
}

impl RadiusValues {
    /// The same radius on every corner, unified.
    pub fn all(px: u32) -> Self {
        Self {
            top_left: px,
            top_right: px,
            bottom_right: px,
            bottom_left: px,
            unified: true,
        }
    }

    pub fn get(&self, corner: BorderCorner) -> u32 {
        match corner {
            BorderCorner::TopLeft => self.top_left,
            BorderCorner::TopRight => self.top_right,
            BorderCorner::BottomRight => self.bottom_right,
            BorderCorner::BottomLeft => self.bottom_left,
        }
    }

    fn set(&mut self, corner: BorderCorner, px: u32) {
        match corner {
            BorderCorner::TopLeft => self.top_left = px,
            BorderCorner::TopRight => self.top_right = px,
            BorderCorner::BottomRight => self.bottom_right = px,
            BorderCorner::BottomLeft => self.bottom_left = px,
        }
    }

    /// Sets every corner when unified, else `corner` only.
    pub fn update(&mut self, corner: BorderCorner, px: u32) {
        if self.unified {
            for corner in BorderCorner::ALL {
                self.set(corner, px);
            }
        } else {
            self.set(corner, px);
        }
    }

    /// Turning unified on copies the top-left radius to all four.
    pub fn set_unified(&mut self, unified: bool) {
        if unified {
            let px = self.top_left;
            self.top_right = px;
            self.bottom_right = px;
            self.bottom_left = px;
        }
        self.unified = unified;
    }

    /// Parses a `border-radius` value using the 1/2/3/4-value expansion.
    ///
    /// Unified iff exactly one token is present. Tokens past the fourth are
    /// ignored. Returns `None` if any used token is not an integer length.
    ///
    /// ```
    /// use studio::border::RadiusValues;
    ///
    /// let radius = RadiusValues::parse("4px 8px").unwrap();
    /// assert_eq!((radius.top_left, radius.top_right), (4, 8));
    /// assert_eq!((radius.bottom_right, radius.bottom_left), (4, 8));
    /// assert!(!radius.unified);
    ///
    /// assert_eq!(RadiusValues::parse("6px"), Some(RadiusValues::all(6)));
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        let px: Vec<u32> = value
            .split_whitespace()
            .take(4)
            .map(parse_px)
            .collect::<Option<_>>()?;

        let radius = match px.as_slice() {
            [all] => Self::all(*all),
            [a, b] => Self::corners(*a, *b, *a, *b),
            [a, b, c] => Self::corners(*a, *b, *c, *b),
            [a, b, c, d] => Self::corners(*a, *b, *c, *d),
            _ => return None,
        };
        Some(radius)
    }

    fn corners(top_left: u32, top_right: u32, bottom_right: u32, bottom_left: u32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
            unified: false,
        }
    }

    /// The `border-radius` value: one length when unified, else four.
    pub fn to_css_value(&self) -> String {
        if self.unified {
            format!("{}px", self.top_left)
        } else {
            format!(
                "{}px {}px {}px {}px",
                self.top_left, self.top_right, self.bottom_right, self.bottom_left
            )
        }
    }

    /// Writes the `border-radius` declaration into `record`.
    pub fn write_to(&self, record: &mut StyleRecord) {
        record.insert(Property::BorderRadius, self.to_css_value());
    }
}

impl Default for RadiusValues {
    fn default() -> Self {
        Self::all(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_style_from_str() {
        assert_eq!("Dashed".parse::<BorderStyle>().unwrap(), BorderStyle::Dashed);
        assert!(matches!(
            "wavy".parse::<BorderStyle>(),
            Err(StudioError::UnknownBorderStyle(_))
        ));
    }

    #[test]
    fn border_value_rejects_unknown_style() {
        assert_eq!(BorderValue::parse("2px wavy red"), None);
        assert_eq!(BorderValue::parse("2px solid"), None);
        assert_eq!(BorderValue::parse("2px solid "), None);
    }

    #[test]
    fn border_value_color_is_pattern_matched() {
        assert_eq!(
            BorderValue::parse("1px solid red blue"),
            Some(BorderValue::new(1, BorderStyle::Solid, "red"))
        );
        assert_eq!(
            BorderValue::parse("4px double hsl(0, 0%, 50%)"),
            Some(BorderValue::new(4, BorderStyle::Double, "hsl(0, 0%, 50%)"))
        );
        assert_eq!(BorderValue::parse("1px solid !important"), None);
        assert_eq!(BorderValue::parse("1px solid var(--accent)"), None);
    }

    #[test]
    fn border_value_display() {
        assert_eq!(BorderValue::default().to_string(), "2px solid #a6deba");
        assert_eq!(BorderValue::missing().to_string(), "0px solid transparent");
    }

    #[test]
    fn radius_three_values() {
        let radius = RadiusValues::parse("1px 2px 3px").unwrap();
        assert_eq!(
            radius,
            RadiusValues {
                top_left: 1,
                top_right: 2,
                bottom_right: 3,
                bottom_left: 2,
                unified: false,
            }
        );
    }

    #[test]
    fn radius_extra_tokens_ignored() {
        let radius = RadiusValues::parse("1px 2px 3px 4px 5px").unwrap();
        assert_eq!(radius.bottom_left, 4);
    }

    #[test]
    fn radius_rejects_non_integer_tokens() {
        assert_eq!(RadiusValues::parse("50%"), None);
        assert_eq!(RadiusValues::parse("1.5em"), None);
        assert_eq!(RadiusValues::parse(""), None);
    }

    #[test]
    fn radius_css_value() {
        let mut radius = RadiusValues::all(6);
        assert_eq!(radius.to_css_value(), "6px");
        radius.set_unified(false);
        radius.update(BorderCorner::BottomLeft, 0);
        assert_eq!(radius.to_css_value(), "6px 6px 6px 0px");
    }
}
