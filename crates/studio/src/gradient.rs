//! Linear-gradient stops for the border editor's background.
//!
//! Stops are stored in insertion order and sorted by position only when the
//! `linear-gradient(...)` value is rendered. With no stops no background is
//! rendered at all.
//!
//! ```
//! use studio::gradient::{Gradient, GradientStopUpdate};
//!
//! let mut gradient = Gradient::new("90deg");
//! let red = gradient.add_stop("#ff0000");
//! let blue = gradient.add_stop("#0000ff");
//! gradient.update_stop(red, GradientStopUpdate::Position(50));
//! gradient.update_stop(blue, GradientStopUpdate::Position(0));
//!
//! assert_eq!(
//!     gradient.to_css_value().as_deref(),
//!     Some("linear-gradient(90deg, #0000ff 0%, #ff0000 50%)")
//! );
//! ```

use std::fmt;

use hcss::parser::values::{find_color, find_percentage, function_args, split_top_level};

/// Color used for a parsed stop with no recognizable color.
const PARSED_STOP_COLOR: &str = "#000";

/// Identifier of a gradient stop, unique within one [`Gradient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(u32);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop-{}", self.0)
    }
}

/// A color at a position (0..=100 percent) along the gradient axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientStop {
    pub id: StopId,
    pub color: String,
    pub position: u8,
}

/// A single-field change to a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradientStopUpdate {
    Color(String),
    /// Clamped to 100.
    Position(u8),
}

/// Direction plus stops of a `linear-gradient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    direction: String,
    stops: Vec<GradientStop>,
    next_id: u32,
}

impl Gradient {
    pub fn new(direction: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            stops: Vec::new(),
            next_id: 1,
        }
    }

    pub fn direction(&self) -> &str {
        &self.direction
    }

    pub fn set_direction(&mut self, direction: impl Into<String>) {
        self.direction = direction.into();
    }

    /// Stops in insertion order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn stop(&self, id: StopId) -> Option<&GradientStop> {
        self.stops.iter().find(|stop| stop.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    fn fresh_id(&mut self) -> StopId {
        let id = StopId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a stop at 0% if it is the first, else at 100%.
    pub fn add_stop(&mut self, color: impl Into<String>) -> StopId {
        let id = self.fresh_id();
        let position = if self.stops.is_empty() { 0 } else { 100 };
        self.stops.push(GradientStop {
            id,
            color: color.into(),
            position,
        });
        id
    }

    /// Removes a stop; unknown ids are ignored.
    pub fn remove_stop(&mut self, id: StopId) {
        self.stops.retain(|stop| stop.id != id);
    }

    /// Updates a stop; unknown ids are ignored.
    pub fn update_stop(&mut self, id: StopId, update: GradientStopUpdate) {
        let Some(stop) = self.stops.iter_mut().find(|stop| stop.id == id) else {
            log::debug!("no gradient stop {id}; update ignored");
            return;
        };
        match update {
            GradientStopUpdate::Color(color) => stop.color = color,
            GradientStopUpdate::Position(position) => stop.position = position.min(100),
        }
    }

    /// Stops ordered by position; ties keep insertion order.
    pub fn sorted_stops(&self) -> Vec<&GradientStop> {
        let mut sorted: Vec<&GradientStop> = self.stops.iter().collect();
        sorted.sort_by_key(|stop| stop.position);
        sorted
    }

    /// The `linear-gradient(...)` value, or `None` without stops.
    pub fn to_css_value(&self) -> Option<String> {
        if self.stops.is_empty() {
            return None;
        }
        let stops: Vec<String> = self
            .sorted_stops()
            .into_iter()
            .map(|stop| format!("{} {}%", stop.color, stop.position))
            .collect();
        Some(format!("linear-gradient({}, {})", self.direction, stops.join(", ")))
    }

    /// Replaces direction and stops from the first `linear-gradient(...)` in
    /// `text`.
    ///
    /// The first argument is the direction; each further argument is a stop
    /// whose color defaults to `#000` and position to 0. Without a gradient
    /// the stops are cleared and the direction is kept. Parsed stops get
    /// fresh ids.
    pub fn apply_text(&mut self, text: &str) {
        self.stops.clear();

        let Some(args) = function_args(text, "linear-gradient") else {
            log::debug!("no linear-gradient found; gradient stops cleared");
            return;
        };

        let mut args = split_top_level(args, ',').into_iter();
        if let Some(direction) = args.next().filter(|direction| !direction.is_empty()) {
            self.direction = direction.to_string();
        }

        for arg in args {
            let color = find_color(arg);
            // Percentages inside the color (hsl) are not the position.
            let remainder = color.map_or_else(|| arg.to_string(), |c| arg.replacen(c, "", 1));
            let position = find_percentage(&remainder).map_or(0, |p| p.min(100) as u8);
            let color = color.unwrap_or(PARSED_STOP_COLOR).to_string();
            let id = self.fresh_id();
            self.stops.push(GradientStop {
                id,
                color,
                position,
            });
        }
    }
}
