pub mod color;
pub mod property;
pub mod record;

pub use color::RgbaColor;
pub use property::Property;
pub use record::{StyleKey, StyleRecord, StyleValue};
