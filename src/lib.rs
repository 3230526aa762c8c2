//! huepick - HSV color picker component
//!
//! A hue ring with saturation and value sliders, built on the widget
//! support in `huepick_ui`. The picker owns three observable controllers
//! (hue in degrees, saturation and value as fractions) and reports every
//! user-driven change as a 24-bit [`Rgb`] through an optional callback.

pub mod color;
pub mod config;
pub mod error;
pub mod hue_ring;
pub mod math;
pub mod picker;
pub mod slider;

#[cfg(test)]
mod tests;

pub use color::{Hsv, Rgb};
pub use config::{CircleConfig, LogLevel, PickerConfig, SliderConfig, CONFIG_VERSION};
pub use error::PickerError;
pub use hue_ring::HueRing;
pub use picker::{ColorPicker, PickerOptions};
pub use slider::{ChannelSlider, SliderChannel};
