//! Picker configuration.
//!
//! Appearance is described by two immutable value objects, [`CircleConfig`]
//! for the hue ring area and [`SliderConfig`] for the two sliders. Both are
//! supplied once at construction. [`PickerConfig`] bundles them with the
//! initial color so a host can import and export a picker setup as JSON.

use huepick_ui::Size;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::PickerError;

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Log level setting for hosts that configure logging from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging (drag start/stop, mount/unmount)
    Debug,
    /// Show every value change
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Configuration for the hue ring area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    /// Overall bounding box of the ring area
    pub size: Size,
    /// Ring stroke thickness
    pub stroke_width: f32,
    /// Ring thumb diameter
    pub thumb_size: f32,
    /// Vertical gap between the two sliders
    pub space_height: f32,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            size: Size::square(320.0),
            stroke_width: 6.0,
            thumb_size: 32.0,
            space_height: 48.0,
        }
    }
}

impl CircleConfig {
    /// Create a new circle configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bounding box size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the ring stroke width.
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the thumb diameter.
    pub fn thumb_size(mut self, size: f32) -> Self {
        self.thumb_size = size;
        self
    }

    /// Set the gap between the sliders.
    pub fn space_height(mut self, height: f32) -> Self {
        self.space_height = height;
        self
    }

    /// Radius of the ring centerline: the thumb must stay inside the box.
    pub fn ring_radius(&self) -> f32 {
        ((self.size.min_side() - self.thumb_size) / 2.0).max(0.0)
    }

    /// Check that the configuration can be mounted.
    pub fn validate(&self) -> Result<(), PickerError> {
        positive("circle.size.width", self.size.width)?;
        positive("circle.size.height", self.size.height)?;
        non_negative("circle.stroke_width", self.stroke_width)?;
        positive("circle.thumb_size", self.thumb_size)?;
        non_negative("circle.space_height", self.space_height)?;
        if self.thumb_size >= self.size.min_side() {
            return Err(PickerError::invalid_config(
                "circle.thumb_size",
                format!(
                    "thumb {} does not fit inside ring box {}x{}",
                    self.thumb_size, self.size.width, self.size.height
                ),
            ));
        }
        Ok(())
    }
}

/// Configuration for the saturation and value sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Track length
    pub width: f32,
    /// Track thickness
    pub stroke_width: f32,
    /// Thumb diameter
    pub thumb_size: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            width: 180.0,
            stroke_width: 6.0,
            thumb_size: 26.0,
        }
    }
}

impl SliderConfig {
    /// Create a new slider configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the track length.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set the track thickness.
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the thumb diameter.
    pub fn thumb_size(mut self, size: f32) -> Self {
        self.thumb_size = size;
        self
    }

    /// Height a slider occupies: the larger of thumb and track.
    pub fn height(&self) -> f32 {
        self.thumb_size.max(self.stroke_width)
    }

    /// Distance the thumb travels from fraction 0 to fraction 1.
    pub fn thumb_travel(&self) -> f32 {
        (self.width - self.thumb_size).max(0.0)
    }

    /// Check that the configuration can be mounted.
    pub fn validate(&self) -> Result<(), PickerError> {
        positive("slider.width", self.width)?;
        non_negative("slider.stroke_width", self.stroke_width)?;
        positive("slider.thumb_size", self.thumb_size)?;
        if self.thumb_size > self.width {
            return Err(PickerError::invalid_config(
                "slider.thumb_size",
                format!(
                    "thumb {} is wider than track {}",
                    self.thumb_size, self.width
                ),
            ));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), PickerError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PickerError::invalid_config(
            field,
            format!("must be a positive finite number, got {}", value),
        ))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), PickerError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PickerError::invalid_config(
            field,
            format!("must be a non-negative finite number, got {}", value),
        ))
    }
}

/// Complete picker setup that can be exported and imported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Color the picker starts with
    #[serde(default)]
    pub initial_color: Rgb,

    /// Hue ring appearance
    #[serde(default)]
    pub circle: CircleConfig,

    /// Slider appearance
    #[serde(default)]
    pub slider: SliderConfig,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            initial_color: Rgb::default(),
            circle: CircleConfig::default(),
            slider: SliderConfig::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Validate both appearance sections.
    pub fn validate(&self) -> Result<(), PickerError> {
        self.circle.validate()?;
        self.slider.validate()
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, PickerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(PickerError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }
}
