//! Error types for picker construction and configuration.

use huepick_ui::ControllerError;
use thiserror::Error;

/// Errors that prevent a picker from mounting.
#[derive(Error, Debug)]
pub enum PickerError {
    /// A configuration value is out of range
    #[error("Invalid config '{field}': {message}")]
    InvalidConfig {
        /// Dotted path of the offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// A color string could not be parsed
    #[error("Invalid color '{input}': expected #RRGGBB")]
    InvalidColor {
        /// The rejected input
        input: String,
    },

    /// Config file written by a newer version
    #[error("Config version {file_version} is newer than supported version {supported_version}")]
    VersionTooNew {
        /// Version found in the file
        file_version: u32,
        /// Highest version this build reads
        supported_version: u32,
    },

    /// A value controller could not be created
    #[error("Controller error: {0}")]
    Controller(#[from] ControllerError),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PickerError {
    /// Create an invalid config error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Create an invalid color error.
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
        }
    }
}
