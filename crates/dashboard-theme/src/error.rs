//! Error types for the fallible edges of the theme engine.
//!
//! Token derivation, descriptor building and the session are total over
//! [`ColorMode`](crate::ColorMode) and never fail. Errors only come from the
//! surfaces that read or write external text: hex color parsing, settings
//! loading and descriptor export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while parsing colors, loading settings or exporting themes.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A color string was not a valid `#rgb` or `#rrggbb` hex value.
    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: &'static str },

    /// Settings content could not be parsed.
    #[error("{}", settings_message(.path, .message))]
    Settings {
        /// Source file, when the settings came from disk.
        path: Option<PathBuf>,
        /// Message from the YAML parser.
        message: String,
    },

    /// A settings file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A descriptor or token table could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(String),
}

fn settings_message(path: &Option<PathBuf>, message: &str) -> String {
    match path {
        Some(p) => format!("failed to parse settings {}: {}", p.display(), message),
        None => format!("failed to parse settings: {}", message),
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::Serialize(err.to_string())
    }
}

impl From<serde_yaml::Error> for ThemeError {
    fn from(err: serde_yaml::Error) -> Self {
        ThemeError::Serialize(err.to_string())
    }
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
