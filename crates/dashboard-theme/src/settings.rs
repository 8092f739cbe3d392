//! Session settings loaded from YAML.
//!
//! ```yaml
//! # dark (default), light, or system
//! initial_mode: system
//! ```
//!
//! An empty document yields the defaults, so sessions start dark unless told
//! otherwise.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::theme::{detect_color_mode, ColorMode};

/// Which mode a new session starts in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialMode {
    #[default]
    Dark,
    Light,
    /// Follow the OS color scheme at startup.
    System,
}

impl InitialMode {
    /// Resolves to a concrete mode, querying the OS for [`InitialMode::System`].
    pub fn resolve(self) -> ColorMode {
        match self {
            InitialMode::Dark => ColorMode::Dark,
            InitialMode::Light => ColorMode::Light,
            InitialMode::System => detect_color_mode(),
        }
    }
}

impl From<ColorMode> for InitialMode {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Dark => InitialMode::Dark,
            ColorMode::Light => InitialMode::Light,
        }
    }
}

/// Settings for constructing a [`ThemeSession`](crate::ThemeSession).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionSettings {
    pub initial_mode: InitialMode,
}

impl SessionSettings {
    /// Parses settings from YAML content.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, None)
    }

    /// Reads and parses a settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&content, Some(path.to_path_buf()))?;
        debug!(path = %path.display(), initial_mode = ?settings.initial_mode, "loaded session settings");
        Ok(settings)
    }

    fn parse(content: &str, path: Option<PathBuf>) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ThemeError::Settings {
            path,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::set_theme_detector;
    use serial_test::serial;

    #[test]
    fn test_default_is_dark() {
        let settings = SessionSettings::default();
        assert_eq!(settings.initial_mode, InitialMode::Dark);
        assert_eq!(settings.initial_mode.resolve(), ColorMode::Dark);
    }

    #[test]
    fn test_from_yaml_light() {
        let settings = SessionSettings::from_yaml("initial_mode: light").unwrap();
        assert_eq!(settings.initial_mode, InitialMode::Light);
    }

    #[test]
    fn test_from_yaml_empty_uses_defaults() {
        assert_eq!(
            SessionSettings::from_yaml("  \n").unwrap(),
            SessionSettings::default()
        );
    }

    #[test]
    fn test_from_yaml_rejects_unknown_key() {
        let err = SessionSettings::from_yaml("initial_mood: light").unwrap_err();
        assert!(matches!(err, ThemeError::Settings { path: None, .. }));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_mode() {
        assert!(SessionSettings::from_yaml("initial_mode: sepia").is_err());
    }

    #[test]
    #[serial]
    fn test_system_mode_uses_detector() {
        set_theme_detector(|| ColorMode::Light);
        assert_eq!(InitialMode::System.resolve(), ColorMode::Light);
        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(InitialMode::System.resolve(), ColorMode::Dark);
    }

    #[test]
    fn test_from_file() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.yaml");
        fs::write(&path, "initial_mode: light\n").unwrap();

        let settings = SessionSettings::from_file(&path).unwrap();
        assert_eq!(settings.initial_mode, InitialMode::Light);
    }

    #[test]
    fn test_from_file_parse_error_carries_path() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "initial_mode: [").unwrap();

        match SessionSettings::from_file(&path) {
            Err(ThemeError::Settings { path: Some(p), .. }) => assert_eq!(p, path),
            other => panic!("expected settings error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_not_found() {
        let result = SessionSettings::from_file("/nonexistent/path/theme.yaml");
        assert!(matches!(result, Err(ThemeError::Load { .. })));
    }

    #[test]
    fn test_from_color_mode() {
        assert_eq!(InitialMode::from(ColorMode::Light), InitialMode::Light);
        assert_eq!(InitialMode::from(ColorMode::Dark), InitialMode::Dark);
    }
}
