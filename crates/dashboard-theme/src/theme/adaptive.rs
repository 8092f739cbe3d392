//! Color modes and OS color-scheme detection.
//!
//! [`ColorMode`] is the single input to token and descriptor derivation. The
//! detector is only consulted when settings ask for the `system` initial mode;
//! tests replace it with [`set_theme_detector`].
//!
//! ```rust
//! use dashboard_theme::{set_theme_detector, detect_color_mode, ColorMode};
//!
//! set_theme_detector(|| ColorMode::Light);
//! assert_eq!(detect_color_mode(), ColorMode::Light);
//! ```

use std::fmt;
use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Light or dark palette selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    #[default]
    Dark,
}

impl ColorMode {
    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to resolve the OS color scheme.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Detects the user's preferred color mode.
///
/// Queries the OS through `dark-light` unless a detector was installed with
/// [`set_theme_detector`].
pub fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let mode = (*detector)();
    tracing::debug!(mode = %mode, "resolved OS color mode");
    mode
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        Ok(OsThemeMode::Light) => ColorMode::Light,
        // Dark is also the fallback when the OS gives no answer.
        _ => ColorMode::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_toggled_flips() {
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggled().toggled(), ColorMode::Dark);
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ColorMode::default(), ColorMode::Dark);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ColorMode::Light).unwrap(), "\"light\"");
        let mode: ColorMode = serde_yaml::from_str("dark").unwrap();
        assert_eq!(mode, ColorMode::Dark);
        assert!(serde_yaml::from_str::<ColorMode>("sepia").is_err());
    }

    #[test]
    #[serial]
    fn test_detect_color_mode_uses_override() {
        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);
    }
}
