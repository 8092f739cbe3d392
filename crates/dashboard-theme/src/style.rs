//! Terminal styles resolved from a theme descriptor.
//!
//! [`ThemeStyles`] maps each palette role to a [`console::Style`] using the
//! nearest ANSI-256 color, so terminal views can style text by role name:
//!
//! | name            | role                 | applied as  |
//! |-----------------|----------------------|-------------|
//! | `primary`       | `primary.main`       | foreground  |
//! | `secondary`     | `secondary.main`     | foreground  |
//! | `neutral.dark`  | `neutral.dark`       | foreground  |
//! | `neutral`       | `neutral.main`       | foreground  |
//! | `neutral.light` | `neutral.light`      | foreground  |
//! | `background`    | `background.default` | background  |
//!
//! ```rust
//! use dashboard_theme::{ThemeSession, ThemeStyles};
//!
//! let session = ThemeSession::new();
//! let styles = ThemeStyles::from_descriptor(&session.theme());
//! assert!(styles.get("secondary").is_some());
//! ```

use std::collections::BTreeMap;

use console::Style;
use tracing::debug;

use crate::color::Rgb;
use crate::theme::{ColorMode, PaletteRole, ThemeDescriptor};

/// Named console styles for one descriptor.
#[derive(Debug, Clone)]
pub struct ThemeStyles {
    mode: ColorMode,
    styles: BTreeMap<&'static str, Style>,
}

impl ThemeStyles {
    /// Resolves a style for every palette role of `theme`.
    pub fn from_descriptor(theme: &ThemeDescriptor) -> Self {
        let palette = theme.palette();
        let styles = PaletteRole::ALL
            .iter()
            .map(|&role| {
                let color = palette.color(role).to_console_color();
                let style = match role {
                    PaletteRole::BackgroundDefault => Style::new().bg(color),
                    _ => Style::new().fg(color),
                };
                (role.style_name(), style)
            })
            .collect();

        Self {
            mode: theme.mode(),
            styles,
        }
    }

    /// Mode of the descriptor these styles came from.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.styles.keys().copied()
    }

    /// Forces (or suppresses) ANSI output regardless of TTY detection.
    pub fn force_styling(mut self, value: bool) -> Self {
        for style in self.styles.values_mut() {
            *style = style.clone().force_styling(value);
        }
        self
    }

    /// Styles `text` with the named style. Unknown names leave it unstyled.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => {
                debug!(style = name, "unknown theme style");
                text.to_string()
            }
        }
    }
}

/// A foreground style for an arbitrary token.
pub fn token_style(color: Rgb) -> Style {
    Style::new().fg(color.to_console_color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeSession;

    #[test]
    fn test_every_role_has_a_style() {
        let session = ThemeSession::new();
        let styles = ThemeStyles::from_descriptor(&session.theme());
        for role in PaletteRole::ALL {
            assert!(styles.get(role.style_name()).is_some(), "{:?}", role);
        }
        assert_eq!(styles.names().count(), PaletteRole::ALL.len());
    }

    #[test]
    fn test_apply_uses_role_color() {
        let session = ThemeSession::new();
        let theme = session.theme();
        let styles = ThemeStyles::from_descriptor(&theme).force_styling(true);

        let code = theme.palette().secondary.main.to_ansi256();
        let output = styles.apply("secondary", "ok");
        assert!(
            output.contains(&format!("\x1b[38;5;{}m", code)),
            "unexpected output: {:?}",
            output
        );
        assert!(output.contains("ok"));
    }

    #[test]
    fn test_background_is_applied_as_bg() {
        let session = ThemeSession::new();
        let theme = session.theme();
        let styles = ThemeStyles::from_descriptor(&theme).force_styling(true);

        let code = theme.palette().background.default.to_ansi256();
        let output = styles.apply("background", " ");
        assert!(output.contains(&format!("\x1b[48;5;{}m", code)), "{:?}", output);
    }

    #[test]
    fn test_apply_unknown_style_is_plain() {
        let session = ThemeSession::new();
        let styles = ThemeStyles::from_descriptor(&session.theme()).force_styling(true);
        assert_eq!(styles.apply("missing", "text"), "text");
    }

    #[test]
    fn test_styles_follow_mode() {
        let session = ThemeSession::new();
        let dark = ThemeStyles::from_descriptor(&session.theme());
        session.toggle();
        let light = ThemeStyles::from_descriptor(&session.theme());
        assert_eq!(dark.mode(), ColorMode::Dark);
        assert_eq!(light.mode(), ColorMode::Light);
    }

    #[test]
    fn test_token_style_plain_when_not_forced() {
        let style = token_style(Rgb(0x4c, 0xce, 0xac)).force_styling(false);
        assert_eq!(style.apply_to("x").to_string(), "x");
    }
}
