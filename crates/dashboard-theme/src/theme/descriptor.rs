//! Render-ready theme descriptors.
//!
//! A [`ThemeDescriptor`] bundles the resolved palette roles, the typography
//! scale and the token table they were read from. Descriptors are only built
//! by [`ThemeSession`](crate::ThemeSession); consumers receive them behind an
//! `Rc` and treat them as read-only.
//!
//! The serialized form follows the usual component-library theme layout:
//!
//! ```yaml
//! palette:
//!   mode: dark
//!   primary: { main: "#141b2d" }
//!   secondary: { main: "#4cceac" }
//!   neutral: { dark: "#3d3d3d", main: "#666666", light: "#e0e0e0" }
//!   background: { default: "#141b2d" }
//! typography:
//!   fontFamily: Source Sans Pro,sans-serif
//!   fontSize: 12
//!   h1: { fontFamily: Source Sans Pro,sans-serif, fontSize: 40 }
//!   # ... through h6
//! ```

use serde::Serialize;

use crate::color::Rgb;
use crate::error::Result;
use crate::tokens::{tokens, TokenTable};

use super::adaptive::ColorMode;
use super::roles::{role_assignment, PaletteRole};

/// Font stack shared by body text and every heading.
pub const FONT_FAMILY: &str = "Source Sans Pro,sans-serif";

/// Base body font size.
pub const BASE_FONT_SIZE: u8 = 12;

/// A role with a single `main` shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MainColor {
    pub main: Rgb,
}

/// The three neutral shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NeutralColors {
    pub dark: Rgb,
    pub main: Rgb,
    pub light: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundColors {
    pub default: Rgb,
}

/// Palette roles resolved for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub mode: ColorMode,
    pub primary: MainColor,
    pub secondary: MainColor,
    pub neutral: NeutralColors,
    pub background: BackgroundColors,
}

impl Palette {
    /// Returns the color filling `role`.
    pub fn color(&self, role: PaletteRole) -> Rgb {
        match role {
            PaletteRole::PrimaryMain => self.primary.main,
            PaletteRole::SecondaryMain => self.secondary.main,
            PaletteRole::NeutralDark => self.neutral.dark,
            PaletteRole::NeutralMain => self.neutral.main,
            PaletteRole::NeutralLight => self.neutral.light,
            PaletteRole::BackgroundDefault => self.background.default,
        }
    }
}

/// Heading levels of the typography scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl Heading {
    pub const ALL: [Heading; 6] = [
        Heading::H1,
        Heading::H2,
        Heading::H3,
        Heading::H4,
        Heading::H5,
        Heading::H6,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: &'static str,
    pub font_size: u8,
}

impl TextStyle {
    const fn sized(font_size: u8) -> Self {
        Self {
            font_family: FONT_FAMILY,
            font_size,
        }
    }
}

/// Font family, base size and six heading sizes. Identical in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: &'static str,
    pub font_size: u8,
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub h5: TextStyle,
    pub h6: TextStyle,
}

impl Typography {
    pub const fn heading(&self, heading: Heading) -> TextStyle {
        match heading {
            Heading::H1 => self.h1,
            Heading::H2 => self.h2,
            Heading::H3 => self.h3,
            Heading::H4 => self.h4,
            Heading::H5 => self.h5,
            Heading::H6 => self.h6,
        }
    }
}

/// The fixed typography scale.
pub const TYPOGRAPHY: Typography = Typography {
    font_family: FONT_FAMILY,
    font_size: BASE_FONT_SIZE,
    h1: TextStyle::sized(40),
    h2: TextStyle::sized(32),
    h3: TextStyle::sized(24),
    h4: TextStyle::sized(20),
    h5: TextStyle::sized(16),
    h6: TextStyle::sized(14),
};

/// Palette and typography for one color mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeDescriptor {
    palette: Palette,
    typography: Typography,
    #[serde(skip)]
    tokens: TokenTable,
}

impl ThemeDescriptor {
    /// Derives the descriptor for `mode` from its token table and role table.
    pub(crate) fn derive(mode: ColorMode) -> Self {
        let tokens = tokens(mode);
        let roles = role_assignment(mode);
        let color = |role: PaletteRole| roles.source(role).resolve(&tokens);

        let palette = Palette {
            mode,
            primary: MainColor {
                main: color(PaletteRole::PrimaryMain),
            },
            secondary: MainColor {
                main: color(PaletteRole::SecondaryMain),
            },
            neutral: NeutralColors {
                dark: color(PaletteRole::NeutralDark),
                main: color(PaletteRole::NeutralMain),
                light: color(PaletteRole::NeutralLight),
            },
            background: BackgroundColors {
                default: color(PaletteRole::BackgroundDefault),
            },
        };

        Self {
            palette,
            typography: TYPOGRAPHY,
            tokens,
        }
    }

    /// The mode this descriptor was derived for.
    pub fn mode(&self) -> ColorMode {
        self.palette.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    /// The token table the palette was resolved from.
    ///
    /// Components that need raw shades read them here instead of generating
    /// their own table, so every shade on screen comes from the same mode.
    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    /// Serializes palette and typography as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes palette and typography as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{RampName, ShadeLevel};

    fn hex(s: &str) -> Rgb {
        s.parse().unwrap()
    }

    #[test]
    fn test_dark_palette() {
        let theme = ThemeDescriptor::derive(ColorMode::Dark);
        let palette = theme.palette();
        assert_eq!(palette.mode, ColorMode::Dark);
        assert_eq!(palette.primary.main, hex("#141b2d"));
        assert_eq!(palette.secondary.main, hex("#4cceac"));
        assert_eq!(palette.neutral.dark, hex("#3d3d3d"));
        assert_eq!(palette.neutral.main, hex("#666666"));
        assert_eq!(palette.neutral.light, hex("#e0e0e0"));
        assert_eq!(palette.background.default, hex("#141b2d"));
    }

    #[test]
    fn test_light_palette() {
        let theme = ThemeDescriptor::derive(ColorMode::Light);
        let palette = theme.palette();
        assert_eq!(palette.mode, ColorMode::Light);
        assert_eq!(palette.primary.main, hex("#040509"));
        assert_eq!(palette.secondary.main, hex("#4cceac"));
        // Neutral roles read the same levels, which hold reversed colors in light mode.
        assert_eq!(palette.neutral.dark, hex("#a3a3a3"));
        assert_eq!(palette.neutral.main, hex("#666666"));
        assert_eq!(palette.neutral.light, hex("#141414"));
        assert_eq!(palette.background.default, hex("#fcfcfc"));
    }

    #[test]
    fn test_palette_color_by_role() {
        let theme = ThemeDescriptor::derive(ColorMode::Dark);
        for role in PaletteRole::ALL {
            let expected = role_assignment(ColorMode::Dark)
                .source(role)
                .resolve(theme.tokens());
            assert_eq!(theme.palette().color(role), expected);
        }
    }

    #[test]
    fn test_typography_scale() {
        let theme = ThemeDescriptor::derive(ColorMode::Light);
        let typography = theme.typography();
        assert_eq!(typography.font_family, "Source Sans Pro,sans-serif");
        assert_eq!(typography.font_size, 12);
        let sizes: Vec<u8> = Heading::ALL
            .iter()
            .map(|&h| typography.heading(h).font_size)
            .collect();
        assert_eq!(sizes, vec![40, 32, 24, 20, 16, 14]);
        assert!(Heading::ALL
            .iter()
            .all(|&h| typography.heading(h).font_family == FONT_FAMILY));
    }

    #[test]
    fn test_typography_is_mode_independent() {
        assert_eq!(
            ThemeDescriptor::derive(ColorMode::Dark).typography(),
            ThemeDescriptor::derive(ColorMode::Light).typography()
        );
    }

    #[test]
    fn test_tokens_follow_mode() {
        let light = ThemeDescriptor::derive(ColorMode::Light);
        assert_eq!(light.tokens(), &tokens(ColorMode::Light));
        assert_eq!(
            light.tokens().get(RampName::Grey, ShadeLevel::L100),
            hex("#141414")
        );
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&ThemeDescriptor::derive(ColorMode::Dark).to_json().unwrap())
                .unwrap();
        assert_eq!(json["palette"]["mode"], "dark");
        assert_eq!(json["palette"]["primary"]["main"], "#141b2d");
        assert_eq!(json["palette"]["background"]["default"], "#141b2d");
        assert_eq!(json["typography"]["fontFamily"], FONT_FAMILY);
        assert_eq!(json["typography"]["h3"]["fontSize"], 24);
        assert!(json.get("tokens").is_none());
    }

    #[test]
    fn test_yaml_mentions_mode() {
        let yaml = ThemeDescriptor::derive(ColorMode::Light).to_yaml().unwrap();
        assert!(yaml.contains("mode: light"));
        assert!(yaml.contains("fontSize: 40"));
    }
}
