//! The token table and its mode-dependent generator.

use serde::Serialize;

use super::shade::{ShadeLevel, ShadeRamp};
use crate::color::Rgb;
use crate::theme::ColorMode;

/// Names of the five color families in a [`TokenTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RampName {
    Grey,
    Primary,
    GreenAccent,
    RedAccent,
    BlueAccent,
}

impl RampName {
    /// All ramp names in table order.
    pub const ALL: [RampName; 5] = [
        RampName::Grey,
        RampName::Primary,
        RampName::GreenAccent,
        RampName::RedAccent,
        RampName::BlueAccent,
    ];

    /// The key used when the table is serialized (`greenAccent`, …).
    pub const fn key(self) -> &'static str {
        match self {
            RampName::Grey => "grey",
            RampName::Primary => "primary",
            RampName::GreenAccent => "greenAccent",
            RampName::RedAccent => "redAccent",
            RampName::BlueAccent => "blueAccent",
        }
    }
}

/// Every ramp for one [`ColorMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTable {
    grey: ShadeRamp,
    primary: ShadeRamp,
    green_accent: ShadeRamp,
    red_accent: ShadeRamp,
    blue_accent: ShadeRamp,
}

impl TokenTable {
    /// Returns the ramp for `name`.
    pub const fn ramp(&self, name: RampName) -> &ShadeRamp {
        match name {
            RampName::Grey => &self.grey,
            RampName::Primary => &self.primary,
            RampName::GreenAccent => &self.green_accent,
            RampName::RedAccent => &self.red_accent,
            RampName::BlueAccent => &self.blue_accent,
        }
    }

    /// Returns a single token.
    ///
    /// ```rust
    /// use dashboard_theme::{tokens, ColorMode, RampName, ShadeLevel};
    ///
    /// let dark = tokens(ColorMode::Dark);
    /// assert_eq!(dark.get(RampName::Primary, ShadeLevel::L500).to_string(), "#141b2d");
    /// ```
    pub const fn get(&self, name: RampName, level: ShadeLevel) -> Rgb {
        self.ramp(name).get(level)
    }

    pub fn grey(&self) -> &ShadeRamp {
        &self.grey
    }

    pub fn primary(&self) -> &ShadeRamp {
        &self.primary
    }

    pub fn green_accent(&self) -> &ShadeRamp {
        &self.green_accent
    }

    pub fn red_accent(&self) -> &ShadeRamp {
        &self.red_accent
    }

    pub fn blue_accent(&self) -> &ShadeRamp {
        &self.blue_accent
    }

    /// Iterates `(name, ramp)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (RampName, &ShadeRamp)> + '_ {
        RampName::ALL.iter().map(move |&name| (name, self.ramp(name)))
    }

    /// Applies [`ShadeRamp::reversed`] to every ramp.
    pub fn reversed(&self) -> Self {
        Self {
            grey: self.grey.reversed(),
            primary: self.primary.reversed(),
            green_accent: self.green_accent.reversed(),
            red_accent: self.red_accent.reversed(),
            blue_accent: self.blue_accent.reversed(),
        }
    }

    /// Returns a copy with one token replaced.
    pub fn with_token(mut self, name: RampName, level: ShadeLevel, color: Rgb) -> Self {
        let ramp = match name {
            RampName::Grey => &mut self.grey,
            RampName::Primary => &mut self.primary,
            RampName::GreenAccent => &mut self.green_accent,
            RampName::RedAccent => &mut self.red_accent,
            RampName::BlueAccent => &mut self.blue_accent,
        };
        *ramp = ramp.with_shade(level, color);
        self
    }
}

/// Light-mode `primary[400]`.
///
/// Light ramps are otherwise the dark ramps reversed, which would put
/// `dark.primary[600]` here. This slot holds a fixed near-white instead.
pub const LIGHT_PRIMARY_400: Rgb = Rgb::hex("#f2f0f0");

const fn ramp(shades: [&str; 9]) -> ShadeRamp {
    ShadeRamp::new([
        Rgb::hex(shades[0]),
        Rgb::hex(shades[1]),
        Rgb::hex(shades[2]),
        Rgb::hex(shades[3]),
        Rgb::hex(shades[4]),
        Rgb::hex(shades[5]),
        Rgb::hex(shades[6]),
        Rgb::hex(shades[7]),
        Rgb::hex(shades[8]),
    ])
}

/// The canonical ramps. Dark mode uses them as-is; light mode is derived.
const DARK_TOKENS: TokenTable = TokenTable {
    grey: ramp([
        "#e0e0e0", "#c2c2c2", "#a3a3a3", "#858585", "#666666", "#525252", "#3d3d3d", "#292929",
        "#141414",
    ]),
    primary: ramp([
        "#d0d1d5", "#a1a4ab", "#727681", "#1F2A40", "#141b2d", "#101624", "#0c101b", "#080b12",
        "#040509",
    ]),
    green_accent: ramp([
        "#dbf5ee", "#b7ebde", "#94e2cd", "#70d8bd", "#4cceac", "#3da58a", "#2e7c67", "#1e5245",
        "#0f2922",
    ]),
    red_accent: ramp([
        "#f8dcdb", "#f1b9b7", "#e99592", "#e2726e", "#db4f4a", "#af3f3b", "#832f2c", "#58201e",
        "#2c100f",
    ]),
    blue_accent: ramp([
        "#e1e2fe", "#c3c6fd", "#a4a9fc", "#868dfb", "#6870fa", "#535ac8", "#3e4396", "#2a2d64",
        "#151632",
    ]),
};

/// Generates the token table for `mode`.
///
/// Dark mode returns the canonical ramps. Light mode returns every ramp
/// reversed (`light[L] == dark[1000 - L]`), except `primary[400]`, which is
/// [`LIGHT_PRIMARY_400`].
///
/// ```rust
/// use dashboard_theme::{tokens, ColorMode, RampName, ShadeLevel};
///
/// let dark = tokens(ColorMode::Dark);
/// let light = tokens(ColorMode::Light);
/// assert_eq!(
///     light.get(RampName::Grey, ShadeLevel::L100),
///     dark.get(RampName::Grey, ShadeLevel::L900),
/// );
/// ```
pub fn tokens(mode: ColorMode) -> TokenTable {
    match mode {
        ColorMode::Dark => DARK_TOKENS,
        ColorMode::Light => DARK_TOKENS.reversed().with_token(
            RampName::Primary,
            ShadeLevel::L400,
            LIGHT_PRIMARY_400,
        ),
    }
}
