//! Hex color values.
//!
//! Every token in the theme is an [`Rgb`] triplet. Colors print as lowercase
//! `#rrggbb` and parse from either 3- or 6-digit hex:
//!
//! ```rust
//! use dashboard_theme::Rgb;
//!
//! let teal: Rgb = "#4cceac".parse().unwrap();
//! assert_eq!(teal, Rgb(0x4c, 0xce, 0xac));
//! assert_eq!(teal.to_string(), "#4cceac");
//!
//! let short: Rgb = "#fff".parse().unwrap();
//! assert_eq!(short, Rgb(255, 255, 255));
//! ```

use std::fmt;
use std::str::FromStr;

use console::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Builds a color from a `#rrggbb` literal at compile time.
    ///
    /// Only used to spell out the built-in token tables; a malformed literal
    /// fails the build rather than surfacing at runtime.
    pub(crate) const fn hex(literal: &str) -> Rgb {
        let bytes = literal.as_bytes();
        assert!(
            bytes.len() == 7 && bytes[0] == b'#',
            "color literal must look like #rrggbb"
        );
        Rgb(
            hex_digit(bytes[1]) * 16 + hex_digit(bytes[2]),
            hex_digit(bytes[3]) * 16 + hex_digit(bytes[4]),
            hex_digit(bytes[5]) * 16 + hex_digit(bytes[6]),
        )
    }

    /// Returns the components as a tuple.
    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// Converts the color to the nearest ANSI 256-color palette index.
    ///
    /// Greys map onto the 24-step grayscale ramp, everything else onto the
    /// 6×6×6 color cube.
    ///
    /// ```rust
    /// use dashboard_theme::Rgb;
    ///
    /// assert_eq!(Rgb(255, 0, 0).to_ansi256(), 196);
    /// assert_eq!(Rgb(0, 255, 0).to_ansi256(), 46);
    /// ```
    pub fn to_ansi256(self) -> u8 {
        let Rgb(r, g, b) = self;
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let red = (r as u16 * 5 / 255) as u8;
            let green = (g as u16 * 5 / 255) as u8;
            let blue = (b as u16 * 5 / 255) as u8;
            16 + 36 * red + 6 * green + blue
        }
    }

    /// Converts the color for use with [`console::Style`].
    pub fn to_console_color(self) -> Color {
        Color::Color256(self.to_ansi256())
    }
}

const fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => panic!("color literal contains a non-hex digit"),
    }
}

fn parse_component(value: &str, digits: &str) -> Result<u8, ThemeError> {
    u8::from_str_radix(digits, 16).map_err(|_| ThemeError::InvalidColor {
        value: value.to_string(),
        reason: "contains a non-hex digit",
    })
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ThemeError::InvalidColor {
                value: s.to_string(),
                reason: "expected a leading '#'",
            })?;

        if !hex.is_ascii() {
            return Err(ThemeError::InvalidColor {
                value: s.to_string(),
                reason: "contains a non-hex digit",
            });
        }

        match hex.len() {
            // #rgb -> #rrggbb
            3 => {
                let r = parse_component(s, &hex[0..1])? * 17;
                let g = parse_component(s, &hex[1..2])? * 17;
                let b = parse_component(s, &hex[2..3])? * 17;
                Ok(Rgb(r, g, b))
            }
            6 => {
                let r = parse_component(s, &hex[0..2])?;
                let g = parse_component(s, &hex[2..4])?;
                let b = parse_component(s, &hex[4..6])?;
                Ok(Rgb(r, g, b))
            }
            _ => Err(ThemeError::InvalidColor {
                value: s.to_string(),
                reason: "expected 3 or 6 hex digits",
            }),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
