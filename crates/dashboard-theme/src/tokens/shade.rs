//! Shade levels and nine-step shade ramps.

use std::ops::Index;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::color::Rgb;

/// One of the nine shade steps, `100` (lightest in dark mode) to `900`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeLevel {
    L100,
    L200,
    L300,
    L400,
    L500,
    L600,
    L700,
    L800,
    L900,
}

impl ShadeLevel {
    /// All levels in ascending order.
    pub const ALL: [ShadeLevel; 9] = [
        ShadeLevel::L100,
        ShadeLevel::L200,
        ShadeLevel::L300,
        ShadeLevel::L400,
        ShadeLevel::L500,
        ShadeLevel::L600,
        ShadeLevel::L700,
        ShadeLevel::L800,
        ShadeLevel::L900,
    ];

    /// Position of this level inside a ramp (`L100` is 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The numeric level, `100` through `900`.
    pub const fn value(self) -> u16 {
        (self as u16 + 1) * 100
    }

    /// Looks up a level by its numeric value.
    ///
    /// ```rust
    /// use dashboard_theme::ShadeLevel;
    ///
    /// assert_eq!(ShadeLevel::from_value(400), Some(ShadeLevel::L400));
    /// assert_eq!(ShadeLevel::from_value(450), None);
    /// ```
    pub fn from_value(value: u16) -> Option<Self> {
        if value % 100 != 0 {
            return None;
        }
        let index = (value / 100).checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }

    /// The level at `1000 - self` (100 ↔ 900, …, 500 ↔ 500).
    pub const fn mirrored(self) -> Self {
        Self::ALL[8 - self.index()]
    }
}

/// Nine colors, one per [`ShadeLevel`].
///
/// A ramp is a fixed-size array, so every level is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadeRamp([Rgb; 9]);

impl ShadeRamp {
    /// Creates a ramp from colors ordered `100` through `900`.
    pub const fn new(shades: [Rgb; 9]) -> Self {
        Self(shades)
    }

    /// Returns the color at `level`.
    pub const fn get(&self, level: ShadeLevel) -> Rgb {
        self.0[level.index()]
    }

    /// Iterates `(level, color)` pairs from `100` to `900`.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeLevel, Rgb)> + '_ {
        ShadeLevel::ALL.iter().map(move |&level| (level, self.get(level)))
    }

    /// Returns a ramp where each level takes the color of its mirrored level.
    pub fn reversed(&self) -> Self {
        let mut shades = self.0;
        shades.reverse();
        Self(shades)
    }

    /// Returns a copy with one level replaced.
    pub fn with_shade(mut self, level: ShadeLevel, color: Rgb) -> Self {
        self.0[level.index()] = color;
        self
    }
}

impl Index<ShadeLevel> for ShadeRamp {
    type Output = Rgb;

    fn index(&self, level: ShadeLevel) -> &Rgb {
        &self.0[level.index()]
    }
}

// Serialized as `{"100": "#e0e0e0", ...}` to match the shape design tools expect.
impl Serialize for ShadeRamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ShadeLevel::ALL.len()))?;
        for (level, color) in self.iter() {
            map.serialize_entry(&level.value().to_string(), &color)?;
        }
        map.end()
    }
}
