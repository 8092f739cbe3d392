//! Color design tokens.
//!
//! A [`TokenTable`] holds five color families (grey, primary and three
//! accents), each a [`ShadeRamp`] of nine levels from `100` to `900`.
//!
//! Only the dark ramps are written out by hand. The light table is derived
//! from them by reading each ramp backwards, so `light[200]` is `dark[800]` and
//! `500` stays put. One slot breaks that rule: light `primary[400]` is the
//! fixed near-white [`LIGHT_PRIMARY_400`], which light surfaces rely on.
//!
//! ```rust
//! use dashboard_theme::{tokens, ColorMode, RampName, ShadeLevel, LIGHT_PRIMARY_400};
//!
//! let light = tokens(ColorMode::Light);
//! assert_eq!(light.get(RampName::Primary, ShadeLevel::L400), LIGHT_PRIMARY_400);
//! ```

mod shade;
mod table;

pub use shade::{ShadeLevel, ShadeRamp};
pub use table::{tokens, RampName, TokenTable, LIGHT_PRIMARY_400};
