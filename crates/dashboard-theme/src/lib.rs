//! # Dashboard Theme - light/dark design tokens
//!
//! `dashboard-theme` derives a dashboard's colors and typography from a single
//! light/dark flag and keeps that flag in one place.
//!
//! ## Core Concepts
//!
//! - [`tokens`]: pure function from [`ColorMode`] to a [`TokenTable`] of five
//!   nine-step [`ShadeRamp`]s
//! - [`ThemeDescriptor`]: palette roles plus typography for one mode
//! - [`ThemeSession`]: owns the mode, memoizes the descriptor, and hands out
//!   a stable [`ColorModeToggle`]
//! - [`ThemeContext`]: what a composition root passes to views
//! - [`ThemeStyles`]: palette roles as `console` styles for terminal output
//! - [`SessionSettings`]: YAML settings for the initial mode
//!
//! ## Quick Start
//!
//! ```rust
//! use dashboard_theme::{ColorMode, ThemeSession};
//!
//! let session = ThemeSession::new();
//! let dark = session.theme();
//! assert_eq!(dark.palette().background.default.to_string(), "#141b2d");
//!
//! session.toggle();
//! let light = session.theme();
//! assert_eq!(light.mode(), ColorMode::Light);
//! assert_eq!(light.palette().background.default.to_string(), "#fcfcfc");
//! ```
//!
//! ## Light Tokens
//!
//! Light ramps are the dark ramps read backwards, except light
//! `primary[400]`, which is pinned to [`LIGHT_PRIMARY_400`]:
//!
//! ```rust
//! use dashboard_theme::{tokens, ColorMode, RampName, ShadeLevel};
//!
//! let dark = tokens(ColorMode::Dark);
//! let light = tokens(ColorMode::Light);
//! assert_eq!(
//!     light.get(RampName::RedAccent, ShadeLevel::L200),
//!     dark.get(RampName::RedAccent, ShadeLevel::L800),
//! );
//! assert_eq!(light.get(RampName::Primary, ShadeLevel::L400).to_string(), "#f2f0f0");
//! ```

mod color;
mod error;
pub mod settings;
pub mod style;
pub mod theme;
pub mod tokens;

pub use color::Rgb;
pub use error::{Result, ThemeError};

pub use settings::{InitialMode, SessionSettings};
pub use style::{token_style, ThemeStyles};

pub use theme::{
    detect_color_mode, role_assignment, set_theme_detector, BackgroundColors, ColorMode,
    ColorModeToggle, Heading, MainColor, NeutralColors, Palette, PaletteRole, RoleAssignment,
    RoleSource, TextStyle, ThemeContext, ThemeDescriptor, ThemeSession, Typography,
    BASE_FONT_SIZE, FONT_FAMILY, LIGHT_BACKGROUND, TYPOGRAPHY,
};

pub use tokens::{tokens, RampName, ShadeLevel, ShadeRamp, TokenTable, LIGHT_PRIMARY_400};
