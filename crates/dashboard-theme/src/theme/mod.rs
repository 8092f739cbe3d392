//! Mode-dependent themes and the session that owns the mode.
//!
//! ## Derivation
//!
//! ```text
//! ColorMode ──tokens()──▶ TokenTable ──RoleAssignment──▶ Palette ─┐
//!                                                                  ├─▶ ThemeDescriptor
//!                                          TYPOGRAPHY (fixed) ────┘
//! ```
//!
//! The token table is a pure function of the mode. Palette roles are filled
//! from a per-mode [`RoleAssignment`], so light and dark differ in data only.
//!
//! ## Propagation
//!
//! [`ThemeSession`] is the single owner of the mode. It memoizes the
//! descriptor for the current mode and exposes a [`ColorModeToggle`] whose
//! identity never changes. A composition root builds one session and passes
//! [`ThemeContext`] values down to whatever renders.
//!
//! ```rust
//! use dashboard_theme::ThemeSession;
//!
//! let session = ThemeSession::new();
//! let ctx = session.context();
//! assert_eq!(ctx.theme.palette().background.default.to_string(), "#141b2d");
//!
//! ctx.color_mode.toggle_color_mode();
//! assert_eq!(session.theme().palette().background.default.to_string(), "#fcfcfc");
//! ```

mod adaptive;
mod descriptor;
mod roles;
mod session;

pub use adaptive::{detect_color_mode, set_theme_detector, ColorMode};
pub use descriptor::{
    BackgroundColors, Heading, MainColor, NeutralColors, Palette, TextStyle, ThemeDescriptor,
    Typography, BASE_FONT_SIZE, FONT_FAMILY, TYPOGRAPHY,
};
pub use roles::{role_assignment, PaletteRole, RoleAssignment, RoleSource, LIGHT_BACKGROUND};
pub use session::{ColorModeToggle, ThemeContext, ThemeSession};
