//! The theme session: the one owner of the current color mode.
//!
//! A [`ThemeSession`] starts in dark mode and changes mode only through its
//! toggle. The descriptor for the current mode is derived on the first read
//! after a change and reused until the next one.
//!
//! Views never see the session. The composition root hands them a
//! [`ThemeContext`]: the current descriptor plus the [`ColorModeToggle`]
//! capability, whose `Rc` stays the same for the whole session so views can
//! compare it by pointer.
//!
//! ```rust
//! use dashboard_theme::{ColorMode, ThemeSession};
//!
//! let session = ThemeSession::new();
//! assert_eq!(session.theme().mode(), ColorMode::Dark);
//!
//! let toggle = session.color_mode();
//! toggle.toggle_color_mode();
//! assert_eq!(session.theme().mode(), ColorMode::Light);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, trace};

use super::adaptive::ColorMode;
use super::descriptor::ThemeDescriptor;
use crate::settings::SessionSettings;

/// Flips the session's color mode.
///
/// Shares the mode cell with its [`ThemeSession`]; calling
/// [`toggle_color_mode`](Self::toggle_color_mode) is the only way views can
/// change the theme.
#[derive(Debug)]
pub struct ColorModeToggle {
    mode: Rc<Cell<ColorMode>>,
}

impl ColorModeToggle {
    /// Switches to the other mode.
    pub fn toggle_color_mode(&self) {
        let from = self.mode.get();
        let to = from.toggled();
        self.mode.set(to);
        debug!(%from, %to, "color mode toggled");
    }
}

/// The pair a composition root injects into views.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    pub theme: Rc<ThemeDescriptor>,
    pub color_mode: Rc<ColorModeToggle>,
}

/// Owns the color mode and the memoized descriptor derived from it.
#[derive(Debug)]
pub struct ThemeSession {
    mode: Rc<Cell<ColorMode>>,
    toggle: Rc<ColorModeToggle>,
    cached: RefCell<Option<Rc<ThemeDescriptor>>>,
    derivations: Cell<usize>,
}

impl ThemeSession {
    /// Creates a session in dark mode.
    pub fn new() -> Self {
        Self::with_mode(ColorMode::Dark)
    }

    /// Creates a session starting in `mode`.
    pub fn with_mode(mode: ColorMode) -> Self {
        let mode = Rc::new(Cell::new(mode));
        let toggle = Rc::new(ColorModeToggle {
            mode: Rc::clone(&mode),
        });
        Self {
            mode,
            toggle,
            cached: RefCell::new(None),
            derivations: Cell::new(0),
        }
    }

    /// Creates a session whose initial mode comes from `settings`.
    pub fn from_settings(settings: &SessionSettings) -> Self {
        Self::with_mode(settings.initial_mode.resolve())
    }

    /// The current mode.
    pub fn mode(&self) -> ColorMode {
        self.mode.get()
    }

    /// Returns the descriptor for the current mode.
    ///
    /// Repeated calls without a toggle in between return the same `Rc`.
    pub fn theme(&self) -> Rc<ThemeDescriptor> {
        let mode = self.mode.get();
        let mut cached = self.cached.borrow_mut();

        if let Some(theme) = cached.as_ref().filter(|theme| theme.mode() == mode) {
            trace!(%mode, "theme cache hit");
            return Rc::clone(theme);
        }

        let theme = Rc::new(ThemeDescriptor::derive(mode));
        self.derivations.set(self.derivations.get() + 1);
        debug!(%mode, derivations = self.derivations.get(), "derived theme");
        *cached = Some(Rc::clone(&theme));
        theme
    }

    /// The toggle capability. Always the same `Rc` for this session.
    pub fn color_mode(&self) -> Rc<ColorModeToggle> {
        Rc::clone(&self.toggle)
    }

    /// Switches to the other mode.
    pub fn toggle(&self) {
        self.toggle.toggle_color_mode();
    }

    /// Current descriptor and toggle, ready to hand to views.
    pub fn context(&self) -> ThemeContext {
        ThemeContext {
            theme: self.theme(),
            color_mode: self.color_mode(),
        }
    }

    /// How many descriptors this session has derived so far.
    pub fn derivation_count(&self) -> usize {
        self.derivations.get()
    }
}

impl Default for ThemeSession {
    fn default() -> Self {
        Self::new()
    }
}
