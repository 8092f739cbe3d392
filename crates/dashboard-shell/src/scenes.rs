//! Terminal views fed by an injected theme context.
//!
//! Nothing here builds token tables or descriptors. Views get a
//! [`ThemeContext`] (or just the toggle) from the composition root in
//! `main.rs` and read every color from it.

use std::rc::Rc;

use console::Style;
use dashboard_theme::{
    token_style, ColorMode, ColorModeToggle, RampName, ShadeLevel, ThemeContext, ThemeStyles,
};

/// Page title and subtitle.
///
/// The title uses `grey[100]` in bold and the subtitle `greenAccent[400]`,
/// both from the descriptor's token table.
pub struct Header<'a> {
    title: &'a str,
    subtitle: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, subtitle: &'a str) -> Self {
        Self { title, subtitle }
    }

    pub fn render(&self, ctx: &ThemeContext) -> String {
        let colors = ctx.theme.tokens();
        let title = token_style(colors.get(RampName::Grey, ShadeLevel::L100)).bold();
        let subtitle = token_style(colors.get(RampName::GreenAccent, ShadeLevel::L400));
        format!(
            "{}\n{}\n",
            title.apply_to(self.title),
            subtitle.apply_to(self.subtitle)
        )
    }
}

/// Light/dark switch. Holds nothing but the toggle capability.
pub struct ModeSwitch {
    toggle: Rc<ColorModeToggle>,
}

impl ModeSwitch {
    pub fn new(toggle: Rc<ColorModeToggle>) -> Self {
        Self { toggle }
    }

    /// Simulates a user pressing the switch.
    pub fn press(&self) {
        self.toggle.toggle_color_mode();
    }

    /// Label shown for the current mode.
    pub fn label(mode: ColorMode) -> &'static str {
        match mode {
            ColorMode::Dark => "[dark mode]",
            ColorMode::Light => "[light mode]",
        }
    }
}

/// The dashboard page: header plus a status line naming the active mode.
pub struct Dashboard {
    ctx: ThemeContext,
}

impl Dashboard {
    pub fn new(ctx: ThemeContext) -> Self {
        Self { ctx }
    }

    pub fn render(&self) -> String {
        let styles = ThemeStyles::from_descriptor(&self.ctx.theme);
        let header = Header::new("DASHBOARD", "Welcome to your dashboard").render(&self.ctx);
        let status = styles.apply("neutral", ModeSwitch::label(self.ctx.theme.mode()));
        let accent = Style::new()
            .fg(self.ctx.theme.palette().secondary.main.to_console_color())
            .apply_to("●");
        format!("{}\n{} {}\n", header, accent, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_theme::ThemeSession;

    #[test]
    fn test_header_contains_title_and_subtitle() {
        let session = ThemeSession::new();
        let out = Header::new("TEAM", "Managing the Team Members").render(&session.context());
        assert!(out.contains("TEAM"));
        assert!(out.contains("Managing the Team Members"));
    }

    #[test]
    fn test_dashboard_reports_mode() {
        let session = ThemeSession::new();
        let dark = Dashboard::new(session.context()).render();
        assert!(dark.contains("DASHBOARD"));
        assert!(dark.contains("Welcome to your dashboard"));
        assert!(dark.contains("[dark mode]"));

        session.toggle();
        let light = Dashboard::new(session.context()).render();
        assert!(light.contains("[light mode]"));
    }

    #[test]
    fn test_switch_flips_session() {
        let session = ThemeSession::new();
        let switch = ModeSwitch::new(session.color_mode());
        switch.press();
        assert_eq!(session.mode(), ColorMode::Light);
        switch.press();
        assert_eq!(session.mode(), ColorMode::Dark);
    }

    #[test]
    fn test_switch_labels() {
        assert_eq!(ModeSwitch::label(ColorMode::Dark), "[dark mode]");
        assert_eq!(ModeSwitch::label(ColorMode::Light), "[light mode]");
    }
}
