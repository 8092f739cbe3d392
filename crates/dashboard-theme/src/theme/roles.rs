//! Palette roles and the per-mode table that fills them.
//!
//! The difference between the light and dark palettes lives here as data:
//! each mode has a [`RoleAssignment`] naming, for every [`PaletteRole`], the
//! token (or literal) it reads. The descriptor builder walks the table and
//! never branches on the mode itself.

use crate::color::Rgb;
use crate::tokens::{RampName, ShadeLevel, TokenTable};

use super::adaptive::ColorMode;

/// Semantic slots of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaletteRole {
    PrimaryMain,
    SecondaryMain,
    NeutralDark,
    NeutralMain,
    NeutralLight,
    BackgroundDefault,
}

impl PaletteRole {
    pub const ALL: [PaletteRole; 6] = [
        PaletteRole::PrimaryMain,
        PaletteRole::SecondaryMain,
        PaletteRole::NeutralDark,
        PaletteRole::NeutralMain,
        PaletteRole::NeutralLight,
        PaletteRole::BackgroundDefault,
    ];

    /// Style name used for this role in [`ThemeStyles`](crate::ThemeStyles).
    pub const fn style_name(self) -> &'static str {
        match self {
            PaletteRole::PrimaryMain => "primary",
            PaletteRole::SecondaryMain => "secondary",
            PaletteRole::NeutralDark => "neutral.dark",
            PaletteRole::NeutralMain => "neutral",
            PaletteRole::NeutralLight => "neutral.light",
            PaletteRole::BackgroundDefault => "background",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Where a role takes its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSource {
    /// A shade from the mode's token table.
    Token(RampName, ShadeLevel),
    /// A fixed color independent of the token table.
    Literal(Rgb),
}

impl RoleSource {
    /// Looks the color up in `table`.
    pub fn resolve(self, table: &TokenTable) -> Rgb {
        match self {
            RoleSource::Token(ramp, level) => table.get(ramp, level),
            RoleSource::Literal(color) => color,
        }
    }
}

/// One source per [`PaletteRole`], in role order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment([RoleSource; 6]);

impl RoleAssignment {
    /// The source for `role`.
    pub const fn source(&self, role: PaletteRole) -> RoleSource {
        self.0[role.index()]
    }

    /// Iterates `(role, source)` pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteRole, RoleSource)> + '_ {
        PaletteRole::ALL
            .iter()
            .map(move |&role| (role, self.source(role)))
    }
}

/// Light-mode page background.
pub const LIGHT_BACKGROUND: Rgb = Rgb::hex("#fcfcfc");

static DARK_ROLES: RoleAssignment = RoleAssignment([
    RoleSource::Token(RampName::Primary, ShadeLevel::L500),
    RoleSource::Token(RampName::GreenAccent, ShadeLevel::L500),
    RoleSource::Token(RampName::Grey, ShadeLevel::L700),
    RoleSource::Token(RampName::Grey, ShadeLevel::L500),
    RoleSource::Token(RampName::Grey, ShadeLevel::L100),
    RoleSource::Token(RampName::Primary, ShadeLevel::L500),
]);

static LIGHT_ROLES: RoleAssignment = RoleAssignment([
    RoleSource::Token(RampName::Primary, ShadeLevel::L100),
    RoleSource::Token(RampName::GreenAccent, ShadeLevel::L500),
    RoleSource::Token(RampName::Grey, ShadeLevel::L700),
    RoleSource::Token(RampName::Grey, ShadeLevel::L500),
    RoleSource::Token(RampName::Grey, ShadeLevel::L100),
    RoleSource::Literal(LIGHT_BACKGROUND),
]);

/// The role table for `mode`.
pub fn role_assignment(mode: ColorMode) -> &'static RoleAssignment {
    match mode {
        ColorMode::Dark => &DARK_ROLES,
        ColorMode::Light => &LIGHT_ROLES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::tokens;

    #[test]
    fn test_dark_roles() {
        let roles = role_assignment(ColorMode::Dark);
        assert_eq!(
            roles.source(PaletteRole::PrimaryMain),
            RoleSource::Token(RampName::Primary, ShadeLevel::L500)
        );
        assert_eq!(
            roles.source(PaletteRole::BackgroundDefault),
            RoleSource::Token(RampName::Primary, ShadeLevel::L500)
        );
    }

    #[test]
    fn test_light_roles() {
        let roles = role_assignment(ColorMode::Light);
        assert_eq!(
            roles.source(PaletteRole::PrimaryMain),
            RoleSource::Token(RampName::Primary, ShadeLevel::L100)
        );
        assert_eq!(
            roles.source(PaletteRole::BackgroundDefault),
            RoleSource::Literal(LIGHT_BACKGROUND)
        );
    }

    #[test]
    fn test_shared_roles_are_identical_across_modes() {
        let dark = role_assignment(ColorMode::Dark);
        let light = role_assignment(ColorMode::Light);
        for role in [
            PaletteRole::SecondaryMain,
            PaletteRole::NeutralDark,
            PaletteRole::NeutralMain,
            PaletteRole::NeutralLight,
        ] {
            assert_eq!(dark.source(role), light.source(role), "{:?}", role);
        }
    }

    #[test]
    fn test_resolve_against_table() {
        let table = tokens(ColorMode::Dark);
        let source = RoleSource::Token(RampName::GreenAccent, ShadeLevel::L500);
        assert_eq!(source.resolve(&table).to_string(), "#4cceac");
        assert_eq!(
            RoleSource::Literal(LIGHT_BACKGROUND).resolve(&table),
            LIGHT_BACKGROUND
        );
    }

    #[test]
    fn test_iter_covers_every_role_once() {
        let roles: Vec<PaletteRole> = role_assignment(ColorMode::Light)
            .iter()
            .map(|(role, _)| role)
            .collect();
        assert_eq!(roles, PaletteRole::ALL.to_vec());
    }
}
