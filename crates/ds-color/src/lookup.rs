//! Reverse lookup — which tokens carry a given color.

use std::fmt;

use crate::hex::HexColor;
use crate::palette::{PALETTES, Palette, Shade};
use crate::semantic::{Mode, Role, semantic_colors};

/// A token that resolves to a searched color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMatch {
    /// A palette shade.
    Shade {
        palette: &'static Palette,
        shade: Shade,
    },
    /// A semantic role in one mode.
    Role { mode: Mode, role: Role },
}

impl fmt::Display for ColorMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shade { palette, shade } => write!(f, "{}[{shade}]", palette.name()),
            Self::Role { mode, role } => write!(f, "{mode}.{role}"),
        }
    }
}

/// Every palette shade and semantic role equal to `color`: palette shades
/// first (palette order), then light roles, then dark roles.
#[must_use]
pub fn find_color(color: HexColor) -> Vec<ColorMatch> {
    let shades = PALETTES.into_iter().flat_map(|palette| {
        palette
            .iter()
            .filter(move |(_, c)| **c == color)
            .map(move |(shade, _)| ColorMatch::Shade { palette, shade })
    });
    let roles = Mode::ALL.into_iter().flat_map(|mode| {
        semantic_colors(mode)
            .iter()
            .filter(move |(_, c)| **c == color)
            .map(move |(role, _)| ColorMatch::Role { mode, role })
    });
    shades.chain(roles).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLUE, GRAY};
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_shade_and_roles() {
        let found = find_color("#3A5CF3".parse().unwrap());
        assert_eq!(
            found,
            vec![
                ColorMatch::Shade { palette: &BLUE, shade: Shade::Step(60) },
                ColorMatch::Role { mode: Mode::Light, role: Role::Primary },
                ColorMatch::Role { mode: Mode::Dark, role: Role::Primary },
            ]
        );
    }

    #[test]
    fn white_across_modes() {
        let found: Vec<String> = find_color("#fff".parse().unwrap())
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            found,
            vec!["gray[white]", "light.backgroundPrimary", "dark.textPrimary"]
        );
    }

    #[test]
    fn shared_gray_shade() {
        let found = find_color(crate::palette::GRAY_10);
        assert!(found.contains(&ColorMatch::Shade { palette: &GRAY, shade: Shade::Step(10) }));
        assert!(found.contains(&ColorMatch::Role { mode: Mode::Light, role: Role::BorderSecondary }));
        assert!(found.contains(&ColorMatch::Role { mode: Mode::Dark, role: Role::TextSecondary }));
    }

    #[test]
    fn unknown_color_finds_nothing() {
        assert!(find_color(HexColor::rgb(1, 2, 3)).is_empty());
    }
}
