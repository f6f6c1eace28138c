//! Color variable maps — the flattened view of the color tables.
//!
//! The light map carries everything: every palette shade, the light
//! semantic roles and the gradients. Palette shades and gradients do not
//! change with the mode, so the dark map carries only the semantic roles
//! that override the light ones.
//!
//! Maps are built once per process on first use and handed out as shared
//! references.

use std::sync::LazyLock;

use ds_vars::{VarMap, flatten_scalars, to_kebab_case};

use crate::gradient::GRADIENTS;
use crate::palette::PALETTES;
use crate::semantic::{Mode, Role, RoleGroup, SemanticColors, semantic_colors};

static LIGHT_VARS: LazyLock<VarMap> = LazyLock::new(|| build_css_variables(Mode::Light));
static DARK_VARS: LazyLock<VarMap> = LazyLock::new(|| build_css_variables(Mode::Dark));

/// The cached variable map for `mode`.
#[must_use]
pub fn css_variables(mode: Mode) -> &'static VarMap {
    match mode {
        Mode::Light => &*LIGHT_VARS,
        Mode::Dark => &*DARK_VARS,
    }
}

/// Build the variable map for `mode` from the source tables.
///
/// Pure: every call returns an identical map. Prefer [`css_variables`],
/// which builds each map once.
#[must_use]
pub fn build_css_variables(mode: Mode) -> VarMap {
    let mut vars = VarMap::new();
    if mode == Mode::Light {
        vars.extend_from(&palette_variables());
    }
    vars.extend_from(&semantic_variables(semantic_colors(mode)));
    if mode == Mode::Light {
        vars.extend_from(&flatten_scalars("gradient", GRADIENTS));
    }
    tracing::debug!(%mode, vars = vars.len(), "built color variable map");
    vars
}

/// `<palette>-<shade>` for every shade of every palette.
#[must_use]
pub fn palette_variables() -> VarMap {
    let mut vars = VarMap::new();
    for palette in PALETTES {
        let shades = palette.iter().map(|(shade, color)| (shade.to_string(), color));
        vars.extend_from(&flatten_scalars(&palette.var_prefix(), shades));
    }
    vars
}

/// One variable per semantic role, grouped by role family.
#[must_use]
pub fn semantic_variables(colors: &SemanticColors) -> VarMap {
    let mut vars = VarMap::new();
    for group in RoleGroup::ALL {
        let roles = Role::in_group(group)
            .map(move |role| (to_kebab_case(role.name()), colors.get(role)));
        vars.extend_from(&flatten_scalars(group.var_prefix(), roles));
    }
    vars
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
