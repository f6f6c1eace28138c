//! Semantic colors — role names that alias palette shades.
//!
//! Consumers style with roles (`primary`, `textPrimary`) instead of shade
//! numbers. Each role aliases exactly one palette constant, chosen here at
//! definition time. Light and dark share one struct type, so both variants
//! always cover the same roles.

use std::fmt;
use std::str::FromStr;

use ds_vars::{to_kebab_case, var_name};

use crate::error::ParseError;
use crate::hex::HexColor;
#[allow(clippy::wildcard_imports)]
use crate::palette::*;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Color scheme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Mode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Family a role belongs to. Determines its variable prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleGroup {
    /// Brand colors.
    System,
    /// Feedback colors (success/error/warning).
    Status,
    Text,
    Background,
    Border,
}

impl RoleGroup {
    pub const ALL: [Self; 5] = [
        Self::System,
        Self::Status,
        Self::Text,
        Self::Background,
        Self::Border,
    ];

    /// Prefix for this group's variables. Text, background and border role
    /// names already say what they color, so they get none.
    #[must_use]
    pub const fn var_prefix(self) -> &'static str {
        match self {
            Self::System | Self::Status => "color",
            Self::Text | Self::Background | Self::Border => "",
        }
    }
}

/// A semantic color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    PrimaryLight,
    Success,
    Error,
    Warning,
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextDisabled,
    BackgroundPrimary,
    BackgroundSecondary,
    BackgroundTertiary,
    BorderPrimary,
    BorderSecondary,
}

impl Role {
    /// Every role, in export order.
    pub const ALL: [Self; 14] = [
        Self::Primary,
        Self::PrimaryLight,
        Self::Success,
        Self::Error,
        Self::Warning,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::TextTertiary,
        Self::TextDisabled,
        Self::BackgroundPrimary,
        Self::BackgroundSecondary,
        Self::BackgroundTertiary,
        Self::BorderPrimary,
        Self::BorderSecondary,
    ];

    /// Token name (camelCase).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryLight => "primaryLight",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::TextPrimary => "textPrimary",
            Self::TextSecondary => "textSecondary",
            Self::TextTertiary => "textTertiary",
            Self::TextDisabled => "textDisabled",
            Self::BackgroundPrimary => "backgroundPrimary",
            Self::BackgroundSecondary => "backgroundSecondary",
            Self::BackgroundTertiary => "backgroundTertiary",
            Self::BorderPrimary => "borderPrimary",
            Self::BorderSecondary => "borderSecondary",
        }
    }

    #[must_use]
    pub const fn group(self) -> RoleGroup {
        match self {
            Self::Primary | Self::PrimaryLight => RoleGroup::System,
            Self::Success | Self::Error | Self::Warning => RoleGroup::Status,
            Self::TextPrimary | Self::TextSecondary | Self::TextTertiary | Self::TextDisabled => {
                RoleGroup::Text
            }
            Self::BackgroundPrimary | Self::BackgroundSecondary | Self::BackgroundTertiary => {
                RoleGroup::Background
            }
            Self::BorderPrimary | Self::BorderSecondary => RoleGroup::Border,
        }
    }

    /// Flat variable name (`color-primary-light`, `text-primary`).
    #[must_use]
    pub fn var_name(self) -> String {
        var_name(self.group().var_prefix(), &to_kebab_case(self.name()), None)
    }

    /// Roles of one group, in export order.
    pub fn in_group(group: RoleGroup) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |r| r.group() == group)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// SemanticColors
// ---------------------------------------------------------------------------

/// One complete semantic color set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticColors {
    // ── System ────────────────────────────────────────────────
    pub primary: HexColor,
    pub primary_light: HexColor,

    // ── Status ────────────────────────────────────────────────
    pub success: HexColor,
    pub error: HexColor,
    pub warning: HexColor,

    // ── Text ──────────────────────────────────────────────────
    pub text_primary: HexColor,
    pub text_secondary: HexColor,
    pub text_tertiary: HexColor,
    pub text_disabled: HexColor,

    // ── Background ────────────────────────────────────────────
    pub background_primary: HexColor,
    pub background_secondary: HexColor,
    pub background_tertiary: HexColor,

    // ── Border ────────────────────────────────────────────────
    pub border_primary: HexColor,
    pub border_secondary: HexColor,
}

impl SemanticColors {
    /// The color assigned to `role`.
    #[must_use]
    pub const fn get(&self, role: Role) -> &HexColor {
        match role {
            Role::Primary => &self.primary,
            Role::PrimaryLight => &self.primary_light,
            Role::Success => &self.success,
            Role::Error => &self.error,
            Role::Warning => &self.warning,
            Role::TextPrimary => &self.text_primary,
            Role::TextSecondary => &self.text_secondary,
            Role::TextTertiary => &self.text_tertiary,
            Role::TextDisabled => &self.text_disabled,
            Role::BackgroundPrimary => &self.background_primary,
            Role::BackgroundSecondary => &self.background_secondary,
            Role::BackgroundTertiary => &self.background_tertiary,
            Role::BorderPrimary => &self.border_primary,
            Role::BorderSecondary => &self.border_secondary,
        }
    }

    /// Iterate `(role, color)` in export order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &HexColor)> {
        Role::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SemanticColors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Role::ALL.len()))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.name(), color)?;
        }
        map.end()
    }
}

/// Light-mode semantic colors.
pub const LIGHT: SemanticColors = SemanticColors {
    primary: BLUE_60,
    primary_light: BLUE_40,

    success: GREEN_30,
    error: RED_30,
    warning: YELLOW_30,

    text_primary: GRAY_90,
    text_secondary: GRAY_60,
    text_tertiary: GRAY_50,
    text_disabled: GRAY_40,

    background_primary: GRAY_WHITE,
    background_secondary: GRAY_5,
    background_tertiary: GRAY_10,

    border_primary: GRAY_20,
    border_secondary: GRAY_10,
};

/// Dark-mode semantic colors. System and status colors match light mode.
pub const DARK: SemanticColors = SemanticColors {
    primary: BLUE_60,
    primary_light: BLUE_40,

    success: GREEN_30,
    error: RED_30,
    warning: YELLOW_30,

    text_primary: GRAY_WHITE,
    text_secondary: GRAY_10,
    text_tertiary: GRAY_30,
    text_disabled: GRAY_50,

    background_primary: GRAY_BLACK,
    background_secondary: GRAY_90,
    background_tertiary: GRAY_80,

    border_primary: GRAY_70,
    border_secondary: GRAY_80,
};

/// The semantic color set for `mode`.
#[must_use]
pub const fn semantic_colors(mode: Mode) -> &'static SemanticColors {
    match mode {
        Mode::Light => &LIGHT,
        Mode::Dark => &DARK,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
