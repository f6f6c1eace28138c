//! # ds-color — color tokens
//!
//! The color half of the design system, as exported from the design tool.
//!
//! ```text
//! palette.rs   6 palettes, shade → HexColor   (BLUE_60 = #3A5CF3)
//!     │
//!     ▼
//! semantic.rs  role → palette constant        (primary = BLUE_60)
//!     │        light and dark variants
//!     ▼
//! vars.rs      flat kebab-case variable maps  (color-primary = #3A5CF3)
//! ```
//!
//! Every table is a `const`. Colors are built by a `const fn`, so a typo in
//! a hex literal fails the build instead of surfacing at runtime.

pub mod error;
pub mod gradient;
pub mod hex;
pub mod lookup;
pub mod palette;
pub mod semantic;
pub mod vars;

pub use error::ParseError;
pub use hex::HexColor;
pub use lookup::{ColorMatch, find_color};
pub use palette::{PALETTES, Palette, Shade, palette};
pub use semantic::{DARK, LIGHT, Mode, Role, RoleGroup, SemanticColors, semantic_colors};
pub use vars::{build_css_variables, css_variables};
