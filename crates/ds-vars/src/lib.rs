// SPDX-License-Identifier: MIT
//
// ds-vars — flat variable maps for ds-tokens.
//
// Token tables are nested: palette → shade → hex, scale → style → record.
// Anything that substitutes variables (a stylesheet, a theme provider, a
// template) wants one flat level keyed by kebab-case names instead. This
// crate is that flat level:
//
//   name.rs    → kebab-case conversion and `<prefix>-<key>-<attr>` naming
//   flatten.rs → one generic traversal from a nested table to a VarMap
//   map.rs     → VarMap, an insertion-ordered string map
//
// Everything here is pure. The same input table always flattens to the
// same bytes, in the same order.

pub mod flatten;
pub mod map;
pub mod name;

pub use flatten::{Attrs, flatten, flatten_scalars, flatten_with};
pub use map::VarMap;
pub use name::{to_kebab_case, var_name};
