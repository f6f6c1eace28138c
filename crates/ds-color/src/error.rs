//! Errors for parsing user-supplied color names and values.
//!
//! The token tables themselves cannot fail; these only surface when a
//! consumer turns a string into a typed token key.

use thiserror::Error;

/// Failure to parse a color token key or value from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid hex color `{0}` (expected #RGB or #RRGGBB)")]
    InvalidHex(String),

    #[error("invalid shade `{0}` (expected a number, `white` or `black`)")]
    InvalidShade(String),

    #[error("unknown color mode `{0}` (expected `light` or `dark`)")]
    UnknownMode(String),
}
