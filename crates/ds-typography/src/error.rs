//! Errors for parsing user-supplied typography keys.

use thiserror::Error;

/// Failure to parse a typography token key from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown device `{0}` (expected `desktop` or `mobile`)")]
    UnknownDevice(String),

    #[error("unknown language `{0}` (expected `korean` or `english`)")]
    UnknownLanguage(String),

    #[error("unsupported font weight {0} (expected 400, 500, 600, 700 or 800)")]
    InvalidWeight(u16),
}
