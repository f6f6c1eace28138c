//! Font weights. The design system uses exactly five.

use std::fmt;

use crate::error::ParseError;

/// A font weight from the design system's weight scale.
///
/// Closed on purpose: a style can only carry one of these five values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
    Extrabold,
}

impl FontWeight {
    pub const ALL: [Self; 5] = [
        Self::Regular,
        Self::Medium,
        Self::Semibold,
        Self::Bold,
        Self::Extrabold,
    ];

    /// Numeric CSS weight.
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
            Self::Extrabold => 800,
        }
    }

    /// Token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Medium => "medium",
            Self::Semibold => "semibold",
            Self::Bold => "bold",
            Self::Extrabold => "extrabold",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|w| w.value() == value)
            .ok_or(ParseError::InvalidWeight(value))
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_ascend_by_100() {
        let values: Vec<u16> = FontWeight::ALL.iter().map(|w| w.value()).collect();
        assert_eq!(values, vec![400, 500, 600, 700, 800]);
    }

    #[test]
    fn try_from_known_and_unknown() {
        assert_eq!(FontWeight::try_from(600), Ok(FontWeight::Semibold));
        assert_eq!(FontWeight::try_from(300), Err(ParseError::InvalidWeight(300)));
        assert_eq!(FontWeight::try_from(650), Err(ParseError::InvalidWeight(650)));
    }

    #[test]
    fn display_is_numeric() {
        assert_eq!(FontWeight::Extrabold.to_string(), "800");
        assert_eq!(u16::from(FontWeight::Medium), 500);
    }

    #[test]
    fn ordering_matches_value() {
        assert!(FontWeight::Regular < FontWeight::Bold);
    }
}
