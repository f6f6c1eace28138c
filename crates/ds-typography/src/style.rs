//! The typography style record.

use crate::family::FontFamily;
use crate::weight::FontWeight;

/// One typographic style: size and line height in px, weight, font stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypographyStyle {
    pub font_size: u16,
    pub line_height: u16,
    pub font_weight: FontWeight,
    pub font_family: FontFamily,
}

impl TypographyStyle {
    #[must_use]
    pub const fn new(
        font_size: u16,
        line_height: u16,
        font_weight: FontWeight,
        font_family: FontFamily,
    ) -> Self {
        Self {
            font_size,
            line_height,
            font_weight,
            font_family,
        }
    }

    /// The same style set in another font stack.
    #[must_use]
    pub const fn with_family(self, font_family: FontFamily) -> Self {
        Self {
            font_family,
            ..self
        }
    }
}
