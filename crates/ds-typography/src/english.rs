//! English type scales, SUIT font stack.
//!
//! Same sizes and weights as the Korean desktop scales with the font stack
//! swapped. There is no English `body-regular` scale, and the English
//! title and caption scales carry fewer styles.

use crate::family::FontFamily;
use crate::scale::{Category, Device, Language, Scale};
use crate::style::TypographyStyle;
use crate::weight::FontWeight::{self, Bold, Extrabold, Medium, Semibold};

const fn en(font_size: u16, line_height: u16, weight: FontWeight) -> TypographyStyle {
    TypographyStyle::new(font_size, line_height, weight, FontFamily::English)
}

const fn english(
    name: &'static str,
    category: Category,
    styles: &'static [(&'static str, TypographyStyle)],
) -> Scale {
    Scale::new(name, category, Device::Desktop, Language::English, styles)
}

const ENGLISH_WEB_HEADLINE_STYLES: &[(&str, TypographyStyle)] = &[
    ("headline01", en(48, 60, Semibold)),
    ("headline02", en(36, 48, Semibold)),
    ("headline03", en(28, 36, Semibold)),
];

pub const ENGLISH_WEB_HEADLINE: Scale = english(
    "english-web-headline",
    Category::WebHeadline,
    ENGLISH_WEB_HEADLINE_STYLES,
);

const ENGLISH_HEADLINE_STYLES: &[(&str, TypographyStyle)] = &[
    ("headline01", en(24, 32, Bold)),
    ("headline02", en(22, 30, Extrabold)),
    ("headline03", en(20, 28, Bold)),
];

pub const ENGLISH_HEADLINE: Scale = english(
    "english-headline",
    Category::Headline,
    ENGLISH_HEADLINE_STYLES,
);

const ENGLISH_TITLE_STYLES: &[(&str, TypographyStyle)] = &[
    ("title01", en(18, 24, Bold)),
    ("title02", en(16, 22, Bold)),
    ("title03", en(14, 20, Bold)),
];

pub const ENGLISH_TITLE: Scale = english("english-title", Category::Title, ENGLISH_TITLE_STYLES);

const ENGLISH_BODY_STYLES: &[(&str, TypographyStyle)] = &[
    ("body01", en(16, 24, Medium)),
    ("body02", en(14, 22, Medium)),
    ("body03", en(12, 18, Medium)),
];

pub const ENGLISH_BODY: Scale = english("english-body", Category::Body, ENGLISH_BODY_STYLES);

const ENGLISH_CAPTION_STYLES: &[(&str, TypographyStyle)] = &[
    ("caption01", en(12, 14, Semibold)),
    ("caption02", en(10, 12, Semibold)),
];

pub const ENGLISH_CAPTION: Scale = english(
    "english-caption",
    Category::Caption,
    ENGLISH_CAPTION_STYLES,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::{BODY, CAPTION, HEADLINE, TITLE, WEB_HEADLINE};

    /// Each English style must match the Korean style of the same name,
    /// or for renamed styles the Korean style in the same position, with
    /// only the font stack swapped.
    #[test]
    fn english_mirrors_korean_metrics() {
        let pairs = [
            (&ENGLISH_WEB_HEADLINE, &WEB_HEADLINE),
            (&ENGLISH_HEADLINE, &HEADLINE),
            (&ENGLISH_TITLE, &TITLE),
            (&ENGLISH_BODY, &BODY),
            (&ENGLISH_CAPTION, &CAPTION),
        ];
        for (en_scale, ko_scale) in pairs {
            for ((en_name, en_style), (_, ko_style)) in en_scale.iter().zip(ko_scale.iter()) {
                assert_eq!(
                    *en_style,
                    ko_style.with_family(FontFamily::English),
                    "{}.{en_name}",
                    en_scale.name()
                );
            }
        }
    }
}
