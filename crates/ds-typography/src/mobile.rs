//! Mobile type scales. Smaller than their desktop counterparts; applied
//! below the 768px breakpoint.

use crate::family::FontFamily;
use crate::scale::{Category, Device, Language, Scale};
use crate::style::TypographyStyle;
use crate::weight::FontWeight::{self, Bold, Medium, Semibold};

const fn ko(font_size: u16, line_height: u16, weight: FontWeight) -> TypographyStyle {
    TypographyStyle::new(font_size, line_height, weight, FontFamily::Korean)
}

const fn mobile(
    name: &'static str,
    category: Category,
    styles: &'static [(&'static str, TypographyStyle)],
) -> Scale {
    Scale::new(name, category, Device::Mobile, Language::Korean, styles)
}

const MOBILE_HEADLINE_STYLES: &[(&str, TypographyStyle)] = &[
    ("headline01", ko(28, 36, Semibold)),
    ("headline02", ko(24, 32, Semibold)),
    ("headline03", ko(20, 28, Semibold)),
];

/// Mobile version of the web headlines.
pub const MOBILE_HEADLINE: Scale = mobile(
    "mobile-headline",
    Category::WebHeadline,
    MOBILE_HEADLINE_STYLES,
);

const MOBILE_TITLE_STYLES: &[(&str, TypographyStyle)] = &[
    ("title01", ko(16, 22, Bold)),
    ("title02", ko(14, 20, Bold)),
    ("subtitle01", ko(12, 18, Semibold)),
];

pub const MOBILE_TITLE: Scale = mobile("mobile-title", Category::Title, MOBILE_TITLE_STYLES);

const MOBILE_BODY_STYLES: &[(&str, TypographyStyle)] = &[
    ("body01", ko(14, 22, Medium)),
    ("body02", ko(12, 18, Medium)),
];

pub const MOBILE_BODY: Scale = mobile("mobile-body", Category::Body, MOBILE_BODY_STYLES);

const MOBILE_CAPTION_STYLES: &[(&str, TypographyStyle)] = &[
    ("caption01", ko(10, 12, Semibold)),
    ("caption02", ko(8, 10, Medium)),
];

pub const MOBILE_CAPTION: Scale = mobile(
    "mobile-caption",
    Category::Caption,
    MOBILE_CAPTION_STYLES,
);
