//! Desktop type scales, Korean font stack.

use crate::family::FontFamily;
use crate::scale::{Category, Device, Language, Scale};
use crate::style::TypographyStyle;
use crate::weight::FontWeight::{self, Bold, Extrabold, Medium, Regular, Semibold};

const fn ko(font_size: u16, line_height: u16, weight: FontWeight) -> TypographyStyle {
    TypographyStyle::new(font_size, line_height, weight, FontFamily::Korean)
}

const fn desktop(
    name: &'static str,
    category: Category,
    styles: &'static [(&'static str, TypographyStyle)],
) -> Scale {
    Scale::new(name, category, Device::Desktop, Language::Korean, styles)
}

const WEB_HEADLINE_STYLES: &[(&str, TypographyStyle)] = &[
    ("headline01", ko(48, 60, Semibold)),
    ("headline02", ko(36, 48, Semibold)),
    ("headline03", ko(28, 36, Semibold)),
];

/// Large web headlines.
pub const WEB_HEADLINE: Scale = desktop("web-headline", Category::WebHeadline, WEB_HEADLINE_STYLES);

const HEADLINE_STYLES: &[(&str, TypographyStyle)] = &[
    ("headline01", ko(24, 32, Bold)),
    ("headline02", ko(22, 30, Extrabold)),
    ("headline03", ko(20, 28, Bold)),
];

pub const HEADLINE: Scale = desktop("headline", Category::Headline, HEADLINE_STYLES);

const TITLE_STYLES: &[(&str, TypographyStyle)] = &[
    ("title01", ko(18, 24, Bold)),
    ("title02", ko(16, 22, Bold)),
    ("title03", ko(14, 20, Bold)),
    ("subtitle01", ko(14, 22, Semibold)),
    ("subtitle02", ko(12, 18, Semibold)),
];

pub const TITLE: Scale = desktop("title", Category::Title, TITLE_STYLES);

const BODY_STYLES: &[(&str, TypographyStyle)] = &[
    ("body01", ko(16, 24, Medium)),
    ("body02_m", ko(14, 22, Medium)),
    ("body03", ko(12, 18, Medium)),
];

/// Body copy, medium weight.
pub const BODY: Scale = desktop("body", Category::Body, BODY_STYLES);

const BODY_REGULAR_STYLES: &[(&str, TypographyStyle)] = &[
    ("body01", ko(16, 22, Regular)),
    ("body02_s", ko(14, 20, Regular)),
    ("body03", ko(12, 16, Regular)),
];

/// Body copy, regular weight. Still marked provisional in the design file.
pub const BODY_REGULAR: Scale = desktop("body-regular", Category::BodyRegular, BODY_REGULAR_STYLES);

const CAPTION_STYLES: &[(&str, TypographyStyle)] = &[
    ("caption01", ko(12, 14, Semibold)),
    ("caption02_m", ko(10, 12, Semibold)),
    ("caption02_s", ko(10, 12, Medium)),
    ("caption03", ko(8, 10, Semibold)),
];

pub const CAPTION: Scale = desktop("caption", Category::Caption, CAPTION_STYLES);
