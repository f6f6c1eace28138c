//! Type scales — named tables of styles.
//!
//! A scale groups the styles of one category (headline, title, body,
//! caption) for one device class and one language. The scale name doubles
//! as its variable prefix (`web-headline`, `mobile-title`).

use std::fmt;
use std::str::FromStr;

use crate::desktop::{BODY, BODY_REGULAR, CAPTION, HEADLINE, TITLE, WEB_HEADLINE};
use crate::english::{
    ENGLISH_BODY, ENGLISH_CAPTION, ENGLISH_HEADLINE, ENGLISH_TITLE, ENGLISH_WEB_HEADLINE,
};
use crate::error::ParseError;
use crate::mobile::{MOBILE_BODY, MOBILE_CAPTION, MOBILE_HEADLINE, MOBILE_TITLE};
use crate::style::TypographyStyle;

// ---------------------------------------------------------------------------
// Axes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Oversized marketing headlines, desktop web only.
    WebHeadline,
    Headline,
    Title,
    /// Body copy, medium weight.
    Body,
    /// Body copy, regular weight.
    BodyRegular,
    Caption,
}

/// Device class a scale is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Device {
    #[default]
    Desktop,
    Mobile,
}

impl Device {
    pub const ALL: [Self; 2] = [Self::Desktop, Self::Mobile];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desktop" | "web" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            _ => Err(ParseError::UnknownDevice(s.to_string())),
        }
    }
}

/// Script a scale's font stack is chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Korean,
    English,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Korean => "korean",
            Self::English => "english",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "korean" | "ko" => Ok(Self::Korean),
            "english" | "en" => Ok(Self::English),
            _ => Err(ParseError::UnknownLanguage(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Scale
// ---------------------------------------------------------------------------

/// A named, ordered table of styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    name: &'static str,
    category: Category,
    device: Device,
    language: Language,
    styles: &'static [(&'static str, TypographyStyle)],
}

impl Scale {
    pub(crate) const fn new(
        name: &'static str,
        category: Category,
        device: Device,
        language: Language,
        styles: &'static [(&'static str, TypographyStyle)],
    ) -> Self {
        Self {
            name,
            category,
            device,
            language,
            styles,
        }
    }

    /// Scale name, also its variable prefix.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn device(&self) -> Device {
        self.device
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Look up a style by name (`headline01`, `body02_m`).
    #[must_use]
    pub fn get(&self, style: &str) -> Option<&'static TypographyStyle> {
        self.styles
            .iter()
            .find(|(name, _)| *name == style)
            .map(|(_, style)| style)
    }

    /// Iterate `(style name, style)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static TypographyStyle)> {
        self.styles.iter().map(|(name, style)| (*name, style))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.styles.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// The mobile scale that replaces this one below the mobile breakpoint.
    ///
    /// Mobile scales, the plain `headline` scale and `body-regular` have
    /// none.
    #[must_use]
    pub const fn mobile_counterpart(&self) -> Option<&'static Self> {
        if matches!(self.device, Device::Mobile) {
            return None;
        }
        match self.category {
            Category::WebHeadline => Some(&MOBILE_HEADLINE),
            Category::Title => Some(&MOBILE_TITLE),
            Category::Body => Some(&MOBILE_BODY),
            Category::Caption => Some(&MOBILE_CAPTION),
            Category::Headline | Category::BodyRegular => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Every scale: desktop, then mobile, then English.
pub const SCALES: [&Scale; 15] = [
    &WEB_HEADLINE,
    &HEADLINE,
    &TITLE,
    &BODY,
    &BODY_REGULAR,
    &CAPTION,
    &MOBILE_HEADLINE,
    &MOBILE_TITLE,
    &MOBILE_BODY,
    &MOBILE_CAPTION,
    &ENGLISH_WEB_HEADLINE,
    &ENGLISH_HEADLINE,
    &ENGLISH_TITLE,
    &ENGLISH_BODY,
    &ENGLISH_CAPTION,
];

/// Look up a scale by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn scale(name: &str) -> Option<&'static Scale> {
    SCALES.into_iter().find(|s| s.name == name)
}

/// All scale names, in registry order.
pub fn scale_names() -> impl Iterator<Item = &'static str> {
    SCALES.into_iter().map(Scale::name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
