//! Font family stacks.
//!
//! Korean text leads with Pretendard, Latin text with SUIT. The default
//! stack puts Pretendard first and SUIT second so mixed text picks up both.

use std::fmt;

/// Pretendard stack for Korean text.
pub const KOREAN: &str = "Pretendard, -apple-system, BlinkMacSystemFont, system-ui, Roboto, \
'Helvetica Neue', 'Segoe UI', 'Apple SD Gothic Neo', 'Noto Sans KR', 'Malgun Gothic', \
'Apple Color Emoji', 'Segoe UI Emoji', 'Segoe UI Symbol', sans-serif";

/// SUIT stack for English text and numerals.
pub const ENGLISH: &str = "SUIT Variable, -apple-system, BlinkMacSystemFont, system-ui, Roboto, \
'Helvetica Neue', 'Segoe UI', 'Apple Color Emoji', 'Segoe UI Emoji', 'Segoe UI Symbol', sans-serif";

/// Korean-first stack with SUIT as the second choice.
pub const DEFAULT: &str = "Pretendard, SUIT Variable, -apple-system, BlinkMacSystemFont, \
system-ui, Roboto, 'Helvetica Neue', 'Segoe UI', 'Apple SD Gothic Neo', 'Noto Sans KR', \
'Malgun Gothic', 'Apple Color Emoji', 'Segoe UI Emoji', 'Segoe UI Symbol', sans-serif";

/// A named font stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Korean,
    English,
    Default,
}

impl FontFamily {
    pub const ALL: [Self; 3] = [Self::Korean, Self::English, Self::Default];

    /// Token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Korean => "korean",
            Self::English => "english",
            Self::Default => "default",
        }
    }

    /// The full font stack.
    #[must_use]
    pub const fn stack(self) -> &'static str {
        match self {
            Self::Korean => KOREAN,
            Self::English => ENGLISH,
            Self::Default => DEFAULT,
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stack())
    }
}
