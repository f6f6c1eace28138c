//! `HexColor` — an sRGB color written as a `#RRGGBB` literal.
//!
//! Token tables build every color with the `const fn` [`HexColor::from_hex`],
//! so a malformed literal is a compile error rather than a runtime failure.
//! [`FromStr`] exists for user input (CLI arguments) only.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// An opaque 8-bit sRGB color.
///
/// `Display` renders `#RRGGBB` with uppercase digits, matching how the
/// design tool exports colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Create a color from 8-bit channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `#RRGGBB` literal.
    ///
    /// Intended for `const` items, where a bad literal fails compilation.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not exactly `#` followed by six hex digits.
    #[must_use]
    pub const fn from_hex(s: &str) -> Self {
        let bytes = s.as_bytes();
        assert!(
            bytes.len() == 7 && bytes[0] == b'#',
            "hex color literal must be #RRGGBB"
        );
        Self {
            r: const_byte(bytes[1], bytes[2]),
            g: const_byte(bytes[3], bytes[4]),
            b: const_byte(bytes[5], bytes[6]),
        }
    }

    /// The `(r, g, b)` channels.
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({self})")
    }
}

impl FromStr for HexColor {
    type Err = ParseError;

    /// Parse `#RGB` or `#RRGGBB`, with or without the `#`, any digit case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s.trim()).ok_or_else(|| ParseError::InvalidHex(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<HexColor> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(HexColor::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(bytes[0], bytes[1])?;
            let g = parse_hex_byte(bytes[2], bytes[3])?;
            let b = parse_hex_byte(bytes[4], bytes[5])?;
            Some(HexColor::rgb(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
const fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    match (parse_hex_digit(hi), parse_hex_digit(lo)) {
        (Some(hi), Some(lo)) => Some(hi << 4 | lo),
        _ => None,
    }
}

const fn const_byte(hi: u8, lo: u8) -> u8 {
    match parse_hex_byte(hi, lo) {
        Some(byte) => byte,
        None => panic!("hex color literal has a non-hex digit"),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
