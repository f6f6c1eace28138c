//! Base color palettes — the raw shades every other color token aliases.
//!
//! Six palettes, each an ordered table from [`Shade`] to [`HexColor`].
//! Every shade is also exported as its own constant (`BLUE_60`, `GRAY_WHITE`)
//! so semantic tokens can alias entries by reference at definition time.

use std::fmt;
use std::str::FromStr;

use ds_vars::to_kebab_case;

use crate::error::ParseError;
use crate::hex::HexColor;

// ---------------------------------------------------------------------------
// Shade
// ---------------------------------------------------------------------------

/// A key within one palette.
///
/// Most palettes use a numeric step (`5`, `10`, … `90`); gray also has the
/// literal endpoints `white` and `black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    White,
    Step(u8),
    Black,
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => f.write_str("white"),
            Self::Step(n) => write!(f, "{n}"),
            Self::Black => f.write_str("black"),
        }
    }
}

impl FromStr for Shade {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            _ => s
                .parse::<u8>()
                .map(Self::Step)
                .map_err(|_| ParseError::InvalidShade(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A named, ordered shade table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    name: &'static str,
    shades: &'static [(Shade, HexColor)],
}

impl Palette {
    const fn new(name: &'static str, shades: &'static [(Shade, HexColor)]) -> Self {
        Self { name, shades }
    }

    /// Token name as exported by the design tool (camelCase, e.g. `coolGray`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Variable prefix (kebab-case, e.g. `cool-gray`).
    #[must_use]
    pub fn var_prefix(&self) -> String {
        to_kebab_case(self.name)
    }

    /// Look up one shade.
    #[must_use]
    pub fn get(&self, shade: Shade) -> Option<HexColor> {
        self.shades
            .iter()
            .find(|(s, _)| *s == shade)
            .map(|(_, color)| *color)
    }

    /// Iterate `(shade, color)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &'static HexColor)> {
        self.shades.iter().map(|(shade, color)| (*shade, color))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.shades.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Blue
// ---------------------------------------------------------------------------

pub const BLUE_5: HexColor = HexColor::from_hex("#F0F7FF");
pub const BLUE_10: HexColor = HexColor::from_hex("#DBEEFF");
pub const BLUE_20: HexColor = HexColor::from_hex("#BDDBFF");
pub const BLUE_30: HexColor = HexColor::from_hex("#93BEFF");
/// System color.
pub const BLUE_40: HexColor = HexColor::from_hex("#6DA5FA");
pub const BLUE_50: HexColor = HexColor::from_hex("#497CFF");
/// System color.
pub const BLUE_60: HexColor = HexColor::from_hex("#3A5CF3");
pub const BLUE_70: HexColor = HexColor::from_hex("#274AE1");
pub const BLUE_80: HexColor = HexColor::from_hex("#1530A6");
pub const BLUE_90: HexColor = HexColor::from_hex("#0B2184");

pub const BLUE: Palette = Palette::new(
    "blue",
    &[
        (Shade::Step(5), BLUE_5),
        (Shade::Step(10), BLUE_10),
        (Shade::Step(20), BLUE_20),
        (Shade::Step(30), BLUE_30),
        (Shade::Step(40), BLUE_40),
        (Shade::Step(50), BLUE_50),
        (Shade::Step(60), BLUE_60),
        (Shade::Step(70), BLUE_70),
        (Shade::Step(80), BLUE_80),
        (Shade::Step(90), BLUE_90),
    ],
);

// ---------------------------------------------------------------------------
// Gray
// ---------------------------------------------------------------------------

pub const GRAY_WHITE: HexColor = HexColor::from_hex("#FFFFFF");
pub const GRAY_5: HexColor = HexColor::from_hex("#F2F2F2");
pub const GRAY_10: HexColor = HexColor::from_hex("#E4E4E4");
pub const GRAY_20: HexColor = HexColor::from_hex("#D4D3D3");
pub const GRAY_30: HexColor = HexColor::from_hex("#C7C7C7");
pub const GRAY_40: HexColor = HexColor::from_hex("#ABABAB");
pub const GRAY_50: HexColor = HexColor::from_hex("#919191");
pub const GRAY_60: HexColor = HexColor::from_hex("#777777");
pub const GRAY_70: HexColor = HexColor::from_hex("#5F5F5F");
pub const GRAY_80: HexColor = HexColor::from_hex("#333333");
pub const GRAY_90: HexColor = HexColor::from_hex("#1C1C1C");
pub const GRAY_BLACK: HexColor = HexColor::from_hex("#000000");

pub const GRAY: Palette = Palette::new(
    "gray",
    &[
        (Shade::White, GRAY_WHITE),
        (Shade::Step(5), GRAY_5),
        (Shade::Step(10), GRAY_10),
        (Shade::Step(20), GRAY_20),
        (Shade::Step(30), GRAY_30),
        (Shade::Step(40), GRAY_40),
        (Shade::Step(50), GRAY_50),
        (Shade::Step(60), GRAY_60),
        (Shade::Step(70), GRAY_70),
        (Shade::Step(80), GRAY_80),
        (Shade::Step(90), GRAY_90),
        (Shade::Black, GRAY_BLACK),
    ],
);

// ---------------------------------------------------------------------------
// Red
// ---------------------------------------------------------------------------

pub const RED_5: HexColor = HexColor::from_hex("#FDD7DC");
pub const RED_10: HexColor = HexColor::from_hex("#F797A4");
pub const RED_20: HexColor = HexColor::from_hex("#F4677A");
/// Error color.
pub const RED_30: HexColor = HexColor::from_hex("#F03851");
pub const RED_40: HexColor = HexColor::from_hex("#E4112E");
pub const RED_50: HexColor = HexColor::from_hex("#B40E24");
pub const RED_60: HexColor = HexColor::from_hex("#850A1B");

pub const RED: Palette = Palette::new(
    "red",
    &[
        (Shade::Step(5), RED_5),
        (Shade::Step(10), RED_10),
        (Shade::Step(20), RED_20),
        (Shade::Step(30), RED_30),
        (Shade::Step(40), RED_40),
        (Shade::Step(50), RED_50),
        (Shade::Step(60), RED_60),
    ],
);

// ---------------------------------------------------------------------------
// Green
// ---------------------------------------------------------------------------

pub const GREEN_5: HexColor = HexColor::from_hex("#D3F3E0");
pub const GREEN_10: HexColor = HexColor::from_hex("#92E6B9");
pub const GREEN_20: HexColor = HexColor::from_hex("#15D66F");
/// Success color.
pub const GREEN_30: HexColor = HexColor::from_hex("#12B75F");
pub const GREEN_40: HexColor = HexColor::from_hex("#109C51");
pub const GREEN_50: HexColor = HexColor::from_hex("#0E723C");
pub const GREEN_60: HexColor = HexColor::from_hex("#084424");

pub const GREEN: Palette = Palette::new(
    "green",
    &[
        (Shade::Step(5), GREEN_5),
        (Shade::Step(10), GREEN_10),
        (Shade::Step(20), GREEN_20),
        (Shade::Step(30), GREEN_30),
        (Shade::Step(40), GREEN_40),
        (Shade::Step(50), GREEN_50),
        (Shade::Step(60), GREEN_60),
    ],
);

// ---------------------------------------------------------------------------
// Yellow
// ---------------------------------------------------------------------------

pub const YELLOW_5: HexColor = HexColor::from_hex("#FFE499");
pub const YELLOW_10: HexColor = HexColor::from_hex("#FFD666");
pub const YELLOW_20: HexColor = HexColor::from_hex("#FFC933");
pub const YELLOW_30: HexColor = HexColor::from_hex("#FFB300");
pub const YELLOW_40: HexColor = HexColor::from_hex("#EBA500");
pub const YELLOW_50: HexColor = HexColor::from_hex("#D69600");
pub const YELLOW_60: HexColor = HexColor::from_hex("#B27D00");

pub const YELLOW: Palette = Palette::new(
    "yellow",
    &[
        (Shade::Step(5), YELLOW_5),
        (Shade::Step(10), YELLOW_10),
        (Shade::Step(20), YELLOW_20),
        (Shade::Step(30), YELLOW_30),
        (Shade::Step(40), YELLOW_40),
        (Shade::Step(50), YELLOW_50),
        (Shade::Step(60), YELLOW_60),
    ],
);

// ---------------------------------------------------------------------------
// Cool gray
// ---------------------------------------------------------------------------

pub const COOL_GRAY_1: HexColor = HexColor::from_hex("#F8F8FA");
pub const COOL_GRAY_5: HexColor = HexColor::from_hex("#F6F6F9");
pub const COOL_GRAY_10: HexColor = HexColor::from_hex("#EDEEF2");
pub const COOL_GRAY_20: HexColor = HexColor::from_hex("#DDDFE5");
pub const COOL_GRAY_30: HexColor = HexColor::from_hex("#D2D4DD");
pub const COOL_GRAY_40: HexColor = HexColor::from_hex("#C7C9D5");
pub const COOL_GRAY_50: HexColor = HexColor::from_hex("#BBBECD");
pub const COOL_GRAY_60: HexColor = HexColor::from_hex("#B0B3C4");

pub const COOL_GRAY: Palette = Palette::new(
    "coolGray",
    &[
        (Shade::Step(1), COOL_GRAY_1),
        (Shade::Step(5), COOL_GRAY_5),
        (Shade::Step(10), COOL_GRAY_10),
        (Shade::Step(20), COOL_GRAY_20),
        (Shade::Step(30), COOL_GRAY_30),
        (Shade::Step(40), COOL_GRAY_40),
        (Shade::Step(50), COOL_GRAY_50),
        (Shade::Step(60), COOL_GRAY_60),
    ],
);

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// All palettes, in export order.
pub const PALETTES: [&Palette; 6] = [&BLUE, &GRAY, &RED, &GREEN, &YELLOW, &COOL_GRAY];

/// Look up a palette by token name (`coolGray`) or variable prefix
/// (`cool-gray`).
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn palette(name: &str) -> Option<&'static Palette> {
    PALETTES
        .into_iter()
        .find(|p| p.name == name || p.var_prefix() == name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
