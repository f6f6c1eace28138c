//! # ds-typography — typography tokens
//!
//! Type scales exported from the design tool, split three ways:
//!
//! - **[`desktop`]** — web headline, headline, title, body, body-regular and
//!   caption scales in the Korean (Pretendard) stack
//! - **[`mobile`]** — smaller headline, title, body and caption scales for
//!   viewports under 768px
//! - **[`english`]** — the desktop metrics in the SUIT stack
//!
//! Each style is a [`TypographyStyle`] record. [`vars`] flattens the desktop
//! and mobile scales into kebab-case variable maps; [`present`] turns a
//! record into the object shape a styling layer consumes.

pub mod desktop;
pub mod english;
pub mod error;
pub mod family;
pub mod mobile;
pub mod present;
pub mod scale;
pub mod style;
pub mod vars;
pub mod weight;

pub use error::ParseError;
pub use family::FontFamily;
pub use present::{
    MOBILE_BREAKPOINT, Presentation, ResponsivePresentation, responsive_style_to_presentation,
    style_to_presentation,
};
pub use scale::{Category, Device, Language, SCALES, Scale, scale, scale_names};
pub use style::TypographyStyle;
pub use vars::{build_css_variables, css_variables};
pub use weight::FontWeight;
