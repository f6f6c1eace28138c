//! Presentation helpers — style records in the shape a styling layer wants.
//!
//! Pixel metrics become `"Npx"` strings, weight stays numeric, and the
//! family is the full font stack. The responsive form nests the mobile
//! presentation under the mobile breakpoint media query.

use crate::style::TypographyStyle;

/// Media query under which mobile overrides apply.
pub const MOBILE_BREAKPOINT: &str = "@media (max-width: 768px)";

/// A presentation-ready typography style.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct Presentation {
    pub font_size: String,
    pub line_height: String,
    pub font_weight: u16,
    pub font_family: &'static str,
}

/// Desktop presentation with a mobile override block.
///
/// Serializes flat: the desktop fields at the top level plus one
/// [`MOBILE_BREAKPOINT`] key holding the mobile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResponsivePresentation {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: Presentation,
    #[cfg_attr(feature = "serde", serde(rename = "@media (max-width: 768px)"))]
    pub mobile: Presentation,
}

/// Convert a style record to its presentation form.
#[must_use]
pub fn style_to_presentation(style: &TypographyStyle) -> Presentation {
    Presentation {
        font_size: px(style.font_size),
        line_height: px(style.line_height),
        font_weight: style.font_weight.value(),
        font_family: style.font_family.stack(),
    }
}

/// Desktop presentation plus the mobile presentation under
/// [`MOBILE_BREAKPOINT`].
#[must_use]
pub fn responsive_style_to_presentation(
    desktop: &TypographyStyle,
    mobile: &TypographyStyle,
) -> ResponsivePresentation {
    ResponsivePresentation {
        base: style_to_presentation(desktop),
        mobile: style_to_presentation(mobile),
    }
}

pub(crate) fn px(value: u16) -> String {
    format!("{value}px")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::WEB_HEADLINE;
    use crate::family::FontFamily;
    use crate::mobile::MOBILE_HEADLINE;
    use crate::weight::FontWeight;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn headline01() -> (&'static TypographyStyle, &'static TypographyStyle) {
        (
            WEB_HEADLINE.get("headline01").unwrap(),
            MOBILE_HEADLINE.get("headline01").unwrap(),
        )
    }

    #[test]
    fn presentation_fields() {
        let (desktop, _) = headline01();
        assert_eq!(
            style_to_presentation(desktop),
            Presentation {
                font_size: "48px".to_string(),
                line_height: "60px".to_string(),
                font_weight: 600,
                font_family: FontFamily::Korean.stack(),
            }
        );
    }

    #[test]
    fn responsive_is_two_presentations() {
        let (desktop, mobile) = headline01();
        let responsive = responsive_style_to_presentation(desktop, mobile);
        assert_eq!(responsive.base, style_to_presentation(desktop));
        assert_eq!(responsive.mobile, style_to_presentation(mobile));
        assert_eq!(responsive.mobile.font_size, "28px");
    }

    #[test]
    fn breakpoint_literal() {
        assert_eq!(MOBILE_BREAKPOINT, "@media (max-width: 768px)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn responsive_serializes_flat_with_media_key() {
        let (desktop, mobile) = headline01();
        let json = serde_json::to_value(responsive_style_to_presentation(desktop, mobile)).unwrap();
        assert_eq!(json["fontSize"], "48px");
        assert_eq!(json["fontWeight"], 600);
        assert_eq!(json[MOBILE_BREAKPOINT]["lineHeight"], "36px");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    proptest! {
        #[test]
        fn metrics_get_px_suffix(size in 1u16..200, line in 1u16..300, w in 0usize..5) {
            let weight = FontWeight::ALL[w];
            let style = TypographyStyle::new(size, line, weight, FontFamily::English);
            let p = style_to_presentation(&style);
            prop_assert_eq!(p.font_size, format!("{size}px"));
            prop_assert_eq!(p.line_height, format!("{line}px"));
            prop_assert_eq!(p.font_weight, weight.value());
            prop_assert_eq!(p.font_family, FontFamily::English.stack());
        }

        #[test]
        fn responsive_matches_parts(a in 1u16..100, b in 1u16..100) {
            let desktop = TypographyStyle::new(a, a + 4, FontWeight::Bold, FontFamily::Korean);
            let mobile = TypographyStyle::new(b, b + 2, FontWeight::Medium, FontFamily::Korean);
            let r = responsive_style_to_presentation(&desktop, &mobile);
            prop_assert_eq!(r.base, style_to_presentation(&desktop));
            prop_assert_eq!(r.mobile, style_to_presentation(&mobile));
        }
    }
}
