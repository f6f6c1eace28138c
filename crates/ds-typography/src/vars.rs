//! Typography variable maps.
//!
//! Desktop carries the font stacks, the weight scale and the six Korean
//! desktop scales. Mobile carries the four mobile scales. English scales
//! are table-only and have no variables.
//!
//! Each style flattens to four variables:
//!
//! ```text
//! <scale>-<style>-font-size     "48px"
//! <scale>-<style>-line-height   "60px"
//! <scale>-<style>-font-weight   "600"
//! <scale>-<style>-font-family   "Pretendard, …"
//! ```

use std::sync::LazyLock;

use ds_vars::{Attrs, VarMap, flatten, flatten_scalars};

use crate::desktop::{BODY, BODY_REGULAR, CAPTION, HEADLINE, TITLE, WEB_HEADLINE};
use crate::family::FontFamily;
use crate::mobile::{MOBILE_BODY, MOBILE_CAPTION, MOBILE_HEADLINE, MOBILE_TITLE};
use crate::present::px;
use crate::scale::{Device, Scale};
use crate::style::TypographyStyle;
use crate::weight::FontWeight;

/// Scales flattened into the desktop map, in order.
pub const DESKTOP_VAR_SCALES: [&Scale; 6] =
    [&WEB_HEADLINE, &HEADLINE, &TITLE, &BODY, &BODY_REGULAR, &CAPTION];

/// Scales flattened into the mobile map, in order.
pub const MOBILE_VAR_SCALES: [&Scale; 4] =
    [&MOBILE_HEADLINE, &MOBILE_TITLE, &MOBILE_BODY, &MOBILE_CAPTION];

static DESKTOP_VARS: LazyLock<VarMap> = LazyLock::new(|| build_css_variables(Device::Desktop));
static MOBILE_VARS: LazyLock<VarMap> = LazyLock::new(|| build_css_variables(Device::Mobile));

/// The cached variable map for `device`.
#[must_use]
pub fn css_variables(device: Device) -> &'static VarMap {
    match device {
        Device::Desktop => &*DESKTOP_VARS,
        Device::Mobile => &*MOBILE_VARS,
    }
}

/// Build the variable map for `device` from the source tables.
///
/// Pure: every call returns an identical map.
#[must_use]
pub fn build_css_variables(device: Device) -> VarMap {
    let mut vars = VarMap::new();
    let scales: &[&Scale] = match device {
        Device::Desktop => {
            let families = FontFamily::ALL.map(|f| (f.name(), f.stack()));
            vars.extend_from(&flatten_scalars("font-family", families));
            let weights = FontWeight::ALL.map(|w| (w.name(), w.value()));
            vars.extend_from(&flatten_scalars(
                "font-weight",
                weights.iter().map(|(name, value)| (*name, value)),
            ));
            &DESKTOP_VAR_SCALES
        }
        Device::Mobile => &MOBILE_VAR_SCALES,
    };
    for scale in scales {
        vars.extend_from(&scale_variables(scale));
    }
    tracing::debug!(%device, vars = vars.len(), "built typography variable map");
    vars
}

/// The four variables of every style in `scale`, prefixed by the scale name.
#[must_use]
pub fn scale_variables(scale: &Scale) -> VarMap {
    flatten(scale.name(), scale.iter(), style_attrs)
}

/// Flattened attributes of one style record.
#[must_use]
pub fn style_attrs(style: &TypographyStyle) -> Attrs {
    vec![
        (Some("font-size"), px(style.font_size)),
        (Some("line-height"), px(style.line_height)),
        (Some("font-weight"), style.font_weight.value().to_string()),
        (Some("font-family"), style.font_family.stack().to_string()),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::KOREAN;
    use pretty_assertions::assert_eq;

    #[test]
    fn web_headline_01_entries() {
        let vars = scale_variables(&WEB_HEADLINE);
        let entries: Vec<(&str, &str)> = vars
            .iter()
            .filter(|(k, _)| k.starts_with("web-headline-headline01-"))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("web-headline-headline01-font-size", "48px"),
                ("web-headline-headline01-line-height", "60px"),
                ("web-headline-headline01-font-weight", "600"),
                ("web-headline-headline01-font-family", KOREAN),
            ]
        );
    }

    #[test]
    fn desktop_map_size() {
        // 3 families + 5 weights + 4 vars × (3 + 3 + 5 + 3 + 3 + 4) styles.
        assert_eq!(css_variables(Device::Desktop).len(), 3 + 5 + 4 * 21);
    }

    #[test]
    fn mobile_map_size() {
        // 4 vars × (3 + 3 + 2 + 2) styles.
        assert_eq!(css_variables(Device::Mobile).len(), 4 * 10);
    }

    #[test]
    fn family_and_weight_scalars() {
        let desktop = css_variables(Device::Desktop);
        assert_eq!(desktop.get("font-family-korean"), Some(KOREAN));
        assert!(desktop.get("font-family-default").unwrap().starts_with("Pretendard, SUIT"));
        assert_eq!(desktop.get("font-weight-regular"), Some("400"));
        assert_eq!(desktop.get("font-weight-extrabold"), Some("800"));
    }

    #[test]
    fn underscored_style_names_survive() {
        let desktop = css_variables(Device::Desktop);
        assert_eq!(desktop.get("body-body02_m-font-size"), Some("14px"));
        assert_eq!(desktop.get("body-regular-body02_s-line-height"), Some("20px"));
        assert_eq!(desktop.get("caption-caption02_s-font-weight"), Some("500"));
    }

    #[test]
    fn body_and_body_regular_do_not_collide() {
        let desktop = css_variables(Device::Desktop);
        assert_eq!(desktop.get("body-body01-line-height"), Some("24px"));
        assert_eq!(desktop.get("body-regular-body01-line-height"), Some("22px"));
    }

    #[test]
    fn mobile_keys() {
        let mobile = css_variables(Device::Mobile);
        assert_eq!(mobile.get("mobile-headline-headline01-font-size"), Some("28px"));
        assert_eq!(mobile.get("mobile-caption-caption02-font-weight"), Some("500"));
        assert!(mobile.keys().all(|k| k.starts_with("mobile-")));
    }

    #[test]
    fn no_key_collisions() {
        let styles: usize = DESKTOP_VAR_SCALES.iter().map(|s| s.len()).sum();
        let sources = FontFamily::ALL.len() + FontWeight::ALL.len() + 4 * styles;
        assert_eq!(css_variables(Device::Desktop).len(), sources);
    }

    #[test]
    fn english_scales_have_no_variables() {
        for device in Device::ALL {
            assert!(!css_variables(device).keys().any(|k| k.starts_with("english-")));
        }
    }

    #[test]
    fn rebuild_is_identical() {
        for device in Device::ALL {
            let a = build_css_variables(device);
            let b = build_css_variables(device);
            assert_eq!(format!("{a:?}"), format!("{b:?}"));
            assert_eq!(&a, css_variables(device));
        }
    }
}
