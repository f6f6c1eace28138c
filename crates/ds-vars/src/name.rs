// SPDX-License-Identifier: MIT
//
// Variable naming.
//
// Token names in the tables are camelCase (`coolGray`, `textPrimary`) while
// variable names are kebab-case (`cool-gray`, `text-primary`). Style keys
// such as `body02_m` are not camelCase and pass through untouched apart from
// lowercasing, so the underscore survives into `body-body02_m-font-size`.

/// Convert a camelCase token name to kebab-case.
///
/// A dash is inserted before every uppercase ASCII letter that follows a
/// lowercase letter or digit; everything is lowercased. Names that are
/// already kebab-case are returned unchanged.
///
/// ```
/// use ds_vars::to_kebab_case;
///
/// assert_eq!(to_kebab_case("coolGray"), "cool-gray");
/// assert_eq!(to_kebab_case("backgroundSecondary"), "background-secondary");
/// assert_eq!(to_kebab_case("body02_m"), "body02_m");
/// ```
#[must_use]
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

/// Build a flat variable name from its parts.
///
/// Parts are joined with `-`. Empty parts are skipped, so an empty prefix
/// yields `<key>` and no attribute yields `<prefix>-<key>`.
///
/// ```
/// use ds_vars::var_name;
///
/// assert_eq!(var_name("blue", "60", None), "blue-60");
/// assert_eq!(var_name("web-headline", "headline01", Some("font-size")),
///            "web-headline-headline01-font-size");
/// assert_eq!(var_name("", "text-primary", None), "text-primary");
/// ```
#[must_use]
pub fn var_name(prefix: &str, key: &str, attr: Option<&str>) -> String {
    let mut out = String::with_capacity(prefix.len() + key.len() + 16);
    for part in [prefix, key, attr.unwrap_or("")] {
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(part);
    }
    out
}

// ─── Tests ──────────────────────────────────────────────────────────────────
