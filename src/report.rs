// SPDX-License-Identifier: MIT
//
// Rendering of token tables for the terminal.
//
// Every function returns the full output as a String so the command
// handlers stay a lookup plus one render call, and the exact output can
// be asserted in tests. Text output is two aligned columns; JSON output is
// a pretty-printed object in table order.

use std::fmt::Write;

use ds_color::{ColorMatch, HexColor, Palette};
use ds_typography::SCALES;
use ds_vars::VarMap;
use regex::Regex;

use crate::cli::Format;

/// Render a variable map, keeping only names that match `filter`.
pub fn vars(map: &VarMap, filter: Option<&Regex>, format: Format) -> anyhow::Result<String> {
    let map = match filter {
        Some(re) => map.filtered(|name| re.is_match(name)),
        None => map.clone(),
    };
    tracing::debug!(vars = map.len(), filtered = filter.is_some(), "rendering variable map");
    match format {
        Format::Text => Ok(columns(&map.iter().collect::<Vec<_>>())),
        Format::Json => Ok(serde_json::to_string_pretty(&map)? + "\n"),
    }
}

/// Render one palette as `shade  hex` rows.
pub fn palette(palette: &Palette, format: Format) -> anyhow::Result<String> {
    let shades: VarMap = palette
        .iter()
        .map(|(shade, color)| (shade.to_string(), color.to_string()))
        .collect();
    vars(&shades, None, format)
}

/// Render the tokens found for `color`.
pub fn matches(color: HexColor, found: &[ColorMatch]) -> String {
    if found.is_empty() {
        return format!("no tokens use {color}\n");
    }
    let mut out = String::new();
    for m in found {
        let _ = writeln!(out, "{m}");
    }
    out
}

/// Render the scale registry: name, device, language, style count.
pub fn scales() -> String {
    let rows: Vec<(String, String)> = SCALES
        .iter()
        .map(|s| {
            let styles: Vec<&str> = s.iter().map(|(name, _)| name).collect();
            let detail = format!("{:<8} {:<8} {}", s.device(), s.language(), styles.join(" "));
            (s.name().to_string(), detail)
        })
        .collect();
    let rows: Vec<(&str, &str)> = rows.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    columns(&rows)
}

/// Two columns, the first padded to its widest entry.
fn columns(rows: &[(&str, &str)]) -> String {
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in rows {
        let _ = writeln!(out, "{key:<width$}  {value}");
    }
    out
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ds_color::{Mode, css_variables, find_color};
    use pretty_assertions::assert_eq;

    #[test]
    fn text_columns_are_aligned() {
        let map: VarMap = [("a", "1"), ("long-name", "2")].into_iter().collect();
        let out = vars(&map, None, Format::Text).unwrap();
        assert_eq!(out, "a          1\nlong-name  2\n");
    }

    #[test]
    fn empty_map_renders_nothing() {
        assert_eq!(vars(&VarMap::new(), None, Format::Text).unwrap(), "");
        assert_eq!(vars(&VarMap::new(), None, Format::Json).unwrap(), "{}\n");
    }

    #[test]
    fn filter_keeps_matching_names() {
        let re = Regex::new("^text-").unwrap();
        let out = vars(css_variables(Mode::Light), Some(&re), Format::Text).unwrap();
        let names: Vec<&str> = out.lines().filter_map(|l| l.split_whitespace().next()).collect();
        assert_eq!(
            names,
            vec!["text-primary", "text-secondary", "text-tertiary", "text-disabled"]
        );
    }

    #[test]
    fn json_keeps_table_order() {
        let out = vars(css_variables(Mode::Dark), None, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 14);
        assert!(out.find("color-primary").unwrap() < out.find("text-primary").unwrap());
    }

    #[test]
    fn palette_rows() {
        let out = palette(ds_color::palette("gray").unwrap(), Format::Text).unwrap();
        let first = out.lines().next().unwrap();
        assert_eq!(first, "white  #FFFFFF");
        assert_eq!(out.lines().count(), 12);
        assert!(out.ends_with("black  #000000\n"));
    }

    #[test]
    fn palette_json() {
        let out = palette(ds_color::palette("blue").unwrap(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["60"], ds_color::palette::BLUE_60.to_string());
    }

    #[test]
    fn match_listing() {
        let color: HexColor = "#3A5CF3".parse().unwrap();
        assert_eq!(
            matches(color, &find_color(color)),
            "blue[60]\nlight.primary\ndark.primary\n"
        );
        let unused: HexColor = "#123456".parse().unwrap();
        assert_eq!(matches(unused, &find_color(unused)), "no tokens use #123456\n");
    }

    #[test]
    fn scale_listing_covers_registry() {
        let out = scales();
        assert_eq!(out.lines().count(), SCALES.len());
        let web = out.lines().next().unwrap();
        assert!(web.starts_with("web-headline  "), "{web}");
        assert!(web.contains("desktop"));
        assert!(web.ends_with("headline01 headline02 headline03"));
        assert!(out.contains("english-caption"));
    }
}
