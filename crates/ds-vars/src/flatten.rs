// SPDX-License-Identifier: MIT
//
// Table flattening — nested token table → VarMap.
//
// Every flattened map in ds-tokens is produced by the same traversal:
//
//   for (key, entry) in table:
//       for (attr, value) in attrs(entry):
//           map[name(prefix, key, attr)] = value
//
// A scalar table (palette shades, font stacks) has one attribute per entry
// with no suffix. A record table (typography styles) has several suffixed
// attributes per entry. The traversal never inspects entries itself; the
// caller's `attrs` function decides what an entry stringifies to.

use std::fmt::Display;

use crate::map::VarMap;
use crate::name::var_name;

/// The flattened attributes of one table entry: optional name suffix and
/// stringified value.
pub type Attrs = Vec<(Option<&'static str>, String)>;

/// Flatten `table` under `prefix`, naming each variable with `name`.
///
/// Keys may be borrowed or computed (`&str`, `String`). Entries are visited
/// in iteration order and the output preserves it.
/// Later entries overwrite earlier ones on a name collision.
pub fn flatten_with<'a, K, T, I, N, A>(prefix: &str, table: I, name: N, attrs: A) -> VarMap
where
    K: AsRef<str>,
    T: ?Sized + 'a,
    I: IntoIterator<Item = (K, &'a T)>,
    N: Fn(&str, &str, Option<&str>) -> String,
    A: Fn(&T) -> Attrs,
{
    let mut map = VarMap::new();
    let mut entries = 0usize;
    for (key, entry) in table {
        for (attr, value) in attrs(entry) {
            map.insert(name(prefix, key.as_ref(), attr), value);
        }
        entries += 1;
    }
    tracing::trace!(prefix, entries, vars = map.len(), "flattened token table");
    map
}

/// Flatten `table` under `prefix` with the standard kebab naming
/// (`<prefix>-<key>[-<attr>]`).
///
/// ```
/// use ds_vars::flatten;
///
/// let sizes = [("sm", &12u16), ("lg", &20u16)];
/// let map = flatten("space", sizes, |px: &u16| {
///     vec![(None, format!("{px}px"))]
/// });
/// assert_eq!(map.get("space-lg"), Some("20px"));
/// ```
pub fn flatten<'a, K, T, I, A>(prefix: &str, table: I, attrs: A) -> VarMap
where
    K: AsRef<str>,
    T: ?Sized + 'a,
    I: IntoIterator<Item = (K, &'a T)>,
    A: Fn(&T) -> Attrs,
{
    flatten_with(prefix, table, var_name, attrs)
}

/// Flatten a table of scalars: one `<prefix>-<key>` variable per entry,
/// valued by the scalar's `Display` output.
pub fn flatten_scalars<'a, K, T, I>(prefix: &str, table: I) -> VarMap
where
    K: AsRef<str>,
    T: Display + ?Sized + 'a,
    I: IntoIterator<Item = (K, &'a T)>,
{
    flatten(prefix, table, |value: &T| vec![(None, value.to_string())])
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    struct Record {
        size: u16,
        family: &'static str,
    }

    fn record_attrs(r: &Record) -> Attrs {
        vec![
            (Some("font-size"), format!("{}px", r.size)),
            (Some("font-family"), r.family.to_string()),
        ]
    }

    #[test]
    fn scalars_use_prefix_and_key() {
        let table = [("5", "#F0F7FF"), ("10", "#DBEEFF")];
        let map = flatten_scalars("blue", table);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("blue-5", "#F0F7FF"), ("blue-10", "#DBEEFF")]);
    }

    #[test]
    fn records_expand_per_attribute() {
        let a = Record { size: 48, family: "Pretendard" };
        let b = Record { size: 36, family: "Pretendard" };
        let map = flatten("web-headline", [("h1", &a), ("h2", &b)], record_attrs);
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(
            keys,
            vec![
                "web-headline-h1-font-size",
                "web-headline-h1-font-family",
                "web-headline-h2-font-size",
                "web-headline-h2-font-family",
            ]
        );
        assert_eq!(map.get("web-headline-h2-font-size"), Some("36px"));
    }

    #[test]
    fn custom_naming() {
        let table = [("primary", "#3A5CF3")];
        let map = flatten_with("color", table, |p, k, _| format!("{p}.{k}"), |v: &str| {
            vec![(None, v.to_string())]
        });
        assert_eq!(map.get("color.primary"), Some("#3A5CF3"));
    }

    #[test]
    fn empty_table_is_empty_map() {
        let table: [(&str, &u8); 0] = [];
        assert!(flatten_scalars("x", table).is_empty());
    }

    #[test]
    fn input_untouched_and_repeatable() {
        let a = Record { size: 12, family: "SUIT" };
        let first = flatten("caption", [("c1", &a)], record_attrs);
        let second = flatten("caption", [("c1", &a)], record_attrs);
        assert_eq!(first, second);
        assert_eq!(a.size, 12);
    }

    #[traced_test]
    #[test]
    fn flattening_is_traced() {
        let _ = flatten_scalars("gray", [("white", "#FFFFFF")]);
        assert!(logs_contain("flattened token table"));
    }

    proptest! {
        #[test]
        fn deterministic(values in proptest::collection::vec("[0-9A-F]{6}", 0..30)) {
            let keys: Vec<String> = (0..values.len()).map(|i| i.to_string()).collect();
            let table: Vec<(&str, &String)> =
                keys.iter().map(String::as_str).zip(values.iter()).collect();
            let a = flatten_scalars("p", table.iter().copied());
            let b = flatten_scalars("p", table.iter().copied());
            prop_assert_eq!(a.len(), values.len());
            prop_assert_eq!(a, b);
        }
    }
}
