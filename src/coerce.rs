//! Numeric and list coercion of captured substrings.
//!
//! Coercion never fails. Integers default to `0` when the capture holds no
//! leading number (`free`, `Var.`, `-`), lists default to empty. Partial
//! pages stay usable and several optional fields rely on the zero default.

use std::sync::LazyLock;

use regex::Regex;

/// Leading optionally signed integer.
#[allow(clippy::expect_used)]
static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("valid regex"));

/// Convert a captured substring to an integer, defaulting to `0`.
///
/// Thousands separators are removed first and any non-numeric suffix is
/// ignored, so `"1,200 gold"` becomes `1200`.
///
/// # Example
///
/// ```rust
/// use rs_tibiadata::coerce::to_int;
///
/// assert_eq!(to_int("8,200"), 8200);
/// assert_eq!(to_int("1200 gold"), 1200);
/// assert_eq!(to_int("free"), 0);
/// ```
#[must_use]
pub fn to_int(s: &str) -> i64 {
    let cleaned = s.trim().replace(',', "");
    let parsed = LEADING_INTEGER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<i64>().ok());

    match parsed {
        Some(value) => value,
        None => {
            if !cleaned.is_empty() {
                tracing::debug!(input = s, "non-numeric capture coerced to 0");
            }
            0
        }
    }
}

/// Split a prose list (`"a, b and c"`) into its items.
///
/// The final `" and "` connector is rewritten to `", "` before splitting
/// on `", "`, so lists of any length normalize the same way. Items are
/// trimmed and empty items dropped.
///
/// # Example
///
/// ```rust
/// use rs_tibiadata::coerce::split_list;
///
/// assert_eq!(split_list("a, b and c"), vec!["a", "b", "c"]);
/// assert_eq!(split_list("a"), vec!["a"]);
/// assert!(split_list("").is_empty());
/// ```
#[must_use]
pub fn split_list(s: &str) -> Vec<String> {
    let joined = match s.rfind(" and ") {
        Some(pos) => format!("{}, {}", &s[..pos], &s[pos + " and ".len()..]),
        None => s.to_string(),
    };
    split_on_comma(&joined)
}

/// Split on `", "` only, trimming items and dropping empty ones.
#[must_use]
pub fn split_on_comma(s: &str) -> Vec<String> {
    s.split(", ")
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cut a capture group at the first occurrence of a unit suffix.
///
/// Applied to the whole group, not per item: `"earth and fire damage. They
/// …"` cut at `" damage"` is `"earth and fire"`. Groups without the suffix
/// are returned unchanged.
#[must_use]
pub fn cut_at<'a>(group: &'a str, suffix: &str) -> &'a str {
    group.find(suffix).map_or(group, |pos| &group[..pos])
}
