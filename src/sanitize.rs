//! Text normalization for captured fragments.
//!
//! Captures are taken from serialized markup, so they still carry HTML
//! entities, `<br>` tags and non-breaking spaces. Every extractor runs its
//! string fields through these helpers before assembling a record.

use std::sync::LazyLock;

use regex::Regex;

use crate::dom::{self, Document};

/// Matches `<br>`, `<br/>` and `<br />` in any case.
#[allow(clippy::expect_used)]
static BR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));

/// Decode HTML entities (`&amp;`, `&#39;`, `&quot;`, `&nbsp;`, …).
///
/// Markup in the input is left as-is. The text is parsed as the content of
/// an RCDATA element, where the HTML parser resolves character references
/// but does not build tags. `<` is escaped first so the input cannot close
/// that element.
///
/// # Example
///
/// ```rust
/// use rs_tibiadata::sanitize::unescape_html;
///
/// assert_eq!(unescape_html("Fish &amp; Chips"), "Fish & Chips");
/// assert_eq!(unescape_html("it&#39;s"), "it's");
/// ```
#[must_use]
pub fn unescape_html(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let escaped = s.replace('<', "&lt;");
    // Leading marker keeps the parser from eating a newline after <textarea>.
    let doc = Document::from(format!("<textarea>~{escaped}</textarea>"));
    let text = dom::text_content(&doc.select("textarea"));
    let text: &str = &text;
    text.strip_prefix('~').unwrap_or(text).to_string()
}

/// Replace non-breaking spaces with plain spaces.
#[must_use]
pub fn fold_nbsp(s: &str) -> String {
    s.replace('\u{a0}', " ")
}

/// Decode entities and fold non-breaking spaces.
///
/// This is the default treatment for any captured text field.
#[must_use]
pub fn sanitize_escaped_string(s: &str) -> String {
    fold_nbsp(&unescape_html(s))
}

/// Replace double quotes with single quotes.
///
/// Spell formulas quote their argument (`exiva "name"`); records carry
/// them as `exiva 'name'`.
#[must_use]
pub fn sanitize_double_quotes(s: &str) -> String {
    s.replace('"', "'")
}

/// Convert `<br>` line breaks into `\n`.
#[must_use]
pub fn br_to_newline(s: &str) -> String {
    BR_TAG.replace_all(s, "\n").into_owned()
}
