//! Character encoding detection and transcoding of raw pages.
//!
//! tibia.com pages declare their charset in a `<meta>` tag, mostly
//! ISO-8859-1. Pages saved without the declaration are decoded as UTF-8
//! when they are valid UTF-8 and as windows-1252 otherwise.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use regex::Regex;

/// `<meta charset="…">` or the charset parameter of a Content-Type
/// `<meta http-equiv>` tag.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Bytes examined for a charset declaration.
const HEAD_LEN: usize = 1024;

/// Declared charset label within the first kilobyte, if any.
fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(HEAD_LEN)]);
    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect the encoding of a raw page.
///
/// A recognized `<meta>` declaration wins. Without one, valid UTF-8 is
/// UTF-8 and anything else is windows-1252 (the WHATWG reading of
/// ISO-8859-1).
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some(encoding) =
        declared_charset(html).and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }
    if std::str::from_utf8(html).is_ok() {
        UTF_8
    } else {
        tracing::debug!("undeclared charset with invalid UTF-8, decoding as windows-1252");
        WINDOWS_1252
    }
}

/// Transcode a raw page to a UTF-8 string.
///
/// A byte order mark overrides the detected encoding. Malformed sequences
/// become U+FFFD.
///
/// # Examples
///
/// ```
/// use rs_tibiadata::encoding::transcode_to_utf8;
///
/// let page = b"<meta charset=\"ISO-8859-1\"><div>Ab'Dendriel \xB7 Edron</div>";
/// assert!(transcode_to_utf8(page).contains("Ab'Dendriel \u{b7} Edron"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (decoded, used, had_errors) = detect_encoding(html).decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "page had malformed byte sequences");
    }
    decoded.into_owned()
}
