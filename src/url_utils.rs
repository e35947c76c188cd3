//! URL utility functions.
//!
//! Builds the tibia.com addresses a fetch collaborator requests for each
//! category, and resolves relative image sources found on those pages.
//! No network access happens here.

use url::Url;

/// Root of the site every page is fetched from.
pub const SITE_ROOT: &str = "https://www.tibia.com/";

/// Build a `library/?subtopic=…` URL with escaped query parameters.
///
/// # Example
///
/// ```rust
/// use rs_tibiadata::url_utils::library_url;
///
/// assert_eq!(
///     library_url("spells", &[("spell", "light healing")]),
///     "https://www.tibia.com/library/?subtopic=spells&spell=light+healing"
/// );
/// ```
#[must_use]
pub fn library_url(subtopic: &str, params: &[(&str, &str)]) -> String {
    section_url("library/", subtopic, params)
}

/// Build a `community/?subtopic=…` URL with escaped query parameters.
#[must_use]
pub fn community_url(subtopic: &str, params: &[(&str, &str)]) -> String {
    section_url("community/", subtopic, params)
}

fn section_url(section: &str, subtopic: &str, params: &[(&str, &str)]) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("subtopic", subtopic)
        .extend_pairs(params.iter().copied())
        .finish();
    format!("{SITE_ROOT}{section}?{query}")
}

/// Check if a string is a valid absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Resolve an image source against the site root.
///
/// Absolute URLs and empty strings are returned unchanged; relative paths
/// are joined onto [`SITE_ROOT`].
#[must_use]
pub fn absolute_url(src: &str) -> String {
    let src = src.trim();
    if src.is_empty() || is_absolute_url(src) {
        return src.to_string();
    }

    match Url::parse(SITE_ROOT).and_then(|base| base.join(src)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => src.to_string(),
    }
}
