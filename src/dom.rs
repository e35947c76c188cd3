//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate with the handful of operations
//! the locator needs: parsing, querying, sibling walks and serialization
//! of a selection back into markup or text.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content of the first node
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content of the first node
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Querying ===

/// Query single element by CSS selector
#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select_single(selector)
}

/// Query all elements by CSS selector
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

/// Split a selection into one selection per matched node, in document order.
#[must_use]
pub fn elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

// === Tree Navigation ===

/// Get every element sibling after the first node (skipping text nodes)
#[must_use]
pub fn next_element_siblings<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut siblings = Vec::new();
    if let Some(node) = sel.nodes().first() {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                siblings.push(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
    }
    siblings
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
