//! DOM Locator
//!
//! Isolates the content regions of a parsed page that one category needs
//! and hands them on as [`Fragment`]s. Anchors are structural: the main
//! content box, captioned table containers, row structure. A missing anchor
//! is [`Error::NotFound`]; an anchor that is present but empty is not.
//!
//! [`Error::NotFound`]: crate::Error::NotFound

use dom_query::{Document, Selection};

use crate::category::Category;
use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::{
    BOX_CONTENT_SELECTOR, CAPTION_SELECTOR, TABLE_CONTAINER_SELECTOR,
};

pub mod locate;

pub use locate::{
    locate_creature, locate_creature_list, locate_spell, locate_spell_rows, locate_worlds,
    CreatureListFragments, SpellFragments, WorldsFragments,
};

/// A span of page markup or text selected for one cascade stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// Inner markup of the first node of `sel`.
    #[must_use]
    pub fn markup(sel: &Selection) -> Self {
        Self(dom::inner_html(sel).to_string())
    }

    /// Outer markup of the first node of `sel`, the element's own tag included.
    #[must_use]
    pub fn outer_markup(sel: &Selection) -> Self {
        Self(dom::outer_html(sel).to_string())
    }

    /// Text content of `sel` and its descendants.
    #[must_use]
    pub fn text(sel: &Selection) -> Self {
        Self(dom::text_content(sel).to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity of a captioned table container.
///
/// Carried as local state while iterating the rows of one container; it
/// decides which record fields a row label populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    SpellInformation,
    RuneInformation,
    RegularWorlds,
    TournamentWorlds,
    Other,
}

impl Section {
    /// Section named by a container caption.
    #[must_use]
    pub fn from_caption(caption: &str) -> Self {
        match caption.trim() {
            "Spell Information" => Section::SpellInformation,
            "Rune Information" => Section::RuneInformation,
            "Regular Worlds" => Section::RegularWorlds,
            "Tournament Worlds" => Section::TournamentWorlds,
            _ => Section::Other,
        }
    }
}

/// Row fragments of one captioned container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFragments {
    pub section: Section,
    pub rows: Vec<Fragment>,
}

/// A predicate over a selection, used to pick anchors.
pub type Rule = fn(&Selection) -> bool;

/// First selection among `candidates` for which `rule` holds.
#[must_use]
pub fn query<'a>(candidates: Vec<Selection<'a>>, rule: Rule) -> Option<Selection<'a>> {
    candidates.into_iter().find(|sel| rule(sel))
}

/// The page's main content box.
///
/// # Errors
///
/// [`Error::NotFound`] when the page has no content box, which is what
/// maintenance and error pages look like.
pub fn box_content(doc: &Document, category: Category) -> Result<Selection<'_>> {
    let found = doc.select(BOX_CONTENT_SELECTOR).first();
    if found.exists() {
        Ok(found)
    } else {
        tracing::debug!(%category, "page has no content box");
        Err(Error::not_found(category, "page has no content box"))
    }
}

/// Every captioned table container under `root`, with its rows.
#[must_use]
pub fn sections(root: &Selection, row_selector: &str) -> Vec<SectionFragments> {
    dom::elements(&dom::query_selector_all(root, TABLE_CONTAINER_SELECTOR))
        .iter()
        .map(|container| {
            let caption = dom::text_content(&dom::query_selector(container, CAPTION_SELECTOR));
            let rows = dom::elements(&dom::query_selector_all(container, row_selector))
                .iter()
                .map(Fragment::markup)
                .collect();
            SectionFragments {
                section: Section::from_caption(&caption),
                rows,
            }
        })
        .collect()
}
