//! Per-category locators.

use dom_query::{Document, Selection};

use super::{box_content, query, sections, Fragment, Section, SectionFragments};
use crate::category::Category;
use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::{
    BOOSTED_CREATURE_SELECTOR, SPELL_ROW_SELECTOR, WORLD_ROW_SELECTOR,
};

fn contains_heading(sel: &Selection) -> bool {
    sel.select("h2").exists()
}

/// The creature box: the first sibling after the box's first `div` that
/// carries a heading.
///
/// # Errors
///
/// [`Error::NotFound`] without a content box or creature heading. Unknown
/// races are answered with the plain creature list, which has neither.
pub fn locate_creature(doc: &Document) -> Result<Fragment> {
    let root = box_content(doc, Category::Creature)?;
    let first_div = dom::query_selector(&root, "div");

    query(dom::next_element_siblings(&first_div), contains_heading)
        .map(|creature_box| Fragment::markup(&creature_box))
        .ok_or_else(|| Error::not_found(Category::Creature, "no creature box"))
}

/// Fragments of the creature list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureListFragments {
    /// Outer markup of the boosted creature artwork, when present.
    pub boosted: Option<Fragment>,
    /// Markup of the content box holding the creature links.
    pub list: Fragment,
}

/// # Errors
///
/// [`Error::NotFound`] without a content box.
pub fn locate_creature_list(doc: &Document) -> Result<CreatureListFragments> {
    let root = box_content(doc, Category::Creatures)?;

    let boosted = doc.select(BOOSTED_CREATURE_SELECTOR).first();
    let boosted = boosted.exists().then(|| Fragment::outer_markup(&boosted));

    let list = Fragment::markup(&root);

    Ok(CreatureListFragments { boosted, list })
}

/// Fragments of a spell page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellFragments {
    /// First table row of the box, holding image and name.
    pub heading: Option<Fragment>,
    pub sections: Vec<SectionFragments>,
    /// Text of the whole content box.
    pub text: Fragment,
}

impl SpellFragments {
    /// Whether a spell or rune information container is present.
    #[must_use]
    pub fn has_information(&self) -> bool {
        self.sections.iter().any(|s| {
            matches!(
                s.section,
                Section::SpellInformation | Section::RuneInformation
            )
        })
    }
}

/// # Errors
///
/// [`Error::NotFound`] without a content box.
pub fn locate_spell(doc: &Document) -> Result<SpellFragments> {
    let root = box_content(doc, Category::Spell)?;

    let first_row = dom::query_selector(&root, "table tr");
    let heading = first_row.exists().then(|| Fragment::markup(&first_row));

    Ok(SpellFragments {
        heading,
        sections: sections(&root, SPELL_ROW_SELECTOR),
        text: Fragment::text(&root),
    })
}

/// Every table row of the spell list box. Rows that are not spells are
/// filtered by the row pattern later.
///
/// # Errors
///
/// [`Error::NotFound`] without a content box.
pub fn locate_spell_rows(doc: &Document) -> Result<Vec<Fragment>> {
    let root = box_content(doc, Category::Spells)?;
    Ok(dom::elements(&dom::query_selector_all(&root, "tr"))
        .iter()
        .map(Fragment::markup)
        .collect())
}

/// Fragments of the world list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldsFragments {
    /// Markup of the content box, holding the player record line.
    pub overview: Fragment,
    pub sections: Vec<SectionFragments>,
}

/// # Errors
///
/// [`Error::NotFound`] without a content box or a regular worlds table.
pub fn locate_worlds(doc: &Document) -> Result<WorldsFragments> {
    let root = box_content(doc, Category::Worlds)?;
    let found = sections(&root, WORLD_ROW_SELECTOR);

    if !found.iter().any(|s| s.section == Section::RegularWorlds) {
        tracing::debug!("content box has no regular worlds table");
        return Err(Error::not_found(Category::Worlds, "no regular worlds table"));
    }

    Ok(WorldsFragments {
        overview: Fragment::markup(&root),
        sections: found,
    })
}
