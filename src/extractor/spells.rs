//! Spell list extraction.

use dom_query::Document;

use crate::assemble::SpellsDraft;
use crate::cascade::{self, CaptureSet};
use crate::coerce::to_int;
use crate::error::Result;
use crate::patterns::SPELL_LIST_ROW;
use crate::record::{SpellEntry, SpellsOverview};
use crate::sanitize::sanitize_escaped_string;
use crate::selector::locate_spell_rows;

/// Extract the spell list. `vocation_filter` is the normalized filter the
/// page was requested with and is echoed into the record.
///
/// Rows that do not describe a spell (headers, spacers) are skipped and an
/// empty list is valid.
///
/// # Errors
///
/// [`Error::NotFound`](crate::Error::NotFound) without a content box.
pub fn extract(doc: &Document, vocation_filter: &str) -> Result<SpellsOverview> {
    let rows = locate_spell_rows(doc)?;

    let draft = SpellsDraft {
        vocation_filter: vocation_filter.to_string(),
        spells: rows
            .iter()
            .filter_map(|row| cascade::first(&SPELL_LIST_ROW, row.as_str()))
            .map(|cells| spell_entry(&cells))
            .collect(),
    };

    tracing::debug!(
        spells = draft.spells.len(),
        vocation = vocation_filter,
        "spell list extracted"
    );
    Ok(draft.assemble())
}

fn spell_entry(cells: &CaptureSet<'_>) -> SpellEntry {
    let spell_id = sanitize_escaped_string(cells.get(1));
    let formula = sanitize_escaped_string(cells.get(2));
    let group = cells.get(3);
    let kind = cells.get(4);
    let price = cells.get(7);

    SpellEntry {
        name: format!("{spell_id} ({formula})"),
        spell_id,
        formula,
        level: to_int(cells.get(5)),
        mana: to_int(cells.get(6)),
        price: if price == "free" { 0 } else { to_int(price) },
        group_attack: group == "Attack",
        group_healing: group == "Healing",
        group_support: group == "Support",
        type_instant: kind == "Instant",
        type_rune: kind == "Rune",
        premium_only: cells.get(8) == "yes",
    }
}
