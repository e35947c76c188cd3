//! Spell detail extraction.
//!
//! A spell page carries a heading row (artwork and name) and up to two
//! captioned key/value tables, "Spell Information" and "Rune Information".
//! Rows are dispatched on their label; labels that exist in both tables
//! are routed by the caption of the table they sit in.

use dom_query::Document;

use crate::assemble::SpellDraft;
use crate::cascade::{self, CaptureSet};
use crate::category::Category;
use crate::coerce::{split_on_comma, to_int};
use crate::error::{Error, Result};
use crate::patterns::{SPELL_COOLDOWN, SPELL_DATA_ROW, SPELL_DESCRIPTION, SPELL_NAME_AND_IMAGE};
use crate::record::{RuneInformation, SpellContainer, SpellInformation};
use crate::sanitize::{sanitize_double_quotes, sanitize_escaped_string};
use crate::selector::{locate_spell, Section, SpellFragments};
use crate::url_utils::absolute_url;

const CATEGORY: Category = Category::Spell;

/// Extract the spell on a detail page.
///
/// # Errors
///
/// [`Error::NotFound`] when the page has no content box, or neither a name
/// heading nor an information table (unknown spell).
/// [`Error::ShapeMismatch`] when information tables exist but the name
/// heading does not parse.
pub fn extract(doc: &Document) -> Result<SpellContainer> {
    let fragments = locate_spell(doc)?;
    let mut draft = SpellDraft::default();

    read_heading(&fragments, &mut draft)?;

    for container in &fragments.sections {
        let section = container.section;
        match section {
            Section::SpellInformation => draft.has_spell_section = true,
            Section::RuneInformation => draft.has_rune_section = true,
            _ => {}
        }
        for row in &container.rows {
            if let Some(cells) = cascade::first(&SPELL_DATA_ROW, row.as_str()) {
                read_row(section, &cells, row.as_str(), &mut draft);
            }
        }
    }

    if let Some(description) = cascade::first(&SPELL_DESCRIPTION, fragments.text.as_str()) {
        draft.description = format!("{}.", description.get(1));
    }

    tracing::debug!(
        name = %draft.name,
        spell = draft.has_spell_section,
        rune = draft.has_rune_section,
        "spell extracted"
    );
    Ok(draft.assemble())
}

fn read_heading(fragments: &SpellFragments, draft: &mut SpellDraft) -> Result<()> {
    let heading = fragments
        .heading
        .as_ref()
        .and_then(|row| cascade::first(&SPELL_NAME_AND_IMAGE, row.as_str()));

    match heading {
        Some(heading) => {
            draft.image_url = absolute_url(heading.get(1));
            draft.name = sanitize_escaped_string(heading.get(2));
            Ok(())
        }
        None if fragments.has_information() => {
            tracing::warn!(category = %CATEGORY, "spell tables without a name heading");
            Err(Error::shape_mismatch(CATEGORY, "spell name"))
        }
        None => Err(Error::not_found(CATEGORY, "no spell on page")),
    }
}

/// Dispatch one label/value row. Unknown labels are ignored.
fn read_row(section: Section, cells: &CaptureSet<'_>, row: &str, draft: &mut SpellDraft) {
    let label = cells.get(1);
    let value = sanitize_escaped_string(cells.get(2));
    let spell = &mut draft.spell;
    let rune = &mut draft.rune;

    match (label, section) {
        ("Formula", _) => spell.formula = sanitize_double_quotes(&value),
        ("Vocation", Section::SpellInformation) => spell.vocation = split_on_comma(&value),
        ("Vocation", Section::RuneInformation) => rune.vocation = split_on_comma(&value),
        ("Group", Section::SpellInformation) => set_spell_group(spell, &value),
        ("Group", Section::RuneInformation) => set_rune_group(rune, &value),
        ("Type", _) => match value.as_str() {
            "Instant" => spell.type_instant = true,
            "Rune" => spell.type_rune = true,
            _ => {}
        },
        ("Damage Type" | "Magic Type", Section::SpellInformation) => {
            spell.damage_type = value.to_lowercase();
        }
        ("Damage Type" | "Magic Type", Section::RuneInformation) => {
            rune.damage_type = value.to_lowercase();
        }
        ("Cooldown", _) => {
            if let Some(cooldown) = cascade::first(&SPELL_COOLDOWN, row) {
                spell.cooldown_alone = to_int(cooldown.get(1));
                spell.cooldown_group = to_int(cooldown.get(2));
            }
        }
        ("Soul Points", _) => spell.soul_points = to_int(&value),
        ("Amount", _) => spell.amount = to_int(&value),
        ("Exp Lvl", Section::SpellInformation) => spell.level = to_int(&value),
        ("Exp Lvl", Section::RuneInformation) => rune.level = to_int(&value),
        ("Mana", _) => spell.mana = to_int(&value),
        ("Price", _) => spell.price = if value == "free" { 0 } else { to_int(&value) },
        ("City", _) => spell.city = split_on_comma(&value),
        ("Premium", _) => spell.premium = value == "yes",
        ("Mag Lvl", _) => rune.magic_level = to_int(&value),
        _ => {}
    }
}

fn set_spell_group(spell: &mut SpellInformation, group: &str) {
    match group {
        "Attack" => spell.group_attack = true,
        "Healing" => spell.group_healing = true,
        "Support" => spell.group_support = true,
        _ => {}
    }
}

fn set_rune_group(rune: &mut RuneInformation, group: &str) {
    match group {
        "Attack" => rune.group_attack = true,
        "Healing" => rune.group_healing = true,
        "Support" => rune.group_support = true,
        _ => {}
    }
}
