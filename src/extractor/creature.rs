//! Creature detail extraction.
//!
//! The creature box holds a heading, the artwork and three paragraphs:
//! description, behaviour and loot. Behaviour and loot are parsed by a
//! second cascade stage on the corresponding paragraph group.

use dom_query::Document;

use crate::assemble::{CreatureDraft, Loot, ManaRequirement};
use crate::cascade::{self, CaptureSet};
use crate::category::Category;
use crate::coerce::{cut_at, split_list, split_on_comma, to_int};
use crate::error::Result;
use crate::patterns::{
    CREATURE_DATA, CREATURE_HITPOINTS, CREATURE_IMMUNE, CREATURE_LOOT, CREATURE_MANA_REQUIRED,
    CREATURE_STRONG, CREATURE_WEAK,
};
use crate::record::Creature;
use crate::sanitize::{br_to_newline, sanitize_escaped_string};
use crate::selector::locate_creature;
use crate::url_utils::absolute_url;

const CATEGORY: Category = Category::Creature;

/// Group indices of [`CREATURE_DATA`].
const NAME: usize = 1;
const IMAGE: usize = 2;
const DESCRIPTION: usize = 3;
const BEHAVIOUR: usize = 4;
const LOOT: usize = 5;

/// Extract the creature on a detail page, tagged with the requested race.
///
/// # Errors
///
/// [`Error::NotFound`](crate::Error::NotFound) when the page has no
/// creature box, [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) when
/// the box lacks its data block, hitpoints sentence or loot sentence.
pub fn extract(doc: &Document, race: &str) -> Result<Creature> {
    let fragment = locate_creature(doc)?;
    let data = cascade::require(&CREATURE_DATA, fragment.as_str(), CATEGORY, "creature data")?;

    let mut draft = CreatureDraft {
        name: sanitize_escaped_string(data.get(NAME)),
        race: race.to_string(),
        image_url: absolute_url(data.get(IMAGE)),
        description: sanitize_escaped_string(&br_to_newline(data.get(DESCRIPTION))),
        ..CreatureDraft::default()
    };

    read_behaviour(&data, &mut draft)?;
    read_loot(&data, &mut draft)?;

    tracing::debug!(name = %draft.name, race, "creature extracted");
    Ok(draft.assemble())
}

fn read_behaviour(data: &CaptureSet<'_>, draft: &mut CreatureDraft) -> Result<()> {
    let behaviour = data.get(BEHAVIOUR);
    let hitpoints = cascade::require(&CREATURE_HITPOINTS, behaviour, CATEGORY, "hitpoints")?;

    draft.hitpoints = to_int(hitpoints.get(1));
    draft.behaviour = sanitize_escaped_string(hitpoints.get(2));
    draft.be_paralysed = !behaviour.contains("cannot be paralysed");
    draft.see_invisible = behaviour.contains("sense invisible creatures");

    if behaviour.contains(" are immune to ") {
        draft.immune_to = damage_list(data, &CREATURE_IMMUNE);
    }
    if behaviour.contains(" are strong against ") {
        draft.strong_against = damage_list(data, &CREATURE_STRONG);
    }
    if behaviour.contains(" are weak against ") {
        draft.weakness_against = damage_list(data, &CREATURE_WEAK);
    }
    if behaviour.contains("It takes ") && behaviour.contains(" mana to ") {
        draft.mana = data
            .refine(BEHAVIOUR, &CREATURE_MANA_REQUIRED)
            .map_or(ManaRequirement::None, |mana| mana_requirement(&mana));
    }
    Ok(())
}

fn damage_list(data: &CaptureSet<'_>, pattern: &regex::Regex) -> Vec<String> {
    data.refine(BEHAVIOUR, pattern)
        .map(|list| split_list(cut_at(list.get(1), " damage")))
        .unwrap_or_default()
}

fn mana_requirement(mana: &CaptureSet<'_>) -> ManaRequirement {
    let cost = to_int(mana.get(1));
    let clause = mana.get(2);

    if clause.contains("convince these creatures but they cannot be") {
        ManaRequirement::ConvinceOnly(cost)
    } else if clause.contains("summon or convince these creatures") {
        ManaRequirement::SummonOrConvince(cost)
    } else {
        tracing::debug!(clause, "unrecognized mana clause");
        ManaRequirement::None
    }
}

fn read_loot(data: &CaptureSet<'_>, draft: &mut CreatureDraft) -> Result<()> {
    let loot = cascade::require(&CREATURE_LOOT, data.get(LOOT), CATEGORY, "loot")?;
    draft.experience_points = to_int(loot.get(1));
    draft.loot = parse_loot(loot.get(2));
    Ok(())
}

/// Loot phrase between "carry" and "with them".
fn parse_loot(phrase: &str) -> Loot {
    if phrase.trim() == "nothing" {
        return Loot::Nothing;
    }
    let items = phrase
        .replacen("items ", "", 1)
        .replacen(" and sometimes other ", "", 1);
    Loot::Items(split_on_comma(&sanitize_escaped_string(&items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::error::Error;

    fn page(behaviour: &str, loot: &str) -> String {
        format!(
            concat!(
                r#"<div class="BoxContent"><div>Creatures</div>"#,
                r#"<div><h2 style="text-align: center;">Demon</h2>"#,
                r#"<img src="https://static.tibia.com/images/library/demon.gif" width="64">"#,
                r#"<br><p>A devil.<br/>Beware.</p><p>{}</p><p>{}</p></div></div>"#
            ),
            behaviour, loot
        )
    }

    fn extract_page(behaviour: &str, loot: &str) -> Result<Creature> {
        extract(&dom::parse(&page(behaviour, loot)), "demon")
    }

    #[test]
    fn reads_name_image_and_description() {
        let creature = extract_page(
            "Demons have 8200 hitpoints. They cannot be paralysed.",
            "They yield 6000 experience points and carry gold coins with them.",
        )
        .expect("creature");

        assert_eq!(creature.name, "Demon");
        assert_eq!(creature.race, "demon");
        assert_eq!(creature.image_url, "https://static.tibia.com/images/library/demon.gif");
        assert_eq!(creature.description, "A devil.\nBeware.");
        assert_eq!(creature.hitpoints, 8200);
        assert_eq!(creature.behaviour, "They cannot be paralysed.");
        assert!(!creature.featured);
    }

    #[test]
    fn paralysis_is_true_unless_denied() {
        let loot = "They yield 5 experience points and carry nothing with them.";
        let denied = extract_page("Rats have 20 hitpoints. They cannot be paralysed.", loot);
        let allowed = extract_page("Rats have 20 hitpoints. They flee at low health.", loot);

        assert!(!denied.expect("creature").be_paralysed);
        assert!(allowed.expect("creature").be_paralysed);
    }

    #[test]
    fn damage_lists_are_cut_and_split() {
        let creature = extract_page(
            concat!(
                "Demons have 8200 hitpoints. They are immune to fire and earth damage. ",
                "Moreover, they are strong against ice, death and energy damage. ",
                "However, they are weak against holy damage."
            ),
            "They yield 6000 experience points and carry nothing with them.",
        )
        .expect("creature");

        assert_eq!(creature.immune_to, vec!["fire", "earth"]);
        assert_eq!(creature.strong_against, vec!["ice", "death", "energy"]);
        assert_eq!(creature.weakness_against, vec!["holy"]);
    }

    #[test]
    fn summon_or_convince_sets_both() {
        let creature = extract_page(
            "Orcs have 70 hitpoints. It takes 300 mana to summon or convince these creatures.",
            "They yield 25 experience points and carry nothing with them.",
        )
        .expect("creature");

        assert!(creature.be_summoned);
        assert_eq!(creature.summon_mana, 300);
        assert!(creature.be_convinced);
        assert_eq!(creature.convinced_mana, 300);
    }

    #[test]
    fn convince_only_never_summons() {
        let creature = extract_page(
            "Bears have 25 hitpoints. It takes 300 mana to convince these creatures but they cannot be summoned.",
            "They yield 23 experience points and carry nothing with them.",
        )
        .expect("creature");

        assert!(!creature.be_summoned);
        assert_eq!(creature.summon_mana, 0);
        assert!(creature.be_convinced);
        assert_eq!(creature.convinced_mana, 300);
    }

    #[test]
    fn nothing_loot_is_not_lootable() {
        let creature = extract_page(
            "Rats have 20 hitpoints.",
            "They yield 50 experience points and carry nothing with them.",
        )
        .expect("creature");

        assert_eq!(creature.experience_points, 50);
        assert!(!creature.is_lootable);
        assert!(creature.loot_list.is_empty());
    }

    #[test]
    fn loot_fillers_are_removed() {
        let creature = extract_page(
            "Rats have 20 hitpoints.",
            "They yield 5 experience points and carry cheese, gold coins and sometimes other items with them.",
        )
        .expect("creature");

        assert!(creature.is_lootable);
        assert_eq!(creature.loot_list, vec!["cheese", "gold coins"]);
    }

    #[test]
    fn missing_hitpoints_is_shape_mismatch() {
        let err = extract_page(
            "Rats are small.",
            "They yield 5 experience points and carry nothing with them.",
        )
        .expect_err("no hitpoints");
        assert_eq!(err, Error::shape_mismatch(Category::Creature, "hitpoints"));
    }

    #[test]
    fn plain_list_page_is_not_found() {
        let doc = dom::parse(r#"<div class="BoxContent"><div>Creatures</div><div>Rat</div></div>"#);
        assert!(matches!(extract(&doc, "nope"), Err(Error::NotFound { .. })));
    }
}
