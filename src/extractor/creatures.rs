//! Creature list extraction.

use dom_query::Document;

use crate::assemble::CreaturesDraft;
use crate::cascade::{self, CaptureSet};
use crate::error::Result;
use crate::patterns::{BOOSTED_CREATURE_NAME, BOOSTED_CREATURE_RACE, CREATURE_LIST_ENTRY, IMAGE_SOURCE};
use crate::record::{CreatureEntry, CreaturesOverview};
use crate::sanitize::sanitize_escaped_string;
use crate::selector::{locate_creature_list, Fragment};
use crate::url_utils::absolute_url;

/// Extract the creature list and today's boosted creature.
///
/// An empty list is valid. The boosted creature is optional and left at
/// its zero value when the header artwork is missing.
///
/// # Errors
///
/// [`Error::NotFound`](crate::Error::NotFound) without a content box.
pub fn extract(doc: &Document) -> Result<CreaturesOverview> {
    let fragments = locate_creature_list(doc)?;

    let draft = CreaturesDraft {
        boosted: fragments.boosted.as_ref().and_then(boosted_entry),
        creatures: cascade::all(&CREATURE_LIST_ENTRY, fragments.list.as_str())
            .iter()
            .map(list_entry)
            .collect(),
    };

    tracing::debug!(
        creatures = draft.creatures.len(),
        boosted = draft.boosted.is_some(),
        "creature list extracted"
    );
    Ok(draft.assemble())
}

fn list_entry(entry: &CaptureSet<'_>) -> CreatureEntry {
    CreatureEntry {
        name: sanitize_escaped_string(entry.get(3)).trim().to_string(),
        race: entry.get(1).to_string(),
        image_url: absolute_url(entry.get(2)),
        featured: false,
    }
}

fn boosted_entry(artwork: &Fragment) -> Option<CreatureEntry> {
    let markup = artwork.as_str();
    let name = cascade::first(&BOOSTED_CREATURE_NAME, markup)?;
    let race = cascade::first(&BOOSTED_CREATURE_RACE, markup);
    let image = cascade::first(&IMAGE_SOURCE, markup);

    Some(CreatureEntry {
        name: sanitize_escaped_string(name.get(1)),
        race: race.map(|r| r.get(1).to_string()).unwrap_or_default(),
        image_url: image.map(|i| absolute_url(i.get(1))).unwrap_or_default(),
        featured: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    const BOOSTED: &str = concat!(
        r#"<img id="Monster" src="https://static.tibia.com/images/global/header/monsters/rat.gif" "#,
        r#"onclick="window.location = 'https://www.tibia.com/library/?subtopic=creatures&race=rat';" "#,
        r#"title="Today's boosted creature: Rat">"#
    );

    fn list(boosted: &str) -> String {
        format!(
            concat!(
                r#"<div id="Header">{}</div><div class="BoxContent">"#,
                r#"<div><a href="https://www.tibia.com/library/?subtopic=creatures&race=cave+rat">"#,
                r#"<img src="https://static.tibia.com/images/library/caverat.gif" border="0">"#,
                r#"<div>Cave Rat</div></a></div>"#,
                r#"<div><a href="https://www.tibia.com/library/?subtopic=creatures&race=rat">"#,
                r#"<img src="https://static.tibia.com/images/library/rat.gif" border="0">"#,
                r#"<div>Rat</div></a></div></div>"#
            ),
            boosted
        )
    }

    #[test]
    fn reads_rows_in_document_order() {
        let overview = extract(&dom::parse(&list(BOOSTED))).expect("list");

        let races: Vec<&str> = overview.creatures.iter().map(|c| c.race.as_str()).collect();
        assert_eq!(races, vec!["cave+rat", "rat"]);
        assert_eq!(overview.creatures[0].name, "Cave Rat");
        assert_eq!(
            overview.creatures[0].image_url,
            "https://static.tibia.com/images/library/caverat.gif"
        );
    }

    #[test]
    fn boosted_creature_is_featured() {
        let overview = extract(&dom::parse(&list(BOOSTED))).expect("list");

        assert_eq!(overview.boosted.name, "Rat");
        assert_eq!(overview.boosted.race, "rat");
        assert!(overview.boosted.featured);
        assert!(!overview.creatures[0].featured);
        assert!(overview.creatures[1].featured);
    }

    #[test]
    fn links_without_creature_artwork_are_skipped() {
        let html = list("").replace(
            r#"<div class="BoxContent">"#,
            r#"<div class="BoxContent"><a href="?subtopic=creatures&race=">Back</a>"#,
        );
        let overview = extract(&dom::parse(&html)).expect("list");

        let names: Vec<&str> = overview.creatures.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Cave Rat", "Rat"]);
    }

    #[test]
    fn missing_artwork_leaves_boosted_empty() {
        let overview = extract(&dom::parse(&list(""))).expect("list");
        assert_eq!(overview.boosted, CreatureEntry::default());
        assert!(overview.creatures.iter().all(|c| !c.featured));
    }
}
