//! Record assembly from accumulated fields.
//!
//! Extractors fill a fresh draft per call and hand it to `assemble()`.
//! Assembly is pure construction: unpopulated fields keep their zero
//! values, section flags come from what the locator observed, and gated
//! sub-records are reset when their flag is false.

use crate::record::{
    Creature, CreatureEntry, CreaturesOverview, RuneInformation, Spell, SpellContainer,
    SpellEntry, SpellInformation, SpellsOverview, WorldEntry, WorldsOverview,
};

/// Summon/convince clause of a creature's behaviour paragraph.
///
/// The variants are exclusive; summonable creatures are always also
/// convincible at the same cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ManaRequirement {
    /// No mana sentence, or a phrasing that is not recognized.
    #[default]
    None,
    /// "It takes N mana to convince these creatures but they cannot be summoned."
    ConvinceOnly(i64),
    /// "It takes N mana to summon or convince these creatures."
    SummonOrConvince(i64),
}

/// Loot sentence of a creature's loot paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Loot {
    /// "carry nothing with them".
    #[default]
    Nothing,
    Items(Vec<String>),
}

#[derive(Debug, Default)]
pub struct CreatureDraft {
    pub name: String,
    pub race: String,
    pub image_url: String,
    pub description: String,
    pub behaviour: String,
    pub hitpoints: i64,
    pub immune_to: Vec<String>,
    pub strong_against: Vec<String>,
    pub weakness_against: Vec<String>,
    pub be_paralysed: bool,
    pub see_invisible: bool,
    pub mana: ManaRequirement,
    pub experience_points: i64,
    pub loot: Loot,
}

impl CreatureDraft {
    #[must_use]
    pub fn assemble(self) -> Creature {
        let (be_summoned, summon_mana, be_convinced, convinced_mana) = match self.mana {
            ManaRequirement::None => (false, 0, false, 0),
            ManaRequirement::ConvinceOnly(mana) => (false, 0, true, mana),
            ManaRequirement::SummonOrConvince(mana) => (true, mana, true, mana),
        };
        let (is_lootable, loot_list) = match self.loot {
            Loot::Nothing => (false, Vec::new()),
            Loot::Items(items) => (true, items),
        };

        Creature {
            name: self.name,
            race: self.race,
            image_url: self.image_url,
            description: self.description,
            behaviour: self.behaviour,
            hitpoints: self.hitpoints,
            immune_to: self.immune_to,
            strong_against: self.strong_against,
            weakness_against: self.weakness_against,
            be_paralysed: self.be_paralysed,
            be_summoned,
            summon_mana,
            be_convinced,
            convinced_mana,
            see_invisible: self.see_invisible,
            experience_points: self.experience_points,
            is_lootable,
            loot_list,
            featured: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct CreaturesDraft {
    /// Boosted creature, when the header artwork was found.
    pub boosted: Option<CreatureEntry>,
    pub creatures: Vec<CreatureEntry>,
}

impl CreaturesDraft {
    /// Marks the boosted creature and its list entry as featured.
    #[must_use]
    pub fn assemble(self) -> CreaturesOverview {
        let boosted = self
            .boosted
            .map(|entry| CreatureEntry {
                featured: true,
                ..entry
            })
            .unwrap_or_default();

        let creatures = self
            .creatures
            .into_iter()
            .map(|entry| CreatureEntry {
                featured: !boosted.race.is_empty() && entry.race == boosted.race,
                ..entry
            })
            .collect();

        CreaturesOverview { boosted, creatures }
    }
}

#[derive(Debug, Default)]
pub struct SpellDraft {
    pub name: String,
    pub image_url: String,
    pub description: String,
    /// A "Spell Information" container was observed.
    pub has_spell_section: bool,
    pub spell: SpellInformation,
    /// A "Rune Information" container was observed.
    pub has_rune_section: bool,
    pub rune: RuneInformation,
}

impl SpellDraft {
    #[must_use]
    pub fn assemble(self) -> SpellContainer {
        SpellContainer {
            spell: Spell {
                spell_id: self.name.to_lowercase(),
                name: self.name,
                image_url: self.image_url,
                description: self.description,
                has_spell_information: self.has_spell_section,
                spell_information: if self.has_spell_section {
                    self.spell
                } else {
                    SpellInformation::default()
                },
                has_rune_information: self.has_rune_section,
                rune_information: if self.has_rune_section {
                    self.rune
                } else {
                    RuneInformation::default()
                },
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct SpellsDraft {
    pub vocation_filter: String,
    pub spells: Vec<SpellEntry>,
}

impl SpellsDraft {
    #[must_use]
    pub fn assemble(self) -> SpellsOverview {
        SpellsOverview {
            vocation_filter: self.vocation_filter,
            spells: self.spells,
        }
    }
}

#[derive(Debug, Default)]
pub struct WorldsDraft {
    pub record_players: i64,
    pub record_date: String,
    pub regular_worlds: Vec<WorldEntry>,
    pub tournament_worlds: Vec<WorldEntry>,
}

impl WorldsDraft {
    /// Totals the online count over both world lists.
    #[must_use]
    pub fn assemble(self) -> WorldsOverview {
        let players_online = self
            .regular_worlds
            .iter()
            .chain(&self.tournament_worlds)
            .map(|world| world.players_online)
            .sum();

        WorldsOverview {
            players_online,
            record_players: self.record_players,
            record_date: self.record_date,
            regular_worlds: self.regular_worlds,
            tournament_worlds: self.tournament_worlds,
        }
    }
}
