//! Record types produced by extraction.
//!
//! One record type per category. Field names follow the JSON API the
//! records are served through; lists serialize as `[]` when empty and every
//! field is always present.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Creature detail record (`creature` key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    /// Race identifier the page was requested with.
    pub race: String,
    pub image_url: String,
    pub description: String,
    /// Behaviour sentences following the hitpoints sentence.
    pub behaviour: String,
    pub hitpoints: i64,
    #[serde(rename = "immune")]
    pub immune_to: Vec<String>,
    #[serde(rename = "strong")]
    pub strong_against: Vec<String>,
    #[serde(rename = "weakness")]
    pub weakness_against: Vec<String>,
    pub be_paralysed: bool,
    pub be_summoned: bool,
    #[serde(rename = "summoned_mana")]
    pub summon_mana: i64,
    pub be_convinced: bool,
    pub convinced_mana: i64,
    pub see_invisible: bool,
    pub experience_points: i64,
    pub is_lootable: bool,
    pub loot_list: Vec<String>,
    /// Always `false` on the detail page.
    pub featured: bool,
}

/// One creature in the creature list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureEntry {
    pub name: String,
    pub race: String,
    pub image_url: String,
    /// Whether this is today's boosted creature.
    pub featured: bool,
}

/// Creature list record (`creatures` key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreaturesOverview {
    pub boosted: CreatureEntry,
    #[serde(rename = "creature_list")]
    pub creatures: Vec<CreatureEntry>,
}

/// Spell-side information table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellInformation {
    pub formula: String,
    pub vocation: Vec<String>,
    pub group_attack: bool,
    pub group_healing: bool,
    pub group_support: bool,
    pub type_instant: bool,
    pub type_rune: bool,
    pub damage_type: String,
    pub cooldown_alone: i64,
    pub cooldown_group: i64,
    pub soul_points: i64,
    pub amount: i64,
    pub level: i64,
    pub mana: i64,
    pub price: i64,
    pub city: Vec<String>,
    #[serde(rename = "premium_only")]
    pub premium: bool,
}

/// Rune-side information table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneInformation {
    pub vocation: Vec<String>,
    pub group_attack: bool,
    pub group_healing: bool,
    pub group_support: bool,
    pub damage_type: String,
    pub level: i64,
    pub magic_level: i64,
}

/// Spell detail record, nested as `spells.spell`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    /// Lowercased spell name.
    pub spell_id: String,
    pub image_url: String,
    /// Best effort; see `patterns::SPELL_DESCRIPTION`.
    pub description: String,
    pub has_spell_information: bool,
    pub spell_information: SpellInformation,
    pub has_rune_information: bool,
    pub rune_information: RuneInformation,
}

/// Wire wrapper placing a [`Spell`] under the `spell` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellContainer {
    pub spell: Spell,
}

/// One row of the spell list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellEntry {
    /// Display name followed by the formula in parentheses.
    pub name: String,
    /// Display name.
    pub spell_id: String,
    pub formula: String,
    pub level: i64,
    pub mana: i64,
    pub price: i64,
    pub group_attack: bool,
    pub group_healing: bool,
    pub group_support: bool,
    pub type_instant: bool,
    pub type_rune: bool,
    pub premium_only: bool,
}

/// Spell list record (`spells` key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellsOverview {
    #[serde(rename = "spells_vocation_filter")]
    pub vocation_filter: String,
    #[serde(rename = "spell_list")]
    pub spells: Vec<SpellEntry>,
}

/// One row of the world list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldEntry {
    pub name: String,
    /// `online`, `offline` or `unknown`.
    pub status: String,
    pub players_online: i64,
    pub location: String,
    pub pvp_type: String,
    pub premium_only: bool,
    /// `regular`, `blocked` or `locked`.
    pub transfer_type: String,
    pub battleye_protected: bool,
    /// `release`, an ISO date, or empty when unprotected.
    pub battleye_date: String,
    /// `regular`, `experimental` or `tournament`.
    pub game_world_type: String,
    /// `regular` or `restricted` for tournament worlds, empty otherwise.
    pub tournament_world_type: String,
}

/// World list record (`worlds` key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldsOverview {
    /// Sum of the online counts of every listed world.
    pub players_online: i64,
    pub record_players: i64,
    /// RFC 3339 UTC timestamp of the all-time record.
    pub record_date: String,
    pub regular_worlds: Vec<WorldEntry>,
    pub tournament_worlds: Vec<WorldEntry>,
}

/// Record produced by [`crate::extract`], one variant per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Creature(Creature),
    Creatures(CreaturesOverview),
    Spell(SpellContainer),
    Spells(SpellsOverview),
    Worlds(WorldsOverview),
}

impl Record {
    /// Category this record was extracted for.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Record::Creature(_) => Category::Creature,
            Record::Creatures(_) => Category::Creatures,
            Record::Spell(_) => Category::Spell,
            Record::Spells(_) => Category::Spells,
            Record::Worlds(_) => Category::Worlds,
        }
    }
}

// Serializes as the bare inner record; the envelope adds the category key.
impl Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Record::Creature(record) => record.serialize(serializer),
            Record::Creatures(record) => record.serialize(serializer),
            Record::Spell(record) => record.serialize(serializer),
            Record::Spells(record) => record.serialize(serializer),
            Record::Worlds(record) => record.serialize(serializer),
        }
    }
}
