//! Content categories served by the extraction pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::options::{Options, ALL_VOCATIONS};
use crate::url_utils;

/// One kind of tibia.com page, each with its own record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Single creature detail page (`library/?subtopic=creatures&race=…`).
    Creature,
    /// Creature listing with the boosted creature.
    Creatures,
    /// Single spell detail page (`library/?subtopic=spells&spell=…`).
    Spell,
    /// Spell listing, optionally filtered by vocation.
    Spells,
    /// Game world listing.
    Worlds,
}

impl Category {
    /// All categories, in the order the CLI lists them.
    pub const ALL: [Category; 5] = [
        Category::Creature,
        Category::Creatures,
        Category::Spell,
        Category::Spells,
        Category::Worlds,
    ];

    /// Lowercase name used on the command line and in error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Creature => "creature",
            Category::Creatures => "creatures",
            Category::Spell => "spell",
            Category::Spells => "spells",
            Category::Worlds => "worlds",
        }
    }

    /// JSON key the record is nested under in the response envelope.
    ///
    /// Both spell categories share the `spells` key.
    #[must_use]
    pub fn response_key(self) -> &'static str {
        match self {
            Category::Creature => "creature",
            Category::Creatures => "creatures",
            Category::Spell | Category::Spells => "spells",
            Category::Worlds => "worlds",
        }
    }

    /// tibia.com URL a fetch collaborator should request for this category.
    #[must_use]
    pub fn source_url(self, options: &Options) -> String {
        match self {
            Category::Creature => url_utils::library_url(
                "creatures",
                &[("race", options.race.as_deref().unwrap_or_default())],
            ),
            Category::Creatures => url_utils::library_url("creatures", &[]),
            Category::Spell => url_utils::library_url(
                "spells",
                &[("spell", options.spell.as_deref().unwrap_or_default())],
            ),
            Category::Spells => {
                let vocation = match options.vocation_filter() {
                    ALL_VOCATIONS => "",
                    vocation => vocation,
                };
                url_utils::library_url("spells", &[("vocation", vocation)])
            }
            Category::Worlds => url_utils::community_url("worlds", &[]),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
