//! Per-call request parameters for extraction.
//!
//! The `Options` struct carries the values a caller requested a page with.
//! Some of them are echoed into the record (the creature race, the spell
//! vocation filter); others only shape the source URL.

/// Filter value meaning "no vocation filter".
pub const ALL_VOCATIONS: &str = "all";

/// Request parameters for one extraction call.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// when the category needs no parameters.
///
/// # Example
///
/// ```rust
/// use rs_tibiadata::Options;
///
/// let options = Options {
///     race: Some("demon".to_string()),
///     ..Options::default()
/// };
/// assert_eq!(options.vocation_filter(), "all");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Creature race identifier, as used in the `race=` query parameter.
    ///
    /// Echoed into `Creature::race`.
    ///
    /// Default: `None`
    pub race: Option<String>,

    /// Spell identifier, as used in the `spell=` query parameter.
    ///
    /// Only used to build the source URL; the record takes its name from
    /// the page.
    ///
    /// Default: `None`
    pub spell: Option<String>,

    /// Vocation filter for the spells overview.
    ///
    /// Normalized by [`Options::vocation_filter`].
    ///
    /// Default: `None` (all vocations)
    pub vocation: Option<String>,
}

impl Options {
    /// Normalized vocation filter: `knight`, `paladin`, `sorcerer`,
    /// `druid`, or [`ALL_VOCATIONS`].
    ///
    /// Accepts plurals and promotion prefixes ("Elder Druids" → `druid`).
    #[must_use]
    pub fn vocation_filter(&self) -> &'static str {
        self.vocation
            .as_deref()
            .map_or(ALL_VOCATIONS, normalize_vocation)
    }
}

/// Normalize a free-form vocation name to a filter value.
#[must_use]
pub fn normalize_vocation(raw: &str) -> &'static str {
    let lowered = raw.trim().to_lowercase();
    let base = ["elite ", "royal ", "master ", "elder "]
        .iter()
        .find_map(|prefix| lowered.strip_prefix(prefix))
        .unwrap_or(&lowered);
    let base = base.strip_suffix('s').unwrap_or(base);

    match base {
        "knight" => "knight",
        "paladin" => "paladin",
        "sorcerer" => "sorcerer",
        "druid" => "druid",
        _ => ALL_VOCATIONS,
    }
}
