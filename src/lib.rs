//! # rs-tibiadata
//!
//! Structured data extraction from tibia.com pages.
//!
//! Each page category (creature, creature list, spell, spell list, world
//! list) is parsed by a fixed pipeline: the DOM locator isolates the
//! content regions, a cascade of regex stages pulls out substrings,
//! coercion types them, and an assembler builds the record. Records
//! serialize to the JSON shape of the TibiaData v3 API.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_tibiadata::{extract, Category, Envelope, Options, Record};
//!
//! let html = r#"<div class="BoxContent"><table class="TableContent">
//! <tr><td><a href="?subtopic=spells&spell=exura">Light Healing</a> (exura)</td>
//! <td>Healing</td><td>Instant</td><td>8</td><td>20</td><td>free</td><td>no</td></tr>
//! </table></div>"#;
//!
//! let record = extract(Category::Spells, html, &Options::default())?;
//! if let Record::Spells(overview) = &record {
//!     assert_eq!(overview.spells[0].spell_id, "Light Healing");
//! }
//! let json = serde_json::to_string(&Envelope::new(record)).expect("serializable");
//! assert!(json.starts_with(r#"{"spells":"#));
//! # Ok::<(), rs_tibiadata::Error>(())
//! ```
//!
//! ## Errors
//!
//! A page without the expected container (maintenance, unknown entity)
//! is [`Error::NotFound`]; a container whose content no longer parses is
//! [`Error::ShapeMismatch`]. Non-numeric captures are not errors and read
//! as `0`.
//!
//! ## Concurrency
//!
//! Extraction is a pure function of its input. Compiled patterns are
//! shared read-only and every call parses its own document, so calls may
//! run on any number of threads at once.

mod error;
mod options;
mod patterns;

/// Record types, one per category.
pub mod record;

/// Response envelope with the `information` block.
pub mod envelope;

/// Page categories and their source URLs.
pub mod category;

/// Per-category record drafts and assembly.
pub mod assemble;

/// Ordered regex stages with nested re-matching.
pub mod cascade;

/// Entity, quote and line-break normalization of captures.
pub mod sanitize;

/// Integer and list coercion of captures.
pub mod coerce;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Content region location per category.
pub mod selector;

/// Category extractors.
pub mod extractor;

/// URL building and resolution against tibia.com.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use category::Category;
pub use envelope::{Envelope, Information, API_VERSION};
pub use error::{Error, Result};
pub use options::{normalize_vocation, Options, ALL_VOCATIONS};
pub use record::{
    Creature, CreatureEntry, CreaturesOverview, Record, RuneInformation, Spell, SpellContainer,
    SpellEntry, SpellInformation, SpellsOverview, WorldEntry, WorldsOverview,
};

/// Extracts the record of one category from a page.
///
/// # Arguments
///
/// * `category` - Which kind of page `html` is
/// * `html` - The page as a string slice
/// * `options` - Request parameters; `race` is echoed into creature
///   records and `vocation` into spell lists
///
/// # Errors
///
/// [`Error::NotFound`] when the page lacks the category's content
/// container, [`Error::ShapeMismatch`] when a required stage fails.
///
/// # Example
///
/// ```rust
/// use rs_tibiadata::{extract, Category, Error, Options};
///
/// let maintenance = "<html><body><h1>Maintenance</h1></body></html>";
/// let err = extract(Category::Worlds, maintenance, &Options::default()).unwrap_err();
/// assert!(matches!(err, Error::NotFound { .. }));
/// ```
pub fn extract(category: Category, html: &str, options: &Options) -> Result<Record> {
    tracing::debug!(%category, bytes = html.len(), "extracting");
    match category {
        Category::Creature => {
            extract_creature(html, options.race.as_deref().unwrap_or_default())
                .map(Record::Creature)
        }
        Category::Creatures => extract_creatures_overview(html).map(Record::Creatures),
        Category::Spell => extract_spell(html).map(Record::Spell),
        Category::Spells => {
            extract_spells_overview(html, options.vocation_filter()).map(Record::Spells)
        }
        Category::Worlds => extract_worlds_overview(html).map(Record::Worlds),
    }
}

/// Extracts from raw page bytes with automatic encoding detection.
///
/// The charset is taken from `<meta>` declarations and the page is
/// transcoded to UTF-8 before extraction. tibia.com serves ISO-8859-1.
///
/// # Errors
///
/// As [`extract`].
///
/// # Example
///
/// ```rust
/// use rs_tibiadata::{extract_bytes, Category, Options, Record};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>\
/// <div class=\"BoxContent\"><a href=\"?subtopic=creatures&race=gnarlhound\">\
/// <img src=\"gnarlhound.gif\"><div>Gn\xE4rlhound</div></a></div></body></html>";
/// let record = extract_bytes(Category::Creatures, html, &Options::default())?;
/// if let Record::Creatures(overview) = record {
///     assert_eq!(overview.creatures[0].name, "Gn\u{e4}rlhound");
/// }
/// # Ok::<(), rs_tibiadata::Error>(())
/// ```
pub fn extract_bytes(category: Category, html: &[u8], options: &Options) -> Result<Record> {
    let html_str = encoding::transcode_to_utf8(html);
    extract(category, &html_str, options)
}

/// Extracts a creature detail page, tagging the record with `race`.
#[allow(clippy::missing_errors_doc)]
pub fn extract_creature(html: &str, race: &str) -> Result<Creature> {
    extractor::creature::extract(&dom::parse(html), race)
}

/// Extracts the creature list and the boosted creature.
#[allow(clippy::missing_errors_doc)]
pub fn extract_creatures_overview(html: &str) -> Result<CreaturesOverview> {
    extractor::creatures::extract(&dom::parse(html))
}

/// Extracts a spell detail page.
#[allow(clippy::missing_errors_doc)]
pub fn extract_spell(html: &str) -> Result<SpellContainer> {
    extractor::spell::extract(&dom::parse(html))
}

/// Extracts the spell list. `vocation` is normalized with
/// [`normalize_vocation`] before it is echoed into the record.
#[allow(clippy::missing_errors_doc)]
pub fn extract_spells_overview(html: &str, vocation: &str) -> Result<SpellsOverview> {
    extractor::spells::extract(&dom::parse(html), normalize_vocation(vocation))
}

/// Extracts the world list.
#[allow(clippy::missing_errors_doc)]
pub fn extract_worlds_overview(html: &str) -> Result<WorldsOverview> {
    extractor::worlds::extract(&dom::parse(html))
}
