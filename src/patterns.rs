//! Compiled regex patterns and CSS selectors for page extraction.
//!
//! All patterns are compiled once at first use with `LazyLock` and shared
//! read-only between calls; match results never outlive one extraction.
//! Patterns target markup as serialized by `dom_query`, so void elements
//! appear as `<img …>` and attribute ampersands as `&amp;`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Creature Detail Patterns
// =============================================================================

/// Name, image, and the description/behaviour/loot paragraphs of a creature box.
pub static CREATURE_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#";">([^<]*)</h2>\s*<img src="([^"]*)"[^>]*>(?s:.*)<p>(.*)</p>\s*<p>(.*)</p>\s*<p>(.*)</p>"#,
    )
    .expect("CREATURE_DATA regex")
});

/// Hitpoints and the remaining behaviour sentences.
pub static CREATURE_HITPOINTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*have (.*) hitpoints\.\s*(.*)").expect("CREATURE_HITPOINTS regex")
});

pub static CREATURE_IMMUNE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*are immune to (.*)").expect("CREATURE_IMMUNE regex")
});

pub static CREATURE_STRONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*are strong against (.*)").expect("CREATURE_STRONG regex")
});

pub static CREATURE_WEAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*are weak against (.*)").expect("CREATURE_WEAK regex")
});

/// Mana cost and the summon/convince clause that follows it.
pub static CREATURE_MANA_REQUIRED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*It takes (.*) mana to (.*)").expect("CREATURE_MANA_REQUIRED regex")
});

/// Experience yield and the raw loot phrase (trailing space included).
pub static CREATURE_LOOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*yield (.*) experience.*carry (.*)with them").expect("CREATURE_LOOT regex")
});

// =============================================================================
// Creature List Patterns
// =============================================================================

/// One creature link: race id, image, display name.
pub static CREATURE_LIST_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"race=([^"&]*)"[^>]*>\s*<img src="([^"]*)"[^>]*>\s*<div>([^<]*)</div>"#)
        .expect("CREATURE_LIST_ENTRY regex")
});

/// Display name in the header artwork title.
pub static BOOSTED_CREATURE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"title="[^"]*boosted creature: ([^"]*)""#).expect("BOOSTED_CREATURE_NAME regex")
});

/// Race id in the header artwork click handler.
pub static BOOSTED_CREATURE_RACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"race=([^'"&]*)"#).expect("BOOSTED_CREATURE_RACE regex")
});

pub static IMAGE_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"src="([^"]*)""#).expect("IMAGE_SOURCE regex")
});

// =============================================================================
// Spell Detail Patterns
// =============================================================================

/// Left label and right value of one key/value table row.
pub static SPELL_DATA_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<td[^>]*>([^<]*):</td>\s*<td[^>]*>(.*)</td>").expect("SPELL_DATA_ROW regex")
});

pub static SPELL_NAME_AND_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<td><img src="([^"]*)" width=.*<h2>(.*)</h2>"#)
        .expect("SPELL_NAME_AND_IMAGE regex")
});

/// Solo and group cooldown seconds: `2s (Group: 1s)`.
pub static SPELL_COOLDOWN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)s \(.*:.([0-9]+)s\)").expect("SPELL_COOLDOWN regex")
});

/// Description sentence in front of the first information caption.
///
/// Known defect: the box text breaks lines between the description and
/// the caption, so this rarely matches and descriptions come back empty.
/// When it does match, the heading text runs into the description.
pub static SPELL_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*)\.(Spell|Rune) InformationName:.*").expect("SPELL_DESCRIPTION regex")
});

// =============================================================================
// Spell List Patterns
// =============================================================================

/// Name, formula, group, type, level, mana, price and premium of one spell row.
pub static SPELL_LIST_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<td><a href="[^"]*spell=[^"]*">([^<]*)</a> \(([^<]*)\)</td>\s*<td>([^<]*)</td>\s*<td>([^<]*)</td>\s*<td>([^<]*)</td>\s*<td>([^<]*)</td>\s*<td>([^<]*)</td>\s*<td>([^<]*)</td>"#,
    )
    .expect("SPELL_LIST_ROW regex")
});

// =============================================================================
// World List Patterns
// =============================================================================

/// All-time player record and its date: `64,028 players (on Nov 28 2007, 19:26:00 CET)`.
pub static WORLDS_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Overall Maximum:</span>\s*([0-9,]+) players \(on ([^)]+)\)")
        .expect("WORLDS_RECORD regex")
});

/// Name, online count, location, PvP type, BattlEye cell and additional info.
pub static WORLD_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<td[^>]*><a href="[^"]*world=[^"]*">([^<]*)</a></td>\s*<td[^>]*>([^<]*)</td>\s*<td[^>]*>([^<]*)</td>\s*<td[^>]*>([^<]*)</td>\s*<td[^>]*>(.*)</td>\s*<td[^>]*>([^<]*)</td>"#,
    )
    .expect("WORLD_ROW regex")
});

pub static BATTLEYE_SINCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)protected by BattlEye since ([^."]*)"#).expect("BATTLEYE_SINCE regex")
});

// =============================================================================
// CSS Selectors
// =============================================================================

/// Main content box present on every regular page.
pub const BOX_CONTENT_SELECTOR: &str = ".BoxContent";

/// Captioned table container inside the content box.
pub const TABLE_CONTAINER_SELECTOR: &str = ".TableContainer";

/// Caption text of a table container.
pub const CAPTION_SELECTOR: &str = ".CaptionInnerContainer div.Text";

/// Key/value rows of spell and rune information tables.
pub const SPELL_ROW_SELECTOR: &str = "table.Table2 tr";

/// Rows of world list tables.
pub const WORLD_ROW_SELECTOR: &str = "table.TableContent tr";

/// Boosted creature artwork in the page header.
pub const BOOSTED_CREATURE_SELECTOR: &str = "img#Monster";
