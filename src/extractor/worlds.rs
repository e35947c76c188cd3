//! World list extraction.
//!
//! The world list has a header with the all-time player record and two
//! captioned tables, regular and tournament worlds. Row columns are name,
//! online count, location, PvP type, BattlEye indicator and additional
//! information (premium, transfer restrictions, world kind).

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use dom_query::Document;

use crate::assemble::WorldsDraft;
use crate::cascade::{self, CaptureSet};
use crate::category::Category;
use crate::coerce::to_int;
use crate::envelope::format_timestamp;
use crate::error::Result;
use crate::patterns::{BATTLEYE_SINCE, WORLDS_RECORD, WORLD_ROW};
use crate::record::{WorldEntry, WorldsOverview};
use crate::sanitize::sanitize_escaped_string;
use crate::selector::{locate_worlds, Section};

const CATEGORY: Category = Category::Worlds;

/// Extract the world list and the all-time player record.
///
/// # Errors
///
/// [`Error::NotFound`](crate::Error::NotFound) without a content box or
/// regular worlds table (maintenance page),
/// [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) when the player
/// record line does not parse.
pub fn extract(doc: &Document) -> Result<WorldsOverview> {
    let fragments = locate_worlds(doc)?;
    let record = cascade::require(
        &WORLDS_RECORD,
        fragments.overview.as_str(),
        CATEGORY,
        "player record",
    )?;

    let mut draft = WorldsDraft {
        record_players: to_int(record.get(1)),
        record_date: parse_record_date(record.get(2)).unwrap_or_default(),
        ..WorldsDraft::default()
    };

    for container in &fragments.sections {
        let worlds = match container.section {
            Section::RegularWorlds => &mut draft.regular_worlds,
            Section::TournamentWorlds => &mut draft.tournament_worlds,
            _ => continue,
        };
        let tournament = container.section == Section::TournamentWorlds;
        worlds.extend(
            container
                .rows
                .iter()
                .filter_map(|row| cascade::first(&WORLD_ROW, row.as_str()))
                .map(|cells| world_entry(&cells, tournament)),
        );
    }

    tracing::debug!(
        regular = draft.regular_worlds.len(),
        tournament = draft.tournament_worlds.len(),
        "world list extracted"
    );
    Ok(draft.assemble())
}

fn world_entry(cells: &CaptureSet<'_>, tournament: bool) -> WorldEntry {
    let online = cells.get(2).trim();
    let info = cells.get(6);
    let (battleye_protected, battleye_date) = battleye(cells.get(5));

    WorldEntry {
        name: sanitize_escaped_string(cells.get(1)).trim().to_string(),
        status: world_status(online).to_string(),
        players_online: to_int(online),
        location: sanitize_escaped_string(cells.get(3)).trim().to_string(),
        pvp_type: sanitize_escaped_string(cells.get(4)).trim().to_string(),
        premium_only: info.contains("premium"),
        transfer_type: transfer_type(info).to_string(),
        battleye_protected,
        battleye_date,
        game_world_type: game_world_type(info, tournament).to_string(),
        tournament_world_type: tournament_world_type(info, tournament).to_string(),
    }
}

fn world_status(online: &str) -> &'static str {
    if !online.is_empty() && online.chars().all(|c| c.is_ascii_digit() || c == ',') {
        "online"
    } else if online == "off" {
        "offline"
    } else {
        "unknown"
    }
}

fn transfer_type(info: &str) -> &'static str {
    if info.contains("blocked") {
        "blocked"
    } else if info.contains("locked") {
        "locked"
    } else {
        "regular"
    }
}

fn game_world_type(info: &str, tournament: bool) -> &'static str {
    if tournament {
        "tournament"
    } else if info.contains("experimental") {
        "experimental"
    } else {
        "regular"
    }
}

fn tournament_world_type(info: &str, tournament: bool) -> &'static str {
    match (tournament, info.contains("restricted")) {
        (false, _) => "",
        (true, true) => "restricted",
        (true, false) => "regular",
    }
}

/// Protection flag and date from the BattlEye cell: `release`, an ISO
/// date, or unprotected.
fn battleye(cell: &str) -> (bool, String) {
    let Some(since) = cascade::first(&BATTLEYE_SINCE, cell) else {
        return (false, String::new());
    };
    let since = since.get(1).trim();
    if since.ends_with("release") {
        return (true, "release".to_string());
    }
    let date = NaiveDate::parse_from_str(since, "%B %d, %Y")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| {
            tracing::debug!(since, "unrecognized BattlEye date");
            since.to_string()
        });
    (true, date)
}

/// Convert `Nov 28 2007, 19:26:00 CET` into an RFC 3339 UTC timestamp.
fn parse_record_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let (local, zone) = raw.rsplit_once(' ')?;
    let offset_hours = match zone {
        "CET" => 1,
        "CEST" => 2,
        "UTC" | "GMT" => 0,
        _ => {
            tracing::debug!(zone, "unknown time zone in player record");
            return None;
        }
    };

    let naive = NaiveDateTime::parse_from_str(local, "%b %d %Y, %H:%M:%S").ok()?;
    let offset = FixedOffset::east_opt(offset_hours * 3600)?;
    let local = offset.from_local_datetime(&naive).single()?;
    Some(format_timestamp(local.with_timezone(&Utc)))
}
