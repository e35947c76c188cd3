//! Page builders shared by the integration tests.
//!
//! Fixtures mirror the markup of live tibia.com pages closely enough for
//! every locator anchor and pattern to be exercised: the `.BoxContent`
//! wrapper, captioned `.TableContainer`s and the prose of creature pages.

#![allow(dead_code)]

/// Wrap content in a minimal tibia.com page with the given header.
pub fn page(header: &str, box_content: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Tibia</title></head>",
            "<body><div id=\"Header\">{}</div><div id=\"ContentColumn\"><div class=\"Box\">",
            "<div class=\"BoxContent\" style=\"background-image:url(x.gif);\">{}</div>",
            "</div></div></body></html>"
        ),
        header, box_content
    )
}

/// A captioned table container.
pub fn table_container(caption: &str, table_class: &str, rows: &str) -> String {
    format!(
        concat!(
            "<div class=\"TableContainer\"><div class=\"CaptionContainer\">",
            "<div class=\"CaptionInnerContainer\"><div class=\"Text\">{}</div></div></div>",
            "<table class=\"{}\"><tbody>{}</tbody></table></div>"
        ),
        caption, table_class, rows
    )
}

pub const MAINTENANCE_PAGE: &str = concat!(
    "<html><head><title>Tibia - Maintenance</title></head><body>",
    "<h1>Tibia is currently down for maintenance.</h1></body></html>"
);

// =============================================================================
// Creatures
// =============================================================================

pub fn creature_page(name: &str, description: &str, behaviour: &str, loot: &str) -> String {
    let content = format!(
        concat!(
            "<div class=\"Text\">Creatures</div>",
            "<div style=\"float:left;\"><h2 style=\"text-align: center;\">{name}</h2>",
            "<img src=\"https://static.tibia.com/images/library/{image}.gif\" width=\"64\" height=\"64\" />",
            "<br /><p>{description}</p><p>{behaviour}</p><p>{loot}</p></div>"
        ),
        name = name,
        image = name.to_lowercase().replace(' ', ""),
        description = description,
        behaviour = behaviour,
        loot = loot,
    );
    page("", &content)
}

pub fn demon_page() -> String {
    creature_page(
        "Demon",
        "Demons are among the most feared creatures.<br/>They are very strong.",
        concat!(
            "Demons have 8200 hitpoints. They are immune to fire damage and life drain. ",
            "Moreover, they are strong against death, earth and energy damage. ",
            "However, they are weak against holy and ice damage. ",
            "They cannot be paralysed. They can sense invisible creatures."
        ),
        concat!(
            "They yield 6000 experience points. They carry demonic essences, ",
            "fire axes, gold coins and sometimes other items with them."
        ),
    )
}

pub fn rat_page() -> String {
    creature_page(
        "Rat",
        "Rats are plague carriers.",
        "Rats have 20 hitpoints. It takes 200 mana to summon or convince these creatures.",
        "They yield 5 experience points and carry cheese and sometimes other items with them.",
    )
}

pub fn creature_list_row(name: &str, race: &str) -> String {
    format!(
        concat!(
            "<div style=\"float: left;\"><a href=\"https://www.tibia.com/library/?subtopic=creatures&race={race}\">",
            "<img src=\"https://static.tibia.com/images/library/{race}.gif\" border=\"0\" />",
            "<div>{name}</div></a></div>"
        ),
        race = race,
        name = name
    )
}

pub fn creatures_page(boosted: Option<(&str, &str)>, rows: &[(&str, &str)]) -> String {
    let header = boosted.map_or_else(String::new, |(name, race)| {
        format!(
            concat!(
                "<img id=\"Monster\" src=\"https://static.tibia.com/images/global/header/monsters/{race}.gif\" ",
                "onclick=\"window.location = 'https://www.tibia.com/library/?subtopic=creatures&race={race}';\" ",
                "alt=\"Monster of the Day\" title=\"Today's boosted creature: {name}\" />"
            ),
            race = race,
            name = name
        )
    });
    let list: String = rows
        .iter()
        .map(|(name, race)| creature_list_row(name, race))
        .collect();
    page(&header, &format!("<div class=\"Text\">Creatures</div>{list}"))
}

// =============================================================================
// Spells
// =============================================================================

pub fn spell_rows(rows: &[(&str, &str)]) -> String {
    rows.iter()
        .map(|(label, value)| {
            format!("<tr><td class=\"LabelV\">{label}:</td><td style=\"width:90%;\">{value}</td></tr>")
        })
        .collect()
}

pub fn spell_page(name: &str, image: &str, description: &str, tables: &str) -> String {
    let content = format!(
        concat!(
            "<table><tr><td><img src=\"https://static.tibia.com/images/library/{image}.png\" width=64 height=64 /></td>",
            "<td><h2>{name}</h2></td></tr></table>",
            "<p>{description}</p>{tables}"
        ),
        image = image,
        name = name,
        description = description,
        tables = tables
    );
    page("", &content)
}

pub fn fire_bomb_page() -> String {
    let spell = table_container(
        "Spell Information",
        "Table2",
        &spell_rows(&[
            ("Name", "Fire Bomb Rune"),
            ("Formula", "adevo mas flam"),
            ("Vocation", "Druid, Sorcerer"),
            ("Group", "Support"),
            ("Type", "Rune"),
            ("Cooldown", "2s (Group: 2s)"),
            ("Soul Points", "4"),
            ("Amount", "2"),
            ("Exp Lvl", "27"),
            ("Mana", "600"),
            ("Price", "1,500 gold"),
            ("City", "Ab'Dendriel, Carlin, Edron, Thais"),
            ("Premium", "yes"),
        ]),
    );
    let rune = table_container(
        "Rune Information",
        "Table2",
        &spell_rows(&[
            ("Name", "Fire Bomb Rune"),
            ("Vocation", "Druid, Paladin, Sorcerer"),
            ("Group", "Attack"),
            ("Magic Type", "Fire"),
            ("Exp Lvl", "27"),
            ("Mag Lvl", "5"),
        ]),
    );
    spell_page("Fire Bomb Rune", "adevomasflam", "Creates a field of fire.", &format!("{spell}{rune}"))
}

pub fn light_healing_page() -> String {
    let spell = table_container(
        "Spell Information",
        "Table2",
        &spell_rows(&[
            ("Name", "Light Healing"),
            ("Formula", "exura"),
            ("Vocation", "Druid, Knight, Paladin, Sorcerer"),
            ("Group", "Healing"),
            ("Type", "Instant"),
            ("Cooldown", "1s (Group: 1s)"),
            ("Exp Lvl", "8"),
            ("Mana", "20"),
            ("Price", "free"),
            ("City", "Carlin"),
            ("Premium", "no"),
        ]),
    );
    spell_page("Light Healing", "exura", "Heals a small amount of health.", &spell)
}

pub struct SpellRow<'a> {
    pub name: &'a str,
    pub formula: &'a str,
    pub group: &'a str,
    pub kind: &'a str,
    pub level: &'a str,
    pub mana: &'a str,
    pub price: &'a str,
    pub premium: &'a str,
}

pub fn spells_page(rows: &[SpellRow<'_>]) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            format!(
                concat!(
                    "<tr class=\"Odd\"><td><a href=\"https://www.tibia.com/library/?subtopic=spells&spell={id}\">{name}</a> ({formula})</td>",
                    "<td>{group}</td><td>{kind}</td><td>{level}</td><td>{mana}</td><td>{price}</td><td>{premium}</td></tr>"
                ),
                id = row.name.to_lowercase().replace(' ', ""),
                name = row.name,
                formula = row.formula,
                group = row.group,
                kind = row.kind,
                level = row.level,
                mana = row.mana,
                price = row.price,
                premium = row.premium
            )
        })
        .collect();
    let header = concat!(
        "<tr class=\"LabelH\"><td>Name</td><td>Group</td><td>Type</td>",
        "<td>Exp Lvl</td><td>Mana</td><td>Price</td><td>Premium</td></tr>"
    );
    page(
        "",
        &table_container("Spells", "TableContent", &format!("{header}{body}")),
    )
}

// =============================================================================
// Worlds
// =============================================================================

pub struct WorldRow<'a> {
    pub name: String,
    pub online: &'a str,
    pub location: &'a str,
    pub pvp: &'a str,
    /// Tooltip text of the BattlEye indicator; empty when unprotected.
    pub battleye: &'a str,
    pub info: &'a str,
}

impl WorldRow<'_> {
    pub fn filler(index: usize) -> Self {
        WorldRow {
            name: format!("Filler{index:02}"),
            online: "100",
            location: "Europe",
            pvp: "Open PvP",
            battleye: "Protected by BattlEye since its release.",
            info: "",
        }
    }
}

fn world_row(row: &WorldRow<'_>) -> String {
    let battleye = if row.battleye.is_empty() {
        String::new()
    } else {
        format!(
            concat!(
                "<span class=\"HelperDivIndicator\" onmouseover=\"ActivateHelperDiv($(this), '', ",
                "'<p>{}</p>', '');\"><img src=\"https://static.tibia.com/images/global/content/icon_battleye.gif\" /></span>"
            ),
            row.battleye
        )
    };
    format!(
        concat!(
            "<tr class=\"Odd\"><td style=\"width: 150px;\">",
            "<a href=\"https://www.tibia.com/community/?subtopic=worlds&world={name}\">{name}</a></td>",
            "<td style=\"width: 80px; text-align: right;\">{online}</td>",
            "<td style=\"width: 160px;\">{location}</td>",
            "<td style=\"width: 150px;\">{pvp}</td>",
            "<td style=\"text-align: center;\">{battleye}</td>",
            "<td>{info}</td></tr>"
        ),
        name = row.name,
        online = row.online,
        location = row.location,
        pvp = row.pvp,
        battleye = battleye,
        info = row.info
    )
}

fn world_table(caption: &str, rows: &[WorldRow<'_>]) -> String {
    let header = concat!(
        "<tr class=\"LabelH\"><td>World</td><td>Online</td><td>Location</td>",
        "<td>PvP Type</td><td>BattlEye</td><td>Additional Information</td></tr>"
    );
    let body: String = rows.iter().map(world_row).collect();
    table_container(caption, "TableContent", &format!("{header}{body}"))
}

pub fn worlds_page(regular: &[WorldRow<'_>], tournament: &[WorldRow<'_>]) -> String {
    let overview = table_container(
        "World Selection",
        "TableContent",
        concat!(
            "<tr><td><span class=\"InnerTableContainerLabel\">Overall Maximum:</span> ",
            "64,028 players (on Nov 28 2007, 19:26:00 CET)</td></tr>"
        ),
    );
    let mut content = overview;
    content.push_str(&world_table("Regular Worlds", regular));
    if !tournament.is_empty() {
        content.push_str(&world_table("Tournament Worlds", tournament));
    }
    page("", &content)
}

/// 76 regular and 6 tournament worlds with hand-written rows at the
/// positions the tests inspect.
pub fn full_worlds_page() -> String {
    let regular: Vec<WorldRow<'_>> = (0..76)
        .map(|i| match i {
            0 => WorldRow {
                name: "Adra".to_string(),
                online: "18",
                location: "Europe",
                pvp: "Open PvP",
                battleye: "Protected by BattlEye since its release.",
                info: "blocked",
            },
            4 => WorldRow {
                name: "Astera".to_string(),
                online: "222",
                location: "North America",
                pvp: "Optional PvP",
                battleye: "Protected by BattlEye since September 12, 2017.",
                info: "",
            },
            50 => WorldRow {
                name: "Premia".to_string(),
                online: "off",
                location: "Europe",
                pvp: "Open PvP",
                battleye: "Protected by BattlEye since September 5, 2017.",
                info: "premium",
            },
            74 => WorldRow {
                name: "Zuna".to_string(),
                online: "5",
                location: "Europe",
                pvp: "Hardcore PvP",
                battleye: "",
                info: "experimental, locked",
            },
            _ => WorldRow::filler(i),
        })
        .collect();

    let tournament: Vec<WorldRow<'_>> = (0..6)
        .map(|i| match i {
            1 => WorldRow {
                name: "Endera".to_string(),
                online: "-",
                location: "North America",
                pvp: "Optional PvP",
                battleye: "Protected by BattlEye since its release.",
                info: "blocked, premium, restricted",
            },
            _ => WorldRow {
                name: format!("Tournament{i}"),
                ..WorldRow::filler(i)
            },
        })
        .collect();

    worlds_page(&regular, &tournament)
}

/// Sum of the online counts in [`full_worlds_page`].
pub const FULL_WORLDS_PLAYERS_ONLINE: i64 = 18 + 222 + 5 + 72 * 100 + 5 * 100;
