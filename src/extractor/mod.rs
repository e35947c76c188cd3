//! Category extractors.
//!
//! Each extractor runs one page through the locator, its pattern cascade
//! and coercion, fills a fresh draft and assembles the record. Nothing is
//! carried between calls.
//!
//! # Module Structure
//!
//! - `creature`: creature detail page
//! - `creatures`: creature list with today's boosted creature
//! - `spell`: spell detail page with spell and rune information tables
//! - `spells`: spell list, optionally filtered by vocation
//! - `worlds`: world list with the all-time player record
//!
//! # Usage
//!
//! ```rust,ignore
//! use rs_tibiadata::{dom, extractor};
//!
//! let doc = dom::parse(html);
//! let worlds = extractor::worlds::extract(&doc)?;
//! ```

pub mod creature;
pub mod creatures;
pub mod spell;
pub mod spells;
pub mod worlds;
