//! Pattern cascade: ordered matching with nested re-matching.
//!
//! Each stage is a pure function `fragment → Option<CaptureSet>`. Later
//! stages run against a group of an earlier [`CaptureSet`] through
//! [`CaptureSet::refine`], so no scratch state is kept between stages.

use regex::{Captures, Regex};

use crate::category::Category;
use crate::error::{Error, Result};

/// Substrings produced by one successful match.
///
/// Borrows the fragment it was matched against and is consumed right away,
/// either to fill record fields or to seed the next stage.
#[derive(Debug)]
pub struct CaptureSet<'t> {
    captures: Captures<'t>,
}

impl<'t> CaptureSet<'t> {
    /// Group `index`, or `""` when the group did not participate.
    #[must_use]
    pub fn get(&self, index: usize) -> &'t str {
        self.captures.get(index).map_or("", |m| m.as_str())
    }

    /// Run `pattern` against group `index` of this set.
    #[must_use]
    pub fn refine(&self, index: usize, pattern: &Regex) -> Option<CaptureSet<'t>> {
        first(pattern, self.get(index))
    }
}

/// First match of `pattern` in `fragment`.
#[must_use]
pub fn first<'t>(pattern: &Regex, fragment: &'t str) -> Option<CaptureSet<'t>> {
    pattern.captures(fragment).map(|captures| CaptureSet { captures })
}

/// Every non-overlapping match of `pattern` in `fragment`, in order.
#[must_use]
pub fn all<'t>(pattern: &Regex, fragment: &'t str) -> Vec<CaptureSet<'t>> {
    pattern
        .captures_iter(fragment)
        .map(|captures| CaptureSet { captures })
        .collect()
}

/// First match of a stage the record cannot do without.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] naming `stage` when nothing matches.
pub fn require<'t>(
    pattern: &Regex,
    fragment: &'t str,
    category: Category,
    stage: &'static str,
) -> Result<CaptureSet<'t>> {
    first(pattern, fragment).ok_or_else(|| {
        tracing::warn!(%category, stage, "required pattern did not match");
        Error::shape_mismatch(category, stage)
    })
}
