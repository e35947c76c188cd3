//! Error types for rs-tibiadata.
//!
//! This module defines the error types returned by extraction operations.
//! Numeric and list coercion never fail; they default to zero/empty and are
//! not represented here.

use crate::category::Category;

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The expected content container is absent.
    ///
    /// Usually the site is in maintenance mode or the requested entity
    /// (creature race, spell) does not exist.
    #[error("{category} content not found: {reason}")]
    NotFound {
        category: Category,
        reason: &'static str,
    },

    /// The container was found but a required pattern stage did not match.
    ///
    /// The site changed its markup or phrasing.
    #[error("{category} page shape mismatch at stage `{stage}`")]
    ShapeMismatch {
        category: Category,
        stage: &'static str,
    },

    /// The category name is not one of the supported categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl Error {
    /// Shorthand for [`Error::NotFound`].
    #[must_use]
    pub fn not_found(category: Category, reason: &'static str) -> Self {
        Self::NotFound { category, reason }
    }

    /// Shorthand for [`Error::ShapeMismatch`].
    #[must_use]
    pub fn shape_mismatch(category: Category, stage: &'static str) -> Self {
        Self::ShapeMismatch { category, stage }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
