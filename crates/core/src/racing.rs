//! Request value objects for listing races.
//!
//! Filters and sort specs are built once per request and never mutated
//! afterwards. The wire names of every enum are SCREAMING_SNAKE_CASE so the
//! JSON body and the query string share one vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which races are eligible with respect to their `visible` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// No restriction.
    #[default]
    Unspecified,
    /// No restriction, stated explicitly.
    Any,
    /// Only races with `visible = true`.
    VisibleOnly,
}

/// Field used as the primary ordering key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    #[default]
    Unspecified,
    AdvertisedStartTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    #[default]
    Unspecified,
    Ascending,
    Descending,
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Criteria restricting which races a listing returns.
///
/// An empty `meeting_ids` list means "any meeting".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceFilter {
    pub meeting_ids: Vec<DbId>,
    pub visibility: Visibility,
}

impl RaceFilter {
    pub fn visible_only(&self) -> bool {
        self.visibility == Visibility::VisibleOnly
    }
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Key and direction controlling result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub sort_by: SortBy,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(sort_by: SortBy, direction: SortDirection) -> Self {
        Self { sort_by, direction }
    }

    /// Replace unspecified values with the listing defaults:
    /// advertised start time, ascending.
    pub fn with_defaults(self) -> Self {
        let sort_by = match self.sort_by {
            SortBy::Unspecified => SortBy::AdvertisedStartTime,
            other => other,
        };
        let direction = match self.direction {
            SortDirection::Unspecified => SortDirection::Ascending,
            other => other,
        };
        Self { sort_by, direction }
    }
}

// ---------------------------------------------------------------------------
// Query string helpers
// ---------------------------------------------------------------------------

/// Parse a comma-separated list of meeting ids (`"3,5"`).
///
/// Blank entries are skipped so `"3,"` and `""` are accepted. Any other
/// entry that is not an integer is a validation error.
pub fn parse_meeting_ids(raw: &str) -> Result<Vec<DbId>, CoreError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<DbId>()
                .map_err(|_| CoreError::Validation(format!("Invalid meeting id '{s}'")))
        })
        .collect()
}
