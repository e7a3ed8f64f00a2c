//! Race entity model and seed DTO.

use racing_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `races` table. Read-only once stored.
///
/// Field order matches the column order of the listing query.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Race {
    pub id: DbId,
    pub meeting_id: DbId,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
}

/// DTO for inserting a race during bootstrap. The store assigns `id`.
#[derive(Debug, Clone)]
pub struct CreateRace {
    pub meeting_id: DbId,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
}
