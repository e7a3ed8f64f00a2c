//! Query composition for race listings.
//!
//! Caller-supplied values (meeting ids) are only ever bound as `?`
//! parameters. Literal SQL text is emitted only for closed enums
//! (visibility, sort key, sort direction).

use racing_core::racing::{RaceFilter, SortBy, SortDirection, SortSpec};
use racing_core::types::DbId;

/// Column list for `races` SELECT queries, in `Race` field order.
pub const COLUMNS: &str = "id, meeting_id, name, number, visible, advertised_start_time";

/// A statement and its positional arguments.
///
/// `args[i]` binds to the `i`-th `?` placeholder in `sql`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedQuery {
    pub sql: String,
    pub args: Vec<DbId>,
}

/// The trusted base statement selecting every race column.
pub fn base_list_query() -> String {
    format!("SELECT {COLUMNS} FROM races")
}

/// Append the filter clauses, then the ordering, to `base`.
pub fn compose(base: &str, filter: Option<&RaceFilter>, sort: SortSpec) -> ComposedQuery {
    let (sql, args) = apply_filter(base, filter);
    let sql = apply_sort(sql, sort);
    ComposedQuery { sql, args }
}

/// Build the WHERE clause for `filter`.
///
/// Returns the extended statement and the bind values in placeholder order.
/// No WHERE is emitted when the filter is absent or has no active clause.
pub fn apply_filter(base: &str, filter: Option<&RaceFilter>) -> (String, Vec<DbId>) {
    let mut query = base.to_string();
    let Some(filter) = filter else {
        return (query, Vec::new());
    };

    let mut conditions: Vec<String> = Vec::new();
    let mut bind_values: Vec<DbId> = Vec::new();

    if !filter.meeting_ids.is_empty() {
        let placeholders = vec!["?"; filter.meeting_ids.len()].join(", ");
        conditions.push(format!("meeting_id IN ({placeholders})"));
        bind_values.extend_from_slice(&filter.meeting_ids);
    }

    if filter.visible_only() {
        conditions.push("visible = 1".to_string());
    }

    if !conditions.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&conditions.join(" AND "));
    }

    (query, bind_values)
}

/// Append the ORDER BY clause for `sort`.
///
/// Every ordering ends with `id ASC` so equal start times come back in the
/// same order on every run. An unspecified key appends nothing; resolve
/// defaults with [`SortSpec::with_defaults`] first.
pub fn apply_sort(mut query: String, sort: SortSpec) -> String {
    match sort.sort_by {
        SortBy::AdvertisedStartTime => {
            let order = match sort.direction {
                SortDirection::Descending => "DESC",
                SortDirection::Ascending | SortDirection::Unspecified => "ASC",
            };
            query.push_str(&format!(" ORDER BY advertised_start_time {order}, id ASC"));
        }
        SortBy::Unspecified => {}
    }
    query
}
