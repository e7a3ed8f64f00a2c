/// Race and meeting identifiers are SQLite INTEGER (64-bit) keys.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
