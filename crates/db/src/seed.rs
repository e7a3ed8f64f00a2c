//! Demo data for bootstrapping an empty store.

use chrono::{Duration, DurationRound};
use racing_core::types::Timestamp;
use rand::seq::IndexedRandom;
use rand::Rng;
use sqlx::SqliteConnection;

use crate::models::race::CreateRace;
use crate::DbPool;

/// Default number of races written by the bootstrap seed.
pub const DEFAULT_SEED_COUNT: usize = 100;

/// Demo races start within this many hours either side of the anchor.
const START_WINDOW_HOURS: i64 = 48;

const NAME_WORDS: &[&str] = &[
    "Harbour", "Summit", "Golden", "Northern", "Silver", "Meadow", "Coastal", "Valley", "Royal",
    "Highland", "Sprint", "Stakes", "Plate", "Cup", "Classic", "Handicap", "Mile", "Derby",
];

/// Generate `count` random demo races around `anchor`.
///
/// Meetings fall in `1..=10`, race numbers in `1..=12`, roughly half are
/// visible, and start times are whole seconds.
pub fn demo_races(count: usize, anchor: Timestamp) -> Vec<CreateRace> {
    let mut rng = rand::rng();
    let anchor = anchor
        .duration_trunc(Duration::seconds(1))
        .unwrap_or(anchor);
    let window = START_WINDOW_HOURS * 3600;

    (0..count)
        .map(|_| {
            let first = NAME_WORDS.choose(&mut rng).copied().unwrap_or("Open");
            let second = NAME_WORDS.choose(&mut rng).copied().unwrap_or("Race");
            CreateRace {
                meeting_id: rng.random_range(1..=10),
                name: format!("{first} {second}"),
                number: rng.random_range(1..=12),
                visible: rng.random_bool(0.5),
                advertised_start_time: anchor
                    + Duration::seconds(rng.random_range(-window..=window)),
            }
        })
        .collect()
}

/// Insert `races` with bound parameters. Returns the number of rows written.
pub async fn insert_races(
    conn: &mut SqliteConnection,
    races: &[CreateRace],
) -> Result<u64, sqlx::Error> {
    let mut written = 0;
    for race in races {
        written += sqlx::query(
            "INSERT INTO races (meeting_id, name, number, visible, advertised_start_time) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(race.meeting_id)
        .bind(&race.name)
        .bind(race.number)
        .bind(race.visible)
        .bind(race.advertised_start_time)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(written)
}

/// Write `count` demo races in a single transaction.
///
/// Either every row lands or none does.
pub async fn seed_demo_races(pool: DbPool, count: usize) -> Result<(), sqlx::Error> {
    let races = demo_races(count, chrono::Utc::now());

    let mut tx = pool.begin().await?;
    let written = insert_races(&mut *tx, &races).await?;
    tx.commit().await?;

    tracing::info!(written, "Seeded demo races");
    Ok(())
}
