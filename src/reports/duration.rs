use chrono::TimeDelta;

use crate::loader::TripTable;
use crate::reports::types::DurationStats;

/// Total and mean of `end - start` over every row.
#[tracing::instrument(skip(table), fields(rows = table.len()))]
pub fn duration_stats(table: &TripTable) -> DurationStats {
    let total = table
        .trips
        .iter()
        .map(|t| t.duration())
        .fold(TimeDelta::zero(), |acc, d| acc + d);

    let trips = table.len();
    let mean = if trips == 0 {
        None
    } else {
        Some(TimeDelta::milliseconds(
            total.num_milliseconds() / trips as i64,
        ))
    };

    DurationStats { trips, total, mean }
}
