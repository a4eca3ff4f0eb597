use crate::filters::{WEEKDAYS, weekday_name};
use crate::loader::TripTable;
use crate::reports::types::TimeStats;
use crate::reports::utility::mode;

/// Most common month, weekday and start hour.
#[tracing::instrument(skip(table), fields(rows = table.len()))]
pub fn time_stats(table: &TripTable) -> TimeStats {
    let weekday = mode(
        table
            .trips
            .iter()
            .map(|t| t.weekday().num_days_from_monday()),
    )
    .map(|idx| weekday_name(WEEKDAYS[idx as usize]).to_string());

    TimeStats {
        most_common_month: mode(table.trips.iter().map(|t| t.month())),
        most_common_weekday: weekday,
        most_common_hour: mode(table.trips.iter().map(|t| t.hour())),
    }
}
