use crate::loader::TripTable;
use crate::reports::types::StationStats;
use crate::reports::utility::mode;

/// Most common start station, end station and start-to-end route. Empty
/// station cells are skipped.
#[tracing::instrument(skip(table), fields(rows = table.len()))]
pub fn station_stats(table: &TripTable) -> StationStats {
    StationStats {
        most_common_start_station: mode(
            table
                .trips
                .iter()
                .filter_map(|t| t.start_station.as_deref()),
        )
        .map(str::to_string),
        most_common_end_station: mode(table.trips.iter().filter_map(|t| t.end_station.as_deref()))
            .map(str::to_string),
        most_common_route: mode(table.trips.iter().filter_map(|t| t.route())),
    }
}
