//! The four trip-table reports.
//!
//! Each generator is a pure function over a filtered [`TripTable`] returning a
//! result struct from [`types`]; rendering lives in [`crate::output`].
//! "Most common" ties resolve to the smallest value (see [`utility::mode`]).

pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

use serde::Serialize;

use crate::loader::TripTable;
use types::{DurationStats, StationStats, TimeStats, UserStats};

/// Report kinds in the order a session prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Time,
    Station,
    Duration,
    Users,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Time,
        ReportKind::Station,
        ReportKind::Duration,
        ReportKind::Users,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            ReportKind::Time => "Calculating The Most Frequent Times of Travel...",
            ReportKind::Station => "Calculating The Most Popular Stations and Trip...",
            ReportKind::Duration => "Calculating Trip Duration...",
            ReportKind::Users => "Calculating User Stats...",
        }
    }

    pub fn run(self, table: &TripTable) -> Report {
        match self {
            ReportKind::Time => Report::Time(time::time_stats(table)),
            ReportKind::Station => Report::Station(station::station_stats(table)),
            ReportKind::Duration => Report::Duration(duration::duration_stats(table)),
            ReportKind::Users => Report::Users(users::user_stats(table)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Time(TimeStats),
    Station(StationStats),
    Duration(DurationStats),
    Users(UserStats),
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Time(_) => ReportKind::Time,
            Report::Station(_) => ReportKind::Station,
            Report::Duration(_) => ReportKind::Duration,
            Report::Users(_) => ReportKind::Users,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_matches_kind() {
        let table = TripTable::default();
        for kind in ReportKind::ALL {
            assert_eq!(kind.run(&table).kind(), kind);
        }
    }
}
