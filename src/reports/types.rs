//! Report results. Every "most common" value is optional because a filter
//! combination can leave the table empty.

use chrono::TimeDelta;
use serde::{Serialize, Serializer};

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    /// 1-based month number.
    pub most_common_month: Option<u32>,
    pub most_common_weekday: Option<String>,
    pub most_common_hour: Option<u32>,
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub most_common_start_station: Option<String>,
    pub most_common_end_station: Option<String>,
    /// `"<start> to <end>"`.
    pub most_common_route: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    #[serde(serialize_with = "seconds")]
    pub total: TimeDelta,
    #[serde(serialize_with = "optional_seconds")]
    pub mean: Option<TimeDelta>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub latest: Option<i32>,
    pub most_common: Option<i32>,
}

/// Demographics. `None` for `gender`/`birth_year` means the city's file has
/// no such column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub gender: Option<Vec<(String, usize)>>,
    pub birth_year: Option<BirthYearStats>,
}

/// Serializes durations as fractional seconds.
fn seconds<S: Serializer>(delta: &TimeDelta, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(delta.num_milliseconds() as f64 / 1000.0)
}

fn optional_seconds<S: Serializer>(delta: &Option<TimeDelta>, s: S) -> Result<S::Ok, S::Error> {
    match delta {
        Some(d) => seconds(d, s),
        None => s.serialize_none(),
    }
}
