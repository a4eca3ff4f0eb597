//! Allowed cities, months and weekdays, and the per-session filter selection.

use std::fmt;
use std::str::FromStr;

use chrono::{Month, Weekday};

use crate::error::BikeshareError;

/// Months covered by the trip logs, in calendar order.
pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday ("Monday", not chrono's "Mon").
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Capitalizes the first letter of every whitespace-separated word.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Source file name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Lowercase name as typed at the prompt.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&title_case(self.key()))
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|city| city.key() == wanted)
            .ok_or(BikeshareError::InvalidSelection {
                kind: "city",
                value: wanted,
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// 1-based month index the loader compares against, `None` for "all".
    pub fn number(self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Only(m) => Some(m.number_from_month()),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(m) => f.write_str(m.name()),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(MonthFilter::All);
        }
        MONTHS
            .into_iter()
            .find(|m| m.name().to_lowercase() == wanted)
            .map(MonthFilter::Only)
            .ok_or(BikeshareError::InvalidSelection {
                kind: "month",
                value: wanted,
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn weekday(self) -> Option<Weekday> {
        match self {
            DayFilter::All => None,
            DayFilter::Only(d) => Some(d),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).to_lowercase() == wanted)
            .map(DayFilter::Only)
            .ok_or(BikeshareError::InvalidSelection {
                kind: "day of week",
                value: wanted,
            })
    }
}

/// City plus month/day restrictions chosen for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_parse_is_case_insensitive() {
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!(
            "  NEW YORK CITY ".parse::<City>().unwrap(),
            City::NewYorkCity
        );
        assert_eq!("washington".parse::<City>().unwrap(), City::Washington);
    }

    #[test]
    fn test_city_parse_rejects_unknown() {
        let err = "boston".parse::<City>().unwrap_err();
        assert!(matches!(
            err,
            BikeshareError::InvalidSelection { kind: "city", .. }
        ));
    }

    #[test]
    fn test_city_display_and_file_name() {
        assert_eq!(City::NewYorkCity.to_string(), "New York City");
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
    }

    #[test]
    fn test_month_parse() {
        assert_eq!("all".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!(
            "May".parse::<MonthFilter>().unwrap(),
            MonthFilter::Only(Month::May)
        );
        assert_eq!("june".parse::<MonthFilter>().unwrap().number(), Some(6));
        assert_eq!("january".parse::<MonthFilter>().unwrap().number(), Some(1));
    }

    #[test]
    fn test_month_outside_first_half_is_rejected() {
        assert!("july".parse::<MonthFilter>().is_err());
        assert!("december".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_day_parse() {
        assert_eq!("ALL".parse::<DayFilter>().unwrap(), DayFilter::All);
        assert_eq!(
            "monday".parse::<DayFilter>().unwrap(),
            DayFilter::Only(Weekday::Mon)
        );
        assert_eq!(
            "Sunday".parse::<DayFilter>().unwrap().weekday(),
            Some(Weekday::Sun)
        );
        assert!("mon".parse::<DayFilter>().is_err());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("new york city"), "New York City");
        assert_eq!(title_case("all"), "All");
        assert_eq!(title_case(""), "");
    }
}
