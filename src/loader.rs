//! Loads a city's trip log into a [`TripTable`] and applies the month/day filters.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike, Weekday};
use csv::StringRecord;
use tracing::{debug, info};

use crate::error::{BikeshareError, Result};
use crate::filters::FilterSelection;
use crate::parser::{optional_text, parse_birth_year, parse_timestamp};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// One bikeshare ride.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    pub fn month(&self) -> u32 {
        self.start.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.start.weekday()
    }

    pub fn hour(&self) -> u32 {
        self.start.hour()
    }

    /// `end - start`; negative when the source row is inverted.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// `"<start> to <end>"`, only when both stations are present.
    pub fn route(&self) -> Option<String> {
        let start = self.start_station.as_deref()?;
        let end = self.end_station.as_deref()?;
        Some(format!("{start} to {end}"))
    }
}

/// Which optional columns the source file carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// Trips loaded for one session iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    pub schema: Schema,
    pub trips: Vec<TripRecord>,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keeps the rows matching both the month and the day restriction.
    pub fn filter(mut self, selection: &FilterSelection) -> Self {
        let month = selection.month.number();
        let day = selection.day.weekday();

        self.trips.retain(|trip| {
            month.is_none_or(|m| trip.month() == m) && day.is_none_or(|d| trip.weekday() == d)
        });
        self
    }
}

/// Header positions resolved once per load.
struct Columns {
    start_time: usize,
    end_time: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| {
            find(name).ok_or_else(|| BikeshareError::MissingColumn {
                column: name,
                path: path.to_path_buf(),
            })
        };

        Ok(Self {
            start_time: require(START_TIME)?,
            end_time: require(END_TIME)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: require(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    fn schema(&self) -> Schema {
        Schema {
            has_gender: self.gender.is_some(),
            has_birth_year: self.birth_year.is_some(),
        }
    }

    fn parse(&self, record: &StringRecord, line: u64) -> Result<TripRecord> {
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        Ok(TripRecord {
            start: parse_timestamp(cell(self.start_time), line, START_TIME)?,
            end: parse_timestamp(cell(self.end_time), line, END_TIME)?,
            start_station: optional_text(cell(self.start_station)),
            end_station: optional_text(cell(self.end_station)),
            user_type: optional_text(cell(self.user_type)),
            gender: self.gender.and_then(|idx| optional_text(cell(idx))),
            birth_year: match self.birth_year {
                Some(idx) => parse_birth_year(cell(idx), line)?,
                None => None,
            },
        })
    }
}

/// Reads every trip from a CSV stream. `path` is only used in error messages.
pub fn read_trips<R: Read>(reader: R, path: &Path) -> Result<TripTable> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::resolve(rdr.headers()?, path)?;

    let mut trips = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        trips.push(columns.parse(&record, line)?);
    }

    Ok(TripTable {
        schema: columns.schema(),
        trips,
    })
}

pub fn city_path(data_dir: &Path, selection: &FilterSelection) -> PathBuf {
    data_dir.join(selection.city.file_name())
}

/// Loads the selected city's file from `data_dir` and applies the filters.
///
/// # Errors
///
/// Fails when the file cannot be opened, a required column is missing, or any
/// row carries an unparsable timestamp or birth year.
#[tracing::instrument(skip(data_dir, selection), fields(city = %selection.city, month = %selection.month, day = %selection.day))]
pub fn load_table(data_dir: &Path, selection: &FilterSelection) -> Result<TripTable> {
    let path = city_path(data_dir, selection);
    debug!(path = %path.display(), "Opening trip log");

    let file = File::open(&path).map_err(|source| BikeshareError::DataLoad {
        path: path.clone(),
        source,
    })?;

    let table = read_trips(file, &path)?;
    let total = table.len();
    let table = table.filter(selection);

    info!(
        total,
        retained = table.len(),
        has_gender = table.schema.has_gender,
        has_birth_year = table.schema.has_birth_year,
        "Trip table loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{City, DayFilter, MonthFilter};
    use chrono::Month;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-05-01 08:00:00,2017-05-01 08:10:00,600,A,B,Subscriber,Male,1990.0
2,2017-05-02 09:00:00,2017-05-02 09:05:00,300,B,C,Customer,,
3,2017-06-05 17:30:00,2017-06-05 17:45:30,930,A,C,Subscriber,Female,1985.0
4,2017-01-02 07:00:00,2017-01-02 07:20:00,1200,C,A,Subscriber,Female,1992.0
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-03-06 10:00:00,2017-03-06 10:30:00,1800,X,Y,Registered
";

    fn load(csv: &str) -> TripTable {
        read_trips(csv.as_bytes(), Path::new("test.csv")).unwrap()
    }

    fn selection(month: MonthFilter, day: DayFilter) -> FilterSelection {
        FilterSelection::new(City::Chicago, month, day)
    }

    #[test]
    fn test_read_trips_with_optional_columns() {
        let table = load(CHICAGO);
        assert_eq!(table.len(), 4);
        assert!(table.schema.has_gender);
        assert!(table.schema.has_birth_year);

        let first = &table.trips[0];
        assert_eq!(first.start_station.as_deref(), Some("A"));
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1990));
        assert_eq!(first.duration(), TimeDelta::minutes(10));
        assert_eq!(first.route().as_deref(), Some("A to B"));

        let second = &table.trips[1];
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
    }

    #[test]
    fn test_read_trips_without_optional_columns() {
        let table = load(WASHINGTON);
        assert_eq!(table.schema, Schema::default());
        assert_eq!(table.trips[0].user_type.as_deref(), Some("Registered"));
    }

    #[test]
    fn test_empty_station_cells_are_missing_values() {
        let csv = "\
Start Time,End Time,Start Station,End Station,User Type
2017-05-01 08:00:00,2017-05-01 08:10:00,,B,Subscriber
2017-05-01 09:00:00,2017-05-01 09:10:00,A,  ,Subscriber
";
        let table = load(csv);
        assert_eq!(table.trips[0].start_station, None);
        assert_eq!(table.trips[0].end_station.as_deref(), Some("B"));
        assert_eq!(table.trips[0].route(), None);
        assert_eq!(table.trips[1].end_station, None);
        assert_eq!(table.trips[1].route(), None);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Start Time,End Time,Start Station\n2017-01-01 00:00:00,2017-01-01 00:01:00,A\n";
        let err = read_trips(csv.as_bytes(), Path::new("bad.csv")).unwrap_err();
        assert!(matches!(
            err,
            BikeshareError::MissingColumn {
                column: "End Station",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_timestamp_fails_whole_load() {
        let csv = format!("{CHICAGO}5,garbage,2017-05-01 08:10:00,600,A,B,Subscriber,Male,1990.0\n");
        let err = read_trips(csv.as_bytes(), Path::new("bad.csv")).unwrap_err();
        match err {
            BikeshareError::MalformedRow { line, field, .. } => {
                assert_eq!(line, 6);
                assert_eq!(field, START_TIME);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let table = load(CHICAGO);
        let filtered = table.clone().filter(&selection(MonthFilter::All, DayFilter::All));
        assert_eq!(filtered, table);
    }

    #[test]
    fn test_filter_by_month() {
        let filtered = load(CHICAGO).filter(&selection(
            MonthFilter::Only(Month::May),
            DayFilter::All,
        ));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.trips.iter().all(|t| t.month() == 5));
    }

    #[test]
    fn test_filter_by_month_and_day() {
        let filtered = load(CHICAGO).filter(&selection(
            MonthFilter::Only(Month::May),
            DayFilter::Only(Weekday::Mon),
        ));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.trips[0].month(), 5);
        assert_eq!(filtered.trips[0].weekday(), Weekday::Mon);
    }

    #[test]
    fn test_filter_by_day_only_spans_months() {
        let filtered = load(CHICAGO).filter(&selection(
            MonthFilter::All,
            DayFilter::Only(Weekday::Mon),
        ));
        assert_eq!(filtered.len(), 3);
        assert!(filtered.trips.iter().all(|t| t.weekday() == Weekday::Mon));
    }

    #[test]
    fn test_load_table_missing_file() {
        let err = load_table(
            Path::new("/nonexistent/bikeshare"),
            &selection(MonthFilter::All, DayFilter::All),
        )
        .unwrap_err();
        assert!(matches!(err, BikeshareError::DataLoad { .. }));
    }
}
