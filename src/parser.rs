//! Field parsers for raw trip-log cells.

use chrono::NaiveDateTime;

use crate::error::{BikeshareError, Result};

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses a trip timestamp such as `2017-01-01 09:07:57`.
///
/// # Errors
///
/// Returns [`BikeshareError::MalformedRow`] naming `line` and `field` when no
/// known format matches.
pub fn parse_timestamp(raw: &str, line: u64, field: &'static str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| BikeshareError::MalformedRow {
            line,
            field,
            value: raw.to_string(),
        })
}

/// Parses a birth year cell. Empty cells are missing values; the source files
/// store years as floats (`1992.0`).
pub fn parse_birth_year(raw: &str, line: u64) -> Result<Option<i32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let malformed = || BikeshareError::MalformedRow {
        line,
        field: "Birth Year",
        value: raw.to_string(),
    };

    let year: f64 = trimmed.parse().map_err(|_| malformed())?;
    if !year.is_finite()
        || year.fract() != 0.0
        || !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&year)
    {
        return Err(malformed());
    }
    Ok(Some(year as i32))
}

/// Treats an empty cell as a missing value.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_timestamp_standard_format() {
        let ts = parse_timestamp("2017-05-22 07:09:31", 2, "Start Time").unwrap();
        assert_eq!(ts.month(), 5);
        assert_eq!(ts.day(), 22);
        assert_eq!(ts.hour(), 7);
        assert_eq!(ts.second(), 31);
    }

    #[test]
    fn test_parse_timestamp_fractional_and_t_separator() {
        assert!(parse_timestamp("2017-01-01 00:00:36.123", 2, "End Time").is_ok());
        assert!(parse_timestamp("2017-01-01T00:00:36", 2, "End Time").is_ok());
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        let err = parse_timestamp("not a date", 14, "Start Time").unwrap_err();
        match err {
            BikeshareError::MalformedRow { line, field, value } => {
                assert_eq!(line, 14);
                assert_eq!(field, "Start Time");
                assert_eq!(value, "not a date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_birth_year() {
        assert_eq!(parse_birth_year("1992.0", 2).unwrap(), Some(1992));
        assert_eq!(parse_birth_year("1985", 2).unwrap(), Some(1985));
        assert_eq!(parse_birth_year("", 2).unwrap(), None);
        assert_eq!(parse_birth_year("  ", 2).unwrap(), None);
        assert!(parse_birth_year("19x2", 2).is_err());
        assert!(parse_birth_year("1992.5", 2).is_err());
        assert!(parse_birth_year("1e12", 2).is_err());
        assert!(parse_birth_year("-1e12", 2).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(" Male "), Some("Male".to_string()));
        assert_eq!(optional_text(""), None);
    }
}
