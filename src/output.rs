//! Rendering of reports to the console.
//!
//! Supports the human-readable text layout and one JSON object per report.

use std::io::Write;
use std::time::Duration;

use chrono::{Month, TimeDelta};
use tracing::debug;

use crate::error::Result;
use crate::input::SEPARATOR;
use crate::reports::Report;
use crate::reports::types::{DurationStats, StationStats, TimeStats, UserStats};

pub const NO_DATA: &str = "No data available for the selected filters.";
pub const GENDER_UNAVAILABLE: &str = "Gender information is not available for this city";
pub const BIRTH_YEAR_UNAVAILABLE: &str = "Year of birth information is not available for this city";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Formats a span as `D days HH:MM:SS`, with milliseconds when non-zero.
pub fn format_duration(delta: TimeDelta) -> String {
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let delta = delta.abs();

    let days = delta.num_days();
    let hours = delta.num_hours() % 24;
    let minutes = delta.num_minutes() % 60;
    let seconds = delta.num_seconds() % 60;
    let millis = delta.num_milliseconds() % 1000;

    let unit = if days == 1 { "day" } else { "days" };
    if millis == 0 {
        format!("{sign}{days} {unit} {hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{sign}{days} {unit} {hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
    }
}

fn month_label(number: u32) -> String {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map_or_else(|| number.to_string(), |m| m.name().to_string())
}

fn write_most_common<W: Write, T: ToString>(out: &mut W, label: &str, value: Option<T>) -> Result<()> {
    match value {
        Some(v) => writeln!(out, "The most common {label} is: {}", v.to_string())?,
        None => writeln!(out, "The most common {label} is: {NO_DATA}")?,
    }
    Ok(())
}

fn write_time<W: Write>(out: &mut W, stats: &TimeStats) -> Result<()> {
    write_most_common(out, "month", stats.most_common_month.map(month_label))?;
    write_most_common(out, "day of week", stats.most_common_weekday.as_deref())?;
    write_most_common(out, "hour of the day", stats.most_common_hour)?;
    Ok(())
}

fn write_station<W: Write>(out: &mut W, stats: &StationStats) -> Result<()> {
    write_most_common(out, "start station", stats.most_common_start_station.as_deref())?;
    write_most_common(out, "end station", stats.most_common_end_station.as_deref())?;
    write_most_common(
        out,
        "combination of start station and end station trip",
        stats.most_common_route.as_deref(),
    )?;
    Ok(())
}

fn write_duration<W: Write>(out: &mut W, stats: &DurationStats) -> Result<()> {
    writeln!(out, "The total travel time is: {}", format_duration(stats.total))?;
    match stats.mean {
        Some(mean) => writeln!(out, "The average travel time is: {}", format_duration(mean))?,
        None => writeln!(out, "The average travel time is: {NO_DATA}")?,
    }
    Ok(())
}

fn write_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> Result<()> {
    if counts.is_empty() {
        writeln!(out, "    {NO_DATA}")?;
    }
    for (label, n) in counts {
        writeln!(out, "    {label}: {n}")?;
    }
    Ok(())
}

fn write_year<W: Write>(out: &mut W, label: &str, year: Option<i32>) -> Result<()> {
    match year {
        Some(y) => writeln!(out, "The {label} birth year is: {y}")?,
        None => writeln!(out, "The {label} birth year is: {NO_DATA}")?,
    }
    Ok(())
}

fn write_users<W: Write>(out: &mut W, stats: &UserStats) -> Result<()> {
    writeln!(out, "The number of users by type is:")?;
    write_counts(out, &stats.user_types)?;

    match &stats.gender {
        Some(counts) => {
            writeln!(out, "The number of users by gender is:")?;
            write_counts(out, counts)?;
        }
        None => writeln!(out, "{GENDER_UNAVAILABLE}")?,
    }

    match &stats.birth_year {
        Some(years) => {
            write_year(out, "earliest", years.earliest)?;
            write_year(out, "most recent", years.latest)?;
            write_year(out, "most common", years.most_common)?;
        }
        None => {
            for _ in 0..3 {
                writeln!(out, "{BIRTH_YEAR_UNAVAILABLE}")?;
            }
        }
    }
    Ok(())
}

/// Writes the heading, body and optional timing footer of one report.
pub fn write_text<W: Write>(out: &mut W, report: &Report, elapsed: Option<Duration>) -> Result<()> {
    writeln!(out, "\n{}\n", report.kind().heading())?;

    match report {
        Report::Time(stats) => write_time(out, stats)?,
        Report::Station(stats) => write_station(out, stats)?,
        Report::Duration(stats) => write_duration(out, stats)?,
        Report::Users(stats) => write_users(out, stats)?,
    }

    if let Some(elapsed) = elapsed {
        writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    }
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Writes a report as a single JSON line.
pub fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    report: &Report,
    elapsed: Option<Duration>,
) -> Result<()> {
    debug!(kind = ?report.kind(), ?format, "Rendering report");
    match format {
        OutputFormat::Text => write_text(out, report, elapsed),
        OutputFormat::Json => write_json(out, report),
    }
}
