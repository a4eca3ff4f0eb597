//! Interactive prompts for the city, month and day filters.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::error::{BikeshareError, Result};
use crate::filters::{City, DayFilter, FilterSelection, MonthFilter};

pub const SEPARATOR: &str = "----------------------------------------";

/// Reads answers from `input` and writes prompts and feedback to `output`.
///
/// Generic over the streams so sessions can be driven from a `Cursor` in tests.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its terminator, failing with
    /// [`BikeshareError::InputClosed`] on EOF. Invalid UTF-8 is replaced
    /// rather than rejected so the caller can re-prompt.
    fn read_answer(&mut self, waiting_for: &'static str) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(BikeshareError::InputClosed(waiting_for));
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Asks `question` until the answer parses as `T`. Rejected answers are
    /// reported with `hint` and never surface as errors.
    fn prompt_until_valid<T>(
        &mut self,
        question: &str,
        hint: &str,
        waiting_for: &'static str,
    ) -> Result<T>
    where
        T: FromStr<Err = BikeshareError> + Display,
    {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;
            let answer = self.read_answer(waiting_for)?;

            match answer.parse::<T>() {
                Ok(value) => {
                    writeln!(self.output, "You chose {value}")?;
                    return Ok(value);
                }
                Err(err) => {
                    debug!(answer = %answer, "Rejected selection");
                    writeln!(self.output, "{err}. {hint}")?;
                }
            }
        }
    }

    /// Prompts for city, month and day in turn.
    pub fn collect_filters(&mut self) -> Result<FilterSelection> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let city: City = self.prompt_until_valid(
            "Enter the name of the city you want to analyze (Chicago, New York City or Washington): ",
            "Please choose Chicago, New York City or Washington",
            "city",
        )?;

        let month: MonthFilter = self.prompt_until_valid(
            "Enter the name of the month to filter by (january to june), or 'all' to apply no month filter: ",
            "Please choose any month from january to june, or 'all' to apply no month filter",
            "month",
        )?;

        let day: DayFilter = self.prompt_until_valid(
            "Enter the name of the day of week to filter by, or 'all' to apply no day filter: ",
            "Please choose any day, or 'all' to apply no day filter",
            "day of week",
        )?;

        writeln!(self.output, "{SEPARATOR}")?;
        Ok(FilterSelection::new(city, month, day))
    }

    /// Returns `true` only for an exact, case-insensitive "yes" (surrounding
    /// spaces count as a different answer). EOF counts as "no".
    pub fn ask_restart(&mut self) -> Result<bool> {
        writeln!(self.output, "\nWould you like to restart? Enter yes or no.")?;
        self.output.flush()?;
        match self.read_answer("restart answer") {
            Ok(answer) => Ok(answer.eq_ignore_ascii_case("yes")),
            Err(BikeshareError::InputClosed(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
