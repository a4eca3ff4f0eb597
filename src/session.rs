//! The interactive loop: collect filters, load and report, offer a restart.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::error::Result;
use crate::filters::FilterSelection;
use crate::input::Prompter;
use crate::loader::load_table;
use crate::output::{OutputFormat, write_report};
use crate::reports::ReportKind;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub data_dir: PathBuf,
    pub format: OutputFormat,
    pub show_timing: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            format: OutputFormat::Text,
            show_timing: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    CollectFilters,
    LoadAndReport(FilterSelection),
    AskRestart,
    Done,
}

/// Runs sessions until the user declines to restart. Returns how many
/// iterations completed their reports.
pub fn run<R: BufRead, W: Write>(config: &SessionConfig, prompter: &mut Prompter<R, W>) -> Result<usize> {
    let mut state = State::CollectFilters;
    let mut completed = 0;

    loop {
        state = match state {
            State::CollectFilters => State::LoadAndReport(prompter.collect_filters()?),
            State::LoadAndReport(selection) => {
                report(config, &selection, prompter.output())?;
                completed += 1;
                State::AskRestart
            }
            State::AskRestart => {
                if prompter.ask_restart()? {
                    State::CollectFilters
                } else {
                    State::Done
                }
            }
            State::Done => break,
        };
    }

    info!(completed, "Session finished");
    Ok(completed)
}

/// Loads the selected table and writes all four reports to `out`.
pub fn report<W: Write>(config: &SessionConfig, selection: &FilterSelection, out: &mut W) -> Result<()> {
    let table = load_table(&config.data_dir, selection)?;

    for kind in ReportKind::ALL {
        let started = Instant::now();
        let result = kind.run(&table);
        let elapsed = config.show_timing.then(|| started.elapsed());
        write_report(out, config.format, &result, elapsed)?;
    }
    out.flush()?;
    Ok(())
}
