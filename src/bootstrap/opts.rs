//! Module to interact with cargo options

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use interfaces::Day;
use tracing::Level;

/// Options parsed from CLI
#[derive(Parser, Debug)]
#[command(about, version)]
pub struct CliOptions {
    /// The file that the rentals will be read from. This is a CSV file with
    /// a header row of the form
    ///
    /// `start_day,end_day,cost,host_first_name,host_last_name,host_email`
    ///
    /// Columns are matched by name, so they may appear in any order.
    pub rentals_file: PathBuf,

    /// Keep rentals that appear more than once in the input. By default
    /// exact duplicates are dropped with a warning.
    #[clap(long)]
    pub keep_duplicates: bool,

    /// Print the cheapest rental sequence from START to END and exit
    /// instead of opening the menu
    #[clap(long, num_args = 2, value_names = ["START", "END"], allow_negative_numbers = true)]
    pub sequence: Option<Vec<Day>>,

    /// Print the rentals starting on DAY and exit instead of opening the
    /// menu
    #[clap(long, value_name = "DAY", allow_negative_numbers = true, conflicts_with = "sequence")]
    pub day: Option<Day>,

    /// Log more. Pass once for info, twice for debug, three times for trace
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliOptions {
    pub fn get() -> Self {
        Self::parse()
    }

    pub const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
