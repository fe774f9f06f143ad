//! The interactive menu.

use std::io::{BufRead, Write};

use colored::Colorize;
use interfaces::Day;
use tracing::debug;

use crate::manager::RentalManager;

pub struct Term<'a, R, W> {
    manager: &'a RentalManager,
    input: R,
    output: W,
}

enum Choice {
    Cheapest,
    ForDay,
    Quit,
    Unknown(String),
}

impl Choice {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "c" => Self::Cheapest,
            "r" => Self::ForDay,
            "q" => Self::Quit,
            _ => Self::Unknown(line.trim().to_string()),
        }
    }
}

impl<'a, R: BufRead, W: Write> Term<'a, R, W> {
    pub const fn new(manager: &'a RentalManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    /// `None` at end of input
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        let len = self.input.read_line(&mut line)?;
        Ok((len != 0).then_some(line))
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "Welcome to the Rental Manager!".bold())?;
        writeln!(
            self.output,
            "To select an option, type the first letter of any of the listed options:"
        )?;
        writeln!(self.output, "(C)heapest Rental Sequence")?;
        writeln!(self.output, "(R)entals for a Specific Day")?;
        writeln!(self.output, "(Q)uit")?;
        writeln!(self.output)?;
        self.output.flush()
    }

    /// Asks for a day. `Ok(None)` if input ended or the answer was not a day.
    fn ask_day(&mut self, question: &str) -> std::io::Result<Option<Day>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };

        let line = line.trim();
        if let Ok(day) = line.parse() {
            Ok(Some(day))
        } else {
            writeln!(self.output, "{}", format!("\"{line}\" is not a valid day.").red())?;
            Ok(None)
        }
    }

    /// Runs until the user quits or the input ends.
    pub fn run(&mut self) -> std::io::Result<()> {
        loop {
            self.prompt()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match Choice::parse(&line) {
                Choice::Quit => {
                    writeln!(self.output, "Thank you, have a nice day!")?;
                    return Ok(());
                }
                Choice::Cheapest => {
                    let Some(start) = self.ask_day("Enter the starting day: ")? else {
                        continue;
                    };
                    let Some(end) = self.ask_day("Enter the ending day: ")? else {
                        continue;
                    };

                    debug!(start, end, "cheapest sequence");
                    writeln!(self.output, "{}", self.manager.get_rentals(start, end))?;
                }
                Choice::ForDay => {
                    let Some(day) = self.ask_day("Enter the starting day: ")? else {
                        continue;
                    };

                    debug!(day, "rentals for day");
                    writeln!(self.output, "{}", self.manager.get_rentals_for_day(day))?;
                }
                Choice::Unknown(text) => {
                    writeln!(self.output, "{}", format!("Unknown option \"{text}\".").red())?;
                }
            }
        }
    }
}
