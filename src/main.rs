// Copyright (c) 2021 Andrew Gazelka - All Rights Reserved.
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
#![deny(unused_must_use)]

use std::io::stdout;

use anyhow::Context;
use rental_manager::{
    bootstrap::{csv::load_rentals, opts::CliOptions},
    term::Term,
    RentalManager,
};

fn main() {
    let opts = CliOptions::get();

    tracing_subscriber::fmt()
        .with_max_level(opts.log_level())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(opts) {
        // print the whole chain in non-debug fashion
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(opts: CliOptions) -> anyhow::Result<()> {
    let CliOptions {
        rentals_file,
        keep_duplicates,
        sequence,
        day,
        ..
    } = opts;

    let rentals = load_rentals(&rentals_file, keep_duplicates)?;
    let manager = RentalManager::new(rentals)
        .with_context(|| format!("building rentals from {}", rentals_file.display()))?;

    if let Some(days) = sequence {
        let &[start, end] = days.as_slice() else {
            anyhow::bail!("--sequence takes a start day and an end day");
        };
        println!("{}", manager.get_rentals(start, end));
        return Ok(());
    }

    if let Some(day) = day {
        println!("{}", manager.get_rentals_for_day(day));
        return Ok(());
    }

    let stdin = std::io::stdin();
    Term::new(&manager, stdin.lock(), stdout().lock())
        .run()
        .context("reading from the terminal")?;

    Ok(())
}
