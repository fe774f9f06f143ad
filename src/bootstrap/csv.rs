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

use std::{collections::HashSet, fs::File, io::Read, path::Path};

use csv::Trim;
use interfaces::Rental;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::{Error, HasContext, Res, ResContext};

fn read_csv<T: DeserializeOwned>(reader: impl Read) -> Res<Vec<T>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader)
        .deserialize()
        .map(|res| {
            let elem: T = res?;
            Ok(elem)
        })
        .collect()
}

fn validate(record: usize, rental: &Rental) -> Res {
    if rental.start_day() < 1 {
        return Err(Error::InvalidRental {
            record,
            reason: format!("start day {} is before day 1", rental.start_day()),
        });
    }

    if rental.end_day() <= rental.start_day() {
        return Err(Error::InvalidRental {
            record,
            reason: format!(
                "end day {} is not after start day {}",
                rental.end_day(),
                rental.start_day()
            ),
        });
    }

    Ok(())
}

/// Reads rentals from CSV data with a header row of
///
/// `start_day,end_day,cost,host_first_name,host_last_name,host_email`
///
/// Rentals are returned in file order. Exact duplicates are dropped unless
/// `keep_duplicates` is set.
pub fn read_rentals(reader: impl Read, keep_duplicates: bool) -> Res<Vec<Rental>> {
    let rentals: Vec<Rental> = read_csv(reader)?;

    let mut seen = HashSet::new();
    let mut res = Vec::with_capacity(rentals.len());

    for (i, rental) in rentals.into_iter().enumerate() {
        let record = i + 1;
        validate(record, &rental)?;

        if !keep_duplicates && !seen.insert(rental.clone()) {
            warn!(record, %rental, "dropping duplicate rental");
            continue;
        }

        res.push(rental);
    }

    Ok(res)
}

pub fn load_rentals(path: &Path, keep_duplicates: bool) -> ResContext<Vec<Rental>> {
    let file = File::open(path).context(|| format!("opening {}", path.display()))?;
    let rentals =
        read_rentals(file, keep_duplicates).context(|| format!("reading {}", path.display()))?;

    info!(count = rentals.len(), path = %path.display(), "loaded rentals");
    Ok(rentals)
}
