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

use std::fmt::{Display, Formatter};

use interfaces::{Cost, Day, Rental};
use itertools::{Itertools, MinMaxResult};
use tracing::{debug, warn};

use crate::{
    error::{Error, Res},
    manager::{
        dijkstra::{shortest_distances, shortest_path_tree},
        graph::RentalGraph,
        reach::reachable_from,
    },
};

pub mod dijkstra;
pub mod graph;
pub mod queue;
pub mod reach;
pub mod sort;

/// Why a query could not be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    StartBelowMin { start: Day, min_day: Day },
    StartAboveMax { start: Day, max_day: Day },
    EndBelowMin { end: Day, min_day: Day },
    EndAboveMax { end: Day, max_day: Day },
    StartNotBeforeEnd { start: Day, end: Day },

    /// No rental starts or ends on `day`.
    DayOutOfRange { day: Day, min_day: Day, max_day: Day },

    /// No chain of rentals gets from the start day to the end day.
    /// `boundary_day` is the latest day that can be reached.
    NoPath { boundary_day: Day },

    /// The end day is reachable, but every chain to it costs more than a
    /// [`Cost`] can hold.
    CostOverflow { start: Day, end: Day },
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::StartBelowMin { start, min_day } => write!(
                f,
                "The specified start day ({start}) is smaller than the minimum day in the input data ({min_day})."
            ),
            Self::StartAboveMax { start, max_day } => write!(
                f,
                "The specified start day ({start}) is larger than the maximum day in the input data ({max_day})."
            ),
            Self::EndBelowMin { end, min_day } => write!(
                f,
                "The specified end day ({end}) is smaller than the minimum day in the input data ({min_day})."
            ),
            Self::EndAboveMax { end, max_day } => write!(
                f,
                "The specified end day ({end}) is larger than the maximum day in the input data ({max_day})."
            ),
            Self::StartNotBeforeEnd { .. } => f.write_str(
                "Invalid input: The start day is greater than or equal to the ending day.",
            ),
            Self::DayOutOfRange { day, min_day, .. } if day < min_day => write!(
                f,
                "The specified day ({day}) is smaller than the minimum day in the input data ({min_day})."
            ),
            Self::DayOutOfRange { day, max_day, .. } if day > max_day => write!(
                f,
                "The specified day ({day}) is larger than the maximum day in the input data ({max_day})."
            ),
            Self::DayOutOfRange { day, .. } => {
                write!(f, "The specified day ({day}) does not appear in the input data.")
            }
            Self::NoPath { boundary_day } => {
                write!(f, "There are no rentals available on day {boundary_day}.")
            }
            Self::CostOverflow { start, end } => write!(
                f,
                "The rentals from day {start} to day {end} cost more than ${}.00.",
                Cost::MAX
            ),
        }
    }
}

impl std::error::Error for QueryError {}

fn write_rentals(f: &mut Formatter<'_>, rentals: &[Rental]) -> std::fmt::Result {
    for rental in rentals {
        writeln!(f, "   {rental}")?;
    }
    Ok(())
}

/// The cheapest chain of rentals between two days, in travel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub total: Cost,
    pub rentals: Vec<Rental>,
}

impl Display for Itinerary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rental Total is ${}.00 [", self.total)?;
        write_rentals(f, &self.rentals)?;
        f.write_str("]")
    }
}

/// Every rental that starts on `day`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayListing {
    pub day: Day,
    pub rentals: Vec<Rental>,
}

impl Display for DayListing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Available rentals for day {} [", self.day)?;
        if self.rentals.is_empty() {
            writeln!(f, "   No rentals available.")?;
        } else {
            write_rentals(f, &self.rentals)?;
        }
        f.write_str("]")
    }
}

/// Answers rental queries over a fixed set of rentals.
///
/// The graph is built once in [`RentalManager::new`]. Queries only read it,
/// so a manager can be shared between threads.
#[derive(Debug, Clone)]
pub struct RentalManager {
    /// in canonical order, see [`sort::compare`]
    rentals: Vec<Rental>,
    graph: RentalGraph,
    min_day: Day,
    max_day: Day,
}

impl RentalManager {
    pub fn new(rentals: Vec<Rental>) -> Res<Self> {
        let rentals = sort::sort_rentals(rentals);

        let (min_day, max_day) = match rentals
            .iter()
            .flat_map(|rental| [rental.start_day(), rental.end_day()])
            .minmax()
        {
            MinMaxResult::NoElements => return Err(Error::NoRentals),
            MinMaxResult::OneElement(day) => (day, day),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        let graph = RentalGraph::build(rentals.iter().cloned());
        debug!(min_day, max_day, "rental manager ready");

        Ok(Self {
            rentals,
            graph,
            min_day,
            max_day,
        })
    }

    pub const fn graph(&self) -> &RentalGraph {
        &self.graph
    }

    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    pub const fn min_day(&self) -> Day {
        self.min_day
    }

    pub const fn max_day(&self) -> Day {
        self.max_day
    }

    const fn validate(&self, start: Day, end: Day) -> Result<(), QueryError> {
        let (min_day, max_day) = (self.min_day, self.max_day);

        if start < min_day {
            return Err(QueryError::StartBelowMin { start, min_day });
        }
        if start > max_day {
            return Err(QueryError::StartAboveMax { start, max_day });
        }
        if end < min_day {
            return Err(QueryError::EndBelowMin { end, min_day });
        }
        if end > max_day {
            return Err(QueryError::EndAboveMax { end, max_day });
        }
        if start >= end {
            return Err(QueryError::StartNotBeforeEnd { start, end });
        }

        Ok(())
    }

    /// The cheapest chain of rentals that starts on `start` and ends on `end`.
    pub fn cheapest_sequence(&self, start: Day, end: Day) -> Result<Itinerary, QueryError> {
        self.validate(start, end)?;

        let graph = &self.graph;

        let Some(source) = graph.vertex(start) else {
            return Err(QueryError::NoPath {
                boundary_day: start,
            });
        };

        let reach = reachable_from(graph, source);
        let target = match graph.vertex(end) {
            Some(target) if reach.reaches(target) => target,
            _ => {
                let boundary_day = reach.furthest_day(graph).unwrap_or(start);
                debug!(start, end, boundary_day, "end day is not reachable");
                return Err(QueryError::NoPath { boundary_day });
            }
        };

        let distances = shortest_distances(graph, source);
        let Some(&total) = distances.get(&target) else {
            warn!(start, end, "cheapest chain overflows");
            return Err(QueryError::CostOverflow { start, end });
        };

        let tree = shortest_path_tree(graph, source, &distances);

        let mut rentals = Vec::new();
        let mut current = target;

        while current != source {
            // every vertex with a distance, other than the source, has a tree edge
            let Some(&edge_id) = tree.get(&current) else {
                return Err(QueryError::CostOverflow { start, end });
            };
            let edge = graph.edge(edge_id);

            rentals.push(edge.rental().clone());
            current = edge.source();
        }

        rentals.reverse();

        Ok(Itinerary { total, rentals })
    }

    /// Every rental that starts on `day`, in canonical order.
    pub fn rentals_on(&self, day: Day) -> Result<DayListing, QueryError> {
        let Some(vertex) = self.graph.vertex(day) else {
            return Err(QueryError::DayOutOfRange {
                day,
                min_day: self.min_day,
                max_day: self.max_day,
            });
        };

        let rentals = self
            .graph
            .outgoing(vertex)
            .iter()
            .map(|&edge| self.graph.edge(edge).rental().clone())
            .collect();

        Ok(DayListing { day, rentals })
    }

    /// [`RentalManager::cheapest_sequence`] rendered for display, successful or not.
    pub fn get_rentals(&self, start: Day, end: Day) -> String {
        match self.cheapest_sequence(start, end) {
            Ok(itinerary) => itinerary.to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// [`RentalManager::rentals_on`] rendered for display, successful or not.
    pub fn get_rentals_for_day(&self, day: Day) -> String {
        match self.rentals_on(day) {
            Ok(listing) => listing.to_string(),
            Err(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use assert_matches::assert_matches;
    use interfaces::{Cost, Rental};

    use crate::{
        bootstrap::csv::read_rentals,
        error::Error,
        manager::{QueryError, RentalManager},
    };

    const SAMPLE: &str = include_str!("../../input/sample.csv");
    const COMPLEX: &str = include_str!("../../input/complex.csv");

    /// the ten rentals of `input/sample.csv`, days 1 to 5, in file order
    pub fn sample() -> Vec<Rental> {
        read_rentals(SAMPLE.as_bytes(), false).unwrap()
    }

    /// `input/complex.csv`: days 1 to 5 are connected, 6 to 7 stand alone
    pub fn disconnected() -> Vec<Rental> {
        read_rentals(COMPLEX.as_bytes(), false).unwrap()
    }

    #[test]
    fn test_bounds() {
        let manager = RentalManager::new(sample()).unwrap();
        assert_eq!(manager.min_day(), 1);
        assert_eq!(manager.max_day(), 5);
        assert_eq!(manager.graph().vertex_count(), 5);
        assert_eq!(manager.graph().edge_count(), 10);
    }

    #[test]
    fn test_no_rentals() {
        assert_matches!(RentalManager::new(vec![]), Err(Error::NoRentals));
    }

    #[test]
    fn test_canonical_order() {
        let manager = RentalManager::new(sample()).unwrap();
        let costs: Vec<_> = manager.rentals().iter().map(Rental::cost).collect();
        assert_eq!(costs, [50, 55, 65, 85, 90, 90, 180, 220, 255, 500]);

        assert_eq!(manager.rentals()[4].host_last_name(), "Battestilli");
        assert_eq!(manager.rentals()[5].host_last_name(), "Dominguez");
    }

    #[test]
    fn test_get_rentals_validation() {
        let manager = RentalManager::new(sample()).unwrap();

        assert_eq!(
            manager.get_rentals(2, 2),
            "Invalid input: The start day is greater than or equal to the ending day."
        );
        assert_eq!(
            manager.get_rentals(0, 4),
            "The specified start day (0) is smaller than the minimum day in the input data (1)."
        );
        assert_eq!(
            manager.get_rentals(6, 5),
            "The specified start day (6) is larger than the maximum day in the input data (5)."
        );
        assert_eq!(
            manager.get_rentals(1, 0),
            "The specified end day (0) is smaller than the minimum day in the input data (1)."
        );
        assert_eq!(
            manager.get_rentals(1, 6),
            "The specified end day (6) is larger than the maximum day in the input data (5)."
        );
        assert_eq!(
            manager.get_rentals(4, 2),
            "Invalid input: The start day is greater than or equal to the ending day."
        );
    }

    #[test]
    fn test_validation_variants() {
        let manager = RentalManager::new(sample()).unwrap();

        assert_matches!(
            manager.cheapest_sequence(-3, 4),
            Err(QueryError::StartBelowMin { start: -3, min_day: 1 })
        );
        assert_matches!(
            manager.cheapest_sequence(9, 4),
            Err(QueryError::StartAboveMax { start: 9, max_day: 5 })
        );
        assert_matches!(
            manager.cheapest_sequence(1, 0),
            Err(QueryError::EndBelowMin { end: 0, min_day: 1 })
        );
        assert_matches!(
            manager.cheapest_sequence(1, 8),
            Err(QueryError::EndAboveMax { end: 8, max_day: 5 })
        );
        assert_matches!(
            manager.cheapest_sequence(3, 3),
            Err(QueryError::StartNotBeforeEnd { start: 3, end: 3 })
        );
    }

    #[test]
    fn test_bounds_inclusive() {
        let manager = RentalManager::new(sample()).unwrap();
        assert!(manager.cheapest_sequence(1, 5).is_ok());
    }

    #[test]
    fn test_get_rentals() {
        let manager = RentalManager::new(sample()).unwrap();

        let day1to5 = "Rental Total is $225.00 [\n".to_string()
            + "   $85.00 rental from day 1 to day 2 hosted by Jason King (jtking@email.com)\n"
            + "   $90.00 rental from day 2 to day 4 hosted by Ignacio Dominguez (idominguez@email.com)\n"
            + "   $50.00 rental from day 4 to day 5 hosted by Suzanne Balik (sbalik@email.com)\n"
            + "]";
        assert_eq!(manager.get_rentals(1, 5), day1to5);

        let day2to5 = "Rental Total is $140.00 [\n".to_string()
            + "   $90.00 rental from day 2 to day 4 hosted by Ignacio Dominguez (idominguez@email.com)\n"
            + "   $50.00 rental from day 4 to day 5 hosted by Suzanne Balik (sbalik@email.com)\n"
            + "]";
        assert_eq!(manager.get_rentals(2, 5), day2to5);

        let day3to5 = "Rental Total is $90.00 [\n".to_string()
            + "   $90.00 rental from day 3 to day 5 hosted by Lina Battestilli (lbattestilli@email.com)\n"
            + "]";
        assert_eq!(manager.get_rentals(3, 5), day3to5);
    }

    #[test]
    fn test_itinerary_chains() {
        let manager = RentalManager::new(sample()).unwrap();

        for start in 1..5 {
            for end in start + 1..=5 {
                let itinerary = manager.cheapest_sequence(start, end).unwrap();

                assert_eq!(itinerary.rentals.first().unwrap().start_day(), start);
                assert_eq!(itinerary.rentals.last().unwrap().end_day(), end);
                for pair in itinerary.rentals.windows(2) {
                    assert_eq!(pair[0].end_day(), pair[1].start_day());
                }

                let total: u64 = itinerary.rentals.iter().map(Rental::cost).sum();
                assert_eq!(itinerary.total, total);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let manager = RentalManager::new(sample()).unwrap();

        assert_eq!(manager.get_rentals(1, 5), manager.get_rentals(1, 5));
        assert_eq!(manager.cheapest_sequence(2, 4), manager.cheapest_sequence(2, 4));
        assert_eq!(manager.get_rentals_for_day(1), manager.get_rentals_for_day(1));
    }

    #[test]
    fn test_get_rentals_for_day() {
        let manager = RentalManager::new(sample()).unwrap();

        assert_eq!(
            manager.get_rentals_for_day(6),
            "The specified day (6) is larger than the maximum day in the input data (5)."
        );
        assert_eq!(
            manager.get_rentals_for_day(5),
            "Available rentals for day 5 [\n   No rentals available.\n]"
        );
        assert_eq!(
            manager.get_rentals_for_day(4),
            "Available rentals for day 4 [\n   $50.00 rental from day 4 to day 5 hosted by Suzanne Balik (sbalik@email.com)\n]"
        );
        assert_eq!(
            manager.get_rentals_for_day(0),
            "The specified day (0) is smaller than the minimum day in the input data (1)."
        );
    }

    #[test]
    fn test_day_listing_in_canonical_order() {
        let manager = RentalManager::new(sample()).unwrap();

        let day1 = "Available rentals for day 1 [\n".to_string()
            + "   $85.00 rental from day 1 to day 2 hosted by Jason King (jtking@email.com)\n"
            + "   $180.00 rental from day 1 to day 3 hosted by Toniann Marini (tmarini@email.com)\n"
            + "   $255.00 rental from day 1 to day 4 hosted by Sarah Heckman (sheckman@email.com)\n"
            + "   $500.00 rental from day 1 to day 5 hosted by Margaret Heil (mheil@email.com)\n"
            + "]";
        assert_eq!(manager.get_rentals_for_day(1), day1);
    }

    #[test]
    fn test_gap_day() {
        let manager = RentalManager::new(vec![
            Rental::new(1, 2, 10, "Amy", "Adams", "aadams@email.com"),
            Rental::new(4, 5, 10, "Bob", "Brown", "bbrown@email.com"),
        ])
        .unwrap();

        assert_matches!(
            manager.rentals_on(3),
            Err(QueryError::DayOutOfRange { day: 3, min_day: 1, max_day: 5 })
        );
        assert_eq!(
            manager.get_rentals_for_day(3),
            "The specified day (3) does not appear in the input data."
        );

        assert_matches!(
            manager.cheapest_sequence(3, 5),
            Err(QueryError::NoPath { boundary_day: 3 })
        );
        assert_matches!(
            manager.cheapest_sequence(1, 3),
            Err(QueryError::NoPath { boundary_day: 2 })
        );
    }

    #[test]
    fn test_disconnected() {
        let manager = RentalManager::new(disconnected()).unwrap();

        assert_eq!(
            manager.get_rentals(1, 6),
            "There are no rentals available on day 5."
        );
        assert_eq!(
            manager.get_rentals(1, 7),
            "There are no rentals available on day 5."
        );
        assert_eq!(
            manager.get_rentals(4, 7),
            "There are no rentals available on day 5."
        );
        assert_matches!(
            manager.cheapest_sequence(5, 7),
            Err(QueryError::NoPath { boundary_day: 5 })
        );

        let day6to7 = "Rental Total is $25.00 [\n".to_string()
            + "   $25.00 rental from day 6 to day 7 hosted by Marwah Mahate (msmahate@ncsu.edu)\n"
            + "]";
        assert_eq!(manager.get_rentals(6, 7), day6to7);
    }

    #[test]
    fn test_tie_keeps_last_incoming() {
        // day 1 to 3 costs 20 either way. Canonical order puts the two $10
        // rentals ahead of the $20 one, so the direct rental is the last
        // incoming edge of day 3 and is the one used.
        let manager = RentalManager::new(vec![
            Rental::new(1, 3, 20, "Cat", "Clark", "cclark@email.com"),
            Rental::new(2, 3, 10, "Bob", "Brown", "bbrown@email.com"),
            Rental::new(1, 2, 10, "Amy", "Adams", "aadams@email.com"),
        ])
        .unwrap();

        assert_eq!(
            manager.get_rentals(1, 3),
            "Rental Total is $20.00 [\n   $20.00 rental from day 1 to day 3 hosted by Cat Clark (cclark@email.com)\n]"
        );
    }

    #[test]
    fn test_parallel_rentals() {
        let manager = RentalManager::new(vec![
            Rental::new(1, 2, 30, "Amy", "Adams", "aadams@email.com"),
            Rental::new(1, 2, 20, "Bob", "Brown", "bbrown@email.com"),
            Rental::new(1, 2, 20, "Bob", "Brown", "bbrown@email.com"),
        ])
        .unwrap();

        let itinerary = manager.cheapest_sequence(1, 2).unwrap();
        assert_eq!(itinerary.total, 20);
        assert_eq!(itinerary.rentals.len(), 1);
        assert_eq!(manager.rentals_on(1).unwrap().rentals.len(), 3);
    }

    #[test]
    fn test_shared_between_threads() {
        let manager = RentalManager::new(sample()).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| manager.get_rentals(1, 5)))
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), manager.get_rentals(1, 5));
            }
        });
    }

    #[test]
    fn test_cost_overflow() {
        let half = Cost::MAX / 2 + 1;
        let manager = RentalManager::new(vec![
            Rental::new(1, 2, half, "Amy", "Adams", "aadams@email.com"),
            Rental::new(2, 3, half, "Bob", "Brown", "bbrown@email.com"),
        ])
        .unwrap();

        assert_matches!(
            manager.cheapest_sequence(1, 3),
            Err(QueryError::CostOverflow { start: 1, end: 3 })
        );
        assert_eq!(
            manager.get_rentals(1, 3),
            format!("The rentals from day 1 to day 3 cost more than ${}.00.", Cost::MAX)
        );
        assert_eq!(manager.cheapest_sequence(1, 2).unwrap().total, half);
    }

    #[test]
    fn test_total_of_cost_max() {
        let manager = RentalManager::new(vec![
            Rental::new(1, 2, Cost::MAX / 2, "Amy", "Adams", "aadams@email.com"),
            Rental::new(2, 3, Cost::MAX / 2 + 1, "Bob", "Brown", "bbrown@email.com"),
        ])
        .unwrap();

        let itinerary = manager.cheapest_sequence(1, 3).unwrap();
        assert_eq!(itinerary.total, Cost::MAX);
        assert_eq!(itinerary.rentals.len(), 2);
    }
}
