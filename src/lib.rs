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
#![deny(rustdoc::broken_intra_doc_links)]

//! Finds the cheapest chain of rentals between two days.
//!
//! Rentals become edges of a directed graph over days, weighted by cost, and
//! a query is a shortest path search over that graph.

pub mod bootstrap;
pub mod error;
pub mod manager;
pub mod term;

pub use interfaces::{Cost, Day, Rental};

pub use crate::{
    error::{Error, HasContext, Res, ResContext},
    manager::{DayListing, Itinerary, QueryError, RentalManager},
};
