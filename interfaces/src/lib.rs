use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// A day number. Days in the input data start at 1.
pub type Day = i64;

/// A cost in whole dollars.
pub type Cost = u64;

/// A single rental offer: the host rents out their place from `start_day` to
/// `end_day` for `cost`.
///
/// Rentals are plain values. Two rentals with the same fields are
/// indistinguishable, and both are kept when they appear twice.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rental {
    start_day: Day,
    end_day: Day,
    cost: Cost,
    host_first_name: String,
    host_last_name: String,
    host_email: String,
}

impl Rental {
    pub fn new(
        start_day: Day,
        end_day: Day,
        cost: Cost,
        host_first_name: impl Into<String>,
        host_last_name: impl Into<String>,
        host_email: impl Into<String>,
    ) -> Self {
        Self {
            start_day,
            end_day,
            cost,
            host_first_name: host_first_name.into(),
            host_last_name: host_last_name.into(),
            host_email: host_email.into(),
        }
    }

    pub const fn start_day(&self) -> Day {
        self.start_day
    }

    pub const fn end_day(&self) -> Day {
        self.end_day
    }

    pub const fn cost(&self) -> Cost {
        self.cost
    }

    /// The weight of this rental as a graph edge. Always the cost.
    pub const fn weight(&self) -> Cost {
        self.cost
    }

    pub fn host_first_name(&self) -> &str {
        &self.host_first_name
    }

    pub fn host_last_name(&self) -> &str {
        &self.host_last_name
    }

    pub fn host_email(&self) -> &str {
        &self.host_email
    }
}

/// `$85.00 rental from day 1 to day 2 hosted by Jason King (jtking@email.com)`
impl Display for Rental {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "${}.00 rental from day {} to day {} hosted by {} {} ({})",
            self.cost,
            self.start_day,
            self.end_day,
            self.host_first_name,
            self.host_last_name,
            self.host_email
        )
    }
}
