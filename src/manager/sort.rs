//! Canonical ordering of rentals.

use std::cmp::Ordering;

use interfaces::Rental;
use itertools::Itertools;

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Cheapest first. Equal costs are ordered by host last name, then first name,
/// then email, ignoring case.
pub fn compare(a: &Rental, b: &Rental) -> Ordering {
    a.cost()
        .cmp(&b.cost())
        .then_with(|| cmp_ignore_case(a.host_last_name(), b.host_last_name()))
        .then_with(|| cmp_ignore_case(a.host_first_name(), b.host_first_name()))
        .then_with(|| cmp_ignore_case(a.host_email(), b.host_email()))
}

/// Stable top-down merge sort.
pub fn merge_sort<T>(mut data: Vec<T>, cmp: &impl Fn(&T, &T) -> Ordering) -> Vec<T> {
    if data.len() < 2 {
        return data;
    }

    let right = data.split_off(data.len() / 2);
    let left = merge_sort(data, cmp);
    let right = merge_sort(right, cmp);

    // ties go left so equal elements keep their order
    left.into_iter()
        .merge_by(right, |a, b| cmp(a, b) != Ordering::Greater)
        .collect()
}

/// Sorts rentals into the canonical order used to build the graph.
pub fn sort_rentals(rentals: Vec<Rental>) -> Vec<Rental> {
    merge_sort(rentals, &compare)
}
