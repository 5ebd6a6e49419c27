//! Result sorting for query execution
//!
//! Rows sort ascending by the tuple of their values at the order columns.
//! Values compare as plain strings, revenue included: "10.00" < "2.00".

use std::cmp::Ordering;

use crate::schema::{Column, Event};

/// Sorts result rows
pub struct RowSorter;

impl RowSorter {
    /// Sorts rows by `order`, most significant column first.
    ///
    /// Sort is stable; an empty `order` leaves rows untouched.
    pub fn sort(rows: &mut [Event], order: &[Column]) {
        if order.is_empty() {
            return;
        }
        rows.sort_by(|a, b| Self::compare(a, b, order));
    }

    /// Compares two rows column by column
    pub fn compare(a: &Event, b: &Event, order: &[Column]) -> Ordering {
        order
            .iter()
            .map(|&column| a.get(column).cmp(b.get(column)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(stb: &str, title: &str, rev: &str) -> Event {
        Event::new(stb, "2017-04-01", title, "MGM", rev, "12:00")
    }

    #[test]
    fn test_sort_by_string_revenue() {
        let mut rows = vec![row("a", "x", "2.00"), row("b", "y", "10.00"), row("c", "z", "1.00")];

        RowSorter::sort(&mut rows, &[Column::Rev]);

        let revs: Vec<&str> = rows.iter().map(|r| r.rev.as_str()).collect();
        assert_eq!(revs, vec!["1.00", "10.00", "2.00"]);
    }

    #[test]
    fn test_sort_by_tuple() {
        let mut rows = vec![
            row("stb2", "Alien", "1.00"),
            row("stb1", "Logan", "1.00"),
            row("stb1", "Alien", "5.00"),
        ];

        RowSorter::sort(&mut rows, &[Column::Rev, Column::Stb]);

        let keys: Vec<(&str, &str)> = rows.iter().map(|r| (r.stb.as_str(), r.title.as_str())).collect();
        assert_eq!(keys, vec![("stb1", "Logan"), ("stb2", "Alien"), ("stb1", "Alien")]);
    }

    #[test]
    fn test_sort_stable() {
        let mut rows = vec![row("c", "x", "1.00"), row("a", "y", "1.00"), row("b", "z", "1.00")];

        RowSorter::sort(&mut rows, &[Column::Rev]);

        let ids: Vec<&str> = rows.iter().map(|r| r.stb.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_case_sensitive() {
        let mut rows = vec![row("a", "alien", "1.00"), row("b", "Zorro", "1.00")];

        RowSorter::sort(&mut rows, &[Column::Title]);

        assert_eq!(rows[0].title, "Zorro");
    }
}
