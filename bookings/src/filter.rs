//! Free-text, status and date filtering plus fixed-size pagination.

use chrono::NaiveDate;

use crate::model::BookingEntry;
use crate::status::BookingStatus;

/// Page size of the bookings table
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Status predicate of the bookings table filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Pass every status
    #[default]
    All,
    /// Require exact equality with one raw status code
    Only(BookingStatus),
}

impl StatusFilter {
    /// Whether `status` passes this filter
    #[must_use]
    pub fn matches(&self, status: &BookingStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == wanted,
        }
    }
}

/// The three ANDed predicates of the bookings table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingFilter {
    /// Case-insensitive substring over client name OR event type;
    /// empty matches everything
    pub search: String,
    /// Status predicate
    pub status: StatusFilter,
    /// Exact calendar date, usually picked from the month grid
    pub selected_date: Option<NaiveDate>,
}

impl BookingFilter {
    /// Whether `entry` passes all three predicates
    #[must_use]
    pub fn matches(&self, entry: &BookingEntry) -> bool {
        self.matches_search(entry) && self.status.matches(&entry.status) && self.matches_date(entry)
    }

    fn matches_search(&self, entry: &BookingEntry) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        entry.client_name.to_lowercase().contains(&needle)
            || entry.event_type.to_lowercase().contains(&needle)
    }

    fn matches_date(&self, entry: &BookingEntry) -> bool {
        self.selected_date.is_none_or(|selected| entry.date == selected)
    }

    /// Filter a list of entries, preserving order
    #[must_use]
    pub fn apply(&self, entries: &[BookingEntry]) -> Vec<BookingEntry> {
        entries.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// One page of a paginated list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    /// The items on this page, at most `page_size` of them
    pub items: Vec<T>,
    /// 1-indexed page number as requested
    pub number: usize,
    /// Total page count, at least 1 even for an empty list
    pub total_pages: usize,
}

/// Slice a filtered list into its 1-indexed `page`.
///
/// An out-of-range page yields an empty item list; `total_pages` is always
/// at least 1 so the pager renders even with no results.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Page<T> {
    let size = page_size.max(1);
    let total_pages = items.len().div_ceil(size).max(1);

    let start = page.saturating_sub(1).saturating_mul(size);
    let page_items = if start >= items.len() {
        Vec::new()
    } else {
        items[start..(start + size).min(items.len())].to_vec()
    };

    Page {
        items: page_items,
        number: page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn entry(client: &str, event: &str, status: BookingStatus, on: NaiveDate) -> BookingEntry {
        BookingEntry {
            id: "B".to_owned(),
            date: on,
            client_name: client.to_owned(),
            event_type: event.to_owned(),
            guests: 0,
            amount: 0.0,
            status,
            time_slot: "All Day".to_owned(),
            special_requests: String::new(),
            venue_id: "v1".to_owned(),
            venue_name: "Main Hall".to_owned(),
        }
    }

    fn sample() -> Vec<BookingEntry> {
        let d = date(2025, 3, 10);
        vec![
            entry("Alice Smith", "Wedding", BookingStatus::Pending, d),
            entry("Bob Jones", "Conference", BookingStatus::ApprovedPaid, d),
            entry("Carol Smithers", "Party", BookingStatus::Cancelled, date(2025, 3, 11)),
            entry("Dan Brown", "smith family reunion", BookingStatus::Pending, date(2025, 3, 12)),
        ]
    }

    #[test]
    fn empty_filter_passes_everything() {
        let entries = sample();
        assert_eq!(BookingFilter::default().apply(&entries).len(), entries.len());
    }

    #[test]
    fn search_is_case_insensitive_over_client_and_event() {
        // Twelve entries, three of which mention "smith" somewhere
        let d = date(2025, 3, 10);
        let mut entries = vec![
            entry("Alice SMITH", "Wedding", BookingStatus::Pending, d),
            entry("Carol Smithers", "Party", BookingStatus::Cancelled, d),
            entry("Dan Brown", "smith family reunion", BookingStatus::Pending, d),
        ];
        for i in 0..9 {
            entries.push(entry(
                &format!("Client {i}"),
                "Conference",
                BookingStatus::ApprovedPaid,
                d,
            ));
        }

        let filter = BookingFilter {
            search: "smith".to_owned(),
            ..BookingFilter::default()
        };

        let hits = filter.apply(&entries);
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|e| {
            e.client_name.to_lowercase().contains("smith")
                || e.event_type.to_lowercase().contains("smith")
        }));
    }

    #[test]
    fn status_filter_requires_exact_code() {
        let entries = sample();
        let filter = BookingFilter {
            status: StatusFilter::Only(BookingStatus::Pending),
            ..BookingFilter::default()
        };

        let hits = filter.apply(&entries);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|e| e.status == BookingStatus::Pending));
    }

    #[test]
    fn date_filter_requires_exact_day() {
        let entries = sample();
        let filter = BookingFilter {
            selected_date: Some(date(2025, 3, 10)),
            ..BookingFilter::default()
        };

        assert_eq!(filter.apply(&entries).len(), 2);
    }

    #[test]
    fn predicates_are_anded() {
        let entries = sample();
        let filter = BookingFilter {
            search: "smith".to_owned(),
            status: StatusFilter::Only(BookingStatus::Pending),
            selected_date: Some(date(2025, 3, 10)),
        };

        let hits = filter.apply(&entries);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].client_name, "Alice Smith");
    }

    #[test]
    fn seven_items_paginate_into_two_pages() {
        let items: Vec<i32> = (1..=7).collect();

        let first = paginate(&items, DEFAULT_PAGE_SIZE, 1);
        assert_eq!(first.items, vec![1, 2, 3, 4, 5]);
        assert_eq!(first.total_pages, 2);

        let second = paginate(&items, DEFAULT_PAGE_SIZE, 2);
        assert_eq!(second.items, vec![6, 7]);
        assert_eq!(second.total_pages, 2);
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let page = paginate::<i32>(&[], DEFAULT_PAGE_SIZE, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<i32> = (1..=7).collect();
        let page = paginate(&items, DEFAULT_PAGE_SIZE, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn exact_multiple_has_no_ragged_page() {
        let items: Vec<i32> = (1..=10).collect();
        let page = paginate(&items, DEFAULT_PAGE_SIZE, 2);
        assert_eq!(page.items, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.total_pages, 2);
    }
}
