//! Property-based tests for the aggregation, grid and filter engine.

use chrono::NaiveDate;
use proptest::prelude::*;
use venuebook_bookings::{
    BookingDate, BookingEntry, BookingFilter, BookingStatus, MonthGrid, OverlapPolicy, Page,
    RawBooking, StatusFilter, VenueContext, expand, paginate,
};

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2035, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("day <= 28 is valid in every month")
    })
}

fn arb_status() -> impl Strategy<Value = BookingStatus> {
    prop_oneof![
        Just(BookingStatus::Pending),
        Just(BookingStatus::ApprovedPaid),
        Just(BookingStatus::ApprovedNotPaid),
        Just(BookingStatus::Cancelled),
        Just(BookingStatus::Rejected),
        "[A-Z_]{3,12}".prop_map(BookingStatus::from),
    ]
}

fn arb_raw_booking() -> impl Strategy<Value = RawBooking> {
    (
        "[A-Z][0-9]{1,4}",
        prop::collection::vec(arb_date(), 0..5),
        arb_status(),
        prop::option::of(0.0f64..10_000.0),
        prop::option::of("[A-Za-z ]{0,12}"),
        prop::option::of("[A-Za-z ]{0,12}"),
    )
        .prop_map(|(id, dates, status, amount, client, reason)| RawBooking {
            booking_id: id,
            booking_dates: dates.into_iter().map(|date| BookingDate { date }).collect(),
            booking_status: status,
            amount_to_be_paid: amount,
            created_by: client,
            booking_reason: reason,
            other_reason: None,
        })
}

fn arb_entries() -> impl Strategy<Value = Vec<BookingEntry>> {
    prop::collection::vec(arb_raw_booking(), 0..8)
        .prop_map(|raw| expand(&raw, &VenueContext::new("v1", "Main Hall")))
}

proptest! {
    #[test]
    fn expansion_yields_one_entry_per_date_in_order(raw in prop::collection::vec(arb_raw_booking(), 0..8)) {
        let venue = VenueContext::new("v1", "Main Hall");
        let entries = expand(&raw, &venue);

        let expected: usize = raw.iter().map(|b| b.booking_dates.len()).sum();
        prop_assert_eq!(entries.len(), expected);

        // Entries appear in record order, then date order within a record,
        // sharing the parent's id, status and amount
        let mut cursor = 0;
        for booking in &raw {
            for date_entry in &booking.booking_dates {
                let entry = &entries[cursor];
                prop_assert_eq!(&entry.id, &booking.booking_id);
                prop_assert_eq!(entry.date, date_entry.date);
                prop_assert_eq!(&entry.status, &booking.booking_status);
                prop_assert_eq!(entry.amount, booking.amount_to_be_paid.unwrap_or(0.0).max(0.0));
                prop_assert_eq!(&entry.venue_id, "v1");
                cursor += 1;
            }
        }
    }

    #[test]
    fn status_display_is_total(code in "[A-Z_]{0,16}") {
        let status = BookingStatus::from(code.clone());
        // Never panics, and unknown codes display as themselves
        let label = status.display_label().to_owned();
        prop_assert!(!label.is_empty() || code.is_empty());
    }

    #[test]
    fn filter_equals_intersection_of_predicates(
        entries in arb_entries(),
        search in "[a-z]{0,4}",
        only_pending in any::<bool>(),
        selected in prop::option::of(arb_date()),
    ) {
        let status = if only_pending {
            StatusFilter::Only(BookingStatus::Pending)
        } else {
            StatusFilter::All
        };
        let filter = BookingFilter { search: search.clone(), status: status.clone(), selected_date: selected };

        let combined = filter.apply(&entries);

        let search_only = BookingFilter { search, ..BookingFilter::default() };
        let status_only = BookingFilter { status, ..BookingFilter::default() };
        let date_only = BookingFilter { selected_date: selected, ..BookingFilter::default() };

        let intersection: Vec<BookingEntry> = entries
            .iter()
            .filter(|e| {
                search_only.matches(e) && status_only.matches(e) && date_only.matches(e)
            })
            .cloned()
            .collect();

        prop_assert_eq!(combined, intersection);
    }

    #[test]
    fn pagination_reconstructs_the_list(items in prop::collection::vec(any::<u32>(), 0..40), page_size in 1usize..10) {
        let first: Page<u32> = paginate(&items, page_size, 1);
        prop_assert!(first.total_pages >= 1);
        prop_assert_eq!(first.total_pages, items.len().div_ceil(page_size).max(1));

        let mut reconstructed = Vec::new();
        for page_number in 1..=first.total_pages {
            let page = paginate(&items, page_size, page_number);
            prop_assert!(page.items.len() <= page_size);
            prop_assert_eq!(page.total_pages, first.total_pages);
            reconstructed.extend(page.items);
        }
        prop_assert_eq!(reconstructed, items);
    }

    #[test]
    fn grid_shape_is_padding_plus_days(base in arb_date(), offset in -24i32..24, entries in arb_entries()) {
        let today = base;
        let grid = MonthGrid::build(base, offset, &entries, today, OverlapPolicy::FirstMatch);

        prop_assert_eq!(grid.cells.len(), grid.start_day_of_week() + grid.days_in_month());
        prop_assert!((28..=31).contains(&grid.days_in_month()));
        prop_assert!(grid.start_day_of_week() < 7);
        prop_assert!(grid.cells[..grid.start_day_of_week()].iter().all(|c| c.date.is_none()));
        prop_assert!(grid.cells[grid.start_day_of_week()..].iter().all(|c| c.date.is_some()));

        // Every day cell is today xor past xor future
        for cell in &grid.cells[grid.start_day_of_week()..] {
            prop_assert!(!(cell.is_today && cell.is_past));
        }
    }
}
