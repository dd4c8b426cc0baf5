//! State and actions for the availability dashboard.

use chrono::NaiveDate;
use venuebook_bookings::{
    BookingEntry, BookingFilter, BookingSummary, DEFAULT_PAGE_SIZE, MonthGrid, OverlapPolicy, Page,
    RawBooking, StatusFilter, paginate,
};

/// Venue name shown when the backend does not provide one
pub const UNKNOWN_VENUE: &str = "Unknown Venue";

/// Transient state of the availability page.
///
/// Held only while the page is mounted; navigating away drops it and the
/// next visit re-fetches from scratch.
#[derive(Clone, Debug)]
pub struct AvailabilityState {
    /// Venue the dashboard is showing
    pub venue_id: String,
    /// Venue display name, [`UNKNOWN_VENUE`] until a fetch fills it in
    pub venue_name: String,
    /// Expanded per-date entries from the last successful fetch
    pub bookings: Vec<BookingEntry>,
    /// Summary card values, recomputed whenever `bookings` changes
    pub summary: BookingSummary,
    /// Current table filter
    pub filter: BookingFilter,
    /// Current 1-indexed table page
    pub page: usize,
    /// Month the calendar pair starts at
    pub calendar_base: NaiveDate,
    /// "Now" as of the last load, drives past/today classification
    pub today: NaiveDate,
    /// Which entry wins a day cell when several share its date
    pub overlap_policy: OverlapPolicy,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Last fetch failure, surfaced once and cleared on the next load
    pub last_error: Option<String>,
}

impl AvailabilityState {
    /// Fresh state for a venue's dashboard
    #[must_use]
    pub fn new(venue_id: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            venue_id: venue_id.into(),
            venue_name: UNKNOWN_VENUE.to_owned(),
            bookings: Vec::new(),
            summary: BookingSummary::default(),
            filter: BookingFilter::default(),
            page: 1,
            calendar_base: today,
            today,
            overlap_policy: OverlapPolicy::default(),
            loading: false,
            last_error: None,
        }
    }

    /// Entries passing the current filter, recomputed per call
    #[must_use]
    pub fn filtered(&self) -> Vec<BookingEntry> {
        self.filter.apply(&self.bookings)
    }

    /// The currently visible table page
    #[must_use]
    pub fn current_page(&self) -> Page<BookingEntry> {
        paginate(&self.filtered(), DEFAULT_PAGE_SIZE, self.page)
    }

    /// Calendar grid for the base month shifted by `offset` months
    ///
    /// The calendar shows all bookings regardless of the table filter.
    #[must_use]
    pub fn month_grid(&self, offset: i32) -> MonthGrid {
        MonthGrid::build(
            self.calendar_base,
            offset,
            &self.bookings,
            self.today,
            self.overlap_policy,
        )
    }

    /// The dashboard renders the current and the next month
    #[must_use]
    pub const fn month_offsets() -> [i32; 2] {
        [0, 1]
    }
}

/// Everything that can happen on the availability page.
#[derive(Clone, Debug)]
pub enum AvailabilityAction {
    /// Fetch the venue's bookings
    Load,
    /// A fetch resolved with data
    BookingsLoaded {
        /// Venue display name from the response summary
        venue_name: Option<String>,
        /// Raw records to expand
        bookings: Vec<RawBooking>,
    },
    /// A fetch failed; surfaced once, never retried automatically
    LoadFailed {
        /// Human-readable failure description
        reason: String,
    },
    /// The search box changed
    SearchChanged(String),
    /// The status dropdown changed
    StatusFilterChanged(StatusFilter),
    /// A day was picked in the calendar
    DateSelected(NaiveDate),
    /// The date filter chip was dismissed
    DateCleared,
    /// A pager button was clicked
    PageChanged(usize),
    /// The calendar was stepped forward or back by whole months
    MonthNavigated {
        /// Signed month delta, -1 and 1 from the arrow buttons
        step: i32,
    },
}
