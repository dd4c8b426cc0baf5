//! Booking expansion and summary computation.

use crate::model::{BookingEntry, RawBooking, VenueContext};

/// Placeholder client name when the record carries none
pub const UNKNOWN_CLIENT: &str = "Unknown Client";

/// Placeholder event type when the record carries none
pub const DEFAULT_EVENT_TYPE: &str = "Event";

/// Time slot label: this endpoint books whole days
pub const ALL_DAY: &str = "All Day";

/// Expand raw booking records into one display entry per reserved date.
///
/// Each record with N dates yields exactly N entries sharing its id, status
/// and amount, in the record's date order. Nothing is dropped and nothing is
/// deduplicated here; picking a winner when two entries share a date is the
/// calendar grid's concern.
///
/// Pure function of its inputs.
#[must_use]
pub fn expand(raw: &[RawBooking], venue: &VenueContext) -> Vec<BookingEntry> {
    raw.iter()
        .flat_map(|booking| {
            booking.booking_dates.iter().map(move |entry| BookingEntry {
                id: booking.booking_id.clone(),
                date: entry.date,
                client_name: non_empty_or(booking.created_by.as_deref(), UNKNOWN_CLIENT),
                event_type: non_empty_or(booking.booking_reason.as_deref(), DEFAULT_EVENT_TYPE),
                guests: 0,
                amount: booking.amount_to_be_paid.unwrap_or(0.0).max(0.0),
                status: booking.booking_status.clone(),
                time_slot: ALL_DAY.to_owned(),
                special_requests: booking.other_reason.clone().unwrap_or_default(),
                venue_id: venue.venue_id.clone(),
                venue_name: venue.venue_name.clone(),
            })
        })
        .collect()
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_owned(),
        _ => fallback.to_owned(),
    }
}

/// Dashboard summary derived from the expanded entries.
///
/// Recomputed in full whenever the bookings change, never cached.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingSummary {
    /// Total number of expanded entries
    pub total: usize,
    /// Entries whose status is confirmed (approved, paid or not)
    pub confirmed: usize,
    /// Entries still pending approval
    pub pending: usize,
    /// Sum of amounts across all entries
    pub revenue: f64,
}

impl BookingSummary {
    /// Compute the summary for a set of expanded entries
    #[must_use]
    pub fn of(entries: &[BookingEntry]) -> Self {
        Self {
            total: entries.len(),
            confirmed: entries.iter().filter(|e| e.status.is_confirmed()).count(),
            pending: entries
                .iter()
                .filter(|e| e.status == crate::BookingStatus::Pending)
                .count(),
            revenue: entries.iter().map(|e| e.amount).sum(),
        }
    }
}
