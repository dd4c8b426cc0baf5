//! Wire and display models for venue bookings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::BookingStatus;

/// One dated entry inside a raw booking record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDate {
    /// The calendar date this entry reserves (time-of-day irrelevant)
    pub date: NaiveDate,
}

/// A booking record as the backend returns it.
///
/// One record can reserve several dates; [`crate::expand`] projects it into
/// one [`BookingEntry`] per date. Optional fields are frequently absent or
/// empty in live data, so everything but the id and status is defaulted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBooking {
    /// Backend identifier, shared by all date entries of this record
    pub booking_id: String,
    /// Ordered sequence of reserved dates
    #[serde(default)]
    pub booking_dates: Vec<BookingDate>,
    /// Raw approval/payment status code
    pub booking_status: BookingStatus,
    /// Amount due for the whole booking
    #[serde(default)]
    pub amount_to_be_paid: Option<f64>,
    /// Client name as entered at creation
    #[serde(default)]
    pub created_by: Option<String>,
    /// What the venue is booked for
    #[serde(default)]
    pub booking_reason: Option<String>,
    /// Free-text special request
    #[serde(default)]
    pub other_reason: Option<String>,
}

/// Venue identity carried through from the query context.
///
/// Constant for a given fetch: every entry expanded from one venue query
/// carries the same id and name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VenueContext {
    /// Venue identifier the bookings were queried for
    pub venue_id: String,
    /// Display name from the query's venue summary
    pub venue_name: String,
}

impl VenueContext {
    /// Create a venue context
    #[must_use]
    pub fn new(venue_id: impl Into<String>, venue_name: impl Into<String>) -> Self {
        Self {
            venue_id: venue_id.into(),
            venue_name: venue_name.into(),
        }
    }
}

/// A per-date projection of a booking, ready for display.
///
/// All date entries expanded from one [`RawBooking`] share the same id,
/// status and amount but have distinct dates.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingEntry {
    /// Identifier shared across all date entries of the parent record
    pub id: String,
    /// The calendar date of this entry
    pub date: NaiveDate,
    /// Client name, defaulted when the record carries none
    pub client_name: String,
    /// Event type, defaulted when the record carries none
    pub event_type: String,
    /// Expected guest count (this endpoint does not provide one)
    pub guests: u32,
    /// Amount due, never negative
    pub amount: f64,
    /// Raw status code of the parent record
    pub status: BookingStatus,
    /// Reserved time slot label
    pub time_slot: String,
    /// Free-text special request, empty when absent
    pub special_requests: String,
    /// Venue the entry belongs to
    pub venue_id: String,
    /// Venue display name
    pub venue_name: String,
}
