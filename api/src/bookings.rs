//! Venue booking endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use venuebook_bookings::{BookingDate, RawBooking};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::AckResponse;

/// Venue metadata attached to a venue-bookings query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueSummary {
    /// Display name of the queried venue
    #[serde(default)]
    pub venue_name: String,
}

/// `{ success, bookings, venueSummary }` envelope of the per-venue query.
///
/// Every field is defaulted: a `success=false` or partially-shaped payload
/// deserializes to an empty booking list instead of failing, which is how
/// the availability dashboard consumes it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueBookingsResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// Raw booking records, empty on failure
    #[serde(default)]
    pub bookings: Vec<RawBooking>,
    /// Venue metadata, when the backend includes it
    #[serde(default)]
    pub venue_summary: Option<VenueSummary>,
}

/// `{ success, bookings }` envelope of the other booking listings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingsResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// Raw booking records, empty on failure
    #[serde(default)]
    pub bookings: Vec<RawBooking>,
}

/// `{ success, booking }` single-booking envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// The booking, when found
    #[serde(default)]
    pub booking: Option<RawBooking>,
}

/// Payload for creating a venue booking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    /// Venue to reserve
    pub venue_id: String,
    /// Event the booking belongs to, when created from the wizard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// Dates to reserve
    pub booking_dates: Vec<BookingDate>,
    /// What the venue is booked for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_reason: Option<String>,
    /// Free-text special request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_reason: Option<String>,
    /// Quoted amount for the booking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_to_be_paid: Option<f64>,
}

/// Payload for recording a payment against a booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount paid
    pub amount: f64,
    /// How it was paid (card, transfer, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// External payment reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl ApiClient {
    /// List every booking
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn all_bookings(&self) -> Result<BookingsResponse, ApiError> {
        self.get("/venue-bookings").await
    }

    /// Fetch one booking by id
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn booking(&self, booking_id: &str) -> Result<BookingResponse, ApiError> {
        self.get(&format!("/venue-bookings/{booking_id}")).await
    }

    /// Bookings across every venue a manager runs
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn bookings_by_manager(&self, manager_id: &str) -> Result<BookingsResponse, ApiError> {
        self.get(&format!("/venue-bookings/manager/{manager_id}")).await
    }

    /// Bookings made by an organization
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn bookings_by_organization(
        &self,
        org_id: &str,
    ) -> Result<BookingsResponse, ApiError> {
        self.get(&format!("/venue-bookings/organization/{org_id}")).await
    }

    /// Bookings of one venue, with the venue's summary
    ///
    /// This feeds the availability dashboard: the caller expands the raw
    /// records into per-date entries and derives its calendar from them.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn venue_bookings(&self, venue_id: &str) -> Result<VenueBookingsResponse, ApiError> {
        self.get(&format!("/venue-bookings/venue/{venue_id}/bookings")).await
    }

    /// Bookings attached to an event
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn bookings_by_event(&self, event_id: &str) -> Result<BookingsResponse, ApiError> {
        self.get(&format!("/venue-bookings/event/{event_id}")).await
    }

    /// Event bookings still awaiting approval
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn pending_event_bookings(&self) -> Result<BookingsResponse, ApiError> {
        self.get("/event-bookings/status/pending").await
    }

    /// Create a venue booking
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<BookingResponse, ApiError> {
        self.send_json(Method::POST, "/venue-bookings", booking).await
    }

    /// Record a payment against a booking
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn pay_booking(
        &self,
        booking_id: &str,
        payment: &PaymentRequest,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::POST,
            &format!("/venue-bookings/{booking_id}/payments"),
            payment,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venuebook_bookings::BookingStatus;

    #[test]
    fn venue_bookings_envelope_parses_live_shape() {
        let json = r#"{
            "success": true,
            "bookings": [{
                "bookingId": "B1",
                "bookingDates": [{"date": "2025-03-01"}, {"date": "2025-03-15"}],
                "bookingStatus": "PENDING",
                "amountToBePaid": 500,
                "createdBy": "Alice Smith",
                "bookingReason": "Wedding"
            }],
            "venueSummary": {"venueName": "Main Hall"}
        }"#;

        let response: VenueBookingsResponse = serde_json::from_str(json).expect("valid json");
        assert!(response.success);
        assert_eq!(response.bookings.len(), 1);
        assert_eq!(response.bookings[0].booking_status, BookingStatus::Pending);
        assert_eq!(
            response.venue_summary.map(|v| v.venue_name),
            Some("Main Hall".to_owned())
        );
    }

    #[test]
    fn malformed_envelope_degrades_to_empty() {
        let response: VenueBookingsResponse =
            serde_json::from_str(r#"{"success": false}"#).expect("valid json");
        assert!(!response.success);
        assert!(response.bookings.is_empty());
        assert_eq!(response.venue_summary, None);
    }

    #[test]
    fn new_booking_skips_absent_fields() {
        let booking = NewBooking {
            venue_id: "v1".to_owned(),
            booking_dates: vec![],
            ..NewBooking::default()
        };
        let json = serde_json::to_string(&booking).expect("serializable");
        assert_eq!(json, r#"{"venueId":"v1","bookingDates":[]}"#);
    }
}
