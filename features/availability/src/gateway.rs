//! Backend gateway for the availability dashboard.

use async_trait::async_trait;
use venuebook_api::{ApiClient, ApiError};
use venuebook_bookings::RawBooking;

/// What a venue-bookings fetch produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VenueBookings {
    /// Venue display name, when the backend included a summary
    pub venue_name: Option<String>,
    /// Raw booking records, empty on a failed or malformed response
    pub bookings: Vec<RawBooking>,
}

/// The one backend operation this feature needs, behind a trait so tests
/// can stub it.
#[async_trait]
pub trait BookingsGateway: Send + Sync {
    /// Fetch a venue's bookings and display name
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport or auth failures. A response that
    /// arrives but is unusable (`success=false`, wrong shape) is not an
    /// error: it degrades to an empty [`VenueBookings`].
    async fn fetch_venue_bookings(&self, venue_id: &str) -> Result<VenueBookings, ApiError>;
}

#[async_trait]
impl BookingsGateway for ApiClient {
    async fn fetch_venue_bookings(&self, venue_id: &str) -> Result<VenueBookings, ApiError> {
        match self.venue_bookings(venue_id).await {
            Ok(response) if response.success => Ok(VenueBookings {
                venue_name: response.venue_summary.map(|summary| summary.venue_name),
                bookings: response.bookings,
            }),
            // success=false degrades to "no data" rather than an error
            Ok(_) => Ok(VenueBookings::default()),
            // so does a response that failed to decode
            Err(ApiError::Decode(_)) => Ok(VenueBookings::default()),
            Err(error) => Err(error),
        }
    }
}
