//! Venue endpoints: CRUD, approval workflow, availability search, photos.

use chrono::NaiveDate;
use reqwest::Method;
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{AckResponse, FileUpload};

/// A venue as the backend returns it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Backend identifier
    #[serde(default)]
    pub venue_id: String,
    /// Display name
    #[serde(default)]
    pub venue_name: String,
    /// Human-readable location
    #[serde(default)]
    pub venue_location: Option<String>,
    /// Seating capacity
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Hire cost per day
    #[serde(default)]
    pub amount: Option<f64>,
    /// Cover photo URL
    #[serde(default)]
    pub main_photo_url: Option<String>,
    /// Gallery photo URLs
    #[serde(default)]
    pub photo_gallery: Vec<String>,
    /// Approval status of the venue listing itself
    #[serde(default)]
    pub status: Option<String>,
    /// Manager responsible for bookings
    #[serde(default)]
    pub manager_id: Option<String>,
}

/// Fields for creating a venue.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVenue {
    /// Display name
    pub venue_name: String,
    /// Human-readable location
    #[serde(default)]
    pub venue_location: String,
    /// Seating capacity
    #[serde(default)]
    pub capacity: u32,
    /// Hire cost per day
    #[serde(default)]
    pub amount: f64,
    /// Owning organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

/// `{ success, data }` single-venue envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// The venue, when found
    #[serde(default)]
    pub data: Option<Venue>,
}

/// `{ success, data }` venue listing envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VenuesResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// The venues, empty on failure
    #[serde(default)]
    pub data: Vec<Venue>,
}

/// Query window for the available-venues search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    /// First day of the wanted window
    pub start_date: NaiveDate,
    /// Last day of the wanted window
    pub end_date: NaiveDate,
    /// Daily start time, `HH:MM`
    pub start_time: String,
    /// Daily end time, `HH:MM`
    pub end_time: String,
    /// Restrict to one organization's venues
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RejectRequest<'a> {
    reason: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManagerRequest<'a> {
    manager_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhotoUrlRequest<'a> {
    photo_url: &'a str,
}

impl ApiClient {
    /// Create a venue
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn create_venue(&self, venue: &NewVenue) -> Result<VenueResponse, ApiError> {
        self.send_json(Method::POST, "/venue/add", venue).await
    }

    /// List publicly visible venues
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn public_venues(&self) -> Result<VenuesResponse, ApiError> {
        self.get("/venue/public-venues/list").await
    }

    /// List every venue, approved or not (admin only)
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn all_venues(&self) -> Result<VenuesResponse, ApiError> {
        self.get("/venue/all").await
    }

    /// Fetch one venue by id
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn venue(&self, venue_id: &str) -> Result<VenueResponse, ApiError> {
        self.get(&format!("/venue/{venue_id}")).await
    }

    /// Venues managed by one manager
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn venues_by_manager(&self, manager_id: &str) -> Result<VenuesResponse, ApiError> {
        self.get(&format!("/venue/managers/{manager_id}/venues")).await
    }

    /// Update a venue's details
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn update_venue(
        &self,
        venue_id: &str,
        update: &NewVenue,
    ) -> Result<VenueResponse, ApiError> {
        self.send_json(Method::PATCH, &format!("/venue/{venue_id}"), update).await
    }

    /// Reassign a venue's manager
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn update_venue_manager(
        &self,
        venue_id: &str,
        manager_id: &str,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/venue/updateVenueManager/{venue_id}"),
            &ManagerRequest { manager_id },
        )
        .await
    }

    /// Delete a venue
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn delete_venue(&self, venue_id: &str) -> Result<AckResponse, ApiError> {
        self.delete(&format!("/venue/remove/{venue_id}")).await
    }

    /// Approve a venue listing (admin only)
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn approve_venue(&self, venue_id: &str) -> Result<AckResponse, ApiError> {
        self.send_empty(Method::PATCH, &format!("/venue/{venue_id}/approve")).await
    }

    /// Reject a venue listing with a reason (admin only)
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn reject_venue(&self, venue_id: &str, reason: &str) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/venue/{venue_id}/reject"),
            &RejectRequest { reason },
        )
        .await
    }

    /// Venues free over a date/time window
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn available_venues(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<VenuesResponse, ApiError> {
        self.get_query("/venue/available-venues", query).await
    }

    /// Replace a venue's main photo
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn update_venue_main_photo(
        &self,
        venue_id: &str,
        photo: FileUpload,
    ) -> Result<VenueResponse, ApiError> {
        let form = Form::new().part("photo", photo.into_part()?);
        self.send_multipart(Method::PATCH, &format!("/venue/{venue_id}/main-photo"), form)
            .await
    }

    /// Add a photo to a venue's gallery
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn add_venue_gallery_image(
        &self,
        venue_id: &str,
        photo: FileUpload,
    ) -> Result<VenueResponse, ApiError> {
        let form = Form::new().part("photo", photo.into_part()?);
        self.send_multipart(Method::POST, &format!("/venue/{venue_id}/photo-gallery"), form)
            .await
    }

    /// Remove a photo from a venue's gallery by URL
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn remove_venue_gallery_image(
        &self,
        venue_id: &str,
        photo_url: &str,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::DELETE,
            &format!("/venue/{venue_id}/photo-gallery"),
            &PhotoUrlRequest { photo_url },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_query_serializes_camel_case() {
        let query = AvailabilityQuery {
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 2).expect("valid date"),
            start_time: "09:00".to_owned(),
            end_time: "17:00".to_owned(),
            organization_id: None,
        };
        let json = serde_json::to_string(&query).expect("serializable");
        assert!(json.contains(r#""startDate":"2025-03-01""#));
        assert!(!json.contains("organizationId"));
    }

    #[test]
    fn venue_envelope_defaults() {
        let response: VenuesResponse = serde_json::from_str("{}").expect("valid json");
        assert!(!response.success);
        assert!(response.data.is_empty());
    }
}
