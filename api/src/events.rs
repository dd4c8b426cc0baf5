//! Event endpoints: creation, publication workflow, admin review.

use chrono::NaiveDate;
use reqwest::Method;
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};
use venuebook_bookings::BookingDate;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{AckResponse, FileUpload};
use crate::venues::Venue;

/// A venue attached to an event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventVenue {
    /// The attached venue, when the backend expands it
    #[serde(default)]
    pub venue: Option<Venue>,
}

/// An event as the backend returns it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    /// Backend identifier
    #[serde(default)]
    pub event_id: String,
    /// Display title
    #[serde(default)]
    pub event_name: String,
    /// Category code (CONFERENCE, WORKSHOP, ...)
    #[serde(default)]
    pub event_type: String,
    /// Free-text description
    #[serde(default)]
    pub event_description: Option<String>,
    /// Poster photo URL
    #[serde(default)]
    pub event_photo: Option<String>,
    /// Who can see and register: PUBLIC, PRIVATE or RESTRICTED
    #[serde(default)]
    pub visibility_scope: Option<String>,
    /// How many attendees have registered
    #[serde(default)]
    pub registered_count: u32,
    /// The dates the event runs on
    #[serde(default)]
    pub booking_dates: Vec<BookingDate>,
    /// The venues the event runs in
    #[serde(default)]
    pub event_venues: Vec<EventVenue>,
}

impl EventSummary {
    /// The event's primary date: the first booking date, when any
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.booking_dates.first().map(|entry| entry.date)
    }
}

/// `{ success, data }` event listing envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// The events, empty on failure
    #[serde(default)]
    pub data: Vec<EventSummary>,
}

/// `{ success, data }` single-event envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// The event, when found
    #[serde(default)]
    pub data: Option<EventSummary>,
}

/// Fields of a new event, submitted as multipart form data so the poster
/// photo can ride along.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewEvent {
    /// Display title
    pub event_title: String,
    /// Category code
    pub event_type: String,
    /// PUBLIC, PRIVATE or RESTRICTED
    pub visibility_scope: String,
    /// Organizer user id
    pub event_organizer_id: String,
    /// Venue to run in
    pub venue_id: String,
    /// Free-text description
    pub description: String,
    /// Dates the event runs on
    pub dates: Vec<NaiveDate>,
    /// Cap on attendance
    pub max_attendees: Option<u32>,
    /// Named guests/speakers
    pub guests: Vec<String>,
    /// Whether entry is paid
    pub is_entry_paid: bool,
    /// Free-text notes for the venue manager
    pub special_notes: Option<String>,
}

impl NewEvent {
    fn into_form(self, photo: Option<FileUpload>) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("eventTitle", self.event_title)
            .text("eventType", self.event_type)
            .text("visibilityScope", self.visibility_scope)
            .text("eventOrganizerId", self.event_organizer_id)
            .text("venueId", self.venue_id)
            .text("description", self.description)
            .text("isEntryPaid", self.is_entry_paid.to_string());

        for date in self.dates {
            form = form.text("dates", date.format("%Y-%m-%d").to_string());
        }
        if let Some(max_attendees) = self.max_attendees {
            form = form.text("maxAttendees", max_attendees.to_string());
        }
        for guest in self.guests {
            form = form.text("guests", guest);
        }
        if let Some(notes) = self.special_notes {
            form = form.text("specialNotes", notes);
        }
        if let Some(photo) = photo {
            form = form.part("eventPhoto", photo.into_part()?);
        }
        Ok(form)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReasonRequest<'a> {
    reason: &'a str,
}

impl ApiClient {
    /// Create an event, optionally with a poster photo
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn create_event(
        &self,
        event: NewEvent,
        photo: Option<FileUpload>,
    ) -> Result<EventResponse, ApiError> {
        let form = event.into_form(photo)?;
        self.send_multipart(Method::POST, "/event", form).await
    }

    /// List every event visible to the caller
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn all_events(&self) -> Result<EventsResponse, ApiError> {
        self.get("/event").await
    }

    /// List published events
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn published_events(&self) -> Result<EventsResponse, ApiError> {
        self.get("/event/all").await
    }

    /// Fetch one published event by id
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn published_event(&self, event_id: &str) -> Result<EventResponse, ApiError> {
        self.get(&format!("/event/public/{event_id}")).await
    }

    /// Events created by one user
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn events_by_user(&self, user_id: &str) -> Result<EventsResponse, ApiError> {
        self.get(&format!("/event/user/{user_id}")).await
    }

    /// Fetch one event by id
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn event(&self, event_id: &str) -> Result<EventResponse, ApiError> {
        self.get(&format!("/event/{event_id}")).await
    }

    /// Update an event
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn update_event(
        &self,
        event_id: &str,
        update: &EventSummary,
    ) -> Result<EventResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/event/{event_id}"), update).await
    }

    /// Approve an event's venue booking (manager)
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn approve_event_booking(
        &self,
        event_id: &str,
        reason: &str,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/event/approve/{event_id}"),
            &ReasonRequest { reason },
        )
        .await
    }

    /// Cancel an event's venue booking (manager)
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn cancel_event_booking(
        &self,
        event_id: &str,
        reason: &str,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/event/cancel/{event_id}"),
            &ReasonRequest { reason },
        )
        .await
    }

    /// Ask the administrators to publish an event
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn request_event_publication(
        &self,
        event_id: &str,
        reason: &str,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/event/{event_id}/request-publish"),
            &ReasonRequest { reason },
        )
        .await
    }

    /// Approve an event for publication (admin only)
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn admin_approve_event(&self, event_id: &str) -> Result<AckResponse, ApiError> {
        self.send_empty(Method::PATCH, &format!("/event/{event_id}/approve")).await
    }

    /// Send feedback or a query about an event (admin only)
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn admin_query_event(
        &self,
        event_id: &str,
        reason: &str,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/event/{event_id}/query"),
            &ReasonRequest { reason },
        )
        .await
    }

    /// Reject an event for publication (admin only)
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn admin_reject_event(
        &self,
        event_id: &str,
        reason: &str,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/event/{event_id}/reject"),
            &ReasonRequest { reason },
        )
        .await
    }
}
