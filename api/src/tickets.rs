//! Ticket type and ticketing endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::AckResponse;

/// A ticket type offered for an event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    /// Backend identifier
    #[serde(default)]
    pub ticket_type_id: String,
    /// Display name (General, VIP, ...)
    #[serde(default)]
    pub name: String,
    /// Price per ticket
    #[serde(default)]
    pub price: f64,
    /// How many are on sale
    #[serde(default)]
    pub quantity: u32,
    /// Whether the type is currently purchasable
    #[serde(default)]
    pub active: bool,
}

/// Fields for creating a ticket type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicketType {
    /// Display name
    pub name: String,
    /// Price per ticket
    pub price: f64,
    /// How many to put on sale
    pub quantity: u32,
}

/// `{ success, data }` ticket type listing envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketTypesResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// The ticket types, empty on failure
    #[serde(default)]
    pub data: Vec<TicketType>,
}

/// Payload for purchasing tickets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    /// Event the tickets are for
    pub event_id: String,
    /// Which ticket type to buy
    pub ticket_type_id: String,
    /// How many tickets
    pub quantity: u32,
    /// Where to send the tickets
    pub purchaser_email: String,
}

/// Payload for scanning a ticket at the door.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    /// The code printed on the ticket
    pub ticket_code: String,
}

/// Result of a door scan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    /// Whether the scan was processed
    #[serde(default)]
    pub success: bool,
    /// Whether the ticket is valid and unused
    #[serde(default)]
    pub valid: bool,
    /// Optional human-readable detail
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    /// Create a ticket type for an event
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn create_ticket_type(
        &self,
        event_id: &str,
        ticket: &NewTicketType,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::POST,
            &format!("/events/{event_id}/ticket-types"),
            ticket,
        )
        .await
    }

    /// Every ticket type of an event
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn ticket_types(&self, event_id: &str) -> Result<TicketTypesResponse, ApiError> {
        self.get(&format!("/events/{event_id}/ticket-types")).await
    }

    /// Ticket types currently on sale for an event
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn active_ticket_types(
        &self,
        event_id: &str,
    ) -> Result<TicketTypesResponse, ApiError> {
        self.get(&format!("/events/{event_id}/ticket-types/active")).await
    }

    /// Purchase tickets
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn purchase_ticket(&self, purchase: &PurchaseRequest) -> Result<AckResponse, ApiError> {
        self.send_json(Method::POST, "/event/tickets/purchase", purchase).await
    }

    /// Validate and consume a ticket at the door
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn check_in_ticket(&self, scan: &CheckInRequest) -> Result<CheckInResponse, ApiError> {
        self.send_json(Method::POST, "/event/tickets/check-in", scan).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_types_envelope_defaults() {
        let response: TicketTypesResponse = serde_json::from_str("{}").expect("valid json");
        assert!(!response.success);
        assert!(response.data.is_empty());
    }

    #[test]
    fn purchase_serializes_camel_case() {
        let purchase = PurchaseRequest {
            event_id: "E1".to_owned(),
            ticket_type_id: "T1".to_owned(),
            quantity: 2,
            purchaser_email: "guest@example.com".to_owned(),
        };
        let json = serde_json::to_string(&purchase).expect("serializable");
        assert!(json.contains(r#""ticketTypeId":"T1""#));
    }
}
