//! Organization management endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::AckResponse;
use crate::venues::VenuesResponse;

/// An organization as the backend returns it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Backend identifier
    #[serde(default)]
    pub organization_id: String,
    /// Display name
    #[serde(default)]
    pub organization_name: String,
    /// Kind of organization (company, faculty, club, ...)
    #[serde(default)]
    pub organization_type: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Contact email
    #[serde(default)]
    pub contact_email: String,
    /// Contact phone
    #[serde(default)]
    pub contact_phone: String,
    /// Street address
    #[serde(default)]
    pub address: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// Country
    #[serde(default)]
    pub country: String,
    /// Postal code
    #[serde(default)]
    pub postal_code: String,
    /// State or province
    #[serde(default)]
    pub state_province: String,
}

/// Fields for creating an organization (no id yet).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    /// Display name
    pub organization_name: String,
    /// Kind of organization
    pub organization_type: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Contact email
    #[serde(default)]
    pub contact_email: String,
    /// Contact phone
    #[serde(default)]
    pub contact_phone: String,
    /// Street address
    #[serde(default)]
    pub address: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// Country
    #[serde(default)]
    pub country: String,
    /// Postal code
    #[serde(default)]
    pub postal_code: String,
    /// State or province
    #[serde(default)]
    pub state_province: String,
}

/// The bulk-create payload; the backend only accepts organizations wrapped
/// in a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOrganizationsRequest {
    /// Organizations to create
    pub organizations: Vec<NewOrganization>,
}

/// `{ success, data }` listing envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationsResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// The organizations, empty on failure
    #[serde(default)]
    pub data: Vec<Organization>,
}

/// `{ success, data }` single-organization envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// The organization, when found
    #[serde(default)]
    pub data: Option<Organization>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryReason<'a> {
    reason: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MemberRequest<'a> {
    user_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VenueIdsRequest<'a> {
    venue_ids: &'a [String],
}

impl ApiClient {
    /// Create one or more organizations
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn add_organizations(
        &self,
        request: &BulkOrganizationsRequest,
    ) -> Result<OrganizationsResponse, ApiError> {
        self.send_json(Method::POST, "/organizations/bulk", request).await
    }

    /// List every organization
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn all_organizations(&self) -> Result<OrganizationsResponse, ApiError> {
        self.get("/organizations/all").await
    }

    /// Fetch one organization by id
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn organization(&self, org_id: &str) -> Result<OrganizationResponse, ApiError> {
        self.get(&format!("/organizations/{org_id}")).await
    }

    /// Update an organization
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn update_organization(
        &self,
        org_id: &str,
        update: &NewOrganization,
    ) -> Result<OrganizationResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/organizations/{org_id}"), update).await
    }

    /// Delete an organization
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn delete_organization(&self, org_id: &str) -> Result<AckResponse, ApiError> {
        self.delete(&format!("/organizations/{org_id}")).await
    }

    /// Send an information query to an organization
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn query_organization(
        &self,
        org_id: &str,
        reason: &str,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/organizations/{org_id}/query"),
            &QueryReason { reason },
        )
        .await
    }

    /// Add a user to an organization
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn add_user_to_organization(
        &self,
        org_id: &str,
        user_id: &str,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::POST,
            &format!("/organizations/{org_id}/users"),
            &MemberRequest { user_id },
        )
        .await
    }

    /// List the venues owned by an organization
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn organization_venues(&self, org_id: &str) -> Result<VenuesResponse, ApiError> {
        self.get(&format!("/organizations/{org_id}/venues")).await
    }

    /// Attach venues to an organization
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn attach_venues(
        &self,
        org_id: &str,
        venue_ids: &[String],
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::POST,
            &format!("/organizations/{org_id}/venues"),
            &VenueIdsRequest { venue_ids },
        )
        .await
    }

    /// Detach venues from an organization
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn detach_venues(
        &self,
        org_id: &str,
        venue_ids: &[String],
    ) -> Result<AckResponse, ApiError> {
        self.send_json(
            Method::DELETE,
            &format!("/organizations/{org_id}/venues"),
            &VenueIdsRequest { venue_ids },
        )
        .await
    }

    /// Organizations a user belongs to
    ///
    /// Degrades to an empty list when the envelope is malformed, matching
    /// how the pages consume it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport or auth failures.
    pub async fn organizations_by_user(&self, user_id: &str) -> Result<Vec<Organization>, ApiError> {
        let response: Result<OrganizationsResponse, ApiError> =
            self.get(&format!("/organizations/user/{user_id}")).await;
        match response {
            Ok(envelope) => Ok(envelope.data),
            Err(ApiError::Decode(_)) => Ok(Vec::new()),
            Err(other) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organizations_envelope_defaults_to_empty() {
        let response: OrganizationsResponse = serde_json::from_str("{}").expect("valid json");
        assert!(!response.success);
        assert!(response.data.is_empty());
    }

    #[test]
    fn bulk_request_wraps_a_list() {
        let request = BulkOrganizationsRequest {
            organizations: vec![NewOrganization {
                organization_name: "Drama Club".to_owned(),
                organization_type: "CLUB".to_owned(),
                ..NewOrganization::default()
            }],
        };
        let json = serde_json::to_string(&request).expect("serializable");
        assert!(json.starts_with(r#"{"organizations":[{"#));
        assert!(json.contains(r#""organizationName":"Drama Club""#));
    }
}
