//! User registration, authentication and account endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::AckResponse;

/// A platform user as the backend returns it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend identifier
    #[serde(default)]
    pub user_id: String,
    /// Login name
    #[serde(default)]
    pub username: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Optional phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Role assigned by an administrator
    #[serde(default)]
    pub role: Option<String>,
}

/// Payload for registering a new user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Desired login name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Initial password
    pub password: String,
}

/// Payload for logging in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email the account was registered with
    pub email: String,
    /// Account password
    pub password: String,
}

impl LoginRequest {
    /// Create a login payload
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Response to login and registration calls.
///
/// A login against a default password yields a `reset_token` instead of a
/// session token; the caller must complete the password reset first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Whether the operation succeeded
    #[serde(default)]
    pub success: bool,
    /// Session bearer token
    #[serde(default)]
    pub token: Option<String>,
    /// One-shot token for completing a default-password reset
    #[serde(default)]
    pub reset_token: Option<String>,
    /// The authenticated user, when the backend includes it
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Optional human-readable detail
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload for replacing a default password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    /// Account email
    pub email: String,
    /// The reset token issued at login
    pub reset_token: String,
    /// The new password
    pub new_password: String,
}

/// Payload for requesting a password-reset email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    /// Account email
    pub email: String,
}

/// Mutable account fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// New login name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// `{ success, users }` listing envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// The users, empty on failure
    #[serde(default)]
    pub users: Vec<UserProfile>,
}

/// `{ success, user }` single-user envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Whether the query succeeded
    #[serde(default)]
    pub success: bool,
    /// The user, when found
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl ApiClient {
    /// Register a new user
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, "/users/auth/register", request).await
    }

    /// Log in a registered user
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, "/users/auth/login", request).await
    }

    /// Log in against a default (administrator-issued) password
    ///
    /// Same endpoint as [`login`], but failures fold into a
    /// `success: false` response instead of an error: the first-login flow
    /// only branches on whether it got a `reset_token` back.
    ///
    /// [`login`]: ApiClient::login
    pub async fn login_with_default_password(&self, request: &LoginRequest) -> AuthResponse {
        match self.login(request).await {
            Ok(auth) => auth,
            Err(error) => {
                tracing::warn!(error = %error, "default-password login failed");
                AuthResponse::default()
            },
        }
    }

    /// Complete a default-password reset
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn reset_default_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, "/users/auth/reset", request).await
    }

    /// Request a password-reset email
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<AckResponse, ApiError> {
        self.send_json(Method::POST, "/users/auth/forgot", request).await
    }

    /// List all users (admin only)
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn all_users(&self) -> Result<UsersResponse, ApiError> {
        self.get("/users").await
    }

    /// Fetch one user by id
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn user(&self, user_id: &str) -> Result<UserResponse, ApiError> {
        self.get(&format!("/users/{user_id}")).await
    }

    /// Update a user's account fields
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn update_user(
        &self,
        user_id: &str,
        update: &UserUpdate,
    ) -> Result<UserResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/users/{user_id}"), update).await
    }

    /// Delete a user
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    pub async fn delete_user(&self, user_id: &str) -> Result<AckResponse, ApiError> {
        self.delete(&format!("/users/{user_id}")).await
    }
}
