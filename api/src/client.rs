//! Backend API client and its request pipeline.

use std::sync::Arc;

use chrono::Utc;
use reqwest::{Method, StatusCode, multipart::Form};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session::Session;

/// Client for the venuebook booking backend.
///
/// Cheap to clone; clones share the HTTP connection pool and the session.
/// Endpoint methods live in the per-domain modules ([`crate::users`],
/// [`crate::venues`], [`crate::bookings`], ...) and all funnel through the
/// single pipeline here, which injects the bearer token, normalizes errors
/// and logs each call once.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<RwLock<Option<Session>>>,
}

impl ApiClient {
    /// Create a client for the configured backend
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying HTTP client cannot
    /// be constructed (e.g. no TLS backend available).
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url,
            session: Arc::new(RwLock::new(None)),
        })
    }

    /// Create a client configured from the environment
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env())
    }

    /// Base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install a session; subsequent calls send its bearer token
    pub async fn authorize(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    /// Drop the current session; subsequent calls go out unauthenticated
    pub async fn deauthorize(&self) {
        *self.session.write().await = None;
    }

    /// The currently installed session, if any
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    // ---- request pipeline -------------------------------------------------

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.http.get(self.url(path));
        self.execute(Method::GET, path, builder).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let builder = self.http.get(self.url(path)).query(query);
        self.execute(Method::GET, path, builder).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.http.request(method.clone(), self.url(path)).json(body);
        self.execute(method, path, builder).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.http.delete(self.url(path));
        self.execute(Method::DELETE, path, builder).await
    }

    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, ApiError> {
        // The backend expects an (empty) JSON body on bodyless PATCH calls
        self.send_json(method, path, &serde_json::json!({})).await
    }

    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        // No explicit content-type: the multipart boundary sets its own
        let builder = self.http.request(method.clone(), self.url(path)).multipart(form);
        self.execute(method, path, builder).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the bearer token and refuse locally-expired sessions
    async fn authenticated(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let session = self.session.read().await;
        match session.as_ref() {
            Some(session) if session.is_expired(Utc::now()) => Err(ApiError::SessionExpired),
            Some(session) => Ok(builder.bearer_auth(&session.token)),
            None => Ok(builder),
        }
    }

    /// The single place every request goes through
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let builder = self.authenticated(builder).await?;

        tracing::debug!(%method, path, "sending request");

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        match status {
            status if status.is_success() => response.json::<T>().await.map_err(|e| {
                tracing::warn!(%method, path, error = %e, "response did not match expected shape");
                ApiError::Decode(e.to_string())
            }),
            StatusCode::UNAUTHORIZED => {
                tracing::warn!(%method, path, "unauthorized");
                Err(ApiError::Unauthorized)
            },
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!(%method, path, "rate limited");
                Err(ApiError::RateLimited)
            },
            status => {
                let message = response.text().await.unwrap_or_default();
                tracing::warn!(%method, path, status = status.as_u16(), "backend returned an error");
                Err(ApiError::Api {
                    status: status.as_u16(),
                    message,
                })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::unwrap_used)] // test setup
    fn test_client() -> ApiClient {
        ApiClient::new(ApiConfig::new("https://example.test/api/v1")).unwrap()
    }

    #[test]
    fn client_creation() {
        let client = test_client();
        assert_eq!(client.base_url(), "https://example.test/api/v1");
    }

    #[tokio::test]
    async fn authorize_installs_and_deauthorize_clears() {
        let client = test_client();
        assert!(client.session().await.is_none());

        client.authorize(Session::new("tok")).await;
        assert_eq!(client.session().await.map(|s| s.token), Some("tok".to_owned()));

        client.deauthorize().await;
        assert!(client.session().await.is_none());
    }
}
