//! # Venuebook API
//!
//! Typed HTTP client for the venuebook booking backend.
//!
//! One method per backend endpoint, grouped per domain module (users,
//! organizations, venues, bookings, events, tickets). Every call goes
//! through a single request pipeline that injects the bearer token from an
//! explicit [`Session`], normalizes failures into [`ApiError`], and logs the
//! outcome once.
//!
//! ## Example
//!
//! ```no_run
//! use venuebook_api::{ApiClient, ApiConfig, Session};
//! use venuebook_api::users::LoginRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiConfig::from_env())?;
//!
//!     let login = client
//!         .login(&LoginRequest::new("manager@example.com", "hunter2"))
//!         .await?;
//!     if let Some(token) = login.token {
//!         client.authorize(Session::new(token)).await;
//!     }
//!
//!     let response = client.venue_bookings("venue-1").await?;
//!     println!("{} raw bookings", response.bookings.len());
//!     Ok(())
//! }
//! ```

pub mod bookings;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod organizations;
pub mod session;
pub mod tickets;
pub mod types;
pub mod users;
pub mod venues;

// Re-export main types for convenience
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use session::Session;
pub use types::{AckResponse, FileUpload};
