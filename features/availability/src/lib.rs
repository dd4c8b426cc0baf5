//! Venue availability dashboard feature.
//!
//! Models the manager's per-venue availability page: a summary card row, a
//! two-month calendar with day-level status coloring, and a searchable,
//! paginated bookings table. The feature fetches raw bookings once per load,
//! expands them into per-date entries, and recomputes every derived view in
//! full on each state change.
//!
//! # Quick Start
//!
//! ```no_run
//! use availability::{AvailabilityAction, AvailabilityEnvironment, AvailabilityReducer, AvailabilityState};
//! use venuebook_api::{ApiClient, ApiConfig};
//! use venuebook_core::environment::SystemClock;
//! use venuebook_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(ApiConfig::from_env())?;
//! let env = AvailabilityEnvironment::new(Arc::new(client), Arc::new(SystemClock));
//!
//! let today = chrono::Utc::now().date_naive();
//! let store = Store::new(
//!     AvailabilityState::new("venue-1", today),
//!     AvailabilityReducer::new(),
//!     env,
//! );
//!
//! store.send(AvailabilityAction::Load).await;
//! # Ok(())
//! # }
//! ```

pub mod gateway;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use gateway::{BookingsGateway, VenueBookings};
pub use reducer::{AvailabilityEnvironment, AvailabilityReducer};
pub use types::{AvailabilityAction, AvailabilityState, UNKNOWN_VENUE};
