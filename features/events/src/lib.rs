//! Events feature: the public events listing and the event-creation wizard.
//!
//! The listing mirrors the public events page: fetch published events once,
//! then filter locally by search text, category and date. The wizard is the
//! multi-step event-creation form, modeled as an explicit finite state
//! machine with validation gates per step and a guarded transition that
//! skips the Details step for private events.
//!
//! # Quick Start
//!
//! ```no_run
//! use events::wizard::{WizardAction, WizardEnvironment, WizardReducer, WizardState, Visibility};
//! use venuebook_api::{ApiClient, ApiConfig};
//! use venuebook_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(ApiConfig::from_env())?;
//! let env = WizardEnvironment::new(Arc::new(client));
//! let store = Store::new(WizardState::new("user-1"), WizardReducer::new(), env);
//!
//! store.send(WizardAction::TitleChanged("Spring Gala".into())).await;
//! store.send(WizardAction::VisibilityChanged(Visibility::Public)).await;
//! store.send(WizardAction::NextStep).await;
//! # Ok(())
//! # }
//! ```

pub mod listing;
pub mod wizard;

// Re-export commonly used types
pub use listing::{CategoryFilter, ListingAction, ListingReducer, ListingState};
pub use wizard::{EventDraft, Visibility, WizardAction, WizardReducer, WizardState, WizardStep};
