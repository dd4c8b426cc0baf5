//! Public events listing: fetch once, filter locally.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use venuebook_api::events::EventSummary;
use venuebook_api::{ApiClient, ApiError};
use venuebook_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Category predicate of the listing filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Pass every category
    #[default]
    All,
    /// Require exact equality with one category code (e.g. `CONFERENCE`)
    Only(String),
}

impl CategoryFilter {
    fn matches(&self, event_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => event_type == wanted,
        }
    }
}

/// Transient state of the events listing page.
#[derive(Clone, Debug, Default)]
pub struct ListingState {
    /// Published events from the last successful fetch
    pub events: Vec<EventSummary>,
    /// Search box contents
    pub search: String,
    /// Category dropdown selection
    pub category: CategoryFilter,
    /// Date picker selection
    pub selected_date: Option<NaiveDate>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Last fetch failure
    pub error: Option<String>,
}

impl ListingState {
    /// Events passing the current filters, recomputed per call
    ///
    /// Search matches name or description case-insensitively; the date
    /// filter compares against the event's first booking date.
    #[must_use]
    pub fn filtered(&self) -> Vec<EventSummary> {
        let needle = self.search.to_lowercase();
        self.events
            .iter()
            .filter(|event| {
                let matches_search = needle.is_empty()
                    || event.event_name.to_lowercase().contains(&needle)
                    || event
                        .event_description
                        .as_deref()
                        .unwrap_or_default()
                        .to_lowercase()
                        .contains(&needle);

                let matches_category = self.category.matches(&event.event_type);

                let matches_date = self
                    .selected_date
                    .is_none_or(|selected| event.first_date() == Some(selected));

                matches_search && matches_category && matches_date
            })
            .cloned()
            .collect()
    }
}

/// Everything that can happen on the listing page.
#[derive(Clone, Debug)]
pub enum ListingAction {
    /// Fetch the published events
    Load,
    /// A fetch resolved with data
    Loaded(Vec<EventSummary>),
    /// A fetch failed
    LoadFailed {
        /// Human-readable failure description
        reason: String,
    },
    /// The search box changed
    SearchChanged(String),
    /// The category dropdown changed
    CategorySelected(CategoryFilter),
    /// The date picker changed
    DateSelected(NaiveDate),
    /// The date picker was cleared
    DateCleared,
}

/// The one backend operation the listing needs, behind a trait so tests can
/// stub it.
#[async_trait]
pub trait PublishedEventsGateway: Send + Sync {
    /// Fetch the published events
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport or auth failures; an unusable
    /// response degrades to an empty list instead.
    async fn fetch_published_events(&self) -> Result<Vec<EventSummary>, ApiError>;
}

#[async_trait]
impl PublishedEventsGateway for ApiClient {
    async fn fetch_published_events(&self) -> Result<Vec<EventSummary>, ApiError> {
        match self.published_events().await {
            Ok(response) if response.success => Ok(response.data),
            Ok(_) | Err(ApiError::Decode(_)) => Ok(Vec::new()),
            Err(error) => Err(error),
        }
    }
}

/// Environment dependencies for the listing reducer
#[derive(Clone)]
pub struct ListingEnvironment {
    /// Backend access
    pub gateway: Arc<dyn PublishedEventsGateway>,
}

impl ListingEnvironment {
    /// Creates a new `ListingEnvironment`
    #[must_use]
    pub fn new(gateway: Arc<dyn PublishedEventsGateway>) -> Self {
        Self { gateway }
    }
}

/// Reducer for the events listing
#[derive(Clone, Debug, Default)]
pub struct ListingReducer;

impl ListingReducer {
    /// Creates a new `ListingReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for ListingReducer {
    type State = ListingState;
    type Action = ListingAction;
    type Environment = ListingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ListingAction::Load => {
                state.loading = true;
                state.error = None;

                let gateway = Arc::clone(&env.gateway);
                smallvec![Effect::Future(Box::pin(async move {
                    match gateway.fetch_published_events().await {
                        Ok(events) => Some(ListingAction::Loaded(events)),
                        Err(error) => Some(ListingAction::LoadFailed {
                            reason: error.to_string(),
                        }),
                    }
                }))]
            },

            ListingAction::Loaded(events) => {
                state.loading = false;
                tracing::debug!(count = events.len(), "published events loaded");
                state.events = events;
                SmallVec::new()
            },

            ListingAction::LoadFailed { reason } => {
                state.loading = false;
                state.events.clear();
                tracing::warn!(%reason, "loading published events failed");
                state.error = Some("Failed to load events.".to_owned());
                SmallVec::new()
            },

            ListingAction::SearchChanged(search) => {
                state.search = search;
                SmallVec::new()
            },

            ListingAction::CategorySelected(category) => {
                state.category = category;
                SmallVec::new()
            },

            ListingAction::DateSelected(date) => {
                state.selected_date = Some(date);
                SmallVec::new()
            },

            ListingAction::DateCleared => {
                state.selected_date = None;
                SmallVec::new()
            },
        }
    }
}
