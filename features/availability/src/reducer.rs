//! Reducer for the availability dashboard.

use std::sync::Arc;

use chrono::{Datelike, Months, NaiveDate};
use venuebook_bookings::{BookingSummary, VenueContext, expand, paginate, DEFAULT_PAGE_SIZE};
use venuebook_core::{
    SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec,
};

use crate::gateway::BookingsGateway;
use crate::types::{AvailabilityAction, AvailabilityState, UNKNOWN_VENUE};

/// Environment dependencies for the availability reducer
#[derive(Clone)]
pub struct AvailabilityEnvironment {
    /// Backend access
    pub gateway: Arc<dyn BookingsGateway>,
    /// Source of "today" for calendar classification
    pub clock: Arc<dyn Clock>,
}

impl AvailabilityEnvironment {
    /// Creates a new `AvailabilityEnvironment`
    #[must_use]
    pub fn new(gateway: Arc<dyn BookingsGateway>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }
}

/// Reducer for the availability dashboard
#[derive(Clone, Debug, Default)]
pub struct AvailabilityReducer;

impl AvailabilityReducer {
    /// Creates a new `AvailabilityReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn shift_months(base: NaiveDate, step: i32) -> NaiveDate {
    // Anchor on the 1st so month arithmetic never clamps on short months
    let first = base.with_day(1).unwrap_or(base);
    let shifted = if step >= 0 {
        first.checked_add_months(Months::new(step.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(step.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

impl Reducer for AvailabilityReducer {
    type State = AvailabilityState;
    type Action = AvailabilityAction;
    type Environment = AvailabilityEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AvailabilityAction::Load => {
                state.loading = true;
                state.last_error = None;
                state.today = env.clock.now().date_naive();

                let gateway = Arc::clone(&env.gateway);
                let venue_id = state.venue_id.clone();
                tracing::debug!(venue_id = %state.venue_id, "loading venue bookings");

                smallvec![Effect::Future(Box::pin(async move {
                    match gateway.fetch_venue_bookings(&venue_id).await {
                        Ok(fetched) => Some(AvailabilityAction::BookingsLoaded {
                            venue_name: fetched.venue_name,
                            bookings: fetched.bookings,
                        }),
                        Err(error) => Some(AvailabilityAction::LoadFailed {
                            reason: error.to_string(),
                        }),
                    }
                }))]
            },

            AvailabilityAction::BookingsLoaded {
                venue_name,
                bookings,
            } => {
                state.loading = false;
                state.venue_name = venue_name
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| UNKNOWN_VENUE.to_owned());

                let venue = VenueContext::new(state.venue_id.clone(), state.venue_name.clone());
                state.bookings = expand(&bookings, &venue);
                state.summary = BookingSummary::of(&state.bookings);
                tracing::debug!(
                    venue = %state.venue_name,
                    entries = state.bookings.len(),
                    "bookings loaded"
                );
                SmallVec::new()
            },

            AvailabilityAction::LoadFailed { reason } => {
                state.loading = false;
                state.venue_name = UNKNOWN_VENUE.to_owned();
                state.bookings.clear();
                state.summary = BookingSummary::default();
                tracing::warn!(venue_id = %state.venue_id, %reason, "loading bookings failed");
                state.last_error = Some(reason);
                SmallVec::new()
            },

            AvailabilityAction::SearchChanged(search) => {
                state.filter.search = search;
                state.page = 1;
                SmallVec::new()
            },

            AvailabilityAction::StatusFilterChanged(status) => {
                state.filter.status = status;
                state.page = 1;
                SmallVec::new()
            },

            AvailabilityAction::DateSelected(date) => {
                state.filter.selected_date = Some(date);
                state.page = 1;
                SmallVec::new()
            },

            AvailabilityAction::DateCleared => {
                state.filter.selected_date = None;
                state.page = 1;
                SmallVec::new()
            },

            AvailabilityAction::PageChanged(page) => {
                let total = paginate(&state.filtered(), DEFAULT_PAGE_SIZE, 1).total_pages;
                state.page = page.clamp(1, total);
                SmallVec::new()
            },

            AvailabilityAction::MonthNavigated { step } => {
                state.calendar_base = shift_months(state.calendar_base, step);
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use venuebook_api::ApiError;
    use venuebook_bookings::{BookingDate, BookingStatus, RawBooking, StatusFilter};
    use venuebook_testing::{ReducerTest, assertions, test_clock};

    use crate::gateway::VenueBookings;

    struct CannedGateway {
        fetched: Option<VenueBookings>,
    }

    #[async_trait]
    impl BookingsGateway for CannedGateway {
        async fn fetch_venue_bookings(&self, _venue_id: &str) -> Result<VenueBookings, ApiError> {
            self.fetched.clone().ok_or(ApiError::Unauthorized)
        }
    }

    fn test_env() -> AvailabilityEnvironment {
        AvailabilityEnvironment::new(
            Arc::new(CannedGateway {
                fetched: Some(VenueBookings::default()),
            }),
            Arc::new(test_clock()),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn raw(id: &str, dates: &[NaiveDate], status: BookingStatus) -> RawBooking {
        RawBooking {
            booking_id: id.to_owned(),
            booking_dates: dates.iter().map(|&d| BookingDate { date: d }).collect(),
            booking_status: status,
            amount_to_be_paid: Some(100.0),
            created_by: Some("Alice Smith".to_owned()),
            booking_reason: Some("Wedding".to_owned()),
            other_reason: None,
        }
    }

    #[test]
    fn load_marks_loading_and_spawns_fetch() {
        ReducerTest::new(AvailabilityReducer::new())
            .with_env(test_env())
            .given_state(AvailabilityState::new("v1", date(2025, 3, 14)))
            .when_action(AvailabilityAction::Load)
            .then_state(|state| {
                assert!(state.loading);
                assert!(state.last_error.is_none());
                // today comes from the environment clock
                assert_eq!(state.today, date(2025, 1, 1));
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn loaded_bookings_are_expanded_and_summarized() {
        let bookings = vec![
            raw("B1", &[date(2025, 3, 1), date(2025, 3, 15)], BookingStatus::Pending),
            raw("B2", &[date(2025, 3, 2)], BookingStatus::ApprovedPaid),
        ];

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(test_env())
            .given_state(AvailabilityState::new("v1", date(2025, 3, 14)))
            .when_action(AvailabilityAction::BookingsLoaded {
                venue_name: Some("Main Hall".to_owned()),
                bookings,
            })
            .then_state(|state| {
                assert!(!state.loading);
                assert_eq!(state.venue_name, "Main Hall");
                assert_eq!(state.bookings.len(), 3);
                assert_eq!(state.summary.total, 3);
                assert_eq!(state.summary.pending, 2);
                assert_eq!(state.summary.confirmed, 1);
                assert!(state.bookings.iter().all(|b| b.venue_name == "Main Hall"));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn missing_venue_name_defaults() {
        ReducerTest::new(AvailabilityReducer::new())
            .with_env(test_env())
            .given_state(AvailabilityState::new("v1", date(2025, 3, 14)))
            .when_action(AvailabilityAction::BookingsLoaded {
                venue_name: None,
                bookings: vec![],
            })
            .then_state(|state| {
                assert_eq!(state.venue_name, UNKNOWN_VENUE);
            })
            .run();
    }

    #[test]
    fn load_failure_clears_data_and_records_reason() {
        let mut loaded = AvailabilityState::new("v1", date(2025, 3, 14));
        loaded.bookings = expand(
            &[raw("B1", &[date(2025, 3, 1)], BookingStatus::Pending)],
            &VenueContext::new("v1", "Main Hall"),
        );
        loaded.summary = BookingSummary::of(&loaded.bookings);

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(test_env())
            .given_state(loaded)
            .when_action(AvailabilityAction::LoadFailed {
                reason: "Unauthorized - invalid or missing token".to_owned(),
            })
            .then_state(|state| {
                assert!(!state.loading);
                assert!(state.bookings.is_empty());
                assert_eq!(state.summary, BookingSummary::default());
                assert_eq!(state.venue_name, UNKNOWN_VENUE);
                assert!(state.last_error.as_deref().is_some_and(|r| r.contains("Unauthorized")));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn filter_changes_reset_the_page() {
        let mut state = AvailabilityState::new("v1", date(2025, 3, 14));
        state.page = 3;

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AvailabilityAction::SearchChanged("smith".to_owned()))
            .then_state(|state| {
                assert_eq!(state.filter.search, "smith");
                assert_eq!(state.page, 1);
            })
            .run();
    }

    #[test]
    fn status_and_date_filters_reset_the_page_too() {
        let mut state = AvailabilityState::new("v1", date(2025, 3, 14));
        state.page = 2;

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(test_env())
            .given_state(state.clone())
            .when_action(AvailabilityAction::StatusFilterChanged(StatusFilter::Only(
                BookingStatus::Pending,
            )))
            .then_state(|state| assert_eq!(state.page, 1))
            .run();

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(test_env())
            .given_state(state.clone())
            .when_action(AvailabilityAction::DateSelected(date(2025, 3, 1)))
            .then_state(|state| {
                assert_eq!(state.filter.selected_date, Some(date(2025, 3, 1)));
                assert_eq!(state.page, 1);
            })
            .run();

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AvailabilityAction::DateCleared)
            .then_state(|state| {
                assert_eq!(state.filter.selected_date, None);
                assert_eq!(state.page, 1);
            })
            .run();
    }

    #[test]
    fn page_change_clamps_into_range() {
        ReducerTest::new(AvailabilityReducer::new())
            .with_env(test_env())
            .given_state(AvailabilityState::new("v1", date(2025, 3, 14)))
            .when_action(AvailabilityAction::PageChanged(7))
            .then_state(|state| {
                // No bookings: only one page exists
                assert_eq!(state.page, 1);
            })
            .run();
    }

    #[test]
    fn month_navigation_steps_the_base() {
        ReducerTest::new(AvailabilityReducer::new())
            .with_env(test_env())
            .given_state(AvailabilityState::new("v1", date(2025, 12, 14)))
            .when_action(AvailabilityAction::MonthNavigated { step: 1 })
            .then_state(|state| {
                assert_eq!(state.calendar_base, date(2026, 1, 1));
            })
            .run();

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(test_env())
            .given_state(AvailabilityState::new("v1", date(2025, 1, 14)))
            .when_action(AvailabilityAction::MonthNavigated { step: -1 })
            .then_state(|state| {
                assert_eq!(state.calendar_base, date(2024, 12, 1));
            })
            .run();
    }

    #[test]
    fn derived_views_follow_the_filter() {
        let bookings = vec![
            raw("B1", &[date(2025, 3, 1)], BookingStatus::Pending),
            raw("B2", &[date(2025, 3, 2)], BookingStatus::ApprovedPaid),
        ];
        let mut state = AvailabilityState::new("v1", date(2025, 3, 14));
        state.bookings = expand(&bookings, &VenueContext::new("v1", "Main Hall"));
        state.filter.status = StatusFilter::Only(BookingStatus::Pending);

        let filtered = state.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "B1");

        let page = state.current_page();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 1);

        // The calendar ignores the table filter
        let grid = state.month_grid(0);
        assert_eq!(grid.cells.iter().filter(|c| c.is_booked()).count(), 2);
    }
}
