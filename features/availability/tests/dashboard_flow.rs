//! Store-driven integration tests for the availability dashboard.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use availability::{
    AvailabilityAction, AvailabilityEnvironment, AvailabilityReducer, AvailabilityState,
    BookingsGateway, UNKNOWN_VENUE, VenueBookings,
};
use chrono::NaiveDate;
use venuebook_api::ApiError;
use venuebook_bookings::{BookingDate, BookingStatus, RawBooking};
use venuebook_runtime::Store;
use venuebook_testing::test_clock;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

struct StubGateway {
    fetched: Option<VenueBookings>,
}

#[async_trait]
impl BookingsGateway for StubGateway {
    async fn fetch_venue_bookings(&self, _venue_id: &str) -> Result<VenueBookings, ApiError> {
        self.fetched
            .clone()
            .ok_or_else(|| ApiError::Transport("connection refused".to_owned()))
    }
}

fn store_with(
    gateway: StubGateway,
) -> Store<AvailabilityState, AvailabilityAction, AvailabilityEnvironment, AvailabilityReducer> {
    let env = AvailabilityEnvironment::new(Arc::new(gateway), Arc::new(test_clock()));
    Store::new(
        AvailabilityState::new("venue-1", date(2025, 1, 1)),
        AvailabilityReducer::new(),
        env,
    )
}

#[tokio::test]
async fn load_fetches_expands_and_summarizes() {
    let gateway = StubGateway {
        fetched: Some(VenueBookings {
            venue_name: Some("Main Hall".to_owned()),
            bookings: vec![RawBooking {
                booking_id: "B1".to_owned(),
                booking_dates: vec![
                    BookingDate {
                        date: date(2025, 1, 10),
                    },
                    BookingDate {
                        date: date(2025, 1, 20),
                    },
                ],
                booking_status: BookingStatus::ApprovedPaid,
                amount_to_be_paid: Some(250.0),
                created_by: Some("Alice Smith".to_owned()),
                booking_reason: Some("Wedding".to_owned()),
                other_reason: None,
            }],
        }),
    };
    let store = store_with(gateway);

    store.send(AvailabilityAction::Load).await;
    assert!(store.state(|s| s.loading).await);

    // Let the fetch effect resolve and feed its action back
    tokio::time::sleep(Duration::from_millis(50)).await;

    let state = store.state(std::clone::Clone::clone).await;
    assert!(!state.loading);
    assert_eq!(state.venue_name, "Main Hall");
    assert_eq!(state.bookings.len(), 2);
    assert_eq!(state.summary.confirmed, 2);
    assert_eq!(state.summary.revenue, 500.0);
    assert_eq!(state.last_error, None);

    // Both expanded entries land in January's grid
    let grid = state.month_grid(0);
    assert_eq!(grid.cells.iter().filter(|c| c.is_booked()).count(), 2);
}

#[tokio::test]
async fn failed_load_surfaces_once_and_degrades_to_empty() {
    let store = store_with(StubGateway { fetched: None });

    store.send(AvailabilityAction::Load).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    let state = store.state(std::clone::Clone::clone).await;
    assert!(!state.loading);
    assert!(state.bookings.is_empty());
    assert_eq!(state.venue_name, UNKNOWN_VENUE);
    assert!(
        state
            .last_error
            .as_deref()
            .is_some_and(|reason| reason.contains("connection refused"))
    );
}

#[tokio::test]
async fn filtering_after_load_drives_the_table() {
    let gateway = StubGateway {
        fetched: Some(VenueBookings {
            venue_name: Some("Main Hall".to_owned()),
            bookings: (1..=7)
                .map(|day| RawBooking {
                    booking_id: format!("B{day}"),
                    booking_dates: vec![BookingDate {
                        date: date(2025, 1, day),
                    }],
                    booking_status: BookingStatus::Pending,
                    amount_to_be_paid: None,
                    created_by: None,
                    booking_reason: None,
                    other_reason: None,
                })
                .collect(),
        }),
    };
    let store = store_with(gateway);

    store.send(AvailabilityAction::Load).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Seven pending entries paginate 5 + 2
    let page = store.state(AvailabilityState::current_page).await;
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total_pages, 2);

    store.send(AvailabilityAction::PageChanged(2)).await;
    let page = store.state(AvailabilityState::current_page).await;
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.number, 2);

    // Narrowing to one day resets to page 1 with a single row
    store
        .send(AvailabilityAction::DateSelected(date(2025, 1, 3)))
        .await;
    let (page, current) = store
        .state(|s| (s.current_page(), s.page))
        .await;
    assert_eq!(current, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "B3");
}
