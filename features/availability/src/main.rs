//! CLI demo for the availability dashboard.
//!
//! Drives the store against a canned gateway and renders the summary cards,
//! the two-month calendar and the paginated bookings table as text. Point it
//! at a live backend by swapping the gateway for an authorized `ApiClient`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use availability::{
    AvailabilityAction, AvailabilityEnvironment, AvailabilityReducer, AvailabilityState,
    BookingsGateway, VenueBookings,
};
use chrono::{Datelike, Months, Utc};
use venuebook_api::ApiError;
use venuebook_bookings::{
    BookingDate, BookingStatus, DayStatus, MonthGrid, RawBooking, StatusFilter,
};
use venuebook_core::environment::{Clock, SystemClock};
use venuebook_runtime::Store;

struct SampleGateway;

#[async_trait]
impl BookingsGateway for SampleGateway {
    async fn fetch_venue_bookings(&self, _venue_id: &str) -> Result<VenueBookings, ApiError> {
        let today = Utc::now().date_naive();
        let in_days = |days: u64| BookingDate {
            date: today + chrono::Days::new(days),
        };
        let next_month = today
            .checked_add_months(Months::new(1))
            .and_then(|d| d.with_day(12))
            .map(|date| BookingDate { date });

        Ok(VenueBookings {
            venue_name: Some("Main Hall".to_owned()),
            bookings: vec![
                RawBooking {
                    booking_id: "BK-1001".to_owned(),
                    booking_dates: vec![in_days(3), in_days(4)],
                    booking_status: BookingStatus::ApprovedPaid,
                    amount_to_be_paid: Some(1200.0),
                    created_by: Some("Alice Smith".to_owned()),
                    booking_reason: Some("Wedding".to_owned()),
                    other_reason: None,
                },
                RawBooking {
                    booking_id: "BK-1002".to_owned(),
                    booking_dates: vec![in_days(8)],
                    booking_status: BookingStatus::Pending,
                    amount_to_be_paid: Some(450.0),
                    created_by: Some("Bob Jones".to_owned()),
                    booking_reason: Some("Conference".to_owned()),
                    other_reason: Some("Projector needed".to_owned()),
                },
                RawBooking {
                    booking_id: "BK-1003".to_owned(),
                    booking_dates: next_month.into_iter().collect(),
                    booking_status: BookingStatus::ApprovedNotPaid,
                    amount_to_be_paid: Some(800.0),
                    created_by: None,
                    booking_reason: None,
                    other_reason: None,
                },
                RawBooking {
                    booking_id: "BK-1004".to_owned(),
                    booking_dates: vec![in_days(15)],
                    booking_status: BookingStatus::Rejected,
                    amount_to_be_paid: Some(300.0),
                    created_by: Some("Carol Smithers".to_owned()),
                    booking_reason: Some("Party".to_owned()),
                    other_reason: None,
                },
            ],
        })
    }
}

const fn day_marker(status: DayStatus) -> char {
    match status {
        DayStatus::Padding => ' ',
        DayStatus::Past => '-',
        DayStatus::Today => '*',
        DayStatus::Confirmed => '#',
        DayStatus::Pending => '?',
        DayStatus::Cancelled => 'x',
        DayStatus::Booked => 'o',
        DayStatus::Available => '.',
    }
}

fn render_grid(grid: &MonthGrid) {
    println!("  {}", grid.title());
    println!(
        "  {}",
        MonthGrid::weekday_headers()
            .iter()
            .map(|d| format!("{d:>4}"))
            .collect::<String>()
    );
    for week in grid.cells.chunks(7) {
        let row: String = week
            .iter()
            .map(|cell| match cell.date {
                Some(date) => format!("{:>3}{}", date.day(), day_marker(cell.status())),
                None => "    ".to_owned(),
            })
            .collect();
        println!("  {row}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Venue Availability Demo ===\n");

    let clock = Arc::new(SystemClock);
    let today = clock.now().date_naive();
    let env = AvailabilityEnvironment::new(Arc::new(SampleGateway), clock);
    let store = Store::new(
        AvailabilityState::new("venue-1", today),
        AvailabilityReducer::new(),
        env,
    );

    store.send(AvailabilityAction::Load).await;

    // The fetch effect resolves on its own task; give it a moment
    tokio::time::sleep(Duration::from_millis(100)).await;

    let state = store.state(std::clone::Clone::clone).await;
    println!("{} Availability", state.venue_name);
    println!(
        "  bookings: {}   confirmed: {}   pending: {}   revenue: ${:.2}\n",
        state.summary.total, state.summary.confirmed, state.summary.pending, state.summary.revenue
    );

    for offset in AvailabilityState::month_offsets() {
        render_grid(&state.month_grid(offset));
        println!();
    }
    println!("  legend: # confirmed  ? pending  x cancelled  . available  * today  - past\n");

    // Filter the table down to pending bookings
    store
        .send(AvailabilityAction::StatusFilterChanged(StatusFilter::Only(
            BookingStatus::Pending,
        )))
        .await;

    let state = store.state(std::clone::Clone::clone).await;
    let page = state.current_page();
    println!(
        "Pending bookings (page {}/{}):",
        page.number, page.total_pages
    );
    for entry in &page.items {
        println!(
            "  {}  {}  {}  {}  ${:.2}",
            entry.date,
            entry.client_name,
            entry.event_type,
            entry.status.display_label(),
            entry.amount
        );
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
