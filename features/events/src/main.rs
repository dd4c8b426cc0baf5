//! CLI demo for the event-creation wizard.
//!
//! Walks the state machine through a public event end to end against a
//! canned gateway, showing the validation gates and the Details skip for
//! private events.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use events::wizard::{
    EventDraft, EventsGateway, Visibility, WizardAction, WizardEnvironment, WizardReducer,
    WizardState, total_steps,
};
use venuebook_api::ApiError;
use venuebook_runtime::Store;

struct SampleGateway;

#[async_trait]
impl EventsGateway for SampleGateway {
    async fn submit_event(&self, draft: EventDraft) -> Result<String, ApiError> {
        tracing::info!(title = %draft.title, "pretending to create event");
        Ok("EV-2025-0042".to_owned())
    }
}

async fn print_position(
    store: &Store<WizardState, WizardAction, WizardEnvironment, WizardReducer>,
) {
    let (step, private, errors) = store
        .state(|s| (s.step, s.draft.is_private(), s.errors.clone()))
        .await;
    println!(
        "  step {:?} ({}/{})",
        step,
        step.position(private),
        total_steps(private)
    );
    for (field, message) in &errors {
        println!("    ! {field}: {message}");
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

    println!("=== Event Wizard Demo ===\n");

    let env = WizardEnvironment::new(Arc::new(SampleGateway));
    let store = Store::new(WizardState::new("user-1"), WizardReducer::new(), env);

    println!("Trying to advance an empty form...");
    store.send(WizardAction::NextStep).await;
    print_position(&store).await;

    println!("\nFilling in the basics...");
    store
        .send(WizardAction::TitleChanged("Spring Gala".to_owned()))
        .await;
    store
        .send(WizardAction::EventTypeChanged("FESTIVAL".to_owned()))
        .await;
    store
        .send(WizardAction::VisibilityChanged(Visibility::Public))
        .await;
    store
        .send(WizardAction::DescriptionChanged(
            "Annual fundraiser with live music".to_owned(),
        ))
        .await;
    store.send(WizardAction::NextStep).await;
    print_position(&store).await;

    println!("\nPicking the venue and dates...");
    store
        .send(WizardAction::VenueSelected("venue-1".to_owned()))
        .await;
    if let Some(date) = NaiveDate::from_ymd_opt(2025, 5, 1) {
        store.send(WizardAction::DateAdded(date)).await;
    }
    store.send(WizardAction::NextStep).await;
    print_position(&store).await;

    println!("\nAdding the public details...");
    store
        .send(WizardAction::PhotoAttached("gala.jpg".to_owned()))
        .await;
    store.send(WizardAction::MaxAttendeesChanged(200)).await;
    store
        .send(WizardAction::GuestAdded("Keynote Speaker".to_owned()))
        .await;
    store.send(WizardAction::NextStep).await;
    print_position(&store).await;

    println!("\nSubmitting...");
    store.send(WizardAction::Submit).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    let created = store.state(|s| s.created_event_id.clone()).await;
    match created {
        Some(event_id) => println!("  created event {event_id}"),
        None => println!("  submission did not complete"),
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
