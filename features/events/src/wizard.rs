//! Event-creation wizard, modeled as an explicit finite state machine.
//!
//! Steps run BasicInfo → VenueDate → Details → Review, except that private
//! events skip Details entirely (in both directions). Advancing runs the
//! current step's validation gate and stays put on failure; going back never
//! validates. Submission is only possible from Review after every applicable
//! gate passes, and nothing partial is ever sent.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use venuebook_api::events::NewEvent;
use venuebook_api::{ApiClient, ApiError};
use venuebook_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Field-keyed validation errors, ordered for stable display
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Who can see and register for an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Anyone can see and register
    Public,
    /// Invitation only; the Details step does not apply
    Private,
    /// Visible to selected organizations only
    Restricted,
}

impl Visibility {
    /// The wire code the backend expects
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
            Self::Restricted => "RESTRICTED",
        }
    }
}

/// The wizard's steps, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    /// Title, type, visibility, description
    BasicInfo,
    /// Venue selection and dates
    VenueDate,
    /// Photo, attendance cap, guest list (public events only)
    Details,
    /// Read-only review before submission
    Review,
}

impl WizardStep {
    /// The step after this one, skipping Details for private events
    #[must_use]
    pub const fn next(self, private: bool) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::VenueDate),
            Self::VenueDate => {
                if private {
                    Some(Self::Review)
                } else {
                    Some(Self::Details)
                }
            },
            Self::Details => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// The step before this one, skipping Details for private events
    #[must_use]
    pub const fn previous(self, private: bool) -> Option<Self> {
        match self {
            Self::BasicInfo => None,
            Self::VenueDate => Some(Self::BasicInfo),
            Self::Details => Some(Self::VenueDate),
            Self::Review => {
                if private {
                    Some(Self::VenueDate)
                } else {
                    Some(Self::Details)
                }
            },
        }
    }

    /// Whether this step appears in the flow at all
    #[must_use]
    pub const fn applies(self, private: bool) -> bool {
        !(private && matches!(self, Self::Details))
    }

    /// 1-based position among the applicable steps
    #[must_use]
    pub const fn position(self, private: bool) -> usize {
        match self {
            Self::BasicInfo => 1,
            Self::VenueDate => 2,
            Self::Details => 3,
            Self::Review => {
                if private {
                    3
                } else {
                    4
                }
            },
        }
    }
}

/// How many steps the flow has for the given visibility
#[must_use]
pub const fn total_steps(private: bool) -> usize {
    if private { 3 } else { 4 }
}

/// The form data accumulated across steps.
#[derive(Clone, Debug, Default)]
pub struct EventDraft {
    /// Display title
    pub title: String,
    /// Category code (CONFERENCE, WEDDING, ...)
    pub event_type: String,
    /// Who can see the event; `None` until the organizer picks one
    pub visibility: Option<Visibility>,
    /// Free-text description
    pub description: String,
    /// Organizer user id
    pub organizer_id: String,
    /// Venue to run in
    pub venue_id: String,
    /// Dates the event runs on
    pub dates: Vec<NaiveDate>,
    /// Poster photo reference
    pub photo: Option<String>,
    /// Cap on attendance
    pub max_attendees: Option<u32>,
    /// Named guests/speakers
    pub guests: Vec<String>,
    /// Whether entry is paid
    pub is_entry_paid: bool,
    /// Free-text notes for the venue manager
    pub special_notes: String,
}

impl EventDraft {
    /// Whether the draft describes a private event
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.visibility == Some(Visibility::Private)
    }
}

/// Validate one step's gate against the draft.
///
/// Returns field-keyed errors; empty means the gate passes. The Details
/// gate passes vacuously for private events.
#[must_use]
pub fn validate_step(step: WizardStep, draft: &EventDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match step {
        WizardStep::BasicInfo => {
            if draft.title.trim().is_empty() {
                errors.insert("title", "Event title is required".to_owned());
            }
            if draft.event_type.trim().is_empty() {
                errors.insert("event_type", "Event type is required".to_owned());
            }
            if draft.visibility.is_none() {
                errors.insert("visibility", "Visibility is required".to_owned());
            }
            if draft.description.trim().is_empty() {
                errors.insert("description", "Description is required".to_owned());
            }
        },
        WizardStep::VenueDate => {
            if draft.venue_id.trim().is_empty() {
                errors.insert("venue_id", "Venue selection is required".to_owned());
            }
            if draft.dates.is_empty() {
                errors.insert("dates", "At least one date is required".to_owned());
            }
        },
        WizardStep::Details => {
            if !draft.is_private() {
                if draft.photo.is_none() {
                    errors.insert("photo", "Event photo is required".to_owned());
                }
                if draft.max_attendees.is_none() {
                    errors.insert("max_attendees", "Max attendees is required".to_owned());
                }
                if !draft.guests.iter().any(|guest| !guest.trim().is_empty()) {
                    errors.insert("guests", "At least one guest is required".to_owned());
                }
            }
        },
        WizardStep::Review => {},
    }

    errors
}

/// Validate every applicable gate, for submission.
#[must_use]
pub fn validate_all(draft: &EventDraft) -> FieldErrors {
    let mut errors = validate_step(WizardStep::BasicInfo, draft);
    errors.extend(validate_step(WizardStep::VenueDate, draft));
    errors.extend(validate_step(WizardStep::Details, draft));
    errors
}

/// Transient state of the wizard.
#[derive(Clone, Debug)]
pub struct WizardState {
    /// Where the organizer currently is
    pub step: WizardStep,
    /// The form data so far
    pub draft: EventDraft,
    /// Validation errors for the current step, keyed by field
    pub errors: FieldErrors,
    /// Whether a submission is in flight
    pub submitting: bool,
    /// Backend id of the created event, once submission succeeds
    pub created_event_id: Option<String>,
    /// Last submission failure
    pub submit_error: Option<String>,
}

impl WizardState {
    /// Fresh wizard for an organizer
    #[must_use]
    pub fn new(organizer_id: impl Into<String>) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            draft: EventDraft {
                organizer_id: organizer_id.into(),
                ..EventDraft::default()
            },
            errors: FieldErrors::new(),
            submitting: false,
            created_event_id: None,
            submit_error: None,
        }
    }

    /// Progress through the flow, 0.0 to 1.0
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // step counts are tiny
    pub fn progress(&self) -> f64 {
        let private = self.draft.is_private();
        self.step.position(private) as f64 / total_steps(private) as f64
    }
}

/// Everything that can happen in the wizard.
#[derive(Clone, Debug)]
pub enum WizardAction {
    /// The title field changed
    TitleChanged(String),
    /// The event type dropdown changed
    EventTypeChanged(String),
    /// The visibility dropdown changed
    VisibilityChanged(Visibility),
    /// The description field changed
    DescriptionChanged(String),
    /// A venue was picked
    VenueSelected(String),
    /// A date row was added
    DateAdded(NaiveDate),
    /// A date row was removed
    DateRemoved(usize),
    /// A poster photo was attached
    PhotoAttached(String),
    /// The attendance cap changed
    MaxAttendeesChanged(u32),
    /// A guest row was added
    GuestAdded(String),
    /// A guest row was removed
    GuestRemoved(usize),
    /// The paid-entry toggle changed
    EntryPaidToggled(bool),
    /// The special notes field changed
    SpecialNotesChanged(String),
    /// The Next button: validate the current gate, then advance
    NextStep,
    /// The Previous button: go back without validating
    PreviousStep,
    /// The Submit button on the Review step
    Submit,
    /// Submission resolved
    SubmitSucceeded {
        /// Backend id of the created event
        event_id: String,
    },
    /// Submission failed; the organizer resubmits manually
    SubmitFailed {
        /// Human-readable failure description
        reason: String,
    },
}

/// The one backend operation the wizard needs, behind a trait so tests can
/// stub it.
#[async_trait]
pub trait EventsGateway: Send + Sync {
    /// Create the event described by the draft
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport, auth or backend failures.
    async fn submit_event(&self, draft: EventDraft) -> Result<String, ApiError>;
}

#[async_trait]
impl EventsGateway for ApiClient {
    async fn submit_event(&self, draft: EventDraft) -> Result<String, ApiError> {
        let visibility = draft.visibility.map_or("PUBLIC", Visibility::code);
        let event = NewEvent {
            event_title: draft.title,
            event_type: draft.event_type,
            visibility_scope: visibility.to_owned(),
            event_organizer_id: draft.organizer_id,
            venue_id: draft.venue_id,
            description: draft.description,
            dates: draft.dates,
            max_attendees: draft.max_attendees,
            guests: draft.guests,
            is_entry_paid: draft.is_entry_paid,
            special_notes: (!draft.special_notes.trim().is_empty())
                .then_some(draft.special_notes),
        };

        let response = self.create_event(event, None).await?;
        Ok(response.data.map(|e| e.event_id).unwrap_or_default())
    }
}

/// Environment dependencies for the wizard reducer
#[derive(Clone)]
pub struct WizardEnvironment {
    /// Backend access
    pub gateway: Arc<dyn EventsGateway>,
}

impl WizardEnvironment {
    /// Creates a new `WizardEnvironment`
    #[must_use]
    pub fn new(gateway: Arc<dyn EventsGateway>) -> Self {
        Self { gateway }
    }
}

/// Reducer for the event-creation wizard
#[derive(Clone, Debug, Default)]
pub struct WizardReducer;

impl WizardReducer {
    /// Creates a new `WizardReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Editing a field clears its pending error
    fn touch(state: &mut WizardState, field: &'static str) {
        state.errors.remove(field);
    }
}

impl Reducer for WizardReducer {
    type State = WizardState;
    type Action = WizardAction;
    type Environment = WizardEnvironment;

    #[allow(clippy::too_many_lines)] // one arm per form control
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            WizardAction::TitleChanged(title) => {
                state.draft.title = title;
                Self::touch(state, "title");
                SmallVec::new()
            },
            WizardAction::EventTypeChanged(event_type) => {
                state.draft.event_type = event_type;
                Self::touch(state, "event_type");
                SmallVec::new()
            },
            WizardAction::VisibilityChanged(visibility) => {
                state.draft.visibility = Some(visibility);
                Self::touch(state, "visibility");
                SmallVec::new()
            },
            WizardAction::DescriptionChanged(description) => {
                state.draft.description = description;
                Self::touch(state, "description");
                SmallVec::new()
            },
            WizardAction::VenueSelected(venue_id) => {
                state.draft.venue_id = venue_id;
                Self::touch(state, "venue_id");
                SmallVec::new()
            },
            WizardAction::DateAdded(date) => {
                state.draft.dates.push(date);
                Self::touch(state, "dates");
                SmallVec::new()
            },
            WizardAction::DateRemoved(index) => {
                if index < state.draft.dates.len() {
                    state.draft.dates.remove(index);
                }
                SmallVec::new()
            },
            WizardAction::PhotoAttached(photo) => {
                state.draft.photo = Some(photo);
                Self::touch(state, "photo");
                SmallVec::new()
            },
            WizardAction::MaxAttendeesChanged(max_attendees) => {
                state.draft.max_attendees = Some(max_attendees);
                Self::touch(state, "max_attendees");
                SmallVec::new()
            },
            WizardAction::GuestAdded(guest) => {
                state.draft.guests.push(guest);
                Self::touch(state, "guests");
                SmallVec::new()
            },
            WizardAction::GuestRemoved(index) => {
                if index < state.draft.guests.len() {
                    state.draft.guests.remove(index);
                }
                SmallVec::new()
            },
            WizardAction::EntryPaidToggled(is_entry_paid) => {
                state.draft.is_entry_paid = is_entry_paid;
                SmallVec::new()
            },
            WizardAction::SpecialNotesChanged(special_notes) => {
                state.draft.special_notes = special_notes;
                SmallVec::new()
            },

            WizardAction::NextStep => {
                state.errors = validate_step(state.step, &state.draft);
                if state.errors.is_empty() {
                    if let Some(next) = state.step.next(state.draft.is_private()) {
                        state.step = next;
                    }
                }
                SmallVec::new()
            },

            WizardAction::PreviousStep => {
                if let Some(previous) = state.step.previous(state.draft.is_private()) {
                    state.step = previous;
                    state.errors.clear();
                }
                SmallVec::new()
            },

            WizardAction::Submit => {
                if state.step != WizardStep::Review || state.submitting {
                    return SmallVec::new();
                }
                state.errors = validate_all(&state.draft);
                if !state.errors.is_empty() {
                    tracing::debug!(fields = state.errors.len(), "submission blocked by validation");
                    return SmallVec::new();
                }

                state.submitting = true;
                state.submit_error = None;
                let gateway = Arc::clone(&env.gateway);
                let draft = state.draft.clone();
                tracing::debug!(title = %draft.title, "submitting event");

                smallvec![Effect::Future(Box::pin(async move {
                    match gateway.submit_event(draft).await {
                        Ok(event_id) => Some(WizardAction::SubmitSucceeded { event_id }),
                        Err(error) => Some(WizardAction::SubmitFailed {
                            reason: error.to_string(),
                        }),
                    }
                }))]
            },

            WizardAction::SubmitSucceeded { event_id } => {
                state.submitting = false;
                tracing::debug!(%event_id, "event created");
                state.created_event_id = Some(event_id);
                SmallVec::new()
            },

            WizardAction::SubmitFailed { reason } => {
                state.submitting = false;
                tracing::warn!(%reason, "event submission failed");
                state.submit_error = Some(reason);
                SmallVec::new()
            },
        }
    }
}
