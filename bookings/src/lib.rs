//! # Venuebook Bookings
//!
//! The booking-calendar aggregation and filtering engine.
//!
//! Given the raw booking records a venue query returns, this crate:
//!
//! - expands each (possibly multi-date) record into one display entry per
//!   calendar date ([`expand`]), and derives the dashboard summary counts
//!   ([`BookingSummary`]);
//! - builds a 7-column month grid with day-level status classification
//!   ([`MonthGrid`]);
//! - filters the expanded entries by free text, status and selected date,
//!   and paginates the result into fixed-size pages ([`BookingFilter`],
//!   [`paginate`]).
//!
//! Everything here is a pure function of its inputs: the feature reducers
//! recompute these views in full on every fetch or filter change, exactly
//! like the page they model. No I/O, no caching, no interior mutability.

pub mod aggregate;
pub mod calendar;
pub mod filter;
pub mod model;
pub mod status;

pub use aggregate::{BookingSummary, expand};
pub use calendar::{DayCell, DayStatus, MonthGrid, OverlapPolicy};
pub use filter::{BookingFilter, DEFAULT_PAGE_SIZE, Page, StatusFilter, paginate};
pub use model::{BookingDate, BookingEntry, RawBooking, VenueContext};
pub use status::BookingStatus;
