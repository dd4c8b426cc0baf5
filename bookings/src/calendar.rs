//! Month grid construction and day-level status classification.

use chrono::{Datelike, NaiveDate};

use crate::model::BookingEntry;

/// Which entry a day cell keeps when several share its date.
///
/// The dashboard historically kept the first match in fetch order; that
/// choice is explicit and configurable here so double-booked dates are a
/// policy decision rather than an accident.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Keep the first entry in list order (observed behavior)
    #[default]
    FirstMatch,
    /// Keep the last entry in list order
    LastMatch,
}

/// Visual state of a day cell, in precedence order.
///
/// Classification is top-down first-match: a past day is muted even when it
/// carries a booking, and today's ring beats every booking style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayStatus {
    /// Leading blank before the 1st of the month
    Padding,
    /// Day strictly before today
    Past,
    /// Today
    Today,
    /// Booked, approved (paid or unpaid)
    Confirmed,
    /// Booked, awaiting approval
    Pending,
    /// Booked, cancelled or rejected
    Cancelled,
    /// Booked with an unrecognized status
    Booked,
    /// Free day in the future
    Available,
}

/// One square of the rendered calendar grid.
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    /// The cell's date; `None` for leading padding cells
    pub date: Option<NaiveDate>,
    /// At most one booking entry whose date matches this cell
    pub booking: Option<BookingEntry>,
    /// Whether this cell is today
    pub is_today: bool,
    /// Whether this cell is strictly before today
    pub is_past: bool,
}

impl DayCell {
    const fn padding() -> Self {
        Self {
            date: None,
            booking: None,
            is_today: false,
            is_past: false,
        }
    }

    /// Whether any booking entry landed on this day
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        self.booking.is_some()
    }

    /// Classify the cell for rendering, first match wins
    #[must_use]
    pub fn status(&self) -> DayStatus {
        if self.date.is_none() {
            return DayStatus::Padding;
        }
        if self.is_past {
            return DayStatus::Past;
        }
        if self.is_today {
            return DayStatus::Today;
        }
        match &self.booking {
            Some(entry) if entry.status.is_confirmed() => DayStatus::Confirmed,
            Some(entry) if entry.status == crate::BookingStatus::Pending => DayStatus::Pending,
            Some(entry) if entry.status.is_closed() => DayStatus::Cancelled,
            Some(_) => DayStatus::Booked,
            None => DayStatus::Available,
        }
    }
}

/// A 7-column month view: leading padding cells, then one cell per day.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    /// Target year
    pub year: i32,
    /// Target month (1-12)
    pub month: u32,
    /// `start_day_of_week` padding cells followed by the month's days
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Build the grid for `base` shifted by `offset_months`.
    ///
    /// Only the year and month of `base` matter; its day-of-month is
    /// ignored, and `base` itself is never modified (two consecutive months
    /// build from the same base with offsets 0 and 1). Padding equals the
    /// weekday of the 1st with Sunday as 0. Each day keeps at most one
    /// matching entry, chosen by `policy`.
    #[must_use]
    pub fn build(
        base: NaiveDate,
        offset_months: i32,
        entries: &[BookingEntry],
        today: NaiveDate,
        policy: OverlapPolicy,
    ) -> Self {
        let months0 = i64::from(base.year()) * 12 + i64::from(base.month0()) + i64::from(offset_months);
        let year = i32::try_from(months0.div_euclid(12)).unwrap_or(base.year());
        let month = u32::try_from(months0.rem_euclid(12)).unwrap_or(0) + 1;

        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            // Out of chrono's representable range; degrade to an empty grid
            return Self {
                year,
                month,
                cells: Vec::new(),
            };
        };

        let start_day_of_week = first.weekday().num_days_from_sunday() as usize;
        let mut cells = vec![DayCell::padding(); start_day_of_week];

        for day in 1..=31 {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                break;
            };
            let booking = match policy {
                OverlapPolicy::FirstMatch => entries.iter().find(|e| e.date == date),
                OverlapPolicy::LastMatch => entries.iter().rev().find(|e| e.date == date),
            };
            cells.push(DayCell {
                date: Some(date),
                booking: booking.cloned(),
                is_today: date == today,
                is_past: date < today,
            });
        }

        Self { year, month, cells }
    }

    /// Number of leading padding cells
    #[must_use]
    pub fn start_day_of_week(&self) -> usize {
        self.cells.iter().take_while(|c| c.date.is_none()).count()
    }

    /// Number of real days in the month
    #[must_use]
    pub fn days_in_month(&self) -> usize {
        self.cells.len() - self.start_day_of_week()
    }

    /// Header line, e.g. "March 2025"
    #[must_use]
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }

    /// Column headers, Sunday first
    #[must_use]
    pub const fn weekday_headers() -> [&'static str; 7] {
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
    }
}
