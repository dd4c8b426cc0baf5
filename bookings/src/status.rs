//! Booking status codes and their display mapping.

use serde::{Deserialize, Serialize};

/// Raw approval/payment status of a booking.
///
/// The backend emits a closed set of five codes in practice, but the mapping
/// is total: an unrecognized code is carried through as [`Other`] and
/// displayed verbatim rather than rejected.
///
/// [`Other`]: BookingStatus::Other
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    /// Awaiting manager approval
    Pending,
    /// Approved and paid in full
    ApprovedPaid,
    /// Approved but with an outstanding balance
    ApprovedNotPaid,
    /// Cancelled by the client
    Cancelled,
    /// Rejected by the manager
    Rejected,
    /// Any code this client does not know about
    Other(String),
}

impl BookingStatus {
    /// The wire code, round-tripping exactly what the backend sent
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::ApprovedPaid => "APPROVED_PAID",
            Self::ApprovedNotPaid => "APPROVED_NOT_PAID",
            Self::Cancelled => "CANCELLED",
            Self::Rejected => "REJECTED",
            Self::Other(code) => code,
        }
    }

    /// The user-facing label for this status
    ///
    /// Total over all inputs: unknown codes display as themselves.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::ApprovedPaid => "Paid",
            Self::ApprovedNotPaid => "Unpaid",
            Self::Cancelled => "Cancelled",
            Self::Rejected => "Rejected",
            Self::Other(code) => code,
        }
    }

    /// Whether the booking counts as confirmed (approved, paid or not)
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::ApprovedPaid | Self::ApprovedNotPaid)
    }

    /// Whether the booking is closed (cancelled or rejected)
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Rejected)
    }
}

impl From<String> for BookingStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "PENDING" => Self::Pending,
            "APPROVED_PAID" => Self::ApprovedPaid,
            "APPROVED_NOT_PAID" => Self::ApprovedNotPaid,
            "CANCELLED" => Self::Cancelled,
            "REJECTED" => Self::Rejected,
            _ => Self::Other(code),
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(code: &str) -> Self {
        Self::from(code.to_owned())
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.code().to_owned()
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_label())
    }
}
