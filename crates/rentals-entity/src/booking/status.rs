//! Booking status enumeration.

use crate::record::StatusFlow;

string_enum! {
    /// Lifecycle of a stay.
    pub enum BookingStatus {
        /// Requested by the guest, not yet accepted.
        Pending => "pending",
        /// Accepted by the hotel manager.
        Confirmed => "confirmed",
        /// Guest has arrived.
        CheckedIn => "checked_in",
        /// Guest has left.
        Completed => "completed",
        /// Called off before arrival.
        Cancelled => "cancelled",
    }
}

impl BookingStatus {
    /// Human-readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::CheckedIn => "Checked In",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether the booking brings in revenue.
    pub fn is_billable(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl StatusFlow for BookingStatus {
    fn can_transition_to(&self, next: &Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::CheckedIn)
                | (Self::Confirmed, Self::Cancelled)
                | (Self::CheckedIn, Self::Completed)
        )
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}
