//! Property availability status.

use crate::record::StatusFlow;

string_enum! {
    /// Availability of a listing.
    pub enum PropertyStatus {
        /// Open for applications.
        Available => "available",
        /// Occupied by a tenant.
        Rented => "rented",
        /// Awaiting admin approval before going live.
        Pending => "pending",
        /// Temporarily withdrawn for repairs.
        Maintenance => "maintenance",
    }
}

impl PropertyStatus {
    /// Human-readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Rented => "Rented",
            Self::Pending => "Pending Approval",
            Self::Maintenance => "Under Maintenance",
        }
    }
}

impl StatusFlow for PropertyStatus {
    fn can_transition_to(&self, next: &Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Available)
                | (Self::Available, Self::Rented)
                | (Self::Available, Self::Maintenance)
                | (Self::Rented, Self::Available)
                | (Self::Maintenance, Self::Available)
        )
    }

    fn is_terminal(&self) -> bool {
        false
    }
}
