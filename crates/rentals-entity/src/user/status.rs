//! User account status enumeration.

use crate::record::StatusFlow;

string_enum! {
    /// Account standing.
    pub enum UserStatus {
        /// Account is in good standing.
        Active => "active",
        /// Account is blocked by an admin.
        Suspended => "suspended",
        /// Identity documents not yet checked.
        PendingVerification => "pending_verification",
    }
}

impl UserStatus {
    /// Human-readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
            Self::PendingVerification => "Pending Verification",
        }
    }

    /// Check if the user can sign in with this status.
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active | Self::PendingVerification)
    }
}

impl StatusFlow for UserStatus {
    fn can_transition_to(&self, next: &Self) -> bool {
        matches!(
            (self, next),
            (Self::PendingVerification, Self::Active)
                | (Self::PendingVerification, Self::Suspended)
                | (Self::Active, Self::Suspended)
                | (Self::Suspended, Self::Active)
        )
    }

    fn is_terminal(&self) -> bool {
        false
    }
}
