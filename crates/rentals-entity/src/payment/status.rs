//! Payment status enumeration.

use crate::record::StatusFlow;

string_enum! {
    /// Settlement state of a rent payment.
    pub enum PaymentStatus {
        /// Settled.
        Paid => "paid",
        /// Due in the future.
        Pending => "pending",
        /// Past its due date and unpaid.
        Overdue => "overdue",
    }
}

impl PaymentStatus {
    /// Human-readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
        }
    }

    /// Whether money is still owed.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, Self::Pending | Self::Overdue)
    }
}

impl StatusFlow for PaymentStatus {
    fn can_transition_to(&self, next: &Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Paid) | (Self::Pending, Self::Overdue) | (Self::Overdue, Self::Paid)
        )
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid)
    }
}
