//! Review status shared by rental applications and the moderation queue.

use crate::record::StatusFlow;

string_enum! {
    /// Outcome of a landlord or admin review.
    pub enum ReviewStatus {
        /// Submitted, nobody has looked at it yet.
        Pending => "pending",
        /// Picked up by a reviewer.
        UnderReview => "under_review",
        /// Accepted.
        Approved => "approved",
        /// Declined.
        Rejected => "rejected",
    }
}

impl ReviewStatus {
    /// Human-readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::UnderReview => "Under Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Whether the item still awaits a decision.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::UnderReview)
    }
}

impl StatusFlow for ReviewStatus {
    fn can_transition_to(&self, next: &Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::UnderReview)
                | (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
                | (Self::UnderReview, Self::Approved)
                | (Self::UnderReview, Self::Rejected)
        )
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}
