//! Moderation queue entity model.

use serde::{Deserialize, Serialize};

use rentals_core::types::{RecordId, Timestamp, UserId};

use super::kind::ModerationKind;
use crate::record::{Record, Stateful};
use crate::review::ReviewStatus;

/// An item awaiting an admin decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationItem {
    /// Unique queue entry identifier.
    pub id: RecordId,
    /// Identifier of the moderated subject (property, user, review).
    pub subject_id: String,
    /// What is being moderated.
    pub kind: ModerationKind,
    /// Short description shown in the queue.
    pub title: String,
    /// Who submitted or reported the item.
    pub submitted_by: UserId,
    /// Review status.
    pub status: ReviewStatus,
    /// Why the item was flagged.
    #[serde(default)]
    pub reason: String,
    /// When the item entered the queue.
    pub submitted_at: Timestamp,
    /// When an admin last changed the status.
    #[serde(default)]
    pub reviewed_at: Option<Timestamp>,
}

impl Record for ModerationItem {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Stateful for ModerationItem {
    type Status = ReviewStatus;

    fn status(&self) -> ReviewStatus {
        self.status
    }

    fn with_status(&self, status: ReviewStatus, at: Timestamp) -> Self {
        Self {
            status,
            reviewed_at: Some(at),
            ..self.clone()
        }
    }
}
