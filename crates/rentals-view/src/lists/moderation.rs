//! Admin moderation queue.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use rentals_core::types::Selection;
use rentals_entity::moderation::{ModerationItem, ModerationKind};
use rentals_entity::review::ReviewStatus;

use super::sort_keys;
use crate::aggregate::Tally;
use crate::filter::{Filterable, PredicateChain};
use crate::sort::{compare_timestamps, Sortable};

/// Filter controls of the moderation queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationCriteria {
    /// Review status.
    pub status: Selection<ReviewStatus>,
    /// What is being moderated.
    pub kind: Selection<ModerationKind>,
}

sort_keys! {
    /// Columns the queue can be ordered by.
    pub enum ModerationSortKey {
        /// When the item entered the queue.
        #[default]
        SubmittedAt => "submitted_at",
        /// Item title.
        Title => "title",
    }
}

impl Filterable for ModerationItem {
    type Criteria = ModerationCriteria;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.reason.as_str(), self.subject_id.as_str()]
    }

    fn dimensions(criteria: &ModerationCriteria) -> PredicateChain<'_, Self> {
        PredicateChain::new()
            .select("status", &criteria.status, |m: &ModerationItem| m.status)
            .select("kind", &criteria.kind, |m: &ModerationItem| m.kind)
    }
}

impl Sortable for ModerationItem {
    type SortKey = ModerationSortKey;

    fn compare(a: &Self, b: &Self, key: ModerationSortKey) -> Ordering {
        match key {
            ModerationSortKey::SubmittedAt => compare_timestamps(&a.submitted_at, &b.submitted_at),
            ModerationSortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}

/// Queue counters on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationStats {
    /// Items per review status.
    pub by_status: Tally<ReviewStatus>,
    /// Items per subject kind.
    pub by_kind: Tally<ModerationKind>,
}

impl ModerationStats {
    /// Aggregate over `items`.
    pub fn compute(items: &[ModerationItem]) -> Self {
        Self {
            by_status: Tally::of(items, ReviewStatus::ALL, |m| m.status),
            by_kind: Tally::of(items, ModerationKind::ALL, |m| m.kind),
        }
    }

    /// Items still waiting for a decision.
    pub fn open(&self) -> usize {
        self.by_status.get(ReviewStatus::Pending) + self.by_status.get(ReviewStatus::UnderReview)
    }
}
