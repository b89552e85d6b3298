//! Rental applications as the landlord reviews them.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use rentals_core::types::{PropertyId, Selection, UserId};
use rentals_entity::application::{ApplicationStatus, RentalApplication};

use super::sort_keys;
use crate::aggregate::{sum_where, Tally};
use crate::filter::{Filterable, PredicateChain};
use crate::sort::{compare_timestamps, Sortable};

/// Filter controls of the application list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationCriteria {
    /// Review status.
    pub status: Selection<ApplicationStatus>,
    /// Restrict to one property.
    pub property: Option<PropertyId>,
    /// Restrict to one landlord's inbox.
    pub landlord: Option<UserId>,
}

sort_keys! {
    /// Columns the application list can be ordered by.
    pub enum ApplicationSortKey {
        /// Submission date.
        #[default]
        SubmittedAt => "submitted_at",
        /// Requested move-in date.
        MoveIn => "move_in",
        /// Offered rent.
        OfferedRent => "offered_rent",
    }
}

impl Filterable for RentalApplication {
    type Criteria = ApplicationCriteria;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.tenant_name.as_str(),
            self.property_title.as_str(),
            self.message.as_str(),
        ]
    }

    fn dimensions(criteria: &ApplicationCriteria) -> PredicateChain<'_, Self> {
        let mut chain = PredicateChain::new().select(
            "status",
            &criteria.status,
            |a: &RentalApplication| a.status,
        );
        if let Some(property) = &criteria.property {
            chain.push("property", move |a| &a.property_id == property);
        }
        if let Some(landlord) = &criteria.landlord {
            chain.push("landlord", move |a| &a.landlord_id == landlord);
        }
        chain
    }
}

impl Sortable for RentalApplication {
    type SortKey = ApplicationSortKey;

    fn compare(a: &Self, b: &Self, key: ApplicationSortKey) -> Ordering {
        match key {
            ApplicationSortKey::SubmittedAt => compare_timestamps(&a.submitted_at, &b.submitted_at),
            ApplicationSortKey::MoveIn => compare_timestamps(&a.move_in_date, &b.move_in_date),
            ApplicationSortKey::OfferedRent => a.offered_rent.cmp(&b.offered_rent),
        }
    }
}

/// Stat cards above the application list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationStats {
    /// Applications per review status.
    pub by_status: Tally<ApplicationStatus>,
    /// Approved applications as a share of all applications.
    pub approval_rate: u32,
    /// Rent offered on applications still awaiting a decision.
    pub open_offers: i64,
}

impl ApplicationStats {
    /// Aggregate over `applications`.
    pub fn compute(applications: &[RentalApplication]) -> Self {
        let by_status = Tally::of(applications, ApplicationStatus::ALL, |a| a.status);
        Self {
            approval_rate: by_status.rate(ApplicationStatus::Approved),
            open_offers: sum_where(applications, |a| a.offered_rent, |a| a.status.is_open()),
            by_status,
        }
    }

    /// Number of applications.
    pub fn total(&self) -> usize {
        self.by_status.total()
    }

    /// Applications not yet decided.
    pub fn awaiting_review(&self) -> usize {
        self.by_status.get(ApplicationStatus::Pending)
            + self.by_status.get(ApplicationStatus::UnderReview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentals_core::types::{RecordId, SearchQuery, SortSpec, Timestamp};

    use crate::aggregate::sum_by;
    use crate::filter::filter_records;
    use crate::sort::sorted;

    fn application(id: &str, status: ApplicationStatus, rent: i64, submitted: &str) -> RentalApplication {
        RentalApplication {
            id: RecordId::new(id),
            property_id: PropertyId::new("prop-1"),
            property_title: "3 Bedroom Flat, Ikoyi".to_string(),
            tenant_id: UserId::new(format!("tenant-{id}")),
            tenant_name: format!("Tenant {id}"),
            landlord_id: UserId::new("landlord-1"),
            status,
            offered_rent: rent,
            move_in_date: Timestamp::parse("2024-06-01").unwrap(),
            submitted_at: Timestamp::parse(submitted).unwrap(),
            message: String::new(),
            reviewed_at: None,
        }
    }

    fn inbox() -> Vec<RentalApplication> {
        vec![
            application("a", ApplicationStatus::Pending, 100, "2024-03-01"),
            application("b", ApplicationStatus::Approved, 200, "2024-03-02"),
            application("c", ApplicationStatus::Pending, 50, "2024-03-03"),
        ]
    }

    #[test]
    fn test_pending_filter_and_sum() {
        let criteria = ApplicationCriteria {
            status: Selection::Only(ApplicationStatus::Pending),
            ..Default::default()
        };
        let pending = filter_records(&inbox(), &criteria, &SearchQuery::default());
        let ids: Vec<_> = pending.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(sum_by(&pending, |a| a.offered_rent), 150);
    }

    #[test]
    fn test_newest_submission_first() {
        let ordered = sorted(&inbox(), SortSpec::default());
        let ids: Vec<_> = ordered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_stats() {
        let stats = ApplicationStats::compute(&inbox());
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.approval_rate, 33);
        assert_eq!(stats.awaiting_review(), 2);
        assert_eq!(stats.open_offers, 150);
        assert_eq!(stats.by_status.get(ApplicationStatus::Rejected), 0);
    }

    #[test]
    fn test_empty_stats_have_zero_rate() {
        let stats = ApplicationStats::compute(&[]);
        assert_eq!(stats.approval_rate, 0);
        assert_eq!(stats.total(), 0);
    }
}
