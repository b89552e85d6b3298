//! Tenant payment history and upcoming dues.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use rentals_core::types::{PropertyId, Selection, Timestamp, UserId};
use rentals_entity::payment::{Payment, PaymentStatus};

use super::{sort_keys, DateRange};
use crate::aggregate::{sum_where, Tally};
use crate::filter::{Filterable, PredicateChain};
use crate::sort::{compare_timestamps, Sortable};

/// Filter controls of the payment list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentCriteria {
    /// Settlement status.
    pub status: Selection<PaymentStatus>,
    /// Restrict to one tenant.
    pub tenant: Option<UserId>,
    /// Restrict to one property.
    pub property: Option<PropertyId>,
    /// Due-date window.
    pub due: DateRange,
}

sort_keys! {
    /// Columns the payment list can be ordered by.
    pub enum PaymentSortKey {
        /// Due date.
        #[default]
        DueDate => "due_date",
        /// Amount.
        Amount => "amount",
    }
}

impl Filterable for Payment {
    type Criteria = PaymentCriteria;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.property_id.as_str()]
    }

    fn dimensions(criteria: &PaymentCriteria) -> PredicateChain<'_, Self> {
        let mut chain =
            PredicateChain::new().select("status", &criteria.status, |p: &Payment| p.status);
        if let Some(tenant) = &criteria.tenant {
            chain.push("tenant", move |p| &p.tenant_id == tenant);
        }
        if let Some(property) = &criteria.property {
            chain.push("property", move |p| &p.property_id == property);
        }
        if criteria.due.is_bounded() {
            chain.push("due", move |p| criteria.due.contains(&p.due_date));
        }
        chain
    }
}

impl Sortable for Payment {
    type SortKey = PaymentSortKey;

    fn compare(a: &Self, b: &Self, key: PaymentSortKey) -> Ordering {
        match key {
            PaymentSortKey::DueDate => compare_timestamps(&a.due_date, &b.due_date),
            PaymentSortKey::Amount => a.amount.cmp(&b.amount),
        }
    }
}

/// Totals shown on the tenant payments page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// Payments per status.
    pub by_status: Tally<PaymentStatus>,
    /// Amount already paid.
    pub total_paid: i64,
    /// Amount pending.
    pub total_pending: i64,
    /// Amount overdue.
    pub total_overdue: i64,
    /// Outstanding payment with the earliest due date.
    pub next_due: Option<Payment>,
}

impl PaymentSummary {
    /// Aggregate over `payments`.
    pub fn compute(payments: &[Payment]) -> Self {
        let total_of =
            |status: PaymentStatus| sum_where(payments, |p| p.amount, |p| p.status == status);
        Self {
            by_status: Tally::of(payments, PaymentStatus::ALL, |p| p.status),
            total_paid: total_of(PaymentStatus::Paid),
            total_pending: total_of(PaymentStatus::Pending),
            total_overdue: total_of(PaymentStatus::Overdue),
            next_due: payments
                .iter()
                .filter(|p| p.status.is_outstanding())
                .min_by(|a, b| compare_timestamps(&a.due_date, &b.due_date))
                .cloned(),
        }
    }

    /// Everything still owed.
    pub fn total_outstanding(&self) -> i64 {
        self.total_pending + self.total_overdue
    }
}

/// Pending payments whose due date is already behind `now`.
///
/// Their ids are what a caller dispatches `Overdue` transitions for.
pub fn past_due<'a>(payments: &'a [Payment], now: &Timestamp) -> Vec<&'a Payment> {
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Pending && &p.due_date < now)
        .collect()
}
