//! Landlord earnings ledger.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use rentals_core::types::{PropertyId, Selection, UserId};
use rentals_entity::earning::{Earning, EarningKind, EarningStatus};

use super::{sort_keys, DateRange};
use crate::aggregate::sum_where;
use crate::filter::{Filterable, PredicateChain};
use crate::sort::{compare_timestamps, Sortable};

/// Filter controls of the earnings ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarningCriteria {
    /// Income, expense, or payout.
    pub kind: Selection<EarningKind>,
    /// Settlement status.
    pub status: Selection<EarningStatus>,
    /// Restrict to one landlord.
    pub landlord: Option<UserId>,
    /// Restrict to one property.
    pub property: Option<PropertyId>,
    /// Reporting period.
    pub period: DateRange,
}

sort_keys! {
    /// Columns the ledger can be ordered by.
    pub enum EarningSortKey {
        /// Entry date.
        #[default]
        Date => "date",
        /// Amount.
        Amount => "amount",
    }
}

impl Filterable for Earning {
    type Criteria = EarningCriteria;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.category.as_str()]
    }

    fn dimensions(criteria: &EarningCriteria) -> PredicateChain<'_, Self> {
        let mut chain = PredicateChain::new()
            .select("kind", &criteria.kind, |e: &Earning| e.kind)
            .select("status", &criteria.status, |e: &Earning| e.status);
        if let Some(landlord) = &criteria.landlord {
            chain.push("landlord", move |e| &e.landlord_id == landlord);
        }
        if let Some(property) = &criteria.property {
            chain.push("property", move |e| e.property_id.as_ref() == Some(property));
        }
        if criteria.period.is_bounded() {
            chain.push("period", move |e| criteria.period.contains(&e.date));
        }
        chain
    }
}

impl Sortable for Earning {
    type SortKey = EarningSortKey;

    fn compare(a: &Self, b: &Self, key: EarningSortKey) -> Ordering {
        match key {
            EarningSortKey::Date => compare_timestamps(&a.date, &b.date),
            EarningSortKey::Amount => a.amount.cmp(&b.amount),
        }
    }
}

/// Summary cards and chart data of the earnings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsSummary {
    /// Sum of income entries.
    pub total_income: i64,
    /// Sum of expense entries.
    pub total_expenses: i64,
    /// Sum of payouts to the landlord's bank account.
    pub total_payouts: i64,
    /// Income minus expenses minus payouts.
    pub net: i64,
    /// Income not yet settled.
    pub pending_income: i64,
    /// Income per `YYYY-MM`, oldest first.
    pub monthly_income: BTreeMap<String, i64>,
}

impl EarningsSummary {
    /// Aggregate over `earnings`.
    pub fn compute(earnings: &[Earning]) -> Self {
        let total_of = |kind: EarningKind| sum_where(earnings, |e| e.amount, |e| e.kind == kind);
        let total_income = total_of(EarningKind::Income);
        let total_expenses = total_of(EarningKind::Expense);
        let total_payouts = total_of(EarningKind::Payout);

        let mut monthly_income = BTreeMap::new();
        for entry in earnings.iter().filter(|e| e.kind == EarningKind::Income) {
            *monthly_income.entry(entry.date.month_key()).or_insert(0) += entry.amount;
        }

        Self {
            total_income,
            total_expenses,
            total_payouts,
            net: total_income - total_expenses - total_payouts,
            pending_income: sum_where(
                earnings,
                |e| e.amount,
                |e| e.kind == EarningKind::Income && e.status == EarningStatus::Pending,
            ),
            monthly_income,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentals_core::types::{RecordId, SearchQuery, Timestamp};

    use crate::filter::filter_records;

    fn entry(id: &str, kind: EarningKind, status: EarningStatus, amount: i64, date: &str) -> Earning {
        Earning {
            id: RecordId::new(id),
            landlord_id: UserId::new("landlord-1"),
            property_id: Some(PropertyId::new("prop-1")),
            description: format!("{} {id}", kind.label()),
            kind,
            category: "rent".to_string(),
            amount,
            status,
            date: Timestamp::parse(date).unwrap(),
        }
    }

    fn ledger() -> Vec<Earning> {
        vec![
            entry("e1", EarningKind::Income, EarningStatus::Completed, 1_200_000, "2024-01-05"),
            entry("e2", EarningKind::Expense, EarningStatus::Completed, 150_000, "2024-01-20"),
            entry("e3", EarningKind::Income, EarningStatus::Pending, 800_000, "2024-02-01"),
            entry("e4", EarningKind::Payout, EarningStatus::Completed, 500_000, "2024-02-10"),
            entry("e5", EarningKind::Income, EarningStatus::Completed, 300_000, "2024-02-28"),
        ]
    }

    #[test]
    fn test_summary_totals() {
        let summary = EarningsSummary::compute(&ledger());
        assert_eq!(summary.total_income, 2_300_000);
        assert_eq!(summary.total_expenses, 150_000);
        assert_eq!(summary.total_payouts, 500_000);
        assert_eq!(summary.net, 1_650_000);
        assert_eq!(summary.pending_income, 800_000);
    }

    #[test]
    fn test_monthly_series() {
        let summary = EarningsSummary::compute(&ledger());
        let months: Vec<_> = summary.monthly_income.iter().collect();
        assert_eq!(
            months,
            vec![
                (&"2024-01".to_string(), &1_200_000),
                (&"2024-02".to_string(), &1_100_000),
            ]
        );
    }

    #[test]
    fn test_empty_ledger() {
        let summary = EarningsSummary::compute(&[]);
        assert_eq!(summary.net, 0);
        assert!(summary.monthly_income.is_empty());
    }

    #[test]
    fn test_period_filter() {
        let criteria = EarningCriteria {
            kind: Selection::Only(EarningKind::Income),
            period: DateRange {
                from: Some(Timestamp::parse("2024-02-01").unwrap()),
                to: None,
            },
            ..Default::default()
        };
        let found = filter_records(&ledger(), &criteria, &SearchQuery::default());
        let ids: Vec<_> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e3", "e5"]);
    }
}
