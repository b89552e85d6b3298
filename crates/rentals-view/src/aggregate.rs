//! Summary statistics over record collections.
//!
//! Every function recomputes from scratch; collections are small.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Count records matching a predicate.
pub fn count_where<R>(records: &[R], predicate: impl Fn(&R) -> bool) -> usize {
    records.iter().filter(|r| predicate(r)).count()
}

/// Sum a numeric field over every record.
pub fn sum_by<R>(records: &[R], field: impl Fn(&R) -> i64) -> i64 {
    records.iter().map(field).sum()
}

/// Sum a numeric field over the records matching a predicate.
pub fn sum_where<R>(
    records: &[R],
    field: impl Fn(&R) -> i64,
    predicate: impl Fn(&R) -> bool,
) -> i64 {
    records.iter().filter(|r| predicate(r)).map(field).sum()
}

/// `part / whole` as a whole-number percentage, rounded half up.
///
/// A zero `whole` yields 0.
pub fn rate(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let percent = (part as u128 * 100 + whole as u128 / 2) / whole as u128;
    u32::try_from(percent).unwrap_or(u32::MAX)
}

/// Per-member counts of one enumerated field.
///
/// Every member of the enumeration is present, with zero when no record
/// carries it, so stat cards never miss a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally<K: Ord> {
    counts: BTreeMap<K, usize>,
    total: usize,
}

impl<K: Ord + Copy> Tally<K> {
    /// Count `records` by `key`, seeding every member of `members`.
    pub fn of<R>(records: &[R], members: &[K], key: impl Fn(&R) -> K) -> Self {
        let mut counts: BTreeMap<K, usize> = members.iter().map(|m| (*m, 0)).collect();
        for record in records {
            *counts.entry(key(record)).or_insert(0) += 1;
        }
        Self {
            counts,
            total: records.len(),
        }
    }

    /// Count for one member.
    pub fn get(&self, member: K) -> usize {
        self.counts.get(&member).copied().unwrap_or(0)
    }

    /// Number of records counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of one member as a whole-number percentage.
    pub fn rate(&self, member: K) -> u32 {
        rate(self.get(member), self.total)
    }

    /// Iterate members and their counts in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Status {
        Pending,
        Approved,
        Rejected,
    }

    const ALL: &[Status] = &[Status::Pending, Status::Approved, Status::Rejected];

    fn records() -> Vec<(Status, i64)> {
        vec![
            (Status::Pending, 100),
            (Status::Approved, 200),
            (Status::Pending, 50),
        ]
    }

    #[test]
    fn test_conditional_sum() {
        let total = sum_where(&records(), |r| r.1, |r| r.0 == Status::Pending);
        assert_eq!(total, 150);
        assert_eq!(sum_by(&records(), |r| r.1), 350);
    }

    #[test]
    fn test_tally_seeds_every_member() {
        let tally = Tally::of(&records(), ALL, |r| r.0);
        assert_eq!(tally.get(Status::Pending), 2);
        assert_eq!(tally.get(Status::Rejected), 0);
        assert_eq!(tally.iter().map(|(_, n)| n).sum::<usize>(), tally.total());
        assert_eq!(tally.rate(Status::Approved), 33);
    }

    #[test]
    fn test_rate_rounding_and_zero_guard() {
        assert_eq!(rate(0, 0), 0);
        assert_eq!(rate(5, 0), 0);
        assert_eq!(rate(1, 3), 33);
        assert_eq!(rate(2, 3), 67);
        assert_eq!(rate(1, 8), 13);
        assert_eq!(rate(3, 3), 100);
    }

    #[test]
    fn test_count_where() {
        assert_eq!(count_where(&records(), |r| r.1 > 60), 2);
        assert_eq!(count_where::<(Status, i64)>(&[], |_| true), 0);
    }
}
