//! Stable ordering of record collections.

use std::cmp::Ordering;
use std::fmt::Debug;

use rentals_core::types::{SortDirection, SortSpec, Timestamp};

/// A record kind that list views can order.
pub trait Sortable {
    /// The fields this record kind can be sorted by.
    type SortKey: Copy + Eq + Debug + Default;

    /// Compare two records by `key`, ascending.
    fn compare(a: &Self, b: &Self, key: Self::SortKey) -> Ordering;
}

/// Compare two instants by their epoch value.
pub fn compare_timestamps(a: &Timestamp, b: &Timestamp) -> Ordering {
    a.epoch_millis().cmp(&b.epoch_millis())
}

/// Sort in place. Records with equal keys keep their relative order.
pub fn sort_in_place<R: Sortable>(records: &mut [R], spec: SortSpec<R::SortKey>) {
    records.sort_by(|a, b| spec.direction.apply(R::compare(a, b, spec.key)));
}

/// Return a sorted copy, leaving `records` untouched.
pub fn sorted<R: Sortable + Clone>(records: &[R], spec: SortSpec<R::SortKey>) -> Vec<R> {
    let mut out = records.to_vec();
    sort_in_place(&mut out, spec);
    out
}

/// Order any collection by a timestamp field.
///
/// `Desc` puts the newest first; `Asc` puts the soonest first, which is
/// what "upcoming" lists want.
pub fn by_timestamp<R, F>(records: &mut [R], field: F, direction: SortDirection)
where
    F: Fn(&R) -> Timestamp,
{
    records.sort_by(|a, b| direction.apply(compare_timestamps(&field(a), &field(b))));
}
