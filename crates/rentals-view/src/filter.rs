//! Multi-criteria filtering.
//!
//! A [`PredicateChain`] holds named, independent predicates. A record
//! survives the chain only if every predicate accepts it, so the order in
//! which predicates were added never changes the result. Applying a chain
//! keeps the input order of the surviving records and never touches the
//! source slice.

use std::fmt;

use rentals_core::types::{SearchQuery, Selection};

type Predicate<'a, R> = Box<dyn Fn(&R) -> bool + 'a>;

/// An AND-combined sequence of named predicates over `R`.
pub struct PredicateChain<'a, R> {
    predicates: Vec<(&'static str, Predicate<'a, R>)>,
}

impl<'a, R> PredicateChain<'a, R> {
    /// An empty chain that accepts every record.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Append a predicate.
    pub fn push(&mut self, name: &'static str, predicate: impl Fn(&R) -> bool + 'a) {
        self.predicates.push((name, Box::new(predicate)));
    }

    /// Builder form of [`PredicateChain::push`].
    pub fn with(mut self, name: &'static str, predicate: impl Fn(&R) -> bool + 'a) -> Self {
        self.push(name, predicate);
        self
    }

    /// Add an equality predicate for one enumerated dimension.
    ///
    /// Nothing is added when the selection is `All`.
    pub fn select<T, F>(self, name: &'static str, selection: &'a Selection<T>, field: F) -> Self
    where
        T: PartialEq + 'a,
        F: Fn(&R) -> T + 'a,
    {
        match selection {
            Selection::All => self,
            Selection::Only(value) => self.with(name, move |record| field(record) == *value),
        }
    }

    /// Add a free-text predicate over the given text fields.
    ///
    /// Nothing is added when the query is blank.
    pub fn search<F>(self, query: &'a SearchQuery, fields: F) -> Self
    where
        F: Fn(&R) -> Vec<&str> + 'a,
    {
        if !query.is_active() {
            return self;
        }
        self.with("search", move |record| query.matches_any(fields(record)))
    }

    /// Number of active predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the chain accepts everything.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Names of the active predicates, in the order they were added.
    pub fn names(&self) -> Vec<&'static str> {
        self.predicates.iter().map(|(name, _)| *name).collect()
    }

    /// Check a single record against every predicate.
    pub fn matches(&self, record: &R) -> bool {
        self.predicates.iter().all(|(_, predicate)| predicate(record))
    }

    /// Borrow the records that pass, in input order.
    pub fn apply_refs<'r>(&self, records: &'r [R]) -> Vec<&'r R> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Copy the records that pass, in input order.
    pub fn apply(&self, records: &[R]) -> Vec<R>
    where
        R: Clone,
    {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

impl<R> Default for PredicateChain<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for PredicateChain<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateChain")
            .field("predicates", &self.names())
            .finish()
    }
}

/// A record kind that list views can filter.
pub trait Filterable: Sized {
    /// The per-dimension filter state for this record kind.
    type Criteria: Clone + Default + PartialEq + fmt::Debug;

    /// Text fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// Build the enumerated-dimension predicates for `criteria`.
    fn dimensions(criteria: &Self::Criteria) -> PredicateChain<'_, Self>;
}

/// Build the full chain for a record kind: enumerated dimensions first,
/// then the free-text search.
pub fn chain_for<'a, R: Filterable + 'a>(
    criteria: &'a R::Criteria,
    query: &'a SearchQuery,
) -> PredicateChain<'a, R> {
    R::dimensions(criteria).search(query, R::search_fields)
}

/// Filter `records` by criteria and free-text query.
pub fn filter_records<R>(records: &[R], criteria: &R::Criteria, query: &SearchQuery) -> Vec<R>
where
    R: Filterable + Clone,
{
    chain_for::<R>(criteria, query).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        status: &'static str,
        amount: i64,
        title: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "a", status: "pending", amount: 100, title: "Lekki flat" },
            Row { id: "b", status: "approved", amount: 200, title: "Yaba studio" },
            Row { id: "c", status: "pending", amount: 50, title: "Ikeja duplex" },
        ]
    }

    #[test]
    fn test_empty_chain_returns_everything() {
        let chain: PredicateChain<'_, Row> = PredicateChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.apply(&rows()), rows());
    }

    #[test]
    fn test_select_keeps_order() {
        let selection = Selection::Only("pending");
        let chain = PredicateChain::new().select("status", &selection, |r: &Row| r.status);
        let ids: Vec<_> = chain.apply(&rows()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_all_selection_adds_nothing() {
        let selection: Selection<&str> = Selection::All;
        let chain = PredicateChain::new().select("status", &selection, |r: &Row| r.status);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_search_and_dimension_combine_with_and() {
        let selection = Selection::Only("pending");
        let query = SearchQuery::new(" IKEJA ");
        let chain = PredicateChain::new()
            .select("status", &selection, |r: &Row| r.status)
            .search(&query, |r: &Row| vec![r.title]);
        assert_eq!(chain.names(), vec!["status", "search"]);
        let ids: Vec<_> = chain.apply_refs(&rows()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["c"]);
    }

    #[test]
    fn test_source_is_untouched() {
        let source = rows();
        let chain = PredicateChain::new().with("cheap", |r: &Row| r.amount < 150);
        let filtered = chain.apply(&source);
        assert_eq!(filtered.len(), 2);
        assert_eq!(source, rows());
    }
}
