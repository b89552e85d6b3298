//! List view state as an explicit reducer.
//!
//! A [`ViewState`] is an immutable snapshot of everything a list screen
//! controls: filter criteria, search text, sort order, and page position.
//! Each user interaction is a [`ViewAction`]; [`ViewState::reduce`] maps
//! the old snapshot and the action to a new snapshot. Any action that
//! changes the filtered set or its order also moves the page back to 1 in
//! the same step, so the page can never point past the end of a freshly
//! narrowed result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use rentals_core::types::{EmptyPages, Page, PageRequest, SearchQuery, SortSpec};
use rentals_core::AppResult;

use crate::filter::{chain_for, Filterable};
use crate::paginate::paginate;
use crate::sort::{sort_in_place, Sortable};

/// One interaction with a list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction<C, K> {
    /// Replace every filter dimension at once.
    SetCriteria(C),
    /// Replace the free-text search.
    Search(String),
    /// Change the sort order.
    SortBy(SortSpec<K>),
    /// Jump to a page (1-based).
    GoToPage(u64),
    /// Advance one page.
    NextPage,
    /// Go back one page, stopping at 1.
    PreviousPage,
    /// Change the page size; the view returns to page 1.
    SetPageSize(u64),
    /// Drop every filter and the search text.
    ClearFilters,
}

/// Snapshot of a list screen's controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState<C, K> {
    /// Enumerated filter dimensions.
    pub criteria: C,
    /// Free-text search.
    pub query: SearchQuery,
    /// Sort order.
    pub sort: SortSpec<K>,
    /// Page position.
    pub page: PageRequest,
}

/// The view state for record kind `R`.
pub type ListState<R> = ViewState<<R as Filterable>::Criteria, <R as Sortable>::SortKey>;

impl<C, K> ViewState<C, K>
where
    C: Clone + Default + PartialEq + std::fmt::Debug,
    K: Copy + Eq + std::fmt::Debug + Default,
{
    /// A fresh view: no filters, default sort, page 1 at `page_size`.
    pub fn new(page_size: u64) -> AppResult<Self> {
        Ok(Self {
            criteria: C::default(),
            query: SearchQuery::default(),
            sort: SortSpec::default(),
            page: PageRequest::first(page_size)?,
        })
    }

    /// Apply one action, producing the next snapshot.
    ///
    /// Fails only on a precondition violation (page 0, page size 0); the
    /// current snapshot is then left as it was.
    pub fn reduce(&self, action: ViewAction<C, K>) -> AppResult<Self> {
        let mut next = self.clone();
        match action {
            ViewAction::SetCriteria(criteria) => {
                if criteria != next.criteria {
                    next.criteria = criteria;
                    next.page = next.page.reset();
                }
            }
            ViewAction::Search(raw) => {
                let query = SearchQuery::new(&raw);
                if query != next.query {
                    next.query = query;
                    next.page = next.page.reset();
                }
            }
            ViewAction::SortBy(sort) => {
                if sort != next.sort {
                    next.sort = sort;
                    next.page = next.page.reset();
                }
            }
            ViewAction::GoToPage(page) => {
                next.page = PageRequest::new(page, next.page.page_size)?;
            }
            ViewAction::NextPage => {
                next.page = PageRequest::new(next.page.page.saturating_add(1), next.page.page_size)?;
            }
            ViewAction::PreviousPage => {
                next.page = PageRequest::new(next.page.page.saturating_sub(1).max(1), next.page.page_size)?;
            }
            ViewAction::SetPageSize(size) => {
                next.page = PageRequest::first(size)?;
            }
            ViewAction::ClearFilters => {
                next.criteria = C::default();
                next.query = SearchQuery::default();
                next.page = next.page.reset();
            }
        }
        debug!(
            page = next.page.page,
            page_size = next.page.page_size,
            query = %next.query,
            "List view state updated"
        );
        Ok(next)
    }

    /// Whether any filter or search is narrowing the result.
    pub fn is_filtered(&self) -> bool {
        self.criteria != C::default() || self.query.is_active()
    }
}

/// Derived output of a list screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rendered<R> {
    /// The visible page of filtered, sorted records.
    pub page: Page<R>,
    /// Size of the unfiltered collection.
    pub source_total: u64,
}

impl<R> Rendered<R> {
    /// Whether the empty state ("No items found") should be shown.
    pub fn is_empty(&self) -> bool {
        self.page.total_items == 0
    }
}

/// Run the pipeline: predicate chain, then sort, then pagination window.
pub fn render<R>(records: &[R], state: &ListState<R>, empty: EmptyPages) -> Rendered<R>
where
    R: Filterable + Sortable + Clone,
{
    let chain = chain_for::<R>(&state.criteria, &state.query);
    let mut matched = chain.apply(records);
    sort_in_place(&mut matched, state.sort);
    let page = paginate(&matched, state.page, empty);
    debug!(
        source = records.len(),
        matched = matched.len(),
        predicates = ?chain.names(),
        page = page.page,
        "Rendered list view"
    );
    Rendered {
        page,
        source_total: records.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentals_core::types::{Selection, SortDirection, Timestamp};
    use rentals_core::ErrorKind;
    use rentals_entity::moderation::{ModerationItem, ModerationKind};
    use rentals_entity::review::ReviewStatus;

    use crate::lists::moderation::ModerationCriteria;

    type QueueState = ListState<ModerationItem>;

    fn queue(n: usize) -> Vec<ModerationItem> {
        (0..n)
            .map(|i| ModerationItem {
                id: format!("mod-{i:02}").into(),
                subject_id: format!("prop-{i}"),
                kind: if i % 3 == 0 {
                    ModerationKind::User
                } else {
                    ModerationKind::Property
                },
                title: format!("Listing {i}"),
                submitted_by: "landlord-1".into(),
                status: if i % 2 == 0 {
                    ReviewStatus::Pending
                } else {
                    ReviewStatus::Approved
                },
                reason: String::new(),
                submitted_at: Timestamp::parse(&format!("2024-03-{:02}", i % 28 + 1)).unwrap(),
                reviewed_at: None,
            })
            .collect()
    }

    #[test]
    fn test_criteria_change_resets_page() {
        let state = QueueState::new(10).unwrap();
        let on_page_3 = state.reduce(ViewAction::GoToPage(3)).unwrap();
        assert_eq!(on_page_3.page.page, 3);

        let filtered = on_page_3
            .reduce(ViewAction::SetCriteria(ModerationCriteria {
                status: Selection::Only(ReviewStatus::Pending),
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(filtered.page.page, 1);
        assert!(filtered.is_filtered());
    }

    #[test]
    fn test_unchanged_criteria_keeps_page() {
        let state = QueueState::new(10)
            .unwrap()
            .reduce(ViewAction::GoToPage(2))
            .unwrap();
        let same = state
            .reduce(ViewAction::SetCriteria(ModerationCriteria::default()))
            .unwrap();
        assert_eq!(same.page.page, 2);
        let same = same.reduce(ViewAction::Search("   ".to_string())).unwrap();
        assert_eq!(same.page.page, 2);
    }

    #[test]
    fn test_search_and_sort_reset_page() {
        let state = QueueState::new(5).unwrap().reduce(ViewAction::NextPage).unwrap();
        assert_eq!(state.page.page, 2);
        let searched = state.reduce(ViewAction::Search("Listing 1".to_string())).unwrap();
        assert_eq!(searched.page.page, 1);

        let state = searched.reduce(ViewAction::NextPage).unwrap();
        let resorted = state
            .reduce(ViewAction::SortBy(SortSpec::new(
                Default::default(),
                SortDirection::Asc,
            )))
            .unwrap();
        assert_eq!(resorted.page.page, 1);
    }

    #[test]
    fn test_previous_page_stops_at_one() {
        let state = QueueState::new(5).unwrap();
        let back = state.reduce(ViewAction::PreviousPage).unwrap();
        assert_eq!(back.page.page, 1);
    }

    #[test]
    fn test_invalid_actions_fail() {
        let state = QueueState::new(5).unwrap();
        let err = state.reduce(ViewAction::GoToPage(0)).unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        assert!(state.reduce(ViewAction::SetPageSize(0)).is_err());
        assert!(QueueState::new(0).is_err());
    }

    #[test]
    fn test_clear_filters() {
        let state = QueueState::new(5)
            .unwrap()
            .reduce(ViewAction::Search("prop".to_string()))
            .unwrap()
            .reduce(ViewAction::SetCriteria(ModerationCriteria {
                kind: Selection::Only(ModerationKind::User),
                ..Default::default()
            }))
            .unwrap();
        assert!(state.is_filtered());
        let cleared = state.reduce(ViewAction::ClearFilters).unwrap();
        assert!(!cleared.is_filtered());
    }

    #[test]
    fn test_render_pipeline() {
        let items = queue(25);
        let state = QueueState::new(5)
            .unwrap()
            .reduce(ViewAction::SetCriteria(ModerationCriteria {
                status: Selection::Only(ReviewStatus::Pending),
                ..Default::default()
            }))
            .unwrap();
        let rendered = render(&items, &state, EmptyPages::One);
        assert_eq!(rendered.source_total, 25);
        assert_eq!(rendered.page.total_items, 13);
        assert_eq!(rendered.page.total_pages, 3);
        assert_eq!(rendered.page.items.len(), 5);
        assert!(rendered
            .page
            .items
            .iter()
            .all(|m| m.status == ReviewStatus::Pending));
        assert_eq!(rendered.page.items[0].id.as_str(), "mod-24");
    }

    #[test]
    fn test_render_empty_state() {
        let items = queue(4);
        let state = QueueState::new(5)
            .unwrap()
            .reduce(ViewAction::Search("no such listing".to_string()))
            .unwrap();
        let rendered = render(&items, &state, EmptyPages::One);
        assert!(rendered.is_empty());
        assert_eq!(rendered.page.total_pages, 1);
        assert!(!rendered.page.has_next);
    }
}
