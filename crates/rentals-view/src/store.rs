//! Immutable record collections with dispatched mutations.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use rentals_core::types::Timestamp;
use rentals_core::{AppError, AppResult};
use rentals_entity::{Record, Stateful, StatusFlow};

/// A change requested against a [`CollectionStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction<R: Stateful> {
    /// Move one record to a new status (approve, reject, confirm, ...).
    Transition {
        /// Target record id.
        id: String,
        /// Requested status.
        to: R::Status,
    },
    /// Replace a record with an edited copy carrying the same id. A
    /// changed status must be a legal move from the current one.
    Replace(R),
    /// Add a new record with an unused id.
    Insert(R),
}

/// A snapshot of one collection.
///
/// Dispatching an action never modifies the snapshot it is called on; it
/// returns a new snapshot with a bumped version, or an error and nothing.
/// Record order is stable: replaced records stay in place and inserted
/// records go to the end.
#[derive(Debug, Clone)]
pub struct CollectionStore<R> {
    records: Arc<[R]>,
    version: u64,
}

impl<R: Record + Clone> CollectionStore<R> {
    /// Build the initial snapshot, rejecting duplicate ids.
    pub fn new(records: Vec<R>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(AppError::conflict(format!(
                    "Duplicate record id '{}'",
                    record.id()
                )));
            }
        }
        Ok(Self {
            records: records.into(),
            version: 0,
        })
    }

    /// Every record, in collection order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Look a record up by id.
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Look a record up by id, failing when it is absent.
    pub fn require(&self, id: &str) -> AppResult<&R> {
        self.get(id)
            .ok_or_else(|| AppError::not_found(format!("No record with id '{id}'")))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// How many mutations produced this snapshot.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn position(&self, id: &str) -> AppResult<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| AppError::not_found(format!("No record with id '{id}'")))
    }

    fn with_records(&self, records: Vec<R>) -> Self {
        Self {
            records: records.into(),
            version: self.version + 1,
        }
    }

    fn replaced(&self, index: usize, record: R) -> Self {
        let mut records = self.records.to_vec();
        records[index] = record;
        self.with_records(records)
    }
}

impl<R: Stateful> CollectionStore<R> {
    /// Apply one action, producing the next snapshot.
    pub fn dispatch(&self, action: StoreAction<R>, at: Timestamp) -> AppResult<Self> {
        match action {
            StoreAction::Transition { id, to } => self.transition(&id, to, at),
            StoreAction::Replace(record) => {
                let index = self.position(record.id())?;
                let (from, to) = (self.records[index].status(), record.status());
                if from != to && !from.can_transition_to(&to) {
                    warn!(id = record.id(), %from, %to, "Rejected edit that changes status");
                    return Err(AppError::invalid_transition(format!(
                        "Cannot move '{}' from {from} to {to}",
                        record.id()
                    )));
                }
                Ok(self.replaced(index, record))
            }
            StoreAction::Insert(record) => {
                if self.get(record.id()).is_some() {
                    return Err(AppError::conflict(format!(
                        "Record id '{}' is already in use",
                        record.id()
                    )));
                }
                let mut records = self.records.to_vec();
                records.push(record);
                Ok(self.with_records(records))
            }
        }
    }

    fn transition(&self, id: &str, to: R::Status, at: Timestamp) -> AppResult<Self> {
        let index = self.position(id)?;
        let current = &self.records[index];
        let from = current.status();
        if !from.can_transition_to(&to) {
            warn!(id, %from, %to, "Rejected status transition");
            return Err(AppError::invalid_transition(format!(
                "Cannot move '{id}' from {from} to {to}"
            )));
        }
        let updated = current.with_status(to, at);
        info!(id, %from, %to, "Record status changed");
        Ok(self.replaced(index, updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentals_core::ErrorKind;
    use rentals_core::types::{RecordId, UserId};
    use rentals_entity::moderation::{ModerationItem, ModerationKind};
    use rentals_entity::review::ReviewStatus;

    fn item(id: &str, status: ReviewStatus) -> ModerationItem {
        ModerationItem {
            id: RecordId::new(id),
            subject_id: format!("subject-{id}"),
            kind: ModerationKind::Property,
            title: format!("Listing {id}"),
            submitted_by: UserId::new("landlord-1"),
            status,
            reason: String::new(),
            submitted_at: Timestamp::parse("2024-04-01").unwrap(),
            reviewed_at: None,
        }
    }

    fn now() -> Timestamp {
        Timestamp::parse("2024-04-02T12:00:00Z").unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = CollectionStore::new(vec![
            item("a", ReviewStatus::Pending),
            item("a", ReviewStatus::Approved),
        ])
        .unwrap_err();
        assert!(err.is(ErrorKind::Conflict));
    }

    #[test]
    fn test_approve_replaces_copy_in_place() {
        let store = CollectionStore::new(vec![
            item("a", ReviewStatus::Pending),
            item("b", ReviewStatus::Pending),
        ])
        .unwrap();
        let next = store
            .dispatch(
                StoreAction::Transition {
                    id: "b".to_string(),
                    to: ReviewStatus::Approved,
                },
                now(),
            )
            .unwrap();

        assert_eq!(store.get("b").unwrap().status, ReviewStatus::Pending);
        assert_eq!(store.version(), 0);

        let approved = next.get("b").unwrap();
        assert_eq!(approved.status, ReviewStatus::Approved);
        assert_eq!(approved.reviewed_at, Some(now()));
        assert_eq!(next.records()[1].id.as_str(), "b");
        assert_eq!(next.version(), 1);
    }

    #[test]
    fn test_illegal_transition_leaves_snapshot() {
        let store = CollectionStore::new(vec![item("a", ReviewStatus::Rejected)]).unwrap();
        let err = store
            .dispatch(
                StoreAction::Transition {
                    id: "a".to_string(),
                    to: ReviewStatus::Approved,
                },
                now(),
            )
            .unwrap_err();
        assert!(err.is(ErrorKind::InvalidTransition));
        assert_eq!(store.get("a").unwrap().status, ReviewStatus::Rejected);
    }

    #[test]
    fn test_replace_cannot_skip_status_rules() {
        let store = CollectionStore::new(vec![item("a", ReviewStatus::Rejected)]).unwrap();
        let err = store
            .dispatch(StoreAction::Replace(item("a", ReviewStatus::Approved)), now())
            .unwrap_err();
        assert!(err.is(ErrorKind::InvalidTransition));
        assert_eq!(store.get("a").unwrap().status, ReviewStatus::Rejected);
    }

    #[test]
    fn test_replace_edits_fields_and_allows_legal_moves() {
        let store = CollectionStore::new(vec![item("a", ReviewStatus::Pending)]).unwrap();
        let mut edited = item("a", ReviewStatus::Pending);
        edited.reason = "Blurry photos".to_string();
        let next = store.dispatch(StoreAction::Replace(edited), now()).unwrap();
        assert_eq!(next.get("a").unwrap().reason, "Blurry photos");

        let approved = next
            .dispatch(StoreAction::Replace(item("a", ReviewStatus::Approved)), now())
            .unwrap();
        assert_eq!(approved.get("a").unwrap().status, ReviewStatus::Approved);
        assert_eq!(approved.version(), 2);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = CollectionStore::new(vec![item("a", ReviewStatus::Pending)]).unwrap();
        let err = store
            .dispatch(StoreAction::Replace(item("zz", ReviewStatus::Pending)), now())
            .unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }

    #[test]
    fn test_insert_appends_and_checks_ids() {
        let store = CollectionStore::new(vec![item("a", ReviewStatus::Pending)]).unwrap();
        let next = store
            .dispatch(StoreAction::Insert(item("b", ReviewStatus::Pending)), now())
            .unwrap();
        assert_eq!(next.len(), 2);
        assert!(
            next.dispatch(StoreAction::Insert(item("a", ReviewStatus::Pending)), now())
                .is_err()
        );
    }
}
