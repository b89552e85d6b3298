//! Status transitions dispatched against fixture snapshots.

mod common;

use rentals_core::ErrorKind;
use rentals_entity::application::ApplicationStatus;
use rentals_entity::booking::BookingStatus;
use rentals_entity::review::ReviewStatus;
use rentals_view::lists::application::ApplicationStats;
use rentals_view::lists::moderation::ModerationStats;
use rentals_view::store::{CollectionStore, StoreAction};

fn approve(id: &str) -> StoreAction<rentals_entity::moderation::ModerationItem> {
    StoreAction::Transition {
        id: id.to_string(),
        to: ReviewStatus::Approved,
    }
}

#[test]
fn test_approving_a_listing_updates_queue_counts() {
    let store = CollectionStore::new(common::fixtures().moderation).unwrap();
    assert_eq!(ModerationStats::compute(store.records()).open(), 4);

    let next = store.dispatch(approve("mod-001"), common::as_of()).unwrap();
    let item = next.require("mod-001").unwrap();
    assert_eq!(item.status, ReviewStatus::Approved);
    assert_eq!(item.reviewed_at, Some(common::as_of()));
    assert_eq!(ModerationStats::compute(next.records()).open(), 3);

    assert_eq!(store.require("mod-001").unwrap().status, ReviewStatus::Pending);
}

#[test]
fn test_decided_items_cannot_be_reopened() {
    let store = CollectionStore::new(common::fixtures().moderation).unwrap();
    let err = store
        .dispatch(approve("mod-005"), common::as_of())
        .unwrap_err();
    assert!(err.is(ErrorKind::InvalidTransition));
    assert_eq!(store.require("mod-005").unwrap().status, ReviewStatus::Rejected);
    assert_eq!(store.version(), 0);
}

#[test]
fn test_unknown_item_is_not_found() {
    let store = CollectionStore::new(common::fixtures().moderation).unwrap();
    let err = store.dispatch(approve("mod-404"), common::as_of()).unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[test]
fn test_application_review_changes_approval_rate() {
    let store = CollectionStore::new(common::fixtures().applications).unwrap();
    let next = store
        .dispatch(
            StoreAction::Transition {
                id: "app-002".to_string(),
                to: ApplicationStatus::Approved,
            },
            common::as_of(),
        )
        .unwrap();
    assert_eq!(ApplicationStats::compute(store.records()).approval_rate, 25);
    assert_eq!(ApplicationStats::compute(next.records()).approval_rate, 38);
}

#[test]
fn test_booking_lifecycle() {
    let store = CollectionStore::new(common::fixtures().bookings).unwrap();
    let check_in = |to| StoreAction::Transition {
        id: "bk-003".to_string(),
        to,
    };
    let arrived = store
        .dispatch(check_in(BookingStatus::CheckedIn), common::as_of())
        .unwrap();
    let departed = arrived
        .dispatch(check_in(BookingStatus::Completed), common::as_of())
        .unwrap();
    assert_eq!(departed.require("bk-003").unwrap().status, BookingStatus::Completed);
    assert_eq!(departed.version(), 2);

    let err = departed
        .dispatch(check_in(BookingStatus::Cancelled), common::as_of())
        .unwrap_err();
    assert!(err.is(ErrorKind::InvalidTransition));
}
