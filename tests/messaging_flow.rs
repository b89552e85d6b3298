//! Inbox behaviour for fixture users.

mod common;

use rentals_core::types::{ConversationId, SearchQuery, UserId};
use rentals_core::ErrorKind;
use rentals_entity::message::Participant;
use rentals_fixtures::Fixtures;
use rentals_view::messaging::{MessageStore, MessagingAction};

fn participant(fixtures: &Fixtures, id: &str) -> Participant {
    let user = fixtures
        .users
        .iter()
        .find(|u| u.id == id)
        .expect("fixture user");
    Participant {
        user_id: user.id.clone(),
        name: user.name.clone(),
        role: user.role,
    }
}

fn inbox_for(id: &str) -> MessageStore {
    let fixtures = common::fixtures();
    let viewer = participant(&fixtures, id);
    MessageStore::new(viewer, fixtures.conversations).unwrap()
}

fn order(store: &MessageStore) -> Vec<String> {
    store
        .inbox(&SearchQuery::default())
        .into_iter()
        .map(|e| e.conversation_id.to_string())
        .collect()
}

#[test]
fn test_tenant_inbox() {
    let store = inbox_for("usr-tenant-01");
    assert_eq!(store.conversations().len(), 3);
    assert_eq!(store.total_unread(), 3);
    assert_eq!(order(&store), vec!["conv-002", "conv-001", "conv-004"]);
}

#[test]
fn test_send_moves_thread_up_without_changing_unread() {
    let store = inbox_for("usr-tenant-01");
    let next = store
        .dispatch(MessagingAction::Send {
            conversation_id: ConversationId::from("conv-004"),
            body: "Thanks!".to_string(),
            at: common::as_of(),
        })
        .unwrap();
    assert_eq!(order(&next), vec!["conv-004", "conv-002", "conv-001"]);
    assert_eq!(next.total_unread(), 3);
    let top = &next.inbox(&SearchQuery::default())[0];
    assert_eq!(top.preview.as_deref(), Some("Thanks!"));
    assert_eq!(top.unread, 0);
}

#[test]
fn test_opening_thread_clears_badge() {
    let store = inbox_for("usr-tenant-01");
    let next = store
        .dispatch(MessagingAction::MarkRead(ConversationId::from("conv-002")))
        .unwrap();
    assert_eq!(next.total_unread(), 1);
    assert!(next
        .thread(&ConversationId::from("conv-002"))
        .unwrap()
        .messages
        .iter()
        .all(|m| m.read));
}

#[test]
fn test_search_by_counterpart_name() {
    let store = inbox_for("usr-tenant-01");
    let found = store.inbox(&SearchQuery::new("Adebayo"));
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|e| e.title.contains("Adebayo")));
}

#[test]
fn test_threads_of_other_users_are_hidden() {
    let store = inbox_for("usr-tenant-01");
    let err = store
        .dispatch(MessagingAction::MarkRead(ConversationId::from("conv-005")))
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[test]
fn test_start_reuses_thread_about_same_listing() {
    let fixtures = common::fixtures();
    let store = inbox_for("usr-tenant-01");
    let landlord = participant(&fixtures, "usr-landlord-01");

    let same = store
        .dispatch(MessagingAction::Start {
            with: landlord.clone(),
            property_id: Some("prop-001".into()),
            subject: "Lekki flat".to_string(),
        })
        .unwrap();
    assert_eq!(same.conversations().len(), 3);

    let fresh = store
        .dispatch(MessagingAction::Start {
            with: landlord,
            property_id: Some("prop-007".into()),
            subject: "Ikoyi house".to_string(),
        })
        .unwrap();
    assert_eq!(fresh.conversations().len(), 4);
    assert!(fresh
        .find_with(&UserId::from("usr-landlord-01"), Some(&"prop-007".into()))
        .is_some());
}
