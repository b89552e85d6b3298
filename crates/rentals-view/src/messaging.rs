//! In-memory messaging state for one signed-in user.
//!
//! Mirrors the inbox screen: a list of conversations ordered by latest
//! activity with unread badges, an open thread, and optimistic sends that
//! show up immediately without any delivery round trip.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use rentals_core::types::{ConversationId, MessageId, PropertyId, SearchQuery, Timestamp, UserId};
use rentals_core::{AppError, AppResult};
use rentals_entity::message::{Conversation, Message, Participant};

/// Longest accepted message body, in characters.
pub const MAX_BODY_CHARS: usize = 2000;

/// A change requested against a [`MessageStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum MessagingAction {
    /// Append a message from the viewer to a conversation.
    Send {
        /// Target conversation.
        conversation_id: ConversationId,
        /// Message text; surrounding whitespace is dropped.
        body: String,
        /// Send time.
        at: Timestamp,
    },
    /// Mark every message the viewer received in a conversation as read.
    MarkRead(ConversationId),
    /// Open a thread with another user, reusing an existing one about the
    /// same listing.
    Start {
        /// The other member.
        with: Participant,
        /// Listing the thread is about.
        property_id: Option<PropertyId>,
        /// Subject line.
        subject: String,
    },
}

/// One row of the inbox list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxEntry {
    /// Conversation id.
    pub conversation_id: ConversationId,
    /// Names of the other members, comma-separated.
    pub title: String,
    /// Thread subject.
    pub subject: String,
    /// Body of the latest message.
    pub preview: Option<String>,
    /// Time of the latest message.
    pub last_activity: Option<Timestamp>,
    /// Messages the viewer has not read.
    pub unread: usize,
}

/// Conversations visible to one user.
#[derive(Debug, Clone)]
pub struct MessageStore {
    viewer: Participant,
    conversations: Vec<Conversation>,
}

impl MessageStore {
    /// Build the store for `viewer`, keeping only threads they belong to.
    /// Each kept thread must be between two distinct users.
    pub fn new(viewer: Participant, conversations: Vec<Conversation>) -> AppResult<Self> {
        let mut visible: Vec<Conversation> = Vec::new();
        for conversation in conversations {
            if !conversation.includes(&viewer.user_id) {
                continue;
            }
            conversation.ensure_two_party()?;
            if visible.iter().any(|c| c.id == conversation.id) {
                return Err(AppError::conflict(format!(
                    "Duplicate conversation id '{}'",
                    conversation.id
                )));
            }
            visible.push(conversation);
        }
        Ok(Self {
            viewer,
            conversations: visible,
        })
    }

    /// The signed-in user.
    pub fn viewer(&self) -> &Participant {
        &self.viewer
    }

    fn viewer_id(&self) -> &UserId {
        &self.viewer.user_id
    }

    /// Every conversation, in load order.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Open one thread.
    pub fn thread(&self, id: &ConversationId) -> AppResult<&Conversation> {
        self.conversations
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| AppError::not_found(format!("No conversation with id '{id}'")))
    }

    /// Total unread messages across every thread.
    pub fn total_unread(&self) -> usize {
        self.conversations
            .iter()
            .map(|c| c.unread_for(self.viewer_id()))
            .sum()
    }

    /// The inbox list: threads matching `query` by member name, subject, or
    /// latest message, most recent activity first. Threads without
    /// messages sort last; ties keep load order.
    pub fn inbox(&self, query: &SearchQuery) -> Vec<InboxEntry> {
        let mut entries: Vec<InboxEntry> = self
            .conversations
            .iter()
            .filter(|c| {
                let names: Vec<&str> = c
                    .counterparts(self.viewer_id())
                    .map(|p| p.name.as_str())
                    .collect();
                let preview = c.last_message().map(|m| m.body.as_str());
                query.matches_any(
                    names
                        .iter()
                        .copied()
                        .chain(std::iter::once(c.subject.as_str()))
                        .chain(preview),
                )
            })
            .map(|c| self.entry(c))
            .collect();
        entries.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        debug!(viewer = %self.viewer.user_id, shown = entries.len(), "Built inbox");
        entries
    }

    fn entry(&self, conversation: &Conversation) -> InboxEntry {
        let title = conversation
            .counterparts(self.viewer_id())
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        InboxEntry {
            conversation_id: conversation.id.clone(),
            title,
            subject: conversation.subject.clone(),
            preview: conversation.last_message().map(|m| m.body.clone()),
            last_activity: conversation.last_activity(),
            unread: conversation.unread_for(self.viewer_id()),
        }
    }

    /// Apply one action, producing the next snapshot.
    pub fn dispatch(&self, action: MessagingAction) -> AppResult<Self> {
        match action {
            MessagingAction::Send {
                conversation_id,
                body,
                at,
            } => self.send(&conversation_id, &body, at),
            MessagingAction::MarkRead(conversation_id) => self.mark_read(&conversation_id),
            MessagingAction::Start {
                with,
                property_id,
                subject,
            } => self.start(with, property_id, subject),
        }
    }

    fn latest_activity(&self) -> Option<Timestamp> {
        self.conversations.iter().filter_map(Conversation::last_activity).max()
    }

    fn index_of(&self, id: &ConversationId) -> AppResult<usize> {
        self.conversations
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| AppError::not_found(format!("No conversation with id '{id}'")))
    }

    fn send(&self, id: &ConversationId, body: &str, at: Timestamp) -> AppResult<Self> {
        let body = body.trim();
        if body.is_empty() {
            return Err(AppError::validation("Message body cannot be empty"));
        }
        if body.chars().count() > MAX_BODY_CHARS {
            return Err(AppError::validation(format!(
                "Message body exceeds {MAX_BODY_CHARS} characters"
            )));
        }
        let index = self.index_of(id)?;
        // A sent message always becomes the newest activity in the inbox.
        let sent_at = match self.latest_activity() {
            Some(latest) => at.after(latest),
            None => at,
        };
        let message = Message {
            id: MessageId::new(format!("msg-{}", Uuid::new_v4())),
            sender_id: self.viewer.user_id.clone(),
            body: body.to_string(),
            sent_at,
            read: false,
        };
        info!(conversation = %id, message = %message.id, %sent_at, "Message sent");

        let mut next = self.clone();
        next.conversations[index].messages.push(message);
        Ok(next)
    }

    fn mark_read(&self, id: &ConversationId) -> AppResult<Self> {
        let index = self.index_of(id)?;
        let mut next = self.clone();
        let viewer = self.viewer_id();
        for message in &mut next.conversations[index].messages {
            if &message.sender_id != viewer {
                message.read = true;
            }
        }
        Ok(next)
    }

    fn start(
        &self,
        with: Participant,
        property_id: Option<PropertyId>,
        subject: String,
    ) -> AppResult<Self> {
        if &with.user_id == self.viewer_id() {
            return Err(AppError::validation("Cannot start a conversation with yourself"));
        }
        if self.find_with(&with.user_id, property_id.as_ref()).is_some() {
            return Ok(self.clone());
        }
        let conversation = Conversation {
            id: ConversationId::new(format!("conv-{}", Uuid::new_v4())),
            participants: vec![self.viewer.clone(), with],
            property_id,
            subject: subject.trim().to_string(),
            messages: Vec::new(),
        };
        info!(conversation = %conversation.id, "Conversation started");
        let mut next = self.clone();
        next.conversations.push(conversation);
        Ok(next)
    }

    /// Find the thread with `user` about `property_id`, if one exists.
    pub fn find_with(&self, user: &UserId, property_id: Option<&PropertyId>) -> Option<&Conversation> {
        self.conversations.iter().find(|c| {
            c.participants.len() == 2 && c.includes(user) && c.property_id.as_ref() == property_id
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentals_entity::user::UserRole;

    fn person(id: &str, name: &str, role: UserRole) -> Participant {
        Participant {
            user_id: UserId::new(id),
            name: name.to_string(),
            role,
        }
    }

    fn message(id: &str, sender: &str, at: &str, read: bool) -> Message {
        Message {
            id: MessageId::new(id),
            sender_id: UserId::new(sender),
            body: format!("note {id}"),
            sent_at: Timestamp::parse(at).unwrap(),
            read,
        }
    }

    fn store() -> MessageStore {
        let tenant = person("tenant-1", "Ada Obi", UserRole::Tenant);
        let conversations = vec![
            Conversation {
                id: ConversationId::new("c1"),
                participants: vec![tenant.clone(), person("landlord-1", "Bola Ade", UserRole::Landlord)],
                property_id: Some(PropertyId::new("prop-1")),
                subject: "Viewing on Saturday".to_string(),
                messages: vec![message("m1", "landlord-1", "2024-03-01T09:00:00Z", false)],
            },
            Conversation {
                id: ConversationId::new("c2"),
                participants: vec![tenant.clone(), person("sp-1", "Chidi Cleaners", UserRole::ServiceProvider)],
                property_id: None,
                subject: "Deep clean quote".to_string(),
                messages: vec![message("m2", "sp-1", "2024-03-02T09:00:00Z", false)],
            },
            Conversation {
                id: ConversationId::new("c3"),
                participants: vec![
                    person("landlord-1", "Bola Ade", UserRole::Landlord),
                    person("sp-1", "Chidi Cleaners", UserRole::ServiceProvider),
                ],
                property_id: None,
                subject: "Not visible to the tenant".to_string(),
                messages: Vec::new(),
            },
        ];
        MessageStore::new(tenant, conversations).unwrap()
    }

    #[test]
    fn test_only_viewer_threads_are_loaded() {
        let store = store();
        assert_eq!(store.conversations().len(), 2);
        assert_eq!(store.total_unread(), 2);
    }

    #[test]
    fn test_send_moves_thread_to_top() {
        let store = store();
        let before: Vec<_> = store
            .inbox(&SearchQuery::default())
            .into_iter()
            .map(|e| e.conversation_id.into_string())
            .collect();
        assert_eq!(before, vec!["c2", "c1"]);

        let next = store
            .dispatch(MessagingAction::Send {
                conversation_id: ConversationId::new("c1"),
                body: "  Saturday works for me  ".to_string(),
                at: Timestamp::parse("2024-03-03T10:00:00Z").unwrap(),
            })
            .unwrap();
        let inbox = next.inbox(&SearchQuery::default());
        assert_eq!(inbox[0].conversation_id.as_str(), "c1");
        assert_eq!(inbox[0].preview.as_deref(), Some("Saturday works for me"));
        assert_eq!(inbox[0].unread, 1);
        assert_eq!(store.thread(&ConversationId::new("c1")).unwrap().messages.len(), 1);
    }

    #[test]
    fn test_backdated_send_still_leads_inbox() {
        let next = store()
            .dispatch(MessagingAction::Send {
                conversation_id: ConversationId::new("c1"),
                body: "Is it still available?".to_string(),
                at: Timestamp::parse("2024-02-01").unwrap(),
            })
            .unwrap();
        let inbox = next.inbox(&SearchQuery::default());
        assert_eq!(inbox[0].conversation_id.as_str(), "c1");
        assert_eq!(inbox[0].preview.as_deref(), Some("Is it still available?"));
        assert!(inbox[0].last_activity > inbox[1].last_activity);
        assert_eq!(next.total_unread(), 2);
    }

    #[test]
    fn test_group_thread_rejected_on_load() {
        let tenant = person("tenant-1", "Ada Obi", UserRole::Tenant);
        let group = Conversation {
            id: ConversationId::new("g1"),
            participants: vec![
                tenant.clone(),
                person("landlord-1", "Bola Ade", UserRole::Landlord),
                person("sp-1", "Chidi Cleaners", UserRole::ServiceProvider),
            ],
            property_id: None,
            subject: "Move-in".to_string(),
            messages: Vec::new(),
        };
        let err = MessageStore::new(tenant, vec![group]).unwrap_err();
        assert!(err.is(rentals_core::ErrorKind::Validation));
    }

    #[test]
    fn test_blank_message_rejected() {
        let err = store()
            .dispatch(MessagingAction::Send {
                conversation_id: ConversationId::new("c1"),
                body: "   ".to_string(),
                at: Timestamp::now(),
            })
            .unwrap_err();
        assert!(err.is(rentals_core::ErrorKind::Validation));
    }

    #[test]
    fn test_mark_read_clears_badge() {
        let next = store()
            .dispatch(MessagingAction::MarkRead(ConversationId::new("c2")))
            .unwrap();
        assert_eq!(next.total_unread(), 1);
        assert_eq!(next.thread(&ConversationId::new("c2")).unwrap().unread_for(&UserId::new("tenant-1")), 0);
    }

    #[test]
    fn test_inbox_search_matches_counterpart_name() {
        let inbox = store().inbox(&SearchQuery::new("chidi"));
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].title, "Chidi Cleaners");
    }

    #[test]
    fn test_start_reuses_existing_thread() {
        let store = store();
        let same = store
            .dispatch(MessagingAction::Start {
                with: person("landlord-1", "Bola Ade", UserRole::Landlord),
                property_id: Some(PropertyId::new("prop-1")),
                subject: "Another question".to_string(),
            })
            .unwrap();
        assert_eq!(same.conversations().len(), 2);

        let started = store
            .dispatch(MessagingAction::Start {
                with: person("landlord-1", "Bola Ade", UserRole::Landlord),
                property_id: Some(PropertyId::new("prop-9")),
                subject: "Duplex in Ikeja".to_string(),
            })
            .unwrap();
        assert_eq!(started.conversations().len(), 3);
        let inbox = started.inbox(&SearchQuery::default());
        assert_eq!(inbox.last().map(|e| e.subject.as_str()), Some("Duplex in Ikeja"));
    }
}
