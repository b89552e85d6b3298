//! Conversation and message models.

use serde::{Deserialize, Serialize};

use rentals_core::types::{ConversationId, MessageId, PropertyId, Timestamp, UserId};
use rentals_core::{AppError, AppResult};

use crate::record::Record;
use crate::user::UserRole;

/// A member of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// The participant's user id.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Dashboard role, shown next to the name.
    pub role: UserRole,
}

/// One message inside a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: MessageId,
    /// Author.
    pub sender_id: UserId,
    /// Message text.
    pub body: String,
    /// When the message was sent.
    pub sent_at: Timestamp,
    /// Whether the other member has opened it. Threads are two-party, so
    /// one flag covers the only recipient.
    #[serde(default)]
    pub read: bool,
}

/// A thread between exactly two participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier.
    pub id: ConversationId,
    /// Members of the thread.
    pub participants: Vec<Participant>,
    /// Listing the thread is about, if any.
    #[serde(default)]
    pub property_id: Option<PropertyId>,
    /// Thread subject line.
    #[serde(default)]
    pub subject: String,
    /// Messages in the order they were sent.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Conversation {
    /// The most recent message.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.iter().max_by_key(|m| m.sent_at)
    }

    /// Time of the most recent message.
    pub fn last_activity(&self) -> Option<Timestamp> {
        self.last_message().map(|m| m.sent_at)
    }

    /// Messages sent by others that `user` has not read.
    pub fn unread_for(&self, user: &UserId) -> usize {
        self.messages
            .iter()
            .filter(|m| !m.read && &m.sender_id != user)
            .count()
    }

    /// Whether `user` takes part in this thread.
    pub fn includes(&self, user: &UserId) -> bool {
        self.participants.iter().any(|p| &p.user_id == user)
    }

    /// The other members, from `user`'s point of view.
    pub fn counterparts<'a>(&'a self, user: &UserId) -> impl Iterator<Item = &'a Participant> + use<'a> {
        let user = user.clone();
        self.participants.iter().filter(move |p| p.user_id != user)
    }

    /// Reject threads that are not between two distinct users.
    pub fn ensure_two_party(&self) -> AppResult<()> {
        match self.participants.as_slice() {
            [a, b] if a.user_id != b.user_id => Ok(()),
            _ => Err(AppError::validation(format!(
                "Conversation '{}' must have exactly two distinct participants",
                self.id
            ))),
        }
    }
}

impl Record for Conversation {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Message {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}
