//! Messaging CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rentals_core::types::{ConversationId, PropertyId, SearchQuery};
use rentals_core::{AppError, AppResult};
use rentals_entity::message::Participant;
use rentals_view::messaging::{InboxEntry, MessageStore, MessagingAction};

use super::Context;
use crate::output;

/// Arguments for message commands
#[derive(Debug, Args)]
pub struct MessageArgs {
    /// User whose inbox to open
    #[arg(long = "as", value_name = "USER_ID")]
    pub viewer: String,

    /// Message subcommand
    #[command(subcommand)]
    pub command: MessageCommand,
}

/// Message subcommands
#[derive(Debug, Subcommand)]
pub enum MessageCommand {
    /// List conversations, latest activity first
    Inbox {
        /// Search names, subjects and message text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Open a conversation and mark it read
    Thread {
        /// Conversation ID
        id: String,
    },
    /// Send a message
    Send {
        /// Conversation ID
        id: String,
        /// Message text
        body: String,
    },
    /// Start a conversation with another user
    Start {
        /// The other user's ID
        #[arg(long)]
        with: String,
        /// Listing the conversation is about
        #[arg(long)]
        property: Option<String>,
        /// Subject line
        #[arg(long, default_value = "")]
        subject: String,
    },
}

/// Inbox display row for table output
#[derive(Debug, Serialize, Tabled)]
struct InboxRow {
    /// Conversation ID
    id: String,
    /// With
    with: String,
    /// Subject
    subject: String,
    /// Latest message
    latest: String,
    /// Last activity
    when: String,
    /// Unread count
    unread: usize,
}

/// Thread display row for table output
#[derive(Debug, Serialize, Tabled)]
struct MessageRow {
    /// Sender
    from: String,
    /// Sent at
    sent: String,
    /// Body
    body: String,
}

fn participant(ctx: &Context, user_id: &str) -> AppResult<Participant> {
    ctx.fixtures
        .users
        .iter()
        .find(|u| u.id == user_id)
        .map(|u| Participant {
            user_id: u.id.clone(),
            name: u.name.clone(),
            role: u.role,
        })
        .ok_or_else(|| AppError::not_found(format!("No user with id '{user_id}'")))
}

fn print_inbox(ctx: &Context, entries: &[InboxEntry]) {
    let rows: Vec<InboxRow> = entries
        .iter()
        .map(|e| InboxRow {
            id: e.conversation_id.to_string(),
            with: e.title.clone(),
            subject: e.subject.clone(),
            latest: e.preview.clone().unwrap_or_default(),
            when: e
                .last_activity
                .as_ref()
                .map(|t| ctx.fmt.date(t))
                .unwrap_or_default(),
            unread: e.unread,
        })
        .collect();
    output::print_list(&rows, ctx.format);
}

/// Execute message commands
pub fn execute(args: &MessageArgs, ctx: &Context) -> AppResult<()> {
    let viewer = participant(ctx, &args.viewer)?;
    let store = MessageStore::new(viewer, ctx.fixtures.conversations.clone())?;

    match &args.command {
        MessageCommand::Inbox { search } => {
            let query = SearchQuery::new(search.as_deref().unwrap_or_default());
            print_inbox(ctx, &store.inbox(&query));
            output::print_kv("Unread", &store.total_unread().to_string());
        }
        MessageCommand::Thread { id } => {
            let id = ConversationId::from(id.as_str());
            let store = store.dispatch(MessagingAction::MarkRead(id.clone()))?;
            let thread = store.thread(&id)?;
            let rows: Vec<MessageRow> = thread
                .messages
                .iter()
                .map(|m| MessageRow {
                    from: thread
                        .participants
                        .iter()
                        .find(|p| p.user_id == m.sender_id)
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| m.sender_id.to_string()),
                    sent: ctx.fmt.date(&m.sent_at),
                    body: m.body.clone(),
                })
                .collect();
            output::print_list(&rows, ctx.format);
        }
        MessageCommand::Send { id, body } => {
            let store = store.dispatch(MessagingAction::Send {
                conversation_id: ConversationId::from(id.as_str()),
                body: body.clone(),
                at: ctx.now,
            })?;
            output::print_success(&format!("Message sent to '{id}'"));
            print_inbox(ctx, &store.inbox(&SearchQuery::default()));
        }
        MessageCommand::Start {
            with,
            property,
            subject,
        } => {
            let other = participant(ctx, with)?;
            let before = store.conversations().len();
            let store = store.dispatch(MessagingAction::Start {
                with: other,
                property_id: property.as_deref().map(PropertyId::from),
                subject: subject.clone(),
            })?;
            if store.conversations().len() > before {
                output::print_success(&format!("Started a conversation with '{with}'"));
            } else {
                output::print_success(&format!("Reopened your conversation with '{with}'"));
            }
            print_inbox(ctx, &store.inbox(&SearchQuery::default()));
        }
    }
    Ok(())
}
