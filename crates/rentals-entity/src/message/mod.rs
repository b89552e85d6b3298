//! Conversations between tenants, hosts, and providers.

pub mod model;

pub use model::{Conversation, Message, Participant};
