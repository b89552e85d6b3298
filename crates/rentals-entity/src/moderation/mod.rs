//! Admin moderation queue.

pub mod kind;
pub mod model;

pub use kind::ModerationKind;
pub use model::ModerationItem;
