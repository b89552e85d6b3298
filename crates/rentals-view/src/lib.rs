//! Derived list state for the rentals marketplace dashboards.
//!
//! Every screen runs the same pipeline over an in-memory collection:
//! a [`filter::PredicateChain`] narrows it, [`sort`] orders it stably, and
//! [`paginate`] cuts the visible window. [`aggregate`] feeds the stat
//! cards, [`store`] applies review transitions as copy-on-write
//! snapshots, and [`messaging`] keeps the conversation inbox.

pub mod aggregate;
pub mod filter;
pub mod lists;
pub mod messaging;
pub mod paginate;
pub mod sort;
pub mod store;
pub mod view;

pub use aggregate::Tally;
pub use filter::{Filterable, PredicateChain};
pub use messaging::{InboxEntry, MessageStore, MessagingAction};
pub use paginate::Paginator;
pub use sort::Sortable;
pub use store::{CollectionStore, StoreAction};
pub use view::{render, ListState, Rendered, ViewAction, ViewState};
