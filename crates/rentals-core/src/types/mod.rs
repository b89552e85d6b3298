//! Core type definitions used across the rentals workspace.

pub mod id;
pub mod pagination;
pub mod search;
pub mod selection;
pub mod sorting;
pub mod timestamp;

pub use id::*;
pub use pagination::{EmptyPages, Page, PageRequest};
pub use search::SearchQuery;
pub use selection::Selection;
pub use sorting::{SortDirection, SortSpec};
pub use timestamp::Timestamp;
