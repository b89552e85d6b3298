//! # rentals-core
//!
//! Core crate for the rentals marketplace workspace. Contains configuration
//! schemas, typed identifiers, selection/search/pagination/sorting types,
//! timestamp parsing, the canonical display formatter, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other rentals crates.

pub mod config;
pub mod error;
pub mod format;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
