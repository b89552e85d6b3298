//! # rentals-entity
//!
//! Domain records for the rentals marketplace. Every struct here is a
//! fixture row or a value object; every classification field is a closed
//! enum whose labels and transitions are exhaustive `match`es.

#[macro_use]
mod macros;

pub mod application;
pub mod booking;
pub mod earning;
pub mod message;
pub mod moderation;
pub mod payment;
pub mod property;
pub mod record;
pub mod review;
pub mod user;

pub use record::{Record, Stateful, StatusFlow};
