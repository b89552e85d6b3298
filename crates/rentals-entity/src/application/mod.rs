//! Rental applications submitted by tenants.

pub mod model;

pub use crate::review::ReviewStatus as ApplicationStatus;
pub use model::RentalApplication;
