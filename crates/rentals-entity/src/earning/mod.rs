//! Landlord earnings ledger.

pub mod kind;
pub mod model;

pub use kind::{EarningKind, EarningStatus};
pub use model::Earning;
