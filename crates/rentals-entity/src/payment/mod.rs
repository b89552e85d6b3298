//! Tenant rent payments.

pub mod model;
pub mod status;

pub use model::Payment;
pub use status::PaymentStatus;
