//! Property listings.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::PropertyKind;
pub use model::Property;
pub use status::PropertyStatus;
