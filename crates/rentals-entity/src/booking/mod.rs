//! Hotel room and short-let bookings.

pub mod model;
pub mod status;

pub use model::Booking;
pub use status::BookingStatus;
