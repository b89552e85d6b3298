//! Booking entity model.

use serde::{Deserialize, Serialize};

use rentals_core::types::{PropertyId, RecordId, Timestamp, UserId};

use super::status::BookingStatus;
use crate::record::{Record, Stateful};

/// A guest's reservation of a hotel room or short-let.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: RecordId,
    /// Hotel manager who owns the room.
    pub hotel_id: UserId,
    /// Room or short-let being booked.
    pub room_id: PropertyId,
    /// Room name, denormalized for list rows.
    pub room_title: String,
    /// Guest's display name.
    pub guest_name: String,
    /// Guest's email address.
    pub guest_email: String,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Arrival date.
    pub check_in: Timestamp,
    /// Departure date.
    pub check_out: Timestamp,
    /// Number of guests.
    pub guests: u32,
    /// Total charge in Naira.
    pub amount: i64,
    /// When the booking was made.
    pub booked_at: Timestamp,
    /// When the status last changed.
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Booking {
    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.check_out.date() - self.check_in.date()).num_days().max(0)
    }
}

impl Record for Booking {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Stateful for Booking {
    type Status = BookingStatus;

    fn status(&self) -> BookingStatus {
        self.status
    }

    fn with_status(&self, status: BookingStatus, at: Timestamp) -> Self {
        Self {
            status,
            updated_at: Some(at),
            ..self.clone()
        }
    }
}
