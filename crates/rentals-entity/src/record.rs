//! Traits shared by every record kind.

use std::fmt::{Debug, Display};

use rentals_core::types::Timestamp;

/// A record with a collection-unique string identifier.
pub trait Record {
    /// The record's identifier.
    fn id(&self) -> &str;
}

/// A closed status enumeration with a one-directional flow.
pub trait StatusFlow: Copy + Eq + Debug + Display {
    /// Whether a record in this status may move to `next`.
    fn can_transition_to(&self, next: &Self) -> bool;

    /// Whether no further transition is possible.
    fn is_terminal(&self) -> bool;
}

/// A record whose status changes through review or lifecycle actions.
pub trait Stateful: Record + Clone {
    /// The record's status type.
    type Status: StatusFlow;

    /// Current status.
    fn status(&self) -> Self::Status;

    /// Return a copy of this record carrying `status`, stamped at `at`.
    fn with_status(&self, status: Self::Status, at: Timestamp) -> Self;
}
