//! User entity model.

use serde::{Deserialize, Serialize};

use rentals_core::types::{Timestamp, UserId};

use super::role::UserRole;
use super::status::UserStatus;
use crate::record::{Record, Stateful};

/// A registered marketplace user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Dashboard role.
    pub role: UserRole,
    /// Account status.
    pub status: UserStatus,
    /// When the user signed up.
    pub joined_at: Timestamp,
    /// When an admin last changed the status.
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Record for User {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Stateful for User {
    type Status = UserStatus;

    fn status(&self) -> UserStatus {
        self.status
    }

    fn with_status(&self, status: UserStatus, at: Timestamp) -> Self {
        Self {
            status,
            updated_at: Some(at),
            ..self.clone()
        }
    }
}
