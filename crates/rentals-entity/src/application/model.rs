//! Rental application entity model.

use serde::{Deserialize, Serialize};

use rentals_core::types::{PropertyId, RecordId, Timestamp, UserId};

use crate::record::{Record, Stateful};
use crate::review::ReviewStatus;

/// A tenant's application to rent a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalApplication {
    /// Unique application identifier.
    pub id: RecordId,
    /// Property applied for.
    pub property_id: PropertyId,
    /// Property headline, denormalized for list rows.
    pub property_title: String,
    /// Applicant.
    pub tenant_id: UserId,
    /// Applicant's display name.
    pub tenant_name: String,
    /// Landlord who reviews the application.
    pub landlord_id: UserId,
    /// Review status.
    pub status: ReviewStatus,
    /// Annual rent the tenant offered, in Naira.
    pub offered_rent: i64,
    /// Requested move-in date.
    pub move_in_date: Timestamp,
    /// When the application was submitted.
    pub submitted_at: Timestamp,
    /// Cover note from the tenant.
    #[serde(default)]
    pub message: String,
    /// When the landlord last changed the status.
    #[serde(default)]
    pub reviewed_at: Option<Timestamp>,
}

impl Record for RentalApplication {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Stateful for RentalApplication {
    type Status = ReviewStatus;

    fn status(&self) -> ReviewStatus {
        self.status
    }

    fn with_status(&self, status: ReviewStatus, at: Timestamp) -> Self {
        Self {
            status,
            reviewed_at: Some(at),
            ..self.clone()
        }
    }
}
