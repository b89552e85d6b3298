//! Property entity model.

use serde::{Deserialize, Serialize};

use rentals_core::types::{PropertyId, Timestamp, UserId};

use super::kind::PropertyKind;
use super::status::PropertyStatus;
use crate::record::{Record, Stateful};

/// A listing published by a landlord or hotel manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique property identifier.
    pub id: PropertyId,
    /// Owner of the listing.
    pub landlord_id: UserId,
    /// Listing headline.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// City or area.
    pub city: String,
    /// Property type.
    pub kind: PropertyKind,
    /// Availability status.
    pub status: PropertyStatus,
    /// Annual rent, or nightly rate for hotel rooms and short-lets, in Naira.
    pub price: i64,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms.
    pub bathrooms: u32,
    /// Listing page views.
    #[serde(default)]
    pub views: u64,
    /// Times the listing was saved by tenants.
    #[serde(default)]
    pub favourites: u64,
    /// Amenities offered.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// When the listing was created.
    pub created_at: Timestamp,
    /// When the status last changed.
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Record for Property {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Stateful for Property {
    type Status = PropertyStatus;

    fn status(&self) -> PropertyStatus {
        self.status
    }

    fn with_status(&self, status: PropertyStatus, at: Timestamp) -> Self {
        Self {
            status,
            updated_at: Some(at),
            ..self.clone()
        }
    }
}
