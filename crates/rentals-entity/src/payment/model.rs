//! Payment entity model.

use serde::{Deserialize, Serialize};

use rentals_core::types::{PropertyId, RecordId, Timestamp, UserId};

use super::status::PaymentStatus;
use crate::record::{Record, Stateful};

/// A scheduled or settled rent payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique payment identifier.
    pub id: RecordId,
    /// Paying tenant.
    pub tenant_id: UserId,
    /// Property the payment is for.
    pub property_id: PropertyId,
    /// Line description ("Annual rent 2024").
    pub description: String,
    /// Amount in Naira.
    pub amount: i64,
    /// Settlement status.
    pub status: PaymentStatus,
    /// When the payment is due.
    pub due_date: Timestamp,
    /// When the payment was settled.
    #[serde(default)]
    pub paid_at: Option<Timestamp>,
}

impl Record for Payment {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Stateful for Payment {
    type Status = PaymentStatus;

    fn status(&self) -> PaymentStatus {
        self.status
    }

    fn with_status(&self, status: PaymentStatus, at: Timestamp) -> Self {
        let paid_at = match status {
            PaymentStatus::Paid => Some(at),
            PaymentStatus::Pending | PaymentStatus::Overdue => self.paid_at,
        };
        Self {
            status,
            paid_at,
            ..self.clone()
        }
    }
}
