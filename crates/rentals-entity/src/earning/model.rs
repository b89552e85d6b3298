//! Earning entity model.

use serde::{Deserialize, Serialize};

use rentals_core::types::{PropertyId, RecordId, Timestamp, UserId};

use super::kind::{EarningKind, EarningStatus};
use crate::record::Record;

/// One entry in a landlord's earnings ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earning {
    /// Unique entry identifier.
    pub id: RecordId,
    /// Landlord the entry belongs to.
    pub landlord_id: UserId,
    /// Property the entry relates to, if any.
    #[serde(default)]
    pub property_id: Option<PropertyId>,
    /// Ledger description.
    pub description: String,
    /// Income, expense, or payout.
    pub kind: EarningKind,
    /// Free-form category ("rent", "repairs", ...).
    #[serde(default)]
    pub category: String,
    /// Amount in Naira, always non-negative; `kind` carries the sign.
    pub amount: i64,
    /// Settlement status.
    pub status: EarningStatus,
    /// When the entry was recorded.
    pub date: Timestamp,
}

impl Earning {
    /// The amount with the kind's sign applied.
    pub fn signed_amount(&self) -> i64 {
        self.kind.sign() * self.amount
    }
}

impl Record for Earning {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}
