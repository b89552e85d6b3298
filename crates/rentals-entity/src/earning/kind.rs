//! Earning type and settlement status.

string_enum! {
    /// Direction of a ledger entry.
    pub enum EarningKind {
        /// Rent or booking revenue.
        Income => "income",
        /// Maintenance, fees, and other costs.
        Expense => "expense",
        /// Withdrawal to the landlord's bank account.
        Payout => "payout",
    }
}

impl EarningKind {
    /// Human-readable label for filters.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Payout => "Payout",
        }
    }

    /// Sign applied to the amount when computing a net balance.
    pub fn sign(&self) -> i64 {
        match self {
            Self::Income => 1,
            Self::Expense | Self::Payout => -1,
        }
    }
}

string_enum! {
    /// Whether a ledger entry has settled.
    pub enum EarningStatus {
        /// Funds have moved.
        Completed => "completed",
        /// Awaiting settlement.
        Pending => "pending",
    }
}

impl EarningStatus {
    /// Human-readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }
}
