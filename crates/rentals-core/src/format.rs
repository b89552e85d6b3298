//! The one place amounts, rates, and dates are turned into display text.

use std::fmt::Write;

use crate::config::display::DisplayConfig;
use crate::types::Timestamp;

const UNITS: [(u128, &str); 3] = [(1_000, "K"), (1_000_000, "M"), (1_000_000_000, "B")];

/// Display formatter driven by [`DisplayConfig`].
#[derive(Debug, Clone)]
pub struct Formatter {
    symbol: String,
    separator: String,
    date_format: String,
}

impl Formatter {
    /// Build a formatter from display settings.
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            symbol: config.currency_symbol.clone(),
            separator: config.thousands_separator.clone(),
            date_format: config.date_format.clone(),
        }
    }

    /// Full amount with grouped digits: `₦1,250,000`.
    pub fn currency(&self, amount: i64) -> String {
        let sign = if amount < 0 { "-" } else { "" };
        let digits = group_thousands(amount.unsigned_abs(), &self.separator);
        format!("{sign}{}{digits}", self.symbol)
    }

    /// Abbreviated amount for stat cards: `₦1.2M`, `₦850K`, `₦2B`.
    ///
    /// Amounts below one thousand fall back to [`Formatter::currency`].
    pub fn compact(&self, amount: i64) -> String {
        let sign = if amount < 0 { "-" } else { "" };
        let magnitude = u128::from(amount.unsigned_abs());
        if magnitude < 1_000 {
            return self.currency(amount);
        }
        let mut index = UNITS.iter().rposition(|(unit, _)| magnitude >= *unit).unwrap_or(0);
        // Tenths of a unit, rounded half up.
        let mut tenths = (magnitude * 10 + UNITS[index].0 / 2) / UNITS[index].0;
        if tenths >= 10_000 && index + 1 < UNITS.len() {
            index += 1;
            tenths = (magnitude * 10 + UNITS[index].0 / 2) / UNITS[index].0;
        }
        let suffix = UNITS[index].1;
        let (whole, fraction) = (tenths / 10, tenths % 10);
        if fraction == 0 {
            format!("{sign}{}{whole}{suffix}", self.symbol)
        } else {
            format!("{sign}{}{whole}.{fraction}{suffix}", self.symbol)
        }
    }

    /// Whole-number percentage: `75%`.
    pub fn percent(&self, rate: u32) -> String {
        format!("{rate}%")
    }

    /// Calendar date in the configured format, or `YYYY-MM-DD` when the
    /// format cannot be rendered.
    pub fn date(&self, timestamp: &Timestamp) -> String {
        let mut out = String::new();
        let dt = timestamp.as_datetime();
        if write!(out, "{}", dt.format(&self.date_format)).is_err() {
            return dt.format("%Y-%m-%d").to_string();
        }
        out
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}

/// Insert `separator` between groups of three digits.
pub fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
