//! Currency and date display configuration.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Settings consumed by [`crate::format::Formatter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol prefixed to monetary amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Separator inserted between groups of three digits.
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    /// `chrono` format string for calendar dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            thousands_separator: default_thousands_separator(),
            date_format: default_date_format(),
        }
    }
}

impl DisplayConfig {
    /// Reject date formats `chrono` cannot render.
    pub fn validate(&self) -> Result<(), AppError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::configuration(format!(
                "date_format '{}' is not a valid strftime pattern",
                self.date_format
            )));
        }
        Ok(())
    }
}

fn default_currency_symbol() -> String {
    "₦".to_string()
}

fn default_thousands_separator() -> String {
    ",".to_string()
}

fn default_date_format() -> String {
    "%b %d, %Y".to_string()
}
