//! Pagination configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::pagination::{EmptyPages, MAX_PAGE_SIZE};

/// Default page size and limits for list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when a caller does not pick one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Largest page size a caller may request.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
    /// How many pages an empty result reports.
    #[serde(default)]
    pub empty_pages: EmptyPages,
}

impl PaginationConfig {
    /// Check that the sizes are positive and consistent.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(AppError::configuration("Page sizes must be positive"));
        }
        if self.max_page_size > MAX_PAGE_SIZE {
            return Err(AppError::configuration(format!(
                "max_page_size ({}) exceeds the limit of {MAX_PAGE_SIZE}",
                self.max_page_size
            )));
        }
        if self.default_page_size > self.max_page_size {
            return Err(AppError::configuration(format!(
                "default_page_size ({}) exceeds max_page_size ({})",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            empty_pages: EmptyPages::default(),
        }
    }
}

fn default_page_size() -> u64 {
    12
}

fn default_max_page_size() -> u64 {
    100
}
