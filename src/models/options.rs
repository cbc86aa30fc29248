//! Pager options and the presets used by the popup tables

use serde::{Deserialize, Serialize};

use super::PaginationError;
use crate::MIN_PAGINATION_SIZE;

/// How a table is split into pages and how many slots the control shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagerOptions {
    /// Rows shown on one page.
    pub per_page: usize,
    /// Slots (pages and gaps) the pagination control can display.
    pub pagination_size: i64,
}

/// Named option sets matching the tables in the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Preset {
    /// Classic league standings.
    League,
    /// Player statistics table.
    Statistics,
}

impl PagerOptions {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::League => Self {
                per_page: 7,
                pagination_size: 5,
            },
            Preset::Statistics => Self {
                per_page: 8,
                pagination_size: 5,
            },
        }
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_pagination_size(mut self, pagination_size: i64) -> Self {
        self.pagination_size = pagination_size;
        self
    }

    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.per_page == 0 {
            return Err(PaginationError::InvalidPerPage);
        }
        if self.pagination_size < MIN_PAGINATION_SIZE {
            return Err(PaginationError::InvalidPaginationSize(self.pagination_size));
        }
        Ok(())
    }
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self::preset(Preset::League)
    }
}
