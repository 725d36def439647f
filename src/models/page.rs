//! Page arithmetic for listings

use crate::config::CatalogConfig;

/// A resolved page request: 1-based page number and a bounded page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Resolve optional query values against the catalog settings
    pub fn new(page: Option<i64>, per_page: Option<i64>, config: &CatalogConfig) -> Self {
        let max = config.max_page_size.max(1);
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(config.default_page_size).clamp(1, max),
        }
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Number of pages needed to show `total` rows
    pub fn page_count(&self, total: i64) -> i64 {
        if total <= 0 {
            0
        } else {
            (total + self.per_page - 1) / self.per_page
        }
    }
}
