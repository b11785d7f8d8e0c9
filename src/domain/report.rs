use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::ReportType;

/// Product description the backend uses to mark its aggregate row.
pub const TOTAL_SENTINEL: &str = "TOTAL";

/// One line of a usage report.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowItem {
    pub product_description: String,
    pub search_count: u64,
}

impl RowItem {
    /// Whether this is the backend-supplied aggregate row. The sentinel is
    /// identified by name only; the row itself has no special schema.
    pub fn is_total(&self) -> bool {
        self.product_description == TOTAL_SENTINEL
    }
}

/// Server-side pagination metadata.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_records: u64,
    pub total_pages: usize,
}

impl PageInfo {
    /// Fallback computation for backends that omit `totalPages`. The backend
    /// value wins whenever it is present.
    pub fn derive_total_pages(total_records: u64, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        (total_records as usize).div_ceil(page_size)
    }
}

/// Immutable snapshot of one successful report response.
///
/// Replaced wholesale on every new success, never merged with the previous
/// snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportResult {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub subscriber_name: Option<String>,
    pub company_address: Option<String>,
    pub report_type: ReportType,
    pub rows: Vec<RowItem>,
    pub pagination: Option<PageInfo>,
}

impl ReportResult {
    pub fn total_row(&self) -> Option<&RowItem> {
        self.rows.iter().find(|row| row.is_total())
    }

    /// Known page count, or `None` when the backend sent no pagination block
    /// and clamping has to be left to it.
    pub fn total_pages(&self) -> Option<usize> {
        self.pagination.map(|info| info.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_row_is_found_by_sentinel_name() {
        let row = RowItem {
            product_description: "Commercial Detailed Credit".to_string(),
            search_count: 96,
        };
        let total = RowItem {
            product_description: TOTAL_SENTINEL.to_string(),
            search_count: 575,
        };
        assert!(!row.is_total());
        assert!(total.is_total());
    }

    #[test]
    fn test_derive_total_pages_rounds_up() {
        assert_eq!(PageInfo::derive_total_pages(575, 10), 58);
        assert_eq!(PageInfo::derive_total_pages(570, 10), 57);
        assert_eq!(PageInfo::derive_total_pages(0, 10), 0);
        assert_eq!(PageInfo::derive_total_pages(575, 0), 0);
    }
}
