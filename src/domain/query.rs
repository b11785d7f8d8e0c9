use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::ReportType;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Filter and pagination snapshot sent to the report endpoint.
///
/// One value describes exactly one request. Page navigation derives a new
/// snapshot with [`QueryParams::with_page`] instead of mutating the old one.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// `None` means "all subscribers"; empty strings are never stored.
    pub subscriber_name: Option<String>,
    pub report_type: ReportType,
    pub page: usize,
    pub page_size: usize,
}

impl QueryParams {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            subscriber_name: None,
            report_type: ReportType::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn subscriber_name(mut self, name: impl Into<String>) -> Self {
        self.subscriber_name = Some(name.into())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    pub fn report_type(mut self, report_type: ReportType) -> Self {
        self.report_type = report_type;
        self
    }

    pub fn paginate(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Same filters, different page. Used for page navigation so every other
    /// field of the last submitted query is preserved exactly.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn date_range_ordered(&self) -> bool {
        self.start_date <= self.end_date
    }
}
