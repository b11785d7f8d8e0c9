//! Request/response shapes of `POST /api/reports/summary-usage`.
//!
//! Field names follow the backend's camelCase contract; conversions into
//! domain types normalize the backend's quirks (empty strings, the literal
//! `"N/A"` address, missing pagination fields) in one place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::query::QueryParams;
use crate::domain::report::{PageInfo, ReportResult, RowItem};
use crate::domain::types::ReportType;

/// JSON body sent to the report endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryUsageRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// `null` means "no subscriber filter"; the builder never sends `""`.
    pub subscriber_name: Option<String>,
    pub report_type: ReportType,
    pub page: usize,
    pub page_size: usize,
}

impl From<&QueryParams> for SummaryUsageRequest {
    fn from(params: &QueryParams) -> Self {
        Self {
            start_date: params.start_date,
            end_date: params.end_date,
            subscriber_name: params.subscriber_name.clone(),
            report_type: params.report_type,
            page: params.page,
            page_size: params.page_size,
        }
    }
}

/// Successful (200) response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryUsageResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub subscriber_name: Option<String>,
    #[serde(default)]
    pub company_physical_address1: Option<String>,
    pub report_type: ReportType,
    #[serde(default)]
    pub pagination: Option<PaginationDto>,
    #[serde(default)]
    pub data: Vec<SummaryUsageItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryUsageItem {
    pub product_desc: String,
    pub search_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page: usize,
    pub page_size: usize,
    pub total_records: u64,
    /// Some backend builds omit this; the conversion derives it then.
    #[serde(default)]
    pub total_pages: Option<usize>,
}

/// Error body optionally returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl From<PaginationDto> for PageInfo {
    fn from(dto: PaginationDto) -> Self {
        let total_pages = dto
            .total_pages
            .filter(|&pages| pages > 0)
            .unwrap_or_else(|| PageInfo::derive_total_pages(dto.total_records, dto.page_size));

        Self {
            page: dto.page,
            page_size: dto.page_size,
            total_records: dto.total_records,
            total_pages,
        }
    }
}

impl From<SummaryUsageResponse> for ReportResult {
    fn from(response: SummaryUsageResponse) -> Self {
        Self {
            start_date: response.start_date,
            end_date: response.end_date,
            subscriber_name: response
                .subscriber_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            // The backend sends "N/A" for subscribers without an address.
            company_address: response
                .company_physical_address1
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty() && s != "N/A"),
            report_type: response.report_type,
            rows: response
                .data
                .into_iter()
                .map(|item| RowItem {
                    product_description: item.product_desc,
                    search_count: item.search_count,
                })
                .collect(),
            pagination: response.pagination.map(PageInfo::from),
        }
    }
}
