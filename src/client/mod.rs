//! Transport seam between the session controller and the report backend.

use async_trait::async_trait;

use crate::domain::query::QueryParams;
use crate::domain::report::ReportResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use errors::{ClientError, ClientResult};
pub use http::HttpReportClient;

/// Path of the summary-usage endpoint, relative to the configured base URL.
pub const SUMMARY_USAGE_PATH: &str = "/api/reports/summary-usage";

/// Issues one report query against the backend.
///
/// The session controller only ever talks to this trait, so tests swap in
/// stubs and the HTTP transport stays replaceable.
#[async_trait]
pub trait ReportFetcher {
    async fn fetch_summary_usage(&self, params: &QueryParams) -> ClientResult<ReportResult>;
}
