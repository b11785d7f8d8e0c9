//! Mock fetcher for isolating the session controller in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::client::ReportFetcher;
use crate::client::errors::ClientResult;
use crate::domain::query::QueryParams;
use crate::domain::report::ReportResult;

mock! {
    pub Fetcher {}

    #[async_trait]
    impl ReportFetcher for Fetcher {
        async fn fetch_summary_usage(&self, params: &QueryParams) -> ClientResult<ReportResult>;
    }
}
