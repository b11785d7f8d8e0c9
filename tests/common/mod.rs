//! Shared test fetcher with controllable completion order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use usage_reports::client::ReportFetcher;
use usage_reports::client::errors::ClientResult;
use usage_reports::domain::query::QueryParams;
use usage_reports::domain::report::{PageInfo, ReportResult, RowItem};

pub const SLOW_SUBSCRIBER: &str = "slow";

/// Stub transport that answers every query from the request itself and can
/// hold back responses for the `slow` subscriber until released, so tests
/// control which of two in-flight requests settles first.
#[derive(Clone, Default)]
pub struct GatedFetcher {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    calls: AtomicUsize,
    seen: Mutex<Vec<QueryParams>>,
    started: Notify,
    gate: Notify,
}

impl GatedFetcher {
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<QueryParams> {
        self.inner.seen.lock().unwrap().clone()
    }

    /// Waits until a gated request has reached the transport.
    pub async fn wait_started(&self) {
        self.inner.started.notified().await;
    }

    /// Lets one gated request complete.
    pub fn release(&self) {
        self.inner.gate.notify_one();
    }
}

#[async_trait]
impl ReportFetcher for GatedFetcher {
    async fn fetch_summary_usage(&self, params: &QueryParams) -> ClientResult<ReportResult> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.seen.lock().unwrap().push(params.clone());

        if params.subscriber_name.as_deref() == Some(SLOW_SUBSCRIBER) {
            self.inner.started.notify_one();
            self.inner.gate.notified().await;
        }

        Ok(report_for(params))
    }
}

/// Echoes the query back the way the backend would.
pub fn report_for(params: &QueryParams) -> ReportResult {
    ReportResult {
        start_date: params.start_date,
        end_date: params.end_date,
        subscriber_name: params.subscriber_name.clone(),
        company_address: None,
        report_type: params.report_type,
        rows: vec![RowItem {
            product_description: "TOTAL".to_string(),
            search_count: 575,
        }],
        pagination: Some(PageInfo {
            page: params.page,
            page_size: params.page_size,
            total_records: 575,
            total_pages: PageInfo::derive_total_pages(575, params.page_size),
        }),
    }
}
