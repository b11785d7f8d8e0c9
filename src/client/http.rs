use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::client::errors::{ClientError, ClientResult};
use crate::client::{ReportFetcher, SUMMARY_USAGE_PATH};
use crate::domain::query::QueryParams;
use crate::domain::report::ReportResult;
use crate::dto::report::{ErrorBody, SummaryUsageRequest, SummaryUsageResponse};
use crate::models::auth::CredentialProvider;
use crate::models::config::AppConfig;

/// Reqwest-backed transport for the summary-usage endpoint.
pub struct HttpReportClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpReportClient {
    /// Builds a client with the configured base URL and request timeout.
    /// The bearer credential comes from the injected provider, never from a
    /// literal.
    pub fn new(
        config: &AppConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SUMMARY_USAGE_PATH)
    }
}

#[async_trait]
impl ReportFetcher for HttpReportClient {
    async fn fetch_summary_usage(&self, params: &QueryParams) -> ClientResult<ReportResult> {
        let payload = SummaryUsageRequest::from(params);
        log::debug!(
            "POST {} page {} ({} rows/page)",
            self.endpoint(),
            params.page,
            params.page_size
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(self.credentials.bearer_token())
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        decode_response(status, &body)
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Transport(err.to_string())
    }
}

/// Maps one (status, body) pair into a report or a typed error.
///
/// Non-2xx bodies are only *optionally* JSON; an unparseable error body must
/// not fail differently from a missing one.
pub fn decode_response(status: StatusCode, body: &str) -> ClientResult<ReportResult> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|m| !m.trim().is_empty());

        return Err(ClientError::Http {
            status: status.as_u16(),
            message,
        });
    }

    let parsed: SummaryUsageResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    Ok(parsed.into())
}
