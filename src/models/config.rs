//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_PAGE_SIZE;

/// Whether `start_date ≤ end_date` is checked before dispatch or left to
/// the backend.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DateRangePolicy {
    /// Reject reversed ranges client-side, before any network call.
    #[default]
    ClientSide,
    /// Send the range as-is and let the backend decide.
    Backend,
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the library and the console binary.
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub date_range_check: DateRangePolicy,
    /// Bearer token for the report endpoint. Optional here because a caller
    /// may inject its own [`crate::models::auth::CredentialProvider`].
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
            date_range_check: DateRangePolicy::default(),
            bearer_token: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5186".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
