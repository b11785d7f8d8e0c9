use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::ReportFetcher;
use crate::domain::query::QueryParams;
use crate::domain::report::ReportResult;
use crate::models::config::DateRangePolicy;
use crate::services::{ServiceResult, ValidationError};

/// Lifecycle of the current query. Exactly one variant is active at a time
/// and only the owning [`ReportSession`] replaces it.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Idle,
    Loading(QueryParams),
    Success {
        params: QueryParams,
        result: ReportResult,
    },
    Error {
        message: String,
        params: QueryParams,
    },
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading(_))
    }

    pub fn result(&self) -> Option<&ReportResult> {
        match self {
            SessionState::Success { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SessionState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Parameters of the last settled query; the ones page navigation
    /// re-issues with only the page changed.
    pub fn last_params(&self) -> Option<&QueryParams> {
        match self {
            SessionState::Success { params, .. } | SessionState::Error { params, .. } => {
                Some(params)
            }
            _ => None,
        }
    }

    /// Page currently on screen. Prefers the backend's echoed page number
    /// over the requested one when pagination metadata is present.
    pub fn displayed_page(&self) -> Option<usize> {
        match self {
            SessionState::Success { params, result } => Some(
                result
                    .pagination
                    .map(|info| info.page)
                    .unwrap_or(params.page),
            ),
            SessionState::Error { params, .. } => Some(params.page),
            _ => None,
        }
    }
}

/// Owns the state of one report view: issues queries, reconciles their
/// outcomes, and derives page navigation as re-queries.
///
/// Concurrent submits follow last-request-wins: every submit bumps a
/// generation counter and a completion only applies while its generation is
/// still the live one. There is no request cancellation and no retry.
pub struct ReportSession<F> {
    fetcher: F,
    date_range_check: DateRangePolicy,
    state: Mutex<SessionState>,
    generation: AtomicU64,
}

impl<F> ReportSession<F>
where
    F: ReportFetcher,
{
    pub fn new(fetcher: F, date_range_check: DateRangePolicy) -> Self {
        Self {
            fetcher,
            date_range_check,
            state: Mutex::new(SessionState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.lock_state().clone()
    }

    /// Checks query invariants without dispatching anything.
    pub fn validate(&self, params: &QueryParams) -> ServiceResult<()> {
        if params.page == 0 {
            return Err(ValidationError::ZeroPage);
        }
        if params.page_size == 0 {
            return Err(ValidationError::ZeroPageSize);
        }
        if self.date_range_check == DateRangePolicy::ClientSide && !params.date_range_ordered() {
            return Err(ValidationError::DateRangeReversed {
                start: params.start_date,
                end: params.end_date,
            });
        }
        Ok(())
    }

    /// Runs one query to a terminal state.
    ///
    /// Validation failures return without entering Loading. Otherwise the
    /// session transitions to `Loading`, issues exactly one request, and
    /// settles to `Success` or `Error`. If a newer submit (or a reset)
    /// superseded this one, the stale outcome is discarded and the state
    /// the newer call produced is returned instead.
    pub async fn submit(&self, params: QueryParams) -> ServiceResult<SessionState> {
        self.validate(&params)?;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.lock_state() = SessionState::Loading(params.clone());

        let outcome = self.fetcher.fetch_summary_usage(&params).await;

        let mut state = self.lock_state();
        if self.generation.load(Ordering::SeqCst) == generation {
            *state = match outcome {
                Ok(result) => SessionState::Success { params, result },
                Err(err) => {
                    log::warn!("summary-usage query failed: {err:?}");
                    SessionState::Error {
                        message: err.to_string(),
                        params,
                    }
                }
            };
        } else {
            log::debug!("discarding stale result for generation {generation}");
        }

        Ok(state.clone())
    }

    /// Re-issues the last settled query with only the page changed.
    ///
    /// Meaningful only from `Success` or `Error`; otherwise the current
    /// state is returned untouched. The target is clamped to
    /// `[1, total_pages]` when pagination metadata is known, else only to
    /// `≥ 1` and the backend owns the upper bound. Navigating to the page
    /// already on screen is a no-op without a network call.
    pub async fn go_to_page(&self, page: usize) -> ServiceResult<SessionState> {
        let next_params = {
            let state = self.lock_state();

            let (params, known_total) = match &*state {
                SessionState::Success { params, result } => (params, result.total_pages()),
                SessionState::Error { params, .. } => (params, None),
                _ => return Ok(state.clone()),
            };

            let mut target = page.max(1);
            if let Some(total) = known_total.filter(|&total| total > 0) {
                target = target.min(total);
            }

            if Some(target) == state.displayed_page() {
                return Ok(state.clone());
            }

            params.with_page(target)
        };

        self.submit(next_params).await
    }

    /// Forces the session back to `Idle`. Any in-flight request becomes
    /// stale and its eventual result is discarded.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.lock_state() = SessionState::Idle;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
