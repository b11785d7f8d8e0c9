//! Session orchestration over the report transport.

use chrono::NaiveDate;
use thiserror::Error;

pub mod session;

pub use session::{ReportSession, SessionState};

/// Query invariant violations caught before dispatch.
///
/// These never enter the Loading state and never reach the network; the
/// caller gets them back directly.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("start date {start} is after end date {end}")]
    DateRangeReversed { start: NaiveDate, end: NaiveDate },

    #[error("page must be at least 1")]
    ZeroPage,

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

pub type ServiceResult<T> = Result<T, ValidationError>;
