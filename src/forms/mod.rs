//! Form definitions backing the search front-end.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::InvalidReportType;

pub mod search;

#[derive(Debug, Error)]
/// Errors that can occur when processing form input.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid date for {field}: {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("invalid number for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    InvalidReportType(#[from] InvalidReportType),
}
