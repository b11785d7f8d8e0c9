use thiserror::Error;

/// Failures raised by the report transport.
///
/// Every variant surfaces to the operator as a single error-state message;
/// the variants stay distinguishable for logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Endpoint unreachable: DNS failure, refused connection, broken stream.
    #[error("network error: {0}")]
    Transport(String),

    /// The client-side deadline elapsed before the backend replied.
    #[error("request timed out")]
    Timeout,

    /// Non-2xx response. Displays the server-supplied message when one was
    /// parseable, otherwise a generic line carrying the status code.
    #[error("{}", http_message(.status, .message.as_deref()))]
    Http {
        status: u16,
        message: Option<String>,
    },

    /// 2xx response whose body did not match the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

fn http_message(status: &u16, message: Option<&str>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("request failed with HTTP status {status}"),
    }
}
