//! Client error types.

use thiserror::Error;

use crate::client::query::ApiError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when executing a query against the remote service.
///
/// Every failure is a matchable value; the client never panics on a bad
/// response and never reports a failed query as an empty success.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Required configuration values are absent. No request was attempted.
    #[error("missing configuration: {0}")]
    MissingConfiguration(String),

    /// Transport-level failure: DNS, connect, reset, or timeout.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Server returned {status}: {}", errors_summary(.errors))]
    ServerError { status: u16, errors: Vec<ApiError> },

    /// The service accepted the request but rejected the statement.
    #[error("Query rejected: {}", errors_summary(.errors))]
    QueryRejected { errors: Vec<ApiError> },

    /// The service returned a body this client cannot parse.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A caller-supplied value violates the query contract.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn errors_summary(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no error detail".to_string();
    }
    errors
        .iter()
        .map(ApiError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
