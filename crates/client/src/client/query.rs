//! Query execution against the remote service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::D1Client;
use crate::error::{ClientError, Result};

/// Request body for the query endpoint.
#[derive(Debug, Serialize)]
pub struct QueryRequest {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Error entry in the service's response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "code {}: {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Response envelope shared by success and rejection bodies.
///
/// `result` is whatever the service returned; its row/column layout is not
/// modeled here.
#[derive(Debug, Deserialize)]
pub(crate) struct QueryEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiError>,
    #[serde(default)]
    pub result: Value,
}

impl D1Client {
    /// Execute a SQL statement with positional parameters.
    ///
    /// Returns the service's `result` payload untouched on success.
    /// Parameter order is preserved on the wire; pass an empty `Vec` for
    /// statements without placeholders.
    ///
    /// Exactly one request is sent per call. Retry policy belongs to the
    /// caller; whether a retry is safe depends on the statement itself.
    pub async fn query(&self, sql: &str, params: Vec<Value>) -> Result<Value> {
        let (Some(account_id), Some(database_id), Some(api_token)) = (
            self.config.account_id.as_deref(),
            self.config.database_id.as_deref(),
            self.config.api_token.as_deref(),
        ) else {
            let missing = self.config.missing();
            tracing::warn!(missing = ?missing, "query skipped, configuration incomplete");
            return Err(ClientError::MissingConfiguration(missing.join(", ")));
        };

        if sql.trim().is_empty() {
            return Err(ClientError::InvalidInput(
                "sql statement is empty".to_string(),
            ));
        }

        let url = self.query_url(account_id, database_id);
        let body = QueryRequest {
            sql: sql.to_string(),
            params,
        };

        tracing::debug!(%url, "dispatching query");
        let response = match self
            .client
            .post(&url)
            .bearer_auth(api_token)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "query transport failure");
                return Err(e.into());
            }
        };

        self.handle_query_response(response).await
    }
}
