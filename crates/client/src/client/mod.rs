//! HTTP client for the remote query service.

pub mod query;

use crate::config::D1Config;
use crate::error::{ClientError, Result};

/// HTTP client for Cloudflare D1's query endpoint.
///
/// Holds no mutable state; clones share the underlying connection pool, so
/// one instance can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct D1Client {
    client: reqwest::Client,
    config: D1Config,
}

impl D1Client {
    /// Create a new client with the given configuration.
    ///
    /// Reachability is not checked here; an incomplete configuration is
    /// only reported when a query is attempted.
    pub fn new(config: D1Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Create a client from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::new(D1Config::from_env())
    }

    /// Get the active configuration.
    pub fn config(&self) -> &D1Config {
        &self.config
    }

    /// Build the query endpoint URL for the given identifiers.
    fn query_url(&self, account_id: &str, database_id: &str) -> String {
        format!(
            "{}/accounts/{}/d1/database/{}/query",
            self.config.api_base, account_id, database_id
        )
    }

    /// Map a response from the query endpoint into the query outcome.
    async fn handle_query_response(
        &self,
        response: reqwest::Response,
    ) -> Result<serde_json::Value> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let errors = serde_json::from_str::<query::QueryEnvelope>(&body)
                .map(|envelope| envelope.errors)
                .unwrap_or_default();
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                errors,
            });
        }
        let envelope: query::QueryEnvelope = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        if !envelope.success {
            return Err(ClientError::QueryRejected {
                errors: envelope.errors,
            });
        }
        Ok(envelope.result)
    }
}
