//! Client configuration sourced from the environment.

use std::time::Duration;

use serde::Serialize;

/// Default base endpoint for the Cloudflare v4 API.
pub const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Default bound on a single query round-trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection configuration for the remote query service.
///
/// Values are read once at construction and never reloaded. Absent values
/// are legal: they are reported by [`D1Config::missing`] and surface as a
/// structured failure at query time, so processes without the database
/// wired up still start.
#[derive(Debug, Clone)]
pub struct D1Config {
    pub account_id: Option<String>,
    pub database_id: Option<String>,
    pub api_token: Option<String>,
    pub api_base: String,
    pub timeout: Duration,
}

/// Presence summary of a [`D1Config`], with the credential reduced to a flag.
#[derive(Debug, Serialize)]
pub struct ConfigStatus {
    pub api_base: String,
    pub account_id: bool,
    pub database_id: bool,
    pub api_token: bool,
    pub missing: Vec<&'static str>,
}

impl Default for D1Config {
    fn default() -> Self {
        Self {
            account_id: None,
            database_id: None,
            api_token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl D1Config {
    /// Create a config with explicit identifiers and credential.
    pub fn new(
        account_id: impl Into<String>,
        database_id: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            account_id: Some(account_id.into()),
            database_id: Some(database_id.into()),
            api_token: Some(api_token.into()),
            ..Self::default()
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            account_id: env_var("CLOUDFLARE_ACCOUNT_ID"),
            database_id: env_var("CLOUDFLARE_D1_DATABASE_ID"),
            api_token: env_var("CLOUDFLARE_API_TOKEN"),
            api_base: env_var("CLOUDFLARE_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the base endpoint (also used to point at a test server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Names of the required values that are absent.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.account_id.is_none() {
            missing.push("CLOUDFLARE_ACCOUNT_ID");
        }
        if self.database_id.is_none() {
            missing.push("CLOUDFLARE_D1_DATABASE_ID");
        }
        if self.api_token.is_none() {
            missing.push("CLOUDFLARE_API_TOKEN");
        }
        missing
    }

    /// Whether every value needed to issue a query is present.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Summarize which values are present without exposing the credential.
    pub fn status(&self) -> ConfigStatus {
        ConfigStatus {
            api_base: self.api_base.clone(),
            account_id: self.account_id.is_some(),
            database_id: self.database_id.is_some(),
            api_token: self.api_token.is_some(),
            missing: self.missing(),
        }
    }
}

/// Read an env var, treating unset and empty as absent.
fn env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_complete() {
        let config = D1Config::new("acc", "db", "token");
        assert!(config.is_complete());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_default_reports_all_missing() {
        let config = D1Config::default();
        assert!(!config.is_complete());
        assert_eq!(
            config.missing(),
            vec![
                "CLOUDFLARE_ACCOUNT_ID",
                "CLOUDFLARE_D1_DATABASE_ID",
                "CLOUDFLARE_API_TOKEN"
            ]
        );
    }

    #[test]
    fn test_partial_config_reports_remaining() {
        let config = D1Config {
            account_id: Some("acc".to_string()),
            api_token: Some("token".to_string()),
            ..D1Config::default()
        };
        assert_eq!(config.missing(), vec!["CLOUDFLARE_D1_DATABASE_ID"]);
    }

    #[test]
    fn test_with_setters() {
        let config = D1Config::new("acc", "db", "token")
            .with_api_base("http://127.0.0.1:9999")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_base, "http://127.0.0.1:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_env_var_treats_empty_as_absent() {
        std::env::set_var("D1_CONFIG_TEST_EMPTY", "");
        std::env::set_var("D1_CONFIG_TEST_SET", "value");
        assert_eq!(env_var("D1_CONFIG_TEST_EMPTY"), None);
        assert_eq!(env_var("D1_CONFIG_TEST_UNSET"), None);
        assert_eq!(env_var("D1_CONFIG_TEST_SET"), Some("value".to_string()));
    }

    #[test]
    fn test_status_redacts_credential() {
        let config = D1Config::new("acc", "db", "secret-token");
        let status = config.status();
        assert!(status.api_token);
        let json = serde_json::to_string(&status).unwrap();
        assert!(!json.contains("secret-token"));
    }
}
