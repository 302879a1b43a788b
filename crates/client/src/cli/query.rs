//! Query CLI command.

use clap::Parser;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Execute a SQL statement against the configured database.
#[derive(Debug, Parser)]
pub struct QueryCommand {
    /// SQL statement to execute.
    pub sql: String,

    /// Positional parameter for the statement; repeat for multiple values.
    ///
    /// Each value is read as a JSON scalar (`2`, `true`, `null`); anything
    /// that does not parse is passed through as a string.
    #[arg(short, long = "param")]
    pub params: Vec<String>,
}

impl QueryCommand {
    /// Parse the raw parameter flags into wire values, preserving order.
    pub fn wire_params(&self) -> Result<Vec<Value>> {
        self.params.iter().map(|raw| parse_param(raw)).collect()
    }
}

/// Interpret a raw CLI parameter as a JSON scalar.
fn parse_param(raw: &str) -> Result<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(_)) | Ok(Value::Object(_)) => Err(ClientError::InvalidInput(format!(
            "parameter must be a scalar: {raw}"
        ))),
        Ok(value) => Ok(value),
        Err(_) => Ok(Value::String(raw.to_string())),
    }
}
