//! Pretty output formatting.

use crate::config::D1Config;

/// Format a value as indented JSON.
///
/// The query payload is opaque to this client, so pretty output stays a
/// faithful rendering of whatever the service returned.
pub fn format_pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Format the resolved configuration for display, credential redacted.
pub fn format_config(config: &D1Config) -> String {
    let mut output = String::from("CONFIGURATION\n");
    output.push_str(&"-".repeat(40));
    output.push_str(&format!("\n  API base: {}", config.api_base));
    output.push_str(&format!(
        "\n  Account ID: {}",
        presence(&config.account_id, false)
    ));
    output.push_str(&format!(
        "\n  Database ID: {}",
        presence(&config.database_id, false)
    ));
    output.push_str(&format!(
        "\n  API token: {}",
        presence(&config.api_token, true)
    ));
    let missing = config.missing();
    if missing.is_empty() {
        output.push_str("\n  Status: complete");
    } else {
        output.push_str(&format!("\n  Status: missing {}", missing.join(", ")));
    }
    output
}

fn presence(value: &Option<String>, redact: bool) -> String {
    match value {
        Some(_) if redact => "(set, redacted)".to_string(),
        Some(value) => value.clone(),
        None => "(not set)".to_string(),
    }
}
