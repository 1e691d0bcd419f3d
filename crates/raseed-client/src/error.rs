use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

use crate::contracts::types::{SourceIssue, SourceSummary};

pub(crate) const SOURCE_HELP_COMMAND: &str = "raseed transactions --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `raseed {cmd} --help` for usage."),
            None => "Run `raseed --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_source_format(message: &str, received_format: &str) -> Self {
        Self::new(
            "invalid_source_format",
            message,
            vec![
                "Provide a JSON array of transaction objects or a CSV file with headers."
                    .to_string(),
                format!("Run `{SOURCE_HELP_COMMAND}` to confirm field requirements."),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn source_schema_mismatch(
        required_headers: Vec<String>,
        optional_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        Self::new(
            "source_schema_mismatch",
            "CSV headers do not match the transaction schema.",
            vec![
                "Include all required headers; `id` may be omitted.".to_string(),
                "Do not include unknown headers.".to_string(),
            ],
        )
        .with_data(json!({
            "required_headers": required_headers,
            "optional_headers": optional_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn source_validation_failed(summary: SourceSummary, issues: Vec<SourceIssue>) -> Self {
        let invalid = summary.rows_invalid;
        Self::new(
            "source_validation_failed",
            &format!("Transaction source failed validation: {invalid} rows need fixes."),
            vec![
                "Fix the listed issues in your source file.".to_string(),
                "Rerun the command with the corrected file.".to_string(),
            ],
        )
        .with_data(json!({
            "summary": summary,
            "issues": issues,
        }))
    }

    pub fn source_read_failed(source: &str, detail: &str) -> Self {
        Self::new(
            "source_read_failed",
            &format!("Could not read transaction source `{source}`: {detail}"),
            vec![
                "Verify the path exists and is readable.".to_string(),
                "Pass `-` to read from stdin instead.".to_string(),
            ],
        )
    }

    pub fn wallet_not_found(wallet_id: &str, known_ids: Vec<String>) -> Self {
        Self::new(
            "wallet_not_found",
            &format!("Wallet `{wallet_id}` was not found."),
            vec!["Run `raseed wallets` to list wallet ids.".to_string()],
        )
        .with_data(json!({
            "wallet_id": wallet_id,
            "known_ids": known_ids,
        }))
    }

    pub fn config_read_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "config_read_failed",
            &format!("Cannot read configuration at `{location}`: {detail}"),
            vec![format!(
                "Grant read access to `{location}` or set `RASEED_HOME` to another directory."
            )],
        )
    }

    pub fn config_invalid(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "config_invalid",
            &format!("Configuration at `{location}` is invalid: {detail}"),
            vec![format!(
                "Fix or remove `{location}`; defaults apply when the file is absent."
            )],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn is_internal(&self) -> bool {
        self.code.starts_with("internal_") || self.code == "config_read_failed"
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::ClientError;

    #[test]
    fn command_hint_is_attached_to_invalid_argument() {
        let error = ClientError::invalid_argument_for_command("bad page", Some("transactions"));
        assert_eq!(error.code, "invalid_argument");
        assert_eq!(
            error.recovery_steps,
            vec!["Run `raseed transactions --help` for usage.".to_string()]
        );
        assert!(error.data.is_some());
        if let Some(data) = error.data {
            assert_eq!(data["command_hint"], "transactions");
        }
    }

    #[test]
    fn internal_codes_are_flagged() {
        assert!(ClientError::internal_serialization("boom").is_internal());
        assert!(!ClientError::invalid_argument("nope").is_internal());
    }
}
