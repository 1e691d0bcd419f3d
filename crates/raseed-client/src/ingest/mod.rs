//! Loads transaction records from JSON or CSV and validates them before the
//! view engine sees them.

mod parse;
mod source;
mod validate;

use tracing::info;

use crate::contracts::types::SourceInfo;
use crate::fixtures::{SAMPLE_SOURCE, sample_transactions};
use crate::view::Transaction;
use crate::{ClientError, ClientResult};

pub use source::SourceKind;

pub(crate) const REQUIRED_FIELDS: [&str; 5] =
    ["date", "description", "amount", "category", "wallet"];
pub(crate) const OPTIONAL_FIELDS: [&str; 1] = ["id"];

#[derive(Debug, Clone)]
pub struct LoadedTransactions {
    pub source: SourceInfo,
    pub transactions: Vec<Transaction>,
}

/// Reads from `path` (`-` for stdin) or falls back to the bundled sample
/// when no path is given.
pub fn load_transactions(
    path: Option<&str>,
    stdin_override: Option<String>,
) -> ClientResult<LoadedTransactions> {
    let Some(path) = path else {
        let transactions = sample_transactions();
        return Ok(LoadedTransactions {
            source: SourceInfo {
                kind: SAMPLE_SOURCE.to_string(),
                reference: None,
                rows: transactions.len(),
            },
            transactions,
        });
    };

    let resolved = source::resolve_source(path, stdin_override)?;
    let transactions = parse_transactions(&resolved.content)?;
    info!(
        kind = resolved.kind.as_str(),
        rows = transactions.len(),
        "loaded transaction source"
    );

    Ok(LoadedTransactions {
        source: SourceInfo {
            kind: resolved.kind.as_str().to_string(),
            reference: resolved.reference,
            rows: transactions.len(),
        },
        transactions,
    })
}

pub fn parse_transactions(content: &str) -> ClientResult<Vec<Transaction>> {
    let rows = parse::parse_source(content)?;
    validate::validate_rows(rows)
}

pub(crate) fn invalid_input_error(message: &str) -> ClientError {
    ClientError::invalid_argument_with_recovery(
        message,
        vec![
            "Provide a JSON array or a CSV file with a header row.".to_string(),
            format!(
                "Required fields: {}. Optional: {}.",
                REQUIRED_FIELDS.join(", "),
                OPTIONAL_FIELDS.join(", ")
            ),
        ],
    )
}
