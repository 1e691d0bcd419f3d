use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use ulid::Ulid;

use crate::contracts::types::{SourceIssue, SourceSummary};
use crate::ingest::parse::ParsedRow;
use crate::view::Transaction;
use crate::{ClientError, ClientResult};

pub(crate) fn validate_rows(parsed_rows: Vec<ParsedRow>) -> ClientResult<Vec<Transaction>> {
    let total_rows = parsed_rows.len();
    let mut rows = Vec::with_capacity(total_rows);
    let mut issues = Vec::new();
    let mut first_row_by_id: HashMap<String, i64> = HashMap::new();

    for raw in parsed_rows {
        let mut row_issues = Vec::new();

        let id = normalize_optional(raw.id);
        if let Some(id_value) = id.as_ref() {
            if let Some(first_row) = first_row_by_id.get(id_value) {
                row_issues.push(SourceIssue {
                    row: raw.row,
                    field: "id".to_string(),
                    code: "duplicate_id".to_string(),
                    description: format!("id `{id_value}` already appears on row {first_row}."),
                    expected: Some("unique id".to_string()),
                    received: Some(id_value.clone()),
                });
            } else {
                first_row_by_id.insert(id_value.clone(), raw.row);
            }
        }

        let date = validate_date(raw.row, raw.date, &mut row_issues);
        let description =
            validate_required_string(raw.row, "description", raw.description, &mut row_issues);
        let amount = validate_amount(raw.row, raw.amount, &mut row_issues);
        let category =
            validate_required_string(raw.row, "category", raw.category, &mut row_issues);
        let wallet = validate_required_string(raw.row, "wallet", raw.wallet, &mut row_issues);

        if !row_issues.is_empty() {
            issues.extend(row_issues);
            continue;
        }

        if let (Some(date), Some(description), Some(amount), Some(category), Some(wallet)) =
            (date, description, amount, category, wallet)
        {
            rows.push(Transaction {
                id: id.unwrap_or_else(|| format!("txn_{}", Ulid::new())),
                date,
                description,
                amount,
                category,
                wallet,
            });
        }
    }

    if !issues.is_empty() {
        let summary = SourceSummary {
            rows_read: total_rows as i64,
            rows_valid: rows.len() as i64,
            rows_invalid: issues
                .iter()
                .map(|issue| issue.row)
                .collect::<HashSet<i64>>()
                .len() as i64,
        };
        return Err(ClientError::source_validation_failed(summary, issues));
    }

    Ok(rows)
}

fn validate_required_string(
    row: i64,
    field: &str,
    value: Option<String>,
    issues: &mut Vec<SourceIssue>,
) -> Option<String> {
    let normalized = normalize_optional(value);
    if normalized.is_none() {
        issues.push(SourceIssue {
            row,
            field: field.to_string(),
            code: "missing_required_field".to_string(),
            description: format!("{field} must be present and non-empty."),
            expected: Some("non-empty string".to_string()),
            received: Some(String::new()),
        });
    }
    normalized
}

/// Only fixed-width `YYYY-MM-DD` dates are accepted so that string order
/// matches calendar order in the date column sort.
fn validate_date(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<SourceIssue>,
) -> Option<String> {
    let Some(raw) = normalize_optional(value) else {
        issues.push(SourceIssue {
            row,
            field: "date".to_string(),
            code: "missing_required_field".to_string(),
            description: "date must be present and non-empty.".to_string(),
            expected: Some("YYYY-MM-DD".to_string()),
            received: Some(String::new()),
        });
        return None;
    };

    if !has_iso_date_shape(&raw) {
        issues.push(SourceIssue {
            row,
            field: "date".to_string(),
            code: "invalid_date_format".to_string(),
            description: "date must use YYYY-MM-DD format.".to_string(),
            expected: Some("YYYY-MM-DD".to_string()),
            received: Some(raw),
        });
        return None;
    }

    if NaiveDate::parse_from_str(&raw, "%Y-%m-%d").is_err() {
        issues.push(SourceIssue {
            row,
            field: "date".to_string(),
            code: "invalid_date".to_string(),
            description: "date must be a valid calendar date.".to_string(),
            expected: Some("YYYY-MM-DD".to_string()),
            received: Some(raw),
        });
        return None;
    }

    Some(raw)
}

fn validate_amount(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<SourceIssue>,
) -> Option<f64> {
    let Some(raw) = normalize_optional(value) else {
        issues.push(SourceIssue {
            row,
            field: "amount".to_string(),
            code: "missing_required_field".to_string(),
            description: "amount must be present.".to_string(),
            expected: Some("number".to_string()),
            received: Some(String::new()),
        });
        return None;
    };

    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Some(amount),
        _ => {
            issues.push(SourceIssue {
                row,
                field: "amount".to_string(),
                code: "invalid_amount".to_string(),
                description: "amount must be a finite number.".to_string(),
                expected: Some("number".to_string()),
                received: Some(raw),
            });
            None
        }
    }
}

fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0usize, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|index| bytes[*index].is_ascii_digit())
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|inner| inner.trim().to_string())
        .filter(|inner| !inner.is_empty())
}
