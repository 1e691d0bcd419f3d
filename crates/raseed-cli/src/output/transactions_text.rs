use std::io;

use serde_json::Value;

use super::format::{Column, format_amount, key_value_rows, render_table_or_blocks, terminal_width};

const TRANSACTION_COLUMNS: [Column<'static>; 5] = [
    Column::left("Date"),
    Column::left("Description"),
    Column::left("Category"),
    Column::left("Wallet"),
    Column::right("Amount"),
];

pub fn render_transactions(data: &Value) -> io::Result<String> {
    render_transactions_with_width(data, terminal_width())
}

pub(super) fn render_transactions_with_width(data: &Value, width: usize) -> io::Result<String> {
    let page = data
        .get("page")
        .ok_or_else(|| io::Error::other("transactions output requires page"))?;
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("transactions output requires rows"))?;
    let currency = data
        .get("currency_label")
        .and_then(Value::as_str)
        .unwrap_or("");

    let mut lines = vec!["Recent transactions".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Source:", source_label(data.get("source"))),
            ("Filters:", filters_label(data.get("filters"))),
            ("Sort:", sort_label(data.get("sort"))),
            (
                "Matches:",
                format!(
                    "{} of {}",
                    number(data.get("filtered_count")),
                    number(data.get("source").and_then(|source| source.get("rows")))
                ),
            ),
        ],
        2,
    ));
    lines.push(String::new());

    if rows.is_empty() {
        lines.push("  No transactions match these filters.".to_string());
    } else {
        let table_rows = rows
            .iter()
            .map(|row| {
                vec![
                    text(row, "date"),
                    text(row, "description"),
                    text(row, "category"),
                    text(row, "wallet"),
                    format!(
                        "{} {currency}",
                        format_amount(row.get("amount").and_then(Value::as_f64).unwrap_or(0.0))
                    )
                    .trim_end()
                    .to_string(),
                ]
            })
            .collect::<Vec<_>>();
        lines.extend(render_table_or_blocks(
            &TRANSACTION_COLUMNS,
            &table_rows,
            width,
            "Transaction",
        ));
    }

    lines.push(String::new());
    lines.push(page_line(page));
    Ok(lines.join("\n"))
}

pub fn render_facets(data: &Value) -> io::Result<String> {
    let categories = string_list(data.get("categories"))
        .ok_or_else(|| io::Error::other("facets output requires categories"))?;
    let wallets = string_list(data.get("wallets"))
        .ok_or_else(|| io::Error::other("facets output requires wallets"))?;

    let mut lines = vec!["Filter options".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[("Source:", source_label(data.get("source")))],
        2,
    ));
    lines.push(String::new());
    lines.push(format!("Categories ({}):", categories.len()));
    lines.extend(categories.iter().map(|category| format!("  {category}")));
    lines.push(String::new());
    lines.push(format!("Wallets ({}):", wallets.len()));
    lines.extend(wallets.iter().map(|wallet| format!("  {wallet}")));
    Ok(lines.join("\n"))
}

pub(super) fn page_line(page: &Value) -> String {
    let current = number(page.get("page"));
    let total = number(page.get("total_pages"));
    let first = number(page.get("first_row"));
    let last = number(page.get("last_row"));
    let rows = number(page.get("total_rows"));

    let mut line = if first == "0" {
        format!("  Page {current} of {total} (no rows on this page, {rows} total)")
    } else {
        format!("  Page {current} of {total} (rows {first}-{last} of {rows})")
    };

    let flag = |key: &str| page.get(key).and_then(Value::as_bool).unwrap_or(false);
    let mut hints = Vec::new();
    if flag("has_previous") {
        hints.push(format!("--page {}", page_number(page) - 1));
    }
    if flag("has_next") {
        hints.push(format!("--page {}", page_number(page) + 1));
    }
    if !hints.is_empty() {
        line.push_str(&format!("  [{}]", hints.join(" | ")));
    }
    line
}

pub(super) fn source_label(source: Option<&Value>) -> String {
    let Some(source) = source else {
        return "unknown".to_string();
    };
    let kind = source.get("kind").and_then(Value::as_str).unwrap_or("unknown");
    match source.get("reference").and_then(Value::as_str) {
        Some(reference) => format!("{kind} ({reference})"),
        None => kind.to_string(),
    }
}

fn filters_label(filters: Option<&Value>) -> String {
    let Some(filters) = filters else {
        return "none".to_string();
    };

    let mut parts = Vec::new();
    if let Some(search) = filters
        .get("search_term")
        .and_then(Value::as_str)
        .filter(|term| !term.is_empty())
    {
        parts.push(format!("search \"{search}\""));
    }
    for (key, label) in [("category", "category"), ("wallet", "wallet")] {
        if let Some(value) = filters
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
        {
            parts.push(format!("{label} = {value}"));
        }
    }

    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}

fn sort_label(sort: Option<&Value>) -> String {
    let key = sort.and_then(|sort| sort.get("key")).and_then(Value::as_str);
    let direction = sort
        .and_then(|sort| sort.get("direction"))
        .and_then(Value::as_str)
        .unwrap_or("none");
    match key {
        Some(key) if direction != "none" => format!("{key} {direction}"),
        _ => "original order".to_string(),
    }
}

fn page_number(page: &Value) -> u64 {
    page.get("page").and_then(Value::as_u64).unwrap_or(1)
}

fn number(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_u64)
        .map_or_else(|| "0".to_string(), |number| number.to_string())
}

fn text(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    value.and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()
    })
}
