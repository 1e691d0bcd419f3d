use std::io;

use serde_json::Value;

use super::format::{
    Column, format_money, format_percent, key_value_rows, render_table_or_blocks, terminal_width,
};
use super::transactions_text::{render_transactions_with_width, source_label};

const BAR_WIDTH: usize = 24;

pub fn render_wallets(data: &Value) -> io::Result<String> {
    let overview = data
        .get("overview")
        .ok_or_else(|| io::Error::other("wallets output requires overview"))?;
    let mut lines = vec!["Wallets".to_string(), String::new()];
    lines.extend(wallet_overview_lines(overview, terminal_width())?);
    lines.push(String::new());
    lines.push("Run `raseed wallets --wallet <id>` for recent activity.".to_string());
    Ok(lines.join("\n"))
}

pub fn render_wallet_detail(data: &Value) -> io::Result<String> {
    let wallet = data
        .get("wallet")
        .ok_or_else(|| io::Error::other("wallet detail output requires wallet"))?;
    let currency = str_field(wallet, "currency");

    let mut lines = vec![
        format!("{} ({})", str_field(wallet, "name"), str_field(wallet, "id")),
        String::new(),
    ];
    lines.extend(key_value_rows(
        &[
            ("Balance:", format_money(f64_field(wallet, "balance"), currency)),
            ("Trend:", trend_label(wallet)),
        ],
        2,
    ));
    lines.push(String::new());
    lines.push("Recent activity:".to_string());

    let recent = wallet
        .get("recent")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if recent.is_empty() {
        lines.push("  No recent activity.".to_string());
    } else {
        let rows = recent
            .iter()
            .map(|activity| {
                vec![
                    str_field(activity, "date").to_string(),
                    str_field(activity, "description").to_string(),
                    str_field(activity, "kind").to_string(),
                    format_money(f64_field(activity, "amount"), currency),
                ]
            })
            .collect::<Vec<_>>();
        lines.extend(render_table_or_blocks(
            &[
                Column::left("Date"),
                Column::left("Description"),
                Column::left("Kind"),
                Column::right("Amount"),
            ],
            &rows,
            terminal_width(),
            "Activity",
        ));
    }
    Ok(lines.join("\n"))
}

pub fn render_categories(data: &Value) -> io::Result<String> {
    let breakdown = data
        .get("breakdown")
        .ok_or_else(|| io::Error::other("categories output requires breakdown"))?;
    let currency = str_field(data, "currency_label");

    let mut lines = vec!["Expense categories".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[("Source:", source_label(data.get("source")))],
        2,
    ));
    lines.push(String::new());
    lines.extend(breakdown_lines(breakdown, currency, terminal_width()));
    Ok(lines.join("\n"))
}

pub fn render_analytics(data: &Value) -> io::Result<String> {
    let analytics = data
        .get("analytics")
        .ok_or_else(|| io::Error::other("analytics output requires analytics"))?;
    let currency = str_field(data, "currency_label");

    let mut lines = vec![format!(
        "Spending analytics ({})",
        str_field(analytics, "period")
    )];
    if let Some(category) = analytics.get("category").and_then(Value::as_str) {
        lines.push(format!("Category: {category}"));
    }
    lines.push(String::new());
    lines.extend(analytics_lines(analytics, currency)?);
    Ok(lines.join("\n"))
}

pub fn render_dash(data: &Value) -> io::Result<String> {
    let width = terminal_width();
    let currency = str_field(data, "currency_label");
    let section = |name: &str| {
        data.get(name)
            .ok_or_else(|| io::Error::other(format!("dash output requires {name}")))
    };

    let mut lines = vec!["Raseed dashboard".to_string(), String::new()];

    lines.push("Quick actions:".to_string());
    let actions = section("quick_actions")?
        .as_array()
        .cloned()
        .unwrap_or_default();
    lines.push(format!(
        "  {}",
        actions
            .iter()
            .map(|action| format!("[{}]", str_field(action, "label")))
            .collect::<Vec<_>>()
            .join("  ")
    ));
    lines.push(String::new());

    lines.push("Wallets:".to_string());
    lines.extend(wallet_overview_lines(section("wallets")?, width)?);
    lines.push(String::new());

    lines.push("Expenses:".to_string());
    lines.extend(breakdown_lines(section("expenses")?, currency, width));
    lines.push(String::new());

    lines.push("Spending:".to_string());
    lines.extend(analytics_lines(section("spending")?, currency)?);
    lines.push(String::new());

    lines.push(render_transactions_with_width(section("transactions")?, width)?);
    Ok(lines.join("\n"))
}

fn wallet_overview_lines(overview: &Value, width: usize) -> io::Result<Vec<String>> {
    let wallets = overview
        .get("wallets")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("wallet overview requires wallets"))?;
    let total_currency = overview
        .get("currency")
        .and_then(Value::as_str)
        .unwrap_or("");

    let rows = wallets
        .iter()
        .map(|wallet| {
            vec![
                str_field(wallet, "id").to_string(),
                str_field(wallet, "name").to_string(),
                format_money(f64_field(wallet, "balance"), str_field(wallet, "currency")),
                trend_label(wallet),
            ]
        })
        .collect::<Vec<_>>();

    let mut lines = render_table_or_blocks(
        &[
            Column::left("Id"),
            Column::left("Name"),
            Column::right("Balance"),
            Column::left("Trend"),
        ],
        &rows,
        width,
        "Wallet",
    );
    lines.push(String::new());
    lines.push(format!(
        "  Total balance: {}",
        format_money(f64_field(overview, "total_balance"), total_currency).trim_end()
    ));
    Ok(lines)
}

fn breakdown_lines(breakdown: &Value, currency: &str, width: usize) -> Vec<String> {
    let rows = breakdown
        .get("rows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if rows.is_empty() {
        return vec!["  No expenses in this source.".to_string()];
    }

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                str_field(row, "name").to_string(),
                format_money(f64_field(row, "value"), currency),
                format_percent(f64_field(row, "percent")),
                str_field(row, "color").to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let mut lines = render_table_or_blocks(
        &[
            Column::left("Category"),
            Column::right("Spent"),
            Column::right("Share"),
            Column::left("Color"),
        ],
        &table_rows,
        width,
        "Category",
    );
    lines.push(String::new());
    lines.push(format!(
        "  Total expenses: {}",
        format_money(f64_field(breakdown, "total"), currency)
    ));
    lines
}

fn analytics_lines(analytics: &Value, currency: &str) -> io::Result<Vec<String>> {
    let buckets = analytics
        .get("buckets")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("analytics output requires buckets"))?;
    let max_value = f64_field(analytics, "max_value");
    let current_label = str_field(analytics, "current_label");
    let previous_label = str_field(analytics, "previous_label");
    let label_width = buckets
        .iter()
        .map(|bucket| str_field(bucket, "label").chars().count())
        .max()
        .unwrap_or(0);

    let bar_width = BAR_WIDTH;
    let mut lines = Vec::new();
    for bucket in buckets {
        let label = str_field(bucket, "label");
        for (series, key) in [(current_label, "current"), (previous_label, "previous")] {
            let value = f64_field(bucket, key);
            lines.push(format!(
                "  {label:<label_width$}  {series:<4}  {:<bar_width$}  {}",
                bar(value, max_value),
                format_money(value, currency)
            ));
        }
    }

    let change = analytics
        .get("change_percent")
        .and_then(Value::as_f64)
        .map_or_else(|| "n/a".to_string(), |percent| format!("{:+.1}%", percent));
    lines.push(String::new());
    lines.extend(key_value_rows(
        &[
            (
                "Current total:",
                format!(
                    "{} ({current_label})",
                    format_money(f64_field(analytics, "current_total"), currency)
                ),
            ),
            (
                "Previous total:",
                format!(
                    "{} ({previous_label})",
                    format_money(f64_field(analytics, "previous_total"), currency)
                ),
            ),
            ("Change:", change),
        ],
        2,
    ));
    Ok(lines)
}

fn bar(value: f64, max_value: f64) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max_value) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.clamp(1, BAR_WIDTH))
}

fn trend_label(wallet: &Value) -> String {
    let arrow = match str_field(wallet, "trend") {
        "up" => "▲",
        "down" => "▼",
        _ => "•",
    };
    format!("{arrow} {}", format_percent(f64_field(wallet, "percent_change")))
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

fn f64_field(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}
