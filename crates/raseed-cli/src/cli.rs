use clap::{Args, Parser, Subcommand};
use raseed_client::dashboard::analytics::SpendingPeriod;
use raseed_client::view::{SortDirection, SortKey};

pub fn parse_sort_key(value: &str) -> Result<SortKey, String> {
    SortKey::parse(value).ok_or_else(|| {
        let keys = SortKey::ALL
            .iter()
            .map(|key| key.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("sort key must be one of: {keys}")
    })
}

pub fn parse_sort_direction(value: &str) -> Result<SortDirection, String> {
    SortDirection::parse(value)
        .ok_or_else(|| "direction must be one of: asc, desc, none".to_string())
}

pub fn parse_period(value: &str) -> Result<SpendingPeriod, String> {
    SpendingPeriod::parse(value)
        .ok_or_else(|| "period must be one of: month, quarter, year".to_string())
}

pub fn parse_page(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err("page must be a whole number of at least 1".to_string()),
    }
}

/// Extended help shown after `raseed transactions --help`.
pub const TRANSACTIONS_AFTER_HELP: &str = "\
How the table works:
  Filters combine: a row is listed only when it matches the search text
  (case-insensitive, description only), the category and the wallet.
  Facets (category and wallet options) always come from the full list.

  --sort/--direction set the column order directly.
  --click replays header clicks in order. Clicking the same column cycles
  ascending, descending, unsorted; clicking a new column starts ascending.
  Example: --click amount --click amount   sorts by amount, descending.

  --page is 1-based. Pages past the end are clamped unless the config sets
  \"page_policy\": \"unbounded\".

Sources:
  Without --file, the configured `source` from config.json is used,
  or the bundled sample snapshot when none is configured.
  `--file -` reads stdin.

  JSON example (one top-level array):
  [
    {
      \"id\": \"1\",
      \"date\": \"2023-06-01\",
      \"description\": \"البقالة الأسبوعية\",
      \"amount\": -250,
      \"category\": \"طعام\",
      \"wallet\": \"الرئيسية\"
    }
  ]

  CSV example (header + rows):
  id,date,description,amount,category,wallet
  1,2023-06-01,البقالة الأسبوعية,-250,طعام,الرئيسية

Field rules:
  date (required):         exactly YYYY-MM-DD
  description (required):  non-empty text
  amount (required):       signed number, negative = money out
  category (required):     non-empty label
  wallet (required):       non-empty label
  id (optional):           unique; generated when omitted
";

#[derive(Debug, Parser)]
#[command(
    name = "raseed",
    version,
    about = "household finance dashboard for the terminal",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Transaction file (JSON array or CSV); use - for stdin
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List transactions with search, filters, sorting and paging
    #[command(after_help = TRANSACTIONS_AFTER_HELP)]
    Transactions {
        #[command(flatten)]
        source: SourceArgs,
        /// Case-insensitive text matched against descriptions
        #[arg(long)]
        search: Option<String>,
        /// Exact category to keep
        #[arg(long)]
        category: Option<String>,
        /// Exact wallet to keep
        #[arg(long)]
        wallet: Option<String>,
        /// Column to sort by: date, description, category, wallet, amount
        #[arg(long, value_parser = parse_sort_key)]
        sort: Option<SortKey>,
        /// Sort direction for --sort: asc, desc, none
        #[arg(long, value_parser = parse_sort_direction, requires = "sort")]
        direction: Option<SortDirection>,
        /// Replay a header click (repeatable)
        #[arg(long = "click", value_name = "KEY", value_parser = parse_sort_key)]
        clicks: Vec<SortKey>,
        /// 1-based page number
        #[arg(long, value_parser = parse_page)]
        page: Option<usize>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// List the category and wallet options in the source
    Facets {
        #[command(flatten)]
        source: SourceArgs,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Show wallet balances, or one wallet's recent activity
    Wallets {
        /// Wallet id, e.g. wallet-1
        #[arg(long)]
        wallet: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the expense breakdown by category
    Categories {
        #[command(flatten)]
        source: SourceArgs,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare spending against the previous year
    Analytics {
        /// Bucket size: month, quarter, year
        #[arg(long, value_parser = parse_period, default_value = "year")]
        period: SpendingPeriod,
        /// Category label to attach to the comparison ("all" for none)
        #[arg(long)]
        category: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the full dashboard
    Dash {
        #[command(flatten)]
        source: SourceArgs,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
