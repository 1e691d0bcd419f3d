use std::path::Path;

use crate::ClientResult;
use crate::config::{RaseedConfig, load_config};
use crate::ingest::{LoadedTransactions, load_transactions};

/// Where a command reads its transactions from.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceOptions<'a> {
    /// Explicit file path, or `-` for stdin. Overrides the configured source.
    pub file: Option<&'a str>,
    pub home_override: Option<&'a Path>,
    pub stdin_override: Option<&'a str>,
}

pub(crate) fn load_config_and_source(
    options: SourceOptions<'_>,
) -> ClientResult<(RaseedConfig, LoadedTransactions)> {
    let config = load_config(options.home_override)?;
    let configured = config
        .source
        .as_ref()
        .map(|path| path.display().to_string());
    let path = options.file.map(str::to_string).or(configured);
    let loaded = load_transactions(
        path.as_deref(),
        options.stdin_override.map(str::to_string),
    )?;
    Ok((config, loaded))
}
