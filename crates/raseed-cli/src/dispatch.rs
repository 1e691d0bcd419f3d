use raseed_client::commands;
use raseed_client::commands::common::SourceOptions;
use raseed_client::commands::transactions::TableControls;
use raseed_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, SourceArgs};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Transactions {
            source,
            search,
            category,
            wallet,
            sort,
            direction,
            clicks,
            page,
            json: _,
        } => {
            let controls = TableControls {
                search: search.clone(),
                category: category.clone(),
                wallet: wallet.clone(),
                sort: *sort,
                direction: *direction,
                clicks: clicks.clone(),
                page: *page,
            };
            commands::transactions::run(source_options(source), &controls)
        }
        Commands::Facets { source, .. } => commands::facets::run(source_options(source)),
        Commands::Wallets { wallet, .. } => commands::wallets::run(wallet.as_deref()),
        Commands::Categories { source, .. } => commands::categories::run(source_options(source)),
        Commands::Analytics {
            period, category, ..
        } => commands::analytics::run(*period, category.as_deref()),
        Commands::Dash { source, .. } => commands::dash::run(source_options(source)),
    }
}

fn source_options(source: &SourceArgs) -> SourceOptions<'_> {
    SourceOptions {
        file: source.file.as_deref(),
        ..SourceOptions::default()
    }
}
