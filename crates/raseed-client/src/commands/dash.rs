use crate::ClientResult;
use crate::commands::common::{SourceOptions, load_config_and_source};
use crate::commands::transactions::{TableControls, build_transactions_data};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::DashData;
use crate::dashboard::actions::quick_actions;
use crate::dashboard::analytics::{SpendingPeriod, spending_analytics};
use crate::dashboard::expenses::{expense_breakdown, expense_categories_from_transactions};
use crate::dashboard::wallets::wallet_overview;
use crate::fixtures::{sample_spending_series, sample_wallets};

pub fn run(source: SourceOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let (config, loaded) = load_config_and_source(source)?;

    let expenses = expense_breakdown(&expense_categories_from_transactions(&loaded.transactions));
    let spending = spending_analytics(&sample_spending_series(), SpendingPeriod::Year, None)?;
    let source_info = loaded.source.clone();
    let transactions = build_transactions_data(&config, loaded, &TableControls::default())?;

    success(
        "dash",
        DashData {
            source: source_info,
            currency_label: config.currency_label.clone(),
            wallets: wallet_overview(&sample_wallets()),
            expenses,
            spending,
            quick_actions: quick_actions(),
            transactions,
        },
    )
}
