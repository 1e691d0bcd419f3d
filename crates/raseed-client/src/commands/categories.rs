use crate::ClientResult;
use crate::commands::common::{SourceOptions, load_config_and_source};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::CategoriesData;
use crate::dashboard::expenses::{expense_breakdown, expense_categories_from_transactions};

pub fn run(source: SourceOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let (config, loaded) = load_config_and_source(source)?;
    let categories = expense_categories_from_transactions(&loaded.transactions);

    success(
        "categories",
        CategoriesData {
            source: loaded.source,
            currency_label: config.currency_label,
            breakdown: expense_breakdown(&categories),
        },
    )
}
