use tracing::debug;

use crate::commands::common::{SourceOptions, load_config_and_source};
use crate::config::RaseedConfig;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::TransactionsData;
use crate::ingest::LoadedTransactions;
use crate::view::{
    SortConfig, SortDirection, SortKey, TransactionFilters, TransactionView, ViewObserver,
};
use crate::{ClientError, ClientResult};

/// Table controls applied in the order a user would: filters, explicit sort,
/// header clicks, then the page.
#[derive(Debug, Clone, Default)]
pub struct TableControls {
    pub search: Option<String>,
    pub category: Option<String>,
    pub wallet: Option<String>,
    pub sort: Option<SortKey>,
    pub direction: Option<SortDirection>,
    /// Header clicks replayed through the tri-state cycle.
    pub clicks: Vec<SortKey>,
    pub page: Option<usize>,
}

pub fn run(source: SourceOptions<'_>, controls: &TableControls) -> ClientResult<SuccessEnvelope> {
    let (config, loaded) = load_config_and_source(source)?;
    let data = build_transactions_data(&config, loaded, controls)?;
    success("transactions", data)
}

pub(crate) fn build_transactions_data(
    config: &RaseedConfig,
    loaded: LoadedTransactions,
    controls: &TableControls,
) -> ClientResult<TransactionsData> {
    validate_controls(controls)?;

    let mut view = TransactionView::new(&loaded.transactions, config.view_settings())
        .with_observer(TracingObserver);

    if let Some(search) = controls.search.as_deref() {
        view.set_search_term(search);
    }
    view.select_category(controls.category.as_deref());
    view.select_wallet(controls.wallet.as_deref());

    if let Some(key) = controls.sort {
        let direction = controls.direction.unwrap_or(SortDirection::Ascending);
        view.set_sort(SortConfig::new(key, direction));
    }
    for key in &controls.clicks {
        view.request_sort(*key);
    }
    view.submit_filters();

    if let Some(page) = controls.page {
        view.change_page(page);
    }

    let computed = view.compute();
    let state = view.state().clone();

    Ok(TransactionsData {
        source: loaded.source,
        filters: state.filters,
        sort: state.sort,
        page: computed.page,
        filtered_count: computed.filtered_count,
        rows: computed.rows,
        facets: computed.facets,
        currency_label: config.currency_label.clone(),
    })
}

fn validate_controls(controls: &TableControls) -> ClientResult<()> {
    if controls.direction.is_some() && controls.sort.is_none() {
        return Err(ClientError::invalid_argument_for_command(
            "--direction requires --sort <key>.",
            Some("transactions"),
        ));
    }
    if controls.page == Some(0) {
        return Err(ClientError::invalid_argument_for_command(
            "--page is 1-based and must be at least 1.",
            Some("transactions"),
        ));
    }
    Ok(())
}

struct TracingObserver;

impl ViewObserver for TracingObserver {
    fn filters_changed(&mut self, filters: &TransactionFilters) {
        debug!(
            search = %filters.search_term,
            category = ?filters.category,
            wallet = ?filters.wallet,
            "filters changed"
        );
    }

    fn page_changed(&mut self, page: usize) {
        debug!(page, "page changed");
    }
}

#[cfg(test)]
mod tests {
    use super::{TableControls, build_transactions_data};
    use crate::ClientResult;
    use crate::config::RaseedConfig;
    use crate::contracts::types::TransactionsData;
    use crate::ingest::load_transactions;
    use crate::view::{SortDirection, SortKey};

    fn sample_data(controls: &TableControls) -> ClientResult<TransactionsData> {
        let loaded = load_transactions(None, None)?;
        build_transactions_data(&RaseedConfig::default(), loaded, controls)
    }

    #[test]
    fn clicks_replay_the_tri_state_cycle() {
        let controls = TableControls {
            clicks: vec![SortKey::Amount, SortKey::Amount],
            ..TableControls::default()
        };
        let data = sample_data(&controls);
        assert!(data.is_ok());
        if let Ok(value) = data {
            assert_eq!(value.sort.direction, SortDirection::Descending);
            assert_eq!(value.rows[0].id, "2");
        }
    }

    #[test]
    fn direction_without_sort_is_rejected() {
        let controls = TableControls {
            direction: Some(SortDirection::Descending),
            ..TableControls::default()
        };
        let data = sample_data(&controls);
        assert!(data.is_err());
    }

    #[test]
    fn page_zero_is_rejected() {
        let controls = TableControls {
            page: Some(0),
            ..TableControls::default()
        };
        assert!(sample_data(&controls).is_err());
    }

    #[test]
    fn default_controls_show_first_page() {
        let data = sample_data(&TableControls::default());
        assert!(data.is_ok());
        if let Ok(value) = data {
            assert_eq!(value.rows.len(), 5);
            assert_eq!(value.page.total_pages, 2);
            assert_eq!(value.filtered_count, 7);
        }
    }
}
