use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::facets::{Facets, derive_facets};
use super::filter::{TransactionFilters, apply_filters};
use super::page::{PageInfo, PagePolicy, change_page, paginate};
use super::sort::{apply_sort, request_sort};
use super::types::{SortConfig, SortKey, Transaction};

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ViewState {
    pub filters: TransactionFilters,
    pub sort: SortConfig,
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filters: TransactionFilters::default(),
            sort: SortConfig::default(),
            current_page: 1,
        }
    }
}

/// Table settings that outlive a single view.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub page_size: usize,
    pub page_policy: PagePolicy,
    /// When false, filter and sort changes leave `current_page` untouched.
    pub reset_page_on_change: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_policy: PagePolicy::default(),
            reset_page_on_change: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedView {
    pub rows: Vec<Transaction>,
    pub page: PageInfo,
    pub facets: Facets,
    pub filtered_count: usize,
}

/// Runs filter, sort and paginate for one state. Facets always come from the
/// unfiltered list so every option stays selectable.
pub fn compute_view(
    transactions: &[Transaction],
    state: &ViewState,
    page_size: usize,
) -> ComputedView {
    let filtered = apply_filters(transactions, &state.filters);
    let filtered_count = filtered.len();
    let sorted = apply_sort(filtered, state.sort);
    let (visible, page) = paginate(&sorted, state.current_page, page_size);

    debug!(
        total = transactions.len(),
        filtered = filtered_count,
        visible = visible.len(),
        page = page.page,
        "computed transaction view"
    );

    ComputedView {
        rows: visible.iter().map(|row| (*row).clone()).collect(),
        page,
        facets: derive_facets(transactions),
        filtered_count,
    }
}

/// Receives notifications when filters are submitted or the page changes.
pub trait ViewObserver {
    fn filters_changed(&mut self, _filters: &TransactionFilters) {}

    fn page_changed(&mut self, _page: usize) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ViewObserver for NoopObserver {}

/// Owns the view state for one rendering of the transaction table.
#[derive(Debug)]
pub struct TransactionView<'a, O = NoopObserver> {
    transactions: &'a [Transaction],
    state: ViewState,
    settings: ViewSettings,
    observer: O,
}

impl<'a> TransactionView<'a, NoopObserver> {
    pub fn new(transactions: &'a [Transaction], settings: ViewSettings) -> Self {
        Self {
            transactions,
            state: ViewState::default(),
            settings,
            observer: NoopObserver,
        }
    }
}

impl<'a, O: ViewObserver> TransactionView<'a, O> {
    pub fn with_observer<P: ViewObserver>(self, observer: P) -> TransactionView<'a, P> {
        TransactionView {
            transactions: self.transactions,
            state: self.state,
            settings: self.settings,
            observer,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn settings(&self) -> ViewSettings {
        self.settings
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn set_search_term(&mut self, search_term: &str) {
        self.state.filters.search_term = search_term.to_string();
        self.after_control_change();
    }

    pub fn select_category(&mut self, category: Option<&str>) {
        self.state.filters.category = category.map(str::to_string);
        self.after_control_change();
    }

    pub fn select_wallet(&mut self, wallet: Option<&str>) {
        self.state.filters.wallet = wallet.map(str::to_string);
        self.after_control_change();
    }

    /// One click on a column header.
    pub fn request_sort(&mut self, key: SortKey) -> SortConfig {
        self.state.sort = request_sort(self.state.sort, key);
        self.after_control_change();
        self.state.sort
    }

    pub fn set_sort(&mut self, sort: SortConfig) {
        self.state.sort = sort;
        self.after_control_change();
    }

    /// Publishes the current filters to the observer.
    pub fn submit_filters(&mut self) {
        self.observer.filters_changed(&self.state.filters);
    }

    pub fn change_page(&mut self, requested: usize) -> usize {
        let filtered_count = apply_filters(self.transactions, &self.state.filters).len();
        let effective = change_page(
            requested,
            filtered_count,
            self.settings.page_size,
            self.settings.page_policy,
        );
        if effective != requested {
            warn!(requested, effective, "requested page adjusted to page bounds");
        }

        self.state.current_page = effective;
        self.observer.page_changed(effective);
        effective
    }

    pub fn previous_page(&mut self) -> usize {
        if self.state.current_page > 1 {
            return self.change_page(self.state.current_page - 1);
        }
        self.state.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.change_page(self.state.current_page.saturating_add(1))
    }

    pub fn facets(&self) -> Facets {
        derive_facets(self.transactions)
    }

    pub fn compute(&self) -> ComputedView {
        compute_view(self.transactions, &self.state, self.settings.page_size)
    }

    fn after_control_change(&mut self) {
        if self.settings.reset_page_on_change {
            self.state.current_page = 1;
        }
    }
}
