//! Client-side engine behind the recent-transactions table.

pub mod engine;
pub mod facets;
pub mod filter;
pub mod page;
pub mod sort;
pub mod types;

pub use engine::{
    ComputedView, DEFAULT_PAGE_SIZE, NoopObserver, TransactionView, ViewObserver, ViewSettings,
    ViewState, compute_view,
};
pub use facets::{Facets, derive_facets};
pub use filter::{TransactionFilters, apply_filters};
pub use page::{PageInfo, PagePolicy, change_page, page_count, paginate};
pub use sort::{apply_sort, request_sort};
pub use types::{SortConfig, SortDirection, SortKey, Transaction};
