use serde::Serialize;

use crate::dashboard::actions::QuickAction;
use crate::dashboard::analytics::SpendingAnalytics;
use crate::dashboard::expenses::ExpenseBreakdown;
use crate::dashboard::wallets::{WalletOverview, WalletSummary};
use crate::view::{Facets, PageInfo, SortConfig, Transaction, TransactionFilters};

#[derive(Debug, Clone, Serialize)]
pub struct SourceIssue {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    pub expected: Option<String>,
    pub received: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub rows_read: i64,
    pub rows_valid: i64,
    pub rows_invalid: i64,
}

/// Where the listed transactions came from.
#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub kind: String,
    pub reference: Option<String>,
    pub rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionsData {
    pub source: SourceInfo,
    pub filters: TransactionFilters,
    pub sort: SortConfig,
    pub page: PageInfo,
    pub filtered_count: usize,
    pub rows: Vec<Transaction>,
    pub facets: Facets,
    pub currency_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetsData {
    pub source: SourceInfo,
    pub categories: Vec<String>,
    pub wallets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletsData {
    pub source: String,
    pub overview: WalletOverview,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletDetailData {
    pub source: String,
    pub wallet: WalletSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesData {
    pub source: SourceInfo,
    pub currency_label: String,
    pub breakdown: ExpenseBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsData {
    pub source: String,
    pub currency_label: String,
    pub analytics: SpendingAnalytics,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashData {
    pub source: SourceInfo,
    pub currency_label: String,
    pub wallets: WalletOverview,
    pub expenses: ExpenseBreakdown,
    pub spending: SpendingAnalytics,
    pub quick_actions: Vec<QuickAction>,
    pub transactions: TransactionsData,
}
