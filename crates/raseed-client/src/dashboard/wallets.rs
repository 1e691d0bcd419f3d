use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult};

pub const RECENT_ACTIVITY_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletActivity {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub currency: String,
    pub trend: Trend,
    pub percent_change: f64,
    pub recent_transactions: Vec<WalletActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletSummary {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub currency: String,
    pub trend: Trend,
    pub percent_change: f64,
    pub recent: Vec<WalletActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletOverview {
    pub total_balance: f64,
    /// Shared currency label, `None` when wallets disagree.
    pub currency: Option<String>,
    pub wallets: Vec<WalletSummary>,
}

pub fn wallet_overview(wallets: &[WalletAccount]) -> WalletOverview {
    let total_balance = wallets.iter().map(|wallet| wallet.balance).sum::<f64>();
    let currency = match wallets.split_first() {
        Some((first, rest)) if rest.iter().all(|wallet| wallet.currency == first.currency) => {
            Some(first.currency.clone())
        }
        _ => None,
    };

    WalletOverview {
        total_balance,
        currency,
        wallets: wallets.iter().map(summarize_wallet).collect(),
    }
}

pub fn summarize_wallet(wallet: &WalletAccount) -> WalletSummary {
    WalletSummary {
        id: wallet.id.clone(),
        name: wallet.name.clone(),
        balance: wallet.balance,
        currency: wallet.currency.clone(),
        trend: wallet.trend,
        percent_change: wallet.percent_change,
        recent: wallet
            .recent_transactions
            .iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .cloned()
            .collect(),
    }
}

pub fn find_wallet<'a>(
    wallets: &'a [WalletAccount],
    wallet_id: &str,
) -> ClientResult<&'a WalletAccount> {
    wallets
        .iter()
        .find(|wallet| wallet.id == wallet_id)
        .ok_or_else(|| {
            ClientError::wallet_not_found(
                wallet_id,
                wallets.iter().map(|wallet| wallet.id.clone()).collect(),
            )
        })
}
