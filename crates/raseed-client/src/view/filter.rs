//! Search, category and wallet predicates for the transaction table.

use serde::Serialize;

use super::types::Transaction;

/// Active table filters. Empty strings and `None` both mean "match all".
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct TransactionFilters {
    pub search_term: String,
    pub category: Option<String>,
    pub wallet: Option<String>,
}

impl TransactionFilters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search_term: &str) -> Self {
        self.search_term = search_term.to_string();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    #[must_use]
    pub fn with_wallet(mut self, wallet: &str) -> Self {
        self.wallet = Some(wallet.to_string());
        self
    }

    /// Returns true when no predicate narrows the list.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && selected(self.category.as_deref()).is_none()
            && selected(self.wallet.as_deref()).is_none()
    }

    fn matches_with_needle(&self, transaction: &Transaction, needle: &str) -> bool {
        let matches_search =
            needle.is_empty() || transaction.description.to_lowercase().contains(needle);

        let matches_category = match selected(self.category.as_deref()) {
            Some(category) => transaction.category == category,
            None => true,
        };

        let matches_wallet = match selected(self.wallet.as_deref()) {
            Some(wallet) => transaction.wallet == wallet,
            None => true,
        };

        matches_search && matches_category && matches_wallet
    }
}

/// Keeps every transaction satisfying all three predicates, in input order.
pub fn apply_filters<'a>(
    transactions: &'a [Transaction],
    filters: &TransactionFilters,
) -> Vec<&'a Transaction> {
    let needle = filters.search_term.to_lowercase();
    transactions
        .iter()
        .filter(|transaction| filters.matches_with_needle(transaction, &needle))
        .collect()
}

fn selected(value: Option<&str>) -> Option<&str> {
    value.filter(|inner| !inner.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{TransactionFilters, apply_filters};
    use crate::view::types::Transaction;

    fn row(id: &str, description: &str, category: &str, wallet: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: "2023-06-01".to_string(),
            description: description.to_string(),
            amount: -10.0,
            category: category.to_string(),
            wallet: wallet.to_string(),
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = vec![
            row("1", "Weekly GROCERIES", "food", "main"),
            row("2", "Fuel", "transport", "main"),
        ];
        let filtered = apply_filters(&rows, &TransactionFilters::new().with_search("groc"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn category_and_wallet_match_exactly() {
        let rows = vec![
            row("1", "a", "Food", "main"),
            row("2", "b", "food", "main"),
            row("3", "c", "food", "second"),
        ];
        let filters = TransactionFilters::new()
            .with_category("food")
            .with_wallet("main");
        let filtered = apply_filters(&rows, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn empty_selections_are_wildcards() {
        let rows = vec![row("1", "a", "x", "y"), row("2", "b", "z", "w")];
        let filters = TransactionFilters::new().with_category("").with_wallet("");
        assert!(filters.is_empty());
        assert_eq!(apply_filters(&rows, &filters).len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let filtered = apply_filters(&[], &TransactionFilters::new().with_search("x"));
        assert!(filtered.is_empty());
    }
}
