use std::collections::HashSet;

use serde::Serialize;

use super::types::Transaction;

/// Distinct selector options, in first-seen order, across the full list.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub wallets: Vec<String>,
}

pub fn derive_facets(transactions: &[Transaction]) -> Facets {
    Facets {
        categories: distinct_in_order(transactions.iter().map(|row| row.category.as_str())),
        wallets: distinct_in_order(transactions.iter().map(|row| row.wallet.as_str())),
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::derive_facets;
    use crate::view::types::Transaction;

    fn row(category: &str, wallet: &str) -> Transaction {
        Transaction {
            id: format!("{category}-{wallet}"),
            date: "2023-06-01".to_string(),
            description: "x".to_string(),
            amount: 1.0,
            category: category.to_string(),
            wallet: wallet.to_string(),
        }
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let rows = vec![
            row("طعام", "الرئيسية"),
            row("دخل", "الرئيسية"),
            row("طعام", "الثانوية"),
            row("مرافق", "الرئيسية"),
        ];
        let facets = derive_facets(&rows);
        assert_eq!(facets.categories, vec!["طعام", "دخل", "مرافق"]);
        assert_eq!(facets.wallets, vec!["الرئيسية", "الثانوية"]);
    }

    #[test]
    fn empty_list_has_no_facets() {
        let facets = derive_facets(&[]);
        assert!(facets.categories.is_empty());
        assert!(facets.wallets.is_empty());
    }
}
