use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::view::Transaction;

pub const CATEGORY_PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseShare {
    pub name: String,
    pub value: f64,
    pub color: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseBreakdown {
    pub total: f64,
    pub rows: Vec<ExpenseShare>,
}

/// Largest categories first; ties keep their input order.
pub fn expense_breakdown(categories: &[ExpenseCategory]) -> ExpenseBreakdown {
    let total = categories.iter().map(|category| category.value).sum::<f64>();

    let mut rows = categories
        .iter()
        .map(|category| ExpenseShare {
            name: category.name.clone(),
            value: category.value,
            color: category.color.clone(),
            percent: if total > 0.0 {
                category.value / total * 100.0
            } else {
                0.0
            },
        })
        .collect::<Vec<ExpenseShare>>();
    rows.sort_by(|left, right| right.value.total_cmp(&left.value));

    ExpenseBreakdown { total, rows }
}

/// Groups expenses by category in first-seen order, summing absolute amounts.
/// Income rows are ignored.
pub fn expense_categories_from_transactions(
    transactions: &[Transaction],
) -> Vec<ExpenseCategory> {
    let mut position_by_name: HashMap<&str, usize> = HashMap::new();
    let mut categories: Vec<ExpenseCategory> = Vec::new();

    for transaction in transactions.iter().filter(|row| row.is_expense()) {
        let amount = transaction.amount.abs();
        if let Some(index) = position_by_name.get(transaction.category.as_str()) {
            categories[*index].value += amount;
            continue;
        }

        let index = categories.len();
        position_by_name.insert(transaction.category.as_str(), index);
        categories.push(ExpenseCategory {
            name: transaction.category.clone(),
            value: amount,
            color: CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()].to_string(),
        });
    }

    categories
}
