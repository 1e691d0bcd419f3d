//! Bundled sample data used when no transaction source is configured.

use crate::dashboard::analytics::SpendingSeries;
use crate::dashboard::wallets::{ActivityKind, Trend, WalletAccount, WalletActivity};
use crate::view::Transaction;

pub const SAMPLE_SOURCE: &str = "sample-snapshot";

const SAMPLE_TRANSACTIONS: [(&str, &str, &str, f64, &str, &str); 7] = [
    ("1", "2023-06-01", "البقالة الأسبوعية", -250.0, "طعام", "الرئيسية"),
    ("2", "2023-06-02", "راتب الشهر", 5000.0, "دخل", "الرئيسية"),
    ("3", "2023-06-03", "فاتورة الكهرباء", -150.0, "مرافق", "الرئيسية"),
    ("4", "2023-06-04", "وقود السيارة", -200.0, "نقل", "الثانوية"),
    ("5", "2023-06-05", "مشتريات البقالة", -180.0, "طعام", "الرئيسية"),
    ("6", "2023-06-06", "اشتراك النادي الرياضي", -300.0, "صحة", "الثانوية"),
    ("7", "2023-06-07", "مكافأة العمل", 1000.0, "دخل", "الرئيسية"),
];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const CURRENT_YEAR_SPEND: [f64; 12] = [
    1200.0, 1400.0, 1100.0, 1300.0, 1500.0, 1700.0, 1600.0, 1800.0, 1900.0, 2000.0, 1800.0,
    1700.0,
];

const PREVIOUS_YEAR_SPEND: [f64; 12] = [
    1000.0, 1200.0, 900.0, 1100.0, 1300.0, 1500.0, 1400.0, 1600.0, 1700.0, 1800.0, 1600.0,
    1500.0,
];

pub fn sample_transactions() -> Vec<Transaction> {
    SAMPLE_TRANSACTIONS
        .iter()
        .map(
            |(id, date, description, amount, category, wallet)| Transaction {
                id: id.to_string(),
                date: date.to_string(),
                description: description.to_string(),
                amount: *amount,
                category: category.to_string(),
                wallet: wallet.to_string(),
            },
        )
        .collect()
}

pub fn sample_wallets() -> Vec<WalletAccount> {
    vec![
        wallet(
            "wallet-1",
            "المحفظة الرئيسية",
            12500.0,
            Trend::Up,
            2.5,
            vec![
                activity("tx-1", "راتب الشهر", 5000.0, "2023-06-01"),
                activity("tx-2", "مشتريات البقالة", -350.0, "2023-06-03"),
            ],
        ),
        wallet(
            "wallet-2",
            "محفظة الادخار",
            8750.0,
            Trend::Up,
            5.2,
            vec![activity(
                "tx-3",
                "تحويل من المحفظة الرئيسية",
                1000.0,
                "2023-06-02",
            )],
        ),
        wallet(
            "wallet-3",
            "محفظة الطوارئ",
            3200.0,
            Trend::Down,
            1.8,
            vec![activity("tx-4", "إصلاح السيارة", -800.0, "2023-06-04")],
        ),
    ]
}

pub fn sample_spending_series() -> SpendingSeries {
    SpendingSeries {
        labels: MONTH_LABELS.iter().map(|label| label.to_string()).collect(),
        current_year: CURRENT_YEAR_SPEND.to_vec(),
        previous_year: PREVIOUS_YEAR_SPEND.to_vec(),
        current_label: "2023".to_string(),
        previous_label: "2022".to_string(),
    }
}

fn wallet(
    id: &str,
    name: &str,
    balance: f64,
    trend: Trend,
    percent_change: f64,
    recent_transactions: Vec<WalletActivity>,
) -> WalletAccount {
    WalletAccount {
        id: id.to_string(),
        name: name.to_string(),
        balance,
        currency: "ريال".to_string(),
        trend,
        percent_change,
        recent_transactions,
    }
}

fn activity(id: &str, description: &str, amount: f64, date: &str) -> WalletActivity {
    WalletActivity {
        id: id.to_string(),
        description: description.to_string(),
        amount,
        date: date.to_string(),
        kind: if amount < 0.0 {
            ActivityKind::Expense
        } else {
            ActivityKind::Income
        },
    }
}
