pub mod analytics;
pub mod categories;
pub mod common;
pub mod dash;
pub mod facets;
pub mod transactions;
pub mod wallets;
