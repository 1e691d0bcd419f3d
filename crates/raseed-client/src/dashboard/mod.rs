pub mod actions;
pub mod analytics;
pub mod expenses;
pub mod wallets;
