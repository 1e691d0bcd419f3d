pub mod commands;
pub mod config;
pub mod contracts;
pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod ingest;
pub mod view;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
