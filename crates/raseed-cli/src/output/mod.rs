mod dashboard_text;
mod error_text;
mod format;
mod json;
mod mode;
mod transactions_text;

use std::io;

use raseed_client::{ClientError, SuccessEnvelope};

use crate::stdout_io::write_stdout_line;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "transactions" => transactions_text::render_transactions(&success.data),
        "facets" => transactions_text::render_facets(&success.data),
        "wallets" => dashboard_text::render_wallets(&success.data),
        "wallets.detail" => dashboard_text::render_wallet_detail(&success.data),
        "categories" => dashboard_text::render_categories(&success.data),
        "analytics" => dashboard_text::render_analytics(&success.data),
        "dash" => dashboard_text::render_dash(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
