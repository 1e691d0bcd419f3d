mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use raseed_client::ClientError;
use stdout_io::write_stdout_text;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RASEED_LOG";

const ROOT_HELP: &str = "Raseed - household finance dashboard

Usage:
  raseed <command>

Start here:
  raseed dash
  raseed transactions --help
";

const TOP_LEVEL_HELP: &str = "Raseed - household finance dashboard

USAGE: raseed <command>

Browse transactions:
  raseed transactions                                     Show the first page of recent transactions
  raseed transactions --search بقالة                      Search descriptions (case-insensitive)
  raseed transactions --category طعام --wallet الرئيسية   Keep one category and wallet
  raseed transactions --click amount --click amount       Replay header clicks (amount, descending)
  raseed transactions --page 2                            Jump to a page
  raseed facets                                           List category and wallet options

Dashboard panels:
  raseed wallets                                          Wallet balances and trends
  raseed wallets --wallet wallet-1                        One wallet with recent activity
  raseed categories                                       Expense breakdown by category
  raseed analytics --period quarter                       This year against last year
  raseed dash                                             Everything on one screen

Use your own data:
  raseed transactions --file rows.json                    Read a JSON array or CSV file
  cat rows.csv | raseed transactions --file -             Read stdin
  Set \"source\" in $RASEED_HOME/config.json to make it the default.

Every command accepts --json. Set RASEED_LOG=debug to trace the view pipeline on stderr.
Run `raseed <command> --help` for command usage.
";

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let text = if err.kind() != ErrorKind::DisplayVersion
                    && is_top_level_help_request(&raw_args)
                {
                    TOP_LEVEL_HELP.to_string()
                } else {
                    err.to_string()
                };
                if write_stdout_text(&text).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint);
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            debug!(command = %success.command, "command succeeded");
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            debug!(code = %error.code, "command failed");
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing Usage line and "For more information" hint.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Finds the subcommand named in raw args, for "--help" hints.
fn command_path_from_args(raw_args: &[String]) -> Option<&'static str> {
    raw_args
        .iter()
        .skip(1)
        .find(|value| !value.starts_with('-'))
        .and_then(|value| match value.as_str() {
            "transactions" => Some("transactions"),
            "facets" => Some("facets"),
            "wallets" => Some("wallets"),
            "categories" => Some("categories"),
            "analytics" => Some("analytics"),
            "dash" => Some("dash"),
            _ => None,
        })
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if error.is_internal() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

#[cfg(test)]
mod tests {
    use super::{command_path_from_args, is_top_level_help_request, strip_clap_boilerplate};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn strips_usage_and_more_information_lines() {
        let message = "error: invalid value 'x' for '--page <PAGE>'\n\nUsage: raseed transactions\n\nFor more information, try '--help'.\n";
        assert_eq!(
            strip_clap_boilerplate(message),
            "error: invalid value 'x' for '--page <PAGE>'"
        );

        let short = "error: unexpected argument\nFor more information, try '--help'.";
        assert_eq!(strip_clap_boilerplate(short), "error: unexpected argument");
    }

    #[test]
    fn command_hint_skips_flags() {
        assert_eq!(
            command_path_from_args(&args(&["raseed", "--json", "transactions", "--page", "x"])),
            Some("transactions")
        );
        assert_eq!(command_path_from_args(&args(&["raseed", "unknown"])), None);
    }

    #[test]
    fn top_level_help_only_for_bare_flag() {
        assert!(is_top_level_help_request(&args(&["raseed", "--help"])));
        assert!(is_top_level_help_request(&args(&["raseed", "-h"])));
        assert!(!is_top_level_help_request(&args(&["raseed", "dash", "--help"])));
    }
}
