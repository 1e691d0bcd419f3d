use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Transactions { json, .. }
        | Commands::Facets { json, .. }
        | Commands::Wallets { json, .. }
        | Commands::Categories { json, .. }
        | Commands::Analytics { json, .. }
        | Commands::Dash { json, .. } => *json,
    };
    if json {
        OutputMode::Json
    } else {
        OutputMode::Text
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn every_command_honours_json_flag() {
        let commands: [&[&str]; 6] = [
            &["raseed", "transactions", "--json"],
            &["raseed", "facets", "--json"],
            &["raseed", "wallets", "--json"],
            &["raseed", "categories", "--json"],
            &["raseed", "analytics", "--json"],
            &["raseed", "dash", "--json"],
        ];
        for args in commands {
            let parsed = parse_from(args);
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
            }
        }
    }

    #[test]
    fn mode_uses_text_without_json_flag() {
        let parsed = parse_from(["raseed", "transactions", "--page", "2"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }
    }
}
