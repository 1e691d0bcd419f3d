use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{WalletDetailData, WalletsData};
use crate::dashboard::wallets::{find_wallet, summarize_wallet, wallet_overview};
use crate::fixtures::{SAMPLE_SOURCE, sample_wallets};

pub fn run(wallet_id: Option<&str>) -> ClientResult<SuccessEnvelope> {
    let wallets = sample_wallets();

    if let Some(id) = wallet_id {
        let wallet = find_wallet(&wallets, id)?;
        return success(
            "wallets.detail",
            WalletDetailData {
                source: SAMPLE_SOURCE.to_string(),
                wallet: summarize_wallet(wallet),
            },
        );
    }

    success(
        "wallets",
        WalletsData {
            source: SAMPLE_SOURCE.to_string(),
            overview: wallet_overview(&wallets),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn overview_lists_all_sample_wallets() {
        let result = run(None);
        assert!(result.is_ok());
        if let Ok(success) = result {
            assert_eq!(success.command, "wallets");
            assert_eq!(success.data["overview"]["total_balance"], 24450.0);
            assert_eq!(
                success.data["overview"]["wallets"]
                    .as_array()
                    .map(Vec::len),
                Some(3)
            );
        }
    }

    #[test]
    fn detail_returns_one_wallet() {
        let result = run(Some("wallet-3"));
        assert!(result.is_ok());
        if let Ok(success) = result {
            assert_eq!(success.command, "wallets.detail");
            assert_eq!(success.data["wallet"]["trend"], "down");
        }
    }

    #[test]
    fn unknown_wallet_fails() {
        let result = run(Some("wallet-42"));
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "wallet_not_found");
        }
    }
}
