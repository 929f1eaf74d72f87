use anyhow::Result;
use clap::Parser;
use dpc::purchase::purchase;
use dpc::runtime::RealRuntime;
use log::error;

/// dpc - Dataset Purchase Client
///
/// Purchase a dataset from the marketplace API and print the returned
/// content identifier (CID) on stdout.
///
/// The BEARER_TOKEN environment variable is sent as the Authorization
/// credential for the request. A failed purchase is logged and produces no
/// output; the process still exits successfully.
///
/// Examples:
///   dpc 0x123i213 0xF4E20531CD11Fb8b70896AA9710FeDbEb9be87c3
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Address of the dataset to purchase
    #[arg(value_name = "DATASET_ADDRESS")]
    pub dataset_address: String,

    /// Wallet address of the purchaser
    #[arg(value_name = "WALLET_ADDRESS")]
    pub wallet_address: String,

    /// Purchase API URL (defaults to http://localhost:5173)
    #[arg(long = "api-url", env = "DPC_API_URL", value_name = "URL")]
    pub api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    // Soft failure: log and exit clean; no output is the failure signal.
    if let Err(e) = purchase(
        runtime,
        &cli.dataset_address,
        &cli.wallet_address,
        cli.api_url,
    )
    .await
    {
        error!("{:#}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_positional_parsing() {
        let cli = Cli::try_parse_from(["dpc", "0xDataset", "0xWallet"]).unwrap();
        assert_eq!(cli.dataset_address, "0xDataset");
        assert_eq!(cli.wallet_address, "0xWallet");
        assert_eq!(cli.api_url, None);
    }

    #[test]
    fn test_cli_api_url_parsing() {
        let cli = Cli::try_parse_from([
            "dpc",
            "0xDataset",
            "0xWallet",
            "--api-url",
            "https://qlog.ai",
        ])
        .unwrap();
        assert_eq!(cli.api_url, Some("https://qlog.ai".to_string()));
    }

    #[test]
    fn test_cli_empty_addresses_parse() {
        // Empty strings pass the parser; the purchase operation rejects them
        let cli = Cli::try_parse_from(["dpc", "", "0xWallet"]).unwrap();
        assert_eq!(cli.dataset_address, "");
    }

    #[test]
    fn test_cli_missing_arguments_fail() {
        let result = Cli::try_parse_from(["dpc", "0xDataset"]);
        assert!(result.is_err());
    }
}
