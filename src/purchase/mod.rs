//! The purchase operation: validate the addresses, call the marketplace API,
//! emit the returned content identifier.

use anyhow::Result;
use log::info;

use crate::api::PurchaseDataset;
use crate::runtime::Runtime;

pub mod config;

use config::Config;

/// A required address argument was absent. Raised before any network call.
#[derive(Debug, PartialEq, Eq)]
pub struct MissingArgument(pub &'static str);

impl std::fmt::Display for MissingArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is required", self.0)
    }
}

impl std::error::Error for MissingArgument {}

/// Purchases a dataset and emits the returned content identifier.
#[tracing::instrument(skip(runtime, api_url))]
pub async fn purchase<R: Runtime>(
    runtime: R,
    dataset_address: &str,
    wallet_address: &str,
    api_url: Option<String>,
) -> Result<String> {
    let config = Config::new(&runtime, api_url)?;
    run(&runtime, &config.api, dataset_address, wallet_address).await
}

#[tracing::instrument(skip(runtime, api))]
pub async fn run<R: Runtime, A: PurchaseDataset>(
    runtime: &R,
    api: &A,
    dataset_address: &str,
    wallet_address: &str,
) -> Result<String> {
    if dataset_address.is_empty() {
        return Err(MissingArgument("Dataset address").into());
    }
    if wallet_address.is_empty() {
        return Err(MissingArgument("Purchaser wallet address").into());
    }

    info!(
        "Purchasing dataset {} for wallet {} via {}...",
        dataset_address,
        wallet_address,
        api.api_url()
    );

    let receipt = api
        .purchase_dataset(wallet_address, dataset_address)
        .await?;

    info!("Purchase complete, cid is {}", receipt.cid);

    runtime.write_output(&receipt.cid)?;

    Ok(receipt.cid)
}
