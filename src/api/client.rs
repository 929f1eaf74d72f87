use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use super::types::PurchaseReceipt;
use crate::http::HttpClient;

/// Marketplace API used when no override is given.
pub const DEFAULT_API_URL: &str = "http://localhost:5173";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PurchaseDataset: Send + Sync {
    /// Purchases `dataset_address` on behalf of `wallet_address`.
    async fn purchase_dataset(
        &self,
        wallet_address: &str,
        dataset_address: &str,
    ) -> Result<PurchaseReceipt>;
    fn api_url(&self) -> &str;
}

pub struct DatasetApi {
    pub http: HttpClient,
    pub api_url: String,
}

impl DatasetApi {
    #[tracing::instrument(skip(http, api_url))]
    pub fn new(http: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { http, api_url }
    }
}

#[async_trait]
impl PurchaseDataset for DatasetApi {
    #[tracing::instrument(skip(self))]
    async fn purchase_dataset(
        &self,
        wallet_address: &str,
        dataset_address: &str,
    ) -> Result<PurchaseReceipt> {
        // Path segments: purchaser wallet first, then the dataset
        let url = format!(
            "{}/api/purchase-dataset/{}/{}",
            self.api_url, wallet_address, dataset_address
        );

        debug!("Purchasing dataset from {}...", url);

        self.http.get_json(&url).await
    }

    #[tracing::instrument(skip(self))]
    fn api_url(&self) -> &str {
        &self.api_url
    }
}
