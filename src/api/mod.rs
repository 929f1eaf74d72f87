//! Client for the dataset marketplace API.

mod client;
mod types;

pub use client::{DEFAULT_API_URL, DatasetApi, PurchaseDataset};
pub use types::PurchaseReceipt;

#[cfg(test)]
pub use client::MockPurchaseDataset;
