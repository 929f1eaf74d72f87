//! HTTP client module with retry logic and error handling.

mod client;
mod retry;

pub use client::HttpClient;
pub use retry::{FetchError, MAX_RETRIES, REQUEST_TIMEOUT_MS, RETRY_DELAY_MS, with_retry};
