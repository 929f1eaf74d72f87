//! HTTP client with built-in retry logic.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::retry::{FetchError, with_retry};

/// HTTP client with built-in retry logic for network operations.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    /// A non-success status and a transport failure are both retried;
    /// a success response with an unusable body is not.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        with_retry("GET JSON", || async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .context("Failed to send request")?;

            let response = response
                .error_for_status()
                .context("Request rejected by server")?;

            let payload = response
                .json::<T>()
                .await
                .map_err(|e| anyhow::Error::from(FetchError::MalformedResponse(e.to_string())))?;

            Ok(payload)
        })
        .await
    }
}
