use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::api::DatasetApi;
use crate::http::{HttpClient, REQUEST_TIMEOUT_MS};
use crate::runtime::Runtime;

/// Environment variable holding the bearer credential for the purchase API.
pub const BEARER_TOKEN_VAR: &str = "BEARER_TOKEN";

/// Environment variable holding the marketplace API key.
/// Part of the deployment environment; the purchase request does not use it.
pub const API_KEY_VAR: &str = "API_KEY";

pub struct Config {
    pub api: DatasetApi,
    pub client: Client,
    pub api_key: Option<String>,
}

impl Config {
    pub fn new<R: Runtime>(runtime: &R, api_url: Option<String>) -> Result<Self> {
        // The original deployment sends "Bearer " with an empty secret rather
        // than failing, and lets the server reject it.
        let bearer_token = runtime.env_var(BEARER_TOKEN_VAR).unwrap_or_default();
        if bearer_token.is_empty() {
            debug!("{} is not set, sending an empty credential", BEARER_TOKEN_VAR);
        } else {
            debug!("Using {} for authentication", BEARER_TOKEN_VAR);
        }

        let api_key = runtime.env_var(API_KEY_VAR).ok();
        if api_key.is_some() {
            debug!("{} is set; the purchase request does not use it", API_KEY_VAR);
        }

        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", bearer_token))
            .context("Invalid bearer token")?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent("dpc-cli")
            .default_headers(headers)
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .build()?;

        let api = DatasetApi::new(HttpClient::new(client.clone()), api_url);

        Ok(Self {
            api,
            client,
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PurchaseDataset;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::env::VarError;

    fn runtime_with_token(token: Option<&'static str>) -> MockRuntime {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .with(eq(BEARER_TOKEN_VAR))
            .returning(move |_| token.map(str::to_string).ok_or(VarError::NotPresent));
        runtime
            .expect_env_var()
            .with(eq(API_KEY_VAR))
            .returning(|_| Err(VarError::NotPresent));
        runtime
    }

    #[tokio::test]
    async fn test_config_sends_bearer_token_from_environment() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer test_token")
            .match_header("content-type", "application/json")
            .create_async()
            .await;

        let runtime = runtime_with_token(Some("test_token"));
        let config = Config::new(&runtime, None).unwrap();
        let _ = config.client.get(server.url()).send().await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_config_sends_empty_credential_without_token() {
        let mut server = mockito::Server::new_async().await;

        // Header parsers may trim the trailing space of the empty credential
        let mock = server
            .mock("GET", "/")
            .match_header(
                "authorization",
                mockito::Matcher::Regex(r"^Bearer\s*$".to_string()),
            )
            .create_async()
            .await;

        let runtime = runtime_with_token(None);
        let config = Config::new(&runtime, None).unwrap();
        let _ = config.client.get(server.url()).send().await;

        mock.assert_async().await;
    }

    #[test]
    fn test_config_passes_api_url_through() {
        let runtime = runtime_with_token(Some("test_token"));
        let config = Config::new(&runtime, Some("https://qlog.ai".to_string())).unwrap();
        assert_eq!(config.api.api_url(), "https://qlog.ai");
        assert!(config.api_key.is_none());
    }
}
