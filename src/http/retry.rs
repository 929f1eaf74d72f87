//! Bounded retry logic for the purchase request.

use anyhow::Result;
use log::{debug, warn};

/// Maximum number of retry attempts after the initial request.
/// The purchase endpoint is called at most `MAX_RETRIES + 1` times.
pub const MAX_RETRIES: usize = 4;

/// Fixed delay between attempts in milliseconds.
pub const RETRY_DELAY_MS: u64 = 1000;

/// Timeout for a single attempt in milliseconds.
pub const REQUEST_TIMEOUT_MS: u64 = 9000;

/// Terminal fetch errors. Everything else (bad status, timeout, connection
/// failure) is retried until the attempt budget runs out.
#[derive(Debug)]
pub enum FetchError {
    /// The server answered with a success status but the body was unusable.
    /// Never retried; the transport did its job.
    MalformedResponse(String),
    /// Every attempt failed. Carries the last attempt's error.
    RetriesExhausted { attempts: usize, last_error: String },
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::MalformedResponse(msg) => {
                write!(f, "Malformed response: {}", msg)
            }
            FetchError::RetriesExhausted {
                attempts,
                last_error,
            } => {
                write!(f, "Failed after {} attempts: {}", attempts, last_error)
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Checks if an anyhow::Error is retryable based on its content.
fn is_retryable_error(e: &anyhow::Error) -> bool {
    // Typed fetch errors are terminal; everything else gets another attempt.
    e.downcast_ref::<FetchError>().is_none()
}

/// Executes an async operation with retry logic.
/// Attempts run strictly sequentially with a fixed delay between them.
pub async fn with_retry<F, Fut, T>(operation_name: &str, operation: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut last_error = None;

    for attempt in 0..=MAX_RETRIES {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                if !is_retryable_error(&e) {
                    debug!("{}: terminal error: {}", operation_name, e);
                    return Err(e);
                }

                if attempt < MAX_RETRIES {
                    warn!(
                        "{}: attempt {}/{} failed ({}), retrying in {}ms...",
                        operation_name,
                        attempt + 1,
                        MAX_RETRIES + 1,
                        e,
                        RETRY_DELAY_MS
                    );
                    tokio::time::sleep(std::time::Duration::from_millis(RETRY_DELAY_MS)).await;
                }
                last_error = Some(e);
            }
        }
    }

    Err(FetchError::RetriesExhausted {
        attempts: MAX_RETRIES + 1,
        last_error: last_error
            .map(|e| format!("{:#}", e))
            .unwrap_or_else(|| "unknown error".to_string()),
    }
    .into())
}
