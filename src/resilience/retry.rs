use std::future::Future;

use tracing::warn;

use crate::error::ApiError;

/// Run `operation`; if it fails with [`ApiError::ExpiredToken`], run it
/// exactly once more and return that outcome verbatim. Every other
/// error propagates immediately.
///
/// The server signals expiry inside a normal-looking error body, not
/// via a dedicated status code, so the caller's operation must bundle
/// token issuance with the business call: the second run starts from a
/// fresh token. A second expiry rejection is fatal — never loop.
pub async fn retry_once_on_expired<F, Fut, T>(mut operation: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    match operation().await {
        Err(ApiError::ExpiredToken(message)) => {
            warn!(%message, "server reported expired token, retrying once with a fresh token");
            operation().await
        }
        outcome => outcome,
    }
}
