use serde_json::Value;
use tracing::debug;

use super::{KafB2bClient, LedgerQuery};
use crate::error::{body_excerpt, ApiError};

/// Substring of a server `MESSAGE` that marks a recoverable
/// expired-token rejection. The upstream reports expiry in Korean
/// prose, not via a dedicated status code.
pub const EXPIRED_TOKEN_MARKER: &str = "만료";

/// Response field carrying the server's human-readable diagnostic.
const MESSAGE_KEY: &str = "MESSAGE";

/// Sole decision point for expiry detection. Control flow elsewhere
/// never inspects message text, so the marker can change here alone.
fn is_expired_token_message(message: &str) -> bool {
    !message.is_empty() && message.contains(EXPIRED_TOKEN_MARKER)
}

/// `MESSAGE` value as trimmed text. Non-string values are rendered so
/// a numeric code still reaches the diagnostics.
fn extract_message(body: Option<&Value>) -> String {
    match body.and_then(|body| body.get(MESSAGE_KEY)) {
        Some(Value::String(message)) => message.trim().to_owned(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

impl KafB2bClient {
    /// POST one bearer-authenticated business request and classify the
    /// response.
    ///
    /// The body is parsed as JSON regardless of status: a failure
    /// response may still carry a diagnostic payload. Exactly one
    /// network call; the token is attached to the header and never
    /// inspected or cached.
    pub(crate) async fn post_business(
        &self,
        url: &str,
        token: &str,
        query: &LedgerQuery,
        operation: &str,
    ) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .timeout(self.timeout)
            .json(query)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let parsed: Option<Value> = serde_json::from_str(&text).ok();

        if !status.is_success() {
            let message = extract_message(parsed.as_ref());
            if is_expired_token_message(&message) {
                return Err(ApiError::ExpiredToken(message));
            }
            let detail = if message.is_empty() {
                body_excerpt(&text)
            } else {
                message
            };
            return Err(ApiError::BusinessRequest {
                operation: operation.to_owned(),
                status: status.as_u16(),
                detail,
            });
        }

        match parsed {
            Some(body) => {
                debug!(%operation, "business call succeeded");
                Ok(body)
            }
            None => Err(ApiError::BusinessRequest {
                operation: operation.to_owned(),
                status: status.as_u16(),
                detail: format!("response body is not JSON: {}", body_excerpt(&text)),
            }),
        }
    }
}
