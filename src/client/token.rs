use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::KafB2bClient;
use crate::error::{body_excerpt, ApiError};
use crate::parser::token::{find_token, TOKEN_KEY};

/// Wire body for the credential exchange, upstream field names.
#[derive(Serialize)]
struct TokenRequestBody<'a> {
    #[serde(rename = "SRCV_KEYVAL")]
    service_key: &'a str,
    #[serde(rename = "SCR_KEYVAL")]
    secret_key: &'a str,
}

impl KafB2bClient {
    /// Exchange the credential pair for a fresh access token.
    ///
    /// Exactly one network call per invocation; re-issuance on expiry
    /// is the retry wrapper's responsibility. The token value is
    /// returned to the caller and never logged.
    pub(crate) async fn issue_token(&self) -> Result<String, ApiError> {
        let body = TokenRequestBody {
            service_key: &self.credentials.service_key,
            secret_key: &self.credentials.secret_key,
        };

        let response = self
            .http
            .post(&self.endpoints.token_endpoint)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::TokenRequest {
                status: status.as_u16(),
                detail: body_excerpt(&text),
            });
        }

        let parsed: Value =
            serde_json::from_str(&text).map_err(|_| ApiError::TokenRequest {
                status: status.as_u16(),
                detail: format!("response is not JSON: {}", body_excerpt(&text)),
            })?;

        match find_token(&parsed) {
            Some(token) => {
                debug!("access token issued");
                Ok(token.to_owned())
            }
            None => Err(ApiError::TokenRequest {
                status: status.as_u16(),
                detail: format!("response missing {TOKEN_KEY}: {}", body_excerpt(&text)),
            }),
        }
    }
}
