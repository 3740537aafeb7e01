//! KAF B2B API client: token issuance, authorized business calls, and
//! the one-shot expiration retry around them.

mod request;
mod token;

pub use request::EXPIRED_TOKEN_MARKER;

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::config::{ApiEndpoints, ApiSettings, Credentials};
use crate::error::ApiError;
use crate::resilience::retry_once_on_expired;

/// Business endpoint path for sales-ledger queries.
pub const SALES_LEDGER_PATH: &str = "excclcPrcInfo.do";

/// Business endpoint path for shipment/transaction queries.
pub const TRANSACTION_INFO_PATH: &str = "trnsoInfo.do";

/// Query parameters shared by both business operations, serialized
/// with the upstream wire field names.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerQuery {
    /// Request date, YYYYMMDD.
    #[serde(rename = "INQ_REQUST_YMD")]
    pub request_date: String,
    #[serde(rename = "PGE_NO")]
    pub page_no: String,
    /// Wholesale market code.
    #[serde(rename = "WHMK_CD")]
    pub market_code: String,
    /// Wholesale corporation code.
    #[serde(rename = "WHSL_CPR_CD")]
    pub wholesale_corp_code: String,
}

/// Client for the KAF B2B wholesale market trade-data API.
///
/// Every business call mints a fresh token; tokens are never cached or
/// shared between calls. Concurrent calls each run their own
/// independent token/retry cycle.
pub struct KafB2bClient {
    http: reqwest::Client,
    endpoints: ApiEndpoints,
    credentials: Credentials,
    timeout: Duration,
}

impl KafB2bClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoints: ApiEndpoints::resolve(&settings.api_url),
            credentials: settings.credentials,
            timeout: settings.timeout,
        })
    }

    /// URLs resolved from the configured API URL.
    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    /// Query the sales-ledger list for one date/market/corporation page.
    pub async fn sales_ledger(&self, query: &LedgerQuery) -> Result<Value, ApiError> {
        self.business_call(SALES_LEDGER_PATH, "sales ledger", query)
            .await
    }

    /// Query the shipment/transaction-info list for one
    /// date/market/corporation page.
    pub async fn transaction_info(&self, query: &LedgerQuery) -> Result<Value, ApiError> {
        self.business_call(TRANSACTION_INFO_PATH, "transaction info", query)
            .await
    }

    /// One full token/call cycle per attempt: issue a token, run the
    /// business call with it, and let the wrapper rerun both exactly
    /// once when the server reports the token expired.
    async fn business_call(
        &self,
        path: &str,
        operation: &str,
        query: &LedgerQuery,
    ) -> Result<Value, ApiError> {
        let url = self.endpoints.business_url(path);
        let url = url.as_str();
        retry_once_on_expired(|| async move {
            let token = self.issue_token().await?;
            self.post_business(url, &token, query, operation).await
        })
        .await
    }
}
