//! # KAF B2B Market Data Client
//!
//! Client for the KAF B2B wholesale market trade-data API: exchanges a
//! service credential pair for a short-lived bearer token, then issues
//! authenticated sales-ledger and shipment/transaction queries. Every
//! business call mints a fresh token; a server-reported expiry is
//! retried exactly once with a new token, never more.
//!
//! Modules:
//! - `config` — settings, credentials, and base-URL/token-endpoint resolution
//! - `parser` — locating the token inside the issuance response
//! - `client` — token issuer, authorized request executor, business operations
//! - `resilience` — the one-shot expired-token retry wrapper
//! - `error` — failure taxonomy

pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod resilience;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use crate::client::{KafB2bClient, LedgerQuery};
pub use crate::config::{ApiEndpoints, ApiSettings, Credentials};
pub use crate::error::ApiError;
