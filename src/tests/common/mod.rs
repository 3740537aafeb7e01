// tests/common/mod.rs
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::task::JoinHandle;

use crate::client::{KafB2bClient, LedgerQuery};
use crate::config::{ApiSettings, Credentials};

/// Base path every mock server exposes. The last segment is dot-free
/// on purpose: resolution must classify it as a resource base, not a
/// token endpoint.
pub const TEST_BASE_PATH: &str = "/api/v2/whsl";

pub const TEST_TOKEN_PATH: &str = "/api/v2/whsl/access_token.do";
pub const TEST_SALES_PATH: &str = "/api/v2/whsl/excclcPrcInfo.do";
pub const TEST_TRANS_PATH: &str = "/api/v2/whsl/trnsoInfo.do";

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// Client pointed at a mock server's base URL with test credentials.
pub fn client_for(base_url: &str) -> KafB2bClient {
    let settings = ApiSettings::new(base_url, Credentials::new("svc-key", "scr-key"))
        .with_timeout(Duration::from_secs(5));
    KafB2bClient::new(settings).expect("client")
}

pub fn sample_query() -> LedgerQuery {
    LedgerQuery {
        request_date: "20251120".into(),
        page_no: "1".into(),
        market_code: "210001".into(),
        wholesale_corp_code: "21000102".into(),
    }
}
