#![allow(dead_code)]

use std::path::{Path, PathBuf};

use httpmock::MockServer;
use tsetmc_rs::TsClient;
use url::Url;

pub const TSEV2: &str = "/tsev2/";
pub const CDN: &str = "/api/";

pub fn setup_server() -> MockServer {
    #[cfg(feature = "tracing-subscriber")]
    {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
    MockServer::start()
}

/// A client whose endpoints all point at the mock server.
pub fn client_for(server: &MockServer) -> TsClient {
    TsClient::builder()
        .base_tsev2(Url::parse(&format!("{}{TSEV2}", server.base_url())).unwrap())
        .base_cdn(Url::parse(&format!("{}{CDN}", server.base_url())).unwrap())
        .build()
        .unwrap()
}

pub fn tsev2_path(rest: &str) -> String {
    format!("{TSEV2}{rest}")
}

pub fn cdn_path(rest: &str) -> String {
    format!("{CDN}{rest}")
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// A reply recorded with `TS_RECORD=1`, named `<endpoint>_<key>.<ext>`.
pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let path = fixtures_dir().join(format!("{endpoint}_{key}.{ext}"));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}
