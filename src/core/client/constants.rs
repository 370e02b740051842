//! Centralized constants for default endpoints and UA.

/// Default desktop UA; the TSETMC servers reject requests without a browser-like agent.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Legacy `.aspx` endpoints (`data/...` and `chart/data/...` are appended).
pub(crate) const DEFAULT_BASE_TSEV2: &str = "http://www.tsetmc.com/tsev2/";

/// JSON API served from the CDN host.
pub(crate) const DEFAULT_BASE_CDN: &str = "http://cdn.tsetmc.com/api/";

/// Every request is bounded; the servers are known to hang on busy trading days.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 20;
