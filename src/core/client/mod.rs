//! Public client surface + builder.
//! Defaults (UA, endpoints, timeout) live in `constants`.

mod constants;

use crate::core::{TsError, net};
use constants::{DEFAULT_BASE_CDN, DEFAULT_BASE_TSEV2, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client and base URLs.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TsClient {
    http: Client,
    base_tsev2: Url,
    base_cdn: Url,
}

impl Default for TsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl TsClient {
    /// Create a new builder.
    pub fn builder() -> TsClientBuilder {
        TsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn base_tsev2(&self) -> &Url {
        &self.base_tsev2
    }
    pub(crate) fn base_cdn(&self) -> &Url {
        &self.base_cdn
    }

    /// Issue a single GET and return the body text.
    ///
    /// Non-2xx replies become [`TsError::Status`]. No retry is attempted.
    pub(crate) async fn get_text(
        &self,
        url: Url,
        endpoint: &str,
        key: &str,
        ext: &str,
    ) -> Result<String, TsError> {
        let resp = self.http.get(url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(TsError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(net::get_text(resp, endpoint, key, ext).await?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct TsClientBuilder {
    user_agent: Option<String>,
    base_tsev2: Option<Url>,
    base_cdn: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl TsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the legacy endpoint base (e.g., `http://www.tsetmc.com/tsev2/`).
    #[must_use]
    pub fn base_tsev2(mut self, url: Url) -> Self {
        self.base_tsev2 = Some(url);
        self
    }

    /// Override the CDN JSON API base (e.g., `http://cdn.tsetmc.com/api/`).
    #[must_use]
    pub fn base_cdn(mut self, url: Url) -> Self {
        self.base_cdn = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: 20 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default base URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<TsClient, TsError> {
        let base_tsev2 = match self.base_tsev2 {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_TSEV2)?,
        };
        let base_cdn = match self.base_cdn {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CDN)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true)
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(TsClient {
            http: httpb.build()?,
            base_tsev2,
            base_cdn,
        })
    }
}
