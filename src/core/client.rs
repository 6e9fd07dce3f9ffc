//! Public client surface + builder.

use crate::core::FeedError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default feed endpoint. Versionless; the success body is `{ "data": [...] }`.
pub(crate) const DEFAULT_FEED_URL: &str = "https://kogagumi-2025.toma09to.com/data.json";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client plus the feed endpoint it reads from.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    feed_url: Url,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FeedClient {
    /// Create a new builder.
    pub fn builder() -> FeedClientBuilder {
        FeedClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn feed_url(&self) -> &Url {
        &self.feed_url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FeedClientBuilder {
    user_agent: Option<String>,
    feed_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FeedClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the feed endpoint (e.g. to point at a mock server).
    #[must_use]
    pub fn feed_url(mut self, url: Url) -> Self {
        self.feed_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default feed URL fails to parse or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<FeedClient, FeedError> {
        let feed_url = match self.feed_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_FEED_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(FeedClient {
            http: httpb.build()?,
            feed_url,
        })
    }
}
