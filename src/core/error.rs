use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FeedError {
    /// A transport-level failure (DNS, connection refused, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("server error: status {status} at {url}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The body could not be parsed, or the payload is missing its `data` array.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl FeedError {
    /// The single user-facing banner message for a failed fetch: specific
    /// text when the failure is understood, a generic fallback otherwise.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            FeedError::Server { .. } => "サーバーでエラーが発生しました。",
            FeedError::Malformed(_) => "データ形式が不正です。",
            _ => "データの取得に失敗しました。",
        }
    }
}
