use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed SHA-1 hash: {reason}")]
    MalformedHash { reason: String },

    #[error("HTTP request failed for prefix {prefix}: {source}")]
    Network {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request for prefix {prefix} timed out after {timeout:?}")]
    Timeout { prefix: String, timeout: Duration },

    #[error("HTTP {status} for prefix {prefix}")]
    Service { prefix: String, status: u16 },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl Error {
    /// True for failures of the range request itself, as opposed to bad
    /// caller input. The verdict for such a candidate is unknown.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Error::Network { .. } | Error::Timeout { .. } | Error::Service { .. })
    }
}
