use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`MastodonClient`](crate::client::MastodonClient) methods.
///
/// Callers decide whether a failure aborts the run or is collected and
/// reported, so no retry or continue policy is baked in here.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("request to {endpoint} failed with status {status}")]
    RemoteRequestFailed {
        endpoint: String,
        status: StatusCode,
    },

    /// Connection, DNS or timeout failure before any status was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn remote(endpoint: impl Into<String>, status: StatusCode) -> Self {
        Self::RemoteRequestFailed {
            endpoint: endpoint.into(),
            status,
        }
    }
}
