//! Error types for the collaborator boundary.

use thiserror::Error;
use trilex::QueryError;

/// Failures talking to the language-model endpoint.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("api returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The response parsed but carried no usable text.
    #[error("response contained no usable text")]
    EmptyResponse,

    /// The service did not pass the connection probe.
    #[error("service unreachable: {0}")]
    Unreachable(String),
}

impl From<ClientError> for QueryError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::EmptyResponse => QueryError::EmptyResponse,
            other => QueryError::Transport(other.to_string()),
        }
    }
}

/// Failures of the dictionary blob store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A stored blob is not a valid dictionary.
    #[error("dictionary blob is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
