use thiserror::Error;

/// Possible error types while talking to Pinterest.
#[derive(Debug, Error)]
pub enum PinterestError {
    /// An authenticated call was attempted without an access token.
    /// Raised before any request is built.
    #[error("you need an access token to make that call")]
    MissingCredentials,

    /// The request could not complete: DNS, TLS, connection reset, or
    /// the body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("unable to decode response: {0}")]
    Decoding(#[from] serde_json::Error),

    /// The operation is deliberately disabled.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// A caller-supplied identifier would not address a single path segment.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = PinterestError> = std::result::Result<T, E>;
