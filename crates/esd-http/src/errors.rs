use reqwest::Method;
use thiserror::Error;

/// Failure of a credential supplier.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token source unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read token: {0}")]
    Io(#[from] std::io::Error),

    #[error("token exchange failed: {0}")]
    Exchange(String),
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("failed to get token: {0}")]
    Credential(#[source] TokenError),

    #[error("authorization failed for {method} {url} (status {status})")]
    Unauthorized {
        method: Method,
        url: String,
        status: u16,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with status code: {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode payload for {url}: {source}")]
    Encode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// HTTP status code returned by the server, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Unauthorized { status, .. } | HttpError::Status { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, HttpError::Unauthorized { .. })
    }
}
