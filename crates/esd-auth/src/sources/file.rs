use std::path::PathBuf;

use async_trait::async_trait;
use esd_http::{TokenError, TokenSource};
use tracing::trace;

/// Default location of the projected Kubernetes service account token.
pub const SERVICE_ACCOUNT_TOKEN_PATH: &str =
    "/var/run/secrets/kubernetes.io/serviceaccount/token";

/// Reads a token file on every call; the kubelet rotates projected tokens in place.
#[derive(Debug, Clone)]
pub struct ServiceAccountToken {
    path: PathBuf,
}

impl ServiceAccountToken {
    pub fn new() -> Self {
        Self::at(SERVICE_ACCOUNT_TOKEN_PATH)
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for ServiceAccountToken {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenSource for ServiceAccountToken {
    async fn token(&self) -> Result<String, TokenError> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(TokenError::Unavailable(format!(
                "could not find token file at {}",
                self.path.display()
            )));
        }
        trace!(path = %self.path.display(), "reading token file");
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
