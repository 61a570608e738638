use esd_http::{AuthClient, HttpError, trim_base_url};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DsrConfig {
    /// Base URL of the data subject request API.
    pub base_url: String,
}

impl DsrConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum DsrError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("email must not be empty")]
    EmptyEmail,
}

/// Client of the data subject request (DSR) API.
#[derive(Clone)]
pub struct DsrService {
    client: AuthClient,
    base_url: String,
}

impl DsrService {
    pub fn new(client: AuthClient, config: DsrConfig) -> Self {
        Self {
            client,
            base_url: trim_base_url(&config.base_url),
        }
    }

    /// Data subject request registered for `email`, as returned by the API.
    pub async fn get_request(&self, email: &str) -> Result<String, DsrError> {
        if email.trim().is_empty() {
            return Err(DsrError::EmptyEmail);
        }
        let url = format!("{}/dsr/{}", self.base_url, email);
        debug!(url, "fetching dsr request");
        Ok(self.client.get_text(&url).await?)
    }
}
