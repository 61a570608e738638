use async_trait::async_trait;
use esd_http::{AuthClient, TokenError, TokenSource, trim_base_url};
use tracing::debug;

use crate::config::BoxerTokenConfig;

/// Exchanges an identity provider token for a Boxer token.
///
/// `client` authenticates against Boxer with the identity provider's token, so the
/// provider token itself goes through the usual refresh-and-retry on `401`/`403`.
#[derive(Clone)]
pub struct BoxerToken {
    client: AuthClient,
    url: String,
}

impl BoxerToken {
    pub fn new(client: AuthClient, config: &BoxerTokenConfig) -> Self {
        let url = format!(
            "{}/token/{}",
            trim_base_url(&config.token_url),
            config.provider
        );
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TokenSource for BoxerToken {
    async fn token(&self) -> Result<String, TokenError> {
        debug!(url = %self.url, "requesting boxer token");
        let body = self
            .client
            .get_text(&self.url)
            .await
            .map_err(|e| TokenError::Exchange(e.to_string()))?;

        let token = body.trim();
        if token.is_empty() {
            return Err(TokenError::Exchange(format!(
                "empty token returned by {}",
                self.url
            )));
        }
        Ok(token.to_string())
    }
}
