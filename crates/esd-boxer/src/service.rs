use esd_http::{AuthClient, Method, trim_base_url};
use esd_model::{ClaimOperation, ClaimPayload};
use tracing::{debug, info};

use crate::config::BoxerConfig;
use crate::errors::BoxerError;

/// Client of the Boxer claim management API.
///
/// Users are addressed by `(provider, user)`; claims are `type:value` strings.
#[derive(Clone)]
pub struct BoxerService {
    client: AuthClient,
    claim_url: String,
}

impl BoxerService {
    pub fn new(client: AuthClient, config: BoxerConfig) -> Self {
        Self {
            client,
            claim_url: trim_base_url(&config.claim_url),
        }
    }

    /// Claims currently granted to `user`, as returned by Boxer.
    pub async fn get_claim(&self, user: &str, provider: &str) -> Result<String, BoxerError> {
        let url = self.user_url(user, provider)?;
        Ok(self.client.get_text(&url).await?)
    }

    pub async fn add_claim<S>(
        &self,
        user: &str,
        provider: &str,
        claims: &[S],
    ) -> Result<String, BoxerError>
    where
        S: AsRef<str>,
    {
        self.patch_claims(user, provider, ClaimOperation::Insert, claims)
            .await
    }

    pub async fn remove_claim<S>(
        &self,
        user: &str,
        provider: &str,
        claims: &[S],
    ) -> Result<String, BoxerError>
    where
        S: AsRef<str>,
    {
        self.patch_claims(user, provider, ClaimOperation::Delete, claims)
            .await
    }

    /// Register `user` with `provider`.
    pub async fn add_user(&self, user: &str, provider: &str) -> Result<String, BoxerError> {
        let url = self.user_url(user, provider)?;
        let body = self.client.call(Method::POST, &url).await?;
        info!(user, provider, "user added");
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    pub async fn remove_user(&self, user: &str, provider: &str) -> Result<String, BoxerError> {
        let url = self.user_url(user, provider)?;
        let body = self.client.call(Method::DELETE, &url).await?;
        info!(user, provider, "user removed");
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    async fn patch_claims<S>(
        &self,
        user: &str,
        provider: &str,
        operation: ClaimOperation,
        claims: &[S],
    ) -> Result<String, BoxerError>
    where
        S: AsRef<str>,
    {
        let url = self.user_url(user, provider)?;
        let payload = ClaimPayload::from_claims(operation, claims)?;
        debug!(user, provider, ?operation, count = payload.claims.len(), "patching claims");

        let body = self.client.send(Method::PATCH, &url, &payload).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn user_url(&self, user: &str, provider: &str) -> Result<String, BoxerError> {
        if user.is_empty() || provider.is_empty() {
            return Err(BoxerError::EmptyIdentity);
        }
        Ok(format!("{}/claim/{}/{}", self.claim_url, provider, user))
    }
}
