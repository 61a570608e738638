use std::sync::Arc;

use reqwest::{Method, StatusCode, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::errors::HttpError;
use crate::token::TokenSource;

/// HTTP client that authenticates every request with a bearer token.
///
/// A token is requested from the [`TokenSource`] for every attempt. When the server
/// answers `401` or `403` the request is rebuilt with a freshly supplied token and sent
/// exactly once more; whatever that second attempt yields is returned.
///
/// Only `200` and `202` count as success. Every other status is surfaced as
/// [`HttpError::Status`] without retrying.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    tokens: Arc<dyn TokenSource>,
}

enum Attempt {
    Done(Vec<u8>),
    Unauthorized(StatusCode),
}

impl AuthClient {
    /// Client with the default 30s request timeout.
    pub fn new(tokens: Arc<dyn TokenSource>) -> Result<Self, HttpError> {
        Self::with_config(&ClientConfig::default(), tokens)
    }

    pub fn with_config(
        cfg: &ClientConfig,
        tokens: Arc<dyn TokenSource>,
    ) -> Result<Self, HttpError> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .build()
            .map_err(HttpError::Build)?;
        Ok(Self { http, tokens })
    }

    /// Wrap an already configured `reqwest::Client` (shared pools, proxies, custom TLS).
    pub fn from_reqwest(http: reqwest::Client, tokens: Arc<dyn TokenSource>) -> Self {
        Self { http, tokens }
    }

    /// Execute one logical request and return the raw response body.
    ///
    /// `payload`, when present, is encoded as JSON once and reused for the retry.
    pub async fn execute<P>(
        &self,
        method: Method,
        url: &str,
        payload: Option<&P>,
    ) -> Result<Vec<u8>, HttpError>
    where
        P: Serialize + ?Sized,
    {
        let body = payload
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|source| HttpError::Encode {
                url: url.to_string(),
                source,
            })?;
        self.execute_raw(method, url, body).await
    }

    pub async fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        self.execute_raw(Method::GET, url, None).await
    }

    /// `GET` returning the body as text (lossy UTF-8).
    pub async fn get_text(&self, url: &str) -> Result<String, HttpError> {
        let body = self.get(url).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    pub async fn get_json<T>(&self, url: &str) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let body = self.get(url).await?;
        decode(url, &body)
    }

    /// Body-less request with an arbitrary method (`POST`, `DELETE`, ...).
    pub async fn call(&self, method: Method, url: &str) -> Result<Vec<u8>, HttpError> {
        self.execute_raw(method, url, None).await
    }

    /// Request carrying a JSON payload, returning the raw response body.
    pub async fn send<P>(
        &self,
        method: Method,
        url: &str,
        payload: &P,
    ) -> Result<Vec<u8>, HttpError>
    where
        P: Serialize + ?Sized,
    {
        self.execute(method, url, Some(payload)).await
    }

    /// Request carrying a JSON payload, decoding the response as `T`.
    pub async fn send_json<P, T>(
        &self,
        method: Method,
        url: &str,
        payload: &P,
    ) -> Result<T, HttpError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send(method, url, payload).await?;
        decode(url, &body)
    }

    async fn execute_raw(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, HttpError> {
        let status = match self.attempt(&method, url, body.as_deref()).await? {
            Attempt::Done(bytes) => return Ok(bytes),
            Attempt::Unauthorized(status) => status,
        };
        warn!(
            %method,
            url,
            status = status.as_u16(),
            "authorization failed, retrying with refreshed token"
        );

        match self.attempt(&method, url, body.as_deref()).await? {
            Attempt::Done(bytes) => Ok(bytes),
            Attempt::Unauthorized(status) => Err(HttpError::Unauthorized {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            }),
        }
    }

    async fn attempt(
        &self,
        method: &Method,
        url: &str,
        body: Option<&[u8]>,
    ) -> Result<Attempt, HttpError> {
        let token = self.tokens.token().await.map_err(HttpError::Credential)?;

        let mut request = self
            .http
            .request(method.clone(), url)
            .bearer_auth(token.trim());
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_vec());
        }

        debug!(%method, url, "sending request");
        let response = request.send().await.map_err(|source| HttpError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        trace!(%method, url, status = status.as_u16(), "response received");
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(Attempt::Unauthorized(status)),
            StatusCode::OK | StatusCode::ACCEPTED => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|source| HttpError::Transport {
                        url: url.to_string(),
                        source,
                    })?;
                Ok(Attempt::Done(bytes.to_vec()))
            }
            other => Err(HttpError::Status {
                url: url.to_string(),
                status: other.as_u16(),
            }),
        }
    }
}

/// Decode a JSON response body, attributing failures to `url`.
pub fn decode<T>(url: &str, body: &[u8]) -> Result<T, HttpError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|source| HttpError::Decode {
        url: url.to_string(),
        source,
    })
}
