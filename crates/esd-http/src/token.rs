use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::TokenError;

/// Supplier of bearer credentials.
///
/// Called once per request attempt. [`AuthClient`](crate::AuthClient) never caches the
/// returned value; implementations that talk to a remote identity provider may cache
/// on their own.
#[async_trait]
pub trait TokenSource: Send + Sync + 'static {
    async fn token(&self) -> Result<String, TokenError>;
}

#[async_trait]
impl<T> TokenSource for Arc<T>
where
    T: TokenSource + ?Sized,
{
    async fn token(&self) -> Result<String, TokenError> {
        (**self).token().await
    }
}

/// [`TokenSource`] backed by an async closure.
///
/// ```ignore
/// let tokens = TokenFn::arc(|| async { Ok(std::env::var("TOKEN").unwrap_or_default()) });
/// ```
pub struct TokenFn<F> {
    f: F,
}

impl<F, Fut> TokenFn<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, TokenError>> + Send + 'static,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }

    pub fn arc(f: F) -> Arc<dyn TokenSource> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> TokenSource for TokenFn<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, TokenError>> + Send + 'static,
{
    async fn token(&self) -> Result<String, TokenError> {
        (self.f)().await
    }
}
