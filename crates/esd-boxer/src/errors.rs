use esd_http::HttpError;
use esd_model::ClaimError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoxerError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    InvalidClaim(#[from] ClaimError),

    #[error("user and provider must not be empty")]
    EmptyIdentity,
}
