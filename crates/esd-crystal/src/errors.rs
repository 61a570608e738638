use esd_http::HttpError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrystalError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("algorithm name must not be empty")]
    EmptyAlgorithm,
}
