mod client;
pub use client::{AuthClient, decode};

mod config;
pub use config::{ClientConfig, DEFAULT_TIMEOUT_MS};

mod errors;
pub use errors::{HttpError, TokenError};

mod token;
pub use token::{TokenFn, TokenSource};

pub use reqwest::{Method, StatusCode};

/// Strip trailing slashes so endpoint paths can be appended with `format!`.
pub fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
