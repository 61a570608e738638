//! Credential suppliers for [`esd_http::AuthClient`].
//!
//! Every supplier is re-queried on each request attempt, so file- and
//! environment-backed tokens pick up rotations without restarting the client.

mod config;
pub use config::BoxerTokenConfig;

mod sources;
pub use sources::{
    BoxerToken, EnvToken, SERVICE_ACCOUNT_TOKEN_PATH, ServiceAccountToken, StaticToken,
};
