mod boxer;
pub use boxer::BoxerToken;

mod env;
pub use env::EnvToken;

mod file;
pub use file::{SERVICE_ACCOUNT_TOKEN_PATH, ServiceAccountToken};

mod fixed;
pub use fixed::StaticToken;
