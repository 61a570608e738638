mod config;
pub use config::BoxerConfig;

mod errors;
pub use errors::BoxerError;

mod service;
pub use service::BoxerService;
