mod config;
pub use config::SparkConfig;

mod errors;
pub use errors::SparkError;

mod guard;
pub use guard::select_active;

mod service;
pub use service::SparkService;
