mod config;
pub use config::CrystalConfig;

mod errors;
pub use errors::CrystalError;

mod service;
pub use service::CrystalService;
