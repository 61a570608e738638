use std::io::IsTerminal;

use crate::logger::format::LoggerFormat;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// Level for the SDK targets (`debug`), or a full `EnvFilter` directive
    /// such as `esd_spark=debug,info`.
    pub level: String,
    /// Level for third-party targets when `level` is a bare level.
    pub dependency_level: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let use_color = cfg!(test) || std::io::stdout().is_terminal();
        Self {
            format: LoggerFormat::Text,
            level: "info".to_string(),
            dependency_level: "warn".to_string(),
            with_targets: true,
            use_color,
        }
    }
}
