use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, fmt::time::OffsetTime, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::logger::{config::LoggerConfig, error::LoggerError, format::LoggerFormat};

/// Targets emitted by the SDK crates and the bundled demo.
pub const SDK_TARGETS: &[&str] = &[
    "esd_http",
    "esd_auth",
    "esd_spark",
    "esd_crystal",
    "esd_boxer",
    "esd_dsr",
    "submit_job",
];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

pub(crate) fn install(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let directive = sdk_directive(&cfg.level, &cfg.dependency_level);
    let filter = mk_filter(&directive)?;

    tracing_subscriber::registry()
        .with(output_layer(cfg))
        .with(filter)
        .try_init()
        .map_err(as_error)?;

    tracing::debug!(format = ?cfg.format, filter = %directive, "logger initialised");
    Ok(())
}

fn output_layer(cfg: &LoggerConfig) -> BoxedLayer {
    match cfg.format {
        LoggerFormat::Text => fmt::layer()
            .with_ansi(cfg.use_color)
            .with_target(cfg.with_targets)
            .with_timer(mk_timer())
            .boxed(),
        LoggerFormat::Json => fmt::layer()
            .json()
            .with_ansi(false)
            .with_target(cfg.with_targets)
            .with_timer(mk_timer())
            .boxed(),
    }
}

/// A bare level (`debug`) applies to the SDK targets only, with everything else
/// (reqwest, hyper) held at `dependency_level`. Anything that already looks like
/// a directive list is passed through untouched.
fn sdk_directive(level: &str, dependency_level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    let mut directive = dependency_level.trim().to_string();
    for target in SDK_TARGETS {
        directive.push_str(&format!(",{target}={level}"));
    }
    directive
}

fn mk_filter(directive: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_new(directive).map_err(|_| LoggerError::InvalidLogLevel(directive.to_string()))
}

fn mk_timer() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn as_error(e: impl std::fmt::Display) -> LoggerError {
    let s = e.to_string();
    if s.contains("SetGlobalDefaultError") || s.contains("global default") {
        LoggerError::AlreadyInitialized
    } else {
        LoggerError::InitializationFailed(s)
    }
}
