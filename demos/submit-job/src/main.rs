use std::env;
use std::sync::Arc;

use anyhow::{Context, bail};
use tracing::{error, info};

use esd_auth::{EnvToken, ServiceAccountToken};
use esd_http::{AuthClient, ClientConfig, DEFAULT_TIMEOUT_MS, TokenSource};
use esd_model::{JobParams, JobSocket};
use esd_observe::{LoggerConfig, LoggerFormat, logger_init};
use esd_spark::{SparkConfig, SparkError, SparkService};

/// Submits a Spark job once per client tag.
///
/// Environment:
/// - `ESD_SPARK_URL`      job backend base URL (required)
/// - `ESD_JOB_NAME`       deployed job to run (required)
/// - `ESD_CLIENT_TAG`     deduplication tag (required)
/// - `ESD_JOB_INPUT`      optional `alias=path=format` input socket
/// - `ESD_JOB_OUTPUT`     optional `alias=path=format` output socket
/// - `ESD_TOKEN`          bearer token; falls back to the service account token file
/// - `ESD_TIMEOUT_MS`     per-request timeout (default 30000)
/// - `ESD_LOG_LEVEL`      log filter (default `info`)
/// - `ESD_LOG_FORMAT`     `text` or `json` (default `text`)
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger
    let cfg = LoggerConfig {
        level: env_or("ESD_LOG_LEVEL", "info"),
        format: env_or("ESD_LOG_FORMAT", "text").parse::<LoggerFormat>()?,
        ..Default::default()
    };
    logger_init(&cfg)?;

    // 2) Client
    let tokens: Arc<dyn TokenSource> = if env::var_os("ESD_TOKEN").is_some() {
        Arc::new(EnvToken::new("ESD_TOKEN"))
    } else {
        Arc::new(ServiceAccountToken::new())
    };
    let timeout_ms = match env::var("ESD_TIMEOUT_MS") {
        Ok(v) => v.parse().context("ESD_TIMEOUT_MS must be a number")?,
        Err(_) => DEFAULT_TIMEOUT_MS,
    };
    let client = AuthClient::with_config(&ClientConfig { timeout_ms }, tokens)?;
    let spark = SparkService::new(client, SparkConfig::new(required("ESD_SPARK_URL")?));

    // 3) Job
    let job_name = required("ESD_JOB_NAME")?;
    let mut params = JobParams::new(required("ESD_CLIENT_TAG")?);
    if let Ok(raw) = env::var("ESD_JOB_INPUT") {
        params = params.with_input(parse_socket(&raw)?);
    }
    if let Ok(raw) = env::var("ESD_JOB_OUTPUT") {
        params = params.with_output(parse_socket(&raw)?);
    }
    info!(job = %job_name, tag = %params.client_tag, "submitting job");

    // 4) Submit
    match spark.run_job(params, &job_name).await {
        Ok(id) => {
            info!(%id, "submission ready");
            println!("{id}");
            Ok(())
        }
        Err(SparkError::TagConflict { tag, ids }) => {
            error!(%tag, ?ids, "several active submissions share this tag; resolve them manually");
            bail!("tag conflict for {tag}")
        }
        Err(e) => Err(e.into()),
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("{key} is not set"))
}

fn parse_socket(raw: &str) -> anyhow::Result<JobSocket> {
    let mut parts = raw.splitn(3, '=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(alias), Some(path), Some(format)) if !alias.is_empty() => {
            Ok(JobSocket::new(alias, path, format))
        }
        _ => bail!("invalid socket '{raw}' (expected alias=path=format)"),
    }
}
