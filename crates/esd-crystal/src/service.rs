use esd_http::{AuthClient, Method, trim_base_url};
use esd_model::{AlgorithmRunResult, RunRequest};
use tracing::debug;

use crate::config::CrystalConfig;
use crate::errors::CrystalError;

/// Client of the Crystal algorithm scheduler.
#[derive(Clone)]
pub struct CrystalService {
    client: AuthClient,
    scheduler_url: String,
    receiver_url: String,
    api_version: String,
}

impl CrystalService {
    pub fn new(client: AuthClient, config: CrystalConfig) -> Self {
        Self {
            client,
            scheduler_url: trim_base_url(&config.scheduler_url),
            receiver_url: trim_base_url(&config.receiver_url),
            api_version: config.api_version,
        }
    }

    /// Start a run of `algorithm`. Returns the scheduler's response verbatim.
    pub async fn create_run(
        &self,
        algorithm: &str,
        request: RunRequest,
    ) -> Result<String, CrystalError> {
        ensure_name(algorithm)?;
        let url = format!(
            "{}/algorithm/{}/run/{}",
            self.scheduler_url, self.api_version, algorithm
        );
        debug!(algorithm, tag = %request.tag, "creating run");

        let payload = request.into_payload(algorithm);
        let body = self.client.send(Method::POST, &url, &payload).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Current state and results of a run.
    pub async fn retrieve_run(
        &self,
        run_id: &str,
        algorithm: &str,
    ) -> Result<String, CrystalError> {
        ensure_name(algorithm)?;
        let url = format!(
            "{}/algorithm/{}/results/{}/requests/{}",
            self.scheduler_url, self.api_version, algorithm, run_id
        );
        Ok(self.client.get_text(&url).await?)
    }

    /// Report the outcome of a run from inside the algorithm.
    pub async fn submit_result(
        &self,
        run_id: &str,
        algorithm: &str,
        result: &AlgorithmRunResult,
    ) -> Result<String, CrystalError> {
        ensure_name(algorithm)?;
        let url = format!(
            "{}/algorithm/{}/complete/{}/requests/{}",
            self.receiver_url, self.api_version, algorithm, run_id
        );
        debug!(algorithm, run_id, cause = %result.cause, "submitting run result");

        let body = self.client.send(Method::POST, &url, result).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

fn ensure_name(algorithm: &str) -> Result<(), CrystalError> {
    if algorithm.trim().is_empty() {
        return Err(CrystalError::EmptyAlgorithm);
    }
    Ok(())
}
