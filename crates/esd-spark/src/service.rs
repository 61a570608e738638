use esd_http::{AuthClient, Method, decode, trim_base_url};
use esd_model::{
    JobRequest, LifecycleStage, Submission, SubmissionConfiguration, SubmissionId,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::SparkConfig;
use crate::errors::SparkError;

/// Client of the Spark job backend.
///
/// Holds no state besides the connection pool; every answer is fetched from the
/// backend when asked for.
#[derive(Clone)]
pub struct SparkService {
    client: AuthClient,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RequestState {
    #[serde(rename = "lifeCycleStage")]
    life_cycle_stage: LifecycleStage,
}

impl SparkService {
    pub fn new(client: AuthClient, config: SparkConfig) -> Self {
        Self {
            client,
            base_url: trim_base_url(&config.base_url),
        }
    }

    /// Current lifecycle stage of a submission.
    pub async fn lifecycle_stage(&self, id: &SubmissionId) -> Result<LifecycleStage, SparkError> {
        let url = format!("{}/job/requests/{}", self.base_url, id);
        let state: RequestState = self.client.get_json(&url).await?;
        Ok(state.life_cycle_stage)
    }

    /// Runtime information of a submission, as returned by the backend.
    pub async fn runtime_info(&self, id: &SubmissionId) -> Result<String, SparkError> {
        let url = format!("{}/job/requests/{}", self.base_url, id);
        Ok(self.client.get_text(&url).await?)
    }

    /// Deployed configuration of the job named `name`.
    pub async fn configuration(&self, name: &str) -> Result<SubmissionConfiguration, SparkError> {
        let url = format!("{}/job/deployed/{}", self.base_url, name);
        Ok(self.client.get_json(&url).await?)
    }

    /// Logs of a running or finished submission, one line per entry.
    pub async fn logs(&self, id: &SubmissionId) -> Result<String, SparkError> {
        let url = format!("{}/job/logs/{}", self.base_url, id);
        let lines: Vec<String> = self.client.get_json(&url).await?;
        Ok(lines.join("\n"))
    }

    /// Identifiers of every submission ever recorded under `tag`, in backend order.
    pub(crate) async fn submission_ids(&self, tag: &str) -> Result<Vec<SubmissionId>, SparkError> {
        let url = format!("{}/job/requests/tags/{}", self.base_url, tag);
        let body = self.client.get(&url).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let ids: Option<Vec<SubmissionId>> = decode(&url, &body)?;
        Ok(ids.unwrap_or_default())
    }

    /// Submit `request` unconditionally.
    pub(crate) async fn submit_job(
        &self,
        job_name: &str,
        request: &JobRequest,
    ) -> Result<Submission, SparkError> {
        let url = format!("{}/job/submit/{}", self.base_url, job_name);
        debug!(tag = %request.client_tag, job = job_name, "submitting request");

        let submission: Submission = self.client.send_json(Method::POST, &url, request).await?;
        info!(
            id = %submission.id,
            stage = %submission.stage,
            "backend has accepted the request"
        );
        Ok(submission)
    }
}
