use esd_model::{JobParams, JobRequest, Submission, SubmissionId};
use tracing::{debug, info, warn};

use crate::errors::SparkError;
use crate::service::SparkService;

impl SparkService {
    /// Find the submission currently active under `tag`.
    ///
    /// Lists every submission recorded for the tag and fetches each one's stage in turn.
    /// Returns `Ok(None)` when nothing is active, and [`SparkError::TagConflict`] when
    /// more than one submission is active at once. Any failed lookup aborts the search.
    pub async fn find_active_submission(
        &self,
        tag: &str,
    ) -> Result<Option<Submission>, SparkError> {
        if tag.is_empty() {
            return Err(SparkError::EmptyTag);
        }
        debug!(tag, "looking for existing submission");

        let ids = self.submission_ids(tag).await?;
        if ids.is_empty() {
            debug!(tag, "no previous submissions found");
            return Ok(None);
        }

        let mut snapshot = Vec::with_capacity(ids.len());
        for id in ids {
            let stage = self.lifecycle_stage(&id).await?;
            debug!(tag, %id, %stage, "fetched submission stage");
            snapshot.push(Submission { id, stage });
        }

        select_active(tag, snapshot)
    }

    /// Submit `request` unless a submission with the same client tag is already active.
    ///
    /// Returns the id of the active submission if there is one, otherwise the id of the
    /// newly created submission. Two callers racing with the same tag can both submit;
    /// serialize calls per tag if that matters.
    pub async fn submit(
        &self,
        job_name: &str,
        request: &JobRequest,
    ) -> Result<SubmissionId, SparkError> {
        let tag = request.client_tag.as_str();
        if let Some(active) = self.find_active_submission(tag).await? {
            info!(tag, id = %active.id, stage = %active.stage, "reusing active submission");
            return Ok(active.id);
        }

        let submission = self.submit_job(job_name, request).await?;
        Ok(submission.id)
    }

    /// Run the job `job_name` with `params`, deduplicated by `params.client_tag`.
    pub async fn run_job(
        &self,
        params: JobParams,
        job_name: &str,
    ) -> Result<SubmissionId, SparkError> {
        let request = JobRequest::from(params);
        self.submit(job_name, &request).await
    }
}

/// Pick the single active submission out of a snapshot of `tag`'s submissions.
///
/// Terminal submissions are ignored. More than one active submission is an
/// inconsistency the caller has to resolve; none of them is preferred.
pub fn select_active(
    tag: &str,
    snapshot: Vec<Submission>,
) -> Result<Option<Submission>, SparkError> {
    let mut active: Vec<Submission> = snapshot.into_iter().filter(Submission::is_active).collect();

    match active.len() {
        0 => {
            debug!(tag, "none of the found submissions are active");
            Ok(None)
        }
        1 => {
            let found = active.remove(0);
            info!(tag, id = %found.id, "found a running submission");
            Ok(Some(found))
        }
        _ => {
            let ids: Vec<SubmissionId> = active.into_iter().map(|s| s.id).collect();
            warn!(tag, count = ids.len(), "more than one active submission");
            Err(SparkError::TagConflict {
                tag: tag.to_string(),
                ids,
            })
        }
    }
}
