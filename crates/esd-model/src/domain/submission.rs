use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{LifecycleStage, SubmissionId};

/// Point-in-time snapshot of a remote job submission.
///
/// The backend owns the submission; this value is discarded after each decision
/// and never updated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(alias = "ID", alias = "Id", deserialize_with = "non_empty_id")]
    pub id: SubmissionId,
    #[serde(default = "unknown_stage", alias = "Stage")]
    pub stage: LifecycleStage,
}

fn non_empty_id<'de, D>(deserializer: D) -> Result<SubmissionId, D::Error>
where
    D: Deserializer<'de>,
{
    let id = SubmissionId::deserialize(deserializer)?;
    if id.as_str().trim().is_empty() {
        return Err(de::Error::custom("submission id is empty"));
    }
    Ok(id)
}

fn unknown_stage() -> LifecycleStage {
    LifecycleStage::new("")
}

impl Submission {
    pub fn new(id: impl Into<SubmissionId>, stage: impl Into<LifecycleStage>) -> Self {
        Self {
            id: id.into(),
            stage: stage.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.stage.is_active()
    }
}
