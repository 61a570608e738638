use std::fmt;

use serde::{Deserialize, Serialize};

/// Stages after which a submission will never run again because it failed.
pub const FAILED_STAGES: [&str; 5] = [
    "FAILED",
    "SCHEDULING_FAILED",
    "RETRIES_EXCEEDED",
    "SUBMISSION_FAILED",
    "STALE",
];

/// Stages after which a submission will never run again because it finished.
pub const SUCCESS_STAGES: [&str; 1] = ["COMPLETED"];

/// Coarse classification of a remote lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageClass {
    /// Submission may still be running (or about to run).
    Active,
    /// Submission completed successfully.
    Succeeded,
    /// Submission terminated without success.
    Failed,
}

impl StageClass {
    /// Returns `true` if a submission in this class will not transition further.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StageClass::Succeeded | StageClass::Failed)
    }
}

/// Lifecycle stage as reported by the job backend (`lifeCycleStage`).
///
/// Kept verbatim: the backend may add stages at any time, and every
/// unrecognised value must still be representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LifecycleStage(String);

impl LifecycleStage {
    pub fn new(stage: impl Into<String>) -> Self {
        Self(stage.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the stage. Matching is exact and case-sensitive.
    ///
    /// Any stage outside the two terminal sets is treated as [`StageClass::Active`],
    /// including ones this client has never seen.
    pub fn class(&self) -> StageClass {
        let stage = self.0.as_str();
        if FAILED_STAGES.contains(&stage) {
            StageClass::Failed
        } else if SUCCESS_STAGES.contains(&stage) {
            StageClass::Succeeded
        } else {
            // unknown stages must block resubmission
            StageClass::Active
        }
    }

    pub fn is_active(&self) -> bool {
        self.class() == StageClass::Active
    }
}

impl From<&str> for LifecycleStage {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LifecycleStage {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
