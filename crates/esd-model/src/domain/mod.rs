mod submission_id;
pub use submission_id::SubmissionId;

mod stage;
pub use stage::{FAILED_STAGES, LifecycleStage, SUCCESS_STAGES, StageClass};

mod submission;
pub use submission::Submission;

/// Client-supplied correlation key used to detect duplicate job submissions.
pub type ClientTag = String;
