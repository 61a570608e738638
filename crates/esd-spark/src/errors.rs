use esd_http::HttpError;
use esd_model::SubmissionId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SparkError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(
        "more than one submission of {tag} is running: {}; review their status and restart or terminate them",
        join_ids(.ids)
    )]
    TagConflict { tag: String, ids: Vec<SubmissionId> },

    #[error("client tag must not be empty")]
    EmptyTag,
}

impl SparkError {
    /// Submissions involved in a tag conflict, empty for other errors.
    pub fn conflicting_ids(&self) -> &[SubmissionId] {
        match self {
            SparkError::TagConflict { ids, .. } => ids,
            _ => &[],
        }
    }
}

fn join_ids(ids: &[SubmissionId]) -> String {
    ids.iter()
        .map(SubmissionId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
