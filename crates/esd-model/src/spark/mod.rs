mod job;
pub use job::{JobParams, JobRequest, JobSocket};

mod configuration;
pub use configuration::{RequestDebugMode, SubmissionConfiguration, SubmissionDetails};
