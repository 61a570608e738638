use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::JobSocket;

/// Deployed job definition as returned by `GET /job/deployed/{name}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionConfiguration {
    pub root_path: String,
    pub project_name: String,
    pub runnable: String,
    pub submission_details: SubmissionDetails,
}

/// Runtime details of a deployed job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionDetails {
    pub version: String,
    pub execution_group: String,
    pub expected_parallelism: u32,
    pub flexible_driver: bool,
    pub additional_driver_node_tolerations: HashMap<String, String>,
    pub max_runtime_hours: u32,
    pub debug_mode: RequestDebugMode,
    pub submission_mode: String,
    pub extended_code_mount: bool,
    pub submission_job_template: String,
    pub executor_spec_template: String,
    pub driver_job_retries: u32,
    pub default_arguments: HashMap<String, String>,
    pub inputs: Vec<JobSocket>,
    pub outputs: Vec<JobSocket>,
    pub overwrite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestDebugMode {
    pub event_log_location: String,
    pub max_size_per_file: String,
}
