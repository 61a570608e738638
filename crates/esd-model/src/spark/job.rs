use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ClientTag;

/// Input or output data binding of a job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSocket {
    /// Mapping key used by the job to refer to this socket.
    pub alias: String,
    /// Fully qualified path to the data, e.g. `abfss://...` or `s3a://...`.
    pub data_path: String,
    /// Data format, e.g. `csv`, `json`, `delta`.
    pub data_format: String,
}

impl JobSocket {
    pub fn new(
        alias: impl Into<String>,
        data_path: impl Into<String>,
        data_format: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            data_path: data_path.into(),
            data_format: data_format.into(),
        }
    }
}

/// Caller-facing parameters of a job run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobParams {
    pub client_tag: ClientTag,
    #[serde(default)]
    pub extra_arguments: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub project_inputs: Vec<JobSocket>,
    #[serde(default)]
    pub project_outputs: Vec<JobSocket>,
    #[serde(default)]
    pub expected_parallelism: Option<u32>,
}

impl JobParams {
    pub fn new(client_tag: impl Into<ClientTag>) -> Self {
        Self {
            client_tag: client_tag.into(),
            ..Default::default()
        }
    }

    pub fn with_input(mut self, socket: JobSocket) -> Self {
        self.project_inputs.push(socket);
        self
    }

    pub fn with_output(mut self, socket: JobSocket) -> Self {
        self.project_outputs.push(socket);
        self
    }

    pub fn with_argument(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra_arguments.insert(key.into(), value);
        self
    }

    pub fn with_parallelism(mut self, parallelism: u32) -> Self {
        self.expected_parallelism = Some(parallelism);
        self
    }
}

/// Body of `POST /job/submit/{name}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub inputs: Vec<JobSocket>,
    pub outputs: Vec<JobSocket>,
    pub extra_args: HashMap<String, serde_json::Value>,
    pub client_tag: ClientTag,
    pub expected_parallelism: Option<u32>,
}

impl From<JobParams> for JobRequest {
    fn from(p: JobParams) -> Self {
        Self {
            inputs: p.project_inputs,
            outputs: p.project_outputs,
            extra_args: p.extra_arguments,
            client_tag: p.client_tag,
            expected_parallelism: p.expected_parallelism,
        }
    }
}
