use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ClientTag;

/// Body of `POST /algorithm/{version}/run/{name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlgorithmPayload {
    pub algorithm_parameters: serde_json::Map<String, serde_json::Value>,
    pub algorithm_name: String,
    pub custom_configuration: CustomConfiguration,
    pub tag: ClientTag,
}

/// Caller-facing parameters of an algorithm run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunRequest {
    pub parameters: serde_json::Map<String, serde_json::Value>,
    pub custom_configuration: CustomConfiguration,
    pub tag: ClientTag,
}

impl RunRequest {
    pub fn new(tag: impl Into<ClientTag>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }

    pub fn with_configuration(mut self, configuration: CustomConfiguration) -> Self {
        self.custom_configuration = configuration;
        self
    }

    pub fn into_payload(self, algorithm_name: impl Into<String>) -> AlgorithmPayload {
        AlgorithmPayload {
            algorithm_parameters: self.parameters,
            algorithm_name: algorithm_name.into(),
            custom_configuration: self.custom_configuration,
            tag: self.tag,
        }
    }
}

/// Per-run overrides of the deployed algorithm configuration.
///
/// Unset fields are omitted from the wire so the scheduler keeps its defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_retries: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<ConfigurationEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<ConfigurationEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workgroup: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub additional_workgroups: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitoring_parameters: Vec<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom_resources: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speculative_attempts: Option<u32>,
}

/// How a [`ConfigurationEntry`] value is interpreted by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigurationValueType {
    /// Value is used as-is.
    #[default]
    Plain,
    /// Value references a key in the algorithm's secret store.
    RelativeReference,
}

/// Named environment variable or argument passed to an algorithm container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigurationEntry {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ConfigurationValueType>,
}

impl ConfigurationEntry {
    pub fn plain(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            value_type: Some(ConfigurationValueType::Plain),
        }
    }

    pub fn reference(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            value_type: Some(ConfigurationValueType::RelativeReference),
        }
    }
}

/// Result an algorithm reports back through the receiver endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlgorithmRunResult {
    pub cause: String,
    pub message: String,
    pub sas_uri: String,
}
