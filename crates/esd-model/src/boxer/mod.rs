use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("invalid claim '{0}' (expected <type>:<value>)")]
    Malformed(String),
}

/// Mutation applied to a user's claim set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimOperation {
    Insert,
    Delete,
}

/// Body of `PATCH /claim/{provider}/{user}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimPayload {
    pub operation: ClaimOperation,
    pub claims: BTreeMap<String, String>,
}

impl ClaimPayload {
    /// Build a payload from `type:value` strings, e.g. `"api.example.com/.*:.*"`.
    ///
    /// The input is split at the first `:`. A later entry with the same type wins.
    pub fn from_claims<I, S>(operation: ClaimOperation, claims: I) -> Result<Self, ClaimError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = BTreeMap::new();
        for raw in claims {
            let raw = raw.as_ref();
            let (kind, value) = raw
                .split_once(':')
                .filter(|(kind, _)| !kind.is_empty())
                .ok_or_else(|| ClaimError::Malformed(raw.to_string()))?;
            out.insert(kind.to_string(), value.to_string());
        }
        Ok(Self {
            operation,
            claims: out,
        })
    }
}
