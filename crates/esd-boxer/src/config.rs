#[derive(Debug, Clone)]
pub struct BoxerConfig {
    /// Base URL of the claim management API.
    pub claim_url: String,
}

impl BoxerConfig {
    pub fn new(claim_url: impl Into<String>) -> Self {
        Self {
            claim_url: claim_url.into(),
        }
    }
}
