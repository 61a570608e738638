#[derive(Debug, Clone)]
pub struct CrystalConfig {
    /// Base URL of the scheduler that accepts and tracks runs.
    pub scheduler_url: String,
    /// Base URL of the receiver that collects run results.
    pub receiver_url: String,
    /// API version segment, e.g. `v1.2`.
    pub api_version: String,
}

impl CrystalConfig {
    pub fn new(scheduler_url: impl Into<String>, api_version: impl Into<String>) -> Self {
        let scheduler_url = scheduler_url.into();
        Self {
            receiver_url: scheduler_url.clone(),
            scheduler_url,
            api_version: api_version.into(),
        }
    }

    pub fn with_receiver(mut self, receiver_url: impl Into<String>) -> Self {
        self.receiver_url = receiver_url.into();
        self
    }
}
