#[derive(Debug, Clone)]
pub struct SparkConfig {
    /// Base URL of the job backend, e.g. `https://beast.example.com`.
    pub base_url: String,
}

impl SparkConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
