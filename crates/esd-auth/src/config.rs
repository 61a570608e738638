#[derive(Debug, Clone)]
pub struct BoxerTokenConfig {
    /// Base URL of the token endpoint, e.g. `https://boxer.example.com`.
    pub token_url: String,
    /// Identity provider name as known to Boxer, e.g. `azuread`.
    pub provider: String,
}

impl BoxerTokenConfig {
    pub fn new(token_url: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            token_url: token_url.into(),
            provider: provider.into(),
        }
    }
}
