/// Embedding vector as returned by a provider
pub type Embedding = Vec<f32>;

/// Text generation provider interface
#[async_trait::async_trait]
pub trait LexicalGenerator: Send + Sync {
    /// Generate free text for a prompt
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Embedding provider interface
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Map text to a fixed-dimension vector
    async fn embed(&self, text: &str) -> Result<Embedding, ProviderError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Provider returned an empty response")]
    EmptyResponse,
}
