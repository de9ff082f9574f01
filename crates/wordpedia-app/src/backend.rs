use std::sync::Arc;
use std::time::Duration;

use wordpedia_config::Config;
use wordpedia_gemini::GeminiClient;
use wordpedia_ngram::{NgramClient, UsageFrequency};
use wordpedia_provider::{EmbeddingProvider, LexicalGenerator};
use wordpedia_types::Credential;

/// Collaborators a session talks to
pub struct Backend {
    pub generator: Arc<dyn LexicalGenerator>,
    pub embedder: Arc<dyn EmbeddingProvider>,
    /// None when usage lookups are disabled
    pub frequency: Option<Arc<dyn UsageFrequency>>,
}

/// Builds the collaborators for a submitted credential
pub trait BackendFactory: Send + Sync {
    fn build(&self, credential: &Credential, config: &Config) -> anyhow::Result<Backend>;
}

/// Gemini for generation and embeddings, Google Books for usage
pub struct GeminiBackendFactory;

impl BackendFactory for GeminiBackendFactory {
    fn build(&self, credential: &Credential, config: &Config) -> anyhow::Result<Backend> {
        let timeout = Duration::from_secs(config.timeout_seconds);

        let gemini = Arc::new(GeminiClient::new(
            credential.expose().to_string(),
            &config.generator,
            timeout,
        )?);

        let frequency: Option<Arc<dyn UsageFrequency>> = if config.ngram.enabled {
            Some(Arc::new(NgramClient::new(config.ngram.clone(), timeout)?))
        } else {
            tracing::info!("Usage frequency lookups disabled");
            None
        };

        Ok(Backend {
            generator: gemini.clone(),
            embedder: gemini,
            frequency,
        })
    }
}
