use serde::{Deserialize, Serialize};

fn default_candidate_count() -> usize {
    10
}

fn default_embedding_concurrency() -> usize {
    4
}

/// What a lookup does when a candidate's embedding or score fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingFailurePolicy {
    /// Fail the whole lookup
    #[default]
    Strict,
    /// Drop the candidate and keep going
    Lenient,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PipelineConfig {
    /// Synonyms and antonyms requested from the generator, each
    #[serde(default = "default_candidate_count")]
    pub candidate_count: usize,
    /// Embedding requests in flight at once, 1 runs them one by one
    #[serde(default = "default_embedding_concurrency")]
    pub embedding_concurrency: usize,
    #[serde(default)]
    pub failure_policy: EmbeddingFailurePolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            candidate_count: default_candidate_count(),
            embedding_concurrency: default_embedding_concurrency(),
            failure_policy: EmbeddingFailurePolicy::default(),
        }
    }
}
