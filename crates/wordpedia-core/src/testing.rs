//! Stub collaborators for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use wordpedia_provider::{
    Embedding, EmbeddingProvider, LexicalGenerator, ProviderError, ProviderMetadata,
};

fn stub_metadata() -> ProviderMetadata {
    ProviderMetadata {
        name: "stub".to_string(),
        model: "stub".to_string(),
    }
}

/// Answers every prompt with the same text and records the prompts
pub struct StubGenerator {
    response: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn new(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LexicalGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response
            .clone()
            .ok_or(ProviderError::AuthenticationError)
    }

    fn metadata(&self) -> ProviderMetadata {
        stub_metadata()
    }
}

/// Fixed vectors per word
#[derive(Default)]
pub struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl StubEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, word: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(word.to_string(), vector);
        self
    }

    pub fn failing_on(mut self, word: &str) -> Self {
        self.failing.insert(word.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(text) {
            return Err(ProviderError::ApiError(format!("no embedding for {text}")));
        }
        self.vectors
            .get(text)
            .cloned()
            .ok_or(ProviderError::EmptyResponse)
    }

    fn metadata(&self) -> ProviderMetadata {
        stub_metadata()
    }
}

/// Unit vector at `similarity` to `[1, 0]`
pub fn at(similarity: f32) -> Vec<f32> {
    vec![similarity, (1.0 - similarity * similarity).sqrt()]
}
