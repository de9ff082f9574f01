//! Stub backend for driving the event loop without the network.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;
use wordpedia_config::Config;
use wordpedia_ngram::UsageFrequency;
use wordpedia_provider::{
    Embedding, EmbeddingProvider, LexicalGenerator, ProviderError, ProviderMetadata,
};
use wordpedia_types::{AppEvent, Credential, FrequencyPoint, FrequencySeries};

use crate::backend::{Backend, BackendFactory};
use crate::events::event_loop;
use crate::state::AppState;

pub const VALID_KEY: &str = "valid-key";

fn metadata() -> ProviderMetadata {
    ProviderMetadata {
        name: "stub".to_string(),
        model: "stub".to_string(),
    }
}

pub struct StubGenerator {
    authorized: bool,
    candidates: String,
    fail_definition: bool,
}

#[async_trait]
impl LexicalGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if !self.authorized {
            return Err(ProviderError::AuthenticationError);
        }
        if prompt.contains("STRICT JSON") {
            Ok(self.candidates.clone())
        } else if prompt.contains("wordpedia") {
            if self.fail_definition {
                return Err(ProviderError::RateLimitExceeded);
            }
            Ok("1. Feeling or showing pleasure.\n2. From Middle English hap.".to_string())
        } else {
            Ok("Hi!".to_string())
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        metadata()
    }
}

pub struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
}

#[async_trait]
impl EmbeddingProvider for StubEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, ProviderError> {
        self.vectors
            .get(text)
            .cloned()
            .ok_or(ProviderError::EmptyResponse)
    }

    fn metadata(&self) -> ProviderMetadata {
        metadata()
    }
}

pub struct StubFrequency {
    series: Option<FrequencySeries>,
}

#[async_trait]
impl UsageFrequency for StubFrequency {
    async fn lookup(&self, _word: &str) -> anyhow::Result<Option<FrequencySeries>> {
        Ok(self.series.clone())
    }
}

/// Unit vector at `similarity` to `[1, 0]`
fn at(similarity: f32) -> Vec<f32> {
    vec![similarity, (1.0 - similarity * similarity).sqrt()]
}

pub fn happy_series() -> FrequencySeries {
    FrequencySeries {
        word: "happy".to_string(),
        points: (1800..=2019)
            .map(|year| FrequencyPoint {
                year,
                frequency: f64::from(year - 1800) * 1e-8,
            })
            .collect(),
    }
}

/// Accepts only `VALID_KEY` and knows the word "happy"
pub struct StubFactory {
    pub builds: AtomicUsize,
    pub candidates: String,
    pub frequency: Option<Option<FrequencySeries>>,
    pub fail_definition: bool,
}

impl Default for StubFactory {
    fn default() -> Self {
        Self {
            builds: AtomicUsize::new(0),
            candidates: r#"{"synonyms": ["joyful", "glad"], "antonyms": ["unhappy", "sad"]}"#
                .to_string(),
            frequency: Some(Some(happy_series())),
            fail_definition: false,
        }
    }
}

impl BackendFactory for StubFactory {
    fn build(&self, credential: &Credential, _config: &Config) -> anyhow::Result<Backend> {
        self.builds.fetch_add(1, Ordering::SeqCst);

        let vectors = [
            ("happy", at(1.0)),
            ("glad", at(0.9)),
            ("joyful", at(0.8)),
            ("sad", at(-0.7)),
            ("unhappy", at(-0.85)),
        ]
        .into_iter()
        .map(|(word, vector)| (word.to_string(), vector))
        .collect();

        let frequency = self.frequency.clone().map(|series| {
            Arc::new(StubFrequency { series }) as Arc<dyn UsageFrequency>
        });

        Ok(Backend {
            generator: Arc::new(StubGenerator {
                authorized: credential.expose() == VALID_KEY,
                candidates: self.candidates.clone(),
                fail_definition: self.fail_definition,
            }),
            embedder: Arc::new(StubEmbedder { vectors }),
            frequency,
        })
    }
}

/// A running event loop and both ends of its channels
pub struct Harness {
    pub to_app: AsyncSender<AppEvent>,
    pub from_app: AsyncReceiver<AppEvent>,
    pub handle: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    pub async fn start(factory: Arc<StubFactory>) -> Self {
        let (to_app, ui_to_app_rx) = kanal::bounded_async(16);
        let (app_to_ui_tx, from_app) = kanal::bounded_async(16);
        let state = Arc::new(AppState::new(Config::default()));

        let handle = tokio::spawn(event_loop(state, ui_to_app_rx, app_to_ui_tx, factory));

        let harness = Self {
            to_app,
            from_app,
            handle,
        };
        assert!(matches!(harness.next().await, AppEvent::BackendReady));
        harness
    }

    pub async fn next(&self) -> AppEvent {
        tokio::time::timeout(Duration::from_secs(5), self.from_app.recv())
            .await
            .expect("timed out waiting for the event loop")
            .expect("event loop channel closed")
    }

    pub async fn send(&self, event: AppEvent) {
        self.to_app.send(event).await.unwrap();
    }

    /// Events up to and including `LookupFinished`
    pub async fn lookup(&self, word: &str) -> Vec<AppEvent> {
        self.send(AppEvent::Lookup(word.to_string())).await;

        let mut events = Vec::new();
        loop {
            let event = self.next().await;
            let done = matches!(event, AppEvent::LookupFinished(_));
            events.push(event);
            if done {
                return events;
            }
        }
    }

    pub async fn accept(&self) {
        self.send(AppEvent::CredentialSubmitted(Credential::new(VALID_KEY)))
            .await;
        assert!(matches!(self.next().await, AppEvent::CredentialAccepted));
    }
}
