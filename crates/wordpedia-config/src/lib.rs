use std::env;

use serde::{Deserialize, Serialize};

use self::generator::GeneratorConfig;
use self::ngram::NgramConfig;
use self::pipeline::PipelineConfig;
use self::ui::UiConfig;

pub mod generator;
pub mod ngram;
pub mod pipeline;
pub mod ui;

pub use pipeline::EmbeddingFailurePolicy;

fn default_timeout_seconds() -> u64 {
    30
}

fn default_channel_capacity() -> usize {
    64
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub ngram: NgramConfig,
    pub pipeline: PipelineConfig,
    pub ui: UiConfig,

    /// Per-request HTTP timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Capacity of the channels between the UI and the event loop
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    /// Apply overrides from a key lookup. Unparsable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.generator.api_key = key.trim().to_string();
        }

        if let Some(url) = lookup("GEMINI_API_URL") {
            self.generator.api_url = url;
        }

        if let Some(url) = lookup("NGRAM_API_URL") {
            self.ngram.api_url = url;
        }

        if let Some(timeout) = lookup("WORDPEDIA_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.timeout_seconds = timeout;
        }

        if let Some(concurrency) = lookup("WORDPEDIA_EMBEDDING_CONCURRENCY")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
        {
            self.pipeline.embedding_concurrency = concurrency;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            generator: GeneratorConfig::default(),
            ngram: NgramConfig::default(),
            pipeline: PipelineConfig::default(),
            ui: UiConfig::default(),

            timeout_seconds: default_timeout_seconds(),
            channel_capacity: default_channel_capacity(),
        }
    }
}
