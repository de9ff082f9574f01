mod client;

pub use client::NgramClient;

use anyhow::Result;
use wordpedia_types::FrequencySeries;

/// Usage-frequency source for a single word
#[async_trait::async_trait]
pub trait UsageFrequency: Send + Sync {
    /// `Ok(None)` when the corpus has no data for the word
    async fn lookup(&self, word: &str) -> Result<Option<FrequencySeries>>;
}

#[async_trait::async_trait]
impl UsageFrequency for NgramClient {
    async fn lookup(&self, word: &str) -> Result<Option<FrequencySeries>> {
        self.fetch(word).await
    }
}
