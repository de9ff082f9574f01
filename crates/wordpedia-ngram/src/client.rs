use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use wordpedia_config::ngram::NgramConfig;
use wordpedia_types::{FrequencyPoint, FrequencySeries};

/// Client for the Google Books n-gram JSON endpoint
#[derive(Clone)]
pub struct NgramClient {
    config: NgramConfig,
    client: reqwest::Client,
}

impl NgramClient {
    pub fn new(config: NgramConfig, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build n-gram HTTP client")?;

        Ok(Self { config, client })
    }

    /// Yearly frequencies of `word`, or `None` if the service has no
    /// complete series for it
    pub async fn fetch(&self, word: &str) -> Result<Option<FrequencySeries>> {
        let params = [
            ("content", word.to_string()),
            ("year_start", self.config.year_start.to_string()),
            ("year_end", self.config.year_end.to_string()),
            ("corpus", self.config.corpus.to_string()),
            ("smoothing", self.config.smoothing.to_string()),
        ];

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&params)
            .send()
            .await
            .context("Failed to send request to the n-gram service")?;

        if response.status() != reqwest::StatusCode::OK {
            tracing::debug!("n-gram service returned {} for '{}'", response.status(), word);
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .context("Failed to read n-gram response")?;

        Ok(self.parse_series(word, &body))
    }

    fn parse_series(&self, word: &str, body: &str) -> Option<FrequencySeries> {
        let entries: Vec<NgramEntry> = match serde_json::from_str(body) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Unexpected n-gram payload for '{}': {}", word, e);
                return None;
            }
        };

        let timeseries = entries.into_iter().next()?.timeseries?;

        let expected = self.config.expected_points();
        if timeseries.len() != expected {
            tracing::debug!(
                "n-gram series for '{}' has {} values, expected {}",
                word,
                timeseries.len(),
                expected
            );
            return None;
        }

        let points = (self.config.year_start..=self.config.year_end)
            .zip(timeseries)
            .map(|(year, frequency)| FrequencyPoint { year, frequency })
            .collect();

        Some(FrequencySeries {
            word: word.to_string(),
            points,
        })
    }
}

#[derive(Deserialize)]
struct NgramEntry {
    #[serde(default)]
    timeseries: Option<Vec<f64>>,
}
