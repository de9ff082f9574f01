use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://books.google.com/ngrams/json".to_string()
}

fn default_corpus() -> u32 {
    26
}

fn default_year_start() -> u16 {
    1800
}

fn default_year_end() -> u16 {
    2019
}

fn default_smoothing() -> u32 {
    7
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NgramConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Corpus id, 26 is English 2019
    #[serde(default = "default_corpus")]
    pub corpus: u32,
    #[serde(default = "default_year_start")]
    pub year_start: u16,
    #[serde(default = "default_year_end")]
    pub year_end: u16,
    #[serde(default = "default_smoothing")]
    pub smoothing: u32,
}

impl NgramConfig {
    /// Number of yearly values a complete series has, both ends inclusive
    pub fn expected_points(&self) -> usize {
        if self.year_end < self.year_start {
            return 0;
        }
        usize::from(self.year_end - self.year_start) + 1
    }
}

impl Default for NgramConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            corpus: default_corpus(),
            year_start: default_year_start(),
            year_end: default_year_end(),
            smoothing: default_smoothing(),
        }
    }
}
