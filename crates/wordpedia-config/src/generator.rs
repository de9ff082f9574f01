use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-lite".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-004".to_string()
}

/// Generative language service used for text generation and embeddings
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Left empty to be asked for at startup
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
            embedding_model: default_embedding_model(),
        }
    }
}
