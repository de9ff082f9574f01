use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wordpedia_config::generator::GeneratorConfig;
use wordpedia_provider::{
    Embedding, EmbeddingProvider, LexicalGenerator, ProviderError, ProviderMetadata,
};

use crate::wire::{
    Content, EmbedRequest, EmbedResponse, ErrorEnvelope, GenerateRequest, GenerateResponse,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini text generation and embedding client
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    embedding_model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        config: &GeneratorConfig,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            model: bare_model(&config.model),
            embedding_model: bare_model(&config.embedding_model),
        })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.api_url, model, method)
    }

    async fn post<B, R>(&self, url: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        if self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError);
        }

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("Gemini request to {} failed with {}", url, status);
            return Err(status_error(status, &body));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl LexicalGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            contents: vec![Content::text(prompt)],
        };

        let response: GenerateResponse = self
            .post(&self.endpoint(&self.model, "generateContent"), &request)
            .await?;

        response.text().ok_or(ProviderError::EmptyResponse)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            model: self.model.clone(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiClient {
    async fn embed(&self, text: &str) -> Result<Embedding, ProviderError> {
        let request = EmbedRequest {
            model: format!("models/{}", self.embedding_model),
            content: Content::text(text),
        };

        let response: EmbedResponse = self
            .post(&self.endpoint(&self.embedding_model, "embedContent"), &request)
            .await?;

        match response.embedding {
            Some(embedding) if !embedding.values.is_empty() => Ok(embedding.values),
            _ => Err(ProviderError::EmptyResponse),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            model: self.embedding_model.clone(),
        }
    }
}

/// Accept both `gemini-x` and `models/gemini-x`
fn bare_model(model: &str) -> String {
    model.trim().trim_start_matches("models/").to_string()
}

fn status_error(status: StatusCode, body: &str) -> ProviderError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return ProviderError::AuthenticationError;
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return ProviderError::RateLimitExceeded;
    }

    // Gemini reports a bad key as 400 INVALID_ARGUMENT
    if status == StatusCode::BAD_REQUEST && body.contains("API_KEY_INVALID") {
        return ProviderError::AuthenticationError;
    }

    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if envelope.error.status.is_empty() => envelope.error.message,
        Ok(envelope) => format!("{} ({})", envelope.error.message, envelope.error.status),
        Err(_) => body.trim().to_string(),
    };

    ProviderError::ApiError(format!("HTTP {}: {}", status, message))
}
