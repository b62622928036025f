//! Embedding client. The single point where resume and job text is turned
//! into vectors; every other module works with vectors it is given.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const MAX_ATTEMPTS: u32 = 3;
const RETRY_BASE_DELAY_MS: u64 = 500;
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned an empty vector")]
    EmptyResponse,
}

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

/// Talks to a JSON embedding endpoint: POST `{"input": text}`, expects
/// `{"embedding": [..]}` back. Retries 429 and 5xx with linear backoff;
/// other failures surface immediately.
pub struct HttpEmbeddingClient {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpEmbeddingClient {
    pub fn new(url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            url,
            api_key,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let body = EmbedRequest { input: text };
        let mut last_error: Option<EmbeddingError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                let delay =
                    std::time::Duration::from_millis(RETRY_BASE_DELAY_MS * u64::from(attempt));
                warn!(
                    "embedding call attempt {} failed, retrying after {}ms",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.post(&self.url).json(&body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(EmbeddingError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if status.as_u16() == 429 || status.is_server_error() {
                let message = response.text().await.unwrap_or_default();
                warn!("embedding API returned {}: {}", status, message);
                last_error = Some(EmbeddingError::Api {
                    status: status.as_u16(),
                    message,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(EmbeddingError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: EmbedResponse = response.json().await?;
            if parsed.embedding.is_empty() {
                return Err(EmbeddingError::EmptyResponse);
            }
            debug!(dims = parsed.embedding.len(), "embedding fetched");
            return Ok(parsed.embedding);
        }

        Err(last_error.unwrap_or(EmbeddingError::EmptyResponse))
    }
}
