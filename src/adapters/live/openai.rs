//! Live adapter for the `OpenAI` Images API.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::DemoError;
use crate::params::{ImageQuality, ImageSize};
use crate::ports::image_generator::{
    GenerateFuture, GenerationRequest, GenerationResponse, ImageGenerator,
};

/// Default API root; `/images/generations` is appended.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Live `OpenAI` image generator that calls the Images API.
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiGenerator {
    /// Create a new generator with the given API key and API root.
    #[must_use]
    pub fn new(api_key: String, base_url: &str) -> Self {
        let endpoint = format!("{}/images/generations", base_url.trim_end_matches('/'));
        Self { client: Client::new(), api_key, endpoint }
    }
}

impl ImageGenerator for OpenAiGenerator {
    fn generate(&self, request: &GenerationRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let body = OpenAiRequest {
                model: &request.model,
                prompt: &request.prompt,
                size: request.size,
                quality: request.quality,
                n: request.count,
            };

            tracing::debug!(endpoint = %self.endpoint, model = %request.model, "sending generation request");

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await?;

            let status = response.status();
            let response_text = response.text().await?;
            tracing::debug!(status = status.as_u16(), bytes = response_text.len(), "generation response");

            if !status.is_success() {
                return Err(DemoError::Api {
                    status: status.as_u16(),
                    message: error_message(&response_text),
                });
            }

            serde_json::from_str::<GenerationResponse>(&response_text)
                .map_err(|e| DemoError::Decode(format!("Failed to parse response: {e}")))
        })
    }
}

/// Pull `error.message` out of an API error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<OpenAiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

// --- OpenAI API wire types ---

#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: ImageSize,
    quality: ImageQuality,
    n: u32,
}

#[derive(Deserialize)]
struct OpenAiErrorBody {
    error: OpenAiErrorDetail,
}

#[derive(Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}
