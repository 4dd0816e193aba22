//! Issuing a generation request and normalizing the outcome.

use serde::Serialize;

use crate::console::rule;
use crate::ports::{GeneratedImage, GenerationRequest, ImageGenerator};

/// Outcome of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerationResult {
    /// The API produced images.
    Success {
        /// Generated images in API order.
        images: Vec<GeneratedImage>,
        /// Unix timestamp reported by the API.
        created: i64,
    },
    /// The call failed; nothing was generated.
    Failure {
        /// Human-readable reason.
        error: String,
    },
}

impl GenerationResult {
    /// Whether images were generated.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Generated images; empty on failure.
    #[must_use]
    pub fn images(&self) -> &[GeneratedImage] {
        match self {
            Self::Success { images, .. } => images,
            Self::Failure { .. } => &[],
        }
    }
}

/// Send one generation request and report it on the console.
///
/// Failures from the generator are caught and returned as
/// [`GenerationResult::Failure`]; they are never propagated. Nothing is retried.
pub async fn generate_image(
    generator: &dyn ImageGenerator,
    request: &GenerationRequest,
) -> GenerationResult {
    println!("Generating image with prompt: '{}'", request.prompt);
    println!(
        "Parameters: size={}, quality={}, n={}\n",
        request.size, request.quality, request.count
    );
    tracing::info!(model = %request.model, "issuing generation request");

    let response = match generator.generate(request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "generation failed");
            println!("✗ Error generating image: {e}");
            return GenerationResult::Failure { error: e.to_string() };
        }
    };

    println!("{}", rule('=', 60));
    println!("RAW API RESPONSE (JSON):");
    println!("{}", rule('=', 60));
    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::warn!("could not render response as JSON: {e}"),
    }
    println!("{}\n", rule('=', 60));

    println!("✓ Successfully generated {} image(s)", response.data.len());
    GenerationResult::Success { images: response.data, created: response.created }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DemoError;
    use crate::params::{ImageQuality, ImageSize};
    use crate::ports::image_generator::{GenerateFuture, GenerationResponse};

    struct CannedGenerator(fn() -> Result<GenerationResponse, DemoError>);

    impl ImageGenerator for CannedGenerator {
        fn generate(&self, _request: &GenerationRequest) -> GenerateFuture<'_> {
            let result = (self.0)();
            Box::pin(async move { result })
        }
    }

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest {
            model: "dall-e-3".into(),
            prompt: prompt.into(),
            size: ImageSize::Square,
            quality: ImageQuality::Standard,
            count: 1,
        }
    }

    #[tokio::test]
    async fn single_image_is_passed_through() {
        let generator = CannedGenerator(|| {
            Ok(GenerationResponse {
                created: 1_700_000_123,
                data: vec![GeneratedImage {
                    url: Some("https://cdn.example/img-1.png".into()),
                    revised_prompt: Some("A detailed test scene".into()),
                }],
            })
        });

        let result = generate_image(&generator, &request("a test scene")).await;

        assert!(result.is_success());
        assert_eq!(result.images().len(), 1);
        assert_eq!(result.images()[0].url.as_deref(), Some("https://cdn.example/img-1.png"));
        assert_eq!(result.images()[0].revised_prompt.as_deref(), Some("A detailed test scene"));
    }

    #[tokio::test]
    async fn minimal_response_end_to_end() {
        let generator = CannedGenerator(|| {
            let body = r#"{"created": 1700000000, "data": [{"url": "http://x/a.png"}]}"#;
            Ok(serde_json::from_str(body).unwrap())
        });

        let result = generate_image(&generator, &request("test")).await;

        assert_eq!(
            result,
            GenerationResult::Success {
                images: vec![GeneratedImage {
                    url: Some("http://x/a.png".into()),
                    revised_prompt: None,
                }],
                created: 1_700_000_000,
            }
        );
    }

    #[tokio::test]
    async fn generator_error_becomes_failure() {
        let generator = CannedGenerator(|| {
            Err(DemoError::Api { status: 400, message: "Invalid size".into() })
        });

        let result = generate_image(&generator, &request("test")).await;

        assert!(!result.is_success());
        assert!(result.images().is_empty());
        assert_eq!(
            result,
            GenerationResult::Failure { error: "API error (400): Invalid size".into() }
        );
    }
}
