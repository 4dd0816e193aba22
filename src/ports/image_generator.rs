//! Image generator port for the Images API.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::DemoError;
use crate::params::{ImageQuality, ImageSize};

/// A request to generate images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The resolved model identifier (e.g., `"dall-e-3"`).
    pub model: String,
    /// The text prompt describing the desired image.
    pub prompt: String,
    /// Output resolution.
    pub size: ImageSize,
    /// Rendering quality.
    pub quality: ImageQuality,
    /// Number of images to generate.
    pub count: u32,
}

/// A single generated image as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Where the image can be fetched from. Models that return inline
    /// image data instead leave this out.
    #[serde(default)]
    pub url: Option<String>,
    /// The prompt as rewritten by the model, when it chose to.
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

/// Structured API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Unix timestamp of the generation.
    pub created: i64,
    /// The generated images, in API order.
    pub data: Vec<GeneratedImage>,
}

/// Boxed future type returned by [`ImageGenerator::generate`].
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<GenerationResponse, DemoError>> + Send + 'a>>;

/// Generates images from text prompts via an external API.
pub trait ImageGenerator: Send + Sync {
    /// Generate images for the given request.
    fn generate(&self, request: &GenerationRequest) -> GenerateFuture<'_>;
}
