//! Model name resolution.

/// Model used when neither the CLI nor the config file names one.
pub const DEFAULT_MODEL: &str = "dall-e-3";

/// Short name aliases for the image models.
const ALIASES: &[(&str, &str)] = &[("dalle3", "dall-e-3"), ("dalle2", "dall-e-2")];

/// Resolve a model name (alias or exact) to the full model identifier.
#[must_use]
pub fn resolve_model(name: &str) -> String {
    for &(alias, full) in ALIASES {
        if name == alias {
            return full.to_string();
        }
    }
    name.to_string()
}
