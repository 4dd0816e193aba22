//! Unified error type for dalle-demo.

use thiserror::Error;

/// Errors that can occur while generating or downloading images.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The image API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// A successful response whose body could not be decoded.
    #[error("Invalid API response: {0}")]
    Decode(String),

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A replayed failure, or a recorded interaction that could not be served.
    #[error("{0}")]
    Replay(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No API key in the environment.
    #[error("{env_var} environment variable not set")]
    MissingApiKey {
        /// The environment variable name.
        env_var: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_message_names_variable() {
        let err = DemoError::MissingApiKey { env_var: "OPENAI_API_KEY".into() };
        assert_eq!(err.to_string(), "OPENAI_API_KEY environment variable not set");
    }

    #[test]
    fn api_error_display() {
        let err = DemoError::Api { status: 429, message: "Rate limit reached".into() };
        assert_eq!(err.to_string(), "API error (429): Rate limit reached");
    }

    #[test]
    fn decode_error_is_not_reported_as_api_status() {
        let err = DemoError::Decode("Failed to parse response: EOF".into());
        assert_eq!(err.to_string(), "Invalid API response: Failed to parse response: EOF");
    }

    #[test]
    fn replayed_error_keeps_recorded_message() {
        let err = DemoError::Replay("API error (401): Incorrect API key provided".into());
        assert_eq!(err.to_string(), "API error (401): Incorrect API key provided");
    }
}
