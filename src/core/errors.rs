//! Custom error types for the translation action

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Transport-level failure during the request (DNS, refused, timeout)
    #[error("Network error: {message}")]
    NetworkError {
        /// Description of the underlying transport failure
        message: String,
    },

    /// The endpoint answered with a non-2xx status
    #[error("Translation endpoint returned status {status}")]
    EndpointStatus {
        /// HTTP status code of the response
        status: u16,
    },

    /// Response bytes are not valid UTF-8
    #[error("Response decoding failed: {message}")]
    DecodingError {
        /// Description of the decoding failure
        message: String,
    },

    /// Configuration value is present but unusable
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// Required configuration value is absent
    #[error("Missing configuration field: {field}")]
    MissingField {
        /// Name of the absent field or environment variable
        field: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslateError>;
