//! Error types for the Hub API client.
//!
//! This module contains error types used throughout the crate for
//! configuration and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use hub_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while building the client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide a valid Hub API client ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid Hub API client secret.")]
    EmptyClientSecret,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http(s) URL with a host (e.g., 'https://hub.staging.nuvias-uc.com/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A path could not be resolved against the base URL.
    #[error("Cannot resolve path '{path}' against the base URL.")]
    InvalidPath {
        /// The path that failed to resolve.
        path: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Missing environment variable '{name}'.")]
    MissingEnvVar {
        /// The name of the variable.
        name: &'static str,
    },

    /// The request timeout could not be parsed.
    #[error("Invalid request timeout '{value}'. Expected a whole number of seconds greater than zero.")]
    InvalidTimeout {
        /// The value that was provided.
        value: String,
    },
}
