//! Error types for billing quotes and submissions

use thiserror::Error;

/// Result type alias for billing operations
pub type Result<T> = std::result::Result<T, BillingError>;

/// Main error type for billing operations
#[derive(Error, Debug)]
pub enum BillingError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A form input failed its constraints; nothing was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// The billing server refused the submission. The message is shown verbatim.
    #[error("{0}")]
    Rejected(String),

    /// Network errors
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// The payment widget was closed before it produced a token
    #[error("Payment cancelled: {0}")]
    PaymentCancelled(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
