//! # Payment Error Types
//!
//! Typed error handling for the checkout function.
//! All checkout operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (malformed body, empty cart, bad item)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Price cannot be expressed in minor currency units
    #[error("Invalid price: {message}")]
    InvalidPrice { message: String },

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Short machine-readable tag, recorded on log entries.
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentError::Configuration(_) => "configuration",
            PaymentError::InvalidRequest(_) => "invalid_request",
            PaymentError::InvalidPrice { .. } => "invalid_price",
            PaymentError::ProviderError { .. } => "provider",
            PaymentError::NetworkError(_) => "network",
            PaymentError::Serialization(_) => "serialization",
        }
    }

    /// True for failures caused by the inbound payload rather than the provider.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PaymentError::InvalidRequest(_) | PaymentError::InvalidPrice { .. }
        )
    }
}

/// Result type alias for checkout operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors() {
        assert!(PaymentError::InvalidRequest("empty cart".into()).is_input_error());
        assert!(PaymentError::InvalidPrice {
            message: "negative".into()
        }
        .is_input_error());
        assert!(!PaymentError::NetworkError("timeout".into()).is_input_error());
        assert!(!PaymentError::ProviderError {
            provider: "stripe".into(),
            message: "No such price".into()
        }
        .is_input_error());
    }

    #[test]
    fn test_display_carries_detail() {
        let err = PaymentError::ProviderError {
            provider: "stripe".into(),
            message: "Invalid API Key provided".into(),
        };
        assert_eq!(
            err.to_string(),
            "Provider error [stripe]: Invalid API Key provided"
        );
        assert_eq!(err.kind(), "provider");
    }
}
