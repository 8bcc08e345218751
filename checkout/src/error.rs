//! Error types for the checkout flow

use thiserror::Error;

/// Errors raised while preparing a hosted-checkout request
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Buyer email does not look like an address
    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),

    /// Shipping address or city left blank
    #[error("Missing shipping address or city")]
    MissingShippingAddress,

    /// A gateway setting is unusable
    #[error("Invalid config field {field}: {reason}")]
    InvalidConfig {
        /// Name of the offending setting
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Reference code cannot be embedded in a signature
    #[error("Invalid reference code: {0:?}")]
    InvalidReference(String),

    /// Unit price times quantity does not fit
    #[error("Amount overflow")]
    AmountOverflow,

    /// Config JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckoutError::InvalidEmail("nobody".to_string());
        assert!(err.to_string().contains("nobody"));

        let err = CheckoutError::MissingShippingAddress;
        assert_eq!(err.to_string(), "Missing shipping address or city");

        let err = CheckoutError::InvalidConfig {
            field: "currency",
            reason: "must be three uppercase letters",
        };
        assert!(err.to_string().contains("currency"));
        assert!(err.to_string().contains("three uppercase"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CheckoutError = json_err.into();
        match err {
            CheckoutError::Json(e) => assert!(!e.to_string().is_empty()),
            _ => panic!("Expected Json"),
        }
    }
}
