//! Error Types

use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Message shown when the payment provider has no publishable key
pub const PROVIDER_UNAVAILABLE_MESSAGE: &str =
    "Payment system is not configured. Please contact support.";

/// Message shown when the backend answered without a checkout URL
pub const SESSION_CREATION_FAILED_MESSAGE: &str = "Failed to create checkout session";

/// Fallback when a failed request carries no usable message
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while starting checkout. Please try again.";

/// Checkout flow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// No authenticated session. Handled by navigating away, never displayed.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Payment provider is not configured
    #[error("{}", PROVIDER_UNAVAILABLE_MESSAGE)]
    ProviderUnavailable,

    /// Backend responded but did not hand out a checkout URL
    #[error("{}", SESSION_CREATION_FAILED_MESSAGE)]
    SessionCreationFailed,

    /// The session-creation call itself failed
    #[error("{}", .0.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE))]
    RequestFailed(Option<String>),
}

impl CheckoutError {
    /// Check if retrying the request could help
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }

    /// Text displayed in the error view
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_uses_underlying_message() {
        let err = CheckoutError::RequestFailed(Some("card declined".into()));
        assert_eq!(err.user_message(), "card declined");
    }

    #[test]
    fn test_request_failed_without_message_is_generic() {
        let err = CheckoutError::RequestFailed(None);
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            CheckoutError::SessionCreationFailed.user_message(),
            "Failed to create checkout session"
        );
        assert!(
            CheckoutError::ProviderUnavailable
                .user_message()
                .starts_with("Payment system is not configured")
        );
        assert!(!CheckoutError::ProviderUnavailable.is_retryable());
    }
}
