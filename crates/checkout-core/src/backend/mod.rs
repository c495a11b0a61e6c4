//! Checkout Session Backend
//!
//! The backend that creates checkout sessions is an external service. This
//! module defines the narrow contract the page uses and turns every outcome
//! into a [`CheckoutSessionResult`].

mod mock;

pub use mock::{MockCheckoutBackend, MockGate};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{CheckoutError, Result};
use crate::tier::SubscriptionTier;

/// Body returned by the backend on success
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSessionResponse {
    /// Hosted checkout URL
    #[serde(default)]
    pub url: Option<String>,
}

impl CheckoutSessionResponse {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Where to send the browser
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutRedirect {
    pub url: String,
}

/// Outcome of asking for a checkout session
pub type CheckoutSessionResult = Result<CheckoutRedirect>;

/// Failure of the session-creation call itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Backend answered with an error message
    #[error("{0}")]
    Rejected(String),

    /// Request never completed
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success status without a message
    #[error("Backend returned status {0}")]
    Status(u16),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Failure carrying nothing usable
    #[error("Unknown backend failure")]
    Unknown,
}

impl BackendError {
    /// Underlying message to show the user, if there is one
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected(msg) | Self::Transport(msg) | Self::Decode(msg) => {
                Some(msg.as_str()).filter(|msg| !msg.trim().is_empty())
            }
            Self::Status(_) | Self::Unknown => None,
        }
    }
}

impl From<anyhow::Error> for BackendError {
    fn from(err: anyhow::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<BackendError> for CheckoutError {
    fn from(err: BackendError) -> Self {
        Self::RequestFailed(err.message().map(str::to_string))
    }
}

/// Checkout session creation (Strategy pattern)
///
/// Implemented over HTTP in the browser and by [`MockCheckoutBackend`] in tests.
#[async_trait(?Send)]
pub trait CheckoutBackend {
    /// Ask the backend for a hosted checkout session for `tier`
    async fn create_checkout_session(
        &self,
        tier: SubscriptionTier,
    ) -> std::result::Result<CheckoutSessionResponse, BackendError>;
}

/// Request a checkout session exactly once, without retrying
pub async fn request_checkout(
    backend: &dyn CheckoutBackend,
    tier: SubscriptionTier,
) -> CheckoutSessionResult {
    let response = backend.create_checkout_session(tier).await?;

    match response.url {
        Some(url) if !url.trim().is_empty() => Ok(CheckoutRedirect { url }),
        _ => Err(CheckoutError::SessionCreationFailed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_FAILURE_MESSAGE;

    #[tokio::test]
    async fn test_success_returns_url() {
        let backend = MockCheckoutBackend::with_url("https://pay.example/session/abc");
        let redirect = request_checkout(&backend, SubscriptionTier::Pro).await.unwrap();
        assert_eq!(redirect.url, "https://pay.example/session/abc");
        assert_eq!(backend.calls(), vec![SubscriptionTier::Pro]);
    }

    #[tokio::test]
    async fn test_missing_or_blank_url() {
        let backend = MockCheckoutBackend::without_url();
        let err = request_checkout(&backend, SubscriptionTier::Basic).await.unwrap_err();
        assert_eq!(err, CheckoutError::SessionCreationFailed);

        let backend = MockCheckoutBackend::with_url("  ");
        let err = request_checkout(&backend, SubscriptionTier::Basic).await.unwrap_err();
        assert_eq!(err, CheckoutError::SessionCreationFailed);
    }

    #[tokio::test]
    async fn test_failure_carries_message() {
        let backend = MockCheckoutBackend::failing(BackendError::Rejected("card declined".into()));
        let err = request_checkout(&backend, SubscriptionTier::Basic).await.unwrap_err();
        assert_eq!(err.user_message(), "card declined");
    }

    #[tokio::test]
    async fn test_opaque_failure_is_generic() {
        let backend = MockCheckoutBackend::failing(BackendError::Unknown);
        let err = request_checkout(&backend, SubscriptionTier::Basic).await.unwrap_err();
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);

        let backend = MockCheckoutBackend::failing(BackendError::Status(502));
        let err = request_checkout(&backend, SubscriptionTier::Basic).await.unwrap_err();
        assert_eq!(err, CheckoutError::RequestFailed(None));
    }

    #[test]
    fn test_response_decodes_empty_object() {
        let response: CheckoutSessionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.url.is_none());
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: BackendError = anyhow::anyhow!("connection reset").into();
        assert_eq!(err.message(), Some("connection reset"));
    }
}
