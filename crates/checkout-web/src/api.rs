//! API Client

use async_trait::async_trait;
use checkout_core::{
    BackendError, CheckoutBackend, CheckoutSessionResponse, Session, SubscriptionTier,
};
use serde::Serialize;

/// Body of `POST /api/checkout`
#[derive(Debug, Serialize)]
struct CreateCheckoutBody {
    tier: SubscriptionTier,
    success_url: String,
    cancel_url: String,
}

impl CreateCheckoutBody {
    fn new(tier: SubscriptionTier, origin: &str) -> Self {
        Self {
            tier,
            success_url: format!("{origin}/account?checkout=success"),
            cancel_url: format!("{origin}/account?checkout=cancelled"),
        }
    }
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Map a non-success response to a backend error
fn rejection(status: u16, body: &serde_json::Value) -> BackendError {
    body["error"]
        .as_str()
        .filter(|msg| !msg.trim().is_empty())
        .map_or(BackendError::Status(status), |msg| {
            BackendError::Rejected(msg.to_string())
        })
}

/// Creates checkout sessions over HTTP
pub struct HttpCheckoutBackend {
    client: reqwest::Client,
    base: String,
    origin: String,
}

impl HttpCheckoutBackend {
    pub fn new(base: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
            origin: origin.into(),
        }
    }
}

#[async_trait(?Send)]
impl CheckoutBackend for HttpCheckoutBackend {
    async fn create_checkout_session(
        &self,
        tier: SubscriptionTier,
    ) -> Result<CheckoutSessionResponse, BackendError> {
        let response = self
            .client
            .post(endpoint(&self.base, "/api/checkout"))
            .json(&CreateCheckoutBody::new(tier, &self.origin))
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<CheckoutSessionResponse>()
                .await
                .map_err(|e| BackendError::Decode(e.to_string()))
        } else {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            Err(rejection(status.as_u16(), &body))
        }
    }
}

/// Fetch the current authentication session; anonymous on any failure
pub async fn fetch_session(base: &str) -> Session {
    let result = async {
        reqwest::get(endpoint(base, "/api/auth/session"))
            .await?
            .error_for_status()?
            .json::<Session>()
            .await
    }
    .await;

    result.unwrap_or_else(|e| {
        tracing::warn!("Session lookup failed: {}", e);
        Session::anonymous()
    })
}
