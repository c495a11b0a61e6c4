//! Mock Checkout Backend
//!
//! For testing and demo purposes. Replies are scripted up front, or held
//! back until a [`MockGate`] releases them.

use std::cell::RefCell;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::{BackendError, CheckoutBackend, CheckoutSessionResponse};
use crate::tier::SubscriptionTier;

type Reply = Result<CheckoutSessionResponse, BackendError>;

enum Script {
    Ready(Reply),
    Gated(Option<oneshot::Receiver<Reply>>),
}

/// Mock backend with a fixed reply
pub struct MockCheckoutBackend {
    script: RefCell<Script>,
    calls: RefCell<Vec<SubscriptionTier>>,
}

impl MockCheckoutBackend {
    fn scripted(reply: Reply) -> Self {
        Self {
            script: RefCell::new(Script::Ready(reply)),
            calls: RefCell::default(),
        }
    }

    /// Replies with a checkout URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::scripted(Ok(CheckoutSessionResponse::with_url(url)))
    }

    /// Replies successfully but with no URL (`{}`)
    pub fn without_url() -> Self {
        Self::scripted(Ok(CheckoutSessionResponse::default()))
    }

    /// Fails every call with `error`
    pub fn failing(error: BackendError) -> Self {
        Self::scripted(Err(error))
    }

    /// Holds the first call open until the returned gate resolves it
    pub fn gated() -> (Self, MockGate) {
        let (tx, rx) = oneshot::channel();
        let backend = Self {
            script: RefCell::new(Script::Gated(Some(rx))),
            calls: RefCell::default(),
        };
        (backend, MockGate { tx })
    }

    /// Tiers requested so far, in order
    pub fn calls(&self) -> Vec<SubscriptionTier> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl CheckoutBackend for MockCheckoutBackend {
    async fn create_checkout_session(
        &self,
        tier: SubscriptionTier,
    ) -> Result<CheckoutSessionResponse, BackendError> {
        self.calls.borrow_mut().push(tier);

        let pending = match &mut *self.script.borrow_mut() {
            Script::Ready(reply) => return reply.clone(),
            Script::Gated(rx) => rx.take(),
        };

        match pending {
            Some(rx) => rx.await.unwrap_or(Err(BackendError::Unknown)),
            None => Err(BackendError::Unknown),
        }
    }
}

/// Releases the reply of a gated [`MockCheckoutBackend`]
pub struct MockGate {
    tx: oneshot::Sender<Reply>,
}

impl MockGate {
    pub fn resolve(self, reply: Result<CheckoutSessionResponse, BackendError>) {
        // Receiver may already be gone if the caller stopped waiting
        let _ = self.tx.send(reply);
    }

    pub fn resolve_url(self, url: impl Into<String>) {
        self.resolve(Ok(CheckoutSessionResponse::with_url(url)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_gated_reply() {
        let (backend, gate) = MockCheckoutBackend::gated();
        gate.resolve_url("https://pay.example/s/1");

        let response = backend
            .create_checkout_session(SubscriptionTier::Power)
            .await
            .unwrap();
        assert_eq!(response.url.as_deref(), Some("https://pay.example/s/1"));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_dropped_gate_is_unknown_failure() {
        let (backend, gate) = MockCheckoutBackend::gated();
        drop(gate);

        let err = backend
            .create_checkout_session(SubscriptionTier::Basic)
            .await
            .unwrap_err();
        assert_eq!(err, BackendError::Unknown);
    }
}
