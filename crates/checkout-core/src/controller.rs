//! Checkout Page Controller
//!
//! Drives one mount of the checkout page:
//!
//! ```text
//! mount() ──▶ metadata injected once
//!
//! run() ──▶ access guard ──✗──▶ navigate home, render nothing
//!               │ ✓
//!               ▼
//!         provider configured? ──✗──▶ Error
//!               │ ✓
//!               ▼
//!         request checkout ──▶ Redirecting (external navigation) | Error
//! ```
//!
//! The host calls `run()` on mount and again whenever the session changes,
//! and `unmount()` when the page goes away. Results that resolve after
//! `unmount()` are dropped.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::backend::{CheckoutBackend, CheckoutSessionResult, request_checkout};
use crate::config::{ConfigSource, payment_provider_configured};
use crate::error::CheckoutError;
use crate::metadata::{PageMetadata, PageMetadataPort, inject_page_metadata};
use crate::navigation::Navigator;
use crate::notify::{NoopNotifier, Notice, Notifier};
use crate::session::SessionProvider;
use crate::tier::SubscriptionTier;
use crate::view::{PageView, ViewState};

/// Capabilities the controller works through
#[derive(Clone)]
pub struct CheckoutPorts {
    pub session: Rc<dyn SessionProvider>,
    pub config: Rc<dyn ConfigSource>,
    pub backend: Rc<dyn CheckoutBackend>,
    pub navigator: Rc<dyn Navigator>,
    pub metadata: Rc<dyn PageMetadataPort>,
    pub notifier: Rc<dyn Notifier>,
}

impl CheckoutPorts {
    pub fn new(
        session: Rc<dyn SessionProvider>,
        config: Rc<dyn ConfigSource>,
        backend: Rc<dyn CheckoutBackend>,
        navigator: Rc<dyn Navigator>,
        metadata: Rc<dyn PageMetadataPort>,
    ) -> Self {
        Self {
            session,
            config,
            backend,
            navigator,
            metadata,
            notifier: Rc::new(NoopNotifier),
        }
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Rc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }
}

/// Cleared when the page unmounts
///
/// `Send + Sync` so it can be moved into host cleanup hooks.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Release);
    }
}

type Observer = Rc<dyn Fn(&PageView)>;

#[derive(Default)]
struct FlowState {
    view: ViewState,
    /// Access guard tripped; sticky for the rest of the mount
    denied: bool,
    in_flight: bool,
    metadata_applied: bool,
}

/// Controller for a single mount of the checkout page
#[derive(Clone)]
pub struct CheckoutController {
    ports: CheckoutPorts,
    tier: SubscriptionTier,
    flow: Rc<RefCell<FlowState>>,
    observers: Rc<RefCell<Vec<Observer>>>,
    liveness: Liveness,
}

impl CheckoutController {
    pub fn new(ports: CheckoutPorts, tier: SubscriptionTier) -> Self {
        Self {
            ports,
            tier,
            flow: Rc::default(),
            observers: Rc::default(),
            liveness: Liveness::new(),
        }
    }

    pub const fn tier(&self) -> SubscriptionTier {
        self.tier
    }

    pub fn state(&self) -> ViewState {
        self.flow.borrow().view.clone()
    }

    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    /// Current render model
    ///
    /// Empty whenever the session is anonymous, even before `run()` has
    /// reacted to it.
    pub fn view(&self) -> PageView {
        let flow = self.flow.borrow();
        if flow.denied || !self.ports.session.session().is_authenticated {
            return PageView::Empty;
        }
        flow.view.render(self.tier, &self.ports.config.config())
    }

    /// Call `observer` with the render model after every change
    pub fn subscribe(&self, observer: impl Fn(&PageView) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Inject page metadata. Only the first call per mount has an effect.
    pub fn mount(&self) {
        {
            let mut flow = self.flow.borrow_mut();
            if flow.metadata_applied {
                return;
            }
            flow.metadata_applied = true;
        }
        inject_page_metadata(self.ports.metadata.as_ref(), &PageMetadata::checkout());
    }

    /// Tear down; any pending result is dropped when it arrives
    pub fn unmount(&self) {
        self.liveness.end();
        tracing::debug!(tier = %self.tier, "Checkout page unmounted");
    }

    /// Evaluate the flow against the current session
    pub async fn run(&self) {
        if !self.liveness.is_alive() {
            return;
        }

        if !self.ports.session.session().is_authenticated {
            self.deny_access();
            return;
        }

        {
            let flow = self.flow.borrow();
            if flow.denied || flow.in_flight || flow.view.is_terminal() {
                tracing::debug!(tier = %self.tier, "Checkout flow already started");
                return;
            }
        }

        // Provider check comes strictly before any network call
        let config = self.ports.config.config();
        if !payment_provider_configured(&config) {
            tracing::warn!("Payment provider is not configured");
            self.settle(Err(CheckoutError::ProviderUnavailable));
            return;
        }

        self.flow.borrow_mut().in_flight = true;
        tracing::info!(tier = %self.tier, "Requesting checkout session");
        let result = request_checkout(self.ports.backend.as_ref(), self.tier).await;
        self.flow.borrow_mut().in_flight = false;

        if !self.liveness.is_alive() {
            tracing::debug!(tier = %self.tier, "Discarding checkout result after unmount");
            return;
        }
        if self.flow.borrow().denied {
            tracing::debug!(tier = %self.tier, "Discarding checkout result after sign-out");
            return;
        }

        self.settle(result);
    }

    fn deny_access(&self) {
        {
            let mut flow = self.flow.borrow_mut();
            if flow.denied {
                return;
            }
            flow.denied = true;
        }

        tracing::debug!(reason = %CheckoutError::Unauthenticated, "Leaving checkout");
        let home = self.ports.config.config().home_route;
        self.ports.navigator.navigate(&home);
        self.publish();
    }

    fn settle(&self, result: CheckoutSessionResult) {
        match result {
            Ok(redirect) => {
                if !self.flow.borrow_mut().view.redirect(redirect.url.clone()) {
                    return;
                }
                tracing::info!(tier = %self.tier, "Redirecting to hosted checkout");
                self.publish();

                if let Err(e) = self.ports.navigator.redirect_external(&redirect.url) {
                    tracing::warn!("Could not leave for checkout: {}", e);
                }
            }
            Err(err) => {
                let message = err.user_message();
                if !self.flow.borrow_mut().view.fail(message.clone()) {
                    return;
                }
                tracing::warn!(
                    tier = %self.tier,
                    retryable = err.is_retryable(),
                    "Checkout failed: {}",
                    message
                );
                self.publish();
                self.ports.notifier.notify(Notice::error(message));
            }
        }
    }

    fn publish(&self) {
        let view = self.view();
        let observers = self.observers.borrow().clone();
        for observer in observers {
            observer(&view);
        }
    }
}
