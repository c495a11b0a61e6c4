//! # checkout-core
//!
//! Subscription checkout flow, independent of any UI framework.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    CheckoutController                         │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │   Access    │  │   Provider   │  │  Checkout Session   │  │
//! │  │   Guard     │──│    Check     │──│     Requester       │  │
//! │  └─────────────┘  └──────────────┘  └─────────────────────┘  │
//! │          │                                    │               │
//! │          ▼                                    ▼               │
//! │     Navigator                          View State Machine     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything the controller touches outside itself goes through a port
//! trait (`SessionProvider`, `ConfigSource`, `CheckoutBackend`, `Navigator`,
//! `PageMetadataPort`, `Notifier`). The browser frontend supplies real
//! implementations; the in-memory ones here back the tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_core::{CheckoutController, CheckoutPorts, SubscriptionTier};
//!
//! let controller = CheckoutController::new(ports, SubscriptionTier::from_query_string(query));
//! controller.mount();
//! controller.run().await;
//! ```

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod metadata;
pub mod navigation;
pub mod notify;
pub mod session;
pub mod tier;
pub mod view;

pub use backend::{
    BackendError, CheckoutBackend, CheckoutRedirect, CheckoutSessionResponse,
    CheckoutSessionResult, MockCheckoutBackend, request_checkout,
};
pub use config::{CheckoutConfig, ConfigSource, payment_provider_configured};
pub use controller::{CheckoutController, CheckoutPorts, Liveness};
pub use error::{CheckoutError, Result};
pub use metadata::{MemoryDocument, PageMetadata, PageMetadataPort, STRUCTURED_DATA_ID};
pub use navigation::{NavigationError, Navigator, RecordingNavigator};
pub use notify::{Notice, NoticeLevel, Notifier, NoopNotifier};
pub use session::{Session, SessionProvider, StaticSession};
pub use tier::SubscriptionTier;
pub use view::{PageAction, PageView, ViewState};
