//! Checkout Configuration
//!
//! Whether the payment provider is usable is decided from configuration on
//! every run of the flow, never from a cached answer.

use serde::{Deserialize, Serialize};

fn default_home_route() -> String {
    "/".into()
}

fn default_account_route() -> String {
    "/account".into()
}

/// Settings the checkout page reads
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Payment provider publishable key (`pk_...`)
    #[serde(default)]
    pub publishable_key: Option<String>,

    /// In-app route used when leaving the page
    #[serde(default = "default_home_route")]
    pub home_route: String,

    /// In-app route for the account area
    #[serde(default = "default_account_route")]
    pub account_route: String,

    /// Base URL of the backend API; empty means same origin
    #[serde(default)]
    pub api_base: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            publishable_key: None,
            home_route: default_home_route(),
            account_route: default_account_route(),
            api_base: String::new(),
        }
    }
}

impl CheckoutConfig {
    /// Config with only a publishable key set
    pub fn with_publishable_key(key: impl Into<String>) -> Self {
        Self {
            publishable_key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Create from values baked in at compile time (WASM builds have no process env)
    pub fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            publishable_key: option_env!("STRIPE_PUBLISHABLE_KEY").map(Into::into),
            home_route: option_env!("CHECKOUT_HOME_ROUTE").map_or(defaults.home_route, Into::into),
            account_route: option_env!("CHECKOUT_ACCOUNT_ROUTE")
                .map_or(defaults.account_route, Into::into),
            api_base: option_env!("CHECKOUT_API_BASE").map_or(defaults.api_base, Into::into),
        }
    }
}

/// Whether the payment provider can be used at all
pub fn payment_provider_configured(config: &CheckoutConfig) -> bool {
    config
        .publishable_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty())
}

/// Source of configuration, consulted on every flow run
pub trait ConfigSource {
    fn config(&self) -> CheckoutConfig;
}

impl ConfigSource for CheckoutConfig {
    fn config(&self) -> CheckoutConfig {
        self.clone()
    }
}
