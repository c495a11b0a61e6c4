//! View State Machine
//!
//! `Loading` is the only non-terminal state. Once `Error` or `Redirecting`
//! is entered no further transition is accepted.

use crate::config::CheckoutConfig;
use crate::tier::SubscriptionTier;

/// Display mode of the checkout page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Error(String),
    Redirecting {
        url: String,
    },
}

impl ViewState {
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Enter `Error`. Returns `false` if already terminal.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if self.is_terminal() {
            return false;
        }
        *self = Self::Error(message.into());
        true
    }

    /// Enter `Redirecting`. Returns `false` if already terminal.
    pub fn redirect(&mut self, url: impl Into<String>) -> bool {
        if self.is_terminal() {
            return false;
        }
        *self = Self::Redirecting { url: url.into() };
        true
    }

    /// Render model for this state
    pub fn render(&self, tier: SubscriptionTier, config: &CheckoutConfig) -> PageView {
        match self {
            Self::Loading => PageView::Busy {
                message: format!(
                    "Preparing your {} checkout. Please wait...",
                    tier.label()
                ),
            },
            Self::Error(message) => PageView::Failure {
                message: message.clone(),
                action: PageAction::home(config),
            },
            Self::Redirecting { .. } => PageView::Redirecting {
                action: PageAction::account(config),
            },
        }
    }
}

/// In-app link offered on a screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageAction {
    pub label: String,
    pub href: String,
}

impl PageAction {
    pub fn home(config: &CheckoutConfig) -> Self {
        Self {
            label: "Return home".into(),
            href: config.home_route.clone(),
        }
    }

    pub fn account(config: &CheckoutConfig) -> Self {
        Self {
            label: "Return to account".into(),
            href: config.account_route.clone(),
        }
    }
}

/// What the page shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageView {
    /// Nothing at all (access denied, navigating away)
    Empty,
    Busy {
        message: String,
    },
    Failure {
        message: String,
        action: PageAction,
    },
    /// Fallback while the browser leaves for the payment page
    Redirecting {
        action: PageAction,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let state = ViewState::default();
        assert_eq!(state, ViewState::Loading);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_terminal_states_are_final() {
        let mut state = ViewState::Loading;
        assert!(state.redirect("https://pay.example/s"));
        assert!(!state.fail("late failure"));
        assert!(!state.redirect("https://pay.example/other"));
        assert_eq!(
            state,
            ViewState::Redirecting {
                url: "https://pay.example/s".into()
            }
        );

        let mut state = ViewState::Loading;
        assert!(state.fail("boom"));
        assert!(!state.redirect("https://pay.example/s"));
        assert_eq!(state, ViewState::Error("boom".into()));
    }

    #[test]
    fn test_render() {
        let config = CheckoutConfig::default();

        match ViewState::Loading.render(SubscriptionTier::Pro, &config) {
            PageView::Busy { message } => assert!(message.contains("Pro")),
            other => panic!("unexpected view: {other:?}"),
        }

        let view =
            ViewState::Error("card declined".into()).render(SubscriptionTier::Basic, &config);
        assert_eq!(
            view,
            PageView::Failure {
                message: "card declined".into(),
                action: PageAction::home(&config),
            }
        );

        let view = ViewState::Redirecting { url: "https://x".into() }
            .render(SubscriptionTier::Basic, &config);
        assert_eq!(
            view,
            PageView::Redirecting {
                action: PageAction {
                    label: "Return to account".into(),
                    href: "/account".into(),
                }
            }
        );
    }
}
