//! Main App Component

use checkout_core::CheckoutConfig;
use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::auth::AuthContext;
use crate::components::{ToastChannel, ToastHost};
use crate::dom;
use crate::pages::{AccountPage, CheckoutRoute, HomePage};

/// Build-time config, with the API defaulting to the page's own origin
fn app_config() -> CheckoutConfig {
    let mut config = CheckoutConfig::from_build_env();
    if config.api_base.is_empty() {
        config.api_base = dom::origin();
    }
    config
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = app_config();
    AuthContext::provide(&config.api_base);
    ToastChannel::provide();
    provide_context(config);

    view! {
        <Router>
            <main class="app">
                <ToastHost />
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/account") view=AccountPage />
                    <Route path=path!("/checkout") view=CheckoutRoute />
                </Routes>
            </main>
        </Router>
    }
}
