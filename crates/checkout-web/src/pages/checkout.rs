//! Checkout Page
//!
//! Thin Leptos host for [`CheckoutController`]: wires browser adapters into
//! the ports, reruns the flow when the session signal changes and renders
//! the controller's [`PageView`].

use std::rc::Rc;

use checkout_core::{CheckoutConfig, CheckoutController, CheckoutPorts, PageView, SubscriptionTier};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::HttpCheckoutBackend;
use crate::auth::{AuthContext, SignalSession};
use crate::components::{Spinner, ToastChannel};
use crate::dom::{self, BrowserDocument, BrowserNavigator};

/// Waits for the first session lookup before mounting the page
#[component]
pub fn CheckoutRoute() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <Show when=move || auth.ready.get() fallback=|| view! { <Spinner /> }>
            <CheckoutPage />
        </Show>
    }
}

#[component]
fn CheckoutPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toasts = expect_context::<ToastChannel>();
    let config = expect_context::<CheckoutConfig>();
    let navigate = use_navigate();

    let tier = SubscriptionTier::from_query_string(&dom::query_string());
    let backend = HttpCheckoutBackend::new(config.api_base.clone(), dom::origin());
    let ports = CheckoutPorts::new(
        Rc::new(SignalSession(auth.session)),
        Rc::new(config),
        Rc::new(backend),
        Rc::new(BrowserNavigator::new(move |path| {
            navigate(path, Default::default());
        })),
        Rc::new(BrowserDocument),
    )
    .with_notifier(Rc::new(toasts));
    let controller = CheckoutController::new(ports, tier);

    let (page, set_page) = signal(controller.view());
    controller.subscribe(move |view| set_page.set(view.clone()));
    controller.mount();

    let liveness = controller.liveness();
    on_cleanup(move || liveness.end());

    Effect::new(move |_| {
        auth.session.track();
        let controller = controller.clone();
        leptos::task::spawn_local(async move { controller.run().await });
    });

    move || match page.get() {
        _ if !auth.session.with(|session| session.is_authenticated) => ().into_any(),
        PageView::Empty => ().into_any(),
        PageView::Busy { message } => view! {
            <div class="checkout checkout-loading">
                <Spinner />
                <p>{message}</p>
            </div>
        }
        .into_any(),
        PageView::Failure { message, action } => view! {
            <div class="checkout checkout-error">
                <h1>"Checkout unavailable"</h1>
                <p class="error">{message}</p>
                <a href=action.href class="btn btn-primary">{action.label}</a>
            </div>
        }
        .into_any(),
        PageView::Redirecting { action } => view! {
            <div class="checkout checkout-redirecting">
                <Spinner />
                <p>"Taking you to our secure payment page..."</p>
                <a href=action.href class="btn">{action.label}</a>
            </div>
        }
        .into_any(),
    }
}
