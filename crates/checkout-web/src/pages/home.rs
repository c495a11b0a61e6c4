//! Home Page

use checkout_core::SubscriptionTier;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let plans = SubscriptionTier::ALL.map(|tier| {
        let href = format!("/checkout?tier={tier}");
        view! {
            <div class="plan">
                <h2>{tier.label()}</h2>
                <a href=href class="btn">"Subscribe"</a>
            </div>
        }
    });

    view! {
        <div class="home">
            <header class="hero">
                <h1>"Tierpass"</h1>
                <p class="tagline">"Pick the plan that fits and upgrade in a minute"</p>
                <div class="cta">
                    <a href="/account" class="btn btn-primary">"My account"</a>
                </div>
            </header>

            <section class="plans">{plans.into_iter().collect_view()}</section>
        </div>
    }
}
