//! Account Page

use checkout_core::{Notice, Notifier};
use leptos::prelude::*;

use crate::auth::AuthContext;
use crate::components::ToastChannel;
use crate::dom;

/// Notice for a return from the hosted checkout (`?checkout=success|cancelled`)
fn checkout_return_notice(query: &str) -> Option<Notice> {
    let outcome = query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("checkout="))?;

    match outcome {
        "success" => Some(Notice::info(
            "Thanks! Your subscription is being activated.",
        )),
        "cancelled" => Some(Notice::info(
            "Checkout cancelled. You have not been charged.",
        )),
        _ => None,
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toasts = expect_context::<ToastChannel>();

    if let Some(notice) = checkout_return_notice(&dom::query_string()) {
        toasts.notify(notice);
    }

    let email = move || {
        auth.session
            .get()
            .email
            .unwrap_or_else(|| "Not signed in".into())
    };

    view! {
        <div class="account">
            <h1>"Your account"</h1>
            <p class="email">{email}</p>
            <a href="/" class="btn">"View plans"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::NoticeLevel;

    #[test]
    fn test_return_notice_from_query() {
        let notice = checkout_return_notice("?checkout=success").unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert!(notice.message.contains("activated"));

        let notice = checkout_return_notice("ref=mail&checkout=cancelled").unwrap();
        assert!(notice.message.contains("not been charged"));
    }

    #[test]
    fn test_no_notice_without_outcome() {
        assert!(checkout_return_notice("").is_none());
        assert!(checkout_return_notice("?checkout=maybe").is_none());
    }
}
