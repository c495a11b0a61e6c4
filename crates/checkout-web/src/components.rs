//! UI Components

use checkout_core::{Notice, NoticeLevel, Notifier};
use leptos::prelude::*;

/// Busy indicator
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="spinner" role="progressbar" aria-busy="true"></div> }
}

/// Toast queue shared through context
#[derive(Clone, Copy)]
pub struct ToastChannel {
    notices: RwSignal<Vec<Notice>>,
}

impl ToastChannel {
    pub fn provide() -> Self {
        let channel = Self {
            notices: RwSignal::new(Vec::new()),
        };
        provide_context(channel);
        channel
    }

    pub fn dismiss(&self, index: usize) {
        self.notices.update(|notices| {
            if index < notices.len() {
                notices.remove(index);
            }
        });
    }
}

impl Notifier for ToastChannel {
    fn notify(&self, notice: Notice) {
        self.notices.update(|notices| notices.push(notice));
    }
}

/// Renders queued toasts
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<ToastChannel>();

    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || toasts.notices.get().into_iter().enumerate()
                key=|(index, notice)| format!("{index}-{}", notice.message)
                children=move |(index, notice)| {
                    let class = match notice.level {
                        NoticeLevel::Info => "toast toast-info",
                        NoticeLevel::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class role="status">
                            <span>{notice.message}</span>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(index)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
