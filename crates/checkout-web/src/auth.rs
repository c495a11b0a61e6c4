//! Authentication Session Context

use checkout_core::{Session, SessionProvider};
use leptos::prelude::*;

use crate::api;

/// Session shared with every page
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Session>,
    /// Set once the first lookup finished
    pub ready: RwSignal<bool>,
}

impl AuthContext {
    /// Provide the context and start the session lookup
    pub fn provide(api_base: &str) -> Self {
        let ctx = Self {
            session: RwSignal::new(Session::anonymous()),
            ready: RwSignal::new(false),
        };
        provide_context(ctx);

        let base = api_base.to_string();
        leptos::task::spawn_local(async move {
            let session = api::fetch_session(&base).await;
            ctx.session.set(session);
            ctx.ready.set(true);
        });

        ctx
    }
}

/// Reads the session signal without subscribing
pub struct SignalSession(pub RwSignal<Session>);

impl SessionProvider for SignalSession {
    fn session(&self) -> Session {
        self.0.get_untracked()
    }
}
