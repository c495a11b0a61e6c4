//! Session Access
//!
//! The session is owned by an external authentication provider. The checkout
//! flow only ever reads it.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

/// Snapshot of the authentication session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Whether the visitor is signed in
    pub is_authenticated: bool,

    /// Account email, if known
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    pub fn authenticated(email: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            email: Some(email.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Read-only access to the current session
pub trait SessionProvider {
    /// Current session snapshot
    fn session(&self) -> Session;
}

/// Session provider backed by a replaceable snapshot
///
/// Hosts without a reactive runtime (and tests) swap the snapshot and then
/// re-run the controller.
#[derive(Debug, Default)]
pub struct StaticSession {
    session: RefCell<Session>,
}

impl StaticSession {
    pub const fn new(session: Session) -> Self {
        Self {
            session: RefCell::new(session),
        }
    }

    pub fn authenticated() -> Self {
        Self::new(Session::authenticated("user@example.com"))
    }

    pub fn anonymous() -> Self {
        Self::new(Session::anonymous())
    }

    /// Replace the current snapshot
    pub fn replace(&self, session: Session) {
        *self.session.borrow_mut() = session;
    }
}

impl SessionProvider for StaticSession {
    fn session(&self) -> Session {
        self.session.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_snapshot() {
        let provider = StaticSession::anonymous();
        assert!(!provider.session().is_authenticated);

        provider.replace(Session::authenticated("a@b.c"));
        let session = provider.session();
        assert!(session.is_authenticated);
        assert_eq!(session.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_deserialize_without_email() {
        let session: Session = serde_json::from_str(r#"{"is_authenticated":true}"#).unwrap();
        assert!(session.is_authenticated);
        assert!(session.email.is_none());
    }
}
