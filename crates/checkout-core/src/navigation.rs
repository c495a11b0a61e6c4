//! Navigation
//!
//! Two kinds of navigation: an in-app route change, and a full page load
//! that leaves the application for the hosted payment page.

use std::cell::RefCell;

use thiserror::Error;

/// Full-page navigation could not be started
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("External navigation failed: {0}")]
pub struct NavigationError(pub String);

/// Navigation capability handed to the controller
pub trait Navigator {
    /// Change the in-app route
    fn navigate(&self, path: &str);

    /// Replace the whole document with an external URL
    fn redirect_external(&self, url: &str) -> Result<(), NavigationError>;
}

/// Navigation performed through a [`Navigator`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    Route(String),
    External(String),
}

/// Navigator that records every request (for tests and headless hosts)
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: RefCell<Vec<NavigationEvent>>,
    fail_external: bool,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator whose external redirects always fail
    pub fn failing_external() -> Self {
        Self {
            events: RefCell::default(),
            fail_external: true,
        }
    }

    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.borrow().clone()
    }

    /// In-app routes visited, in order
    pub fn routes(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                NavigationEvent::Route(path) => Some(path.clone()),
                NavigationEvent::External(_) => None,
            })
            .collect()
    }

    /// External URLs the document was sent to, in order
    pub fn external(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                NavigationEvent::External(url) => Some(url.clone()),
                NavigationEvent::Route(_) => None,
            })
            .collect()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.events
            .borrow_mut()
            .push(NavigationEvent::Route(path.to_string()));
    }

    fn redirect_external(&self, url: &str) -> Result<(), NavigationError> {
        if self.fail_external {
            return Err(NavigationError(format!("blocked: {url}")));
        }
        self.events
            .borrow_mut()
            .push(NavigationEvent::External(url.to_string()));
        Ok(())
    }
}
