//! Browser Adapters
//!
//! `web-sys` implementations of the document and navigation ports. Missing
//! nodes are tolerated everywhere.

use checkout_core::{NavigationError, Navigator, PageMetadataPort};

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Origin of the current page, empty outside a browser
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Raw query string of the current page
pub fn query_string() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// The live document
pub struct BrowserDocument;

impl PageMetadataPort for BrowserDocument {
    fn set_title(&self, title: &str) {
        if let Some(doc) = document() {
            doc.set_title(title);
        }
    }

    fn set_description(&self, description: &str) -> bool {
        let meta = document().and_then(|doc| {
            doc.query_selector(r#"meta[name="description"]"#)
                .ok()
                .flatten()
        });
        meta.is_some_and(|meta| meta.set_attribute("content", description).is_ok())
    }

    fn remove_structured_data(&self, id: &str) {
        if let Some(node) = document().and_then(|doc| doc.get_element_by_id(id)) {
            node.remove();
        }
    }

    fn insert_structured_data(&self, id: &str, json: &str) {
        let Some(doc) = document() else { return };
        let Ok(script) = doc.create_element("script") else { return };

        script.set_id(id);
        if script.set_attribute("type", "application/ld+json").is_err() {
            return;
        }
        script.set_text_content(Some(json));

        if let Some(head) = doc.head() {
            if let Err(e) = head.append_child(&script) {
                tracing::warn!("Could not insert structured data: {:?}", e);
            }
        }
    }
}

/// Router navigation plus full-page `Location` redirects
pub struct BrowserNavigator {
    route: Box<dyn Fn(&str)>,
}

impl BrowserNavigator {
    pub fn new(route: impl Fn(&str) + 'static) -> Self {
        Self {
            route: Box::new(route),
        }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        (self.route)(path);
    }

    fn redirect_external(&self, url: &str) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or_else(|| NavigationError("no window".into()))?;
        window
            .location()
            .set_href(url)
            .map_err(|e| NavigationError(format!("{e:?}")))
    }
}
