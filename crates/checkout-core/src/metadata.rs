//! Page Metadata
//!
//! Title, description and a JSON-LD block for search engines. The
//! structured-data node is a singleton keyed by [`STRUCTURED_DATA_ID`]; any
//! previous node with that id is removed before a new one goes in.

use std::cell::RefCell;

use serde_json::json;

use crate::tier::SubscriptionTier;

/// Element id of the injected JSON-LD script
pub const STRUCTURED_DATA_ID: &str = "checkout-structured-data";

pub const CHECKOUT_TITLE: &str = "Checkout | Upgrade to Tierpass Pro and Power";

pub const CHECKOUT_DESCRIPTION: &str = "Securely upgrade your Tierpass subscription. \
     Choose Basic, Pro or Power and complete payment on our payment partner's \
     hosted checkout page.";

/// Metadata applied to the document on mount
#[derive(Clone, Debug, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub structured_data: serde_json::Value,
}

impl PageMetadata {
    /// Metadata of the checkout page
    pub fn checkout() -> Self {
        let offers: Vec<_> = SubscriptionTier::ALL
            .iter()
            .map(|tier| {
                json!({
                    "@type": "Offer",
                    "name": format!("Tierpass {}", tier.label()),
                    "category": "subscription",
                    "url": format!("/checkout?tier={tier}"),
                })
            })
            .collect();

        Self {
            title: CHECKOUT_TITLE.into(),
            description: CHECKOUT_DESCRIPTION.into(),
            structured_data: json!({
                "@context": "https://schema.org",
                "@type": "WebPage",
                "name": CHECKOUT_TITLE,
                "description": CHECKOUT_DESCRIPTION,
                "mainEntity": {
                    "@type": "OfferCatalog",
                    "name": "Tierpass subscription plans",
                    "itemListElement": offers,
                },
            }),
        }
    }
}

/// Document mutations the page needs
///
/// Implementations must not fail when a node is missing.
pub trait PageMetadataPort {
    fn set_title(&self, title: &str);

    /// Update the existing description meta tag. Returns `false` when the
    /// document has none; no tag is created.
    fn set_description(&self, description: &str) -> bool;

    /// Remove the element with `id`, if any
    fn remove_structured_data(&self, id: &str);

    /// Append a JSON-LD script element with `id`
    fn insert_structured_data(&self, id: &str, json: &str);

    /// Replace the structured-data node with `id`
    fn set_structured_data(&self, id: &str, json: &str) {
        self.remove_structured_data(id);
        self.insert_structured_data(id, json);
    }
}

/// Apply `metadata` to the document behind `port`
pub fn inject_page_metadata(port: &dyn PageMetadataPort, metadata: &PageMetadata) {
    port.set_title(&metadata.title);
    if !port.set_description(&metadata.description) {
        tracing::debug!("No description meta tag present, leaving it absent");
    }
    port.set_structured_data(STRUCTURED_DATA_ID, &metadata.structured_data.to_string());
}

/// In-memory document
#[derive(Debug, Default)]
pub struct MemoryDocument {
    title: RefCell<String>,
    description: RefCell<Option<String>>,
    scripts: RefCell<Vec<(String, String)>>,
}

impl MemoryDocument {
    /// Document without a description meta tag
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with an existing description meta tag
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: RefCell::new(Some(description.into())),
            ..Self::default()
        }
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn description(&self) -> Option<String> {
        self.description.borrow().clone()
    }

    /// Number of script nodes carrying `id`
    pub fn count_by_id(&self, id: &str) -> usize {
        self.scripts
            .borrow()
            .iter()
            .filter(|(node_id, _)| node_id == id)
            .count()
    }

    /// Content of the first script node with `id`
    pub fn script(&self, id: &str) -> Option<String> {
        self.scripts
            .borrow()
            .iter()
            .find(|(node_id, _)| node_id == id)
            .map(|(_, content)| content.clone())
    }
}

impl PageMetadataPort for MemoryDocument {
    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn set_description(&self, description: &str) -> bool {
        let mut current = self.description.borrow_mut();
        match current.as_mut() {
            Some(content) => {
                *content = description.to_string();
                true
            }
            None => false,
        }
    }

    fn remove_structured_data(&self, id: &str) {
        self.scripts.borrow_mut().retain(|(node_id, _)| node_id != id);
    }

    fn insert_structured_data(&self, id: &str, json: &str) {
        self.scripts
            .borrow_mut()
            .push((id.to_string(), json.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injection_is_idempotent() {
        let doc = MemoryDocument::new();
        let metadata = PageMetadata::checkout();

        inject_page_metadata(&doc, &metadata);
        inject_page_metadata(&doc, &metadata);

        assert_eq!(doc.count_by_id(STRUCTURED_DATA_ID), 1);
        assert_eq!(doc.title(), CHECKOUT_TITLE);
    }

    #[test]
    fn test_description_updated_only_if_present() {
        let without = MemoryDocument::new();
        inject_page_metadata(&without, &PageMetadata::checkout());
        assert!(without.description().is_none());

        let with = MemoryDocument::with_description("old");
        inject_page_metadata(&with, &PageMetadata::checkout());
        assert_eq!(with.description().as_deref(), Some(CHECKOUT_DESCRIPTION));
    }

    #[test]
    fn test_structured_data_lists_every_tier() {
        let doc = MemoryDocument::new();
        inject_page_metadata(&doc, &PageMetadata::checkout());

        let json = doc.script(STRUCTURED_DATA_ID).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@type"], "WebPage");
        assert_eq!(value["mainEntity"]["itemListElement"].as_array().unwrap().len(), 3);
        assert_eq!(value["mainEntity"]["itemListElement"][1]["url"], "/checkout?tier=pro");
    }

    #[test]
    fn test_other_scripts_untouched() {
        let doc = MemoryDocument::new();
        doc.insert_structured_data("analytics", "{}");
        inject_page_metadata(&doc, &PageMetadata::checkout());
        inject_page_metadata(&doc, &PageMetadata::checkout());
        assert_eq!(doc.count_by_id("analytics"), 1);
        assert_eq!(doc.count_by_id(STRUCTURED_DATA_ID), 1);
    }
}
