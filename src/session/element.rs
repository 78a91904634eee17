//! Element handle implementation
//!
//! Wraps a remote element reference together with the locator it was found by.

use std::sync::Arc;
use tracing::debug;

use crate::locator::Locator;
use crate::webdriver::{ElementId, WebDriverClient};
use crate::Result;

/// Remote element handle
///
/// Valid until the document it was found in is replaced; after a reload or
/// navigation every call fails with `Error::StaleElement` and the element has
/// to be looked up again.
#[derive(Debug, Clone)]
pub struct Element {
    id: ElementId,
    locator: Locator,
    client: Arc<dyn WebDriverClient>,
}

impl Element {
    pub fn new(id: ElementId, locator: Locator, client: Arc<dyn WebDriverClient>) -> Self {
        Self {
            id,
            locator,
            client,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    /// Locator this element was found by
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub async fn click(&self) -> Result<()> {
        debug!("click {}", self.locator);
        self.client.click(&self.id).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.client.clear(&self.id).await
    }

    pub async fn send_keys(&self, text: &str) -> Result<()> {
        debug!("type {:?} into {}", text, self.locator);
        self.client.send_keys(&self.id, text).await
    }

    /// Replace the element's value
    pub async fn fill(&self, text: &str) -> Result<()> {
        self.clear().await?;
        self.send_keys(text).await
    }

    pub async fn text(&self) -> Result<String> {
        self.client.text(&self.id).await
    }

    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.client.attribute(&self.id, name).await
    }

    pub async fn is_selected(&self) -> Result<bool> {
        self.client.is_selected(&self.id).await
    }

    pub async fn is_displayed(&self) -> Result<bool> {
        self.client.is_displayed(&self.id).await
    }

    /// Find a descendant by a relative locator
    pub async fn find(&self, child: &Locator) -> Result<Element> {
        let id = self.client.find_element_from(&self.id, child).await?;
        Ok(Element::new(id, self.locator.join(child)?, self.client.clone()))
    }
}
