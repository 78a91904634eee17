//! WebDriver transport traits
//!
//! This module defines the abstract interface a browser session is driven through.

use async_trait::async_trait;

use crate::locator::Locator;
use crate::webdriver::types::ElementId;

/// WebDriver client trait
///
/// One implementation per remote session. Every method maps onto a single
/// W3C WebDriver command.
#[async_trait]
pub trait WebDriverClient: Send + Sync + std::fmt::Debug {
    /// Remote session ID
    fn session_id(&self) -> &str;

    /// Navigate to a URL
    async fn navigate(&self, url: &str) -> Result<(), crate::Error>;

    /// Get the current URL
    async fn current_url(&self) -> Result<String, crate::Error>;

    /// Reload the current page
    async fn refresh(&self) -> Result<(), crate::Error>;

    /// Maximize the browser window
    async fn maximize_window(&self) -> Result<(), crate::Error>;

    /// Set the session's implicit wait
    async fn set_implicit_wait(&self, timeout: std::time::Duration) -> Result<(), crate::Error>;

    /// Find the first element matching a locator
    async fn find_element(&self, locator: &Locator) -> Result<ElementId, crate::Error>;

    /// Find all elements matching a locator
    async fn find_elements(&self, locator: &Locator) -> Result<Vec<ElementId>, crate::Error>;

    /// Find the first element matching a locator below `parent`
    async fn find_element_from(
        &self,
        parent: &ElementId,
        locator: &Locator,
    ) -> Result<ElementId, crate::Error>;

    /// Click an element
    async fn click(&self, element: &ElementId) -> Result<(), crate::Error>;

    /// Clear an editable element
    async fn clear(&self, element: &ElementId) -> Result<(), crate::Error>;

    /// Type text into an element
    async fn send_keys(&self, element: &ElementId, text: &str) -> Result<(), crate::Error>;

    /// Get rendered element text
    async fn text(&self, element: &ElementId) -> Result<String, crate::Error>;

    /// Get an element attribute
    async fn attribute(&self, element: &ElementId, name: &str) -> Result<Option<String>, crate::Error>;

    /// Check whether a checkbox/option is selected
    async fn is_selected(&self, element: &ElementId) -> Result<bool, crate::Error>;

    /// Check whether an element is displayed
    async fn is_displayed(&self, element: &ElementId) -> Result<bool, crate::Error>;

    /// Capture a PNG screenshot of the viewport
    async fn screenshot(&self) -> Result<Vec<u8>, crate::Error>;

    /// End the remote session
    async fn quit(&self) -> Result<(), crate::Error>;
}
