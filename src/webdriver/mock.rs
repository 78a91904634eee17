//! Mock WebDriver implementation for testing
//!
//! [`MockWebDriver`] keeps an in-memory document of [`MockNode`]s addressed by
//! exact [`Locator`] equality. Behaviour is scripted with hooks that run on
//! click, navigation and refresh, so a test can model just enough of an
//! application for page objects to drive it.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};

use crate::locator::Locator;
use crate::webdriver::traits::WebDriverClient;
use crate::webdriver::types::ElementId;
use crate::Error;

/// Runs after an element is clicked; receives the clicked element's locator
pub type ClickHook = Arc<dyn Fn(&mut MockDom, &Locator) + Send + Sync>;

/// Runs after a navigation; receives the target URL
pub type NavigateHook = Arc<dyn Fn(&mut MockDom, &str) + Send + Sync>;

/// Runs after a reload
pub type RefreshHook = Arc<dyn Fn(&mut MockDom) + Send + Sync>;

/// One element of the mock document
#[derive(Debug, Clone)]
pub struct MockNode {
    pub id: String,
    pub locator: Locator,
    pub text: String,
    pub value: String,
    pub attributes: HashMap<String, String>,
    pub selected: bool,
    pub displayed: bool,
}

/// Mock document state
#[derive(Debug, Default)]
pub struct MockDom {
    url: Option<String>,
    nodes: Vec<MockNode>,
    maximized: bool,
    implicit_wait: Duration,
    history: Vec<String>,
}

impl MockDom {
    /// Add an element; returns its reference
    pub fn insert<S: Into<String>>(&mut self, locator: Locator, text: S) -> ElementId {
        let id = uuid::Uuid::new_v4().to_string();
        self.nodes.push(MockNode {
            id: id.clone(),
            locator,
            text: text.into(),
            value: String::new(),
            attributes: HashMap::new(),
            selected: false,
            displayed: true,
        });
        ElementId(id)
    }

    /// Remove every element matching `locator`; returns how many went away
    pub fn remove(&mut self, locator: &Locator) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|node| &node.locator != locator);
        before - self.nodes.len()
    }

    /// Drop the whole document
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn contains(&self, locator: &Locator) -> bool {
        self.nodes.iter().any(|node| &node.locator == locator)
    }

    pub fn count(&self, locator: &Locator) -> usize {
        self.nodes.iter().filter(|node| &node.locator == locator).count()
    }

    pub fn text_of(&self, locator: &Locator) -> Option<&str> {
        self.first(locator).map(|node| node.text.as_str())
    }

    pub fn set_text<S: Into<String>>(&mut self, locator: &Locator, text: S) -> bool {
        match self.first_mut(locator) {
            Some(node) => {
                node.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Typed value of an input
    pub fn value_of(&self, locator: &Locator) -> Option<&str> {
        self.first(locator).map(|node| node.value.as_str())
    }

    pub fn set_value<S: Into<String>>(&mut self, locator: &Locator, value: S) -> bool {
        match self.first_mut(locator) {
            Some(node) => {
                node.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, locator: &Locator) -> bool {
        self.first(locator).map(|node| node.selected).unwrap_or(false)
    }

    pub fn set_selected(&mut self, locator: &Locator, selected: bool) -> bool {
        match self.first_mut(locator) {
            Some(node) => {
                node.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn set_displayed(&mut self, locator: &Locator, displayed: bool) -> bool {
        match self.first_mut(locator) {
            Some(node) => {
                node.displayed = displayed;
                true
            }
            None => false,
        }
    }

    pub fn set_attribute<N: Into<String>, V: Into<String>>(
        &mut self,
        locator: &Locator,
        name: N,
        value: V,
    ) -> bool {
        match self.first_mut(locator) {
            Some(node) => {
                node.attributes.insert(name.into(), value.into());
                true
            }
            None => false,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn implicit_wait(&self) -> Duration {
        self.implicit_wait
    }

    /// Commands received so far, e.g. `navigate https://drello.works/login`
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn first(&self, locator: &Locator) -> Option<&MockNode> {
        self.nodes.iter().find(|node| &node.locator == locator)
    }

    fn first_mut(&mut self, locator: &Locator) -> Option<&mut MockNode> {
        self.nodes.iter_mut().find(|node| &node.locator == locator)
    }

    fn node(&self, element: &ElementId) -> Result<&MockNode, Error> {
        self.nodes
            .iter()
            .find(|node| node.id == element.0)
            .ok_or_else(|| Error::stale_element(format!("element {} is not attached", element)))
    }

    fn node_mut(&mut self, element: &ElementId) -> Result<&mut MockNode, Error> {
        self.nodes
            .iter_mut()
            .find(|node| node.id == element.0)
            .ok_or_else(|| Error::stale_element(format!("element {} is not attached", element)))
    }

    fn find(&self, locator: &Locator) -> Result<ElementId, Error> {
        self.first(locator)
            .map(|node| ElementId(node.id.clone()))
            .ok_or_else(|| Error::no_such_element(locator.to_string()))
    }

    /// A new document: every outstanding reference goes stale
    fn reissue_ids(&mut self) {
        for node in &mut self.nodes {
            node.id = uuid::Uuid::new_v4().to_string();
        }
    }

    fn record<S: Into<String>>(&mut self, entry: S) {
        self.history.push(entry.into());
    }
}

/// Mock WebDriver client
pub struct MockWebDriver {
    session_id: String,
    dom: Mutex<MockDom>,
    click_hooks: Vec<ClickHook>,
    navigate_hooks: Vec<NavigateHook>,
    refresh_hooks: Vec<RefreshHook>,
    closed: AtomicBool,
}

impl MockWebDriver {
    /// Create a new mock driver with an empty document
    pub fn new() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            dom: Mutex::new(MockDom::default()),
            click_hooks: Vec::new(),
            navigate_hooks: Vec::new(),
            refresh_hooks: Vec::new(),
            closed: AtomicBool::new(false),
        }
    }

    pub fn on_click<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut MockDom, &Locator) + Send + Sync + 'static,
    {
        self.click_hooks.push(Arc::new(hook));
        self
    }

    pub fn on_navigate<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut MockDom, &str) + Send + Sync + 'static,
    {
        self.navigate_hooks.push(Arc::new(hook));
        self
    }

    pub fn on_refresh<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut MockDom) + Send + Sync + 'static,
    {
        self.refresh_hooks.push(Arc::new(hook));
        self
    }

    /// Direct access to the document
    pub async fn dom(&self) -> MutexGuard<'_, MockDom> {
        self.dom.lock().await
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    async fn open_dom(&self) -> Result<MutexGuard<'_, MockDom>, Error> {
        if self.is_closed() {
            return Err(Error::session_closed(&self.session_id));
        }
        Ok(self.dom.lock().await)
    }
}

impl Default for MockWebDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockWebDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockWebDriver")
            .field("session_id", &self.session_id)
            .field("click_hooks", &self.click_hooks.len())
            .field("navigate_hooks", &self.navigate_hooks.len())
            .field("refresh_hooks", &self.refresh_hooks.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[async_trait]
impl WebDriverClient for MockWebDriver {
    fn session_id(&self) -> &str {
        &self.session_id
    }

    async fn navigate(&self, url: &str) -> Result<(), Error> {
        let mut dom = self.open_dom().await?;
        dom.record(format!("navigate {}", url));
        dom.url = Some(url.to_string());
        dom.reissue_ids();
        for hook in &self.navigate_hooks {
            hook(&mut *dom, url);
        }
        Ok(())
    }

    async fn current_url(&self) -> Result<String, Error> {
        let dom = self.open_dom().await?;
        Ok(dom.url.clone().unwrap_or_else(|| "about:blank".to_string()))
    }

    async fn refresh(&self) -> Result<(), Error> {
        let mut dom = self.open_dom().await?;
        dom.record("refresh");
        dom.reissue_ids();
        for hook in &self.refresh_hooks {
            hook(&mut *dom);
        }
        Ok(())
    }

    async fn maximize_window(&self) -> Result<(), Error> {
        let mut dom = self.open_dom().await?;
        dom.record("maximize");
        dom.maximized = true;
        Ok(())
    }

    async fn set_implicit_wait(&self, timeout: Duration) -> Result<(), Error> {
        let mut dom = self.open_dom().await?;
        dom.implicit_wait = timeout;
        Ok(())
    }

    async fn find_element(&self, locator: &Locator) -> Result<ElementId, Error> {
        self.open_dom().await?.find(locator)
    }

    async fn find_elements(&self, locator: &Locator) -> Result<Vec<ElementId>, Error> {
        let dom = self.open_dom().await?;
        Ok(dom
            .nodes
            .iter()
            .filter(|node| &node.locator == locator)
            .map(|node| ElementId(node.id.clone()))
            .collect())
    }

    async fn find_element_from(
        &self,
        parent: &ElementId,
        locator: &Locator,
    ) -> Result<ElementId, Error> {
        let dom = self.open_dom().await?;
        let scoped = dom.node(parent)?.locator.join(locator)?;
        dom.find(&scoped)
    }

    async fn click(&self, element: &ElementId) -> Result<(), Error> {
        let mut dom = self.open_dom().await?;
        let node = dom.node(element)?;
        if !node.displayed {
            return Err(Error::webdriver(
                "element not interactable",
                format!("{} is hidden", node.locator),
            ));
        }
        let locator = node.locator.clone();
        dom.record(format!("click {}", locator));
        for hook in &self.click_hooks {
            hook(&mut *dom, &locator);
        }
        Ok(())
    }

    async fn clear(&self, element: &ElementId) -> Result<(), Error> {
        let mut dom = self.open_dom().await?;
        dom.node_mut(element)?.value.clear();
        Ok(())
    }

    async fn send_keys(&self, element: &ElementId, text: &str) -> Result<(), Error> {
        let mut dom = self.open_dom().await?;
        dom.node_mut(element)?.value.push_str(text);
        Ok(())
    }

    async fn text(&self, element: &ElementId) -> Result<String, Error> {
        let dom = self.open_dom().await?;
        Ok(dom.node(element)?.text.clone())
    }

    async fn attribute(&self, element: &ElementId, name: &str) -> Result<Option<String>, Error> {
        let dom = self.open_dom().await?;
        let node = dom.node(element)?;
        if name == "value" {
            return Ok(Some(node.value.clone()));
        }
        Ok(node.attributes.get(name).cloned())
    }

    async fn is_selected(&self, element: &ElementId) -> Result<bool, Error> {
        let dom = self.open_dom().await?;
        Ok(dom.node(element)?.selected)
    }

    async fn is_displayed(&self, element: &ElementId) -> Result<bool, Error> {
        let dom = self.open_dom().await?;
        Ok(dom.node(element)?.displayed)
    }

    async fn screenshot(&self) -> Result<Vec<u8>, Error> {
        let _dom = self.open_dom().await?;
        // PNG signature and IHDR of a 1x1 image
        Ok(vec![
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
            0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
            0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE,
        ])
    }

    async fn quit(&self) -> Result<(), Error> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
