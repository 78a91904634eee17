//! Browser session implementation
//!
//! Owns one remote browser session from set-up to `quit`.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::{Config, Timeouts};
use crate::locator::Locator;
use crate::session::element::Element;
use crate::wait::Wait;
use crate::webdriver::{WebDriverClient, WebDriverHttpClient};
use crate::Result;

/// Browser session
///
/// Clones share the same remote session. Page objects hold a clone each.
#[derive(Debug, Clone)]
pub struct Session {
    client: Arc<dyn WebDriverClient>,
    config: Arc<Config>,
}

impl Session {
    /// Open a new remote session on the configured endpoint
    pub async fn connect(config: Config) -> Result<Self> {
        config.validate()?;
        let client = WebDriverHttpClient::new_session(
            &config.webdriver.endpoint(),
            config.browser,
            config.timeouts.request(),
        )
        .await?;

        let session = Self::with_client(Arc::new(client), config);
        session
            .client
            .set_implicit_wait(session.config.timeouts.implicit())
            .await?;
        Ok(session)
    }

    /// Wrap an already opened client
    pub fn with_client(client: Arc<dyn WebDriverClient>, config: Config) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    pub fn id(&self) -> &str {
        self.client.session_id()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn timeouts(&self) -> &Timeouts {
        &self.config.timeouts
    }

    pub fn client(&self) -> &Arc<dyn WebDriverClient> {
        &self.client
    }

    /// A wait with the configured poll interval
    pub fn wait(&self, timeout: Duration) -> Wait {
        Wait::new(timeout, self.timeouts().poll_interval())
    }

    pub async fn goto(&self, url: &str) -> Result<()> {
        self.client.navigate(url).await
    }

    pub async fn current_url(&self) -> Result<String> {
        self.client.current_url().await
    }

    /// Reload the page; elements found before are stale afterwards
    pub async fn refresh(&self) -> Result<()> {
        self.client.refresh().await
    }

    pub async fn maximize_window(&self) -> Result<()> {
        self.client.maximize_window().await
    }

    /// Find an element now, without waiting
    pub async fn find(&self, locator: &Locator) -> Result<Element> {
        let id = self.client.find_element(locator).await?;
        Ok(Element::new(id, locator.clone(), self.client.clone()))
    }

    /// Find all elements matching `locator` now
    pub async fn find_all(&self, locator: &Locator) -> Result<Vec<Element>> {
        let ids = self.client.find_elements(locator).await?;
        Ok(ids
            .into_iter()
            .map(|id| Element::new(id, locator.clone(), self.client.clone()))
            .collect())
    }

    /// Wait until `locator` resolves; `Error::Timeout` otherwise
    pub async fn wait_for(&self, locator: &Locator, timeout: Duration) -> Result<Element> {
        self.wait(timeout)
            .until(&format!("element {}", locator), || async move {
                self.find(locator).await.map(Some)
            })
            .await
    }

    /// Whether `locator` resolves within `timeout`
    pub async fn is_present(&self, locator: &Locator, timeout: Duration) -> Result<bool> {
        self.wait(timeout)
            .check(&format!("presence of {}", locator), || async move {
                Ok(!self.client.find_elements(locator).await?.is_empty())
            })
            .await
    }

    /// Whether the text of `locator` equals `expected` within `timeout`
    pub async fn wait_for_text(
        &self,
        locator: &Locator,
        expected: &str,
        timeout: Duration,
    ) -> Result<bool> {
        self.wait(timeout)
            .check(&format!("text {:?} in {}", expected, locator), || async move {
                let element = self.find(locator).await?;
                Ok(element.text().await? == expected)
            })
            .await
    }

    /// Wait until nothing matches `locator`
    pub async fn wait_until_absent(&self, locator: &Locator, timeout: Duration) -> Result<()> {
        self.wait(timeout)
            .until_true(&format!("absence of {}", locator), || async move {
                Ok(self.client.find_elements(locator).await?.is_empty())
            })
            .await
    }

    /// Find an element with the `element` timeout and click it
    pub async fn click(&self, locator: &Locator) -> Result<()> {
        let element = self.wait_for(locator, self.timeouts().element()).await?;
        element.click().await
    }

    /// Find an input with the `element` timeout and replace its value
    pub async fn fill(&self, locator: &Locator, text: &str) -> Result<()> {
        let element = self.wait_for(locator, self.timeouts().element()).await?;
        element.fill(text).await
    }

    /// Find an element with the `element` timeout and read its text
    pub async fn text(&self, locator: &Locator) -> Result<String> {
        let element = self.wait_for(locator, self.timeouts().element()).await?;
        element.text().await
    }

    /// PNG screenshot of the viewport
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        self.client.screenshot().await
    }

    /// End the remote session
    pub async fn quit(self) -> Result<()> {
        info!("Closing session {}", self.id());
        if Arc::strong_count(&self.client) > 1 {
            debug!(
                "{} other handle(s) to session {} still alive",
                Arc::strong_count(&self.client) - 1,
                self.id()
            );
        }
        match self.client.quit().await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Failed to close session {}: {}", self.id(), e);
                Err(e)
            }
        }
    }
}
