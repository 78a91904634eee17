//! Component trait

use async_trait::async_trait;
use tracing::debug;

use crate::locator::Locator;
use crate::session::{Element, Session};
use crate::{Error, Result};

/// A region of a page identified by its container element
///
/// Implementors only provide the session handle and, usually, a container
/// locator; the container waits come with the trait.
#[async_trait]
pub trait Component: Send + Sync {
    /// Name used in logs and in `Error::MissingContainer`
    const NAME: &'static str;

    fn session(&self) -> &Session;

    /// Root element of the component, `None` when it has no single root
    fn container(&self) -> Option<Locator> {
        None
    }

    /// Wait until the container is present, up to the `container` timeout
    async fn wait_for_container(&self) -> Result<Element> {
        let container = self
            .container()
            .ok_or_else(|| Error::missing_container(Self::NAME))?;
        let session = self.session();
        debug!("Waiting for {} container {}", Self::NAME, container);
        session
            .wait_for(&container, session.timeouts().container())
            .await
    }

    /// Whether the container shows up within the `check` timeout
    async fn is_open(&self) -> Result<bool> {
        let container = self
            .container()
            .ok_or_else(|| Error::missing_container(Self::NAME))?;
        let session = self.session();
        session
            .is_present(&container, session.timeouts().check())
            .await
    }
}
