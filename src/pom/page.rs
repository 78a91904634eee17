//! Page trait

use async_trait::async_trait;
use tracing::info;
use url::Url;

use crate::components::MainHeader;
use crate::pom::Component;
use crate::Result;

/// A routable page: a path under the base URL plus a container
#[async_trait]
pub trait Page: Component {
    /// Path relative to the configured base URL
    const PATH: &'static str;

    /// Absolute URL of the page
    fn url(&self) -> Result<Url> {
        page_url(&self.session().config().base_url, Self::PATH)
    }

    /// Navigate to the page and maximize the window
    async fn open(&self) -> Result<()> {
        let url = self.url()?;
        info!("Opening {} at {}", Self::NAME, url);
        let session = self.session();
        session.goto(url.as_str()).await?;
        session.maximize_window().await
    }

    /// Header shared by every signed-in page
    fn main_header(&self) -> MainHeader {
        MainHeader::new(self.session().clone())
    }
}

/// Join `path` onto `base_url` with URL-join semantics
pub fn page_url(base_url: &str, path: &str) -> Result<Url> {
    Ok(Url::parse(base_url)?.join(path)?)
}
