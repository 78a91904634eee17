//! Task card

use tracing::info;

use crate::locator::Locator;
use crate::pom::Component;
use crate::session::Session;
use crate::Result;

/// Title, relative to the card root
pub const TITLE: Locator =
    Locator::xpath_static(".//div[contains(@class, \"task-card__title\")]");

#[derive(Debug, Clone)]
pub struct Task {
    session: Session,
    root: Locator,
}

impl Task {
    pub fn new(session: Session, root: Locator) -> Self {
        Self { session, root }
    }

    pub async fn title(&self) -> Result<String> {
        self.session.text(&self.root.join(&TITLE)?).await
    }

    /// Click the card; opens [`TaskSettingsPopup`](crate::components::task::TaskSettingsPopup)
    pub async fn open_settings(&self) -> Result<()> {
        info!("Opening task settings for {}", self.root);
        self.session.click(&self.root).await
    }
}

impl Component for Task {
    const NAME: &'static str = "Task";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(self.root.clone())
    }
}
