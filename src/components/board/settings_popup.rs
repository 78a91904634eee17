//! Board settings popup

use tracing::info;

use crate::locator::Locator;
use crate::pom::Component;
use crate::session::Session;
use crate::Result;

pub const CONTAINER: Locator =
    Locator::xpath_static("//div[contains(@class, \"board-settings-popup\")]");
pub const DELETE_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-deleteBoard\")]");
pub const CONFIRM_DELETE_BUTTON: Locator =
    Locator::xpath_static("//button[contains(@class, \"js-confirmDeleteBoard\")]");

#[derive(Debug, Clone)]
pub struct BoardSettingsPopup {
    session: Session,
}

impl BoardSettingsPopup {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Delete the board and wait for the popup to go away
    pub async fn delete_board(&self) -> Result<()> {
        info!("Deleting board");
        self.wait_for_container().await?;
        self.session.click(&DELETE_BUTTON).await?;
        self.session.click(&CONFIRM_DELETE_BUTTON).await?;
        self.session
            .wait_until_absent(&CONTAINER, self.session.timeouts().container())
            .await
    }
}

impl Component for BoardSettingsPopup {
    const NAME: &'static str = "BoardSettingsPopup";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(CONTAINER)
    }
}
