//! Inline "create board" form on the boards page

use tracing::info;

use crate::locator::Locator;
use crate::pom::Component;
use crate::session::Session;
use crate::Result;

pub const CONTAINER: Locator =
    Locator::xpath_static("//div[contains(@class, \"create-board-form\")]");
pub const OPEN_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-openCreateBoardForm\")]");
pub const TITLE_INPUT: Locator =
    Locator::xpath_static("//input[contains(@class, \"js-boardTitleInput\")]");
pub const SUBMIT_BUTTON: Locator =
    Locator::xpath_static("//button[contains(@class, \"js-createBoard\")]");
pub const CLOSE_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-closeCreateBoardForm\")]");

#[derive(Debug, Clone)]
pub struct CreateBoardForm {
    session: Session,
}

impl CreateBoardForm {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Unfold the form and wait for it
    pub async fn open(&self) -> Result<()> {
        self.session.click(&OPEN_BUTTON).await?;
        self.wait_for_container().await?;
        Ok(())
    }

    pub async fn set_board_title(&self, title: &str) -> Result<()> {
        self.session.fill(&TITLE_INPUT, title).await
    }

    /// Create the board; the app then switches to the new board
    pub async fn submit(&self) -> Result<()> {
        info!("Submitting create board form");
        self.session.click(&SUBMIT_BUTTON).await
    }

    /// Fold the form without creating anything
    pub async fn close(&self) -> Result<()> {
        info!("Closing create board form");
        self.session.click(&CLOSE_BUTTON).await?;
        self.session
            .wait_until_absent(&CONTAINER, self.session.timeouts().container())
            .await
    }
}

impl Component for CreateBoardForm {
    const NAME: &'static str = "CreateBoardForm";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(CONTAINER)
    }
}
