//! Boards overview page

use tracing::info;

use crate::components::{BoardTemplates, BoardsList, CreateBoardForm};
use crate::locator::Locator;
use crate::pom::{Component, Page};
use crate::session::Session;
use crate::Result;

pub const CONTAINER: Locator = Locator::xpath_static("//div[contains(@class, \"boards-page\")]");

#[derive(Debug, Clone)]
pub struct BoardsPage {
    session: Session,
}

impl BoardsPage {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn create_board_form(&self) -> CreateBoardForm {
        CreateBoardForm::new(self.session.clone())
    }

    pub fn boards_list(&self) -> BoardsList {
        BoardsList::new(self.session.clone())
    }

    pub fn board_templates(&self) -> BoardTemplates {
        BoardTemplates::new(self.session.clone())
    }

    /// Create a board through the form; the app opens it afterwards
    pub async fn create_board(&self, title: &str) -> Result<()> {
        info!("Creating board {:?}", title);
        let form = self.create_board_form();
        form.open().await?;
        form.set_board_title(title).await?;
        form.submit().await
    }
}

impl Component for BoardsPage {
    const NAME: &'static str = "BoardsPage";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(CONTAINER)
    }
}

impl Page for BoardsPage {
    const PATH: &'static str = "";
}
