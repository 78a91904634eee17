//! Single board page

use crate::components::{BoardSettingsPopup, ColumnsList, Header};
use crate::locator::Locator;
use crate::pom::{Component, Page};
use crate::session::Session;

pub const CONTAINER: Locator = Locator::xpath_static("//div[contains(@class, \"board-page\")]");

#[derive(Debug, Clone)]
pub struct BoardPage {
    session: Session,
}

impl BoardPage {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn header(&self) -> Header {
        Header::new(self.session.clone())
    }

    pub fn settings_popup(&self) -> BoardSettingsPopup {
        BoardSettingsPopup::new(self.session.clone())
    }

    pub fn columns_list(&self) -> ColumnsList {
        ColumnsList::new(self.session.clone())
    }
}

impl Component for BoardPage {
    const NAME: &'static str = "BoardPage";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(CONTAINER)
    }
}

impl Page for BoardPage {
    const PATH: &'static str = "board";
}
