//! Columns of a board

use tracing::info;

use crate::components::board::Column;
use crate::locator::{has_class, xpath_literal, Locator};
use crate::pom::Component;
use crate::session::Session;
use crate::{Result, ResultExt};

pub const CONTAINER: Locator = Locator::xpath_static("//div[contains(@class, \"columns-list\")]");
pub const ADD_COLUMN_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-addColumn\")]");
pub const COLUMN_TITLE_INPUT: Locator =
    Locator::xpath_static("//input[contains(@class, \"js-columnTitleInput\")]");
pub const SAVE_COLUMN_BUTTON: Locator =
    Locator::xpath_static("//button[contains(@class, \"js-saveColumn\")]");

/// Root of the column titled `title`
pub fn column(title: &str) -> Locator {
    Locator::xpath(format!(
        "//div[contains(@class, \"columns-list\")]//div[{} and .//div[{} and normalize-space(.)={}]]",
        has_class("board-column"),
        has_class("board-column__title"),
        xpath_literal(title)
    ))
}

#[derive(Debug, Clone)]
pub struct ColumnsList {
    session: Session,
}

impl ColumnsList {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Add a column and wait until it is rendered
    pub async fn create_column(&self, title: &str) -> Result<()> {
        info!("Creating column {:?}", title);
        self.session.click(&ADD_COLUMN_BUTTON).await?;
        self.session.fill(&COLUMN_TITLE_INPUT, title).await?;
        self.session.click(&SAVE_COLUMN_BUTTON).await?;
        self.session
            .wait_for(&column(title), self.session.timeouts().element())
            .await?;
        Ok(())
    }

    /// The column titled `title`, if the board has one
    pub async fn column_by_title(&self, title: &str) -> Result<Option<Column>> {
        let locator = column(title);
        let found = self
            .session
            .wait_for(&locator, self.session.timeouts().check())
            .await
            .absent_on_timeout()?;
        Ok(found.map(|_| Column::new(self.session.clone(), locator)))
    }
}

impl Component for ColumnsList {
    const NAME: &'static str = "ColumnsList";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(CONTAINER)
    }
}
