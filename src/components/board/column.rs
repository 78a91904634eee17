//! One column of a board

use crate::components::board::TaskList;
use crate::locator::Locator;
use crate::pom::Component;
use crate::session::Session;
use crate::Result;

/// Title, relative to the column root
pub const TITLE: Locator =
    Locator::xpath_static(".//div[contains(@class, \"board-column__title\")]");
/// Task list, relative to the column root
pub const TASK_LIST: Locator = Locator::xpath_static(".//div[contains(@class, \"task-list\")]");

#[derive(Debug, Clone)]
pub struct Column {
    session: Session,
    root: Locator,
}

impl Column {
    /// Column rooted at `root`, usually from [`columns_list::column`](super::columns_list::column)
    pub fn new(session: Session, root: Locator) -> Self {
        Self { session, root }
    }

    pub async fn title(&self) -> Result<String> {
        self.session.text(&self.root.join(&TITLE)?).await
    }

    pub fn task_list(&self) -> Result<TaskList> {
        Ok(TaskList::new(
            self.session.clone(),
            self.root.join(&TASK_LIST)?,
        ))
    }
}

impl Component for Column {
    const NAME: &'static str = "Column";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(self.root.clone())
    }
}
