//! Task list inside a column

use tracing::info;

use crate::components::board::Task;
use crate::locator::{has_class, xpath_literal, Locator};
use crate::pom::Component;
use crate::session::Session;
use crate::{Result, ResultExt};

pub const ADD_TASK_BUTTON: Locator = Locator::xpath_static(".//div[contains(@class, \"js-addTask\")]");
pub const TASK_TITLE_INPUT: Locator =
    Locator::xpath_static(".//textarea[contains(@class, \"js-taskTitleInput\")]");
pub const SAVE_TASK_BUTTON: Locator =
    Locator::xpath_static(".//button[contains(@class, \"js-saveTask\")]");

/// Card of the task titled `title`, relative to the list root
pub fn task(title: &str) -> Locator {
    Locator::xpath(format!(
        ".//div[{} and .//div[{} and normalize-space(.)={}]]",
        has_class("task-card"),
        has_class("task-card__title"),
        xpath_literal(title)
    ))
}

/// Tasks of one column
///
/// All locators are relative and get scoped under the list root, so two
/// columns holding a task with the same title never get mixed up.
#[derive(Debug, Clone)]
pub struct TaskList {
    session: Session,
    root: Locator,
}

impl TaskList {
    pub fn new(session: Session, root: Locator) -> Self {
        Self { session, root }
    }

    /// Add a task and wait until its card is rendered
    pub async fn create_task(&self, title: &str) -> Result<()> {
        info!("Creating task {:?}", title);
        self.session.click(&self.root.join(&ADD_TASK_BUTTON)?).await?;
        self.session
            .fill(&self.root.join(&TASK_TITLE_INPUT)?, title)
            .await?;
        self.session.click(&self.root.join(&SAVE_TASK_BUTTON)?).await?;
        self.session
            .wait_for(&self.root.join(&task(title))?, self.session.timeouts().element())
            .await?;
        Ok(())
    }

    /// The task titled `title`, if the list has one
    pub async fn task_by_title(&self, title: &str) -> Result<Option<Task>> {
        let locator = self.root.join(&task(title))?;
        let found = self
            .session
            .wait_for(&locator, self.session.timeouts().check())
            .await
            .absent_on_timeout()?;
        Ok(found.map(|_| Task::new(self.session.clone(), locator)))
    }
}

impl Component for TaskList {
    const NAME: &'static str = "TaskList";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(self.root.clone())
    }
}
