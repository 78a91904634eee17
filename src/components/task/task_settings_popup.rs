//! Task settings popup
//!
//! Opened by clicking a task card. Edits the task's name and description and
//! manages its labels, checklists and comments.
//!
//! Checks (`has_*`, `is_*`) wait up to the `check` timeout for a positive
//! answer, so a `false` costs the full timeout.

use tracing::{debug, info};

use crate::locator::{has_class, xpath_literal, Locator};
use crate::pom::Component;
use crate::session::Session;
use crate::Result;

pub const CONTAINER: Locator =
    Locator::xpath_static("//div[contains(@class, \"task-settings-popup\")]");
pub const CLOSE_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-closeTaskSettings\")]");

// name and description
pub const TASK_NAME: Locator =
    Locator::xpath_static("//div[contains(@class, \"task-settings__name\")]");
pub const TASK_NAME_INPUT: Locator =
    Locator::xpath_static("//input[contains(@class, \"js-taskNameInput\")]");
pub const SAVE_TASK_NAME_BUTTON: Locator =
    Locator::xpath_static("//button[contains(@class, \"js-saveTaskName\")]");
pub const DESCRIPTION: Locator =
    Locator::xpath_static("//div[contains(@class, \"task-settings__description\")]");
pub const DESCRIPTION_INPUT: Locator =
    Locator::xpath_static("//textarea[contains(@class, \"js-taskDescriptionInput\")]");
pub const SAVE_DESCRIPTION_BUTTON: Locator =
    Locator::xpath_static("//button[contains(@class, \"js-saveTaskDescription\")]");

// labels
pub const OPEN_LABELS_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-openLabels\")]");
pub const LABELS_POPUP: Locator = Locator::xpath_static("//div[contains(@class, \"labels-popup\")]");
pub const ADD_LABEL_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-addNewLabel\")]");
pub const LABEL_NAME_INPUT: Locator =
    Locator::xpath_static("//input[contains(@class, \"js-labelNameInput\")]");
pub const SAVE_LABEL_BUTTON: Locator =
    Locator::xpath_static("//button[contains(@class, \"js-saveLabel\")]");
pub const CLOSE_LABELS_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-closeLabels\")]");

// task deletion
pub const DELETE_TASK_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-deleteTask\")]");
pub const CONFIRM_DELETE_TASK_BUTTON: Locator =
    Locator::xpath_static("//button[contains(@class, \"js-confirmDeleteTask\")]");

// checklists
pub const ADD_CHECKLIST_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-addChecklist\")]");
pub const CHECKLIST_NAME_INPUT: Locator =
    Locator::xpath_static("//input[contains(@class, \"js-checklistNameInput\")]");
pub const SAVE_CHECKLIST_BUTTON: Locator =
    Locator::xpath_static("//button[contains(@class, \"js-saveChecklist\")]");
/// Delete button, relative to a checklist root
pub const DELETE_CHECKLIST_BUTTON: Locator =
    Locator::xpath_static(".//div[contains(@class, \"js-deleteChecklist\")]");
pub const ADD_CHECKLIST_ITEM_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-addChecklistItem\")]");
pub const CHECKLIST_ITEM_INPUT: Locator =
    Locator::xpath_static("//input[contains(@class, \"js-checklistItemInput\")]");
pub const SAVE_CHECKLIST_ITEM_BUTTON: Locator =
    Locator::xpath_static("//button[contains(@class, \"js-saveChecklistItem\")]");
/// Checkbox, relative to a checklist item root
pub const CHECKLIST_ITEM_CHECKBOX: Locator =
    Locator::xpath_static(".//input[@type=\"checkbox\"]");

// comments
pub const COMMENT_INPUT: Locator =
    Locator::xpath_static("//textarea[contains(@class, \"js-commentInput\")]");
pub const SEND_COMMENT_BUTTON: Locator =
    Locator::xpath_static("//button[contains(@class, \"js-sendComment\")]");
pub const DELETE_COMMENT_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-deleteComment\")]");

/// Label named `name` among the board's labels in the labels popup
pub fn board_label(name: &str) -> Locator {
    Locator::xpath(format!(
        "//div[contains(@class, \"labels-popup__label\") and normalize-space(.)={}]",
        xpath_literal(name)
    ))
}

/// Label named `name` among the labels bound to the task
pub fn bound_label(name: &str) -> Locator {
    Locator::xpath(format!(
        "//div[contains(@class, \"task-settings__label\") and normalize-space(.)={}]",
        xpath_literal(name)
    ))
}

/// Root of the checklist named `name`
pub fn checklist(name: &str) -> Locator {
    Locator::xpath(format!(
        "//div[{} and .//div[{} and normalize-space(.)={}]]",
        has_class("checklist"),
        has_class("checklist__title"),
        xpath_literal(name)
    ))
}

/// Root of the checklist item reading `text`
pub fn checklist_item(text: &str) -> Locator {
    Locator::xpath(format!(
        "//div[{} and .//span[normalize-space(.)={}]]",
        has_class("checklist-item"),
        xpath_literal(text)
    ))
}

/// Comment reading `text`
pub fn comment(text: &str) -> Locator {
    Locator::xpath(format!(
        "//div[contains(@class, \"comment__text\") and normalize-space(.)={}]",
        xpath_literal(text)
    ))
}

#[derive(Debug, Clone)]
pub struct TaskSettingsPopup {
    session: Session,
}

impl TaskSettingsPopup {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn rename_task(&self, name: &str) -> Result<()> {
        info!("Renaming task to {:?}", name);
        self.session.fill(&TASK_NAME_INPUT, name).await?;
        self.session.click(&SAVE_TASK_NAME_BUTTON).await
    }

    pub async fn task_name(&self) -> Result<String> {
        self.session.text(&TASK_NAME).await
    }

    pub async fn change_description(&self, description: &str) -> Result<()> {
        info!("Changing task description");
        self.session.fill(&DESCRIPTION_INPUT, description).await?;
        self.session.click(&SAVE_DESCRIPTION_BUTTON).await
    }

    pub async fn description(&self) -> Result<String> {
        self.session.text(&DESCRIPTION).await
    }

    /// Open the labels popup and wait for it
    pub async fn open_labels(&self) -> Result<()> {
        self.session.click(&OPEN_LABELS_BUTTON).await?;
        self.session
            .wait_for(&LABELS_POPUP, self.session.timeouts().container())
            .await?;
        Ok(())
    }

    /// Add a label to the board; the labels popup must be open
    pub async fn create_label(&self, name: &str) -> Result<()> {
        info!("Creating label {:?}", name);
        self.session.click(&ADD_LABEL_BUTTON).await?;
        self.session.fill(&LABEL_NAME_INPUT, name).await?;
        self.session.click(&SAVE_LABEL_BUTTON).await
    }

    pub async fn close_labels(&self) -> Result<()> {
        self.session.click(&CLOSE_LABELS_BUTTON).await?;
        self.session
            .wait_until_absent(&LABELS_POPUP, self.session.timeouts().container())
            .await
    }

    /// Whether the board has a label named `name`; opens the labels popup if needed
    pub async fn has_label(&self, name: &str) -> Result<bool> {
        self.ensure_labels_open().await?;
        self.session
            .is_present(&board_label(name), self.session.timeouts().check())
            .await
    }

    /// Bind the board label `name` to the task
    pub async fn bind_label(&self, name: &str) -> Result<()> {
        info!("Binding label {:?}", name);
        self.ensure_labels_open().await?;
        self.session.click(&board_label(name)).await?;
        self.close_labels().await
    }

    pub async fn is_label_bound(&self, name: &str) -> Result<bool> {
        self.session
            .is_present(&bound_label(name), self.session.timeouts().check())
            .await
    }

    /// Delete the task; the popup closes
    pub async fn delete_task(&self) -> Result<()> {
        info!("Deleting task");
        self.session.click(&DELETE_TASK_BUTTON).await?;
        self.session.click(&CONFIRM_DELETE_TASK_BUTTON).await?;
        self.session
            .wait_until_absent(&CONTAINER, self.session.timeouts().container())
            .await
    }

    pub async fn create_checklist(&self, name: &str) -> Result<()> {
        info!("Creating checklist {:?}", name);
        self.session.click(&ADD_CHECKLIST_BUTTON).await?;
        self.session.fill(&CHECKLIST_NAME_INPUT, name).await?;
        self.session.click(&SAVE_CHECKLIST_BUTTON).await
    }

    pub async fn has_checklist(&self, name: &str) -> Result<bool> {
        self.session
            .is_present(&checklist(name), self.session.timeouts().check())
            .await
    }

    pub async fn delete_checklist(&self, name: &str) -> Result<()> {
        info!("Deleting checklist {:?}", name);
        let button = checklist(name).join(&DELETE_CHECKLIST_BUTTON)?;
        self.session.click(&button).await
    }

    /// Add an item to the task's checklist
    pub async fn add_checklist_item(&self, text: &str) -> Result<()> {
        info!("Adding checklist item {:?}", text);
        self.session.click(&ADD_CHECKLIST_ITEM_BUTTON).await?;
        self.session.fill(&CHECKLIST_ITEM_INPUT, text).await?;
        self.session.click(&SAVE_CHECKLIST_ITEM_BUTTON).await
    }

    pub async fn has_checklist_item(&self, text: &str) -> Result<bool> {
        self.session
            .is_present(&checklist_item(text), self.session.timeouts().check())
            .await
    }

    pub async fn toggle_checklist_item(&self, text: &str) -> Result<()> {
        let checkbox = checklist_item(text).join(&CHECKLIST_ITEM_CHECKBOX)?;
        self.session.click(&checkbox).await
    }

    pub async fn is_checklist_item_marked(&self, text: &str) -> Result<bool> {
        let checkbox = checklist_item(text).join(&CHECKLIST_ITEM_CHECKBOX)?;
        let session = &self.session;
        session
            .wait(session.timeouts().check())
            .check(&format!("checklist item {:?} marked", text), || {
                let checkbox = &checkbox;
                async move { session.find(checkbox).await?.is_selected().await }
            })
            .await
    }

    pub async fn add_comment(&self, text: &str) -> Result<()> {
        info!("Adding comment");
        self.session.fill(&COMMENT_INPUT, text).await?;
        self.session.click(&SEND_COMMENT_BUTTON).await
    }

    pub async fn has_comment(&self, text: &str) -> Result<bool> {
        self.session
            .is_present(&comment(text), self.session.timeouts().check())
            .await
    }

    /// Delete the first comment of the task
    pub async fn delete_comment(&self) -> Result<()> {
        info!("Deleting comment");
        self.session.click(&DELETE_COMMENT_BUTTON).await
    }

    pub async fn close(&self) -> Result<()> {
        self.session.click(&CLOSE_BUTTON).await?;
        self.session
            .wait_until_absent(&CONTAINER, self.session.timeouts().container())
            .await
    }

    async fn ensure_labels_open(&self) -> Result<()> {
        if self.session.find_all(&LABELS_POPUP).await?.is_empty() {
            debug!("Labels popup closed, opening it");
            self.open_labels().await?;
        }
        Ok(())
    }
}

impl Component for TaskSettingsPopup {
    const NAME: &'static str = "TaskSettingsPopup";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(CONTAINER)
    }
}
