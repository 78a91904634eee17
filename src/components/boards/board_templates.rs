//! Template gallery on the boards page

use tracing::info;

use crate::locator::Locator;
use crate::pom::Component;
use crate::session::Session;
use crate::Result;

pub const CONTAINER: Locator =
    Locator::xpath_static("//div[contains(@class, \"board-templates\")]");
pub const WEEK_PLAN_TEMPLATE: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-createWeekPlanBoard\")]");
pub const PROJECT_MANAGEMENT_TEMPLATE: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-createProjectManagementBoard\")]");

#[derive(Debug, Clone)]
pub struct BoardTemplates {
    session: Session,
}

impl BoardTemplates {
    /// Title of the board the week plan template creates
    pub const WEEK_PLAN_BOARD_NAME: &'static str = "Week plan";
    /// Title of the board the project management template creates
    pub const PROJECT_MANAGEMENT_BOARD_NAME: &'static str = "Project management";

    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn create_week_plan_board(&self) -> Result<()> {
        info!("Creating board from the week plan template");
        self.session.click(&WEEK_PLAN_TEMPLATE).await
    }

    pub async fn create_project_management_board(&self) -> Result<()> {
        info!("Creating board from the project management template");
        self.session.click(&PROJECT_MANAGEMENT_TEMPLATE).await
    }
}

impl Component for BoardTemplates {
    const NAME: &'static str = "BoardTemplates";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(CONTAINER)
    }
}
