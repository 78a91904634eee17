//! Board header: title, settings and members

use tracing::info;

use crate::locator::Locator;
use crate::pom::Component;
use crate::session::Session;
use crate::Result;

pub const BOARD_TITLE: Locator =
    Locator::xpath_static("//div[@class=\"board-header-left__title\"]");
pub const BOARD_SETTINGS_BUTTON: Locator =
    Locator::xpath_static("//div[contains(@class, \"js-openBoardSettings\")]");
pub const ADD_MEMBERS_BUTTON: Locator =
    Locator::xpath_static("//img[contains(@class, \"js-addNewUser\")]");

/// Board header
///
/// Has no container of its own; it is always rendered as part of
/// [`BoardPage`](crate::pages::BoardPage).
#[derive(Debug, Clone)]
pub struct Header {
    session: Session,
}

impl Header {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Whether the title becomes `title` within the `element` timeout
    pub async fn check_title(&self, title: &str) -> Result<bool> {
        self.session
            .wait_for_text(&BOARD_TITLE, title, self.session.timeouts().element())
            .await
    }

    pub async fn board_title(&self) -> Result<String> {
        self.session.text(&BOARD_TITLE).await
    }

    pub async fn open_settings(&self) -> Result<()> {
        info!("Opening board settings");
        self.session.click(&BOARD_SETTINGS_BUTTON).await
    }

    pub async fn open_add_members(&self) -> Result<()> {
        info!("Opening add members dialog");
        self.session.click(&ADD_MEMBERS_BUTTON).await
    }
}

impl Component for Header {
    const NAME: &'static str = "Header";

    fn session(&self) -> &Session {
        &self.session
    }
}
