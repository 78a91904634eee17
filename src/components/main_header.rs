//! Header shown on every signed-in page

use tracing::info;

use crate::locator::Locator;
use crate::pom::Component;
use crate::session::Session;
use crate::Result;

pub const CONTAINER: Locator = Locator::xpath_static("//div[contains(@class, \"main-header\")]");
pub const BOARDS_BUTTON: Locator = Locator::xpath_static("//a[contains(@class, \"js-openBoards\")]");
pub const USERNAME: Locator =
    Locator::xpath_static("//div[contains(@class, \"main-header__username\")]");
pub const LOGOUT_BUTTON: Locator = Locator::xpath_static("//a[contains(@class, \"js-logout\")]");

#[derive(Debug, Clone)]
pub struct MainHeader {
    session: Session,
}

impl MainHeader {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Go to the boards overview
    pub async fn open_boards(&self) -> Result<()> {
        info!("Opening boards from the main header");
        self.session.click(&BOARDS_BUTTON).await
    }

    /// Name of the signed-in user
    pub async fn username(&self) -> Result<String> {
        self.session.text(&USERNAME).await
    }

    pub async fn logout(&self) -> Result<()> {
        info!("Logging out");
        self.session.click(&LOGOUT_BUTTON).await
    }
}

impl Component for MainHeader {
    const NAME: &'static str = "MainHeader";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(CONTAINER)
    }
}
