//! Login page

use tracing::info;

use crate::config::Credentials;
use crate::locator::Locator;
use crate::pom::{Component, Page};
use crate::session::Session;
use crate::Result;

pub const CONTAINER: Locator = Locator::xpath_static("//div[contains(@class, \"login-form\")]");
pub const LOGIN_INPUT: Locator = Locator::xpath_static("//input[@name=\"login\"]");
pub const PASSWORD_INPUT: Locator = Locator::xpath_static("//input[@name=\"password\"]");
pub const SUBMIT_BUTTON: Locator =
    Locator::xpath_static("//button[contains(@class, \"js-login\")]");

#[derive(Debug, Clone)]
pub struct LoginPage {
    session: Session,
}

impl LoginPage {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Submit the login form
    pub async fn login(&self, login: &str, password: &str) -> Result<()> {
        info!("Logging in as {}", login);
        self.session.fill(&LOGIN_INPUT, login).await?;
        self.session.fill(&PASSWORD_INPUT, password).await?;
        self.session.click(&SUBMIT_BUTTON).await
    }

    /// Log in with configured credentials; `Error::Configuration` when unset
    pub async fn login_with(&self, credentials: &Credentials) -> Result<()> {
        let (login, password) = credentials.require()?;
        self.login(login, password).await
    }
}

impl Component for LoginPage {
    const NAME: &'static str = "LoginPage";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(CONTAINER)
    }
}

impl Page for LoginPage {
    const PATH: &'static str = "login";
}
