//! Common test utilities
//!
//! Shared set-up for the scenario suites: opening a session against the fake
//! or the live application, signing in, and running a scenario body so that
//! tear-down happens whatever the body returns.

#![allow(dead_code)]

pub mod fake_drello;

use std::future::Future;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use drello_e2e::config::{Config, Credentials};
use drello_e2e::logging;
use drello_e2e::pages::{BoardsPage, LoginPage};
use drello_e2e::pom::{Component, Page};
use drello_e2e::session::Session;

pub const FAKE_LOGIN: &str = "qa@drello.works";
pub const FAKE_PASSWORD: &str = "correct horse battery staple";

/// Where a scenario runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// In-memory drello on the mock driver
    Fake,
    /// drello.works through the configured Selenium hub
    Live,
}

/// Open a session on `backend`
pub async fn open_session(backend: Backend) -> anyhow::Result<Session> {
    match backend {
        Backend::Fake => {
            let (session, _) = fake_session();
            Ok(session)
        }
        Backend::Live => {
            let config = Config::load()?;
            logging::init(&config);
            Ok(Session::connect(config).await?)
        }
    }
}

/// A session on a fresh fake drello, plus a handle to its state
pub fn fake_session() -> (Session, Arc<Mutex<fake_drello::Drello>>) {
    let mut config = Config::default();
    config.credentials = Credentials {
        login: Some(FAKE_LOGIN.to_string()),
        password: Some(FAKE_PASSWORD.to_string()),
    };
    logging::init(&config);

    let (driver, app) = fake_drello::driver(FAKE_LOGIN, FAKE_PASSWORD);
    (Session::with_client(Arc::new(driver), config), app)
}

/// Log in with the configured credentials and wait for the boards page
pub async fn sign_in(session: &Session) -> anyhow::Result<BoardsPage> {
    let login_page = LoginPage::new(session.clone());
    login_page.open().await?;
    login_page.wait_for_container().await?;
    login_page
        .login_with(&session.config().credentials)
        .await?;

    let boards_page = BoardsPage::new(session.clone());
    boards_page.wait_for_container().await?;
    Ok(boards_page)
}

/// Open a session and sign in; the session is closed again if signing in fails
pub async fn signed_in(backend: Backend) -> anyhow::Result<(Session, BoardsPage)> {
    let session = open_session(backend).await?;
    match sign_in(&session).await {
        Ok(boards_page) => Ok((session, boards_page)),
        Err(e) => {
            if let Err(quit) = session.quit().await {
                tracing::warn!("Failed to quit after unsuccessful sign in: {}", quit);
            }
            Err(e)
        }
    }
}

/// `prefix` followed by the current time in milliseconds
pub fn unique_name(prefix: &str) -> String {
    format!("{}{}", prefix, chrono::Utc::now().timestamp_millis())
}

/// Per-scenario fixture
#[async_trait]
pub trait Suite: Clone + Send + Sized + 'static {
    async fn set_up(backend: Backend) -> anyhow::Result<Self>;

    /// Application clean-up, then `quit`
    async fn tear_down(self) -> anyhow::Result<()>;
}

/// Set up, run `body`, and tear down even when `body` fails
pub async fn run<S, F, Fut>(backend: Backend, body: F) -> anyhow::Result<()>
where
    S: Suite,
    F: FnOnce(S) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let suite = S::set_up(backend).await?;
    let outcome = body(suite.clone()).await;
    let teardown = suite.tear_down().await;

    match (outcome, teardown) {
        (Err(e), Err(teardown)) => {
            tracing::warn!("Tear-down failed after a failed scenario: {}", teardown);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), teardown) => teardown,
    }
}

/// One fake-backend test and one live test per scenario function
///
/// Each scenario is an `async fn(Suite) -> anyhow::Result<()>` at the root of
/// the test file.
macro_rules! scenarios {
    ($suite:ty { $($name:ident),* $(,)? }) => {
        mod fake {
            use super::*;

            $(
                #[tokio::test(start_paused = true)]
                async fn $name() -> anyhow::Result<()> {
                    common::run::<$suite, _, _>(common::Backend::Fake, super::$name).await
                }
            )*
        }

        mod live {
            use super::*;

            $(
                #[tokio::test]
                #[ignore = "needs a Selenium hub and LOGIN/PASSWORD for drello.works"]
                async fn $name() -> anyhow::Result<()> {
                    common::run::<$suite, _, _>(common::Backend::Live, super::$name).await
                }
            )*
        }
    };
}
