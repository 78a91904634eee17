//! # Session layer
//!
//! A [`Session`] owns one remote browser session; an [`Element`] is a handle
//! to one element inside it. Both sit on top of a [`WebDriverClient`], so the
//! same page objects run against the HTTP client or the in-memory mock.
//!
//! [`WebDriverClient`]: crate::webdriver::WebDriverClient
//!
//! ## Example
//! ```rust,no_run
//! use drello_e2e::config::Config;
//! use drello_e2e::locator::Locator;
//! use drello_e2e::session::Session;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = Session::connect(Config::from_env()?).await?;
//! session.goto("https://drello.works/").await?;
//!
//! let title = Locator::xpath_static("//div[@class=\"board-header-left__title\"]");
//! let element = session.wait_for(&title, session.timeouts().element()).await?;
//! println!("Board: {}", element.text().await?);
//!
//! session.quit().await?;
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod element;

pub use browser::Session;
pub use element::Element;
