//! # WebDriver transport layer
//!
//! Talks to a remote browser through the W3C WebDriver protocol.
//!
//! ## Module structure
//! - `traits`: the [`WebDriverClient`] seam every session is driven through
//! - `types`: wire payloads, element references, browser capabilities
//! - `client`: HTTP implementation against a Selenium hub or standalone driver
//! - `mock`: in-memory implementation with a scriptable document
//!
//! ## Example
//! ```rust,no_run
//! use drello_e2e::webdriver::{Browser, WebDriverClient, WebDriverHttpClient};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WebDriverHttpClient::new_session(
//!     "http://127.0.0.1:4444/wd/hub",
//!     Browser::Chrome,
//!     Duration::from_secs(60),
//! )
//! .await?;
//! client.navigate("https://drello.works/").await?;
//! client.quit().await?;
//! # Ok(())
//! # }
//! ```

pub mod traits;
pub mod types;
pub mod client;
pub mod mock;

pub use traits::WebDriverClient;
pub use types::{Browser, ElementId, ELEMENT_KEY};

// Re-export implementation structs
pub use client::WebDriverHttpClient;

// Re-export mock for development/testing
pub use mock::{MockDom, MockNode, MockWebDriver};
