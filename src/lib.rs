//! drello-e2e: end-to-end UI tests for the drello kanban board
//!
//! Page objects drive a browser through a remote W3C WebDriver endpoint.
//! Scenarios live under `tests/` and run against an in-memory fake of drello
//! by default, or against the live application with `cargo test -- --ignored`.
//!
//! ## Module structure
//! - `webdriver`: wire protocol client and the in-memory mock
//! - `session`: one remote browser session and its elements
//! - `wait`: the polling utility every page object waits with
//! - `locator`: selector descriptors
//! - `pom`: `Component` and `Page` traits
//! - `components`, `pages`: drello's page objects

pub mod error;
pub mod config;
pub mod logging;

pub mod locator;
pub mod wait;
pub mod webdriver;
pub mod session;

pub mod pom;
pub mod components;
pub mod pages;

// Re-exports
pub use error::{Error, Result, ResultExt};

/// drello-e2e library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
