//! # Page Object Model base
//!
//! ## Module structure
//! - `component`: [`Component`], a container locator plus the waits around it
//! - `page`: [`Page`], a component reachable by URL
//!
//! Concrete implementations live in [`crate::components`] and [`crate::pages`].

pub mod component;
pub mod page;

pub use component::Component;
pub use page::{page_url, Page};
