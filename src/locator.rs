//! Structured element locators
//!
//! A [`Locator`] is a selector strategy plus a selector expression. Page
//! objects declare static locators as `const` values and build templated
//! ones (board by title, label by name) through functions that quote their
//! arguments with [`xpath_literal`].

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Selector strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Css,
    XPath,
    Id,
    LinkText,
    TagName,
}

/// Element locator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    pub strategy: Strategy,
    pub selector: Cow<'static, str>,
}

impl Locator {
    /// Static XPath locator, usable in `const` items
    pub const fn xpath_static(selector: &'static str) -> Self {
        Self {
            strategy: Strategy::XPath,
            selector: Cow::Borrowed(selector),
        }
    }

    /// Static CSS locator, usable in `const` items
    pub const fn css_static(selector: &'static str) -> Self {
        Self {
            strategy: Strategy::Css,
            selector: Cow::Borrowed(selector),
        }
    }

    pub fn xpath<S: Into<String>>(selector: S) -> Self {
        Self {
            strategy: Strategy::XPath,
            selector: Cow::Owned(selector.into()),
        }
    }

    pub fn css<S: Into<String>>(selector: S) -> Self {
        Self {
            strategy: Strategy::Css,
            selector: Cow::Owned(selector.into()),
        }
    }

    pub fn id<S: Into<String>>(id: S) -> Self {
        Self {
            strategy: Strategy::Id,
            selector: Cow::Owned(id.into()),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The `(using, value)` pair of a W3C "Find Element" request
    pub fn to_w3c(&self) -> (&'static str, String) {
        match self.strategy {
            Strategy::Css => ("css selector", self.selector.to_string()),
            Strategy::XPath => ("xpath", self.selector.to_string()),
            Strategy::Id => ("css selector", format!("#{}", self.selector)),
            Strategy::LinkText => ("link text", self.selector.to_string()),
            Strategy::TagName => ("tag name", self.selector.to_string()),
        }
    }

    /// Scope `child` under `self`.
    ///
    /// XPath children must be relative (`/...` or `./...`); a parent axis
    /// (`..`) cannot be scoped and is rejected. CSS children become
    /// descendants. Mixing strategies is rejected.
    pub fn join(&self, child: &Locator) -> Result<Locator> {
        match (self.strategy, child.strategy) {
            (Strategy::XPath, Strategy::XPath) => {
                let tail = child.selector.strip_prefix('.').unwrap_or(&child.selector);
                if !tail.starts_with('/') {
                    return Err(Error::configuration(format!(
                        "expected a relative xpath to scope under {}, got {:?}",
                        self, child.selector
                    )));
                }
                Ok(Locator::xpath(format!("{}{}", self.selector, tail)))
            }
            (Strategy::Css, Strategy::Css) => {
                Ok(Locator::css(format!("{} {}", self.selector, child.selector)))
            }
            (parent, child_strategy) => Err(Error::configuration(format!(
                "cannot scope a {:?} locator under a {:?} locator",
                child_strategy, parent
            ))),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (using, value) = self.to_w3c();
        write!(f, "{}={}", using, value)
    }
}

/// Quote `text` as an XPath 1.0 string literal.
///
/// XPath has no escape sequences, so text holding both quote kinds is
/// assembled with `concat()`.
pub fn xpath_literal(text: &str) -> String {
    if !text.contains('"') {
        return format!("\"{}\"", text);
    }
    if !text.contains('\'') {
        return format!("'{}'", text);
    }

    let parts: Vec<String> = text
        .split('"')
        .map(|part| format!("\"{}\"", part))
        .collect();
    format!("concat({})", parts.join(", '\"', "))
}

/// XPath predicate: the `class` attribute holds the whole token `class`.
///
/// Unlike `contains(@class, ..)` it does not match `checklists` or
/// `checklist-item` when asked for `checklist`.
pub fn has_class(class: &str) -> String {
    format!(
        "contains(concat(\" \", normalize-space(@class), \" \"), {})",
        xpath_literal(&format!(" {} ", class))
    )
}
