//! W3C WebDriver wire types
//!
//! This module defines the JSON shapes exchanged with the remote endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Key under which W3C endpoints return element references
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Remote element reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialized element reference (`{"element-6066-...": "<id>"}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireElement {
    #[serde(rename = "element-6066-11e4-a52e-4f735466cecf")]
    pub element: String,
}

impl From<WireElement> for ElementId {
    fn from(wire: WireElement) -> Self {
        ElementId(wire.element)
    }
}

/// Every W3C response wraps its payload in `value`
#[derive(Debug, Clone, Deserialize)]
pub struct WireResponse<T> {
    pub value: T,
}

/// W3C error payload
#[derive(Debug, Clone, Deserialize)]
pub struct WireError {
    pub error: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub stacktrace: Option<String>,
}

impl From<WireError> for Error {
    fn from(wire: WireError) -> Self {
        match wire.error.as_str() {
            "no such element" => Error::no_such_element(wire.message),
            "stale element reference" => Error::stale_element(wire.message),
            "timeout" | "script timeout" => Error::timeout(wire.message),
            "invalid session id" => Error::session_closed(wire.message),
            _ => Error::webdriver(wire.error, wire.message),
        }
    }
}

/// New session response payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionResponse {
    pub session_id: String,
    #[serde(default)]
    pub capabilities: Value,
}

/// Locator strategy body of "Find Element"
#[derive(Debug, Clone, Serialize)]
pub struct FindElementParams {
    pub using: &'static str,
    pub value: String,
}

/// Body of "Element Send Keys"
#[derive(Debug, Clone, Serialize)]
pub struct SendKeysParams {
    pub text: String,
}

/// Body of "Set Timeouts"
#[derive(Debug, Clone, Serialize)]
pub struct TimeoutsParams {
    pub implicit: u64,
}

/// Browser requested from the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Browser {
    Chrome,
    Firefox,
    Edge,
    Safari,
}

impl Browser {
    /// W3C `browserName` capability value
    pub fn browser_name(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
            Browser::Edge => "MicrosoftEdge",
            Browser::Safari => "safari",
        }
    }

    /// `POST /session` body selecting this browser
    pub fn capabilities(&self) -> Value {
        serde_json::json!({
            "capabilities": {
                "alwaysMatch": {
                    "browserName": self.browser_name(),
                }
            }
        })
    }
}

impl FromStr for Browser {
    type Err = Error;

    /// Parse browser names the way `BROWSER` spells them (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chrome" | "chromium" => Ok(Browser::Chrome),
            "firefox" => Ok(Browser::Firefox),
            "edge" | "microsoftedge" => Ok(Browser::Edge),
            "safari" => Ok(Browser::Safari),
            other => Err(Error::configuration(format!("Unsupported browser: {}", other))),
        }
    }
}

impl TryFrom<String> for Browser {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
