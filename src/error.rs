//! Unified error types for the drello suite

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for drello-e2e
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport errors talking to the WebDriver endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parse/join errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any W3C error not covered by a dedicated variant
    #[error("WebDriver error ({error}): {message}")]
    WebDriver { error: String, message: String },

    /// Element lookup found nothing
    #[error("No such element: {0}")]
    NoSuchElement(String),

    /// Element reference no longer attached to the document
    #[error("Stale element reference: {0}")]
    StaleElement(String),

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Component used without a container locator
    #[error("Component {0} has no container locator")]
    MissingContainer(String),

    /// Session already quit
    #[error("Session closed: {0}")]
    SessionClosed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new WebDriver error
    pub fn webdriver<E: Into<String>, M: Into<String>>(error: E, message: M) -> Self {
        Error::WebDriver {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Create a new no such element error
    pub fn no_such_element<S: Into<String>>(msg: S) -> Self {
        Error::NoSuchElement(msg.into())
    }

    /// Create a new stale element error
    pub fn stale_element<S: Into<String>>(msg: S) -> Self {
        Error::StaleElement(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new missing container error
    pub fn missing_container<S: Into<String>>(component: S) -> Self {
        Error::MissingContainer(component.into())
    }

    /// Create a new session closed error
    pub fn session_closed<S: Into<String>>(id: S) -> Self {
        Error::SessionClosed(id.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// True for a wait that ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }

    /// True for errors a poll loop should treat as "not there yet"
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::NoSuchElement(_) | Error::StaleElement(_))
    }
}

/// Extension for results whose timeout means "absent"
pub trait ResultExt<T> {
    /// Map a timeout to `Ok(None)`, keep every other error
    fn absent_on_timeout(self) -> Result<Option<T>>;
}

impl<T> ResultExt<T> for Result<T> {
    fn absent_on_timeout(self) -> Result<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_timeout() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
