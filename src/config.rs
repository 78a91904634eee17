//! Configuration management for the drello suite

use crate::webdriver::Browser;
use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Suite configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote WebDriver endpoint
    pub webdriver: WebDriverConfig,

    /// Browser to request from the endpoint
    pub browser: Browser,

    /// Base URL of the application under test
    pub base_url: String,

    /// Account used by `LoginPage::login_with`
    pub credentials: Credentials,

    /// Wait/poll timeout table
    pub timeouts: Timeouts,

    /// Log filter used when RUST_LOG is not set
    pub log_level: String,
}

/// WebDriver endpoint location
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebDriverConfig {
    /// Host the hub listens on
    pub host: String,

    /// Port the hub listens on
    pub port: u16,

    /// Path prefix of the command API
    pub path: String,
}

/// Login credentials, no defaults
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub login: Option<String>,
    pub password: Option<String>,
}

/// Timeout table in milliseconds
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    /// Boolean presence checks (`is_open`, `has_*`)
    pub check_ms: u64,

    /// `wait_for_container`
    pub container_ms: u64,

    /// Element lookups inside page-object actions
    pub element_ms: u64,

    /// Poll interval of every wait
    pub poll_interval_ms: u64,

    /// Implicit wait pushed to the remote session; 0 keeps waits explicit
    pub implicit_ms: u64,

    /// HTTP request timeout towards the endpoint
    pub request_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webdriver: WebDriverConfig::default(),
            browser: Browser::Chrome,
            base_url: "https://drello.works/".to_string(),
            credentials: Credentials::default(),
            timeouts: Timeouts::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4444,
            path: "/wd/hub".to_string(),
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            check_ms: 3000,
            container_ms: 10000,
            element_ms: 10000,
            poll_interval_ms: 100,
            implicit_ms: 0,
            request_ms: 60000,
        }
    }
}

impl WebDriverConfig {
    /// Endpoint URL, e.g. `http://127.0.0.1:4444/wd/hub`
    pub fn endpoint(&self) -> String {
        let path = self.path.trim_matches('/');
        if path.is_empty() {
            format!("http://{}:{}", self.host, self.port)
        } else {
            format!("http://{}:{}/{}", self.host, self.port, path)
        }
    }
}

impl Credentials {
    /// Both values, or a configuration error naming the missing one
    pub fn require(&self) -> Result<(&str, &str)> {
        let login = self
            .login
            .as_deref()
            .ok_or_else(|| Error::configuration("LOGIN is not set"))?;
        let password = self
            .password
            .as_deref()
            .ok_or_else(|| Error::configuration("PASSWORD is not set"))?;
        Ok((login, password))
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Timeouts {
    pub fn check(&self) -> Duration {
        Duration::from_millis(self.check_ms)
    }

    pub fn container(&self) -> Duration {
        Duration::from_millis(self.container_ms)
    }

    pub fn element(&self) -> Duration {
        Duration::from_millis(self.element_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn implicit(&self) -> Duration {
        Duration::from_millis(self.implicit_ms)
    }

    pub fn request(&self) -> Duration {
        Duration::from_millis(self.request_ms)
    }
}

impl Config {
    /// Defaults, then the file named by DRELLO_CONFIG (if any), then the environment
    pub fn load() -> Result<Self> {
        let mut config = match env::var("DRELLO_CONFIG") {
            Ok(path) => Self::from_toml(&Self::read_file(&path)?)?,
            Err(_) => Config::default(),
        };
        config.overlay_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        config.overlay_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let config = Self::from_toml(&Self::read_file(path)?)?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &str) -> Result<String> {
        std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.webdriver.host.is_empty() {
            return Err(Error::configuration("WebDriver host cannot be empty"));
        }

        if self.timeouts.poll_interval_ms == 0 {
            return Err(Error::configuration("Poll interval must be greater than 0"));
        }

        if self.timeouts.request_ms == 0 {
            return Err(Error::configuration("Request timeout must be greater than 0"));
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| Error::configuration(format!("Invalid base URL {:?}: {}", self.base_url, e)))?;

        Ok(())
    }

    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))
    }

    /// Apply variables found through `lookup` on top of the current values
    pub fn overlay_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(browser) = lookup("BROWSER") {
            self.browser = browser.parse()?;
        }

        if let Some(login) = lookup("LOGIN") {
            self.credentials.login = Some(login);
        }

        if let Some(password) = lookup("PASSWORD") {
            self.credentials.password = Some(password);
        }

        if let Some(host) = lookup("DRELLO_WEBDRIVER_HOST") {
            self.webdriver.host = host;
        }

        if let Some(port) = lookup("DRELLO_WEBDRIVER_PORT") {
            self.webdriver.port = port
                .parse()
                .map_err(|_| Error::configuration("Invalid DRELLO_WEBDRIVER_PORT"))?;
        }

        if let Some(base_url) = lookup("DRELLO_BASE_URL") {
            self.base_url = base_url;
        }

        let timeouts = [
            ("DRELLO_CHECK_TIMEOUT_MS", &mut self.timeouts.check_ms),
            ("DRELLO_CONTAINER_TIMEOUT_MS", &mut self.timeouts.container_ms),
            ("DRELLO_ELEMENT_TIMEOUT_MS", &mut self.timeouts.element_ms),
            ("DRELLO_POLL_INTERVAL_MS", &mut self.timeouts.poll_interval_ms),
        ];
        for (key, slot) in timeouts {
            if let Some(value) = lookup(key) {
                *slot = value
                    .parse()
                    .map_err(|_| Error::configuration(format!("Invalid {}", key)))?;
            }
        }

        if let Some(log_level) = lookup("DRELLO_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(())
    }
}
