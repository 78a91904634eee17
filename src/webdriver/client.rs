//! WebDriver HTTP client implementation
//!
//! This module speaks the W3C WebDriver protocol to a remote endpoint (a
//! Selenium hub or a standalone driver) over HTTP+JSON.

use super::traits::WebDriverClient;
use super::types::*;
use crate::locator::Locator;
use crate::Error;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// WebDriver client over HTTP
#[derive(Debug)]
pub struct WebDriverHttpClient {
    /// HTTP client
    http: reqwest::Client,
    /// Endpoint URL without trailing slash (e.g. "http://127.0.0.1:4444/wd/hub")
    endpoint: String,
    /// Remote session ID
    session_id: String,
    /// Set once the session is deleted
    closed: AtomicBool,
}

impl WebDriverHttpClient {
    /// Open a new remote session
    ///
    /// # Arguments
    /// * `endpoint` - WebDriver endpoint URL
    /// * `browser` - Browser to request
    /// * `request_timeout` - Per-request HTTP timeout
    pub async fn new_session(
        endpoint: &str,
        browser: Browser,
        request_timeout: Duration,
    ) -> Result<Self, Error> {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("Opening {} session at {}", browser.browser_name(), endpoint);

        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| Error::internal(format!("Failed to create HTTP client: {}", e)))?;

        let url = format!("{}/session", endpoint);
        let response = http.post(&url).json(&browser.capabilities()).send().await?;
        let created: NewSessionResponse = Self::parse_response(response).await?;

        info!("Session {} created", created.session_id);
        debug!("Negotiated capabilities: {}", created.capabilities);

        Ok(Self {
            http,
            endpoint,
            session_id: created.session_id,
            closed: AtomicBool::new(false),
        })
    }

    /// Decode a W3C response, mapping error payloads onto `Error`
    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return match serde_json::from_str::<WireResponse<WireError>>(&body) {
                Ok(wire) => Err(wire.value.into()),
                Err(_) => Err(Error::webdriver(
                    status.to_string(),
                    body.chars().take(200).collect::<String>(),
                )),
            };
        }

        let wire: WireResponse<T> = serde_json::from_str(&body)?;
        Ok(wire.value)
    }

    /// Send one command on this session
    async fn command<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, Error> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(Error::session_closed(&self.session_id));
        }

        let url = format!("{}/session/{}{}", self.endpoint, self.session_id, path);
        debug!("WebDriver {} {}", method, url);

        let mut request = self.http.request(method.clone(), &url);
        if method == Method::POST {
            request = request.json(&body.unwrap_or_else(|| json!({})));
        }

        let response = request.send().await?;
        Self::parse_response(response).await
    }

    fn element_path(element: &ElementId, suffix: &str) -> String {
        format!("/element/{}{}", element, suffix)
    }

    fn locator_body(locator: &Locator) -> Result<Value, Error> {
        let (using, value) = locator.to_w3c();
        Ok(serde_json::to_value(FindElementParams { using, value })?)
    }
}

#[async_trait]
impl WebDriverClient for WebDriverHttpClient {
    fn session_id(&self) -> &str {
        &self.session_id
    }

    async fn navigate(&self, url: &str) -> Result<(), Error> {
        info!("Navigating to {}", url);
        let _: Value = self.command(Method::POST, "/url", Some(json!({ "url": url }))).await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String, Error> {
        self.command(Method::GET, "/url", None).await
    }

    async fn refresh(&self) -> Result<(), Error> {
        info!("Refreshing page");
        let _: Value = self.command(Method::POST, "/refresh", None).await?;
        Ok(())
    }

    async fn maximize_window(&self) -> Result<(), Error> {
        let _: Value = self.command(Method::POST, "/window/maximize", None).await?;
        Ok(())
    }

    async fn set_implicit_wait(&self, timeout: Duration) -> Result<(), Error> {
        let implicit = u64::try_from(timeout.as_millis())
            .map_err(|_| Error::configuration(format!("Implicit wait {:?} is too long", timeout)))?;
        let params = TimeoutsParams { implicit };
        let _: Value = self
            .command(Method::POST, "/timeouts", Some(serde_json::to_value(params)?))
            .await?;
        Ok(())
    }

    async fn find_element(&self, locator: &Locator) -> Result<ElementId, Error> {
        let body = Self::locator_body(locator)?;
        let element: WireElement = self.command(Method::POST, "/element", Some(body)).await?;
        Ok(element.into())
    }

    async fn find_elements(&self, locator: &Locator) -> Result<Vec<ElementId>, Error> {
        let body = Self::locator_body(locator)?;
        let elements: Vec<WireElement> = self.command(Method::POST, "/elements", Some(body)).await?;
        Ok(elements.into_iter().map(ElementId::from).collect())
    }

    async fn find_element_from(
        &self,
        parent: &ElementId,
        locator: &Locator,
    ) -> Result<ElementId, Error> {
        let body = Self::locator_body(locator)?;
        let element: WireElement = self
            .command(Method::POST, &Self::element_path(parent, "/element"), Some(body))
            .await?;
        Ok(element.into())
    }

    async fn click(&self, element: &ElementId) -> Result<(), Error> {
        let _: Value = self
            .command(Method::POST, &Self::element_path(element, "/click"), None)
            .await?;
        Ok(())
    }

    async fn clear(&self, element: &ElementId) -> Result<(), Error> {
        let _: Value = self
            .command(Method::POST, &Self::element_path(element, "/clear"), None)
            .await?;
        Ok(())
    }

    async fn send_keys(&self, element: &ElementId, text: &str) -> Result<(), Error> {
        let params = SendKeysParams {
            text: text.to_string(),
        };
        let _: Value = self
            .command(
                Method::POST,
                &Self::element_path(element, "/value"),
                Some(serde_json::to_value(params)?),
            )
            .await?;
        Ok(())
    }

    async fn text(&self, element: &ElementId) -> Result<String, Error> {
        self.command(Method::GET, &Self::element_path(element, "/text"), None)
            .await
    }

    async fn attribute(&self, element: &ElementId, name: &str) -> Result<Option<String>, Error> {
        self.command(
            Method::GET,
            &Self::element_path(element, &format!("/attribute/{}", name)),
            None,
        )
        .await
    }

    async fn is_selected(&self, element: &ElementId) -> Result<bool, Error> {
        self.command(Method::GET, &Self::element_path(element, "/selected"), None)
            .await
    }

    async fn is_displayed(&self, element: &ElementId) -> Result<bool, Error> {
        self.command(Method::GET, &Self::element_path(element, "/displayed"), None)
            .await
    }

    async fn screenshot(&self) -> Result<Vec<u8>, Error> {
        info!("Capturing screenshot");
        let data: String = self.command(Method::GET, "/screenshot", None).await?;
        BASE64
            .decode(data)
            .map_err(|e| Error::internal(format!("Failed to decode screenshot: {}", e)))
    }

    async fn quit(&self) -> Result<(), Error> {
        if self.closed.load(Ordering::SeqCst) {
            warn!("Session {} already closed", self.session_id);
            return Ok(());
        }

        info!("Deleting session {}", self.session_id);
        let _: Value = self.command(Method::DELETE, "", None).await?;
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
