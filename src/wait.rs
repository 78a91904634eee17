//! Polling predicate shared by every page object
//!
//! A [`Wait`] re-runs an async probe every `interval` until it yields a value
//! or `timeout` has elapsed. `NoSuchElement` and `StaleElement` count as
//! "not yet"; any other error ends the wait immediately.

use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Timeout/interval pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wait {
    timeout: Duration,
    interval: Duration,
}

impl Wait {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Poll `probe` until it returns `Some`.
    ///
    /// The probe always runs at least once, and once more at the deadline
    /// when the timeout is not a multiple of the interval. Fails with `Error::Timeout`
    /// naming `what` when time runs out.
    pub async fn until<T, F, Fut>(&self, what: &str, mut probe: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        let deadline = Instant::now() + self.timeout;
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            match probe().await {
                Ok(Some(value)) => {
                    debug!("{} resolved after {} attempt(s)", what, attempts);
                    return Ok(value);
                }
                Ok(None) => {}
                Err(e) if e.is_transient() => {
                    debug!("{}: attempt {} not ready: {}", what, attempts, e);
                }
                Err(e) => return Err(e),
            }

            let now = Instant::now();
            if now >= deadline {
                warn!("{} not satisfied within {:?}", what, self.timeout);
                return Err(Error::timeout(format!(
                    "{} not satisfied within {}ms",
                    what,
                    self.timeout.as_millis()
                )));
            }
            // the last probe lands on the deadline
            tokio::time::sleep(self.interval.min(deadline - now)).await;
        }
    }

    /// Poll a boolean condition until it holds
    pub async fn until_true<F, Fut>(&self, what: &str, mut condition: F) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<bool>>,
    {
        self.until(what, || {
            let fut = condition();
            async move { Ok(fut.await?.then_some(())) }
        })
        .await
    }

    /// Like [`Wait::until_true`], but a timeout yields `false` instead of an error
    pub async fn check<F, Fut>(&self, what: &str, condition: F) -> Result<bool>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<bool>>,
    {
        match self.until_true(what, condition).await {
            Ok(()) => Ok(true),
            Err(e) if e.is_timeout() => Ok(false),
            Err(e) => Err(e),
        }
    }
}
