//! Polling assertions over locators and surfaces.
//!
//! [`expect`] retries its comparison until it holds or a timeout elapses,
//! so assertions tolerate the same rendering races the locators do. A
//! failed assertion aborts the test case unless it is routed through
//! [`SoftAssertions`], which records failures and surfaces them together
//! at [`SoftAssertions::verify`].

use crate::locator::Locator;
use crate::result::{SondearError, SondearResult};
use crate::surface::SharedSurface;
use crate::wait::{UrlPattern, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS};
use std::time::{Duration, Instant};

/// Start a polling expectation over a locator.
#[must_use]
pub fn expect(locator: &Locator) -> LocatorExpect {
    LocatorExpect {
        locator: locator.clone(),
        timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
    }
}

/// Start a polling expectation over surface-level state.
#[must_use]
pub fn expect_page(surface: &SharedSurface) -> PageExpect {
    PageExpect {
        surface: surface.clone(),
        timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
    }
}

/// A pending expectation over a locator.
#[derive(Debug, Clone)]
pub struct LocatorExpect {
    locator: Locator,
    timeout: Duration,
    poll_interval: Duration,
}

impl LocatorExpect {
    /// Override the expectation timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Expect the element's text content to equal `expected`.
    pub async fn to_have_text(&self, expected: &str) -> SondearResult<()> {
        self.poll("text", expected, |actual| actual == expected, |probe| {
            Box::pin(async move { probe.text_content().await })
        })
        .await
    }

    /// Expect the element's text content to contain `expected`.
    pub async fn to_contain_text(&self, expected: &str) -> SondearResult<()> {
        self.poll(
            "text containing",
            expected,
            |actual| actual.contains(expected),
            |probe| Box::pin(async move { probe.text_content().await }),
        )
        .await
    }

    /// Expect the input's value to equal `expected`.
    pub async fn to_have_value(&self, expected: &str) -> SondearResult<()> {
        self.poll("value", expected, |actual| actual == expected, |probe| {
            Box::pin(async move { probe.input_value().await })
        })
        .await
    }

    /// Expect the attribute `name` to equal `expected`.
    pub async fn to_have_attribute(&self, name: &str, expected: &str) -> SondearResult<()> {
        let attr = name.to_owned();
        self.poll(
            "attribute",
            expected,
            |actual| actual == expected,
            move |probe| {
                let attr = attr.clone();
                Box::pin(async move {
                    Ok(probe
                        .get_attribute(&attr)
                        .await?
                        .unwrap_or_else(|| "<absent>".to_owned()))
                })
            },
        )
        .await
    }

    /// Expect the check control to be in `checked` state.
    pub async fn to_be_checked(&self, checked: bool) -> SondearResult<()> {
        let expected = checked.to_string();
        self.poll(
            "checked state",
            &expected,
            |actual| actual == expected,
            |probe| Box::pin(async move { Ok(probe.is_checked().await?.to_string()) }),
        )
        .await
    }

    async fn poll<F, P>(
        &self,
        what: &str,
        expected: &str,
        matches: P,
        read: F,
    ) -> SondearResult<()>
    where
        P: Fn(&str) -> bool,
        F: Fn(
            Locator,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = SondearResult<String>> + Send>,
        >,
    {
        let deadline = Instant::now() + self.timeout;
        let probe = self.locator.clone().with_timeout(self.poll_interval);
        let mut last: Option<SondearResult<String>> = None;
        loop {
            let observed = read(probe.clone()).await;
            if let Ok(actual) = &observed {
                if matches(actual) {
                    return Ok(());
                }
            }
            last = Some(observed);
            if Instant::now() >= deadline {
                break;
            }
            tokio::time::sleep(self.poll_interval).await;
        }
        let actual = match last {
            Some(Ok(actual)) => format!("{actual:?}"),
            Some(Err(err)) => err.to_string(),
            None => "<never observed>".to_owned(),
        };
        Err(SondearError::AssertionFailed {
            message: format!(
                "{} expected {what} {expected:?}, last observed {actual} (after {}ms)",
                self.locator.selector(),
                self.timeout.as_millis()
            ),
        })
    }
}

/// A pending expectation over surface-level state.
#[derive(Clone)]
pub struct PageExpect {
    surface: SharedSurface,
    timeout: Duration,
    poll_interval: Duration,
}

impl std::fmt::Debug for PageExpect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageExpect")
            .field("timeout", &self.timeout)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

impl PageExpect {
    /// Override the expectation timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Expect the document URL to match `pattern`.
    pub async fn to_have_url(&self, pattern: impl Into<UrlPattern>) -> SondearResult<()> {
        let pattern = pattern.into();
        let deadline = Instant::now() + self.timeout;
        loop {
            let url = self.surface.url();
            if pattern.matches(&url) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SondearError::AssertionFailed {
                    message: format!(
                        "expected URL matching {pattern:?}, last observed {url:?} (after {}ms)",
                        self.timeout.as_millis()
                    ),
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

/// Collector for non-aborting assertions.
///
/// Route expectation results through [`SoftAssertions::check`] instead of
/// `?`; earlier failures no longer stop later steps. Call
/// [`SoftAssertions::verify`] at the end of the scenario to surface
/// everything that was recorded.
#[derive(Debug, Default)]
pub struct SoftAssertions {
    failures: Vec<SondearError>,
}

impl SoftAssertions {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` without aborting on failure.
    pub fn check(&mut self, result: SondearResult<()>) {
        if let Err(err) = result {
            tracing::debug!(error = %err, "soft assertion failed");
            self.failures.push(err);
        }
    }

    /// Number of recorded failures.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Fail with an aggregate message if any assertion was recorded.
    pub fn verify(self) -> SondearResult<()> {
        if self.failures.is_empty() {
            return Ok(());
        }
        let mut message = format!("{} soft assertion(s) failed:", self.failures.len());
        for failure in &self.failures {
            message.push_str("\n  - ");
            message.push_str(&failure.to_string());
        }
        Err(SondearError::AssertionFailed { message })
    }
}
