//! Wait mechanisms and timing constants.
//!
//! Every interaction against a surface auto-waits internally; the values
//! here bound that waiting. Surface-level waits (URL, network response,
//! network idle) take a [`WaitOptions`] and a [`UrlPattern`].

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout for element resolution and actionability (5 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default polling interval for auto-waiting (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Default timeout for surface-level waits (30 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 30_000;

/// Page load states a surface-level wait can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadState {
    /// The `load` event has fired
    Load,
    /// The `DOMContentLoaded` event has fired
    DomContentLoaded,
    /// No in-flight network activity remains
    NetworkIdle,
}

impl LoadState {
    /// Event name as reported by the surface
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::DomContentLoaded => "DOMContentLoaded",
            Self::NetworkIdle => "networkidle",
        }
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_name())
    }
}

/// Options for surface-level wait operations.
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Timeout for the whole wait
    pub timeout: Duration,
    /// Polling interval
    pub poll_interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_WAIT_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl WaitOptions {
    /// Create wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overall timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A URL match pattern supporting `*` wildcards.
///
/// `*` matches any run of characters, including none. A pattern without
/// wildcards must match the URL exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlPattern(String);

impl UrlPattern {
    /// Create a pattern from literal text with optional `*` wildcards
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Pattern text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `url` matches this pattern
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        glob_match(&self.0, url)
    }
}

impl From<&str> for UrlPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for UrlPattern {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl std::fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn glob_match(pattern: &str, text: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();
    if parts.len() == 1 {
        return pattern == text;
    }
    let mut rest = text;
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        if i == 0 {
            match rest.strip_prefix(part) {
                Some(stripped) => rest = stripped,
                None => return false,
            }
        } else if i == parts.len() - 1 {
            return rest.ends_with(part);
        } else {
            match rest.find(part) {
                Some(pos) => rest = &rest[pos + part.len()..],
                None => return false,
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_pattern_requires_equality() {
        let pattern = UrlPattern::new("https://deals.ezra.fi/");
        assert!(pattern.matches("https://deals.ezra.fi/"));
        assert!(!pattern.matches("https://deals.ezra.fi/signin"));
    }

    #[test]
    fn wildcard_matches_any_run() {
        let pattern = UrlPattern::new("http://uitestingplayground.com/ajax*");
        assert!(pattern.matches("http://uitestingplayground.com/ajax"));
        assert!(pattern.matches("http://uitestingplayground.com/ajaxdata"));
        assert!(!pattern.matches("http://uitestingplayground.com/click"));

        let infix = UrlPattern::new("*/pages/forms/*");
        assert!(infix.matches("http://localhost:4200/pages/forms/layouts"));
        assert!(!infix.matches("http://localhost:4200/pages/charts"));
    }
}
