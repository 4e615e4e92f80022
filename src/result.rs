//! Result and error types for Sondear.

use thiserror::Error;

/// Result type for Sondear operations
pub type SondearResult<T> = Result<T, SondearError>;

/// Errors that can occur while driving an automation surface.
///
/// Every variant is a hard stop for the operation that produced it. The
/// page-object layer performs no retries, no recovery, and no translation;
/// failures propagate to the invoking test case unmodified.
#[derive(Debug, Error)]
pub enum SondearError {
    /// A query resolved to zero elements within the allotted time
    #[error("no element matched {selector} within {timeout_ms}ms")]
    NotFound {
        /// Rendered selector that failed to resolve
        selector: String,
        /// Resolution timeout in milliseconds
        timeout_ms: u64,
    },

    /// A strict query resolved to more than one element
    #[error("strict mode violation: {selector} resolved to {count} elements")]
    AmbiguousMatch {
        /// Rendered selector
        selector: String,
        /// Number of elements that matched
        count: usize,
    },

    /// Element exists but never became clickable/fillable/checkable
    #[error("element {selector} not actionable after {timeout_ms}ms: {reason}")]
    NotActionable {
        /// Rendered selector
        selector: String,
        /// Why the element could not be acted on
        reason: String,
        /// Actionability timeout in milliseconds
        timeout_ms: u64,
    },

    /// A surface-level wait ran out of time
    #[error("operation timed out after {ms}ms")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
    },

    /// The selector form is not supported by the surface
    #[error("unsupported selector: {selector}")]
    UnsupportedSelector {
        /// Rendered selector
        selector: String,
    },

    /// Navigation failed
    #[error("navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// The surface was closed before or during the operation
    #[error("automation surface is closed")]
    SurfaceClosed,

    /// Expected vs. actual mismatch from an `expect` assertion
    #[error("assertion failed: {message}")]
    AssertionFailed {
        /// Human-readable mismatch description
        message: String,
    },
}
