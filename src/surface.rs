//! The automation-surface seam.
//!
//! [`Surface`] is the single capability contract the page-object layer
//! depends on. It represents one browser tab/document; all queries and
//! actions are issued against it and serialized by it. Production suites
//! bind it to a real automation engine; hermetic suites bind it to
//! [`crate::mock::MockSurface`].
//!
//! Every method is a suspension point: the call does not return until the
//! surface has resolved the query, confirmed the element actionable, and
//! performed the action, or until its timeout elapsed.

use crate::result::SondearResult;
use crate::selector::Selector;
use crate::wait::{LoadState, UrlPattern, WaitOptions, DEFAULT_TIMEOUT_MS};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// States an element query can be waited into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementState {
    /// Present in the document
    Attached,
    /// Present and rendered
    Visible,
    /// Present but not rendered
    Hidden,
    /// Absent from the document
    Detached,
}

/// Per-action resolution options.
#[derive(Debug, Clone, Copy)]
pub struct ActionOptions {
    /// How long to wait for resolution and actionability
    pub timeout: Duration,
    /// Fail on more than one match
    pub strict: bool,
    /// Bypass actionability checks (visibility, overlap).
    ///
    /// An explicit escape hatch, never the default: forcing an action hides
    /// genuine UI-overlap defects, so callers must opt in per interaction.
    pub force: bool,
}

impl Default for ActionOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            strict: true,
            force: false,
        }
    }
}

/// Handle type used to share one surface across page objects.
pub type SharedSurface = Arc<dyn Surface>;

/// One browser tab/document, driven by an external automation engine.
///
/// The trait is object-safe so page objects can hold a [`SharedSurface`]
/// without being generic over the engine. A surface is owned by exactly one
/// logical test flow; it is never shared across concurrently running cases.
#[async_trait]
pub trait Surface: Send + Sync {
    /// Navigate to `url` and wait for the document to load.
    async fn goto(&self, url: &str) -> SondearResult<()>;

    /// Current document URL.
    fn url(&self) -> String;

    /// Click the element matched by `selector`.
    async fn click(&self, selector: &Selector, options: &ActionOptions) -> SondearResult<()>;

    /// Replace the value of the input matched by `selector` with `text`.
    async fn fill(
        &self,
        selector: &Selector,
        text: &str,
        options: &ActionOptions,
    ) -> SondearResult<()>;

    /// Drive the check control matched by `selector` to `checked`.
    ///
    /// The control's prior state is not inspected; the operation always
    /// lands on the requested state.
    async fn set_checked(
        &self,
        selector: &Selector,
        checked: bool,
        options: &ActionOptions,
    ) -> SondearResult<()>;

    /// Text content of the matched element.
    async fn text_content(
        &self,
        selector: &Selector,
        options: &ActionOptions,
    ) -> SondearResult<String>;

    /// Current input value of the matched element.
    async fn input_value(
        &self,
        selector: &Selector,
        options: &ActionOptions,
    ) -> SondearResult<String>;

    /// Attribute value of the matched element, `None` when absent.
    async fn attribute(
        &self,
        selector: &Selector,
        name: &str,
        options: &ActionOptions,
    ) -> SondearResult<Option<String>>;

    /// Whether the matched element is currently checked.
    async fn is_checked(
        &self,
        selector: &Selector,
        options: &ActionOptions,
    ) -> SondearResult<bool>;

    /// Number of elements currently matching `selector`, without waiting.
    async fn count(&self, selector: &Selector) -> SondearResult<usize>;

    /// Wait until the query reaches `state`.
    async fn wait_for_state(
        &self,
        selector: &Selector,
        state: ElementState,
        options: &ActionOptions,
    ) -> SondearResult<()>;

    /// Wait until the document URL matches `pattern`.
    async fn wait_for_url(&self, pattern: &UrlPattern, options: &WaitOptions) -> SondearResult<()>;

    /// Wait for a network response whose URL matches `pattern`.
    async fn wait_for_response(
        &self,
        pattern: &UrlPattern,
        options: &WaitOptions,
    ) -> SondearResult<()>;

    /// Wait until the page reaches `state`.
    async fn wait_for_load_state(
        &self,
        state: LoadState,
        options: &WaitOptions,
    ) -> SondearResult<()>;

    /// Suspend the calling flow for a fixed duration.
    ///
    /// Cannot be cancelled once started. Prefer condition-based waits.
    async fn wait_for_timeout(&self, duration: Duration);

    /// Close the surface. Later operations fail with
    /// [`crate::SondearError::SurfaceClosed`].
    async fn close(&self);
}
