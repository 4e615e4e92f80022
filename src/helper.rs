//! Shared page-object capability.

use crate::locator::{Locate, Locator};
use crate::selector::Selector;
use crate::surface::SharedSurface;
use std::fmt;
use std::time::Duration;

/// Capability shared by every page object: the surface handle plus the few
/// utilities that are not specific to any one page.
///
/// Page objects hold a `PageHelper` rather than inheriting from a base
/// type, so each depends only on the capability it actually uses and the
/// surface handle stays in exactly one place.
#[derive(Clone)]
pub struct PageHelper {
    surface: SharedSurface,
}

impl fmt::Debug for PageHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageHelper").finish_non_exhaustive()
    }
}

impl PageHelper {
    /// Bind the helper to one automation surface.
    ///
    /// The helper never outlives the surface it wraps; both live for one
    /// test case.
    #[must_use]
    pub fn new(surface: SharedSurface) -> Self {
        Self { surface }
    }

    /// Read-only access to the wrapped surface handle.
    #[must_use]
    pub fn surface(&self) -> &SharedSurface {
        &self.surface
    }

    /// Locator for `selector` on the wrapped surface.
    #[must_use]
    pub fn locator(&self, selector: Selector) -> Locator {
        self.surface.locator(selector)
    }

    /// Suspend the calling flow for `seconds` of wall time.
    ///
    /// Escape hatch for flows that cannot be expressed as a condition
    /// wait. A fixed delay either wastes time or is too short on a slow
    /// run; prefer [`crate::expect`] or
    /// [`crate::Locator::wait_for`].
    #[deprecated(note = "fixed delays are fragile; wait on a condition instead")]
    pub async fn wait_for_seconds(&self, seconds: f64) {
        let seconds = seconds.max(0.0);
        self.surface
            .wait_for_timeout(Duration::from_secs_f64(seconds))
            .await;
    }
}
