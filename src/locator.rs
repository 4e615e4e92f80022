//! Locator abstraction for element selection and interaction.
//!
//! A [`Locator`] binds a [`Selector`] and resolution options to a surface
//! handle. It is lazy: nothing is resolved at construction, and every action
//! or read re-evaluates the query against the live document. Locators are
//! strict by default: a query that resolves to more than one element fails
//! instead of silently acting on the first.

use crate::result::SondearResult;
use crate::selector::{Role, Selector};
use crate::surface::{ActionOptions, ElementState, SharedSurface};
use std::fmt;
use std::time::Duration;

/// A lazy, re-evaluated element query bound to a surface.
#[derive(Clone)]
pub struct Locator {
    surface: SharedSurface,
    selector: Selector,
    options: ActionOptions,
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locator")
            .field("selector", &self.selector)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Locator {
    /// Create a locator for `selector` on `surface`.
    #[must_use]
    pub fn new(surface: SharedSurface, selector: Selector) -> Self {
        Self {
            surface,
            selector,
            options: ActionOptions::default(),
        }
    }

    /// The selector this locator evaluates.
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Scope a further query to this locator's matches.
    #[must_use]
    pub fn locator(&self, inner: Selector) -> Self {
        self.child(inner)
    }

    /// Scoped role query.
    #[must_use]
    pub fn get_by_role(&self, role: Role) -> Self {
        self.child(Selector::role(role))
    }

    /// Scoped role query constrained by accessible name.
    #[must_use]
    pub fn get_by_role_named(&self, role: Role, name: impl Into<String>) -> Self {
        self.child(Selector::role_named(role, name))
    }

    /// Scoped label query.
    #[must_use]
    pub fn get_by_label(&self, label: impl Into<String>) -> Self {
        self.child(Selector::label(label))
    }

    /// Scoped placeholder query.
    #[must_use]
    pub fn get_by_placeholder(&self, placeholder: impl Into<String>) -> Self {
        self.child(Selector::placeholder(placeholder))
    }

    /// Scoped visible-text query.
    #[must_use]
    pub fn get_by_text(&self, text: impl Into<String>) -> Self {
        self.child(Selector::text(text))
    }

    /// Keep matches whose subtree text contains `text`.
    #[must_use]
    pub fn filter_has_text(&self, text: impl Into<String>) -> Self {
        Self {
            surface: self.surface.clone(),
            selector: self.selector.clone().has_text(text),
            options: self.options,
        }
    }

    /// Keep matches containing an `inner` match.
    #[must_use]
    pub fn filter_has(&self, inner: Selector) -> Self {
        Self {
            surface: self.surface.clone(),
            selector: self.selector.clone().has(inner),
            options: self.options,
        }
    }

    /// Override the resolution/actionability timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Allow the query to match multiple elements; actions use the first.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Bypass actionability checks for actions issued through this locator.
    ///
    /// Escape hatch for controls that are intentionally occluded, e.g. a
    /// radio input hidden behind its styled label. Forcing hides genuine
    /// overlap defects, so keep it scoped to the one interaction that
    /// needs it.
    #[must_use]
    pub fn force(mut self) -> Self {
        self.options.force = true;
        self
    }

    /// Click the matched element.
    pub async fn click(&self) -> SondearResult<()> {
        self.surface.click(&self.selector, &self.options).await
    }

    /// Replace the matched input's value with `text`.
    pub async fn fill(&self, text: &str) -> SondearResult<()> {
        self.surface.fill(&self.selector, text, &self.options).await
    }

    /// Drive the matched check control to checked.
    pub async fn check(&self) -> SondearResult<()> {
        self.set_checked(true).await
    }

    /// Drive the matched check control to unchecked.
    pub async fn uncheck(&self) -> SondearResult<()> {
        self.set_checked(false).await
    }

    /// Drive the matched check control to `checked`, regardless of its
    /// current state.
    pub async fn set_checked(&self, checked: bool) -> SondearResult<()> {
        self.surface
            .set_checked(&self.selector, checked, &self.options)
            .await
    }

    /// Text content of the matched element.
    pub async fn text_content(&self) -> SondearResult<String> {
        self.surface
            .text_content(&self.selector, &self.options)
            .await
    }

    /// Current value of the matched input.
    pub async fn input_value(&self) -> SondearResult<String> {
        self.surface
            .input_value(&self.selector, &self.options)
            .await
    }

    /// Attribute value of the matched element.
    pub async fn get_attribute(&self, name: &str) -> SondearResult<Option<String>> {
        self.surface
            .attribute(&self.selector, name, &self.options)
            .await
    }

    /// Whether the matched check control is currently checked.
    pub async fn is_checked(&self) -> SondearResult<bool> {
        self.surface.is_checked(&self.selector, &self.options).await
    }

    /// Number of current matches, without waiting.
    pub async fn count(&self) -> SondearResult<usize> {
        self.surface.count(&self.selector).await
    }

    /// Wait until the query reaches `state`.
    pub async fn wait_for(&self, state: ElementState) -> SondearResult<()> {
        self.surface
            .wait_for_state(&self.selector, state, &self.options)
            .await
    }

    fn child(&self, inner: Selector) -> Self {
        Self {
            surface: self.surface.clone(),
            selector: self.selector.clone().within(inner),
            options: self.options,
        }
    }
}

/// Locator constructors on a shared surface handle.
///
/// Mirrors the fluent entry points on [`Locator`] so tests and page objects
/// read the same whether they start from the whole document or from a scope.
pub trait Locate {
    /// Locator for an arbitrary selector.
    fn locator(&self, selector: Selector) -> Locator;

    /// Locator by role.
    fn get_by_role(&self, role: Role) -> Locator;

    /// Locator by role and accessible name.
    fn get_by_role_named(&self, role: Role, name: &str) -> Locator;

    /// Locator by label text.
    fn get_by_label(&self, label: &str) -> Locator;

    /// Locator by placeholder text.
    fn get_by_placeholder(&self, placeholder: &str) -> Locator;

    /// Locator by visible text (substring).
    fn get_by_text(&self, text: &str) -> Locator;

    /// Locator by `title` attribute.
    fn get_by_title(&self, title: &str) -> Locator;

    /// Locator by `data-testid`.
    fn get_by_test_id(&self, id: &str) -> Locator;
}

impl Locate for SharedSurface {
    fn locator(&self, selector: Selector) -> Locator {
        Locator::new(self.clone(), selector)
    }

    fn get_by_role(&self, role: Role) -> Locator {
        self.locator(Selector::role(role))
    }

    fn get_by_role_named(&self, role: Role, name: &str) -> Locator {
        self.locator(Selector::role_named(role, name))
    }

    fn get_by_label(&self, label: &str) -> Locator {
        self.locator(Selector::label(label))
    }

    fn get_by_placeholder(&self, placeholder: &str) -> Locator {
        self.locator(Selector::placeholder(placeholder))
    }

    fn get_by_text(&self, text: &str) -> Locator {
        self.locator(Selector::text(text))
    }

    fn get_by_title(&self, title: &str) -> Locator {
        self.locator(Selector::title(title))
    }

    fn get_by_test_id(&self, id: &str) -> Locator {
        self.locator(Selector::test_id(id))
    }
}
