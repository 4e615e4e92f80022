//! Page object for the Form Layouts page.

use crate::helper::PageHelper;
use crate::locator::Locator;
use crate::result::SondearResult;
use crate::selector::{Role, Selector};
use crate::surface::SharedSurface;

/// Encapsulates the two form widgets on the Form Layouts page.
///
/// Callers state intent ("submit the grid form with these credentials");
/// the selectors and interaction order stay private to this type. Each
/// operation is a single-pass linear sequence: steps run strictly in
/// written order and the first unresolvable or non-actionable step aborts
/// the whole call.
#[derive(Debug, Clone)]
pub struct FormLayoutsPage {
    helper: PageHelper,
}

impl FormLayoutsPage {
    /// Bind the page object to one automation surface.
    #[must_use]
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            helper: PageHelper::new(surface),
        }
    }

    /// Shared helper capability, exposed for scenarios that mix page-object
    /// calls with raw waits.
    #[must_use]
    pub fn helper(&self) -> &PageHelper {
        &self.helper
    }

    /// Fill out and submit the "Using the Grid" form.
    ///
    /// Fills the email and password fields, selects the radio option whose
    /// label is `option_text`, and clicks the form's button, in that order.
    /// The radio input sits behind its styled label, so the selection
    /// bypasses actionability checks.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error if the grid card, a named field, the
    /// named option, or the button cannot be resolved; nothing is modified
    /// in that case. Fails with a not-actionable error if an element exists
    /// but never becomes interactable.
    #[tracing::instrument(skip(self, email, password))]
    pub async fn submit_grid_form_with_credentials_and_option(
        &self,
        email: &str,
        password: &str,
        option_text: &str,
    ) -> SondearResult<()> {
        let grid_form = self.grid_form();
        grid_form
            .get_by_role_named(Role::Textbox, "Email")
            .fill(email)
            .await?;
        grid_form
            .get_by_role_named(Role::Textbox, "Password")
            .fill(password)
            .await?;
        grid_form
            .get_by_role_named(Role::Radio, option_text)
            .force()
            .check()
            .await?;
        grid_form.get_by_role(Role::Button).click().await?;
        Ok(())
    }

    /// Fill out and submit the inline form.
    ///
    /// Fills the name and email fields, drives the "Remember me" control to
    /// `remember_me` without inspecting its prior state, and clicks the
    /// form's button. Driving the control to the requested state makes the
    /// operation idempotent with respect to the checkbox.
    ///
    /// # Errors
    ///
    /// Same shape as
    /// [`Self::submit_grid_form_with_credentials_and_option`].
    #[tracing::instrument(skip(self, name, email))]
    pub async fn submit_inline_form_with_name_email_and_checkbox(
        &self,
        name: &str,
        email: &str,
        remember_me: bool,
    ) -> SondearResult<()> {
        let inline_form = self
            .helper
            .locator(Selector::css("nb-card"))
            .filter_has_text("Inline form");
        inline_form
            .get_by_role_named(Role::Textbox, "Jane Doe")
            .fill(name)
            .await?;
        inline_form
            .get_by_role_named(Role::Textbox, "Email")
            .fill(email)
            .await?;
        let remember = inline_form.get_by_label("Remember me").force();
        if remember_me {
            remember.check().await?;
        } else {
            remember.uncheck().await?;
        }
        inline_form.get_by_role(Role::Button).click().await?;
        Ok(())
    }

    fn grid_form(&self) -> Locator {
        self.helper
            .locator(Selector::css("nb-card"))
            .filter_has_text("Using the Grid")
    }
}
