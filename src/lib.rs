//! Sondear: page-object end-to-end testing for form-driven web UIs.
//!
//! Test scenarios talk to one [`Surface`] (a browser tab/document) through
//! lazy, strict, auto-waiting [`Locator`]s, or through page objects that
//! wrap whole interaction flows behind intention-revealing methods.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌───────────────┐    ┌───────────────────┐
//! │ Test Scenario│───►│ Page Object   │───►│ Surface           │
//! │ (tests/)     │    │ (PageHelper + │    │ (automation engine│
//! │              │    │  locators)    │    │  or MockSurface)  │
//! └──────────────┘    └───────────────┘    └───────────────────┘
//! ```
//!
//! Data flows one way: scenario to page object to surface to rendered UI.
//! Nothing flows back except the success or failure of each awaited call.
//!
//! # Example
//!
//! ```
//! use sondear::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> SondearResult<()> {
//! let mock = MockSurface::builder()
//!     .card(
//!         Card::titled("Using the Grid")
//!             .widget(Widget::textbox("Email"))
//!             .widget(Widget::textbox("Password"))
//!             .widget(Widget::radio("Option 2").covered())
//!             .widget(Widget::button("Sign in")),
//!     )
//!     .build();
//! let surface: SharedSurface = mock.clone();
//!
//! let form_layouts = FormLayoutsPage::new(surface.clone());
//! form_layouts
//!     .submit_grid_form_with_credentials_and_option("a@b.com", "pw123", "Option 2")
//!     .await?;
//!
//! let email = surface
//!     .locator(Selector::css("nb-card"))
//!     .filter_has_text("Using the Grid")
//!     .get_by_role_named(Role::Textbox, "Email");
//! expect(&email).to_have_value("a@b.com").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assertion;
mod helper;
mod locator;
mod result;
mod selector;
mod surface;
mod wait;

/// Deterministic in-memory surface for hermetic suites.
pub mod mock;

/// Page objects for the demo application.
pub mod pages;

pub use assertion::{expect, expect_page, LocatorExpect, PageExpect, SoftAssertions};
pub use helper::PageHelper;
pub use locator::{Locate, Locator};
pub use result::{SondearError, SondearResult};
pub use selector::{Role, Selector};
pub use surface::{ActionOptions, ElementState, SharedSurface, Surface};
pub use wait::{
    LoadState, UrlPattern, WaitOptions, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS,
    DEFAULT_WAIT_TIMEOUT_MS,
};

/// Convenience re-exports for test scenarios.
pub mod prelude {
    pub use crate::assertion::{expect, expect_page, SoftAssertions};
    pub use crate::helper::PageHelper;
    pub use crate::locator::{Locate, Locator};
    pub use crate::mock::{Action, Card, MockSurface, Mutation, Widget};
    pub use crate::pages::FormLayoutsPage;
    pub use crate::result::{SondearError, SondearResult};
    pub use crate::selector::{Role, Selector};
    pub use crate::surface::{ElementState, SharedSurface, Surface};
    pub use crate::wait::{LoadState, UrlPattern, WaitOptions};
}
