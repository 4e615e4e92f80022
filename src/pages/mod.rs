//! Page objects for the demo application.
//!
//! Each page object binds one surface handle to the locator knowledge of
//! one logical page and exposes operations named by business intent. Page
//! objects are transient: created once per test case, discarded at its end,
//! holding no state beyond the surface handle and no long-lived locators.

mod form_layouts;

pub use form_layouts::FormLayoutsPage;
