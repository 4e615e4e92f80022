//! Shared fixtures for the integration suites.

// Not every suite uses every fixture.
#![allow(dead_code)]

use sondear::prelude::*;
use std::sync::Arc;

/// Route `tracing` output through the test harness. Safe to call from every
/// test; only the first call installs a subscriber.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The Form Layouts page as the demo application renders it: a grid form
/// with credentials and radio options, an inline form with a remember-me
/// checkbox, and a basic form used by the locator-syntax scenarios.
pub fn form_layouts() -> Arc<MockSurface> {
    MockSurface::builder()
        .url("http://localhost:4200/pages/forms/layouts")
        .card(
            Card::titled("Using the Grid")
                .widget(
                    Widget::textbox("Email")
                        .id("inputEmail1")
                        .class("shape-rectangle")
                        .attr("type", "email"),
                )
                .widget(
                    Widget::textbox("Password")
                        .id("inputPassword2")
                        .class("shape-rectangle"),
                )
                .widget(Widget::radio("Option 1").covered())
                .widget(Widget::radio("Option 2").covered())
                .widget(Widget::button("Sign in")),
        )
        .card(inline_form_card(false))
        .card(
            Card::titled("Basic Form")
                .widget(
                    Widget::textbox("Email")
                        .id("inputEmail3")
                        .class("shape-rectangle"),
                )
                .widget(Widget::textbox("Password").id("inputPassword4"))
                .widget(Widget::checkbox("Check me out"))
                .widget(Widget::button("Submit").class("status-danger")),
        )
        .card(
            Card::new()
                .tag("nb-layout-header")
                .widget(Widget::link("IoT Dashboard").title("IoT Dashboard")),
        )
        .build()
}

/// Variant of [`form_layouts`] whose remember-me checkbox starts checked.
pub fn form_layouts_with_checked_remember_me() -> Arc<MockSurface> {
    MockSurface::builder()
        .url("http://localhost:4200/pages/forms/layouts")
        .card(inline_form_card(true))
        .build()
}

fn inline_form_card(remember_me_checked: bool) -> Card {
    let mut remember = Widget::checkbox("Remember me").covered();
    if remember_me_checked {
        remember = remember.checked();
    }
    Card::titled("Inline form")
        .widget(Widget::textbox("Jane Doe"))
        .widget(Widget::textbox("Email").id("inputEmail2"))
        .widget(remember)
        .widget(Widget::button("Submit"))
}
