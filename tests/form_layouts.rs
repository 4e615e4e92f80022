//! Scenarios for the Form Layouts page objects.

mod common;

use common::{form_layouts, form_layouts_with_checked_remember_me, init_tracing};
use sondear::prelude::*;
use std::time::Duration;

#[tokio::test]
async fn grid_submit_fills_fields_selects_option_and_clicks_once() {
    init_tracing();
    let mock = form_layouts();
    let surface: SharedSurface = mock.clone();
    let form_layouts_page = FormLayoutsPage::new(surface.clone());

    form_layouts_page
        .submit_grid_form_with_credentials_and_option("a@b.com", "pw123", "Option 2")
        .await
        .expect("grid submit should succeed");

    let grid_form = surface
        .locator(Selector::css("nb-card"))
        .filter_has_text("Using the Grid");
    expect(&grid_form.get_by_role_named(Role::Textbox, "Email"))
        .to_have_value("a@b.com")
        .await
        .expect("email field holds the given value");
    expect(&grid_form.get_by_role_named(Role::Textbox, "Password"))
        .to_have_value("pw123")
        .await
        .expect("password field holds the given value");
    expect(&grid_form.get_by_role_named(Role::Radio, "Option 2"))
        .to_be_checked(true)
        .await
        .expect("requested option is selected");
    expect(&grid_form.get_by_role_named(Role::Radio, "Option 1"))
        .to_be_checked(false)
        .await
        .expect("other option stays unselected");

    assert_eq!(mock.clicks_on("Sign in"), 1);
    assert_eq!(
        mock.actions(),
        vec![
            Action::Fill {
                target: "Email".into(),
                value: "a@b.com".into()
            },
            Action::Fill {
                target: "Password".into(),
                value: "pw123".into()
            },
            Action::SetChecked {
                target: "Option 2".into(),
                checked: true,
                forced: true
            },
            Action::Click {
                target: "Sign in".into()
            },
        ],
        "steps execute strictly in written order"
    );
}

#[tokio::test]
async fn inline_submit_unchecks_a_control_that_started_checked() {
    init_tracing();
    let mock = form_layouts_with_checked_remember_me();
    let surface: SharedSurface = mock.clone();
    let page = FormLayoutsPage::new(surface.clone());

    page.submit_inline_form_with_name_email_and_checkbox("Jane", "jane@x.com", false)
        .await
        .expect("inline submit should succeed");

    let inline_form = surface
        .locator(Selector::css("nb-card"))
        .filter_has_text("Inline form");
    expect(&inline_form.get_by_role_named(Role::Textbox, "Jane Doe"))
        .to_have_value("Jane")
        .await
        .expect("name field holds the given value");
    expect(&inline_form.get_by_role_named(Role::Textbox, "Email"))
        .to_have_value("jane@x.com")
        .await
        .expect("email field holds the given value");
    expect(&inline_form.get_by_label("Remember me"))
        .to_be_checked(false)
        .await
        .expect("control is driven to unchecked despite starting checked");
    assert_eq!(mock.clicks_on("Submit"), 1);
}

#[tokio::test]
async fn inline_submit_is_idempotent_for_the_checkbox() {
    init_tracing();
    let mock = form_layouts();
    let surface: SharedSurface = mock.clone();
    let page = FormLayoutsPage::new(surface.clone());
    let remember_me = surface
        .locator(Selector::css("nb-card"))
        .filter_has_text("Inline form")
        .get_by_label("Remember me");

    page.submit_inline_form_with_name_email_and_checkbox("Jane", "jane@x.com", true)
        .await
        .expect("first submit");
    page.submit_inline_form_with_name_email_and_checkbox("Jane", "jane@x.com", true)
        .await
        .expect("second submit");
    expect(&remember_me)
        .to_be_checked(true)
        .await
        .expect("true twice leaves the control checked");

    page.submit_inline_form_with_name_email_and_checkbox("Jane", "jane@x.com", false)
        .await
        .expect("third submit");
    expect(&remember_me)
        .to_be_checked(false)
        .await
        .expect("true then false leaves the control unchecked");
}

#[tokio::test]
async fn grid_submit_against_missing_container_fails_without_side_effects() {
    init_tracing();
    // A page with no "Using the Grid" card at all.
    let mock = form_layouts_with_checked_remember_me();
    let surface: SharedSurface = mock.clone();
    let page = FormLayoutsPage::new(surface.clone());

    let err = page
        .submit_grid_form_with_credentials_and_option("a@b.com", "pw123", "Option 2")
        .await
        .expect_err("submit must fail when the container is absent");
    assert!(
        matches!(err, SondearError::NotFound { .. }),
        "unexpected error: {err}"
    );
    assert!(
        mock.actions().is_empty(),
        "no field may be modified when the container cannot be resolved"
    );
}

#[tokio::test]
async fn covered_radio_is_not_actionable_without_force() {
    init_tracing();
    let mock = form_layouts();
    let surface: SharedSurface = mock.clone();
    let option = surface
        .locator(Selector::css("nb-card"))
        .filter_has_text("Using the Grid")
        .get_by_role_named(Role::Radio, "Option 1");

    let err = option.check().await.expect_err("covered control");
    assert!(
        matches!(err, SondearError::NotActionable { .. }),
        "unexpected error: {err}"
    );

    option.clone().force().check().await.expect("force bypasses the check");
    expect(&option)
        .to_be_checked(true)
        .await
        .expect("forced check landed");
}

#[tokio::test]
async fn unscoped_ambiguous_query_fails_strict_resolution() {
    init_tracing();
    let surface: SharedSurface = form_layouts();

    let err = surface
        .get_by_role_named(Role::Textbox, "Email")
        .fill("x@y.com")
        .await
        .expect_err("three cards carry an Email textbox");
    assert!(
        matches!(err, SondearError::AmbiguousMatch { count: 3, .. }),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn operations_fail_once_the_surface_is_closed() {
    init_tracing();
    let mock = form_layouts();
    let surface: SharedSurface = mock.clone();
    let page = FormLayoutsPage::new(surface.clone());

    surface.close().await;
    let err = page
        .submit_grid_form_with_credentials_and_option("a@b.com", "pw123", "Option 2")
        .await
        .expect_err("closed surface");
    assert!(matches!(err, SondearError::SurfaceClosed));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Driving the checkbox is idempotent by construction: whatever the
        /// sequence of submits, the control ends in the last requested
        /// state.
        #[test]
        fn checkbox_state_follows_last_request(states in proptest::collection::vec(any::<bool>(), 1..6)) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("runtime");
            runtime.block_on(async {
                let surface: SharedSurface = form_layouts_with_checked_remember_me();
                let page = FormLayoutsPage::new(surface.clone());
                for &state in &states {
                    page.submit_inline_form_with_name_email_and_checkbox("Jane", "jane@x.com", state)
                        .await
                        .expect("submit");
                }
                let last = *states.last().expect("non-empty");
                let checked = surface
                    .locator(Selector::css("nb-card"))
                    .filter_has_text("Inline form")
                    .get_by_label("Remember me")
                    .is_checked()
                    .await
                    .expect("read");
                prop_assert_eq!(checked, last);
                Ok(())
            })?;
        }
    }
}

// Keep the deprecated helper exercised until it is removed for good.
#[allow(deprecated)]
#[tokio::test]
async fn wait_for_seconds_respects_the_requested_floor() {
    init_tracing();
    let surface: SharedSurface = form_layouts();
    let helper = PageHelper::new(surface);

    let start = std::time::Instant::now();
    helper.wait_for_seconds(0.25).await;
    assert!(
        start.elapsed() >= Duration::from_millis(250),
        "wait returned after {:?}",
        start.elapsed()
    );
}
