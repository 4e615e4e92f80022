//! Locator syntax, scoping, extraction, and assertion scenarios.

mod common;

use common::{form_layouts, init_tracing};
use sondear::prelude::*;
use std::time::Duration;

#[tokio::test]
async fn structural_selector_forms_resolve() {
    init_tracing();
    let surface: SharedSurface = form_layouts();

    // By tag (several inputs on the page, so strictness is relaxed).
    surface
        .locator(Selector::css("input"))
        .with_strict(false)
        .click()
        .await
        .expect("click first input");

    // By id.
    assert_eq!(
        surface.locator(Selector::id("inputEmail1")).count().await.unwrap(),
        1
    );

    // By class, by attribute, and combined.
    assert_eq!(
        surface
            .locator(Selector::css(".shape-rectangle"))
            .count()
            .await
            .unwrap(),
        3
    );
    assert_eq!(
        surface
            .locator(Selector::css("[placeholder=Email]"))
            .count()
            .await
            .unwrap(),
        3
    );
    assert_eq!(
        surface
            .locator(Selector::css("input.shape-rectangle[type=email]"))
            .count()
            .await
            .unwrap(),
        1
    );

    // By partial and by exact text.
    assert_eq!(
        surface.locator(Selector::text("Using")).count().await.unwrap(),
        1
    );
    assert_eq!(
        surface
            .locator(Selector::text_exact("Using the Grid"))
            .count()
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn descendant_combinators_are_rejected_not_misread() {
    init_tracing();
    let surface: SharedSurface = form_layouts();

    let err = surface
        .locator(Selector::css("nb-card input"))
        .count()
        .await
        .expect_err("descendant combinators are out of scope for the mock");
    assert!(matches!(err, SondearError::UnsupportedSelector { .. }));
}

#[tokio::test]
async fn user_facing_selector_forms_resolve() {
    init_tracing();
    let surface: SharedSurface = form_layouts();

    surface
        .get_by_role_named(Role::Button, "Sign in")
        .click()
        .await
        .expect("role + accessible name");
    surface
        .get_by_label("Remember me")
        .force()
        .check()
        .await
        .expect("label");
    surface
        .get_by_placeholder("Jane Doe")
        .fill("Jane")
        .await
        .expect("placeholder");
    surface
        .get_by_title("IoT Dashboard")
        .click()
        .await
        .expect("title");
    surface
        .locator(Selector::role_named(Role::Heading, "Using the Grid"))
        .wait_for(ElementState::Attached)
        .await
        .expect("heading role resolves to the card");
}

#[tokio::test]
async fn child_and_parent_scoping() {
    init_tracing();
    let surface: SharedSurface = form_layouts();

    // Scope by containment filter, then query inside the scope.
    let grid_form = surface
        .locator(Selector::css("nb-card"))
        .filter_has_text("Using the Grid");
    grid_form
        .get_by_role_named(Role::Textbox, "Email")
        .fill("scoped@test.com")
        .await
        .expect("scoped role query is unambiguous");

    // Scope by a structural child instead of text.
    let by_child = surface
        .locator(Selector::css("nb-card"))
        .filter_has(Selector::id("inputEmail1"));
    assert_eq!(by_child.count().await.unwrap(), 1);
    by_child
        .get_by_role_named(Role::Textbox, "Email")
        .fill("by-child@test.com")
        .await
        .expect("same card, found via :has");

    // Chained filters narrow step by step.
    let basic_form = surface
        .locator(Selector::css("nb-card"))
        .filter_has(Selector::css("[type=checkbox]"))
        .filter_has_text("Basic Form");
    basic_form
        .get_by_role_named(Role::Textbox, "Email")
        .fill("chained@test.com")
        .await
        .expect("chained filters");
}

#[tokio::test]
async fn reusing_a_scoped_locator() {
    init_tracing();
    let mock = form_layouts();
    let surface: SharedSurface = mock.clone();

    let basic_form = surface
        .locator(Selector::css("nb-card"))
        .filter_has_text("Basic Form");
    let email_field = basic_form.get_by_role_named(Role::Textbox, "Email");

    email_field.fill("test@test.com").await.unwrap();
    basic_form
        .get_by_role_named(Role::Textbox, "Password")
        .fill("123456")
        .await
        .unwrap();
    basic_form.get_by_role(Role::Button).click().await.unwrap();

    assert_eq!(
        mock.actions(),
        vec![
            Action::Fill {
                target: "Email".into(),
                value: "test@test.com".into()
            },
            Action::Fill {
                target: "Password".into(),
                value: "123456".into()
            },
            Action::Click {
                target: "Submit".into()
            },
        ]
    );
}

#[tokio::test]
async fn extracting_values_from_elements() {
    init_tracing();
    let surface: SharedSurface = form_layouts();
    let basic_form = surface
        .locator(Selector::css("nb-card"))
        .filter_has_text("Basic Form");

    let button_text = basic_form
        .locator(Selector::css("button"))
        .text_content()
        .await
        .unwrap();
    assert_eq!(button_text, "Submit");

    let email_field = basic_form.get_by_role_named(Role::Textbox, "Email");
    email_field.fill("test@test.com").await.unwrap();
    assert_eq!(email_field.input_value().await.unwrap(), "test@test.com");

    assert_eq!(
        email_field.get_attribute("placeholder").await.unwrap(),
        Some("Email".to_owned())
    );
    assert_eq!(email_field.get_attribute("nonexistent").await.unwrap(), None);
}

#[tokio::test]
async fn hard_and_soft_assertions() {
    init_tracing();
    let surface: SharedSurface = form_layouts();
    let submit_button = surface
        .locator(Selector::css("nb-card"))
        .filter_has_text("Basic Form")
        .locator(Selector::css("button"));

    expect(&submit_button)
        .to_have_text("Submit")
        .await
        .expect("hard assertion passes");
    expect(&submit_button)
        .to_contain_text("Sub")
        .await
        .expect("containment passes");

    // A mismatching hard assertion aborts with the observed value.
    let err = expect(&submit_button)
        .with_timeout(Duration::from_millis(200))
        .to_have_text("Submit5")
        .await
        .expect_err("mismatch");
    assert!(err.to_string().contains("Submit"), "message carries the observed text: {err}");

    // Soft assertions record failures and keep the flow running.
    let mut soft = SoftAssertions::new();
    soft.check(
        expect(&submit_button)
            .with_timeout(Duration::from_millis(200))
            .to_have_text("Submit5")
            .await,
    );
    soft.check(expect(&submit_button).to_have_text("Submit").await);
    submit_button.click().await.expect("flow continues after soft failure");
    assert_eq!(soft.failure_count(), 1);
    assert!(soft.verify().is_err());
}

#[tokio::test]
async fn attribute_expectations_poll_like_the_rest() {
    init_tracing();
    let surface: SharedSurface = form_layouts();
    let email = surface.locator(Selector::id("inputEmail1"));

    expect(&email)
        .to_have_attribute("type", "email")
        .await
        .expect("attribute matches");
    expect(&email)
        .to_have_attribute("class", "shape-rectangle")
        .await
        .expect("class attribute is rendered");
}
