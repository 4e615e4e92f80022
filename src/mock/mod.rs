//! Deterministic in-memory automation surface.
//!
//! [`MockSurface`] implements the [`Surface`] seam against a scripted
//! widget model instead of a real browser, so suites run hermetically and
//! the properties of page-object operations (ordering, idempotence,
//! failure atomicity) can be asserted against a recorded action log.
//!
//! The mock keeps the seam's semantics: strict resolution with ambiguity
//! detection, auto-waiting up to the per-action timeout, actionability
//! checks with an explicit force bypass, and scheduled mutations so tests
//! can exercise content that appears late (AJAX-style).
//!
//! One deviation from a real engine: when no mutation is pending the model
//! is sealed and a wait that has not yet succeeded never will, so such
//! waits fail immediately with the error they would have produced at the
//! timeout. Tests for missing elements stay fast without shortening any
//! timeout.

mod model;

pub use model::{Card, Widget, WidgetKind};

use crate::result::{SondearError, SondearResult};
use crate::selector::{Role, Selector};
use crate::surface::{ActionOptions, ElementState, Surface};
use crate::wait::{LoadState, UrlPattern, WaitOptions, DEFAULT_POLL_INTERVAL_MS};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// One recorded interaction against the mock surface.
///
/// Targets are the widget's accessible name when it has one, otherwise its
/// id or tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigation via [`Surface::goto`] or a navigating click
    Goto {
        /// Destination URL
        url: String,
    },
    /// An input's value was replaced
    Fill {
        /// Widget identifier
        target: String,
        /// Value written
        value: String,
    },
    /// A check control was driven to a state
    SetChecked {
        /// Widget identifier
        target: String,
        /// Requested state
        checked: bool,
        /// Whether actionability checks were bypassed
        forced: bool,
    },
    /// An element was clicked
    Click {
        /// Widget or container identifier
        target: String,
    },
}

/// A state change that takes effect after a delay.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// A container (and its widgets) appears in the document
    AddCard(Card),
    /// A network response with the given URL arrives
    Response(String),
}

#[derive(Debug)]
struct Inner {
    url: String,
    cards: Vec<Card>,
    log: Vec<Action>,
    pending: Vec<(Instant, Mutation)>,
    responses: Vec<String>,
    closed: bool,
}

/// Builder for a scripted [`MockSurface`].
#[derive(Debug, Default)]
pub struct MockSurfaceBuilder {
    url: Option<String>,
    cards: Vec<Card>,
    scheduled: Vec<(Duration, Mutation)>,
}

impl MockSurfaceBuilder {
    /// Set the initial document URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Add a container to the initial document.
    #[must_use]
    pub fn card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Apply `mutation` once `delay` has elapsed after build.
    #[must_use]
    pub fn schedule(mut self, delay: Duration, mutation: Mutation) -> Self {
        self.scheduled.push((delay, mutation));
        self
    }

    /// Build the surface.
    #[must_use]
    pub fn build(self) -> Arc<MockSurface> {
        let now = Instant::now();
        Arc::new(MockSurface {
            inner: Mutex::new(Inner {
                url: self.url.unwrap_or_else(|| "about:blank".to_owned()),
                cards: self.cards,
                log: Vec::new(),
                pending: self
                    .scheduled
                    .into_iter()
                    .map(|(delay, mutation)| (now + delay, mutation))
                    .collect(),
                responses: Vec::new(),
                closed: false,
            }),
        })
    }
}

/// Scripted automation surface for hermetic suites.
#[derive(Debug)]
pub struct MockSurface {
    inner: Mutex<Inner>,
}

/// Result of one attempt at an action inside the resolution loop.
enum Step<T> {
    Done(T),
    Blocked(String),
}

/// A resolved node: a card, or a widget inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeRef {
    card: usize,
    widget: Option<usize>,
}

impl MockSurface {
    /// Start building a scripted surface.
    #[must_use]
    pub fn builder() -> MockSurfaceBuilder {
        MockSurfaceBuilder::default()
    }

    /// Everything recorded so far, in execution order.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        self.lock().log.clone()
    }

    /// Number of recorded clicks against `target`.
    #[must_use]
    pub fn clicks_on(&self, target: &str) -> usize {
        self.lock()
            .log
            .iter()
            .filter(|action| matches!(action, Action::Click { target: t } if t == target))
            .count()
    }

    /// Apply `mutation` once `delay` has elapsed from now.
    pub fn schedule(&self, delay: Duration, mutation: Mutation) {
        let deadline = Instant::now() + delay;
        self.lock().pending.push((deadline, mutation));
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn poll_interval() -> Duration {
        Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)
    }

    fn apply_due(inner: &mut Inner) {
        let now = Instant::now();
        let mut remaining = Vec::with_capacity(inner.pending.len());
        for (deadline, mutation) in inner.pending.drain(..) {
            if deadline <= now {
                match mutation {
                    Mutation::AddCard(card) => inner.cards.push(card),
                    Mutation::Response(url) => inner.responses.push(url),
                }
            } else {
                remaining.push((deadline, mutation));
            }
        }
        inner.pending = remaining;
    }

    /// Resolve `selector`, auto-waiting for a unique actionable match, then
    /// run `act` on it. `act` may report the match as blocked (not yet
    /// actionable), in which case resolution retries until the timeout.
    async fn run<T, F>(
        &self,
        selector: &Selector,
        options: &ActionOptions,
        mut act: F,
    ) -> SondearResult<T>
    where
        F: FnMut(&mut Inner, NodeRef) -> SondearResult<Step<T>>,
    {
        let deadline = Instant::now() + options.timeout;
        let mut blocked: Option<String> = None;
        loop {
            let sealed;
            {
                let mut inner = self.lock();
                if inner.closed {
                    return Err(SondearError::SurfaceClosed);
                }
                Self::apply_due(&mut inner);
                let matches = resolve(&inner, selector)?;
                if matches.len() > 1 && options.strict {
                    return Err(SondearError::AmbiguousMatch {
                        selector: selector.to_string(),
                        count: matches.len(),
                    });
                }
                if let Some(node) = matches.first().copied() {
                    match act(&mut inner, node)? {
                        Step::Done(value) => return Ok(value),
                        Step::Blocked(reason) => blocked = Some(reason),
                    }
                }
                sealed = inner.pending.is_empty();
            }
            if sealed || Instant::now() >= deadline {
                let timeout_ms = options.timeout.as_millis() as u64;
                return Err(match blocked {
                    Some(reason) => SondearError::NotActionable {
                        selector: selector.to_string(),
                        reason,
                        timeout_ms,
                    },
                    None => SondearError::NotFound {
                        selector: selector.to_string(),
                        timeout_ms,
                    },
                });
            }
            tokio::time::sleep(Self::poll_interval()).await;
        }
    }
}

#[async_trait]
impl Surface for MockSurface {
    async fn goto(&self, url: &str) -> SondearResult<()> {
        let mut inner = self.lock();
        if inner.closed {
            return Err(SondearError::SurfaceClosed);
        }
        Self::apply_due(&mut inner);
        tracing::debug!(url, "goto");
        inner.url = url.to_owned();
        inner.log.push(Action::Goto {
            url: url.to_owned(),
        });
        Ok(())
    }

    fn url(&self) -> String {
        self.lock().url.clone()
    }

    async fn click(&self, selector: &Selector, options: &ActionOptions) -> SondearResult<()> {
        let force = options.force;
        self.run(selector, options, move |inner, node| {
            let (target, navigates_to) = match node.widget {
                Some(index) => {
                    let widget = &inner.cards[node.card].widgets[index];
                    if widget.covered && !force {
                        return Ok(Step::Blocked(
                            "element is covered by another element".to_owned(),
                        ));
                    }
                    (widget.describe(), widget.navigates_to.clone())
                }
                None => (describe_card(&inner.cards[node.card]), None),
            };
            tracing::debug!(%target, "click");
            inner.log.push(Action::Click { target });
            if let Some(url) = navigates_to {
                inner.log.push(Action::Goto { url: url.clone() });
                inner.url = url;
            }
            Ok(Step::Done(()))
        })
        .await
    }

    async fn fill(
        &self,
        selector: &Selector,
        text: &str,
        options: &ActionOptions,
    ) -> SondearResult<()> {
        let force = options.force;
        let timeout_ms = options.timeout.as_millis() as u64;
        self.run(selector, options, move |inner, node| {
            let Some(index) = node.widget else {
                return Err(not_fillable(selector, timeout_ms));
            };
            let widget = &mut inner.cards[node.card].widgets[index];
            if widget.kind != WidgetKind::Textbox {
                return Err(not_fillable(selector, timeout_ms));
            }
            if widget.covered && !force {
                return Ok(Step::Blocked(
                    "element is covered by another element".to_owned(),
                ));
            }
            widget.value = text.to_owned();
            let target = widget.describe();
            tracing::debug!(%target, value = text, "fill");
            inner.log.push(Action::Fill {
                target,
                value: text.to_owned(),
            });
            Ok(Step::Done(()))
        })
        .await
    }

    async fn set_checked(
        &self,
        selector: &Selector,
        checked: bool,
        options: &ActionOptions,
    ) -> SondearResult<()> {
        let force = options.force;
        let timeout_ms = options.timeout.as_millis() as u64;
        self.run(selector, options, move |inner, node| {
            let Some(index) = node.widget else {
                return Err(not_checkable(selector, timeout_ms));
            };
            let kind = inner.cards[node.card].widgets[index].kind;
            if kind != WidgetKind::Radio && kind != WidgetKind::Checkbox {
                return Err(not_checkable(selector, timeout_ms));
            }
            if inner.cards[node.card].widgets[index].covered && !force {
                return Ok(Step::Blocked(
                    "element is covered by another element".to_owned(),
                ));
            }
            // Radios are exclusive within their card.
            if kind == WidgetKind::Radio && checked {
                for sibling in &mut inner.cards[node.card].widgets {
                    if sibling.kind == WidgetKind::Radio {
                        sibling.checked = false;
                    }
                }
            }
            let widget = &mut inner.cards[node.card].widgets[index];
            widget.checked = checked;
            let target = widget.describe();
            tracing::debug!(%target, checked, force, "set_checked");
            inner.log.push(Action::SetChecked {
                target,
                checked,
                forced: force,
            });
            Ok(Step::Done(()))
        })
        .await
    }

    async fn text_content(
        &self,
        selector: &Selector,
        options: &ActionOptions,
    ) -> SondearResult<String> {
        self.run(selector, options, |inner, node| {
            let text = match node.widget {
                Some(index) => inner.cards[node.card].widgets[index].text.clone(),
                None => inner.cards[node.card].subtree_text(),
            };
            Ok(Step::Done(text))
        })
        .await
    }

    async fn input_value(
        &self,
        selector: &Selector,
        options: &ActionOptions,
    ) -> SondearResult<String> {
        let timeout_ms = options.timeout.as_millis() as u64;
        self.run(selector, options, move |inner, node| {
            let widget = node
                .widget
                .map(|index| &inner.cards[node.card].widgets[index]);
            match widget {
                Some(widget) if widget.kind == WidgetKind::Textbox => {
                    Ok(Step::Done(widget.value.clone()))
                }
                _ => Err(not_fillable(selector, timeout_ms)),
            }
        })
        .await
    }

    async fn attribute(
        &self,
        selector: &Selector,
        name: &str,
        options: &ActionOptions,
    ) -> SondearResult<Option<String>> {
        self.run(selector, options, move |inner, node| {
            let value = match node.widget {
                Some(index) => widget_attribute(&inner.cards[node.card].widgets[index], name),
                None => card_attribute(&inner.cards[node.card], name),
            };
            Ok(Step::Done(value))
        })
        .await
    }

    async fn is_checked(
        &self,
        selector: &Selector,
        options: &ActionOptions,
    ) -> SondearResult<bool> {
        let timeout_ms = options.timeout.as_millis() as u64;
        self.run(selector, options, move |inner, node| {
            let widget = node
                .widget
                .map(|index| &inner.cards[node.card].widgets[index]);
            match widget {
                Some(widget)
                    if widget.kind == WidgetKind::Radio
                        || widget.kind == WidgetKind::Checkbox =>
                {
                    Ok(Step::Done(widget.checked))
                }
                _ => Err(not_checkable(selector, timeout_ms)),
            }
        })
        .await
    }

    async fn count(&self, selector: &Selector) -> SondearResult<usize> {
        let mut inner = self.lock();
        if inner.closed {
            return Err(SondearError::SurfaceClosed);
        }
        Self::apply_due(&mut inner);
        Ok(resolve(&inner, selector)?.len())
    }

    async fn wait_for_state(
        &self,
        selector: &Selector,
        state: ElementState,
        options: &ActionOptions,
    ) -> SondearResult<()> {
        let deadline = Instant::now() + options.timeout;
        loop {
            let sealed;
            {
                let mut inner = self.lock();
                if inner.closed {
                    return Err(SondearError::SurfaceClosed);
                }
                Self::apply_due(&mut inner);
                let matches = resolve(&inner, selector)?;
                let visible = matches.iter().any(|node| match node.widget {
                    Some(index) => !inner.cards[node.card].widgets[index].covered,
                    None => true,
                });
                let reached = match state {
                    ElementState::Attached => !matches.is_empty(),
                    ElementState::Visible => visible,
                    ElementState::Hidden => matches.is_empty() || !visible,
                    ElementState::Detached => matches.is_empty(),
                };
                if reached {
                    return Ok(());
                }
                sealed = inner.pending.is_empty();
            }
            if sealed || Instant::now() >= deadline {
                return Err(SondearError::Timeout {
                    ms: options.timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(Self::poll_interval()).await;
        }
    }

    async fn wait_for_url(&self, pattern: &UrlPattern, options: &WaitOptions) -> SondearResult<()> {
        self.wait_until(options, |inner| pattern.matches(&inner.url))
            .await
    }

    async fn wait_for_response(
        &self,
        pattern: &UrlPattern,
        options: &WaitOptions,
    ) -> SondearResult<()> {
        self.wait_until(options, |inner| {
            inner.responses.iter().any(|url| pattern.matches(url))
        })
        .await
    }

    async fn wait_for_load_state(
        &self,
        state: LoadState,
        options: &WaitOptions,
    ) -> SondearResult<()> {
        match state {
            // The scripted document is always parsed and loaded.
            LoadState::Load | LoadState::DomContentLoaded => {
                if self.lock().closed {
                    return Err(SondearError::SurfaceClosed);
                }
                Ok(())
            }
            LoadState::NetworkIdle => {
                self.wait_until(options, |inner| {
                    !inner
                        .pending
                        .iter()
                        .any(|(_, mutation)| matches!(mutation, Mutation::Response(_)))
                })
                .await
            }
        }
    }

    async fn wait_for_timeout(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    async fn close(&self) {
        self.lock().closed = true;
    }
}

impl MockSurface {
    async fn wait_until<F>(&self, options: &WaitOptions, condition: F) -> SondearResult<()>
    where
        F: Fn(&Inner) -> bool,
    {
        let deadline = Instant::now() + options.timeout;
        loop {
            let sealed;
            {
                let mut inner = self.lock();
                if inner.closed {
                    return Err(SondearError::SurfaceClosed);
                }
                Self::apply_due(&mut inner);
                if condition(&inner) {
                    return Ok(());
                }
                sealed = inner.pending.is_empty();
            }
            if sealed || Instant::now() >= deadline {
                return Err(SondearError::Timeout {
                    ms: options.timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(options.poll_interval).await;
        }
    }
}

fn not_fillable(selector: &Selector, timeout_ms: u64) -> SondearError {
    SondearError::NotActionable {
        selector: selector.to_string(),
        reason: "element is not a fillable input".to_owned(),
        timeout_ms,
    }
}

fn not_checkable(selector: &Selector, timeout_ms: u64) -> SondearError {
    SondearError::NotActionable {
        selector: selector.to_string(),
        reason: "element is not a check control".to_owned(),
        timeout_ms,
    }
}

fn describe_card(card: &Card) -> String {
    card.title.clone().unwrap_or_else(|| card.tag.clone())
}

fn widget_attribute(widget: &Widget, name: &str) -> Option<String> {
    match name {
        "id" => widget.id.clone(),
        "class" => (!widget.classes.is_empty()).then(|| widget.classes.join(" ")),
        "placeholder" => widget.placeholder.clone(),
        "title" => widget.title.clone(),
        "value" => Some(widget.value.clone()),
        _ => widget.attrs.get(name).cloned(),
    }
}

fn card_attribute(card: &Card, name: &str) -> Option<String> {
    match name {
        "id" => card.id.clone(),
        "class" => (!card.classes.is_empty()).then(|| card.classes.join(" ")),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Selector resolution
// ---------------------------------------------------------------------------

/// Parsed compound CSS simple selector: `tag#id.class[attr=value]`.
#[derive(Debug, Default, PartialEq, Eq)]
struct CssParts {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

fn parse_css(css: &str) -> Result<CssParts, SondearError> {
    let unsupported = || SondearError::UnsupportedSelector {
        selector: format!("css={css}"),
    };
    if css.is_empty() || css.chars().any(|c| c.is_whitespace() || c == '>' || c == ',') {
        return Err(unsupported());
    }
    let mut parts = CssParts::default();
    let mut rest = css;
    if !rest.starts_with(['#', '.', '[']) {
        let end = rest.find(['#', '.', '[']).unwrap_or(rest.len());
        let tag = &rest[..end];
        if tag.contains(':') {
            return Err(unsupported());
        }
        parts.tag = Some(tag.to_owned());
        rest = &rest[end..];
    }
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('#') {
            let end = after.find(['#', '.', '[']).unwrap_or(after.len());
            parts.id = Some(after[..end].to_owned());
            rest = &after[end..];
        } else if let Some(after) = rest.strip_prefix('.') {
            let end = after.find(['#', '.', '[']).unwrap_or(after.len());
            parts.classes.push(after[..end].to_owned());
            rest = &after[end..];
        } else if let Some(after) = rest.strip_prefix('[') {
            let end = after.find(']').ok_or_else(unsupported)?;
            let body = &after[..end];
            let (name, value) = match body.split_once('=') {
                Some((name, value)) => {
                    (name.to_owned(), Some(value.trim_matches('"').to_owned()))
                }
                None => (body.to_owned(), None),
            };
            parts.attrs.push((name, value));
            rest = &after[end + 1..];
        } else {
            return Err(unsupported());
        }
    }
    Ok(parts)
}

fn css_matches_widget(parts: &CssParts, widget: &Widget) -> bool {
    if let Some(tag) = &parts.tag {
        if *tag != widget.tag {
            return false;
        }
    }
    if let Some(id) = &parts.id {
        if widget.id.as_deref() != Some(id.as_str()) {
            return false;
        }
    }
    if !parts.classes.iter().all(|c| widget.classes.contains(c)) {
        return false;
    }
    parts.attrs.iter().all(|(name, value)| {
        let actual = widget_attribute(widget, name);
        match value {
            Some(expected) => actual.as_deref() == Some(expected.as_str()),
            None => actual.is_some(),
        }
    })
}

fn css_matches_card(parts: &CssParts, card: &Card) -> bool {
    if let Some(tag) = &parts.tag {
        if *tag != card.tag {
            return false;
        }
    }
    if let Some(id) = &parts.id {
        if card.id.as_deref() != Some(id.as_str()) {
            return false;
        }
    }
    if !parts.classes.iter().all(|c| card.classes.contains(c)) {
        return false;
    }
    parts.attrs.is_empty()
}

fn role_matches(widget: &Widget, role: Role, name: Option<&str>) -> bool {
    let kind_matches = matches!(
        (role, widget.kind),
        (Role::Textbox, WidgetKind::Textbox)
            | (Role::Radio, WidgetKind::Radio)
            | (Role::Checkbox, WidgetKind::Checkbox)
            | (Role::Button, WidgetKind::Button)
            | (Role::Link, WidgetKind::Link)
    );
    if !kind_matches {
        return false;
    }
    match name {
        Some(expected) => widget
            .accessible_name()
            .is_some_and(|actual| actual.trim().eq_ignore_ascii_case(expected.trim())),
        None => true,
    }
}

fn resolve(inner: &Inner, selector: &Selector) -> Result<Vec<NodeRef>, SondearError> {
    let scope: Vec<NodeRef> = (0..inner.cards.len())
        .map(|card| NodeRef { card, widget: None })
        .collect();
    resolve_in(inner, selector, &scope)
}

/// Resolve `selector` against the cards named by `scope` (card-level refs
/// admit the card itself and its widgets; widget refs admit nothing below).
fn resolve_in(
    inner: &Inner,
    selector: &Selector,
    scope: &[NodeRef],
) -> Result<Vec<NodeRef>, SondearError> {
    match selector {
        Selector::Within { outer, inner: sub } => {
            let outer_matches = resolve_in(inner, outer, scope)?;
            let mut result = Vec::new();
            for node in &outer_matches {
                if node.widget.is_none() {
                    let nested = resolve_in(inner, sub, std::slice::from_ref(node))?;
                    // A scope match does not re-match itself.
                    result.extend(nested.into_iter().filter(|n| n != node));
                }
            }
            Ok(result)
        }
        Selector::HasText { base, text } => {
            let base_matches = resolve_in(inner, base, scope)?;
            Ok(base_matches
                .into_iter()
                .filter(|node| subtree_text(inner, *node).contains(text.as_str()))
                .collect())
        }
        Selector::Has { base, inner: sub } => {
            let base_matches = resolve_in(inner, base, scope)?;
            let mut result = Vec::new();
            for node in base_matches {
                if node.widget.is_none() {
                    let nested = resolve_in(inner, sub, std::slice::from_ref(&node))?;
                    if nested.iter().any(|n| *n != node) {
                        result.push(node);
                    }
                }
            }
            Ok(result)
        }
        _ => {
            let mut result = Vec::new();
            for node in scope {
                for candidate in candidates(inner, *node) {
                    if leaf_matches(inner, selector, candidate)? {
                        result.push(candidate);
                    }
                }
            }
            Ok(result)
        }
    }
}

/// Nodes admissible under a scope entry: the card itself plus its widgets.
fn candidates(inner: &Inner, node: NodeRef) -> Vec<NodeRef> {
    match node.widget {
        Some(_) => vec![node],
        None => {
            let mut nodes = vec![node];
            nodes.extend(
                (0..inner.cards[node.card].widgets.len()).map(|widget| NodeRef {
                    card: node.card,
                    widget: Some(widget),
                }),
            );
            nodes
        }
    }
}

fn leaf_matches(
    inner: &Inner,
    selector: &Selector,
    node: NodeRef,
) -> Result<bool, SondearError> {
    let card = &inner.cards[node.card];
    let widget = node.widget.map(|index| &card.widgets[index]);
    let matched = match selector {
        Selector::Css(css) => {
            let parts = parse_css(css)?;
            match widget {
                Some(widget) => css_matches_widget(&parts, widget),
                None => css_matches_card(&parts, card),
            }
        }
        Selector::Id(id) => match widget {
            Some(widget) => widget.id.as_deref() == Some(id.as_str()),
            None => card.id.as_deref() == Some(id.as_str()),
        },
        Selector::Role { role, name } => match widget {
            Some(widget) => role_matches(widget, *role, name.as_deref()),
            None => {
                *role == Role::Heading
                    && match name {
                        Some(expected) => card
                            .title
                            .as_deref()
                            .is_some_and(|t| t.trim().eq_ignore_ascii_case(expected.trim())),
                        None => card.title.is_some(),
                    }
            }
        },
        Selector::Label(text) => {
            widget.is_some_and(|widget| widget.label.as_deref() == Some(text.as_str()))
        }
        Selector::Placeholder(text) => {
            widget.is_some_and(|widget| widget.placeholder.as_deref() == Some(text.as_str()))
        }
        Selector::Text { text, exact } => match widget {
            Some(widget) => {
                let visible = widget.visible_text();
                if *exact {
                    visible.trim() == text.as_str()
                } else {
                    visible.contains(text.as_str())
                }
            }
            None => {
                // A card's own text is its heading and free-standing text;
                // widget captions belong to the widgets.
                if *exact {
                    card.title.as_deref().map(str::trim) == Some(text.as_str())
                } else {
                    card.title
                        .as_deref()
                        .is_some_and(|t| t.contains(text.as_str()))
                        || card.texts.iter().any(|t| t.contains(text.as_str()))
                }
            }
        },
        Selector::Title(text) => {
            widget.is_some_and(|widget| widget.title.as_deref() == Some(text.as_str()))
        }
        Selector::TestId(id) => {
            widget.is_some_and(|widget| widget.attrs.get("data-testid") == Some(id))
        }
        Selector::Within { .. } | Selector::HasText { .. } | Selector::Has { .. } => {
            unreachable!("composed selectors handled by resolve_in")
        }
    };
    Ok(matched)
}

fn subtree_text(inner: &Inner, node: NodeRef) -> String {
    let card = &inner.cards[node.card];
    match node.widget {
        Some(index) => card.widgets[index].visible_text(),
        None => card.subtree_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Inner {
        Inner {
            url: "about:blank".to_owned(),
            cards: vec![
                Card::titled("Using the Grid")
                    .widget(Widget::textbox("Email").id("inputEmail1"))
                    .widget(Widget::radio("Option 1").covered())
                    .widget(Widget::button("Sign in")),
                Card::titled("Basic Form")
                    .widget(Widget::textbox("Email").class("shape-rectangle"))
                    .widget(Widget::button("Submit")),
            ],
            log: Vec::new(),
            pending: Vec::new(),
            responses: Vec::new(),
            closed: false,
        }
    }

    #[test]
    fn parse_compound_css() {
        let parts = parse_css("input.shape-rectangle[type=email]").unwrap();
        assert_eq!(parts.tag.as_deref(), Some("input"));
        assert_eq!(parts.classes, vec!["shape-rectangle".to_owned()]);
        assert_eq!(
            parts.attrs,
            vec![("type".to_owned(), Some("email".to_owned()))]
        );

        assert!(parse_css("nb-card nb-radio").is_err());
        assert!(parse_css(":text(\"Using\")").is_err());
    }

    #[test]
    fn text_selector_matches_card_by_heading() {
        let inner = fixture();
        let matches = resolve(&inner, &Selector::text("Using")).unwrap();
        assert!(matches
            .iter()
            .any(|node| node.card == 0 && node.widget.is_none()));
    }

    #[test]
    fn has_text_narrows_to_one_card() {
        let inner = fixture();
        let selector = Selector::css("nb-card").has_text("Basic Form");
        let matches = resolve(&inner, &selector).unwrap();
        assert_eq!(
            matches,
            vec![NodeRef {
                card: 1,
                widget: None
            }]
        );
    }

    #[test]
    fn within_scopes_role_queries() {
        let inner = fixture();
        // Unscoped, the email textbox is ambiguous across cards.
        let unscoped = resolve(
            &inner,
            &Selector::role_named(Role::Textbox, "Email"),
        )
        .unwrap();
        assert_eq!(unscoped.len(), 2);

        let scoped = Selector::css("nb-card")
            .has_text("Using the Grid")
            .within(Selector::role_named(Role::Textbox, "Email"));
        let matches = resolve(&inner, &scoped).unwrap();
        assert_eq!(
            matches,
            vec![NodeRef {
                card: 0,
                widget: Some(0)
            }]
        );
    }

    #[test]
    fn has_filter_keeps_cards_containing_inner_match() {
        let inner = fixture();
        let selector = Selector::css("nb-card").has(Selector::id("inputEmail1"));
        let matches = resolve(&inner, &selector).unwrap();
        assert_eq!(
            matches,
            vec![NodeRef {
                card: 0,
                widget: None
            }]
        );
    }
}
