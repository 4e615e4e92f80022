//! Widget model backing the mock surface.
//!
//! This is deliberately not a DOM: it models the handful of concepts the
//! selector engine understands, cards (containers with a heading and some
//! text) holding widgets (inputs, radios, checkboxes, buttons, links), and
//! nothing else. Fixtures build it with the fluent constructors below.

use std::collections::BTreeMap;

/// Widget kinds the mock can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Text input
    Textbox,
    /// Single-choice control
    Radio,
    /// Two-state check control
    Checkbox,
    /// Push button
    Button,
    /// Hyperlink
    Link,
}

/// One interactive element inside a [`Card`].
#[derive(Debug, Clone)]
pub struct Widget {
    pub(crate) kind: WidgetKind,
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) label: Option<String>,
    pub(crate) placeholder: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) text: String,
    pub(crate) value: String,
    pub(crate) checked: bool,
    pub(crate) covered: bool,
    pub(crate) navigates_to: Option<String>,
}

impl Widget {
    fn base(kind: WidgetKind, tag: &str) -> Self {
        Self {
            kind,
            tag: tag.to_owned(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            label: None,
            placeholder: None,
            title: None,
            text: String::new(),
            value: String::new(),
            checked: false,
            covered: false,
            navigates_to: None,
        }
    }

    /// Text input with the given placeholder.
    #[must_use]
    pub fn textbox(placeholder: impl Into<String>) -> Self {
        let mut widget = Self::base(WidgetKind::Textbox, "input");
        widget.placeholder = Some(placeholder.into());
        widget
    }

    /// Radio control labelled by `label`.
    #[must_use]
    pub fn radio(label: impl Into<String>) -> Self {
        let mut widget = Self::base(WidgetKind::Radio, "input");
        widget.attrs.insert("type".into(), "radio".into());
        widget.label = Some(label.into());
        widget
    }

    /// Checkbox labelled by `label`.
    #[must_use]
    pub fn checkbox(label: impl Into<String>) -> Self {
        let mut widget = Self::base(WidgetKind::Checkbox, "input");
        widget.attrs.insert("type".into(), "checkbox".into());
        widget.label = Some(label.into());
        widget
    }

    /// Button with the given caption.
    #[must_use]
    pub fn button(caption: impl Into<String>) -> Self {
        let mut widget = Self::base(WidgetKind::Button, "button");
        widget.text = caption.into();
        widget
    }

    /// Link with the given caption.
    #[must_use]
    pub fn link(caption: impl Into<String>) -> Self {
        let mut widget = Self::base(WidgetKind::Link, "a");
        widget.text = caption.into();
        widget
    }

    /// Override the element tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a CSS class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Associate a label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the `title` attribute.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the current input value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Start in the checked state.
    #[must_use]
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Mark the widget as occluded by another element.
    ///
    /// Actions against a covered widget fail as not-actionable unless the
    /// caller forces them, mirroring inputs hidden behind styled labels.
    #[must_use]
    pub fn covered(mut self) -> Self {
        self.covered = true;
        self
    }

    /// Clicking this widget navigates the surface to `url`.
    #[must_use]
    pub fn navigates_to(mut self, url: impl Into<String>) -> Self {
        self.navigates_to = Some(url.into());
        self
    }

    /// Name a user would perceive for this widget: its label, `aria-label`,
    /// placeholder, or visible text, in that precedence order.
    #[must_use]
    pub fn accessible_name(&self) -> Option<&str> {
        self.label
            .as_deref()
            .or_else(|| self.attrs.get("aria-label").map(String::as_str))
            .or(self.placeholder.as_deref())
            .or((!self.text.is_empty()).then_some(self.text.as_str()))
    }

    /// Text a user can see on or next to the widget.
    #[must_use]
    pub(crate) fn visible_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(label) = &self.label {
            parts.push(label);
        }
        if !self.text.is_empty() {
            parts.push(&self.text);
        }
        parts.join(" ")
    }

    /// Stable identifier used in the action log.
    #[must_use]
    pub(crate) fn describe(&self) -> String {
        if let Some(name) = self.accessible_name() {
            return name.to_owned();
        }
        if let Some(id) = &self.id {
            return format!("#{id}");
        }
        self.tag.clone()
    }
}

/// A container element holding text and widgets.
#[derive(Debug, Clone)]
pub struct Card {
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) title: Option<String>,
    pub(crate) texts: Vec<String>,
    pub(crate) widgets: Vec<Widget>,
}

impl Card {
    /// Untitled container with the default `nb-card` tag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: "nb-card".to_owned(),
            id: None,
            classes: Vec::new(),
            title: None,
            texts: Vec::new(),
            widgets: Vec::new(),
        }
    }

    /// Container with a heading.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        let mut card = Self::new();
        card.title = Some(title.into());
        card
    }

    /// Override the container tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the container id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a CSS class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add free-standing visible text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.texts.push(text.into());
        self
    }

    /// Add a widget.
    #[must_use]
    pub fn widget(mut self, widget: Widget) -> Self {
        self.widgets.push(widget);
        self
    }

    /// All text visible anywhere inside the container.
    #[must_use]
    pub(crate) fn subtree_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(title) = &self.title {
            parts.push(title.clone());
        }
        parts.extend(self.texts.iter().cloned());
        for widget in &self.widgets {
            let text = widget.visible_text();
            if !text.is_empty() {
                parts.push(text);
            }
        }
        parts.join(" ")
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}
