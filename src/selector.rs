//! Selector values for locating elements.
//!
//! A [`Selector`] is a pure description of an element query. It is not bound
//! to any surface and resolves to nothing on its own; a [`crate::Locator`]
//! pairs it with a surface handle and resolution options.
//!
//! User-facing selectors (role, label, placeholder, text, title) are
//! preferred over structural CSS: they survive markup churn and mirror what
//! an end user perceives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ARIA-style widget roles understood by the role selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Single-line or multi-line text input
    Textbox,
    /// Push button
    Button,
    /// Single-choice control within a group
    Radio,
    /// Two-state check control
    Checkbox,
    /// Hyperlink
    Link,
    /// Section heading
    Heading,
}

impl Role {
    /// Canonical lowercase name of the role
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Textbox => "textbox",
            Self::Button => "button",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Link => "link",
            Self::Heading => "heading",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element query descriptor.
///
/// Selectors compose structurally: [`Selector::Within`] scopes a query to
/// the matches of an outer query, [`Selector::HasText`] and
/// [`Selector::Has`] filter matches by their content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// Compound CSS simple selector, e.g. `input.shape-rectangle[type=email]`
    Css(String),
    /// Element id (`#inputEmail1`)
    Id(String),
    /// Accessible role, optionally constrained by accessible name
    Role {
        /// Widget role
        role: Role,
        /// Accessible name (label, aria-label, or placeholder), matched
        /// case-insensitively when present
        name: Option<String>,
    },
    /// Associated label text, exact match
    Label(String),
    /// Placeholder text, exact match
    Placeholder(String),
    /// Visible text content
    Text {
        /// Text to look for
        text: String,
        /// Whole-string match instead of substring containment
        exact: bool,
    },
    /// `title` attribute, exact match
    Title(String),
    /// `data-testid` attribute, exact match
    TestId(String),
    /// Resolve `inner` only inside elements matched by `outer`
    Within {
        /// Scope query
        outer: Box<Selector>,
        /// Query evaluated inside each scope match
        inner: Box<Selector>,
    },
    /// Keep `base` matches whose subtree text contains `text`
    HasText {
        /// Base query
        base: Box<Selector>,
        /// Substring the subtree must contain
        text: String,
    },
    /// Keep `base` matches that contain at least one `inner` match
    Has {
        /// Base query
        base: Box<Selector>,
        /// Query that must resolve inside the match
        inner: Box<Selector>,
    },
}

impl Selector {
    /// CSS simple-selector query
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Query by element id
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Query by role alone
    #[must_use]
    pub fn role(role: Role) -> Self {
        Self::Role { role, name: None }
    }

    /// Query by role and accessible name
    #[must_use]
    pub fn role_named(role: Role, name: impl Into<String>) -> Self {
        Self::Role {
            role,
            name: Some(name.into()),
        }
    }

    /// Query by label text
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    /// Query by placeholder text
    #[must_use]
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self::Placeholder(text.into())
    }

    /// Query by visible text, substring containment
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            exact: false,
        }
    }

    /// Query by visible text, whole-string match
    #[must_use]
    pub fn text_exact(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            exact: true,
        }
    }

    /// Query by `title` attribute
    #[must_use]
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title(text.into())
    }

    /// Query by `data-testid` attribute
    #[must_use]
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId(id.into())
    }

    /// Scope `inner` to this selector's matches
    #[must_use]
    pub fn within(self, inner: Self) -> Self {
        Self::Within {
            outer: Box::new(self),
            inner: Box::new(inner),
        }
    }

    /// Keep matches whose subtree text contains `text`
    #[must_use]
    pub fn has_text(self, text: impl Into<String>) -> Self {
        Self::HasText {
            base: Box::new(self),
            text: text.into(),
        }
    }

    /// Keep matches that contain an `inner` match
    #[must_use]
    pub fn has(self, inner: Self) -> Self {
        Self::Has {
            base: Box::new(self),
            inner: Box::new(inner),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(css) => write!(f, "css={css}"),
            Self::Id(id) => write!(f, "id={id}"),
            Self::Role { role, name: None } => write!(f, "role={role}"),
            Self::Role {
                role,
                name: Some(name),
            } => write!(f, "role={role}[name={name:?}]"),
            Self::Label(text) => write!(f, "label={text:?}"),
            Self::Placeholder(text) => write!(f, "placeholder={text:?}"),
            Self::Text { text, exact: false } => write!(f, "text={text:?}"),
            Self::Text { text, exact: true } => write!(f, "text-is={text:?}"),
            Self::Title(text) => write!(f, "title={text:?}"),
            Self::TestId(id) => write!(f, "testid={id:?}"),
            Self::Within { outer, inner } => write!(f, "{outer} >> {inner}"),
            Self::HasText { base, text } => write!(f, "{base}:has-text({text:?})"),
            Self::Has { base, inner } => write!(f, "{base}:has({inner})"),
        }
    }
}
