//! Element selectors
//!
//! A small, typed subset of CSS selectors covering what the page runtime
//! queries: tags, ids, classes, attribute presence/equality/prefix,
//! negation, compound selectors, and selector lists. Selectors render to
//! CSS via `Display` so browser hosts can hand them to `querySelectorAll`,
//! while in-memory hosts match them with [`Selector::matches`].

use std::fmt;

/// Read-only view of an element used for selector matching
pub trait ElementView {
    /// Lowercase tag name
    fn tag(&self) -> &str;
    /// Attribute value, if present
    fn attribute(&self, name: &str) -> Option<&str>;
    /// Class list membership
    fn has_class(&self, class: &str) -> bool;
}

/// A typed CSS selector
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `tag`
    Tag(String),
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `[attr]`
    Attr(String),
    /// `[attr="value"]`
    AttrEquals(String, String),
    /// `[attr^="prefix"]`
    AttrPrefix(String, String),
    /// `:not(inner)`
    Not(Box<Selector>),
    /// Compound selector - every part must match (`a.b[c]`)
    All(Vec<Selector>),
    /// Selector list - any part may match (`a, b`)
    Any(Vec<Selector>),
}

impl Selector {
    pub fn tag(tag: impl Into<String>) -> Self {
        Selector::Tag(tag.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Selector::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Selector::Class(class.into())
    }

    pub fn attr(name: impl Into<String>) -> Self {
        Selector::Attr(name.into())
    }

    pub fn attr_eq(name: impl Into<String>, value: impl Into<String>) -> Self {
        Selector::AttrEquals(name.into(), value.into())
    }

    pub fn attr_prefix(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Selector::AttrPrefix(name.into(), prefix.into())
    }

    /// Negate this selector
    pub fn negate(self) -> Self {
        Selector::Not(Box::new(self))
    }

    /// Compound this selector with another (both must match)
    pub fn and(self, other: Selector) -> Self {
        match self {
            Selector::All(mut parts) => {
                parts.push(other);
                Selector::All(parts)
            }
            first => Selector::All(vec![first, other]),
        }
    }

    /// Build a selector list (any may match)
    pub fn any(parts: impl IntoIterator<Item = Selector>) -> Self {
        Selector::Any(parts.into_iter().collect())
    }

    /// Keyboard-focusable descendants of a container
    ///
    /// `a, button, input, textarea, select, [tabindex]:not([tabindex="-1"])`
    pub fn focusable() -> Self {
        Selector::any([
            Selector::tag("a"),
            Selector::tag("button"),
            Selector::tag("input"),
            Selector::tag("textarea"),
            Selector::tag("select"),
            Selector::attr("tabindex").and(Selector::attr_eq("tabindex", "-1").negate()),
        ])
    }

    /// Test an element against this selector
    pub fn matches<E: ElementView + ?Sized>(&self, element: &E) -> bool {
        match self {
            Selector::Tag(tag) => element.tag().eq_ignore_ascii_case(tag),
            Selector::Id(id) => element.attribute("id") == Some(id.as_str()),
            Selector::Class(class) => element.has_class(class),
            Selector::Attr(name) => element.attribute(name).is_some(),
            Selector::AttrEquals(name, value) => element.attribute(name) == Some(value.as_str()),
            Selector::AttrPrefix(name, prefix) => element
                .attribute(name)
                .map(|v| v.starts_with(prefix.as_str()))
                .unwrap_or(false),
            Selector::Not(inner) => !inner.matches(element),
            Selector::All(parts) => parts.iter().all(|p| p.matches(element)),
            Selector::Any(parts) => parts.iter().any(|p| p.matches(element)),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Tag(tag) => write!(f, "{tag}"),
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Class(class) => write!(f, ".{class}"),
            Selector::Attr(name) => write!(f, "[{name}]"),
            Selector::AttrEquals(name, value) => write!(f, "[{name}=\"{value}\"]"),
            Selector::AttrPrefix(name, prefix) => write!(f, "[{name}^=\"{prefix}\"]"),
            Selector::Not(inner) => write!(f, ":not({inner})"),
            Selector::All(parts) => {
                // Type selectors must lead a compound selector
                for part in parts.iter().filter(|p| matches!(p, Selector::Tag(_))) {
                    write!(f, "{part}")?;
                }
                for part in parts.iter().filter(|p| !matches!(p, Selector::Tag(_))) {
                    write!(f, "{part}")?;
                }
                Ok(())
            }
            Selector::Any(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            }
        }
    }
}
