//! Selector construction.
//!
//! [`Selector`] appends raw fragments with the CSS syntax character for each
//! kind (`.`, `#`, `:`, `::`, `[...]`, combinators). It does not validate the
//! result: nesting `not()` in `not()` or chaining combinators back to back
//! produces exactly the text asked for.

use std::fmt;

use crate::escape::{identifier, quote};

/// A selector under construction.
///
/// # Example
///
/// ```rust
/// use fluentcss::Selector;
///
/// let sel = Selector::new()
///     .tag("nav")
///     .child(Selector::new().tag("a").class("active"))
///     .hover();
/// assert_eq!(sel.build(), "nav > a.active:hover");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    text: String,
}

/// Starts an empty selector.
pub fn sel() -> Selector {
    Selector::new()
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw selector text.
    pub fn raw(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self
    }

    /// Appends a type selector, e.g. `button`.
    pub fn tag(self, name: &str) -> Self {
        self.raw(name)
    }

    /// Appends `*`.
    pub fn universal(self) -> Self {
        self.raw("*")
    }

    /// Appends `.<class>`; the class name is escaped.
    pub fn class(mut self, name: &str) -> Self {
        self.text.push('.');
        self.text.push_str(&identifier(name));
        self
    }

    /// Appends `#<id>`; the id is escaped.
    pub fn id(mut self, name: &str) -> Self {
        self.text.push('#');
        self.text.push_str(&identifier(name));
        self
    }

    /// Appends `:<name>`. Functional pseudo-classes pass their argument in
    /// `name`, e.g. `"nth-child(2n+1)"`.
    pub fn pseudo_class(mut self, name: &str) -> Self {
        self.text.push(':');
        self.text.push_str(name);
        self
    }

    pub fn hover(self) -> Self {
        self.pseudo_class("hover")
    }

    pub fn focus(self) -> Self {
        self.pseudo_class("focus")
    }

    pub fn focus_visible(self) -> Self {
        self.pseudo_class("focus-visible")
    }

    pub fn focus_within(self) -> Self {
        self.pseudo_class("focus-within")
    }

    pub fn active(self) -> Self {
        self.pseudo_class("active")
    }

    pub fn visited(self) -> Self {
        self.pseudo_class("visited")
    }

    pub fn disabled(self) -> Self {
        self.pseudo_class("disabled")
    }

    pub fn checked(self) -> Self {
        self.pseudo_class("checked")
    }

    pub fn first_child(self) -> Self {
        self.pseudo_class("first-child")
    }

    pub fn last_child(self) -> Self {
        self.pseudo_class("last-child")
    }

    /// `:nth-child(<formula>)`, e.g. `"2n+1"` or `"odd"`.
    pub fn nth_child(self, formula: &str) -> Self {
        self.pseudo_class(&format!("nth-child({})", formula))
    }

    /// `:nth-of-type(<formula>)`.
    pub fn nth_of_type(self, formula: &str) -> Self {
        self.pseudo_class(&format!("nth-of-type({})", formula))
    }

    /// `:not(<inner>)`.
    pub fn not(self, inner: Selector) -> Self {
        self.pseudo_class(&format!("not({})", inner.text))
    }

    /// `:is(<inner>)`.
    pub fn is(self, inner: Selector) -> Self {
        self.pseudo_class(&format!("is({})", inner.text))
    }

    /// `:where(<inner>)`.
    pub fn where_(self, inner: Selector) -> Self {
        self.pseudo_class(&format!("where({})", inner.text))
    }

    /// `:has(<inner>)`.
    pub fn has(self, inner: Selector) -> Self {
        self.pseudo_class(&format!("has({})", inner.text))
    }

    /// Appends `::<name>`.
    pub fn pseudo_element(mut self, name: &str) -> Self {
        self.text.push_str("::");
        self.text.push_str(name);
        self
    }

    pub fn before(self) -> Self {
        self.pseudo_element("before")
    }

    pub fn after(self) -> Self {
        self.pseudo_element("after")
    }

    pub fn placeholder(self) -> Self {
        self.pseudo_element("placeholder")
    }

    pub fn selection(self) -> Self {
        self.pseudo_element("selection")
    }

    /// `[<name>]`.
    pub fn attr(mut self, name: &str) -> Self {
        self.text.push('[');
        self.text.push_str(name);
        self.text.push(']');
        self
    }

    /// `[<name>="<value>"]`.
    pub fn attr_eq(self, name: &str, value: &str) -> Self {
        self.attr_op(name, "=", value)
    }

    /// `[<name>*="<value>"]`.
    pub fn attr_contains(self, name: &str, value: &str) -> Self {
        self.attr_op(name, "*=", value)
    }

    /// `[<name>^="<value>"]`.
    pub fn attr_starts_with(self, name: &str, value: &str) -> Self {
        self.attr_op(name, "^=", value)
    }

    /// `[<name>$="<value>"]`.
    pub fn attr_ends_with(self, name: &str, value: &str) -> Self {
        self.attr_op(name, "$=", value)
    }

    /// `[<name>~="<value>"]`.
    pub fn attr_word(self, name: &str, value: &str) -> Self {
        self.attr_op(name, "~=", value)
    }

    fn attr_op(mut self, name: &str, op: &str, value: &str) -> Self {
        self.text.push('[');
        self.text.push_str(name);
        self.text.push_str(op);
        self.text.push_str(&quote(value));
        self.text.push(']');
        self
    }

    /// `<self> <other>`.
    pub fn descendant(self, other: Selector) -> Self {
        self.combine(" ", other)
    }

    /// `<self> > <other>`.
    pub fn child(self, other: Selector) -> Self {
        self.combine(" > ", other)
    }

    /// `<self> + <other>`.
    pub fn adjacent(self, other: Selector) -> Self {
        self.combine(" + ", other)
    }

    /// `<self> ~ <other>`.
    pub fn sibling(self, other: Selector) -> Self {
        self.combine(" ~ ", other)
    }

    /// `<self>, <other>`.
    pub fn or(self, other: Selector) -> Self {
        self.combine(", ", other)
    }

    fn combine(mut self, combinator: &str, other: Selector) -> Self {
        self.text.push_str(combinator);
        self.text.push_str(&other.text);
        self
    }

    /// Returns the selector text.
    pub fn build(&self) -> String {
        self.text.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Selector {
    fn from(text: &str) -> Self {
        Selector::new().raw(text)
    }
}
