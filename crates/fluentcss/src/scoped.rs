//! Pseudo-class styling bound to generated class names.
//!
//! Inline `style` attributes cannot express `:hover` or `:focus`. A
//! [`ScopedStyle`] gets a unique class name, keeps its base declarations for
//! the inline attribute and renders the pseudo-class variants as rules for
//! that class.

use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;

use crate::builder::Style;

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(0);

/// Class name prefix for generated scopes.
pub const SCOPE_PREFIX: &str = "fc-";

/// A base style plus pseudo-class variants under a generated class name.
///
/// ```rust
/// use fluentcss::{colors, style, ScopedStyle};
///
/// let button = ScopedStyle::new(style().color(colors::black()))
///     .hover(style().color(colors::red()));
/// let class = button.class_name().to_string();
///
/// assert!(class.starts_with("fc-"));
/// assert_eq!(button.inline(), "color: black;");
/// assert_eq!(
///     button.to_css(),
///     format!(".{class} {{ color: black; }}\n.{class}:hover {{ color: red; }}")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedStyle {
    class: String,
    base: Style,
    variants: IndexMap<String, Style>,
}

impl ScopedStyle {
    /// Wraps `base` under a fresh `fc-<n>` class name. Names are unique
    /// within the process, across threads.
    pub fn new(base: Style) -> Self {
        let id = NEXT_SCOPE.fetch_add(1, Ordering::Relaxed);
        Self {
            class: format!("{}{}", SCOPE_PREFIX, id),
            base,
            variants: IndexMap::new(),
        }
    }

    /// Adds declarations for `:<pseudo>`, merging into an existing variant
    /// of the same name. One leading `:` is optional, so `"::before"` keeps
    /// its pseudo-element form.
    pub fn pseudo(mut self, pseudo: &str, style: Style) -> Self {
        let pseudo = pseudo.strip_prefix(':').unwrap_or(pseudo).to_string();
        let slot = self.variants.entry(pseudo).or_default();
        *slot = std::mem::take(slot).merge(&style);
        self
    }

    pub fn hover(self, style: Style) -> Self {
        self.pseudo("hover", style)
    }

    pub fn focus(self, style: Style) -> Self {
        self.pseudo("focus", style)
    }

    pub fn active(self, style: Style) -> Self {
        self.pseudo("active", style)
    }

    pub fn class_name(&self) -> &str {
        &self.class
    }

    pub fn base(&self) -> &Style {
        &self.base
    }

    /// The base declarations, for an inline `style` attribute.
    pub fn inline(&self) -> String {
        self.base.build()
    }

    /// The base rule followed by one rule per variant, in insertion order.
    pub fn to_css(&self) -> String {
        let selector = format!(".{}", self.class);
        let mut rules = vec![self.base.to_rule_as(&selector)];
        for (pseudo, style) in &self.variants {
            rules.push(style.to_rule_as(&format!("{}:{}", selector, pseudo)));
        }
        rules.join("\n")
    }
}
