//! Tailwind-like utility classes.
//!
//! [`Utilities`] is an ordered registry from class name to [`Style`]. The
//! built-in set comes from [`Utilities::standard`]; [`Utilities::from_theme`]
//! adds classes that reference a theme's variables. Stylesheets are rendered
//! either for every class ([`Utilities::to_css`]) or for the classes a page
//! actually uses ([`Utilities::css_for`]).
//!
//! # Variants
//!
//! `css_for` accepts `hover:`, `focus:`, `active:` and `disabled:` prefixes.
//! The declarations come from the unprefixed class; the selector gets the
//! pseudo-class:
//!
//! ```rust
//! use fluentcss::Utilities;
//!
//! let css = Utilities::standard().css_for(["hover:underline"]);
//! assert_eq!(css, ".hover\\:underline:hover { text-decoration: underline; }");
//! ```

mod standard;

use indexmap::{IndexMap, IndexSet};

use crate::builder::Style;
use crate::escape::identifier;

/// Variant prefixes understood by [`Utilities::css_for`].
pub const VARIANTS: &[&str] = &["hover", "focus", "active", "disabled"];

/// An ordered registry of utility classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utilities {
    classes: IndexMap<String, Style>,
}

impl Utilities {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `class`, replacing an existing class of the same name in
    /// place. Any selector on `style` is ignored when rendering.
    pub fn add(mut self, class: impl Into<String>, style: Style) -> Self {
        self.insert(class, style);
        self
    }

    /// Like [`add`](Self::add), through a mutable reference.
    pub fn insert(&mut self, class: impl Into<String>, style: Style) -> &mut Self {
        self.classes.insert(class.into(), style);
        self
    }

    pub fn get(&self, class: &str) -> Option<&Style> {
        self.classes.get(class)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class names in registration order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Renders one rule per registered class, joined with newlines.
    pub fn to_css(&self) -> String {
        let rules: Vec<String> = self
            .classes
            .iter()
            .map(|(class, style)| render(class, None, style))
            .collect();
        log::debug!("rendered {} utility classes", rules.len());
        rules.join("\n")
    }

    /// Renders only the requested classes, in request order.
    ///
    /// Duplicates are rendered once. Unknown classes are skipped with a
    /// warning.
    pub fn css_for<I, S>(&self, classes: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: IndexSet<String> = classes
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        let mut rules = Vec::with_capacity(requested.len());
        for class in &requested {
            let (variant, base) = split_variant(class);
            match self.classes.get(base) {
                Some(style) => rules.push(render(class, variant, style)),
                None => log::warn!("unknown utility class `{}`", class),
            }
        }
        rules.join("\n")
    }
}

fn split_variant(class: &str) -> (Option<&str>, &str) {
    if let Some((prefix, base)) = class.split_once(':') {
        if VARIANTS.iter().any(|v| *v == prefix) {
            return (Some(prefix), base);
        }
    }
    (None, class)
}

fn render(class: &str, variant: Option<&str>, style: &Style) -> String {
    let mut selector = format!(".{}", identifier(class));
    if let Some(variant) = variant {
        selector.push(':');
        selector.push_str(variant);
    }
    log::trace!("utility rule {}", selector);
    style.to_rule_as(&selector)
}
