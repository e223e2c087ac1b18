//! Style struct: the ordered declaration accumulator.

use std::fmt;

use indexmap::IndexMap;

use crate::error::CssError;
use crate::keywords;
use crate::value::{join_css, spaced, CssValue};

/// An ordered set of CSS declarations, optionally scoped to a selector.
///
/// Every setter renders its value immediately, stores the text under the
/// canonical property name and hands the same builder back for chaining.
/// Declarations serialize in insertion order. Setting a property that is
/// already present replaces its value in place: the declaration keeps the
/// position of its first `set`.
///
/// # Example
///
/// ```rust
/// use fluentcss::{colors, px, rule, style};
///
/// let inline = style().color(colors::red()).padding(px(10.0));
/// assert_eq!(inline.build(), "color: red; padding: 10px;");
///
/// let button = rule(".btn").raw("padding", "10px");
/// assert_eq!(button.to_rule().unwrap(), ".btn { padding: 10px; }");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    selector: Option<String>,
    declarations: IndexMap<String, String>,
}

/// Creates an inline style with no selector.
pub fn style() -> Style {
    Style::default()
}

/// Creates a style scoped to `selector`, serializable with [`Style::to_rule`].
///
/// The selector can be a plain string or a [`Selector`](crate::Selector).
pub fn rule(selector: impl fmt::Display) -> Style {
    Style {
        selector: Some(selector.to_string()),
        declarations: IndexMap::new(),
    }
}

impl Style {
    /// Stores `value` under `property`, replacing any earlier value.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Stores free-form text under any property name.
    ///
    /// This is the escape hatch for properties and syntax the typed setters
    /// do not model (vendor-prefixed properties, new CSS features).
    pub fn raw(self, property: impl Into<String>, text: impl Into<String>) -> Self {
        self.set(property, CssValue::raw(text))
    }

    /// Like [`set`](Self::set), but through a mutable reference, for loops and
    /// conditional building.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<CssValue>) -> &mut Self {
        self.declarations
            .insert(property.into(), value.into().into_string());
        self
    }

    /// Removes a declaration if present.
    pub fn remove(mut self, property: &str) -> Self {
        self.declarations.shift_remove(property);
        self
    }

    /// Marks an existing declaration `!important`. Does nothing if the
    /// property is unset or already important.
    pub fn important(mut self, property: &str) -> Self {
        if let Some(value) = self.declarations.get_mut(property) {
            if !value.ends_with("!important") {
                value.push_str(" !important");
            }
        }
        self
    }

    /// Applies every declaration of `other`, in its order, with `set`
    /// semantics. The selector of `self` is kept.
    pub fn merge(mut self, other: &Style) -> Self {
        for (property, value) in &other.declarations {
            self.declarations.insert(property.clone(), value.clone());
        }
        self
    }

    /// Scopes the declarations to `selector`, replacing any previous one.
    pub fn with_selector(mut self, selector: impl fmt::Display) -> Self {
        self.selector = Some(selector.to_string());
        self
    }

    // ------------------------------------------------------------------
    // Compound helpers
    // ------------------------------------------------------------------

    /// `border: <width> <style> <color>`.
    pub fn border_with(
        self,
        width: impl Into<CssValue>,
        line: impl Into<CssValue>,
        color: impl Into<CssValue>,
    ) -> Self {
        self.set("border", spaced([width.into(), line.into(), color.into()]))
    }

    /// Sets `transition` to a comma-separated list of entries.
    ///
    /// ```rust
    /// use fluentcss::{keywords, ms, prop, style, transition};
    ///
    /// let s = style().transitions([
    ///     transition(prop::color(), ms(150.0), keywords::ease()),
    ///     transition(prop::transform(), ms(300.0), keywords::ease_out()),
    /// ]);
    /// assert_eq!(s.build(), "transition: color 150ms ease, transform 300ms ease-out;");
    /// ```
    pub fn transitions<I, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CssValue>,
    {
        self.set("transition", join_css(entries))
    }

    /// Sets `width` and `height`.
    pub fn size(self, width: impl Into<CssValue>, height: impl Into<CssValue>) -> Self {
        self.set("width", width).set("height", height)
    }

    /// `display: flex` with both axes centered.
    pub fn flex_center(self) -> Self {
        self.set("display", keywords::flex())
            .set("align-items", keywords::center())
            .set("justify-content", keywords::center())
    }

    /// Sets both `margin-left` and `margin-right` to `auto`.
    pub fn margin_auto_x(self) -> Self {
        self.set("margin-left", keywords::auto())
            .set("margin-right", keywords::auto())
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// Returns the rendered value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    /// Returns the selector, if this is a scoped rule.
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// Iterates declarations in serialization order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    /// Renders the declaration list: `"a: b; c: d;"`.
    ///
    /// Read-only and repeatable; an empty builder renders `""`.
    pub fn build(&self) -> String {
        let mut out = String::new();
        for (property, value) in &self.declarations {
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push_str("; ");
        }
        out.truncate(out.trim_end().len());
        out
    }

    /// Renders a full rule: `"<selector> { <declarations> }"`.
    ///
    /// # Errors
    ///
    /// Returns [`CssError::MissingSelector`] when the builder was created with
    /// [`style()`] rather than [`rule()`].
    pub fn to_rule(&self) -> Result<String, CssError> {
        let selector = self.selector.as_deref().ok_or(CssError::MissingSelector)?;
        Ok(self.to_rule_as(selector))
    }

    /// Renders the declarations under `selector`, ignoring any stored
    /// selector. Never fails.
    ///
    /// ```rust
    /// use fluentcss::style;
    ///
    /// let s = style().raw("color", "red");
    /// assert_eq!(s.to_rule_as("a:hover"), "a:hover { color: red; }");
    /// ```
    pub fn to_rule_as(&self, selector: &str) -> String {
        if self.declarations.is_empty() {
            return format!("{} {{ }}", selector);
        }
        format!("{} {{ {} }}", selector, self.build())
    }

    /// Renders the declarations one per line, indented by `indent` spaces.
    /// Used by the multi-line block formats (`@keyframes`).
    pub(crate) fn build_lines(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let mut out = String::new();
        for (property, value) in &self.declarations {
            out.push_str(&pad);
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{colors, hex};
    use crate::units::{percent, px, rem};
    use proptest::prelude::*;

    #[test]
    fn test_empty_build() {
        assert_eq!(style().build(), "");
    }

    #[test]
    fn test_build_single() {
        assert_eq!(style().raw("color", "red").build(), "color: red;");
    }

    #[test]
    fn test_build_is_idempotent() {
        let s = style().color(colors::red()).width(percent(100.0));
        assert_eq!(s.build(), s.build());
    }

    #[test]
    fn test_order_is_insertion_not_alphabetical() {
        let s = style()
            .raw("z-index", "1")
            .raw("color", "red")
            .raw("align-items", "center");
        assert_eq!(s.build(), "z-index: 1; color: red; align-items: center;");
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let s = style()
            .raw("color", "red")
            .raw("padding", "1px")
            .raw("color", "blue");
        assert_eq!(s.build(), "color: blue; padding: 1px;");
        assert_eq!(s.build().matches("color:").count(), 1);
        assert!(!s.build().contains("red"));
    }

    #[test]
    fn test_shorthand_and_longhand_coexist() {
        let s = style().margin(px(0.0)).margin_top(px(4.0));
        assert_eq!(s.build(), "margin: 0px; margin-top: 4px;");
    }

    #[test]
    fn test_to_rule() {
        let r = rule(".btn").raw("padding", "10px");
        assert_eq!(r.to_rule().unwrap(), ".btn { padding: 10px; }");
    }

    #[test]
    fn test_to_rule_empty() {
        assert_eq!(rule("p").to_rule().unwrap(), "p { }");
    }

    #[test]
    fn test_to_rule_without_selector_fails() {
        let s = style().raw("color", "red");
        assert_eq!(s.to_rule(), Err(CssError::MissingSelector));
        // builder still usable afterwards
        assert_eq!(s.with_selector("a").to_rule().unwrap(), "a { color: red; }");
    }

    #[test]
    fn test_build_after_more_sets() {
        let s = style().raw("color", "red");
        let first = s.build();
        let s = s.raw("margin", "0");
        assert_eq!(first, "color: red;");
        assert_eq!(s.build(), "color: red; margin: 0;");
    }

    #[test]
    fn test_insert_by_reference() {
        let mut s = style();
        for (i, side) in ["top", "left"].iter().enumerate() {
            s.insert(format!("margin-{}", side), px(i as f64));
        }
        assert_eq!(s.build(), "margin-top: 0px; margin-left: 1px;");
    }

    #[test]
    fn test_remove_and_get() {
        let s = style().raw("a", "1").raw("b", "2").remove("a");
        assert_eq!(s.get("a"), None);
        assert_eq!(s.get("b"), Some("2"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_important() {
        let s = style()
            .color(hex("000"))
            .important("color")
            .important("color")
            .important("missing");
        assert_eq!(s.build(), "color: #000 !important;");
    }

    #[test]
    fn test_merge_uses_set_semantics() {
        let base = style().raw("color", "red").raw("margin", "0");
        let extra = style().raw("padding", "1px").raw("color", "blue");
        let merged = base.merge(&extra);
        assert_eq!(merged.build(), "color: blue; margin: 0; padding: 1px;");
    }

    #[test]
    fn test_compound_helpers() {
        let s = style()
            .border_with(px(1.0), crate::keywords::solid(), colors::black())
            .size(rem(2.0), rem(2.0))
            .flex_center();
        assert_eq!(
            s.build(),
            "border: 1px solid black; width: 2rem; height: 2rem; display: flex; align-items: center; justify-content: center;"
        );
    }

    #[test]
    fn test_display_matches_build() {
        let s = style().raw("color", "red");
        assert_eq!(s.to_string(), s.build());
    }

    #[test]
    fn test_build_lines() {
        let s = style().raw("opacity", "0").raw("color", "red");
        assert_eq!(s.build_lines(4), "    opacity: 0;\n    color: red;\n");
    }

    proptest! {
        #[test]
        fn prop_distinct_keys_keep_order(keys in proptest::collection::hash_set("[a-z]{1,8}", 1..12)) {
            let keys: Vec<String> = keys.into_iter().collect();
            let mut s = style();
            for (i, k) in keys.iter().enumerate() {
                s.insert(k.clone(), CssValue::raw(i.to_string()));
            }
            let expected: Vec<String> = keys
                .iter()
                .enumerate()
                .map(|(i, k)| format!("{}: {};", k, i))
                .collect();
            prop_assert_eq!(s.build(), expected.join(" "));
            prop_assert_eq!(s.build(), s.build());
        }
    }
}
