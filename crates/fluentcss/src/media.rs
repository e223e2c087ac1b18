//! `@media` queries and blocks.

use crate::builder::Style;
use crate::error::CssError;
use crate::theme::ColorMode;
use crate::value::CssValue;

/// A media query list under construction.
///
/// Conditions added with the builder methods are joined with ` and `;
/// [`or`](Self::or) appends another query to the list with `, `.
///
/// ```rust
/// use fluentcss::{px, MediaQuery};
///
/// let q = MediaQuery::new().screen().min_width(px(640.0)).max_width(px(1023.0));
/// assert_eq!(q.build(), "screen and (min-width: 640px) and (max-width: 1023px)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaQuery {
    queries: Vec<Vec<String>>,
}

impl MediaQuery {
    pub fn new() -> Self {
        Self {
            queries: vec![Vec::new()],
        }
    }

    fn push(mut self, condition: String) -> Self {
        if self.queries.is_empty() {
            self.queries.push(Vec::new());
        }
        if let Some(current) = self.queries.last_mut() {
            current.push(condition);
        }
        self
    }

    pub fn screen(self) -> Self {
        self.push("screen".to_string())
    }

    pub fn print(self) -> Self {
        self.push("print".to_string())
    }

    /// `(<name>: <value>)` for any media feature.
    pub fn feature(self, name: &str, value: impl Into<CssValue>) -> Self {
        self.push(format!("({}: {})", name, value.into()))
    }

    pub fn min_width(self, width: impl Into<CssValue>) -> Self {
        self.feature("min-width", width)
    }

    pub fn max_width(self, width: impl Into<CssValue>) -> Self {
        self.feature("max-width", width)
    }

    pub fn min_height(self, height: impl Into<CssValue>) -> Self {
        self.feature("min-height", height)
    }

    pub fn max_height(self, height: impl Into<CssValue>) -> Self {
        self.feature("max-height", height)
    }

    /// `(orientation: landscape|portrait)`.
    pub fn orientation(self, orientation: &str) -> Self {
        self.push(format!("(orientation: {})", orientation))
    }

    /// `(prefers-color-scheme: light|dark)`.
    pub fn prefers_color_scheme(self, mode: ColorMode) -> Self {
        self.push(format!("(prefers-color-scheme: {})", mode.as_str()))
    }

    /// `(prefers-reduced-motion: reduce)`.
    pub fn prefers_reduced_motion(self) -> Self {
        self.push("(prefers-reduced-motion: reduce)".to_string())
    }

    /// Starts another query in the list.
    pub fn or(mut self, other: MediaQuery) -> Self {
        self.queries
            .extend(other.queries.into_iter().filter(|q| !q.is_empty()));
        self
    }

    pub fn build(&self) -> String {
        let queries: Vec<String> = self
            .queries
            .iter()
            .filter(|q| !q.is_empty())
            .map(|q| q.join(" and "))
            .collect();
        queries.join(", ")
    }
}

/// Rules wrapped in an `@media` block.
///
/// ```rust
/// use fluentcss::{px, rule, MediaBlock, MediaQuery};
///
/// let block = MediaBlock::new(MediaQuery::new().max_width(px(600.0)))
///     .rule(rule(".nav").raw("display", "none"));
/// assert_eq!(
///     block.build().unwrap(),
///     "@media (max-width: 600px) { .nav { display: none; } }"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlock {
    query: MediaQuery,
    rules: Vec<Style>,
}

impl MediaBlock {
    pub fn new(query: MediaQuery) -> Self {
        Self {
            query,
            rules: Vec::new(),
        }
    }

    /// Adds a selector-scoped rule.
    pub fn rule(mut self, rule: Style) -> Self {
        self.rules.push(rule);
        self
    }

    /// Renders the block.
    ///
    /// # Errors
    ///
    /// Returns [`CssError::MissingSelector`] if any rule has no selector.
    pub fn build(&self) -> Result<String, CssError> {
        let query = self.query.build();
        let mut out = if query.is_empty() {
            "@media {".to_string()
        } else {
            format!("@media {} {{", query)
        };
        for rule in &self.rules {
            out.push(' ');
            out.push_str(&rule.to_rule()?);
        }
        out.push_str(" }");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{rule, style};
    use crate::units::px;

    #[test]
    fn test_empty_query() {
        assert_eq!(MediaQuery::new().build(), "");
    }

    #[test]
    fn test_query_list() {
        let q = MediaQuery::new()
            .print()
            .or(MediaQuery::new().max_width(px(400.0)).orientation("portrait"));
        assert_eq!(q.build(), "print, (max-width: 400px) and (orientation: portrait)");
    }

    #[test]
    fn test_preferences() {
        let q = MediaQuery::new()
            .prefers_color_scheme(ColorMode::Dark)
            .prefers_reduced_motion();
        assert_eq!(
            q.build(),
            "(prefers-color-scheme: dark) and (prefers-reduced-motion: reduce)"
        );
    }

    #[test]
    fn test_default_query_accepts_conditions() {
        let q = MediaQuery::default().screen();
        assert_eq!(q.build(), "screen");
    }

    #[test]
    fn test_block_with_multiple_rules() {
        let block = MediaBlock::new(MediaQuery::new().min_width(px(768.0)))
            .rule(rule(".a").raw("x", "1"))
            .rule(rule(".b").raw("y", "2"));
        assert_eq!(
            block.build().unwrap(),
            "@media (min-width: 768px) { .a { x: 1; } .b { y: 2; } }"
        );
    }

    #[test]
    fn test_block_with_empty_query() {
        let block = MediaBlock::new(MediaQuery::new()).rule(rule("a").raw("x", "1"));
        assert_eq!(block.build().unwrap(), "@media { a { x: 1; } }");
    }

    #[test]
    fn test_block_propagates_missing_selector() {
        let block = MediaBlock::new(MediaQuery::new().screen()).rule(style().raw("x", "1"));
        assert_eq!(block.build(), Err(CssError::MissingSelector));
    }
}
