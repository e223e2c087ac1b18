//! Theme struct for building design token tables.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::adaptive::{detect_color_mode, ColorMode};
use super::category::Category;
use crate::builder::{style, Style};
use crate::escape::identifier;
use crate::media::{MediaBlock, MediaQuery};
use crate::value::CssValue;

/// A collection of design tokens rendered as custom properties.
///
/// Tokens are grouped by [`Category`] and kept in insertion order inside
/// each category. Colors and custom tokens can carry dark-mode overrides.
/// Keys from different categories can name the same variable
/// (`custom("color-a")` and `color("a")`); the later category's value is
/// rendered and a warning is logged.
///
/// # Example
///
/// ```rust
/// use fluentcss::{hex, rem, Category, Theme};
///
/// let theme = Theme::new()
///     .color("primary", hex("3b82f6"))
///     .spacing("md", rem(1.0))
///     .dark(|d| d.color("primary", hex("60a5fa")));
///
/// assert_eq!(
///     theme.to_css(),
///     ":root { --color-primary: #3b82f6; --spacing-md: 1rem; }\n\
///      @media (prefers-color-scheme: dark) { :root { --color-primary: #60a5fa; } }"
/// );
/// assert_eq!(theme.var(Category::Color, "primary").render(), "var(--color-primary)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    tokens: BTreeMap<Category, IndexMap<String, String>>,
    dark: DarkOverrides,
}

/// Dark-mode overrides. Only colors and custom tokens have a dark variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DarkOverrides {
    colors: IndexMap<String, String>,
    custom: IndexMap<String, String>,
}

impl DarkOverrides {
    pub fn color(mut self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.colors.insert(key.into(), value.into().render());
        self
    }

    pub fn custom(mut self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.custom.insert(key.into(), value.into().render());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.custom.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len() + self.custom.len()
    }

    fn entries(&self) -> impl Iterator<Item = (String, &str)> {
        let colors = self
            .colors
            .iter()
            .map(|(k, v)| (Category::Color.variable(k), v.as_str()));
        let custom = self
            .custom
            .iter()
            .map(|(k, v)| (Category::Custom.variable(k), v.as_str()));
        colors.chain(custom)
    }

    fn get(&self, category: Category, key: &str) -> Option<&str> {
        match category {
            Category::Color => self.colors.get(key).map(String::as_str),
            Category::Custom => self.custom.get(key).map(String::as_str),
            _ => None,
        }
    }
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a theme seeded with the built-in preset tokens.
    pub fn preset() -> Self {
        super::preset::seed(Self::new())
    }

    /// Adds a token to `category`, replacing an existing value in place.
    pub fn token(
        mut self,
        category: Category,
        key: impl Into<String>,
        value: impl Into<CssValue>,
    ) -> Self {
        self.tokens
            .entry(category)
            .or_default()
            .insert(key.into(), value.into().render());
        self
    }

    pub fn color(self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.token(Category::Color, key, value)
    }

    pub fn spacing(self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.token(Category::Spacing, key, value)
    }

    pub fn radius(self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.token(Category::Radius, key, value)
    }

    pub fn shadow(self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.token(Category::Shadow, key, value)
    }

    pub fn font(self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.token(Category::Font, key, value)
    }

    pub fn font_size(self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.token(Category::FontSize, key, value)
    }

    /// Adds a token whose variable is `--<key>` with no category prefix.
    pub fn custom(self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.token(Category::Custom, key, value)
    }

    /// Adds dark-mode overrides.
    ///
    /// ```rust
    /// use fluentcss::{hex, Theme};
    ///
    /// let theme = Theme::new()
    ///     .color("bg", hex("fff"))
    ///     .dark(|d| d.color("bg", hex("111")).custom("elevation", hex("222")));
    /// assert_eq!(theme.dark_overrides().len(), 2);
    /// ```
    pub fn dark(mut self, build: impl FnOnce(DarkOverrides) -> DarkOverrides) -> Self {
        self.dark = build(std::mem::take(&mut self.dark));
        self
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// A `var(...)` reference for `key` in `category`.
    ///
    /// The key is not checked; use [`has`](Self::has) for that.
    pub fn var(&self, category: Category, key: &str) -> CssValue {
        category.var(key)
    }

    /// Returns `true` if `key` is registered in `category`.
    pub fn has(&self, category: Category, key: &str) -> bool {
        self.tokens
            .get(&category)
            .is_some_and(|tokens| tokens.contains_key(key))
    }

    /// Returns `true` if `key` has a dark-mode override in `category`.
    pub fn has_dark(&self, category: Category, key: &str) -> bool {
        self.dark.get(category, key).is_some()
    }

    /// Returns the raw value registered for `key`.
    pub fn get(&self, category: Category, key: &str) -> Option<&str> {
        self.tokens
            .get(&category)
            .and_then(|tokens| tokens.get(key))
            .map(String::as_str)
    }

    /// Iterates `(key, value)` pairs of one category in insertion order.
    pub fn tokens(&self, category: Category) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .get(&category)
            .into_iter()
            .flat_map(|tokens| tokens.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn dark_overrides(&self) -> &DarkOverrides {
        &self.dark
    }

    /// Total number of light tokens across every category.
    pub fn len(&self) -> usize {
        self.tokens.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0 && self.dark.is_empty()
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    fn root_style(&self) -> Style {
        let mut root = style();
        for category in Category::ALL {
            for (key, value) in self.tokens(category) {
                insert_variable(&mut root, category.variable(key), value);
            }
        }
        root
    }

    fn dark_style(&self) -> Style {
        let mut dark = style();
        for (variable, value) in self.dark.entries() {
            insert_variable(&mut dark, variable, value);
        }
        dark
    }

    fn root_block(&self) -> Option<String> {
        if self.len() == 0 {
            return None;
        }
        Some(self.root_style().to_rule_as(":root"))
    }

    /// Renders the `:root` block followed, when dark overrides exist, by a
    /// `prefers-color-scheme: dark` media block.
    pub fn to_css(&self) -> String {
        let mut blocks: Vec<String> = self.root_block().into_iter().collect();
        if !self.dark.is_empty() {
            let media = MediaBlock::new(MediaQuery::new().prefers_color_scheme(ColorMode::Dark))
                .rule(self.dark_style().with_selector(":root"));
            // the only rule carries a selector, so this cannot fail
            blocks.push(media.build().unwrap_or_default());
        }
        log::debug!(
            "rendered theme: {} tokens, {} dark overrides",
            self.len(),
            self.dark.len()
        );
        blocks.join("\n")
    }

    /// Renders the `:root` block followed by the dark overrides under a
    /// class selector, for toggling dark mode manually instead of following
    /// the OS.
    ///
    /// ```rust
    /// use fluentcss::{hex, Theme};
    ///
    /// let theme = Theme::new()
    ///     .color("bg", hex("fff"))
    ///     .dark(|d| d.color("bg", hex("000")));
    /// assert_eq!(
    ///     theme.to_css_with_dark_class("dark"),
    ///     ":root { --color-bg: #fff; }\n.dark { --color-bg: #000; }"
    /// );
    /// ```
    pub fn to_css_with_dark_class(&self, class: &str) -> String {
        let mut blocks: Vec<String> = self.root_block().into_iter().collect();
        if !self.dark.is_empty() {
            let selector = format!(".{}", identifier(class));
            blocks.push(self.dark_style().to_rule_as(&selector));
        }
        blocks.join("\n")
    }

    /// Renders a single `:root` block resolved for `mode`: dark overrides
    /// replace their light values in place when `mode` is dark.
    pub fn to_css_for_mode(&self, mode: ColorMode) -> String {
        let mut root = self.root_style();
        if mode == ColorMode::Dark {
            for (variable, value) in self.dark.entries() {
                root.insert(variable, CssValue::raw(value));
            }
        }
        if root.is_empty() {
            return String::new();
        }
        root.to_rule_as(":root")
    }

    /// Like [`to_css_for_mode`](Self::to_css_for_mode), using the current
    /// theme detector (the OS setting unless overridden).
    pub fn to_css_for_os(&self) -> String {
        self.to_css_for_mode(detect_color_mode())
    }
}

// Different categories can produce the same variable (`font("size-lg")` and
// `font_size("lg")`). The later category wins, in the first one's position.
fn insert_variable(block: &mut Style, variable: String, value: &str) {
    if let Some(previous) = block.get(&variable) {
        log::warn!(
            "theme variable {} defined twice ({} replaced by {})",
            variable,
            previous,
            value
        );
    }
    block.insert(variable, CssValue::raw(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hex, rgba};
    use crate::functions::shadow;
    use crate::theme::set_theme_detector;
    use crate::units::{px, rem};
    use serial_test::serial;

    #[test]
    fn test_empty_theme_renders_nothing() {
        assert_eq!(Theme::new().to_css(), "");
        assert!(Theme::default().is_empty());
    }

    #[test]
    fn test_category_then_insertion_order() {
        let theme = Theme::new()
            .radius("sm", px(2.0))
            .color("b", hex("bbb"))
            .spacing("x", px(1.0))
            .color("a", hex("aaa"))
            .custom("gutter", rem(2.0));
        assert_eq!(
            theme.to_css(),
            ":root { --color-b: #bbb; --color-a: #aaa; --spacing-x: 1px; --radius-sm: 2px; --gutter: 2rem; }"
        );
    }

    #[test]
    fn test_no_dark_block_without_overrides() {
        let theme = Theme::new().color("a", hex("000"));
        assert!(!theme.to_css().contains("@media"));
    }

    #[test]
    fn test_dark_block_only_dark_entries() {
        let theme = Theme::new()
            .color("bg", hex("fff"))
            .color("fg", hex("000"))
            .shadow("md", shadow(px(0.0), px(1.0), px(2.0), px(0.0), rgba(0.0, 0.0, 0.0, 0.1)))
            .dark(|d| d.custom("surface", hex("111")).color("bg", hex("000")));
        let css = theme.to_css();
        let dark = css.lines().nth(1).unwrap();
        assert_eq!(
            dark,
            "@media (prefers-color-scheme: dark) { :root { --color-bg: #000; --surface: #111; } }"
        );
    }

    #[test]
    fn test_var_never_validates() {
        let theme = Theme::new();
        assert_eq!(theme.var(Category::Color, "ghost").render(), "var(--color-ghost)");
        assert!(!theme.has(Category::Color, "ghost"));
    }

    #[test]
    fn test_has_and_get() {
        let theme = Theme::new()
            .spacing("md", rem(1.0))
            .dark(|d| d.color("bg", hex("000")));
        assert!(theme.has(Category::Spacing, "md"));
        assert!(!theme.has(Category::Color, "md"));
        assert_eq!(theme.get(Category::Spacing, "md"), Some("1rem"));
        assert!(theme.has_dark(Category::Color, "bg"));
        assert!(!theme.has_dark(Category::Spacing, "md"));
    }

    #[test]
    fn test_cross_category_variable_collision() {
        let theme = Theme::new()
            .custom("color-a", hex("000"))
            .color("a", hex("111"))
            .font("size-lg", rem(1.0))
            .font_size("lg", rem(2.0));
        assert_eq!(theme.len(), 4);
        assert_eq!(
            theme.to_css(),
            ":root { --color-a: #000; --font-size-lg: 2rem; }"
        );
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let theme = Theme::new()
            .color("a", hex("111"))
            .color("b", hex("222"))
            .color("a", hex("333"));
        let keys: Vec<(&str, &str)> = theme.tokens(Category::Color).collect();
        assert_eq!(keys, vec![("a", "#333"), ("b", "#222")]);
    }

    #[test]
    fn test_dark_class_output() {
        let theme = Theme::new()
            .color("bg", hex("fff"))
            .dark(|d| d.color("bg", hex("000")));
        assert_eq!(
            theme.to_css_with_dark_class("theme-dark"),
            ":root { --color-bg: #fff; }\n.theme-dark { --color-bg: #000; }"
        );
    }

    #[test]
    fn test_dark_only_theme() {
        let theme = Theme::new().dark(|d| d.color("bg", hex("000")));
        assert_eq!(
            theme.to_css(),
            "@media (prefers-color-scheme: dark) { :root { --color-bg: #000; } }"
        );
    }

    #[test]
    fn test_css_for_mode() {
        let theme = Theme::new()
            .color("bg", hex("fff"))
            .color("fg", hex("000"))
            .dark(|d| d.color("bg", hex("000")).custom("glow", hex("0ff")));
        assert_eq!(
            theme.to_css_for_mode(ColorMode::Light),
            ":root { --color-bg: #fff; --color-fg: #000; }"
        );
        assert_eq!(
            theme.to_css_for_mode(ColorMode::Dark),
            ":root { --color-bg: #000; --color-fg: #000; --glow: #0ff; }"
        );
    }

    #[test]
    #[serial]
    fn test_css_for_os_uses_detector() {
        let theme = Theme::new()
            .color("bg", hex("fff"))
            .dark(|d| d.color("bg", hex("000")));

        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(theme.to_css_for_os(), ":root { --color-bg: #000; }");

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(theme.to_css_for_os(), ":root { --color-bg: #fff; }");
    }

    #[test]
    fn test_preset_is_seeded() {
        let theme = Theme::preset();
        assert!(theme.has(Category::Color, "primary"));
        assert!(theme.has(Category::Spacing, "4"));
        assert!(!theme.dark_overrides().is_empty());
        assert!(theme.to_css().starts_with(":root { --color-"));
    }
}
