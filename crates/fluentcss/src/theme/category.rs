//! Token categories and variable references.

use crate::value::CssValue;

/// A token category. Each category owns a fixed custom-property prefix.
///
/// | Category | Prefix |
/// |----------|--------|
/// | `Color` | `--color-` |
/// | `Spacing` | `--spacing-` |
/// | `Radius` | `--radius-` |
/// | `Shadow` | `--shadow-` |
/// | `Font` | `--font-` |
/// | `FontSize` | `--font-size-` |
/// | `Custom` | `--` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Color,
    Spacing,
    Radius,
    Shadow,
    Font,
    FontSize,
    Custom,
}

impl Category {
    /// Every category, in serialization order.
    pub const ALL: [Category; 7] = [
        Category::Color,
        Category::Spacing,
        Category::Radius,
        Category::Shadow,
        Category::Font,
        Category::FontSize,
        Category::Custom,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Category::Color => "--color-",
            Category::Spacing => "--spacing-",
            Category::Radius => "--radius-",
            Category::Shadow => "--shadow-",
            Category::Font => "--font-",
            Category::FontSize => "--font-size-",
            Category::Custom => "--",
        }
    }

    /// Only colors and custom tokens can be overridden for dark mode.
    pub fn supports_dark(self) -> bool {
        matches!(self, Category::Color | Category::Custom)
    }

    /// The custom property name for `key`, e.g. `--color-primary`.
    pub fn variable(self, key: &str) -> String {
        format!("{}{}", self.prefix(), key)
    }

    /// A `var(...)` reference to `key`. The key is not checked against any
    /// theme.
    ///
    /// ```rust
    /// use fluentcss::Category;
    ///
    /// assert_eq!(Category::Color.var("primary").render(), "var(--color-primary)");
    /// assert_eq!(Category::Custom.var("header-height").render(), "var(--header-height)");
    /// ```
    pub fn var(self, key: &str) -> CssValue {
        CssValue::raw(format!("var({})", self.variable(key)))
    }
}

/// `var(--color-<key>)`.
pub fn color_token(key: &str) -> CssValue {
    Category::Color.var(key)
}

/// `var(--spacing-<key>)`.
pub fn spacing_token(key: &str) -> CssValue {
    Category::Spacing.var(key)
}

/// `var(--radius-<key>)`.
pub fn radius_token(key: &str) -> CssValue {
    Category::Radius.var(key)
}

/// `var(--shadow-<key>)`.
pub fn shadow_token(key: &str) -> CssValue {
    Category::Shadow.var(key)
}

/// `var(--font-<key>)`.
pub fn font_token(key: &str) -> CssValue {
    Category::Font.var(key)
}

/// `var(--font-size-<key>)`.
pub fn font_size_token(key: &str) -> CssValue {
    Category::FontSize.var(key)
}

/// `var(--<key>)`.
pub fn custom_token(key: &str) -> CssValue {
    Category::Custom.var(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(Category::Spacing.variable("md"), "--spacing-md");
        assert_eq!(Category::FontSize.variable("lg"), "--font-size-lg");
        assert_eq!(Category::Custom.variable("gutter"), "--gutter");
    }

    #[test]
    fn test_token_helpers_never_validate() {
        assert_eq!(color_token("never-registered").render(), "var(--color-never-registered)");
        assert_eq!(radius_token("").render(), "var(--radius-)");
        assert_eq!(shadow_token("lg").render(), "var(--shadow-lg)");
    }

    #[test]
    fn test_dark_support() {
        let dark: Vec<Category> = Category::ALL
            .iter()
            .copied()
            .filter(|c| c.supports_dark())
            .collect();
        assert_eq!(dark, vec![Category::Color, Category::Custom]);
    }
}
