//! The leaf value type every builder consumes.
//!
//! A [`CssValue`] is one rendered CSS fragment: a unit (`10px`), a color
//! (`#ff0000`), a keyword (`ease-in-out`) or a function call
//! (`translateX(10px)`). Values are immutable once constructed, so rendering
//! one is referentially transparent. Composite values (gradients, transforms,
//! shadows) are built from other values by the factories in
//! [`crate::functions`].
//!
//! Factories never fail. Out-of-range numbers, unknown keywords and
//! malformed fragments are rendered as given; CSS validity is left to the
//! browser.

use std::fmt;

/// An immutable, rendered CSS value fragment.
///
/// # Example
///
/// ```rust
/// use fluentcss::{px, CssValue};
///
/// assert_eq!(px(10.0).render(), "10px");
/// assert_eq!(CssValue::raw("auto").to_string(), "auto");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssValue(String);

impl CssValue {
    /// Wraps free-form CSS text without any normalization.
    ///
    /// This is the escape hatch for syntax the typed factories do not model.
    pub fn raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Renders the value to CSS text.
    pub fn render(&self) -> String {
        self.0.clone()
    }

    /// Borrows the rendered text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the value renders to an empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&CssValue> for CssValue {
    fn from(value: &CssValue) -> Self {
        value.clone()
    }
}

impl AsRef<str> for CssValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Formats a number the way every unit factory does.
///
/// Whole numbers drop the fractional part (`10.0` renders as `10`), anything
/// else uses Rust's shortest round-trip decimal form, which never depends on
/// the process locale and never switches to exponent notation.
///
/// ```rust
/// use fluentcss::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(1.5), "1.5");
/// assert_eq!(format_number(-0.25), "-0.25");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == value.trunc() {
        if value.abs() < i64::MAX as f64 {
            // -0.0 collapses to "0" here as well
            return (value as i64).to_string();
        }
        return format!("{:.0}", value);
    }
    value.to_string()
}

/// A unitless number, e.g. for `opacity`, `flex-grow` or `line-height`.
pub fn number(value: f64) -> CssValue {
    CssValue(format_number(value))
}

/// An integer, e.g. for `z-index` or `order`.
pub fn integer(value: i64) -> CssValue {
    CssValue(value.to_string())
}

/// A quoted CSS string, escaped for use in `content`, `font-family` and
/// similar properties.
///
/// ```rust
/// use fluentcss::string;
///
/// assert_eq!(string("→").render(), "\"→\"");
/// assert_eq!(string("say \"hi\"").render(), "\"say \\\"hi\\\"\"");
/// ```
pub fn string(text: &str) -> CssValue {
    CssValue(crate::escape::quote(text))
}

/// An escaped CSS identifier, e.g. a custom font or animation name.
pub fn ident(name: &str) -> CssValue {
    CssValue(crate::escape::identifier(name))
}

/// A `url(...)` reference with a quoted target.
pub fn url(target: &str) -> CssValue {
    CssValue(format!("url({})", crate::escape::quote(target)))
}

/// Joins values with `", "`, the separator of comma-separated CSS lists
/// (multiple transitions, shadows, backgrounds, font stacks).
///
/// ```rust
/// use fluentcss::{join_css, keywords, prop, seconds, transition};
///
/// let both = join_css([
///     transition(prop::color(), seconds(0.3), keywords::ease_out()),
///     transition(prop::opacity(), seconds(1.0), keywords::linear()),
/// ]);
/// assert_eq!(both.render(), "color 0.3s ease-out, opacity 1s linear");
/// ```
pub fn join_css<I, V>(values: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    join_with(values, ", ")
}

/// Joins values with a single space, the separator of shorthand components.
pub fn spaced<I, V>(values: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    join_with(values, " ")
}

pub(crate) fn join_with<I, V>(values: I, separator: &str) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    let parts: Vec<String> = values.into_iter().map(|v| v.into().0).collect();
    CssValue(parts.join(separator))
}
