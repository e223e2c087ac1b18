//! `@property` custom property registration.

use crate::color::custom_property_name;
use crate::error::CssError;
use crate::escape::quote;
use crate::value::CssValue;

/// An `@property` registration.
///
/// `syntax` and `inherits` are required. `initial-value` is required unless
/// the syntax is the universal `*`. Missing descriptors are reported by
/// [`build`](Self::build), not by the setters.
///
/// # Example
///
/// ```rust
/// use fluentcss::{deg, PropertyRule};
///
/// let angle = PropertyRule::new("angle")
///     .syntax("<angle>")
///     .inherits(false)
///     .initial_value(deg(0.0));
///
/// assert_eq!(
///     angle.build().unwrap(),
///     "@property --angle {\n  syntax: \"<angle>\";\n  inherits: false;\n  initial-value: 0deg;\n}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRule {
    name: String,
    syntax: Option<String>,
    inherits: Option<bool>,
    initial_value: Option<CssValue>,
}

impl PropertyRule {
    /// Starts a registration; `--` is prepended to `name` only when missing.
    pub fn new(name: &str) -> Self {
        Self {
            name: custom_property_name(name),
            syntax: None,
            inherits: None,
            initial_value: None,
        }
    }

    /// The syntax descriptor, e.g. `"<color>"`, `"<length> | auto"` or `"*"`.
    pub fn syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = Some(syntax.into());
        self
    }

    pub fn inherits(mut self, inherits: bool) -> Self {
        self.inherits = Some(inherits);
        self
    }

    pub fn initial_value(mut self, value: impl Into<CssValue>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the block.
    ///
    /// # Errors
    ///
    /// Returns [`CssError::IncompleteProperty`] naming the first missing
    /// descriptor.
    pub fn build(&self) -> Result<String, CssError> {
        let syntax = self.syntax.as_deref().ok_or_else(|| self.missing("syntax"))?;
        let inherits = self.inherits.ok_or_else(|| self.missing("inherits"))?;
        if self.initial_value.is_none() && syntax != "*" {
            return Err(self.missing("initial-value"));
        }

        let mut out = format!("@property {} {{\n", self.name);
        out.push_str(&format!("  syntax: {};\n", quote(syntax)));
        out.push_str(&format!("  inherits: {};\n", inherits));
        if let Some(initial) = &self.initial_value {
            out.push_str(&format!("  initial-value: {};\n", initial));
        }
        out.push('}');
        Ok(out)
    }

    fn missing(&self, descriptor: &'static str) -> CssError {
        CssError::IncompleteProperty {
            name: self.name.clone(),
            descriptor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex;

    #[test]
    fn test_full_registration() {
        let p = PropertyRule::new("--brand")
            .syntax("<color>")
            .inherits(true)
            .initial_value(hex("0af"));
        assert_eq!(
            p.build().unwrap(),
            "@property --brand {\n  syntax: \"<color>\";\n  inherits: true;\n  initial-value: #0af;\n}"
        );
    }

    #[test]
    fn test_missing_syntax() {
        let err = PropertyRule::new("x").inherits(false).build().unwrap_err();
        assert_eq!(
            err,
            CssError::IncompleteProperty {
                name: "--x".to_string(),
                descriptor: "syntax"
            }
        );
    }

    #[test]
    fn test_missing_inherits() {
        let err = PropertyRule::new("x")
            .syntax("<number>")
            .initial_value(CssValue::raw("0"))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CssError::IncompleteProperty { descriptor: "inherits", .. }
        ));
    }

    #[test]
    fn test_missing_initial_value() {
        let p = PropertyRule::new("x").syntax("<number>").inherits(false);
        assert!(matches!(
            p.build(),
            Err(CssError::IncompleteProperty { descriptor: "initial-value", .. })
        ));
        // fixing the builder afterwards works
        let p = p.initial_value(CssValue::raw("1"));
        assert!(p.build().is_ok());
    }

    #[test]
    fn test_universal_syntax_needs_no_initial_value() {
        let p = PropertyRule::new("anything").syntax("*").inherits(true);
        assert_eq!(
            p.build().unwrap(),
            "@property --anything {\n  syntax: \"*\";\n  inherits: true;\n}"
        );
    }
}
