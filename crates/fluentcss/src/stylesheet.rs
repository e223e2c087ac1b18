//! Ordered collections of top-level CSS blocks.

use crate::builder::Style;
use crate::error::CssError;
use crate::keyframes::Keyframes;
use crate::media::MediaBlock;
use crate::property_rule::PropertyRule;
use crate::theme::Theme;

/// One top-level block of a [`Stylesheet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A selector-scoped rule.
    Rule(Style),
    Keyframes(Keyframes),
    Property(PropertyRule),
    Media(MediaBlock),
    /// Pre-rendered CSS text, emitted as is.
    Raw(String),
}

impl Block {
    /// Renders the block.
    ///
    /// # Errors
    ///
    /// Propagates the usage error of the underlying builder.
    pub fn render(&self) -> Result<String, CssError> {
        match self {
            Block::Rule(style) => style.to_rule(),
            Block::Keyframes(keyframes) => Ok(keyframes.build()),
            Block::Property(property) => property.build(),
            Block::Media(media) => media.build(),
            Block::Raw(text) => Ok(text.clone()),
        }
    }
}

impl From<Style> for Block {
    fn from(style: Style) -> Self {
        Block::Rule(style)
    }
}

impl From<Keyframes> for Block {
    fn from(keyframes: Keyframes) -> Self {
        Block::Keyframes(keyframes)
    }
}

impl From<PropertyRule> for Block {
    fn from(property: PropertyRule) -> Self {
        Block::Property(property)
    }
}

impl From<MediaBlock> for Block {
    fn from(media: MediaBlock) -> Self {
        Block::Media(media)
    }
}

/// Blocks rendered in insertion order, one after another.
///
/// ```rust
/// use fluentcss::{keyframes, px, rule, style, Stylesheet};
///
/// let sheet = Stylesheet::new()
///     .add(rule(".card").padding(px(16.0)))
///     .add(keyframes("fade").from(style().raw("opacity", "0")).to(style().raw("opacity", "1")));
///
/// assert_eq!(
///     sheet.render().unwrap(),
///     ".card { padding: 16px; }\n@keyframes fade {\n  from {\n    opacity: 0;\n  }\n  to {\n    opacity: 1;\n  }\n}"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    blocks: Vec<Block>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block.
    pub fn add(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    /// Appends pre-rendered CSS.
    pub fn raw(self, css: impl Into<String>) -> Self {
        self.add(Block::Raw(css.into()))
    }

    /// Appends the theme's variable blocks. An empty theme adds nothing.
    pub fn theme(self, theme: &Theme) -> Self {
        let css = theme.to_css();
        if css.is_empty() {
            return self;
        }
        self.raw(css)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Renders every block, joined with newlines.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a block; nothing is rendered.
    pub fn render(&self) -> Result<String, CssError> {
        let rendered = self
            .blocks
            .iter()
            .map(Block::render)
            .collect::<Result<Vec<_>, _>>()?;
        log::trace!("rendered stylesheet with {} blocks", rendered.len());
        Ok(rendered.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{rule, style};
    use crate::color::hex;
    use crate::media::MediaQuery;
    use crate::units::px;

    #[test]
    fn test_empty_sheet() {
        assert_eq!(Stylesheet::new().render().unwrap(), "");
    }

    #[test]
    fn test_mixed_blocks_in_order() {
        let sheet = Stylesheet::new()
            .theme(&Theme::new().color("bg", hex("fff")))
            .add(PropertyRule::new("angle").syntax("<angle>").inherits(false).initial_value(crate::units::deg(0.0)))
            .add(MediaBlock::new(MediaQuery::new().max_width(px(600.0))).rule(rule("nav").raw("display", "none")))
            .raw("/* end */");
        assert_eq!(sheet.len(), 4);
        assert_eq!(
            sheet.render().unwrap(),
            ":root { --color-bg: #fff; }\n\
             @property --angle {\n  syntax: \"<angle>\";\n  inherits: false;\n  initial-value: 0deg;\n}\n\
             @media (max-width: 600px) { nav { display: none; } }\n\
             /* end */"
        );
    }

    #[test]
    fn test_empty_theme_adds_nothing() {
        assert!(Stylesheet::new().theme(&Theme::new()).is_empty());
    }

    #[test]
    fn test_first_error_propagates() {
        let sheet = Stylesheet::new()
            .add(rule("a").raw("color", "red"))
            .add(style().raw("color", "blue"))
            .add(PropertyRule::new("x"));
        assert_eq!(sheet.render(), Err(CssError::MissingSelector));
    }

    #[test]
    fn test_incomplete_property_propagates() {
        let sheet = Stylesheet::new().add(PropertyRule::new("x").syntax("<color>"));
        assert!(matches!(
            sheet.render(),
            Err(CssError::IncompleteProperty { descriptor: "inherits", .. })
        ));
    }
}
