//! # FluentCSS - Typed CSS Builders
//!
//! `fluentcss` builds CSS text from typed values and fluent builders. There is
//! no parser and no layout engine: every operation formats strings from small
//! immutable values, so output is deterministic and easy to test.
//!
//! ## Core Concepts
//!
//! - [`CssValue`]: an immutable, rendered value fragment (`10px`, `#f00`,
//!   `translateX(10px)`), produced by the unit, color, keyword and function
//!   factories
//! - [`Style`]: an ordered declaration set. [`style()`] starts an inline
//!   style, [`rule()`] a selector-scoped rule
//! - [`Selector`]: selector construction with escaping for classes and ids
//! - [`Keyframes`] and [`Animation`]: `@keyframes` blocks and the
//!   `animation` shorthand
//! - [`PropertyRule`], [`MediaQuery`]/[`MediaBlock`] and [`Stylesheet`]:
//!   the other top-level blocks
//! - [`Theme`]: design tokens rendered as custom properties, with dark-mode
//!   overrides and OS detection
//! - [`Utilities`]: Tailwind-like utility classes
//! - [`ScopedStyle`]: pseudo-class variants bound to generated class names
//!
//! ## Quick Start
//!
//! ```rust
//! use fluentcss::{colors, keywords, px, rule, seconds, style, transition, prop};
//!
//! let inline = style()
//!     .color(colors::red())
//!     .padding(px(10.0))
//!     .transition(transition(prop::color(), seconds(0.3), keywords::ease_out()));
//! assert_eq!(inline.build(), "color: red; padding: 10px; transition: color 0.3s ease-out;");
//!
//! let button = rule(".btn").padding((px(8.0), px(16.0)));
//! assert_eq!(button.to_rule().unwrap(), ".btn { padding: 8px 16px; }");
//! ```
//!
//! ## Ordering
//!
//! Declarations, keyframes, theme tokens and utility classes all serialize
//! in insertion order. Setting a property again replaces its value but keeps
//! its original position:
//!
//! ```rust
//! use fluentcss::{colors, px, style};
//!
//! let s = style().color(colors::red()).margin(px(0.0)).color(colors::blue());
//! assert_eq!(s.build(), "color: blue; margin: 0px;");
//! ```
//!
//! ## Themes
//!
//! ```rust
//! use fluentcss::{color_token, hex, rem, style, Theme};
//!
//! let theme = Theme::new()
//!     .color("primary", hex("3b82f6"))
//!     .spacing("md", rem(1.0));
//! assert_eq!(theme.to_css(), ":root { --color-primary: #3b82f6; --spacing-md: 1rem; }");
//!
//! let link = style().color(color_token("primary"));
//! assert_eq!(link.build(), "color: var(--color-primary);");
//! ```
//!
//! Themes can also be loaded from YAML or JSON with [`Theme::from_path`].
//!
//! ## Errors
//!
//! Factories never fail and never validate CSS. The only errors are usage
//! errors reported by the build call that needs the missing piece
//! ([`CssError`]), and theme loading errors ([`ThemeLoadError`]).

mod builder;
mod error;
mod escape;
mod keyframes;
mod media;
mod property_rule;
mod scoped;
mod selector;
mod stylesheet;
mod theme;
mod utility;

pub mod color;
pub mod functions;
pub mod keywords;
pub mod units;
pub mod value;

pub use builder::{prop, rule, style, Edges, Style, PROPERTY_NAMES};
pub use color::*;
pub use error::{CssError, ThemeLoadError};
pub use functions::*;
pub use keyframes::{keyframes, Animation, Keyframes};
pub use media::{MediaBlock, MediaQuery};
pub use property_rule::PropertyRule;
pub use scoped::{ScopedStyle, SCOPE_PREFIX};
pub use selector::{sel, Selector};
pub use stylesheet::{Block, Stylesheet};
pub use theme::{
    color_token, custom_token, detect_color_mode, font_size_token, font_token, radius_token,
    set_theme_detector, shadow_token, spacing_token, Category, ColorMode, DarkConfig,
    DarkOverrides, Theme, ThemeConfig,
};
pub use units::*;
pub use utility::{Utilities, VARIANTS};
pub use value::*;
