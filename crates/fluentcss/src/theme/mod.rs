//! Design tokens rendered as CSS custom properties.
//!
//! This module provides:
//!
//! - [`Theme`]: ordered token tables per [`Category`], with dark-mode
//!   overrides for colors and custom tokens
//! - [`Category`]: token categories and their variable prefixes
//! - [`ColorMode`] and [`set_theme_detector`]: light/dark detection that
//!   follows the OS by default
//! - YAML/JSON loading ([`Theme::from_yaml_str`], [`Theme::from_path`])
//!
//! Token getters never check that a token exists; they always produce a
//! well-formed `var(--prefix-key)` reference. Use [`Theme::has`] to check.

mod adaptive;
mod category;
mod config;
pub(crate) mod preset;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_theme_detector, ColorMode};
pub use category::{
    color_token, custom_token, font_size_token, font_token, radius_token, shadow_token,
    spacing_token, Category,
};
pub use config::{DarkConfig, ThemeConfig};
pub use theme::{DarkOverrides, Theme};
