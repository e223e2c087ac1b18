//! The property builder: an ordered declaration set with a fluent API.
//!
//! This module provides:
//!
//! - [`Style`]: the accumulator, created by [`style()`] for inline styles or
//!   [`rule()`] for selector-scoped rules
//! - [`Edges`]: 1–4 positional values for box shorthands (`margin`,
//!   `padding`, `inset`, `border-radius`, ...)
//! - [`prop`]: property-name values for `transition` and `will-change` lists
//!
//! Typed setters are generated from the property table in `properties.rs`;
//! [`Style::set`] and [`Style::raw`] cover everything the table does not.

mod edges;
mod properties;
mod style;

pub use edges::Edges;
pub use properties::{prop, PROPERTY_NAMES};
pub use style::{rule, style, Style};
