//! Positional shorthand values.

use crate::value::{spaced, CssValue};

/// One to four space-joined values for box shorthands.
///
/// A single value, or a tuple of two, three or four values, converts into
/// `Edges`, so the same setter accepts every positional form:
///
/// ```rust
/// use fluentcss::{keywords, px, style};
///
/// let s = style()
///     .margin(px(4.0))
///     .padding((px(4.0), px(8.0)))
///     .inset((px(1.0), px(2.0), px(3.0), keywords::auto()));
/// assert_eq!(s.build(), "margin: 4px; padding: 4px 8px; inset: 1px 2px 3px auto;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edges(CssValue);

impl From<CssValue> for Edges {
    fn from(value: CssValue) -> Self {
        Edges(value)
    }
}

impl From<&CssValue> for Edges {
    fn from(value: &CssValue) -> Self {
        Edges(value.clone())
    }
}

impl<A, B> From<(A, B)> for Edges
where
    A: Into<CssValue>,
    B: Into<CssValue>,
{
    fn from((a, b): (A, B)) -> Self {
        Edges(spaced([a.into(), b.into()]))
    }
}

impl<A, B, C> From<(A, B, C)> for Edges
where
    A: Into<CssValue>,
    B: Into<CssValue>,
    C: Into<CssValue>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        Edges(spaced([a.into(), b.into(), c.into()]))
    }
}

impl<A, B, C, D> From<(A, B, C, D)> for Edges
where
    A: Into<CssValue>,
    B: Into<CssValue>,
    C: Into<CssValue>,
    D: Into<CssValue>,
{
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        Edges(spaced([a.into(), b.into(), c.into(), d.into()]))
    }
}

impl From<Edges> for CssValue {
    fn from(edges: Edges) -> Self {
        edges.0
    }
}
