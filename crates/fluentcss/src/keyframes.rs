//! `@keyframes` blocks and the `animation` shorthand.

use std::borrow::Borrow;

use indexmap::IndexMap;

use crate::builder::Style;
use crate::value::{format_number, CssValue};

/// A named, ordered set of keyframes.
///
/// Frames serialize in the order they were added; they are never sorted by
/// percentage. `from` and `to` keep their literal labels instead of being
/// rewritten to `0%` and `100%`. Adding a frame under an existing label
/// replaces its declarations in place.
///
/// # Example
///
/// ```rust
/// use fluentcss::{keyframes, number, style};
///
/// let fade = keyframes("fade")
///     .from(style().opacity(number(0.0)))
///     .to(style().opacity(number(1.0)));
///
/// assert_eq!(
///     fade.build(),
///     "@keyframes fade {\n  from {\n    opacity: 0;\n  }\n  to {\n    opacity: 1;\n  }\n}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyframes {
    name: String,
    frames: IndexMap<String, Style>,
}

/// Starts a keyframes block.
pub fn keyframes(name: impl Into<String>) -> Keyframes {
    Keyframes::new(name)
}

impl Keyframes {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: IndexMap::new(),
        }
    }

    /// Adds the `from` frame.
    #[allow(clippy::should_implement_trait)]
    pub fn from(self, frame: impl Borrow<Style>) -> Self {
        self.frame("from", frame)
    }

    /// Adds the `to` frame.
    pub fn to(self, frame: impl Borrow<Style>) -> Self {
        self.frame("to", frame)
    }

    /// Adds a frame at `percent`, labelled `"<percent>%"`.
    pub fn at(self, percent: f64, frame: impl Borrow<Style>) -> Self {
        self.frame(format!("{}%", format_number(percent)), frame)
    }

    /// Adds one frame shared by several positions, labelled e.g. `"0%, 50%"`.
    pub fn at_many(self, percents: &[f64], frame: impl Borrow<Style>) -> Self {
        let label: Vec<String> = percents
            .iter()
            .map(|p| format!("{}%", format_number(*p)))
            .collect();
        self.frame(label.join(", "), frame)
    }

    /// Adds a frame under an arbitrary label.
    pub fn frame(mut self, label: impl Into<String>, frame: impl Borrow<Style>) -> Self {
        // snapshot: later changes to the caller's builder do not leak in
        self.frames.insert(label.into(), frame.borrow().clone());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frame labels in serialization order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The keyframes name as a value, for `animation-name`.
    pub fn name_value(&self) -> CssValue {
        CssValue::raw(self.name.clone())
    }

    /// Starts an `animation` shorthand bound to this block's name.
    pub fn animation(&self, duration: impl Into<CssValue>) -> Animation {
        Animation::new(self.name_value()).duration(duration)
    }

    /// Renders the block.
    ///
    /// Frames are indented two spaces and declarations four, one per line.
    pub fn build(&self) -> String {
        let mut out = format!("@keyframes {} {{\n", self.name);
        for (label, frame) in &self.frames {
            out.push_str("  ");
            out.push_str(label);
            out.push_str(" {\n");
            out.push_str(&frame.build_lines(4));
            out.push_str("  }\n");
        }
        out.push('}');
        log::trace!("rendered @keyframes {} with {} frames", self.name, self.frames.len());
        out
    }
}

/// The `animation` shorthand.
///
/// Fields render in a fixed order: name, duration, easing, delay, iteration
/// count, direction, fill mode, play state. Unset fields are omitted.
///
/// ```rust
/// use fluentcss::{keywords, seconds, Animation, CssValue};
///
/// let spin = Animation::new(CssValue::raw("spin"))
///     .duration(seconds(1.0))
///     .easing(keywords::linear())
///     .infinite();
/// assert_eq!(spin.build().render(), "spin 1s linear infinite");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Animation {
    name: Option<CssValue>,
    duration: Option<CssValue>,
    easing: Option<CssValue>,
    delay: Option<CssValue>,
    iterations: Option<CssValue>,
    direction: Option<CssValue>,
    fill_mode: Option<CssValue>,
    play_state: Option<CssValue>,
}

impl Animation {
    pub fn new(name: impl Into<CssValue>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn duration(mut self, duration: impl Into<CssValue>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn easing(mut self, easing: impl Into<CssValue>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    pub fn delay(mut self, delay: impl Into<CssValue>) -> Self {
        self.delay = Some(delay.into());
        self
    }

    pub fn iterations(mut self, count: f64) -> Self {
        self.iterations = Some(CssValue::raw(format_number(count)));
        self
    }

    pub fn infinite(mut self) -> Self {
        self.iterations = Some(crate::keywords::infinite());
        self
    }

    pub fn direction(mut self, direction: impl Into<CssValue>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    pub fn fill_mode(mut self, fill_mode: impl Into<CssValue>) -> Self {
        self.fill_mode = Some(fill_mode.into());
        self
    }

    pub fn play_state(mut self, play_state: impl Into<CssValue>) -> Self {
        self.play_state = Some(play_state.into());
        self
    }

    /// Renders the shorthand value.
    pub fn build(&self) -> CssValue {
        let parts: Vec<&str> = [
            &self.name,
            &self.duration,
            &self.easing,
            &self.delay,
            &self.iterations,
            &self.direction,
            &self.fill_mode,
            &self.play_state,
        ]
        .into_iter()
        .flatten()
        .map(CssValue::as_str)
        .collect();
        CssValue::raw(parts.join(" "))
    }
}

impl From<Animation> for CssValue {
    fn from(animation: Animation) -> Self {
        animation.build()
    }
}

impl From<&Animation> for CssValue {
    fn from(animation: &Animation) -> Self {
        animation.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::style;
    use crate::keywords;
    use crate::units::{ms, px, seconds};
    use crate::value::number;

    #[test]
    fn test_from_to_labels_are_literal() {
        let k = keyframes("x")
            .from(style().opacity(number(0.0)))
            .to(style().opacity(number(1.0)));
        let out = k.build();
        assert!(out.contains("  from {"));
        assert!(out.contains("  to {"));
        assert!(!out.contains("0%"));
        assert!(!out.contains("100%"));
    }

    #[test]
    fn test_exact_layout() {
        let k = keyframes("slide")
            .at(0.0, style().raw("left", "0").raw("opacity", "0"))
            .at(100.0, style().raw("left", "10px"));
        assert_eq!(
            k.build(),
            "@keyframes slide {\n  0% {\n    left: 0;\n    opacity: 0;\n  }\n  100% {\n    left: 10px;\n  }\n}"
        );
    }

    #[test]
    fn test_frames_are_not_sorted() {
        let k = keyframes("x")
            .at(100.0, style().raw("a", "1"))
            .at(12.5, style().raw("a", "2"))
            .at(50.0, style().raw("a", "3"));
        let labels: Vec<&str> = k.labels().collect();
        assert_eq!(labels, vec!["100%", "12.5%", "50%"]);
    }

    #[test]
    fn test_at_many_label() {
        let k = keyframes("pulse").at_many(&[0.0, 50.0, 100.0], style().raw("a", "1"));
        assert!(k.build().contains("  0%, 50%, 100% {\n"));
    }

    #[test]
    fn test_frame_is_a_snapshot() {
        let frame = style().raw("color", "red");
        let k = keyframes("x").from(&frame);
        let frame = frame.raw("color", "blue");
        assert!(k.build().contains("color: red;"));
        assert_eq!(frame.get("color"), Some("blue"));
    }

    #[test]
    fn test_empty_keyframes() {
        assert_eq!(keyframes("none").build(), "@keyframes none {\n}");
    }

    #[test]
    fn test_empty_frame() {
        let k = keyframes("x").from(style());
        assert_eq!(k.build(), "@keyframes x {\n  from {\n  }\n}");
    }

    #[test]
    fn test_build_is_repeatable() {
        let k = keyframes("x").to(style().raw("a", "b"));
        assert_eq!(k.build(), k.build());
    }

    #[test]
    fn test_animation_full_order() {
        let a = Animation::new(CssValue::raw("bounce"))
            .play_state(keywords::running())
            .fill_mode(keywords::forwards())
            .direction(keywords::alternate())
            .iterations(3.0)
            .delay(ms(100.0))
            .easing(keywords::ease_in())
            .duration(seconds(0.5));
        assert_eq!(
            a.build().render(),
            "bounce 0.5s ease-in 100ms 3 alternate forwards running"
        );
    }

    #[test]
    fn test_animation_from_keyframes() {
        let k = keyframes("wiggle").to(style().raw("rotate", "5deg"));
        let s = style().animation(k.animation(ms(300.0)).infinite());
        assert_eq!(s.build(), "animation: wiggle 300ms infinite;");
        let s = style().animation_name(k.name_value()).left(px(0.0));
        assert_eq!(s.build(), "animation-name: wiggle; left: 0px;");
    }
}
