//! Function-shaped values: gradients, transforms, filters, shapes, math and
//! the composite shorthands built from them.
//!
//! Each factory renders `name(` + its arguments joined per that function's
//! grammar + `)`. Arguments are other [`CssValue`]s; the few free-form
//! sub-syntaxes (gradient direction, `calc` expressions) take `&str`.

use crate::value::{format_number, join_with, CssValue};

fn call(name: &str, args: &[&CssValue], separator: &str) -> CssValue {
    let parts: Vec<&str> = args.iter().map(|a| a.as_str()).collect();
    CssValue::raw(format!("{}({})", name, parts.join(separator)))
}

fn call_list<I, V>(name: &str, values: I, separator: &str) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    CssValue::raw(format!("{}({})", name, join_with(values, separator)))
}

fn gradient<I, V>(name: &str, lead: &str, stops: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    let stops = join_with(stops, ", ");
    if lead.is_empty() {
        CssValue::raw(format!("{}({})", name, stops))
    } else {
        CssValue::raw(format!("{}({}, {})", name, lead, stops))
    }
}

// ----------------------------------------------------------------------------
// Gradients
// ----------------------------------------------------------------------------

/// `linear-gradient(<direction>, <stops>)`. An empty direction is omitted.
///
/// ```rust
/// use fluentcss::{colors, linear_gradient};
///
/// let g = linear_gradient("to right", [colors::red(), colors::blue()]);
/// assert_eq!(g.render(), "linear-gradient(to right, red, blue)");
/// ```
pub fn linear_gradient<I, V>(direction: &str, stops: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    gradient("linear-gradient", direction, stops)
}

pub fn repeating_linear_gradient<I, V>(direction: &str, stops: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    gradient("repeating-linear-gradient", direction, stops)
}

/// `radial-gradient(<shape>, <stops>)`, e.g. shape `"circle at center"`.
pub fn radial_gradient<I, V>(shape: &str, stops: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    gradient("radial-gradient", shape, stops)
}

pub fn repeating_radial_gradient<I, V>(shape: &str, stops: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    gradient("repeating-radial-gradient", shape, stops)
}

/// `conic-gradient(<from>, <stops>)`, e.g. from `"from 90deg"`.
pub fn conic_gradient<I, V>(from: &str, stops: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    gradient("conic-gradient", from, stops)
}

/// A color stop: `<color> <position>`.
pub fn color_stop(color: impl Into<CssValue>, position: impl Into<CssValue>) -> CssValue {
    CssValue::raw(format!("{} {}", color.into(), position.into()))
}

// ----------------------------------------------------------------------------
// Transforms
// ----------------------------------------------------------------------------

pub fn translate(x: impl Into<CssValue>, y: impl Into<CssValue>) -> CssValue {
    call("translate", &[&x.into(), &y.into()], ", ")
}

pub fn translate_x(x: impl Into<CssValue>) -> CssValue {
    call("translateX", &[&x.into()], "")
}

pub fn translate_y(y: impl Into<CssValue>) -> CssValue {
    call("translateY", &[&y.into()], "")
}

pub fn translate3d(
    x: impl Into<CssValue>,
    y: impl Into<CssValue>,
    z: impl Into<CssValue>,
) -> CssValue {
    call("translate3d", &[&x.into(), &y.into(), &z.into()], ", ")
}

pub fn rotate(angle: impl Into<CssValue>) -> CssValue {
    call("rotate", &[&angle.into()], "")
}

pub fn rotate_x(angle: impl Into<CssValue>) -> CssValue {
    call("rotateX", &[&angle.into()], "")
}

pub fn rotate_y(angle: impl Into<CssValue>) -> CssValue {
    call("rotateY", &[&angle.into()], "")
}

pub fn rotate_z(angle: impl Into<CssValue>) -> CssValue {
    call("rotateZ", &[&angle.into()], "")
}

/// `scale(<x>, <y>)`; factors are plain numbers.
pub fn scale(x: f64, y: f64) -> CssValue {
    CssValue::raw(format!("scale({}, {})", format_number(x), format_number(y)))
}

pub fn scale_x(factor: f64) -> CssValue {
    CssValue::raw(format!("scaleX({})", format_number(factor)))
}

pub fn scale_y(factor: f64) -> CssValue {
    CssValue::raw(format!("scaleY({})", format_number(factor)))
}

pub fn skew(x: impl Into<CssValue>, y: impl Into<CssValue>) -> CssValue {
    call("skew", &[&x.into(), &y.into()], ", ")
}

pub fn skew_x(angle: impl Into<CssValue>) -> CssValue {
    call("skewX", &[&angle.into()], "")
}

pub fn skew_y(angle: impl Into<CssValue>) -> CssValue {
    call("skewY", &[&angle.into()], "")
}

pub fn perspective(depth: impl Into<CssValue>) -> CssValue {
    call("perspective", &[&depth.into()], "")
}

/// `matrix(a, b, c, d, tx, ty)`.
pub fn matrix(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> CssValue {
    let parts: Vec<String> = [a, b, c, d, tx, ty].iter().map(|v| format_number(*v)).collect();
    CssValue::raw(format!("matrix({})", parts.join(", ")))
}

/// Space-joins transform functions into one `transform` value.
///
/// ```rust
/// use fluentcss::{deg, px, rotate, transforms, translate_x};
///
/// let t = transforms([translate_x(px(10.0)), rotate(deg(45.0))]);
/// assert_eq!(t.render(), "translateX(10px) rotate(45deg)");
/// ```
pub fn transforms<I, V>(values: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    join_with(values, " ")
}

// ----------------------------------------------------------------------------
// Filters
// ----------------------------------------------------------------------------

pub fn blur(radius: impl Into<CssValue>) -> CssValue {
    call("blur", &[&radius.into()], "")
}

pub fn brightness(amount: f64) -> CssValue {
    CssValue::raw(format!("brightness({})", format_number(amount)))
}

pub fn contrast(amount: f64) -> CssValue {
    CssValue::raw(format!("contrast({})", format_number(amount)))
}

pub fn grayscale(amount: f64) -> CssValue {
    CssValue::raw(format!("grayscale({})", format_number(amount)))
}

pub fn hue_rotate(angle: impl Into<CssValue>) -> CssValue {
    call("hue-rotate", &[&angle.into()], "")
}

pub fn invert(amount: f64) -> CssValue {
    CssValue::raw(format!("invert({})", format_number(amount)))
}

/// The `opacity()` filter function (the property setter is `Style::opacity`).
pub fn opacity_filter(amount: f64) -> CssValue {
    CssValue::raw(format!("opacity({})", format_number(amount)))
}

pub fn saturate(amount: f64) -> CssValue {
    CssValue::raw(format!("saturate({})", format_number(amount)))
}

pub fn sepia(amount: f64) -> CssValue {
    CssValue::raw(format!("sepia({})", format_number(amount)))
}

/// `drop-shadow(<x> <y> <blur> <color>)`.
pub fn drop_shadow(
    x: impl Into<CssValue>,
    y: impl Into<CssValue>,
    blur: impl Into<CssValue>,
    color: impl Into<CssValue>,
) -> CssValue {
    call(
        "drop-shadow",
        &[&x.into(), &y.into(), &blur.into(), &color.into()],
        " ",
    )
}

// ----------------------------------------------------------------------------
// Shapes (clip-path, shape-outside)
// ----------------------------------------------------------------------------

/// `circle(<radius> at <position>)`.
pub fn circle(radius: impl Into<CssValue>, at: impl Into<CssValue>) -> CssValue {
    CssValue::raw(format!("circle({} at {})", radius.into(), at.into()))
}

/// `ellipse(<rx> <ry> at <position>)`.
pub fn ellipse(
    rx: impl Into<CssValue>,
    ry: impl Into<CssValue>,
    at: impl Into<CssValue>,
) -> CssValue {
    CssValue::raw(format!("ellipse({} {} at {})", rx.into(), ry.into(), at.into()))
}

/// `inset(<edges>)`, edges space-joined like the `margin` shorthand.
pub fn inset_shape<I, V>(edges: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    call_list("inset", edges, " ")
}

/// `polygon(x1 y1, x2 y2, ...)`.
pub fn polygon<I, X, Y>(points: I) -> CssValue
where
    I: IntoIterator<Item = (X, Y)>,
    X: Into<CssValue>,
    Y: Into<CssValue>,
{
    let points: Vec<String> = points
        .into_iter()
        .map(|(x, y)| format!("{} {}", x.into(), y.into()))
        .collect();
    CssValue::raw(format!("polygon({})", points.join(", ")))
}

// ----------------------------------------------------------------------------
// Math
// ----------------------------------------------------------------------------

/// `calc(<expression>)`. The expression is free-form.
pub fn calc(expression: &str) -> CssValue {
    CssValue::raw(format!("calc({})", expression))
}

pub fn min<I, V>(values: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    call_list("min", values, ", ")
}

pub fn max<I, V>(values: I) -> CssValue
where
    I: IntoIterator<Item = V>,
    V: Into<CssValue>,
{
    call_list("max", values, ", ")
}

/// `clamp(<min>, <preferred>, <max>)`.
pub fn clamp(
    min: impl Into<CssValue>,
    preferred: impl Into<CssValue>,
    max: impl Into<CssValue>,
) -> CssValue {
    call("clamp", &[&min.into(), &preferred.into(), &max.into()], ", ")
}

// ----------------------------------------------------------------------------
// Timing
// ----------------------------------------------------------------------------

pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> CssValue {
    let parts: Vec<String> = [x1, y1, x2, y2].iter().map(|v| format_number(*v)).collect();
    CssValue::raw(format!("cubic-bezier({})", parts.join(", ")))
}

/// `steps(<count>, <position>)`, e.g. position `keywords::end()`.
pub fn steps(count: u32, position: impl Into<CssValue>) -> CssValue {
    CssValue::raw(format!("steps({}, {})", count, position.into()))
}

// ----------------------------------------------------------------------------
// Grid
// ----------------------------------------------------------------------------

/// `repeat(<count>, <track>)`; count may be a number or `auto-fill`.
pub fn repeat(count: impl Into<CssValue>, track: impl Into<CssValue>) -> CssValue {
    call("repeat", &[&count.into(), &track.into()], ", ")
}

pub fn minmax(min: impl Into<CssValue>, max: impl Into<CssValue>) -> CssValue {
    call("minmax", &[&min.into(), &max.into()], ", ")
}

// ----------------------------------------------------------------------------
// Composite shorthands
// ----------------------------------------------------------------------------

/// A `box-shadow` layer: `<x> <y> <blur> <spread> <color>`.
pub fn shadow(
    x: impl Into<CssValue>,
    y: impl Into<CssValue>,
    blur: impl Into<CssValue>,
    spread: impl Into<CssValue>,
    color: impl Into<CssValue>,
) -> CssValue {
    CssValue::raw(format!(
        "{} {} {} {} {}",
        x.into(),
        y.into(),
        blur.into(),
        spread.into(),
        color.into()
    ))
}

/// An `inset` `box-shadow` layer.
pub fn inset_shadow(
    x: impl Into<CssValue>,
    y: impl Into<CssValue>,
    blur: impl Into<CssValue>,
    spread: impl Into<CssValue>,
    color: impl Into<CssValue>,
) -> CssValue {
    CssValue::raw(format!("inset {}", shadow(x, y, blur, spread, color)))
}

/// One `transition` entry: `<property> <duration> <easing>`.
///
/// ```rust
/// use fluentcss::{keywords, prop, seconds, transition};
///
/// let t = transition(prop::color(), seconds(0.3), keywords::ease_out());
/// assert_eq!(t.render(), "color 0.3s ease-out");
/// ```
pub fn transition(
    property: impl Into<CssValue>,
    duration: impl Into<CssValue>,
    easing: impl Into<CssValue>,
) -> CssValue {
    CssValue::raw(format!(
        "{} {} {}",
        property.into(),
        duration.into(),
        easing.into()
    ))
}

/// One `transition` entry with a delay: `<property> <duration> <easing> <delay>`.
pub fn transition_delayed(
    property: impl Into<CssValue>,
    duration: impl Into<CssValue>,
    easing: impl Into<CssValue>,
    delay: impl Into<CssValue>,
) -> CssValue {
    CssValue::raw(format!(
        "{} {}",
        transition(property, duration, easing),
        delay.into()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{colors, hex, rgba};
    use crate::keywords;
    use crate::units::{deg, ms, percent, px, rem, seconds, vw};

    #[test]
    fn test_linear_gradient_named_colors() {
        let g = linear_gradient("to right", [colors::red(), colors::blue()]);
        assert_eq!(g.render(), "linear-gradient(to right, red, blue)");
    }

    #[test]
    fn test_gradient_without_direction() {
        let g = linear_gradient("", [colors::red(), colors::blue()]);
        assert_eq!(g.render(), "linear-gradient(red, blue)");
    }

    #[test]
    fn test_gradient_with_stops() {
        let g = radial_gradient(
            "circle",
            [
                color_stop(hex("fff"), percent(0.0)),
                color_stop(hex("000"), percent(100.0)),
            ],
        );
        assert_eq!(g.render(), "radial-gradient(circle, #fff 0%, #000 100%)");
    }

    #[test]
    fn test_conic_and_repeating() {
        assert_eq!(
            conic_gradient("from 90deg", [colors::red(), colors::red()]).render(),
            "conic-gradient(from 90deg, red, red)"
        );
        assert_eq!(
            repeating_linear_gradient("45deg", [colors::black(), colors::white()]).render(),
            "repeating-linear-gradient(45deg, black, white)"
        );
    }

    #[test]
    fn test_transforms() {
        assert_eq!(translate(px(10.0), px(20.0)).render(), "translate(10px, 20px)");
        assert_eq!(translate_x(px(10.0)).render(), "translateX(10px)");
        assert_eq!(scale(1.5, 1.0).render(), "scale(1.5, 1)");
        assert_eq!(rotate(deg(-90.0)).render(), "rotate(-90deg)");
        assert_eq!(
            matrix(1.0, 0.0, 0.0, 1.0, 0.5, 0.0).render(),
            "matrix(1, 0, 0, 1, 0.5, 0)"
        );
    }

    #[test]
    fn test_filters() {
        assert_eq!(blur(px(4.0)).render(), "blur(4px)");
        assert_eq!(brightness(1.2).render(), "brightness(1.2)");
        assert_eq!(
            drop_shadow(px(0.0), px(1.0), px(2.0), rgba(0.0, 0.0, 0.0, 0.5)).render(),
            "drop-shadow(0px 1px 2px rgba(0, 0, 0, 0.5))"
        );
    }

    #[test]
    fn test_shapes() {
        assert_eq!(
            circle(percent(50.0), keywords::center()).render(),
            "circle(50% at center)"
        );
        assert_eq!(
            polygon([(percent(0.0), percent(0.0)), (percent(100.0), percent(0.0))]).render(),
            "polygon(0% 0%, 100% 0%)"
        );
        assert_eq!(inset_shape([px(1.0), px(2.0)]).render(), "inset(1px 2px)");
    }

    #[test]
    fn test_math() {
        assert_eq!(calc("100% - 2rem").render(), "calc(100% - 2rem)");
        assert_eq!(
            clamp(rem(1.0), vw(2.5), rem(3.0)).render(),
            "clamp(1rem, 2.5vw, 3rem)"
        );
        assert_eq!(min([px(10.0), percent(5.0)]).render(), "min(10px, 5%)");
    }

    #[test]
    fn test_timing() {
        assert_eq!(
            cubic_bezier(0.4, 0.0, 0.2, 1.0).render(),
            "cubic-bezier(0.4, 0, 0.2, 1)"
        );
        assert_eq!(steps(4, keywords::end()).render(), "steps(4, end)");
    }

    #[test]
    fn test_grid() {
        assert_eq!(
            repeat(CssValue::raw("auto-fill"), minmax(px(200.0), CssValue::raw("1fr"))).render(),
            "repeat(auto-fill, minmax(200px, 1fr))"
        );
    }

    #[test]
    fn test_transition_shorthand() {
        let t = transition(CssValue::raw("color"), seconds(0.3), keywords::ease_out());
        assert_eq!(t.render(), "color 0.3s ease-out");
        let d = transition_delayed(
            CssValue::raw("opacity"),
            ms(200.0),
            keywords::linear(),
            ms(50.0),
        );
        assert_eq!(d.render(), "opacity 200ms linear 50ms");
    }

    #[test]
    fn test_shadow() {
        assert_eq!(
            shadow(px(0.0), px(1.0), px(3.0), px(0.0), rgba(0.0, 0.0, 0.0, 0.1)).render(),
            "0px 1px 3px 0px rgba(0, 0, 0, 0.1)"
        );
        assert_eq!(
            inset_shadow(px(0.0), px(2.0), px(4.0), px(0.0), colors::black()).render(),
            "inset 0px 2px 4px 0px black"
        );
    }
}
