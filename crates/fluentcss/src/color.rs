//! Color factories.
//!
//! `hex` and `var` normalize their prefixes so `hex("333")` and
//! `hex("#333")` are interchangeable, as are `var("x")` and `var("--x")`.
//! Channel ranges are not checked.

use crate::value::{format_number, CssValue};

/// A hex color; `#` is prepended only when missing.
///
/// ```rust
/// use fluentcss::hex;
///
/// assert_eq!(hex("333"), hex("#333"));
/// assert_eq!(hex("ff0000").render(), "#ff0000");
/// ```
pub fn hex(code: &str) -> CssValue {
    if code.starts_with('#') {
        CssValue::raw(code)
    } else {
        CssValue::raw(format!("#{}", code))
    }
}

/// `rgb(r, g, b)`. Channels are rendered as given, even outside `0..=255`.
///
/// ```rust
/// use fluentcss::rgb;
///
/// assert_eq!(rgb(255.0, 128.0, 0.0).render(), "rgb(255, 128, 0)");
/// ```
pub fn rgb(r: f64, g: f64, b: f64) -> CssValue {
    CssValue::raw(format!(
        "rgb({}, {}, {})",
        format_number(r),
        format_number(g),
        format_number(b)
    ))
}

/// `rgba(r, g, b, a)`. Alpha is rendered as given, even outside `0..=1`.
pub fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> CssValue {
    CssValue::raw(format!(
        "rgba({}, {}, {}, {})",
        format_number(r),
        format_number(g),
        format_number(b),
        format_number(alpha)
    ))
}

/// `hsl(h, s%, l%)`.
pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> CssValue {
    CssValue::raw(format!(
        "hsl({}, {}%, {}%)",
        format_number(hue),
        format_number(saturation),
        format_number(lightness)
    ))
}

/// `hsla(h, s%, l%, a)`.
pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> CssValue {
    CssValue::raw(format!(
        "hsla({}, {}%, {}%, {})",
        format_number(hue),
        format_number(saturation),
        format_number(lightness),
        format_number(alpha)
    ))
}

/// A custom property reference; `--` is prepended only when missing.
///
/// ```rust
/// use fluentcss::var;
///
/// assert_eq!(var("x"), var("--x"));
/// assert_eq!(var("brand").render(), "var(--brand)");
/// ```
pub fn var(name: &str) -> CssValue {
    CssValue::raw(format!("var({})", custom_property_name(name)))
}

/// A custom property reference with a fallback value.
pub fn var_or(name: &str, fallback: impl Into<CssValue>) -> CssValue {
    CssValue::raw(format!(
        "var({}, {})",
        custom_property_name(name),
        fallback.into()
    ))
}

/// `color-mix(in <space>, <a> <pct>%, <b>)`.
pub fn color_mix(
    space: &str,
    first: impl Into<CssValue>,
    first_percent: f64,
    second: impl Into<CssValue>,
) -> CssValue {
    CssValue::raw(format!(
        "color-mix(in {}, {} {}%, {})",
        space,
        first.into(),
        format_number(first_percent),
        second.into()
    ))
}

pub fn transparent() -> CssValue {
    CssValue::raw("transparent")
}

pub fn current_color() -> CssValue {
    CssValue::raw("currentColor")
}

pub(crate) fn custom_property_name(name: &str) -> String {
    if name.starts_with("--") {
        name.to_string()
    } else {
        format!("--{}", name)
    }
}

/// Named CSS colors.
///
/// Each function returns the keyword itself, e.g. `colors::rebecca_purple()`
/// renders `rebeccapurple`.
pub mod colors {
    use crate::value::CssValue;

    macro_rules! named_colors {
        ($($name:ident => $css:literal,)*) => {
            $(
                #[doc = concat!("The `", $css, "` keyword.")]
                pub fn $name() -> CssValue {
                    CssValue::raw($css)
                }
            )*

            /// Every named color keyword, in alphabetical order.
            pub const NAMES: &[&str] = &[$($css),*];
        };
    }

    /// Looks up a named color keyword case-insensitively.
    ///
    /// ```rust
    /// use fluentcss::colors;
    ///
    /// assert_eq!(colors::named("Tomato"), Some(colors::tomato()));
    /// assert_eq!(colors::named("not-a-color"), None);
    /// ```
    pub fn named(name: &str) -> Option<CssValue> {
        let lower = name.to_ascii_lowercase();
        NAMES
            .iter()
            .find(|candidate| **candidate == lower)
            .map(|css| CssValue::raw(*css))
    }

    named_colors! {
        alice_blue => "aliceblue",
        antique_white => "antiquewhite",
        aqua => "aqua",
        aquamarine => "aquamarine",
        azure => "azure",
        beige => "beige",
        bisque => "bisque",
        black => "black",
        blanched_almond => "blanchedalmond",
        blue => "blue",
        blue_violet => "blueviolet",
        brown => "brown",
        burly_wood => "burlywood",
        cadet_blue => "cadetblue",
        chartreuse => "chartreuse",
        chocolate => "chocolate",
        coral => "coral",
        cornflower_blue => "cornflowerblue",
        cornsilk => "cornsilk",
        crimson => "crimson",
        cyan => "cyan",
        dark_blue => "darkblue",
        dark_cyan => "darkcyan",
        dark_goldenrod => "darkgoldenrod",
        dark_gray => "darkgray",
        dark_green => "darkgreen",
        dark_khaki => "darkkhaki",
        dark_magenta => "darkmagenta",
        dark_olive_green => "darkolivegreen",
        dark_orange => "darkorange",
        dark_orchid => "darkorchid",
        dark_red => "darkred",
        dark_salmon => "darksalmon",
        dark_sea_green => "darkseagreen",
        dark_slate_blue => "darkslateblue",
        dark_slate_gray => "darkslategray",
        dark_turquoise => "darkturquoise",
        dark_violet => "darkviolet",
        deep_pink => "deeppink",
        deep_sky_blue => "deepskyblue",
        dim_gray => "dimgray",
        dodger_blue => "dodgerblue",
        firebrick => "firebrick",
        floral_white => "floralwhite",
        forest_green => "forestgreen",
        fuchsia => "fuchsia",
        gainsboro => "gainsboro",
        ghost_white => "ghostwhite",
        gold => "gold",
        goldenrod => "goldenrod",
        gray => "gray",
        green => "green",
        green_yellow => "greenyellow",
        honeydew => "honeydew",
        hot_pink => "hotpink",
        indian_red => "indianred",
        indigo => "indigo",
        ivory => "ivory",
        khaki => "khaki",
        lavender => "lavender",
        lavender_blush => "lavenderblush",
        lawn_green => "lawngreen",
        lemon_chiffon => "lemonchiffon",
        light_blue => "lightblue",
        light_coral => "lightcoral",
        light_cyan => "lightcyan",
        light_goldenrod_yellow => "lightgoldenrodyellow",
        light_gray => "lightgray",
        light_green => "lightgreen",
        light_pink => "lightpink",
        light_salmon => "lightsalmon",
        light_sea_green => "lightseagreen",
        light_sky_blue => "lightskyblue",
        light_slate_gray => "lightslategray",
        light_steel_blue => "lightsteelblue",
        light_yellow => "lightyellow",
        lime => "lime",
        lime_green => "limegreen",
        linen => "linen",
        magenta => "magenta",
        maroon => "maroon",
        medium_aquamarine => "mediumaquamarine",
        medium_blue => "mediumblue",
        medium_orchid => "mediumorchid",
        medium_purple => "mediumpurple",
        medium_sea_green => "mediumseagreen",
        medium_slate_blue => "mediumslateblue",
        medium_spring_green => "mediumspringgreen",
        medium_turquoise => "mediumturquoise",
        medium_violet_red => "mediumvioletred",
        midnight_blue => "midnightblue",
        mint_cream => "mintcream",
        misty_rose => "mistyrose",
        moccasin => "moccasin",
        navajo_white => "navajowhite",
        navy => "navy",
        old_lace => "oldlace",
        olive => "olive",
        olive_drab => "olivedrab",
        orange => "orange",
        orange_red => "orangered",
        orchid => "orchid",
        pale_goldenrod => "palegoldenrod",
        pale_green => "palegreen",
        pale_turquoise => "paleturquoise",
        pale_violet_red => "palevioletred",
        papaya_whip => "papayawhip",
        peach_puff => "peachpuff",
        peru => "peru",
        pink => "pink",
        plum => "plum",
        powder_blue => "powderblue",
        purple => "purple",
        rebecca_purple => "rebeccapurple",
        red => "red",
        rosy_brown => "rosybrown",
        royal_blue => "royalblue",
        saddle_brown => "saddlebrown",
        salmon => "salmon",
        sandy_brown => "sandybrown",
        sea_green => "seagreen",
        seashell => "seashell",
        sienna => "sienna",
        silver => "silver",
        sky_blue => "skyblue",
        slate_blue => "slateblue",
        slate_gray => "slategray",
        snow => "snow",
        spring_green => "springgreen",
        steel_blue => "steelblue",
        tan => "tan",
        teal => "teal",
        thistle => "thistle",
        tomato => "tomato",
        turquoise => "turquoise",
        violet => "violet",
        wheat => "wheat",
        white => "white",
        white_smoke => "whitesmoke",
        yellow => "yellow",
        yellow_green => "yellowgreen",
    }
}
