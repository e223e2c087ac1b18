//! Numeric unit constructors.
//!
//! Every constructor renders [`format_number`] followed by a fixed suffix,
//! so `px(10.0)` is `10px` and `rem(1.5)` is `1.5rem`.

use crate::value::{format_number, CssValue};

macro_rules! units {
    ($($(#[$meta:meta])* $name:ident => $suffix:literal;)*) => {
        $(
            $(#[$meta])*
            #[doc = concat!("Renders `<value>", $suffix, "`.")]
            pub fn $name(value: f64) -> CssValue {
                CssValue::raw(format!("{}{}", format_number(value), $suffix))
            }
        )*

        /// Every unit suffix this module knows, in declaration order.
        pub const UNIT_SUFFIXES: &[&str] = &[$($suffix),*];
    };
}

units! {
    // absolute lengths
    px => "px";
    cm => "cm";
    mm => "mm";
    /// Inches (`in` is a keyword in Rust).
    inches => "in";
    pt => "pt";
    pc => "pc";
    q => "Q";
    // font-relative lengths
    em => "em";
    rem => "rem";
    ex => "ex";
    ch => "ch";
    lh => "lh";
    // viewport lengths
    vw => "vw";
    vh => "vh";
    vmin => "vmin";
    vmax => "vmax";
    dvh => "dvh";
    svh => "svh";
    lvh => "lvh";
    // container query lengths
    cqw => "cqw";
    cqh => "cqh";
    percent => "%";
    fr => "fr";
    // angles
    deg => "deg";
    rad => "rad";
    grad => "grad";
    turn => "turn";
    // times
    seconds => "s";
    ms => "ms";
    // resolutions
    dpi => "dpi";
    dpcm => "dpcm";
    dppx => "dppx";
}

/// A unitless zero, valid for any length.
pub fn zero() -> CssValue {
    CssValue::raw("0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number_drops_decimal() {
        assert_eq!(px(10.0).render(), "10px");
    }

    #[test]
    fn test_fraction_kept() {
        assert_eq!(rem(1.5).render(), "1.5rem");
        assert_eq!(seconds(0.3).render(), "0.3s");
    }

    #[test]
    fn test_percent_and_uppercase_q() {
        assert_eq!(percent(50.0).render(), "50%");
        assert_eq!(q(4.0).render(), "4Q");
    }

    #[test]
    fn test_negative_values_are_not_rejected() {
        assert_eq!(px(-2.5).render(), "-2.5px");
        assert_eq!(deg(720.0).render(), "720deg");
    }

    #[test]
    fn test_inches_suffix() {
        assert_eq!(inches(1.0).render(), "1in");
    }

    #[test]
    fn test_zero() {
        assert_eq!(zero().render(), "0");
    }

    #[test]
    fn test_suffix_table_is_complete() {
        assert!(UNIT_SUFFIXES.contains(&"dppx"));
        assert!(UNIT_SUFFIXES.contains(&"%"));
    }
}
