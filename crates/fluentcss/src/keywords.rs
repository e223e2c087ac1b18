//! Keyword values.
//!
//! Each function returns a fixed keyword, e.g. `keywords::ease_in_out()`
//! renders `ease-in-out`. Names that collide with Rust keywords carry a
//! suffix (`static_position`, `move_cursor`, `default_cursor`).

use crate::value::CssValue;

macro_rules! keywords {
    ($($(#[$meta:meta])* $name:ident => $css:literal;)*) => {
        $(
            $(#[$meta])*
            #[doc = concat!("`", $css, "`")]
            pub fn $name() -> CssValue {
                CssValue::raw($css)
            }
        )*
    };
}

keywords! {
    // global
    inherit => "inherit";
    initial => "initial";
    unset => "unset";
    revert => "revert";
    revert_layer => "revert-layer";
    auto => "auto";
    none => "none";
    normal => "normal";

    // display
    block => "block";
    inline => "inline";
    inline_block => "inline-block";
    flex => "flex";
    inline_flex => "inline-flex";
    grid => "grid";
    inline_grid => "inline-grid";
    contents => "contents";
    flow_root => "flow-root";
    table => "table";
    table_cell => "table-cell";
    list_item => "list-item";

    // position
    /// `static` is reserved in Rust.
    static_position => "static";
    relative => "relative";
    absolute => "absolute";
    fixed => "fixed";
    sticky => "sticky";

    // overflow / visibility
    visible => "visible";
    hidden => "hidden";
    scroll => "scroll";
    clip => "clip";
    collapse => "collapse";

    // box model
    border_box => "border-box";
    content_box => "content-box";
    padding_box => "padding-box";

    // flex and grid
    row => "row";
    row_reverse => "row-reverse";
    column => "column";
    column_reverse => "column-reverse";
    wrap => "wrap";
    nowrap => "nowrap";
    wrap_reverse => "wrap-reverse";
    flex_start => "flex-start";
    flex_end => "flex-end";
    start => "start";
    end => "end";
    center => "center";
    stretch => "stretch";
    baseline => "baseline";
    space_between => "space-between";
    space_around => "space-around";
    space_evenly => "space-evenly";
    dense => "dense";
    min_content => "min-content";
    max_content => "max-content";
    fit_content => "fit-content";

    // timing functions
    ease => "ease";
    ease_in => "ease-in";
    ease_out => "ease-out";
    ease_in_out => "ease-in-out";
    linear => "linear";
    step_start => "step-start";
    step_end => "step-end";

    // animation
    infinite => "infinite";
    alternate => "alternate";
    alternate_reverse => "alternate-reverse";
    reverse => "reverse";
    forwards => "forwards";
    backwards => "backwards";
    both => "both";
    running => "running";
    paused => "paused";

    // typography
    bold => "bold";
    bolder => "bolder";
    lighter => "lighter";
    italic => "italic";
    oblique => "oblique";
    uppercase => "uppercase";
    lowercase => "lowercase";
    capitalize => "capitalize";
    underline => "underline";
    overline => "overline";
    line_through => "line-through";
    ellipsis => "ellipsis";
    left => "left";
    right => "right";
    justify => "justify";
    top => "top";
    bottom => "bottom";
    middle => "middle";
    pre => "pre";
    pre_wrap => "pre-wrap";
    break_word => "break-word";
    serif => "serif";
    sans_serif => "sans-serif";
    monospace => "monospace";
    system_ui => "system-ui";

    // borders
    solid => "solid";
    dashed => "dashed";
    dotted => "dotted";
    double => "double";

    // backgrounds
    cover => "cover";
    contain => "contain";
    no_repeat => "no-repeat";
    repeat_x => "repeat-x";
    repeat_y => "repeat-y";

    // cursors and interaction
    pointer => "pointer";
    default_cursor => "default";
    text => "text";
    move_cursor => "move";
    not_allowed => "not-allowed";
    grab => "grab";
    grabbing => "grabbing";
    wait => "wait";
    all => "all";
    smooth => "smooth";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renamed_keywords() {
        assert_eq!(static_position().render(), "static");
        assert_eq!(move_cursor().render(), "move");
        assert_eq!(default_cursor().render(), "default");
    }

    #[test]
    fn test_hyphenated_keywords() {
        assert_eq!(ease_in_out().render(), "ease-in-out");
        assert_eq!(space_between().render(), "space-between");
        assert_eq!(revert_layer().render(), "revert-layer");
    }
}
