//! The property table.
//!
//! One line per CSS property. The macro expands each line into a typed
//! setter on [`Style`] and a property-name value in [`prop`]. Box shorthands
//! in the `edges` section accept 1–4 positional values through [`Edges`].

use super::edges::Edges;
use super::style::Style;
use crate::value::CssValue;

macro_rules! properties {
    (
        values { $($method:ident => $css:literal,)* }
        edges { $($edge_method:ident => $edge_css:literal,)* }
    ) => {
        impl Style {
            $(
                #[doc = concat!("Sets `", $css, "`.")]
                pub fn $method(self, value: impl Into<CssValue>) -> Self {
                    self.set($css, value)
                }
            )*
            $(
                #[doc = concat!("Sets `", $edge_css, "` from one to four positional values.")]
                pub fn $edge_method(self, edges: impl Into<Edges>) -> Self {
                    self.set($edge_css, edges.into())
                }
            )*
        }

        /// Property names as values, for `transition`, `transition-property`
        /// and `will-change` lists.
        ///
        /// ```rust
        /// use fluentcss::prop;
        ///
        /// assert_eq!(prop::background_color().render(), "background-color");
        /// ```
        pub mod prop {
            use crate::value::CssValue;

            $(
                #[doc = concat!("`", $css, "`")]
                pub fn $method() -> CssValue {
                    CssValue::raw($css)
                }
            )*
            $(
                #[doc = concat!("`", $edge_css, "`")]
                pub fn $edge_method() -> CssValue {
                    CssValue::raw($edge_css)
                }
            )*
        }

        /// Every property with a typed setter.
        pub const PROPERTY_NAMES: &[&str] = &[$($css,)* $($edge_css,)*];
    };
}

properties! {
    values {
        // color and background
        color => "color",
        opacity => "opacity",
        background => "background",
        background_color => "background-color",
        background_image => "background-image",
        background_size => "background-size",
        background_position => "background-position",
        background_repeat => "background-repeat",
        background_clip => "background-clip",
        background_attachment => "background-attachment",
        accent_color => "accent-color",
        caret_color => "caret-color",

        // layout
        display => "display",
        visibility => "visibility",
        position => "position",
        top => "top",
        right => "right",
        bottom => "bottom",
        left => "left",
        z_index => "z-index",
        float => "float",
        clear => "clear",
        box_sizing => "box-sizing",
        overflow_x => "overflow-x",
        overflow_y => "overflow-y",
        isolation => "isolation",

        // sizing
        width => "width",
        height => "height",
        min_width => "min-width",
        max_width => "max-width",
        min_height => "min-height",
        max_height => "max-height",
        aspect_ratio => "aspect-ratio",

        // spacing longhands
        margin_top => "margin-top",
        margin_right => "margin-right",
        margin_bottom => "margin-bottom",
        margin_left => "margin-left",
        padding_top => "padding-top",
        padding_right => "padding-right",
        padding_bottom => "padding-bottom",
        padding_left => "padding-left",

        // borders and outlines
        border => "border",
        border_top => "border-top",
        border_right => "border-right",
        border_bottom => "border-bottom",
        border_left => "border-left",
        outline => "outline",
        outline_offset => "outline-offset",
        box_shadow => "box-shadow",

        // typography
        font => "font",
        font_family => "font-family",
        font_size => "font-size",
        font_weight => "font-weight",
        font_style => "font-style",
        line_height => "line-height",
        letter_spacing => "letter-spacing",
        text_align => "text-align",
        text_decoration => "text-decoration",
        text_transform => "text-transform",
        text_overflow => "text-overflow",
        text_shadow => "text-shadow",
        white_space => "white-space",
        word_break => "word-break",
        overflow_wrap => "overflow-wrap",
        vertical_align => "vertical-align",
        list_style => "list-style",
        content => "content",

        // flexbox
        flex => "flex",
        flex_direction => "flex-direction",
        flex_wrap => "flex-wrap",
        flex_grow => "flex-grow",
        flex_shrink => "flex-shrink",
        flex_basis => "flex-basis",
        order => "order",
        justify_content => "justify-content",
        justify_items => "justify-items",
        justify_self => "justify-self",
        align_items => "align-items",
        align_self => "align-self",
        align_content => "align-content",
        place_items => "place-items",
        place_content => "place-content",

        // grid
        grid_template_columns => "grid-template-columns",
        grid_template_rows => "grid-template-rows",
        grid_template_areas => "grid-template-areas",
        grid_column => "grid-column",
        grid_row => "grid-row",
        grid_area => "grid-area",
        grid_auto_flow => "grid-auto-flow",
        grid_auto_columns => "grid-auto-columns",
        grid_auto_rows => "grid-auto-rows",
        row_gap => "row-gap",
        column_gap => "column-gap",

        // transforms, transitions, animations
        transform => "transform",
        transform_origin => "transform-origin",
        transition => "transition",
        transition_property => "transition-property",
        transition_duration => "transition-duration",
        transition_timing_function => "transition-timing-function",
        transition_delay => "transition-delay",
        animation => "animation",
        animation_name => "animation-name",
        animation_duration => "animation-duration",
        animation_timing_function => "animation-timing-function",
        animation_delay => "animation-delay",
        animation_iteration_count => "animation-iteration-count",
        animation_direction => "animation-direction",
        animation_fill_mode => "animation-fill-mode",
        animation_play_state => "animation-play-state",
        will_change => "will-change",

        // effects
        filter => "filter",
        backdrop_filter => "backdrop-filter",
        clip_path => "clip-path",
        mix_blend_mode => "mix-blend-mode",
        object_fit => "object-fit",
        object_position => "object-position",

        // interaction
        cursor => "cursor",
        pointer_events => "pointer-events",
        user_select => "user-select",
        resize => "resize",
        appearance => "appearance",
        scroll_behavior => "scroll-behavior",

        // svg
        fill => "fill",
        stroke => "stroke",
        stroke_width => "stroke-width",
    }
    edges {
        margin => "margin",
        padding => "padding",
        inset => "inset",
        border_radius => "border-radius",
        border_width => "border-width",
        border_style => "border-style",
        border_color => "border-color",
        gap => "gap",
        overflow => "overflow",
        scroll_margin => "scroll-margin",
        scroll_padding => "scroll-padding",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::style;
    use crate::color::{colors, hex};
    use crate::keywords;
    use crate::units::{px, rem};
    use crate::value::{integer, number};

    #[test]
    fn test_typed_setters_use_canonical_names() {
        let s = style()
            .background_color(hex("fff"))
            .z_index(integer(10))
            .opacity(number(0.5));
        assert_eq!(
            s.build(),
            "background-color: #fff; z-index: 10; opacity: 0.5;"
        );
    }

    #[test]
    fn test_edge_setters() {
        let s = style()
            .border_radius((px(4.0), px(0.0)))
            .gap(rem(1.0))
            .overflow((keywords::hidden(), keywords::auto()));
        assert_eq!(
            s.build(),
            "border-radius: 4px 0px; gap: 1rem; overflow: hidden auto;"
        );
    }

    #[test]
    fn test_prop_values() {
        assert_eq!(prop::color().render(), "color");
        assert_eq!(prop::border_radius().render(), "border-radius");
    }

    #[test]
    fn test_property_names_table() {
        assert!(PROPERTY_NAMES.contains(&"grid-template-columns"));
        assert!(PROPERTY_NAMES.contains(&"margin"));
        let mut sorted = PROPERTY_NAMES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), PROPERTY_NAMES.len(), "duplicate property in table");
    }

    #[test]
    fn test_setter_accepts_reference() {
        let red = colors::red();
        let s = style().color(&red).border_color(&red);
        assert_eq!(s.build(), "color: red; border-color: red;");
    }
}
