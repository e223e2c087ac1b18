//! The built-in utility class tables.

use super::Utilities;
use crate::builder::{style, Style};
use crate::keywords;
use crate::theme::preset::{FONTS, FONT_SIZES, RADIUS, SHADOWS, SPACING};
use crate::theme::{Category, Theme};
use crate::units::{percent, rem, vh, vw};
use crate::value::{integer, number, CssValue};

/// `(prefix, properties)` pairs for the spacing utilities.
const PADDING: &[(&str, &[&str])] = &[
    ("p", &["padding"]),
    ("px", &["padding-left", "padding-right"]),
    ("py", &["padding-top", "padding-bottom"]),
    ("pt", &["padding-top"]),
    ("pr", &["padding-right"]),
    ("pb", &["padding-bottom"]),
    ("pl", &["padding-left"]),
];

const MARGIN: &[(&str, &[&str])] = &[
    ("m", &["margin"]),
    ("mx", &["margin-left", "margin-right"]),
    ("my", &["margin-top", "margin-bottom"]),
    ("mt", &["margin-top"]),
    ("mr", &["margin-right"]),
    ("mb", &["margin-bottom"]),
    ("ml", &["margin-left"]),
];

const FRACTIONS: &[(u32, u32)] = &[(1, 2), (1, 3), (2, 3), (1, 4), (3, 4), (1, 5), (2, 5)];

const FONT_WEIGHTS: &[(&str, i64)] = &[
    ("thin", 100),
    ("extralight", 200),
    ("light", 300),
    ("normal", 400),
    ("medium", 500),
    ("semibold", 600),
    ("bold", 700),
    ("extrabold", 800),
    ("black", 900),
];

const OPACITY_STEPS: &[i64] = &[0, 5, 10, 20, 25, 30, 40, 50, 60, 70, 75, 80, 90, 95, 100];

fn spread(properties: &[&str], value: &CssValue) -> Style {
    let mut s = style();
    for property in properties {
        s.insert(*property, value);
    }
    s
}

/// `n/d` as a percentage, rounded to six decimals.
fn fraction(n: u32, d: u32) -> CssValue {
    let value = (f64::from(n) * 100.0 / f64::from(d) * 1e6).round() / 1e6;
    percent(value)
}

impl Utilities {
    /// The built-in utility set with literal values.
    ///
    /// ```rust
    /// use fluentcss::Utilities;
    ///
    /// let utilities = Utilities::standard();
    /// assert_eq!(utilities.css_for(["flex", "p-4"]), ".flex { display: flex; }\n.p-4 { padding: 1rem; }");
    /// ```
    pub fn standard() -> Self {
        let mut u = Self::new();
        u.layout();
        u.flexbox();
        u.typography();
        u.spacing(SPACING.iter().map(|(k, v)| (*k, CssValue::raw(*v))));
        u.sizing();
        for (key, value) in RADIUS {
            u.insert(format!("rounded-{}", key), style().border_radius(CssValue::raw(*value)));
        }
        u.insert("rounded", style().border_radius(rem(0.25)));
        for (key, value) in SHADOWS {
            u.insert(format!("shadow-{}", key), style().box_shadow(CssValue::raw(*value)));
        }
        for step in OPACITY_STEPS {
            u.insert(
                format!("opacity-{}", step),
                style().opacity(number(*step as f64 / 100.0)),
            );
        }
        u
    }

    /// [`standard`](Self::standard) plus classes that reference the tokens of
    /// `theme` through `var(...)`.
    ///
    /// Colors produce `text-*`, `bg-*` and `border-*`; spacing produces the
    /// padding, margin and gap classes; radii, shadows, fonts and font sizes
    /// produce `rounded-*`, `shadow-*`, `font-*` and `text-*`. Theme classes
    /// replace standard classes of the same name.
    pub fn from_theme(theme: &Theme) -> Self {
        let mut u = Self::standard();

        for (key, _) in theme.tokens(Category::Color) {
            let color = Category::Color.var(key);
            u.insert(format!("text-{}", key), style().color(&color));
            u.insert(format!("bg-{}", key), style().background_color(&color));
            u.insert(format!("border-{}", key), style().border_color(&color));
        }

        u.spacing(
            theme
                .tokens(Category::Spacing)
                .map(|(key, _)| (key, Category::Spacing.var(key))),
        );

        for (key, _) in theme.tokens(Category::Radius) {
            u.insert(
                format!("rounded-{}", key),
                style().border_radius(Category::Radius.var(key)),
            );
        }
        for (key, _) in theme.tokens(Category::Shadow) {
            u.insert(
                format!("shadow-{}", key),
                style().box_shadow(Category::Shadow.var(key)),
            );
        }
        for (key, _) in theme.tokens(Category::Font) {
            u.insert(
                format!("font-{}", key),
                style().font_family(Category::Font.var(key)),
            );
        }
        for (key, _) in theme.tokens(Category::FontSize) {
            u.insert(
                format!("text-{}", key),
                style().font_size(Category::FontSize.var(key)),
            );
        }

        log::debug!("built {} utility classes from theme", u.len());
        u
    }

    fn layout(&mut self) {
        let displays = [
            ("block", keywords::block()),
            ("inline-block", keywords::inline_block()),
            ("inline", keywords::inline()),
            ("flex", keywords::flex()),
            ("inline-flex", keywords::inline_flex()),
            ("grid", keywords::grid()),
            ("inline-grid", keywords::inline_grid()),
            ("contents", keywords::contents()),
            ("hidden", keywords::none()),
        ];
        for (name, value) in displays {
            self.insert(name, style().display(value));
        }

        let positions = [
            ("static", keywords::static_position()),
            ("relative", keywords::relative()),
            ("absolute", keywords::absolute()),
            ("fixed", keywords::fixed()),
            ("sticky", keywords::sticky()),
        ];
        for (name, value) in positions {
            self.insert(name, style().position(value));
        }

        self.insert("inset-0", style().inset(integer(0)));
        self.insert("overflow-hidden", style().overflow(keywords::hidden()));
        self.insert("overflow-auto", style().overflow(keywords::auto()));
        self.insert("overflow-scroll", style().overflow(keywords::scroll()));
        self.insert("box-border", style().box_sizing(keywords::border_box()));
        self.insert("cursor-pointer", style().cursor(keywords::pointer()));
        self.insert(
            "cursor-not-allowed",
            style().cursor(keywords::not_allowed()),
        );
    }

    fn flexbox(&mut self) {
        self.insert("flex-row", style().flex_direction(keywords::row()));
        self.insert("flex-col", style().flex_direction(keywords::column()));
        self.insert("flex-wrap", style().flex_wrap(keywords::wrap()));
        self.insert("flex-nowrap", style().flex_wrap(keywords::nowrap()));
        self.insert("flex-1", style().flex(CssValue::raw("1 1 0%")));
        self.insert("flex-auto", style().flex(CssValue::raw("1 1 auto")));
        self.insert("flex-none", style().flex(keywords::none()));
        self.insert("grow", style().flex_grow(integer(1)));
        self.insert("shrink-0", style().flex_shrink(integer(0)));

        let alignments = [
            ("start", keywords::flex_start()),
            ("center", keywords::center()),
            ("end", keywords::flex_end()),
            ("stretch", keywords::stretch()),
            ("baseline", keywords::baseline()),
        ];
        for (name, value) in alignments {
            self.insert(format!("items-{}", name), style().align_items(value));
        }

        let justifications = [
            ("start", keywords::flex_start()),
            ("center", keywords::center()),
            ("end", keywords::flex_end()),
            ("between", keywords::space_between()),
            ("around", keywords::space_around()),
            ("evenly", keywords::space_evenly()),
        ];
        for (name, value) in justifications {
            self.insert(format!("justify-{}", name), style().justify_content(value));
        }

        for columns in 1..=12 {
            self.insert(
                format!("grid-cols-{}", columns),
                style().grid_template_columns(CssValue::raw(format!(
                    "repeat({}, minmax(0, 1fr))",
                    columns
                ))),
            );
        }
    }

    fn typography(&mut self) {
        let aligns = [
            ("left", keywords::left()),
            ("center", keywords::center()),
            ("right", keywords::right()),
            ("justify", keywords::justify()),
        ];
        for (name, value) in aligns {
            self.insert(format!("text-{}", name), style().text_align(value));
        }

        for (name, weight) in FONT_WEIGHTS {
            self.insert(format!("font-{}", name), style().font_weight(integer(*weight)));
        }
        for (key, value) in FONT_SIZES {
            self.insert(format!("text-{}", key), style().font_size(CssValue::raw(*value)));
        }
        for (key, value) in FONTS {
            self.insert(format!("font-{}", key), style().font_family(CssValue::raw(*value)));
        }

        self.insert("italic", style().font_style(keywords::italic()));
        self.insert("underline", style().text_decoration(keywords::underline()));
        self.insert("line-through", style().text_decoration(keywords::line_through()));
        self.insert("no-underline", style().text_decoration(keywords::none()));
        self.insert("uppercase", style().text_transform(keywords::uppercase()));
        self.insert("lowercase", style().text_transform(keywords::lowercase()));
        self.insert("capitalize", style().text_transform(keywords::capitalize()));
        self.insert(
            "truncate",
            style()
                .overflow(keywords::hidden())
                .text_overflow(keywords::ellipsis())
                .white_space(keywords::nowrap()),
        );
    }

    /// Padding, margin and gap classes for each `(key, value)` of a scale.
    fn spacing<'a>(&mut self, scale: impl IntoIterator<Item = (&'a str, CssValue)>) {
        for (key, value) in scale {
            for (prefix, properties) in PADDING.iter().chain(MARGIN) {
                self.insert(format!("{}-{}", prefix, key), spread(properties, &value));
            }
            self.insert(format!("gap-{}", key), style().gap(&value));
            self.insert(format!("gap-x-{}", key), style().column_gap(&value));
            self.insert(format!("gap-y-{}", key), style().row_gap(&value));
        }
        self.insert("mx-auto", style().margin_auto_x());
    }

    fn sizing(&mut self) {
        self.insert("w-full", style().width(percent(100.0)));
        self.insert("w-screen", style().width(vw(100.0)));
        self.insert("w-auto", style().width(keywords::auto()));
        self.insert("w-fit", style().width(keywords::fit_content()));
        self.insert("h-full", style().height(percent(100.0)));
        self.insert("h-screen", style().height(vh(100.0)));
        self.insert("h-auto", style().height(keywords::auto()));
        self.insert("min-h-screen", style().min_height(vh(100.0)));
        self.insert("max-w-full", style().max_width(percent(100.0)));
        self.insert("size-full", style().size(percent(100.0), percent(100.0)));

        for (n, d) in FRACTIONS {
            self.insert(format!("w-{}/{}", n, d), style().width(fraction(*n, *d)));
            self.insert(format!("h-{}/{}", n, d), style().height(fraction(*n, *d)));
        }

        for (key, value) in SPACING {
            self.insert(format!("w-{}", key), style().width(CssValue::raw(*value)));
            self.insert(format!("h-{}", key), style().height(CssValue::raw(*value)));
        }
    }
}
