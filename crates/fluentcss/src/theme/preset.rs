//! Built-in token tables used by [`Theme::preset`].

use super::category::Category;
use super::theme::Theme;
use crate::value::CssValue;

/// Semantic colors.
const COLORS: &[(&str, &str)] = &[
    ("primary", "#3b82f6"),
    ("primary-hover", "#2563eb"),
    ("secondary", "#64748b"),
    ("accent", "#8b5cf6"),
    ("success", "#22c55e"),
    ("warning", "#f59e0b"),
    ("danger", "#ef4444"),
    ("info", "#0ea5e9"),
    ("background", "#ffffff"),
    ("surface", "#f8fafc"),
    ("border", "#e2e8f0"),
    ("text", "#0f172a"),
    ("text-muted", "#64748b"),
    ("white", "#ffffff"),
    ("black", "#000000"),
];

/// Palette shades, `<hue>-<step>`.
const PALETTE: &[(&str, [&str; 10])] = &[
    (
        "gray",
        [
            "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563",
            "#374151", "#1f2937", "#111827",
        ],
    ),
    (
        "red",
        [
            "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626",
            "#b91c1c", "#991b1b", "#7f1d1d",
        ],
    ),
    (
        "green",
        [
            "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a",
            "#15803d", "#166534", "#14532d",
        ],
    ),
    (
        "blue",
        [
            "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb",
            "#1d4ed8", "#1e40af", "#1e3a8a",
        ],
    ),
];

const SHADE_STEPS: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

/// Dark variants of the semantic colors.
const DARK_COLORS: &[(&str, &str)] = &[
    ("primary", "#60a5fa"),
    ("primary-hover", "#93c5fd"),
    ("background", "#0f172a"),
    ("surface", "#1e293b"),
    ("border", "#334155"),
    ("text", "#f1f5f9"),
    ("text-muted", "#94a3b8"),
];

/// Spacing scale in 0.25rem steps, keyed like utility classes.
pub(crate) const SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("px", "1px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("8", "2rem"),
    ("10", "2.5rem"),
    ("12", "3rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("32", "8rem"),
    ("48", "12rem"),
    ("64", "16rem"),
];

pub(crate) const RADIUS: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

pub(crate) const SHADOWS: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
    (
        "md",
        "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1)",
    ),
    ("inner", "inset 0 2px 4px 0 rgba(0, 0, 0, 0.05)"),
    ("none", "none"),
];

pub(crate) const FONTS: &[(&str, &str)] = &[
    (
        "sans",
        "ui-sans-serif, system-ui, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\"",
    ),
    ("serif", "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif"),
    (
        "mono",
        "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", monospace",
    ),
];

pub(crate) const FONT_SIZES: &[(&str, &str)] = &[
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
    ("6xl", "3.75rem"),
];

fn add_table(mut theme: Theme, category: Category, table: &[(&str, &str)]) -> Theme {
    for (key, value) in table {
        theme = theme.token(category, *key, CssValue::raw(*value));
    }
    theme
}

/// Adds every preset token to `theme`.
pub(super) fn seed(mut theme: Theme) -> Theme {
    theme = add_table(theme, Category::Color, COLORS);
    for (hue, shades) in PALETTE {
        for (step, value) in SHADE_STEPS.iter().zip(shades) {
            theme = theme.color(format!("{}-{}", hue, step), CssValue::raw(*value));
        }
    }
    theme = add_table(theme, Category::Spacing, SPACING);
    theme = add_table(theme, Category::Radius, RADIUS);
    theme = add_table(theme, Category::Shadow, SHADOWS);
    theme = add_table(theme, Category::Font, FONTS);
    theme = add_table(theme, Category::FontSize, FONT_SIZES);
    theme.dark(|mut d| {
        for (key, value) in DARK_COLORS {
            d = d.color(*key, CssValue::raw(*value));
        }
        d
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_shades() {
        let theme = seed(Theme::new());
        assert_eq!(theme.get(Category::Color, "blue-500"), Some("#3b82f6"));
        assert_eq!(theme.get(Category::Color, "gray-900"), Some("#111827"));
    }

    #[test]
    fn test_tables_have_unique_keys() {
        for table in [COLORS, SPACING, RADIUS, SHADOWS, FONTS, FONT_SIZES, DARK_COLORS] {
            let mut keys: Vec<&str> = table.iter().map(|(k, _)| *k).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), table.len());
        }
    }

    #[test]
    fn test_dark_colors_override_known_tokens() {
        let theme = seed(Theme::new());
        for (key, _) in DARK_COLORS {
            assert!(theme.has(Category::Color, key), "{key} has no light value");
        }
    }

    #[test]
    fn test_token_count() {
        let theme = seed(Theme::new());
        let expected = COLORS.len()
            + PALETTE.len() * SHADE_STEPS.len()
            + SPACING.len()
            + RADIUS.len()
            + SHADOWS.len()
            + FONTS.len()
            + FONT_SIZES.len();
        assert_eq!(theme.len(), expected);
    }
}
