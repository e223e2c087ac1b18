//! Loading themes from YAML or JSON documents.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use super::category::Category;
use super::theme::Theme;
use crate::error::ThemeLoadError;
use crate::value::CssValue;

/// The on-disk shape of a theme.
///
/// Every table is optional and keeps document order.
///
/// ```yaml
/// preset: false
/// colors:
///   primary: "#3b82f6"
/// spacing:
///   md: 1rem
/// dark:
///   colors:
///     primary: "#60a5fa"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Seed the built-in preset before applying the tables below.
    pub preset: bool,
    pub colors: IndexMap<String, String>,
    pub spacing: IndexMap<String, String>,
    pub radius: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
    pub fonts: IndexMap<String, String>,
    pub font_sizes: IndexMap<String, String>,
    pub custom: IndexMap<String, String>,
    pub dark: DarkConfig,
}

/// Dark-mode overrides in a [`ThemeConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DarkConfig {
    pub colors: IndexMap<String, String>,
    pub custom: IndexMap<String, String>,
}

impl ThemeConfig {
    fn tables(&self) -> [(Category, &IndexMap<String, String>); 7] {
        [
            (Category::Color, &self.colors),
            (Category::Spacing, &self.spacing),
            (Category::Radius, &self.radius),
            (Category::Shadow, &self.shadows),
            (Category::Font, &self.fonts),
            (Category::FontSize, &self.font_sizes),
            (Category::Custom, &self.custom),
        ]
    }
}

impl Theme {
    /// Builds a theme from a parsed configuration.
    ///
    /// Values are taken as raw CSS text.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = if config.preset {
            Theme::preset()
        } else {
            Theme::new()
        };

        for (category, table) in config.tables() {
            for (key, value) in table {
                theme = theme.token(category, key.as_str(), CssValue::raw(value.as_str()));
            }
        }

        let dark = &config.dark;
        if !dark.colors.is_empty() || !dark.custom.is_empty() {
            theme = theme.dark(|mut d| {
                for (key, value) in &dark.colors {
                    d = d.color(key.as_str(), CssValue::raw(value.as_str()));
                }
                for (key, value) in &dark.custom {
                    d = d.custom(key.as_str(), CssValue::raw(value.as_str()));
                }
                d
            });
        }

        log::debug!(
            "loaded theme: {} tokens, {} dark overrides (preset: {})",
            theme.len(),
            theme.dark_overrides().len(),
            config.preset
        );
        theme
    }

    /// Parses a YAML theme document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeLoadError> {
        let config: ThemeConfig = serde_yaml::from_str(source)?;
        Ok(Self::from_config(&config))
    }

    /// Parses a JSON theme document.
    pub fn from_json_str(source: &str) -> Result<Self, ThemeLoadError> {
        let config: ThemeConfig = serde_json::from_str(source)?;
        Ok(Self::from_config(&config))
    }

    /// Reads a theme file. The format is chosen by extension: `.yaml` and
    /// `.yml` for YAML, `.json` for JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeLoadError::UnsupportedFormat`] for any other extension,
    /// before touching the filesystem.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeLoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ThemeLoadError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(ThemeLoadError::UnsupportedFormat(path.to_path_buf())),
        };

        log::debug!("reading theme from {}", path.display());
        let source = fs::read_to_string(path).map_err(|source| ThemeLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r##"
colors:
  primary: "#3b82f6"
  surface: white
spacing:
  md: 1rem
custom:
  header-height: 64px
dark:
  colors:
    primary: "#60a5fa"
"##;

    #[test]
    fn test_yaml_keeps_document_order() {
        let theme = Theme::from_yaml_str(YAML).unwrap();
        assert_eq!(
            theme.to_css(),
            ":root { --color-primary: #3b82f6; --color-surface: white; --spacing-md: 1rem; --header-height: 64px; }\n\
             @media (prefers-color-scheme: dark) { :root { --color-primary: #60a5fa; } }"
        );
    }

    #[test]
    fn test_json_document() {
        let json = r##"{"radius": {"lg": "0.5rem"}, "font_sizes": {"sm": "0.875rem"}}"##;
        let theme = Theme::from_json_str(json).unwrap();
        assert_eq!(
            theme.to_css(),
            ":root { --radius-lg: 0.5rem; --font-size-sm: 0.875rem; }"
        );
    }

    #[test]
    fn test_empty_document() {
        let theme = Theme::from_json_str("{}").unwrap();
        assert!(theme.is_empty());
    }

    #[test]
    fn test_preset_flag_seeds_then_overrides() {
        let theme = Theme::from_yaml_str("preset: true\ncolors:\n  primary: tomato\n").unwrap();
        assert_eq!(theme.get(Category::Color, "primary"), Some("tomato"));
        assert!(theme.has(Category::Spacing, "4"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Theme::from_yaml_str("colours:\n  a: red\n").unwrap_err();
        assert!(matches!(err, ThemeLoadError::Yaml(_)));
    }

    #[test]
    fn test_invalid_json() {
        let err = Theme::from_json_str("{").unwrap_err();
        assert!(matches!(err, ThemeLoadError::Json(_)));
    }

    #[test]
    fn test_from_path_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();
        let theme = Theme::from_path(file.path()).unwrap();
        assert!(theme.has(Category::Color, "surface"));
        assert!(theme.has_dark(Category::Color, "primary"));
    }

    #[test]
    fn test_from_path_json_uppercase_extension() {
        let mut file = tempfile::Builder::new().suffix(".JSON").tempfile().unwrap();
        file.write_all(br#"{"colors": {"a": "red"}}"#).unwrap();
        let theme = Theme::from_path(file.path()).unwrap();
        assert_eq!(theme.get(Category::Color, "a"), Some("red"));
    }

    #[test]
    fn test_from_path_unsupported() {
        let err = Theme::from_path("theme.toml").unwrap_err();
        assert!(matches!(err, ThemeLoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::from_path(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ThemeLoadError::Io { .. }));
    }
}
