//! Builder usage errors and theme loading errors.

use std::path::PathBuf;

/// Error returned when a builder is serialized without a required part.
///
/// These are usage errors, not CSS validation: they are raised by the build
/// call that needs the missing piece, and leave the builder untouched so it
/// can be completed and serialized again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CssError {
    /// `to_rule()` was called on a builder created without a selector.
    #[error("cannot render a rule without a selector: create the builder with rule(selector) instead of style()")]
    MissingSelector,

    /// An `@property` registration is missing a required descriptor.
    #[error("@property {name} is missing the `{descriptor}` descriptor")]
    IncompleteProperty {
        /// The custom property name, including the leading `--`.
        name: String,
        /// The missing descriptor: `syntax`, `inherits` or `initial-value`.
        descriptor: &'static str,
    },
}

/// Error returned when a theme configuration cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ThemeLoadError {
    #[error("failed to read theme file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not one of `yaml`, `yml` or `json`.
    #[error("unsupported theme format for {} (expected .yaml, .yml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}
