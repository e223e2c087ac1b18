//! fluentcss - render themes and utility stylesheets to CSS

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use fluentcss::{detect_color_mode, ColorMode, Theme, Utilities};

#[derive(Debug, Parser)]
#[command(name = "fluentcss")]
#[command(version, about = "Render fluentcss themes and utility classes as CSS", long_about = None)]
#[command(after_help = "EXAMPLES:
    fluentcss theme theme.yaml                  Variables plus a dark media block
    fluentcss theme theme.yaml --dark-class dark
    fluentcss utilities --theme theme.yaml --classes flex,p-4,bg-primary
    fluentcss preset")]
struct Cli {
    /// Log what is being rendered (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a YAML or JSON theme file as custom properties
    Theme {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit dark overrides under this class instead of a media query
        #[arg(long, value_name = "NAME", conflicts_with = "mode")]
        dark_class: Option<String>,

        /// How dark overrides are emitted
        #[arg(long, value_enum, default_value_t = Mode::Media)]
        mode: Mode,
    },

    /// Render utility classes
    Utilities {
        /// Add classes for this theme's tokens and emit its variables first
        #[arg(long, value_name = "FILE")]
        theme: Option<PathBuf>,

        /// Only render these classes (comma separated)
        #[arg(long, value_delimiter = ',', value_name = "CLASSES")]
        classes: Vec<String>,
    },

    /// Render the built-in preset theme
    Preset {
        /// Emit dark overrides under this class instead of a media query
        #[arg(long, value_name = "NAME")]
        dark_class: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// A single :root block resolved for the OS color scheme
    Auto,
    /// A single :root block with light values
    Light,
    /// A single :root block with dark overrides applied
    Dark,
    /// A :root block plus a prefers-color-scheme media block
    Media,
}

fn render_theme(theme: &Theme, dark_class: Option<&str>, mode: Mode) -> String {
    if let Some(class) = dark_class {
        return theme.to_css_with_dark_class(class);
    }
    match mode {
        Mode::Auto => theme.to_css_for_mode(detect_color_mode()),
        Mode::Light => theme.to_css_for_mode(ColorMode::Light),
        Mode::Dark => theme.to_css_for_mode(ColorMode::Dark),
        Mode::Media => theme.to_css(),
    }
}

fn load_theme(path: &Path) -> Result<Theme> {
    log::debug!("loading theme from {}", path.display());
    let theme = Theme::from_path(path)
        .with_context(|| format!("failed to load theme {}", path.display()))?;
    log::info!("loaded {} tokens from {}", theme.len(), path.display());
    Ok(theme)
}

fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Theme {
            file,
            dark_class,
            mode,
        } => {
            let theme = load_theme(file)?;
            Ok(render_theme(&theme, dark_class.as_deref(), *mode))
        }
        Command::Utilities { theme, classes } => {
            let (variables, utilities) = match theme {
                Some(path) => {
                    let theme = load_theme(path)?;
                    (theme.to_css(), Utilities::from_theme(&theme))
                }
                None => (String::new(), Utilities::standard()),
            };
            let rules = if classes.is_empty() {
                utilities.to_css()
            } else {
                utilities.css_for(classes)
            };
            let blocks: Vec<String> = [variables, rules]
                .into_iter()
                .filter(|block| !block.is_empty())
                .collect();
            Ok(blocks.join("\n"))
        }
        Command::Preset { dark_class } => {
            Ok(render_theme(&Theme::preset(), dark_class.as_deref(), Mode::Media))
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(css) => {
            println!("{css}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
