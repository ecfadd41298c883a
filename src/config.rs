use crate::search::{FilterKind, SortKind};
use camino::{Utf8Path, Utf8PathBuf};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// How the command-line front end prints a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "app", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Titles with an indented step outline
    #[default]
    Text,
    /// Recipe card markup
    Html,
    /// The view list as JSON
    Json,
}

/// Settings for loading a catalog and the initial view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Catalog file or directory; the bundled sample is used when unset
    pub catalog: Option<Utf8PathBuf>,
    /// Filter applied before any UI event
    pub default_filter: FilterKind,
    /// Sort applied before any UI event
    pub default_sort: SortKind,
    pub format: OutputFormat,
}

impl ViewConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CARDS__ prefix
    /// 2. recipe-cards.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CARDS__DEFAULT_FILTER
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Same as [`ViewConfig::load`] but reads the given TOML file, which
    /// must exist, instead of `recipe-cards.toml`.
    pub fn load_from(path: &Utf8Path) -> Result<Self, ConfigError> {
        load_config(Some(path))
    }
}

fn load_config(path: Option<&Utf8Path>) -> Result<ViewConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path.as_std_path()).required(true),
        // Optional config file (can be missing)
        None => File::with_name("recipe-cards").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("RECIPE_CARDS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
