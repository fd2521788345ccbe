//! Optional `resxkit.toml` project configuration.
//!
//! ```toml
//! source = "Resources/Strings.resx"
//! cultures = ["fr", "de-DE"]
//! sort_on_write = true
//! strict = false
//! ```

use std::path::{Path, PathBuf};

use resxkit::LoadOptions;
use serde::Deserialize;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "resxkit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Neutral-language `.resx` file. Relative paths are resolved against the config file.
    pub source: Option<PathBuf>,
    /// Cultures whose translated files are checked by `status`.
    pub cultures: Vec<String>,
    /// Sort documents before writing them back.
    pub sort_on_write: bool,
    /// Reject `data` elements without a `name` instead of skipping them.
    pub strict: bool,
}

impl Config {
    /// Loads and parses the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;

        if let (Some(source), Some(base)) = (config.source.as_ref(), path.parent())
            && source.is_relative()
        {
            config.source = Some(base.join(source));
        }
        Ok(config)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::new().with_strict(self.strict)
    }

    /// Loads `path` when given, otherwise `resxkit.toml` if it exists, otherwise defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, String> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
