//! Optional `elmi.toml` configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, GenerationMode, Result};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "elmi.toml";

/// Generation settings read from `elmi.toml`.
///
/// Every key is optional. Values given on the command line take precedence
/// over the file, see [`Config::overridden_by`].
///
/// ```toml
/// source = "translations/en.json"
/// target = "src"
/// type = "both"
/// overwrite = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Translation JSON file.
    pub source: Option<PathBuf>,
    /// Directory receiving `Translations.elm` and `Translations/`.
    pub target: Option<PathBuf>,
    /// Generation mode.
    #[serde(rename = "type")]
    pub mode: Option<GenerationMode>,
    /// Replace previously generated files.
    pub overwrite: Option<bool>,
}

impl Config {
    /// Load a configuration file, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        debug!(path = %path.display(), "loaded configuration file");
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse configuration from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }

    /// Layer `overrides` on top of this configuration.
    pub fn overridden_by(self, overrides: Config) -> Config {
        Config {
            source: overrides.source.or(self.source),
            target: overrides.target.or(self.target),
            mode: overrides.mode.or(self.mode),
            overwrite: overrides.overwrite.or(self.overwrite),
        }
    }
}
