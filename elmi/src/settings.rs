//! Effective settings: `elmi.toml` values layered under command-line flags.

use std::path::{Path, PathBuf};

use elmi18n_model::{Config, GenerationMode};
use eyre::{Result, eyre};

/// Fully resolved generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: PathBuf,
    pub target: PathBuf,
    pub mode: GenerationMode,
    pub overwrite: bool,
}

impl Settings {
    /// Merge `flags` over `file` and apply the built-in defaults.
    pub fn resolve(file: Config, flags: Config) -> Result<Self> {
        let config = file.overridden_by(flags);
        let source = config.source.ok_or_else(|| {
            eyre!("no translation file given: pass --source or set `source` in elmi.toml")
        })?;

        Ok(Self {
            source,
            target: config.target.unwrap_or_else(|| Path::new(".").to_path_buf()),
            mode: config.mode.unwrap_or_default(),
            overwrite: config.overwrite.unwrap_or(false),
        })
    }
}
