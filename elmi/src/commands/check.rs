use std::path::PathBuf;

use clap::Args;
use elmi18n_model::{CONFIG_FILE, Config, GenerationMode, TranslationFile};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    settings::Settings,
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to elmi.toml (optional, defaults to ./elmi.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Translation JSON file (overrides elmi.toml setting)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Which accessors to check: default, custom or both
    #[arg(long = "type", value_name = "TYPE")]
    pub mode: Option<GenerationMode>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file_config = Config::load(&self.config).unwrap_or_exit();
        let flags = Config {
            source: self.source.clone(),
            mode: self.mode,
            ..Config::default()
        };
        let settings = Settings::resolve(file_config, flags)?;

        let translations = TranslationFile::open(&settings.source).unwrap_or_exit();
        let model = translations.model(settings.mode).unwrap_or_exit();

        ops::check(&translations, &model).render(&mut TerminalOutput::new());
        Ok(())
    }
}
