use std::path::PathBuf;

use clap::Args;
use elmi18n_model::{CONFIG_FILE, Config, GenerationMode, TranslationFile};
use eyre::Result;
use tracing::info;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
    settings::Settings,
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to elmi.toml (optional, defaults to ./elmi.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Translation JSON file (overrides elmi.toml setting)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Directory receiving the generated modules (defaults to current directory)
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Which accessors to generate: default, custom or both
    #[arg(long = "type", value_name = "TYPE")]
    pub mode: Option<GenerationMode>,

    /// Replace previously generated modules
    #[arg(short, long)]
    pub overwrite: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file_config = Config::load(&self.config).unwrap_or_exit();
        let settings = Settings::resolve(file_config, self.flags())?;
        info!(source = %settings.source.display(), mode = %settings.mode, "generating");

        let translations = TranslationFile::open(&settings.source).unwrap_or_exit();
        let model = translations.model(settings.mode).unwrap_or_exit();

        let report = ops::generate(
            &translations,
            &model,
            GenerateOptions {
                target: &settings.target,
                overwrite: settings.overwrite,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn flags(&self) -> Config {
        Config {
            source: self.source.clone(),
            target: self.target.clone(),
            mode: self.mode,
            overwrite: self.overwrite.then_some(true),
        }
    }
}
