//! Elm generator writing rendered units to disk.

use std::path::{Path, PathBuf};

use elmi18n_core::{File, WriteResult, remove_path};
use elmi18n_model::{Model, ROOT_MODULE};
use eyre::Result;
use tracing::{debug, info};

use crate::{
    language::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile},
    render,
};

/// Elm code generator for a translation model.
pub struct Generator<'a> {
    model: &'a Model,
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    /// Paths the generator owns below `output_dir`: the root module file and
    /// the directory holding every nested module.
    pub fn output_roots(output_dir: &Path) -> [PathBuf; 2] {
        [
            output_dir.join(format!("{ROOT_MODULE}.elm")),
            output_dir.join(ROOT_MODULE),
        ]
    }

    /// Generated outputs already present below `output_dir`.
    pub fn existing_outputs(output_dir: &Path) -> Vec<PathBuf> {
        Self::output_roots(output_dir)
            .into_iter()
            .filter(|path| path.exists())
            .collect()
    }
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "elm"
    }

    fn file_extension(&self) -> &'static str {
        "elm"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        render(self.model)
            .into_iter()
            .map(|(path, content)| PreviewFile {
                path: path.display().to_string(),
                content,
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for (path, content) in render(self.model) {
            let relative = path.display().to_string();
            let file = File::new(output_dir.join(&path), content);
            match file.write()? {
                WriteResult::Created => result.created.push(relative),
                WriteResult::Replaced => result.replaced.push(relative),
            }
            debug!(path = %file.path().display(), "wrote module");
        }

        info!(
            files = result.written(),
            dir = %output_dir.display(),
            "generated elm modules"
        );
        Ok(result)
    }

    fn clean(&self, output_dir: &Path) -> Result<CleanResult> {
        let mut result = CleanResult::default();

        for path in Self::output_roots(output_dir) {
            if remove_path(&path)? {
                debug!(path = %path.display(), "removed previous output");
                if let Ok(relative) = path.strip_prefix(output_dir) {
                    result.deleted.push(relative.display().to_string());
                }
            }
        }

        Ok(result)
    }
}
