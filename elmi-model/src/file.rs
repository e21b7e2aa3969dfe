use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, GenerationMode, Model, Result, TranslationTree, build_model};

/// A translation JSON file with both raw content and parsed tree.
#[derive(Debug)]
pub struct TranslationFile {
    path: PathBuf,
    content: String,
    tree: TranslationTree,
}

impl TranslationFile {
    /// Open and parse a translation file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read translation file");

        let filename = path.display().to_string();
        let tree = parse_tree(&content, &filename)?;

        Ok(Self {
            path,
            content,
            tree,
        })
    }

    /// Parse translations from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let tree = parse_tree(content, filename)?;
        Ok(Self {
            path: PathBuf::from(filename),
            content: content.to_string(),
            tree,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed tree.
    pub fn tree(&self) -> &TranslationTree {
        &self.tree
    }

    /// Build the model, reporting structural problems against this file's source.
    pub fn model(&self, mode: GenerationMode) -> Result<Model> {
        build_model(&self.tree, mode)
            .map_err(|e| Error::structure(e, &self.content, &self.path.display().to_string()))
    }
}

fn parse_tree(content: &str, filename: &str) -> Result<TranslationTree> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    TranslationTree::from_json(value).map_err(|e| Error::structure(e, content, filename))
}
