use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// A generated file waiting to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, creating parent directories as needed
    pub fn write(&self) -> Result<WriteResult> {
        let result = if self.exists() {
            WriteResult::Replaced
        } else {
            WriteResult::Created
        };
        write_file(&self.path, &self.content)?;
        Ok(result)
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist before
    Created,
    /// An existing file was overwritten
    Replaced,
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Remove a file or a directory tree.
///
/// Returns `false` when nothing existed at `path`.
pub fn remove_path(path: &Path) -> Result<bool> {
    if path.is_dir() {
        std::fs::remove_dir_all(path)
            .wrap_err_with(|| format!("failed to remove directory '{}'", path.display()))?;
        Ok(true)
    } else if path.exists() {
        std::fs::remove_file(path)
            .wrap_err_with(|| format!("failed to remove '{}'", path.display()))?;
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Translations").join("Greetings.elm");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_reports_created() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Translations.elm");

        let result = File::new(&path, "module Translations exposing (..)\n")
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Created);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "module Translations exposing (..)\n"
        );
    }

    #[test]
    fn test_file_write_reports_replaced() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Translations.elm");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Replaced);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.elm");

        let file = File::new(&path, "content");
        assert!(!file.exists());

        fs::write(&path, "content").unwrap();
        assert!(file.exists());
    }

    #[test]
    fn test_remove_path() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("Translations");
        fs::create_dir_all(dir.join("Greetings")).unwrap();
        fs::write(dir.join("Greetings.elm"), "x").unwrap();
        let file = temp.path().join("Translations.elm");
        fs::write(&file, "x").unwrap();

        assert!(remove_path(&dir).unwrap());
        assert!(remove_path(&file).unwrap());
        assert!(!dir.exists());
        assert!(!file.exists());
        assert!(!remove_path(&file).unwrap());
    }
}
