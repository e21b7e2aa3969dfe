//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific code generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "elm")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "elm")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;

    /// Remove previously generated files from the output directory.
    fn clean(&self, output_dir: &Path) -> Result<CleanResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that did not exist before
    pub created: Vec<String>,
    /// Files whose previous content was replaced
    pub replaced: Vec<String>,
}

impl GenerateResult {
    /// Total number of files written.
    pub fn written(&self) -> usize {
        self.created.len() + self.replaced.len()
    }
}

/// Result of cleaning previously generated files
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Files and directories that were deleted
    pub deleted: Vec<String>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
