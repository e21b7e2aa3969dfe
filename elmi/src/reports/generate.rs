//! Generate command report data structures.

use std::path::PathBuf;

use elmi18n_model::GenerationMode;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path to the translation file.
    pub source: PathBuf,
    /// Mode the modules were generated for.
    pub mode: GenerationMode,
    /// Number of generated modules.
    pub module_count: usize,
    /// Number of generated functions across all modules.
    pub function_count: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub target: PathBuf,
    /// Previous outputs removed before writing.
    pub cleaned: Vec<String>,
    /// Files that did not exist before.
    pub created: Vec<String>,
    /// Files whose content was replaced.
    pub replaced: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Source", &self.source.display().to_string());
        out.key_value("Type", self.mode.as_str());
        out.newline();

        if !written.cleaned.is_empty() {
            out.section("Removed");
            for path in &written.cleaned {
                out.removed_item(path);
            }
            out.newline();
        }

        out.section(&format!(
            "Generated {} module{} ({} functions) in {}",
            self.module_count,
            if self.module_count == 1 { "" } else { "s" },
            self.function_count,
            written.target.display()
        ));
        for path in &written.created {
            out.added_item(path);
        }
        for path in &written.replaced {
            out.list_item(&format!("{} (replaced)", path));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
