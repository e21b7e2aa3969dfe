//! Check command report data structures.

use std::path::PathBuf;

use elmi18n_model::GenerationMode;

use super::output::{Output, Report};

/// Report data from translation file validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the translation file.
    pub source: PathBuf,
    /// Mode the model was built for.
    pub mode: GenerationMode,
    /// Modules that would be generated, in output order.
    pub modules: Vec<ModuleSummary>,
}

/// One module and the functions it would expose.
#[derive(Debug)]
pub struct ModuleSummary {
    pub name: String,
    pub functions: Vec<String>,
}

impl CheckReport {
    /// Total number of generated functions.
    pub fn function_count(&self) -> usize {
        self.modules.iter().map(|m| m.functions.len()).sum()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.source.display()));
        out.newline();

        out.key_value("Type", self.mode.as_str());
        out.section(&format!(
            "Modules ({}, {} function{})",
            self.modules.len(),
            self.function_count(),
            if self.function_count() == 1 { "" } else { "s" }
        ));
        for module in &self.modules {
            out.list_item(&format!("{} ({})", module.name, module.functions.len()));
        }
    }
}
