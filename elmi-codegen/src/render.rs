//! Rendering a [`Model`] into Elm source units.

use std::path::PathBuf;

use elmi18n_model::{Entry, GenerationMode, Model, ModulePath};
use indexmap::IndexMap;
use tracing::debug;

use crate::elm::{
    CUSTOM_TR_FN, DELIMS, Import, ModuleFile, RUNTIME_MODULE, T_FN, TR_FN, TRANSLATIONS_TYPE,
    TranslationFn,
};

/// Render every module of `model`, keyed by its relative output path.
///
/// Units follow the model's module order; modules without entries never
/// appear in a model and so never produce a file.
pub fn render(model: &Model) -> IndexMap<PathBuf, String> {
    model
        .modules()
        .map(|(module, entries)| {
            let path = unit_path(module);
            debug!(module = %module, path = %path.display(), entries = entries.len(), "rendering module");
            (path, render_module(module, entries, model.mode()))
        })
        .collect()
}

/// Render a single module.
pub fn render_module(module: &ModulePath, entries: &[Entry], mode: GenerationMode) -> String {
    ModuleFile::new(module.as_str())
        .import(runtime_import(mode))
        .add_all(entries.iter().map(|entry| TranslationFn::new(entry, entries)))
        .render()
}

/// Relative file path of a module: `Translations.Greetings` lives in
/// `Translations/Greetings.elm`.
pub fn unit_path(module: &ModulePath) -> PathBuf {
    let mut path: PathBuf = module.segments().collect();
    path.set_extension("elm");
    path
}

fn runtime_import(mode: GenerationMode) -> Import {
    let mut import = Import::new(RUNTIME_MODULE).expose(TRANSLATIONS_TYPE);
    if mode.has_plain() {
        import = import.expose_all([T_FN, TR_FN]);
    }
    if mode.has_custom() {
        import = import.expose(CUSTOM_TR_FN);
    }
    import.expose(DELIMS)
}
