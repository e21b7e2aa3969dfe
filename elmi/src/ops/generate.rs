//! Generate operation - Elm code generation from a translation model.

use std::path::Path;

use elmi18n_codegen::{Generator, LanguageCodegen};
use elmi18n_model::{Model, TranslationFile};
use eyre::{Context, Result, bail};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving the generated modules.
    pub target: &'a Path,
    /// Whether previously generated modules may be replaced.
    pub overwrite: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Refuses to touch existing generated modules unless `overwrite` is set,
/// in which case they are removed before the new ones are written.
pub fn generate(
    file: &TranslationFile,
    model: &Model,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generator = Generator::new(model);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let existing = Generator::existing_outputs(opts.target);
        if !existing.is_empty() && !opts.overwrite {
            let listed: Vec<String> = existing.iter().map(|p| p.display().to_string()).collect();
            bail!(
                "generated files already exist: {}\nre-run with --overwrite to replace them",
                listed.join(", ")
            );
        }

        let cleaned = if opts.overwrite {
            generator
                .clean(opts.target)
                .wrap_err("Failed to remove previously generated files")?
                .deleted
        } else {
            Vec::new()
        };

        let written = generator
            .generate(opts.target)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            target: opts.target.to_path_buf(),
            cleaned,
            created: written.created,
            replaced: written.replaced,
        })
    };

    Ok(GenerateReport {
        source: file.path().to_path_buf(),
        mode: model.mode(),
        module_count: model.len(),
        function_count: model.entry_count(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use elmi18n_model::GenerationMode;

    use super::*;

    fn sample() -> (TranslationFile, Model) {
        let file = TranslationFile::from_str_with_filename(
            r#"{ "hello": "Hi {{name}}", "greetings": { "goodDay": "Good day" } }"#,
            "en.json",
        )
        .unwrap();
        let model = file.model(GenerationMode::Default).unwrap();
        (file, model)
    }

    fn opts(target: &Path, overwrite: bool, dry_run: bool) -> GenerateOptions<'_> {
        GenerateOptions {
            target,
            overwrite,
            dry_run,
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (file, model) = sample();
        let report = generate(&file, &model, opts(dir.path(), false, true)).unwrap();

        match report.result {
            GenerationResult::Preview(preview) => assert_eq!(preview.files.len(), 2),
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
        assert!(!dir.path().join("Translations.elm").exists());
    }

    #[test]
    fn test_refuses_to_overwrite_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let (file, model) = sample();
        generate(&file, &model, opts(dir.path(), false, false)).unwrap();

        let err = generate(&file, &model, opts(dir.path(), false, false)).unwrap_err();
        assert!(err.to_string().contains("--overwrite"));
    }

    #[test]
    fn test_overwrite_cleans_stale_modules() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("Translations").join("Stale.elm");
        std::fs::create_dir_all(stale.parent().unwrap()).unwrap();
        std::fs::write(&stale, "module Translations.Stale exposing (..)\n").unwrap();

        let (file, model) = sample();
        let report = generate(&file, &model, opts(dir.path(), true, false)).unwrap();

        match report.result {
            GenerationResult::Written(written) => {
                assert_eq!(written.cleaned, vec!["Translations"]);
                assert_eq!(written.created.len(), 2);
            }
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
        assert!(!stale.exists());
        assert!(dir.path().join("Translations").join("Greetings.elm").exists());
        assert_eq!(report.module_count, 2);
        assert_eq!(report.function_count, 2);
    }
}
