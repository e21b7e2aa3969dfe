//! Check operation - translation file validation.

use elmi18n_model::{Model, TranslationFile};

use crate::reports::{CheckReport, ModuleSummary};

/// Execute the check operation.
///
/// The model has already been built, so the file is structurally valid;
/// this collects what would be generated from it.
pub fn check(file: &TranslationFile, model: &Model) -> CheckReport {
    let modules = model
        .modules()
        .map(|(path, entries)| ModuleSummary {
            name: path.to_string(),
            functions: entries.iter().map(|e| e.name.clone()).collect(),
        })
        .collect();

    CheckReport {
        source: file.path().to_path_buf(),
        mode: model.mode(),
        modules,
    }
}

#[cfg(test)]
mod tests {
    use elmi18n_model::GenerationMode;

    use super::*;

    #[test]
    fn test_check_summarizes_modules() {
        let file = TranslationFile::from_str_with_filename(
            r#"{ "hello": "Hi", "greetings": { "goodDay": "Good day" } }"#,
            "en.json",
        )
        .unwrap();
        let model = file.model(GenerationMode::Both).unwrap();
        let report = check(&file, &model);

        assert_eq!(report.source.to_str(), Some("en.json"));
        assert_eq!(report.mode, GenerationMode::Both);
        assert_eq!(report.function_count(), 4);
        assert_eq!(report.modules[0].name, "Translations");
        assert_eq!(report.modules[0].functions, vec!["hello", "helloCustom"]);
        assert_eq!(report.modules[1].name, "Translations.Greetings");
    }
}
