//! Placeholder extraction from translation values.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::{
    Parameter, StructureError,
    sanitize::{self, SanitizeError},
};

/// `{{name}}` markers, matched lazily so adjacent placeholders stay separate.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").expect("placeholder pattern is valid"));

/// Extracts the placeholder parameters of a translation value.
///
/// Parameters come back in first-occurrence order. Placeholders whose names
/// sanitize to an identifier already seen are dropped, keeping the first raw
/// form. Blank placeholders such as `{{ }}` are ignored.
///
/// ```
/// use elmi18n_model::{Parameter, extract_parameters};
///
/// let params = extract_parameters("Hi {{name}}, {{ name }} and {{}}", "greeting").unwrap();
/// assert_eq!(params, [Parameter::new("name", "name")]);
/// ```
pub fn extract_parameters(value: &str, raw_path: &str) -> Result<Vec<Parameter>, StructureError> {
    let mut parameters: Vec<Parameter> = Vec::new();
    let mut seen = HashSet::new();

    for captures in PLACEHOLDER.captures_iter(value) {
        let raw_name = &captures[1];
        let name = match sanitize::identifier(raw_name) {
            Ok(name) => name,
            Err(SanitizeError::Blank) => continue,
            Err(SanitizeError::Invalid) => {
                return Err(StructureError::InvalidParameter {
                    raw_name: raw_name.to_string(),
                    raw_path: raw_path.to_string(),
                });
            }
        };

        if seen.insert(name.clone()) {
            parameters.push(Parameter::new(name, raw_name));
        }
    }

    Ok(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(value: &str) -> Vec<(String, String)> {
        extract_parameters(value, "test")
            .unwrap()
            .into_iter()
            .map(|p| (p.name, p.raw_name))
            .collect()
    }

    fn pair(name: &str, raw: &str) -> (String, String) {
        (name.to_string(), raw.to_string())
    }

    #[test]
    fn test_no_placeholders() {
        assert!(names("Hello").is_empty());
        assert!(names("").is_empty());
        assert!(names("{single} braces { {spaced} }").is_empty());
    }

    #[test]
    fn test_first_occurrence_order() {
        assert_eq!(
            names("Hello {{firstname}} {{middlename}} {{lastname}}!"),
            [
                pair("firstname", "firstname"),
                pair("middlename", "middlename"),
                pair("lastname", "lastname"),
            ]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(
            names("test {{param1}} {{param2}} {{param1}} this"),
            [pair("param1", "param1"), pair("param2", "param2")]
        );
    }

    #[test]
    fn test_duplicates_collapse_after_sanitizing() {
        assert_eq!(
            names("{{ Name }} then {{name}} then {{NAME}}"),
            [pair("name", " Name "), pair("nAME", "NAME")]
        );
    }

    #[test]
    fn test_raw_name_is_kept_verbatim() {
        assert_eq!(names("some {{  p1  }} value"), [pair("p1", "  p1  ")]);
        assert_eq!(
            names("some {{P1-abc_def ghi}} value"),
            [pair("p1AbcDefGhi", "P1-abc_def ghi")]
        );
    }

    #[test]
    fn test_blank_placeholders_are_ignored() {
        assert!(names("some {{}} value {{  }}").is_empty());
        assert!(names("some {{   \t   }} value").is_empty());
    }

    #[test]
    fn test_leading_digit() {
        assert_eq!(
            names("some {{56}} {{78}} value"),
            [pair("t56", "56"), pair("t78", "78")]
        );
    }

    #[test]
    fn test_invalid_placeholder() {
        let err = extract_parameters("some {{!^&£$}} value", "greetings.test").unwrap_err();
        assert_eq!(
            err,
            StructureError::InvalidParameter {
                raw_name: "!^&£$".to_string(),
                raw_path: "greetings.test".to_string(),
            }
        );
        assert_eq!(err.to_string(), "'!^&£$' is not a valid parameter name.");
    }
}
