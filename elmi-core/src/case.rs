//! Word splitting and case joining for generated identifiers.

/// Split raw text into identifier words.
///
/// The text is trimmed, split on every run of whitespace, `-` or `_`, and each
/// word keeps only its ASCII letters and digits. Words left empty are dropped.
///
/// ```
/// use elmi18n_core::split_words;
///
/// assert_eq!(split_words("  test-some other_value "), ["test", "some", "other", "value"]);
/// assert_eq!(split_words("!Abc$.-_%:Def&"), ["Abc", "Def"]);
/// assert!(split_words(" !^&$ ").is_empty());
/// ```
pub fn split_words(s: &str) -> Vec<String> {
    s.trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Uppercase the first character, leaving the rest untouched (e.g., "hElLo" -> "HElLo")
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character, leaving the rest untouched (e.g., "TestValue" -> "testValue")
pub fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "nested module" -> "NestedModule")
///
/// A result starting with a digit is prefixed with `T` so it stays a legal
/// type-level identifier.
pub fn to_pascal_case(s: &str) -> String {
    let joined: String = split_words(s).iter().map(|w| capitalize(w)).collect();
    with_leading_letter(joined, 'T')
}

/// Convert a string to camelCase (e.g., "test-some other_value" -> "testSomeOtherValue")
///
/// A result starting with a digit is prefixed with `t`.
pub fn to_camel_case(s: &str) -> String {
    let joined: String = split_words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { decapitalize(w) } else { capitalize(w) })
        .collect();
    with_leading_letter(joined, 't')
}

fn with_leading_letter(ident: String, sentinel: char) -> String {
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{sentinel}{ident}")
    } else {
        ident
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("hello"), ["hello"]);
        assert_eq!(split_words("  Nested  Sub    Module  "), ["Nested", "Sub", "Module"]);
        assert_eq!(split_words("dashed-nested-module"), ["dashed", "nested", "module"]);
        assert_eq!(split_words("a\t\nb"), ["a", "b"]);
        assert_eq!(split_words("-_-"), Vec::<String>::new());
        assert_eq!(split_words(""), Vec::<String>::new());
    }

    #[test]
    fn test_dot_is_not_a_separator() {
        assert_eq!(split_words("a.b"), ["ab"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("hElLo"), "HElLo");
        assert_eq!(capitalize("1a"), "1a");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("TestSomeValue"), "testSomeValue");
        assert_eq!(decapitalize("P1Abc"), "p1Abc");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("nested"), "Nested");
        assert_eq!(to_pascal_case("sub nested module"), "SubNestedModule");
        assert_eq!(to_pascal_case("underscore_nested_module"), "UnderscoreNestedModule");
        assert_eq!(to_pascal_case("!Abc$.-_%:Def&"), "AbcDef");
        assert_eq!(to_pascal_case("12"), "T12");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("TestSomeValue"), "testSomeValue");
        assert_eq!(to_camel_case("test-yet another_value"), "testYetAnotherValue");
        assert_eq!(to_camel_case("P1-abc_def ghi"), "p1AbcDefGhi");
        assert_eq!(to_camel_case("param  1  a"), "param1A");
        assert_eq!(to_camel_case("34"), "t34");
        assert_eq!(to_camel_case("1 a"), "t1A");
    }

    #[test]
    fn test_casing_is_idempotent() {
        for ident in ["testSomeValue", "t34", "p1AbcDefGhi"] {
            assert_eq!(to_camel_case(ident), ident);
        }
        for ident in ["NestedSubModule", "T12", "AbcDef"] {
            assert_eq!(to_pascal_case(ident), ident);
        }
    }
}
