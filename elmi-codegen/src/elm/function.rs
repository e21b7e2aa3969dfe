//! Accessor functions for translation entries.

use std::collections::HashSet;

use elmi18n_model::{Entry, EntryKind};

use super::{
    CUSTOM_TR_FN, DELIMS, LIFT_ARG, T_FN, TR_FN, TRANSLATIONS_ARG, TRANSLATIONS_TYPE,
    string_literal,
};
use crate::builder::{CodeFragment, Renderable};

/// One generated Elm function: type signature, definition line and body.
///
/// ```text
/// greetName : Translations -> String -> String
/// greetName translations name =
///     tr translations Curly "greetings.greetName" [ ( "name", name ) ]
/// ```
///
/// The function's own `translations` and `nonPlaceholderLift` arguments are
/// renamed with trailing underscores when a placeholder or a sibling accessor
/// already uses that name, since Elm rejects shadowed bindings.
#[derive(Debug, Clone)]
pub struct TranslationFn<'a> {
    entry: &'a Entry,
    translations_arg: String,
    lift_arg: String,
}

impl<'a> TranslationFn<'a> {
    /// Accessor for `entry`, declared next to the other `module` entries.
    pub fn new(entry: &'a Entry, module: &[Entry]) -> Self {
        let taken: HashSet<&str> = module
            .iter()
            .map(|e| e.name.as_str())
            .chain(entry.parameters.iter().map(|p| p.name.as_str()))
            .collect();

        Self {
            entry,
            translations_arg: unused_name(TRANSLATIONS_ARG, &taken),
            lift_arg: unused_name(LIFT_ARG, &taken),
        }
    }

    /// The type annotation line.
    pub fn signature(&self) -> String {
        let mut types = vec![TRANSLATIONS_TYPE];
        let result = match self.entry.kind {
            EntryKind::Plain => {
                types.extend(self.entry.parameters.iter().map(|_| "String"));
                "String"
            }
            EntryKind::Custom => {
                types.push("(String -> a)");
                types.extend(self.entry.parameters.iter().map(|_| "a"));
                "List a"
            }
        };
        types.push(result);
        format!("{} : {}", self.entry.name, types.join(" -> "))
    }

    /// The definition line, ending in `=`.
    pub fn definition(&self) -> String {
        let mut args = vec![self.entry.name.as_str(), self.translations_arg.as_str()];
        if self.entry.kind == EntryKind::Custom {
            args.push(self.lift_arg.as_str());
        }
        args.extend(self.entry.parameters.iter().map(|p| p.name.as_str()));
        format!("{} =", args.join(" "))
    }

    /// The runtime call making up the function body.
    pub fn body(&self) -> String {
        let key = string_literal(&self.entry.raw_path);
        let translations = &self.translations_arg;
        match (self.entry.kind, self.entry.parameters.is_empty()) {
            (EntryKind::Plain, true) => format!("{T_FN} {translations} {key}"),
            (EntryKind::Plain, false) => format!(
                "{TR_FN} {translations} {DELIMS} {key} {}",
                self.replacements()
            ),
            (EntryKind::Custom, _) => format!(
                "{CUSTOM_TR_FN} {translations} {DELIMS} {} {key} {}",
                self.lift_arg,
                self.replacements()
            ),
        }
    }

    fn replacements(&self) -> String {
        if self.entry.parameters.is_empty() {
            return "[]".to_string();
        }
        let pairs: Vec<String> = self
            .entry
            .parameters
            .iter()
            .map(|p| format!("( {}, {} )", string_literal(&p.raw_name), p.name))
            .collect();
        format!("[ {} ]", pairs.join(", "))
    }
}

fn unused_name(base: &str, taken: &HashSet<&str>) -> String {
    let mut name = base.to_string();
    while taken.contains(name.as_str()) {
        name.push('_');
    }
    name
}

impl Renderable for TranslationFn<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line(self.signature()),
            CodeFragment::block(self.definition(), vec![CodeFragment::line(self.body())]),
        ]
    }
}
