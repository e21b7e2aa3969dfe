//! ModuleFile abstraction for structured Elm file generation.

use super::Import;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A structured representation of one generated Elm module.
///
/// Renders the module header, the imports and then each body element,
/// with two blank lines between top-level declarations as elm-format
/// lays them out. The output always ends with exactly one newline.
#[derive(Debug, Clone)]
pub struct ModuleFile {
    name: String,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl ModuleFile {
    /// Create an empty module with the given dotted name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add multiple top-level declarations.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file.
    pub fn render(&self) -> String {
        let builder = CodeBuilder::new()
            .line(&format!("module {} exposing (..)", self.name))
            .blank();
        let mut builder = self
            .imports
            .iter()
            .fold(builder, |b, import| import.render(b));

        for fragments in &self.body {
            builder.push_blank().push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Decl(&'static str);

    impl Renderable for Decl {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line(self.0)]
        }
    }

    #[test]
    fn test_header_and_imports() {
        let file = ModuleFile::new("Translations.Greetings")
            .import(Import::new("I18Next").expose("t"))
            .add_all([Decl("x = 1")])
            .render();
        assert_eq!(
            file,
            "module Translations.Greetings exposing (..)\n\nimport I18Next exposing (t)\n\n\nx = 1\n"
        );
    }

    #[test]
    fn test_declarations_separated_by_two_blank_lines() {
        let file = ModuleFile::new("Translations")
            .import(Import::new("I18Next"))
            .add_all([Decl("a = 1"), Decl("b = 2")])
            .render();
        assert!(file.ends_with("a = 1\n\n\nb = 2\n"));
        assert!(!file.ends_with("\n\n"));
    }
}
