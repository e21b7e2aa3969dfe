//! Elm import builder.

use crate::builder::CodeBuilder;

/// Builder for Elm import statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    module: String,
    exposing: Vec<String>,
}

impl Import {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            exposing: Vec::new(),
        }
    }

    /// Expose a name from the imported module.
    pub fn expose(mut self, name: impl Into<String>) -> Self {
        self.exposing.push(name.into());
        self
    }

    /// Expose several names, in order.
    pub fn expose_all<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.exposing.extend(names.into_iter().map(Into::into));
        self
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        if self.exposing.is_empty() {
            builder.line(&format!("import {}", self.module))
        } else {
            builder.line(&format!(
                "import {} exposing ({})",
                self.module,
                self.exposing.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(import: &Import) -> String {
        import.render(CodeBuilder::new()).build()
    }

    #[test]
    fn test_plain_import() {
        assert_eq!(build(&Import::new("I18Next")), "import I18Next\n");
    }

    #[test]
    fn test_exposing_import() {
        let i = Import::new("I18Next")
            .expose("Translations")
            .expose_all(["t", "tr"])
            .expose("Curly");
        assert_eq!(build(&i), "import I18Next exposing (Translations, t, tr, Curly)\n");
    }
}
