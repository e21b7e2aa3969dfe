//! Indented text buffer for generated Elm code.

use super::CodeFragment;

/// One indent level, as elm-format lays code out.
const INDENT: &str = "    ";

/// Accumulates lines of generated code at the current indent level.
///
/// Headers are written with the consuming methods, syntax nodes are replayed
/// through [`apply_fragment`](Self::apply_fragment).
///
/// ```
/// use elmi18n_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::new().line("module Translations exposing (..)").blank();
/// builder.apply_fragment(CodeFragment::block(
///     "hello translations =",
///     vec![CodeFragment::line("t translations \"hello\"")],
/// ));
///
/// assert_eq!(
///     builder.build(),
///     "module Translations exposing (..)\n\nhello translations =\n    t translations \"hello\"\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Replay a fragment into the buffer.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block { header, body } => {
                self.push_line(&header);
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level -= 1;
            }
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_blanks() {
        let code = CodeBuilder::new()
            .line("module Translations exposing (..)")
            .blank()
            .line("import I18Next")
            .build();

        assert_eq!(code, "module Translations exposing (..)\n\nimport I18Next\n");
    }

    #[test]
    fn test_block_indents_body_only() {
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(CodeFragment::block(
            "greet translations =",
            vec![CodeFragment::line("t translations \"greet\"")],
        ));
        builder.push_line("next = 1");

        assert_eq!(
            builder.build(),
            "greet translations =\n    t translations \"greet\"\nnext = 1\n"
        );
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(CodeFragment::block(
            "a =",
            vec![CodeFragment::block("let", vec![CodeFragment::line("b")])],
        ));

        assert_eq!(builder.build(), "a =\n    let\n        b\n");
    }

    #[test]
    fn test_mutable_blank() {
        let mut builder = CodeBuilder::new();
        builder.push_line("a = 1").push_blank().push_blank().push_line("b = 2");
        assert_eq!(builder.build(), "a = 1\n\n\nb = 2\n");
    }
}
