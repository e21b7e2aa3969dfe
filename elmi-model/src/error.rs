use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for translation file operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A structural problem in the translation tree.
///
/// Raised by the model builder at the first invalid construct met in
/// traversal order. Every variant carries the raw text as written in the
/// document so callers can report or locate it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("a module with no ID was found.")]
    BlankModule { raw_key: String, parent: String },

    #[error("'{raw_key}' is not a valid module name.")]
    InvalidModule { raw_key: String, parent: String },

    #[error("a function with no ID was found.")]
    BlankFunction { raw_key: String, module: String },

    #[error("'{raw_key}' is not a valid function name.")]
    InvalidFunction { raw_key: String, module: String },

    #[error("'{raw_name}' is not a valid parameter name.")]
    InvalidParameter { raw_name: String, raw_path: String },

    #[error("duplicate module found: '{module}'.")]
    DuplicateModule { raw_key: String, module: String },

    #[error("duplicate function found: '{name}' (in module '{module}').")]
    DuplicateFunction {
        raw_key: String,
        name: String,
        module: String,
    },

    #[error("'{raw_path}' holds {found}, expected a string or an object.")]
    UnexpectedValue {
        raw_key: String,
        raw_path: String,
        found: &'static str,
    },

    #[error("the document root must be an object, found {found}.")]
    RootNotObject { found: &'static str },
}

impl StructureError {
    /// The offending text as it appears in the document.
    pub fn raw_text(&self) -> &str {
        match self {
            StructureError::BlankModule { raw_key, .. }
            | StructureError::InvalidModule { raw_key, .. }
            | StructureError::BlankFunction { raw_key, .. }
            | StructureError::InvalidFunction { raw_key, .. }
            | StructureError::DuplicateModule { raw_key, .. }
            | StructureError::DuplicateFunction { raw_key, .. }
            | StructureError::UnexpectedValue { raw_key, .. } => raw_key,
            StructureError::InvalidParameter { raw_name, .. } => raw_name,
            StructureError::RootNotObject { .. } => "",
        }
    }

    /// Locate the offending text in the JSON source.
    ///
    /// Keys are searched as quoted JSON strings, placeholders with their
    /// surrounding markers. The first match wins.
    pub fn find_span(&self, src: &str) -> Option<SourceSpan> {
        let needle = match self {
            StructureError::RootNotObject { .. } => return None,
            StructureError::InvalidParameter { raw_name, .. } => {
                format!("{{{{{}}}}}", escape_json(raw_name))
            }
            other => format!("\"{}\"", escape_json(other.raw_text())),
        };
        src.find(&needle)
            .map(|offset| SourceSpan::from((offset, needle.len())))
    }

    fn label(&self) -> &'static str {
        match self {
            StructureError::BlankModule { .. } | StructureError::BlankFunction { .. } => {
                "blank key"
            }
            StructureError::InvalidModule { .. }
            | StructureError::InvalidFunction { .. }
            | StructureError::InvalidParameter { .. } => "no letters or digits to build a name from",
            StructureError::DuplicateModule { .. } | StructureError::DuplicateFunction { .. } => {
                "collides with an earlier name"
            }
            StructureError::UnexpectedValue { .. } | StructureError::RootNotObject { .. } => {
                "unsupported value"
            }
        }
    }
}

/// Body of a JSON string literal for `raw`, without the quotes.
fn escape_json(raw: &str) -> String {
    let quoted = serde_json::to_string(raw).unwrap_or_else(|_| format!("\"{raw}\""));
    quoted[1..quoted.len() - 1].to_string()
}

/// Byte offset of a 1-based line/column position.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src.split_inclusive('\n').take(line - 1).map(str::len).sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(elmi::io), help("check the --source path or the `source` key in elmi.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse translation file")]
    #[diagnostic(code(elmi::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("The supplied JSON file has a problem in it: {error}")]
    #[diagnostic(code(elmi::structure_error))]
    Structure {
        #[source_code]
        src: NamedSource<String>,
        #[label("{hint}")]
        span: Option<SourceSpan>,
        hint: &'static str,
        error: StructureError,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(code(elmi::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid configuration here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(|o| SourceSpan::from((o, 0)));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a structure error with source context
    pub fn structure(error: StructureError, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Structure {
            src: NamedSource::new(filename, src.to_string()),
            span: error.find_span(src),
            hint: error.label(),
            error,
        })
    }

    /// Create a configuration error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// The structural error, if this is one.
    pub fn as_structure(&self) -> Option<&StructureError> {
        match self {
            Error::Structure { error, .. } => Some(error),
            _ => None,
        }
    }
}
