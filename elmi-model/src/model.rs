//! Validated translation model.

use std::{borrow::Borrow, fmt};

use indexmap::IndexMap;

use crate::GenerationMode;

/// Name of the top-level module every module path starts with.
pub const ROOT_MODULE: &str = "Translations";

/// Appended to custom accessor names when both kinds are generated.
pub const CUSTOM_SUFFIX: &str = "Custom";

/// Dot-joined path of sanitized, capitalized module segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModulePath(String);

impl ModulePath {
    /// The root module (`Translations`).
    pub fn root() -> Self {
        Self(ROOT_MODULE.to_string())
    }

    /// Path of a nested module one level below this one.
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}.{}", self.0, segment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ModulePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Output variant of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Simple interpolated lookup.
    Plain,
    /// Lookup with a caller-supplied lifting function for non-placeholder text.
    Custom,
}

/// A placeholder parameter extracted from a translation value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Sanitized camelCase identifier.
    pub name: String,
    /// Text between the placeholder markers, verbatim.
    pub raw_name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, raw_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_name: raw_name.into(),
        }
    }
}

/// One generated accessor for one translation and one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Sanitized identifier, unique within its module.
    pub name: String,
    /// Dot-joined raw keys from the root, used as the runtime lookup key.
    pub raw_path: String,
    pub kind: EntryKind,
    /// Placeholder parameters in first-occurrence order.
    pub parameters: Vec<Parameter>,
}

/// The full mapping from module path to its ordered entries.
///
/// Every module holds at least one entry, and entry names are pairwise
/// distinct within a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    mode: GenerationMode,
    modules: IndexMap<ModulePath, Vec<Entry>>,
}

impl Model {
    pub(crate) fn new(mode: GenerationMode, modules: IndexMap<ModulePath, Vec<Entry>>) -> Self {
        Self { mode, modules }
    }

    /// Mode the model was built with.
    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Modules in the order they received their first entry.
    pub fn modules(&self) -> impl Iterator<Item = (&ModulePath, &[Entry])> {
        self.modules
            .iter()
            .map(|(path, entries)| (path, entries.as_slice()))
    }

    /// Entries of a single module, looked up by its dotted path.
    pub fn module(&self, path: &str) -> Option<&[Entry]> {
        self.modules.get(path).map(Vec::as_slice)
    }

    /// Number of modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Number of entries across all modules.
    pub fn entry_count(&self) -> usize {
        self.modules.values().map(Vec::len).sum()
    }
}
