//! Model builder: turns a translation tree into a validated [`Model`].

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    CUSTOM_SUFFIX, Entry, EntryKind, GenerationMode, Model, ModulePath, StructureError,
    TranslationTree, extract_parameters,
    sanitize::{self, SanitizeError},
};

/// Build the model for a translation tree.
///
/// The tree is walked depth first in document key order. The first invalid
/// construct aborts the build; no partial model is returned.
pub fn build_model(tree: &TranslationTree, mode: GenerationMode) -> Result<Model, StructureError> {
    let TranslationTree::Node(children) = tree else {
        return Err(StructureError::RootNotObject { found: "a string" });
    };

    let mut builder = ModelBuilder {
        mode,
        modules: IndexMap::new(),
        names: HashMap::new(),
    };
    builder.visit(children, None, &ModulePath::root())?;

    debug!(
        modules = builder.modules.len(),
        mode = %mode,
        "built translation model"
    );
    Ok(Model::new(mode, builder.modules))
}

/// Mutable state scoped to a single [`build_model`] call.
struct ModelBuilder {
    mode: GenerationMode,
    modules: IndexMap<ModulePath, Vec<Entry>>,
    /// Entry names already taken in each module.
    names: HashMap<ModulePath, HashSet<String>>,
}

impl ModelBuilder {
    fn visit(
        &mut self,
        children: &IndexMap<String, TranslationTree>,
        raw_path: Option<&str>,
        module: &ModulePath,
    ) -> Result<(), StructureError> {
        let mut sibling_modules = HashSet::new();

        for (key, child) in children {
            let path = match raw_path {
                Some(parent) => format!("{parent}.{key}"),
                None => key.clone(),
            };

            match child {
                TranslationTree::Node(grandchildren) => {
                    let segment = sanitize::module_segment(key).map_err(|e| match e {
                        SanitizeError::Blank => StructureError::BlankModule {
                            raw_key: key.clone(),
                            parent: module.to_string(),
                        },
                        SanitizeError::Invalid => StructureError::InvalidModule {
                            raw_key: key.clone(),
                            parent: module.to_string(),
                        },
                    })?;
                    let nested = module.child(&segment);
                    if !sibling_modules.insert(segment) {
                        return Err(StructureError::DuplicateModule {
                            raw_key: key.clone(),
                            module: nested.to_string(),
                        });
                    }
                    self.visit(grandchildren, Some(&path), &nested)?;
                }
                TranslationTree::Leaf(value) => self.add_leaf(key, value, path, module)?,
            }
        }

        Ok(())
    }

    fn add_leaf(
        &mut self,
        key: &str,
        value: &str,
        raw_path: String,
        module: &ModulePath,
    ) -> Result<(), StructureError> {
        let name = sanitize::identifier(key).map_err(|e| match e {
            SanitizeError::Blank => StructureError::BlankFunction {
                raw_key: key.to_string(),
                module: module.to_string(),
            },
            SanitizeError::Invalid => StructureError::InvalidFunction {
                raw_key: key.to_string(),
                module: module.to_string(),
            },
        })?;
        let parameters = extract_parameters(value, &raw_path)?;

        if !self.modules.contains_key(module) {
            debug!(module = %module, "materializing module");
        }
        let entries = self.modules.entry(module.clone()).or_default();
        let names = self.names.entry(module.clone()).or_default();

        for &kind in self.mode.kinds() {
            let entry_name = match (kind, self.mode) {
                (EntryKind::Custom, GenerationMode::Both) => format!("{name}{CUSTOM_SUFFIX}"),
                _ => name.clone(),
            };

            if !names.insert(entry_name.clone()) {
                return Err(StructureError::DuplicateFunction {
                    raw_key: key.to_string(),
                    name: entry_name,
                    module: module.to_string(),
                });
            }

            trace!(
                module = %module,
                name = %entry_name,
                raw_path = %raw_path,
                ?kind,
                parameters = parameters.len(),
                "adding entry"
            );
            entries.push(Entry {
                name: entry_name,
                raw_path: raw_path.clone(),
                kind,
                parameters: parameters.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: &str) -> TranslationTree {
        TranslationTree::leaf(value)
    }

    #[test]
    fn test_leaf_root_is_rejected() {
        assert_eq!(
            build_model(&leaf("Hello"), GenerationMode::Default),
            Err(StructureError::RootNotObject { found: "a string" })
        );
    }

    #[test]
    fn test_empty_tree_builds_empty_model() {
        let model = build_model(
            &TranslationTree::node(Vec::<(String, TranslationTree)>::new()),
            GenerationMode::Both,
        )
        .unwrap();
        assert!(model.is_empty());
        assert_eq!(model.mode(), GenerationMode::Both);
    }

    #[test]
    fn test_module_without_leaves_is_omitted() {
        let tree = TranslationTree::node([
            (
                "onlyModules",
                TranslationTree::node([(
                    "greetings",
                    TranslationTree::node([("goodDay", leaf("Good day."))]),
                )]),
            ),
            ("empty", TranslationTree::node(Vec::<(String, TranslationTree)>::new())),
        ]);
        let model = build_model(&tree, GenerationMode::Default).unwrap();

        let paths: Vec<_> = model.modules().map(|(path, _)| path.as_str()).collect();
        assert_eq!(paths, ["Translations.OnlyModules.Greetings"]);
    }

    #[test]
    fn test_duplicate_module_detected_even_if_first_is_empty() {
        let tree = TranslationTree::node([
            ("^Test", TranslationTree::node(Vec::<(String, TranslationTree)>::new())),
            ("!Test", TranslationTree::node([("test", leaf(""))])),
        ]);
        assert_eq!(
            build_model(&tree, GenerationMode::Default),
            Err(StructureError::DuplicateModule {
                raw_key: "!Test".to_string(),
                module: "Translations.Test".to_string(),
            })
        );
    }

    #[test]
    fn test_custom_only_keeps_plain_name() {
        let tree = TranslationTree::node([("hello", leaf("Hello {{name}}"))]);
        let model = build_model(&tree, GenerationMode::Custom).unwrap();
        let entries = model.module("Translations").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "hello");
        assert_eq!(entries[0].kind, EntryKind::Custom);
        assert_eq!(entries[0].parameters.len(), 1);
    }
}
