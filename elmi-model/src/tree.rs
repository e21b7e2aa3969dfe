//! The nested translation tree.

use indexmap::IndexMap;
use serde_json::Value;

use crate::StructureError;

/// A node of the translation document: a string value or a nested object.
///
/// Children keep the order in which their keys appear in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationTree {
    Leaf(String),
    Node(IndexMap<String, TranslationTree>),
}

impl TranslationTree {
    /// Create a leaf.
    pub fn leaf(value: impl Into<String>) -> Self {
        TranslationTree::Leaf(value.into())
    }

    /// Create a node from ordered `(key, child)` pairs.
    pub fn node<K: Into<String>>(children: impl IntoIterator<Item = (K, TranslationTree)>) -> Self {
        TranslationTree::Node(
            children
                .into_iter()
                .map(|(key, child)| (key.into(), child))
                .collect(),
        )
    }

    /// Convert a parsed JSON document.
    ///
    /// The root must be an object; below it only objects and strings are
    /// accepted.
    pub fn from_json(value: Value) -> Result<Self, StructureError> {
        match value {
            Value::Object(map) => Self::convert_object(map, None),
            other => Err(StructureError::RootNotObject {
                found: describe(&other),
            }),
        }
    }

    fn convert_object(
        map: serde_json::Map<String, Value>,
        raw_path: Option<&str>,
    ) -> Result<Self, StructureError> {
        let mut children = IndexMap::with_capacity(map.len());
        for (key, value) in map {
            let path = match raw_path {
                Some(parent) => format!("{parent}.{key}"),
                None => key.clone(),
            };
            let child = match value {
                Value::String(s) => TranslationTree::Leaf(s),
                Value::Object(nested) => Self::convert_object(nested, Some(&path))?,
                other => {
                    return Err(StructureError::UnexpectedValue {
                        raw_key: key,
                        raw_path: path,
                        found: describe(&other),
                    });
                }
            };
            children.insert(key, child);
        }
        Ok(TranslationTree::Node(children))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TranslationTree::Leaf(_))
    }

    /// Number of leaves beneath (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            TranslationTree::Leaf(_) => 1,
            TranslationTree::Node(children) => children.values().map(Self::leaf_count).sum(),
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_json_preserves_key_order() {
        let tree = TranslationTree::from_json(json!({
            "zebra": "Z",
            "apple": {"b": "B", "a": "A"},
            "mango": "M"
        }))
        .unwrap();

        let TranslationTree::Node(children) = &tree else {
            panic!("expected a node");
        };
        assert_eq!(
            children.keys().collect::<Vec<_>>(),
            ["zebra", "apple", "mango"]
        );
        let TranslationTree::Node(apple) = &children["apple"] else {
            panic!("expected a node");
        };
        assert_eq!(apple.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(tree.leaf_count(), 4);
    }

    #[test]
    fn test_from_json_matches_builder_helpers() {
        let parsed = TranslationTree::from_json(json!({
            "hello": "Hello",
            "greetings": {"goodDay": "Good day."}
        }))
        .unwrap();
        let built = TranslationTree::node([
            ("hello", TranslationTree::leaf("Hello")),
            (
                "greetings",
                TranslationTree::node([("goodDay", TranslationTree::leaf("Good day."))]),
            ),
        ]);
        assert_eq!(parsed, built);
        assert!(!parsed.is_leaf());
    }

    #[test]
    fn test_rejects_non_string_values() {
        let err = TranslationTree::from_json(json!({"greetings": {"count": 3}})).unwrap_err();
        assert_eq!(
            err,
            StructureError::UnexpectedValue {
                raw_key: "count".to_string(),
                raw_path: "greetings.count".to_string(),
                found: "a number",
            }
        );
        assert_eq!(
            err.to_string(),
            "'greetings.count' holds a number, expected a string or an object."
        );
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = TranslationTree::from_json(json!(["a"])).unwrap_err();
        assert_eq!(err, StructureError::RootNotObject { found: "an array" });
    }
}
