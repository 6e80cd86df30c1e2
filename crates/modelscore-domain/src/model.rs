use modelscore_types::UniqueId;
use serde_json::{Map, Value};
use thiserror::Error;

/// Raised when a raw manifest node cannot be turned into a [`Model`].
///
/// Only the required fields are strict; everything else is extracted
/// best-effort. Not recoverable locally: the caller must skip or abort the
/// affected model.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ManifestParseError {
    #[error("node is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("node field `{field}` must be {expected}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
    },
}

/// One column of a model, as described by the manifest node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub description: Option<String>,
}

impl Column {
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }
}

/// One data-transformation unit under lint evaluation.
///
/// Constructed once per manifest node via [`Model::from_node`] and never
/// mutated afterwards; rules receive a shared reference only.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub name: String,
    pub unique_id: Option<UniqueId>,
    pub description: Option<String>,
    pub package_name: Option<String>,
    pub original_file_path: Option<String>,
    pub tags: Vec<String>,
    pub meta: Map<String, Value>,
    pub config: Map<String, Value>,
    pub columns: Vec<Column>,
    pub raw_code: Option<String>,

    /// Raw dependent nodes (children that reference this model). Retained
    /// for lineage-aware rules; not interpreted here.
    pub dependents: Vec<Map<String, Value>>,
}

impl Model {
    /// Build a model from a raw manifest node plus the raw nodes that depend
    /// on it.
    ///
    /// `name` is required; a node without it (or with a non-string value) is
    /// rejected. All other fields are optional and typed permissively.
    pub fn from_node(
        node: &Map<String, Value>,
        dependents: &[Map<String, Value>],
    ) -> Result<Self, ManifestParseError> {
        let name = match node.get("name") {
            None => return Err(ManifestParseError::MissingField("name")),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(ManifestParseError::UnexpectedType {
                    field: "name",
                    expected: "a string",
                });
            }
        };

        Ok(Model {
            name,
            unique_id: str_field(node, "unique_id").map(UniqueId::new),
            description: str_field(node, "description"),
            package_name: str_field(node, "package_name"),
            original_file_path: str_field(node, "original_file_path"),
            tags: string_array(node, "tags"),
            meta: object_field(node, "meta"),
            config: object_field(node, "config"),
            columns: parse_columns(node),
            raw_code: str_field(node, "raw_code"),
            dependents: dependents.to_vec(),
        })
    }

    /// Stable identifier for reporting: the dotted unique id when present,
    /// the short name otherwise.
    pub fn identifier(&self) -> &str {
        match &self.unique_id {
            Some(id) => id.as_str(),
            None => &self.name,
        }
    }

    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }

    /// Owner recorded under `meta.owner`, if any.
    pub fn owner(&self) -> Option<&str> {
        self.meta.get("owner").and_then(Value::as_str)
    }
}

fn str_field(node: &Map<String, Value>, key: &str) -> Option<String> {
    node.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_array(node: &Map<String, Value>, key: &str) -> Vec<String> {
    let Some(items) = node.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn object_field(node: &Map<String, Value>, key: &str) -> Map<String, Value> {
    node.get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

fn parse_columns(node: &Map<String, Value>) -> Vec<Column> {
    let Some(cols) = node.get("columns").and_then(Value::as_object) else {
        return Vec::new();
    };
    cols.iter()
        .map(|(name, item)| Column {
            name: name.clone(),
            description: item
                .as_object()
                .and_then(|o| o.get("description"))
                .and_then(Value::as_str)
                .map(str::to_string),
        })
        .collect()
}
