use anyhow::Context;
use modelscore_domain::model::Model;
use serde_json::{Map, Value};

/// Parse a manifest document from JSON text.
pub fn parse_manifest_json(text: &str) -> anyhow::Result<Vec<Model>> {
    let value: Value = serde_json::from_str(text).context("parse manifest JSON")?;
    parse_manifest(&value)
}

/// Build models from the `nodes` object of a parsed manifest document.
///
/// Only nodes with `resource_type == "model"` become models. A node's
/// dependents are the other nodes whose `depends_on.nodes` lists it.
/// Output is sorted by model name for determinism.
pub fn parse_manifest(manifest: &Value) -> anyhow::Result<Vec<Model>> {
    let nodes = manifest
        .get("nodes")
        .and_then(Value::as_object)
        .context("manifest has no `nodes` object")?;

    let mut models = Vec::new();
    for (key, raw) in nodes {
        let Some(node) = raw.as_object() else {
            continue;
        };
        if resource_type(node) != Some("model") {
            continue;
        }
        let dependents = dependents_of(nodes, key);
        let model = Model::from_node(node, &dependents)
            .with_context(|| format!("build model from node `{key}`"))?;
        models.push(model);
    }

    models.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(models)
}

fn resource_type(node: &Map<String, Value>) -> Option<&str> {
    node.get("resource_type").and_then(Value::as_str)
}

/// Nodes that declare a dependency on `unique_id`, in document order.
fn dependents_of(nodes: &Map<String, Value>, unique_id: &str) -> Vec<Map<String, Value>> {
    nodes
        .iter()
        .filter(|(key, _)| key.as_str() != unique_id)
        .filter_map(|(_, raw)| raw.as_object())
        .filter(|node| depends_on(node).any(|dep| dep == unique_id))
        .cloned()
        .collect()
}

fn depends_on(node: &Map<String, Value>) -> impl Iterator<Item = &str> {
    node.get("depends_on")
        .and_then(Value::as_object)
        .and_then(|d| d.get("nodes"))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}
