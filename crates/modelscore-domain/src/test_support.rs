use crate::model::Model;
use crate::policy::{EffectiveConfig, RulePolicy};
use serde_json::{Value, json};
use std::collections::BTreeMap;

pub fn model_from_json(node: Value) -> Model {
    let node = node
        .as_object()
        .expect("test node literal must be a JSON object");
    Model::from_node(node, &[]).expect("test node must be a valid model node")
}

pub fn named_model(name: &str) -> Model {
    model_from_json(json!({
        "name": name,
        "unique_id": format!("model.package.{name}"),
    }))
}

pub fn config_with_rule(rule_name: &str, policy: RulePolicy) -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    rules.insert(rule_name.to_string(), policy);
    EffectiveConfig {
        max_violations: 200,
        rules,
    }
}
