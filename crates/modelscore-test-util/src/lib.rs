//! Shared test fixtures for the modelscore workspace.
//!
//! This crate is the explicit test-data provider: a sample manifest
//! document, the models built from it, and one example rule in every
//! declaration style. Fixtures are plain functions so each test owns its
//! data; nothing here is ambient global state.

#![forbid(unsafe_code)]

use modelscore_domain::model::Model;
use modelscore_domain::rule::{FnRule, Rule, rule};
use modelscore_types::RuleViolation;
use serde_json::{Map, Value, json};

/// Raw manifest document with two models and one child test node.
///
/// `model1` is deliberately under-documented (no description, no owner, an
/// undocumented column); `model2` is fully compliant.
pub fn raw_manifest() -> Value {
    json!({
        "nodes": {
            "model.package.model1": {
                "unique_id": "model.package.model1",
                "name": "model1",
                "resource_type": "model",
                "package_name": "package",
                "original_file_path": "models/model1.sql",
                "tags": [],
                "meta": {},
                "columns": {
                    "a": { "name": "a" }
                },
                "raw_code": "select 1 as a",
                "depends_on": { "nodes": [] }
            },
            "model.package.model2": {
                "unique_id": "model.package.model2",
                "name": "model2",
                "resource_type": "model",
                "package_name": "package",
                "original_file_path": "models/model2.sql",
                "description": "Second model.",
                "tags": ["core"],
                "meta": { "owner": "analytics" },
                "columns": {
                    "b": { "name": "b", "description": "Column b." }
                },
                "raw_code": "select 1 as b",
                "depends_on": { "nodes": [] }
            },
            "test.package.not_null_model1_a": {
                "unique_id": "test.package.not_null_model1_a",
                "name": "not_null_model1_a",
                "resource_type": "test",
                "depends_on": { "nodes": ["model.package.model1"] }
            }
        }
    })
}

fn node(manifest: &Value, key: &str) -> Map<String, Value> {
    manifest["nodes"][key]
        .as_object()
        .unwrap_or_else(|| panic!("fixture manifest must contain node `{key}`"))
        .clone()
}

pub fn model1() -> Model {
    let manifest = raw_manifest();
    let dependents = vec![node(&manifest, "test.package.not_null_model1_a")];
    Model::from_node(&node(&manifest, "model.package.model1"), &dependents)
        .expect("fixture node model1 must parse")
}

pub fn model2() -> Model {
    let manifest = raw_manifest();
    Model::from_node(&node(&manifest, "model.package.model2"), &[])
        .expect("fixture node model2 must parse")
}

fn flag_model1(model: &Model) -> Option<RuleViolation> {
    if model.name == "model1" {
        return Some(RuleViolation::new("Model1 is a violation."));
    }
    None
}

/// Example rule: bare function declaration with a documentation string.
pub fn example_rule() -> FnRule {
    rule("example_rule", flag_model1)
        .doc("Description of the rule.")
        .build()
        .expect("example rule must build")
}

/// Example rule with the default configuration spelled out explicitly.
/// Equivalent to [`example_rule`].
pub fn example_rule_default_config() -> FnRule {
    rule("example_rule", flag_model1)
        .doc("Description of the rule.")
        .severity(Default::default())
        .build()
        .expect("example rule must build")
}

/// Example rule with an explicit description overriding the doc text.
pub fn example_rule_explicit_description() -> FnRule {
    rule("example_rule", flag_model1)
        .doc("Doc text that the explicit description replaces.")
        .description("Description of the rule.")
        .build()
        .expect("example rule must build")
}

/// Example rule declared as a struct.
pub struct ExampleRule;

impl Rule for ExampleRule {
    fn name(&self) -> &str {
        "example_rule"
    }

    fn description(&self) -> &str {
        "Description of the rule."
    }

    fn evaluate(&self, model: &Model) -> Option<RuleViolation> {
        flag_model1(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_models_parse() {
        assert_eq!(model1().name, "model1");
        assert_eq!(model1().dependents.len(), 1);
        assert_eq!(model2().name, "model2");
        assert!(model2().has_description());
    }

    #[test]
    fn fixture_rules_share_one_description() {
        assert_eq!(example_rule().description(), "Description of the rule.");
        assert_eq!(
            example_rule_explicit_description().description(),
            "Description of the rule."
        );
        assert_eq!(ExampleRule.description(), "Description of the rule.");
    }
}
