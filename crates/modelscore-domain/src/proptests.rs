//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Model construction from arbitrary nodes
//! - Engine determinism and result ordering
//! - Policy and truncation behavior

use crate::engine::evaluate;
use crate::model::Model;
use crate::policy::{EffectiveConfig, RulePolicy};
use crate::registry::RuleRegistry;
use crate::report::RuleOutcome;
use crate::rule::{FnRule, rule};
use modelscore_types::{RuleViolation, Severity};
use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;

/// Strategy for valid model names.
fn arb_model_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,24}").unwrap()
}

/// Strategy for Severity values.
fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
        Just(Severity::Critical),
    ]
}

fn flagging_rule(name: &str, severity: Severity) -> FnRule {
    rule(name, |model: &Model| {
        Some(RuleViolation::new(format!(
            "Model {} is flagged.",
            model.name
        )))
    })
    .doc("Flags every model.")
    .severity(severity)
    .build()
    .unwrap()
}

fn registry_of(rules: Vec<FnRule>) -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    for r in rules {
        registry.register(Box::new(r)).unwrap();
    }
    registry
}

fn models_named(names: &[String]) -> Vec<Model> {
    names
        .iter()
        .map(|name| {
            let node = json!({ "name": name });
            Model::from_node(node.as_object().unwrap(), &[]).unwrap()
        })
        .collect()
}

proptest! {
    /// Any node carrying a string name yields a model with that exact name.
    #[test]
    fn from_node_preserves_the_name(name in arb_model_name()) {
        let node = json!({ "name": name });
        let model = Model::from_node(node.as_object().unwrap(), &[]).unwrap();
        prop_assert_eq!(model.name, name);
    }

    /// Evaluating twice with the same inputs yields the same report.
    #[test]
    fn evaluation_is_idempotent(
        names in prop::collection::vec(arb_model_name(), 0..8),
        severity in arb_severity(),
    ) {
        let registry = registry_of(vec![
            flagging_rule("models.first", severity),
            flagging_rule("models.second", Severity::Medium),
        ]);
        let models = models_named(&names);
        let cfg = EffectiveConfig::default();

        let first = evaluate(&models, &registry, &cfg);
        let second = evaluate(&models, &registry, &cfg);
        prop_assert_eq!(first, second);
    }

    /// Models in the report are sorted by name regardless of input order.
    #[test]
    fn report_models_are_name_sorted(
        names in prop::collection::vec(arb_model_name(), 0..10),
    ) {
        let registry = registry_of(vec![flagging_rule("models.flag", Severity::Medium)]);
        let models = models_named(&names);
        let report = evaluate(&models, &registry, &EffectiveConfig::default());

        for pair in report.models.windows(2) {
            prop_assert!(pair[0].name <= pair[1].name);
        }
    }

    /// Per-model results are sorted by severity rank, then rule name.
    #[test]
    fn results_are_ordered_deterministically(
        severities in prop::collection::vec(arb_severity(), 1..6),
    ) {
        let rules: Vec<FnRule> = severities
            .iter()
            .enumerate()
            .map(|(i, severity)| flagging_rule(&format!("models.flag{i}"), *severity))
            .collect();
        let registry = registry_of(rules);
        let models = models_named(&["m".to_string()]);
        let report = evaluate(&models, &registry, &EffectiveConfig::default());

        let rank = |s: Severity| match s {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        };
        for pair in report.models[0].results.windows(2) {
            let ordering = rank(pair[0].severity)
                .cmp(&rank(pair[1].severity))
                .then_with(|| pair[0].rule.cmp(&pair[1].rule));
            prop_assert!(ordering != std::cmp::Ordering::Greater);
        }
    }

    /// Disabled rules emit nothing, whatever they would have found.
    #[test]
    fn disabled_rules_emit_nothing(names in prop::collection::vec(arb_model_name(), 1..6)) {
        let registry = registry_of(vec![flagging_rule("models.flag", Severity::Critical)]);
        let mut rules = BTreeMap::new();
        rules.insert("models.flag".to_string(), RulePolicy::disabled());
        let cfg = EffectiveConfig { max_violations: 200, rules };

        let models = models_named(&names);
        let report = evaluate(&models, &registry, &cfg);

        prop_assert_eq!(report.data.violations_total, 0);
        for evaluation in &report.models {
            prop_assert!(evaluation.results.is_empty());
        }
    }

    /// Severity counts agree with the violated outcomes in the report.
    #[test]
    fn counts_match_violated_outcomes(
        severities in prop::collection::vec(arb_severity(), 0..6),
    ) {
        let rules: Vec<FnRule> = severities
            .iter()
            .enumerate()
            .map(|(i, severity)| flagging_rule(&format!("models.flag{i}"), *severity))
            .collect();
        let registry = registry_of(rules);
        let models = models_named(&["m".to_string()]);
        let report = evaluate(&models, &registry, &EffectiveConfig::default());

        let evaluation = &report.models[0];
        let violated = evaluation
            .results
            .iter()
            .filter(|r| matches!(r.outcome, RuleOutcome::Violated { .. }))
            .count() as u32;
        let counted = evaluation.counts.low
            + evaluation.counts.medium
            + evaluation.counts.high
            + evaluation.counts.critical;
        prop_assert_eq!(violated, counted);
    }

    /// Emitted violations never exceed max_violations, and truncation is
    /// announced when it happens.
    #[test]
    fn truncation_respects_max_violations(
        rule_count in 1usize..12,
        max_violations in 1usize..12,
    ) {
        let rules: Vec<FnRule> = (0..rule_count)
            .map(|i| flagging_rule(&format!("models.flag{i}"), Severity::Medium))
            .collect();
        let registry = registry_of(rules);
        let cfg = EffectiveConfig { max_violations, rules: BTreeMap::new() };
        let models = models_named(&["m".to_string()]);
        let report = evaluate(&models, &registry, &cfg);

        let evaluation = &report.models[0];
        prop_assert!(evaluation.violations().count() <= max_violations);
        if rule_count > max_violations {
            prop_assert!(evaluation.truncated_reason.is_some());
        } else {
            prop_assert!(evaluation.truncated_reason.is_none());
        }
    }
}
