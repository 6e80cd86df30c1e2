use crate::model::Model;
use crate::policy::EffectiveConfig;
use crate::registry::RuleRegistry;
use crate::report::{
    EvaluationData, EvaluationReport, ModelEvaluation, RuleOutcome, RuleResult, SeverityCounts,
};
use crate::rule::Rule;
use modelscore_types::Severity;
use rayon::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Evaluate every enabled rule against every model.
///
/// Each (rule, model) pair is independent: models are immutable and rules
/// are pure, so models are scattered across the rayon pool and results are
/// re-sorted afterwards for a deterministic report.
pub fn evaluate(
    models: &[Model],
    registry: &RuleRegistry,
    cfg: &EffectiveConfig,
) -> EvaluationReport {
    let mut evaluated: Vec<ModelEvaluation> = models
        .par_iter()
        .map(|model| evaluate_model(model, registry, cfg))
        .collect();

    evaluated.sort_by(|a, b| a.name.cmp(&b.name));

    let violations_total = evaluated
        .iter()
        .map(|m| m.violations().count() as u32)
        .sum();
    let errors_total = evaluated
        .iter()
        .flat_map(|m| m.results.iter())
        .filter(|r| matches!(r.outcome, RuleOutcome::Errored { .. }))
        .count() as u32;

    EvaluationReport {
        data: EvaluationData {
            models_evaluated: evaluated.len() as u32,
            rules_registered: registry.len() as u32,
            violations_total,
            errors_total,
        },
        models: evaluated,
    }
}

fn evaluate_model(
    model: &Model,
    registry: &RuleRegistry,
    cfg: &EffectiveConfig,
) -> ModelEvaluation {
    let mut results: Vec<RuleResult> = Vec::with_capacity(registry.len());
    for rule in registry.rules() {
        let Some(severity) = cfg.effective_severity(rule.as_ref()) else {
            continue;
        };
        results.push(RuleResult {
            rule: rule.name().to_string(),
            severity,
            outcome: run_rule(rule.as_ref(), model),
        });
    }

    results.sort_by(compare_results);

    let violated = results
        .iter()
        .filter(|r| matches!(r.outcome, RuleOutcome::Violated { .. }))
        .count();

    let mut truncated_reason = None;
    if violated > cfg.max_violations {
        let mut kept = 0usize;
        results.retain(|r| {
            if matches!(r.outcome, RuleOutcome::Violated { .. }) {
                kept += 1;
                kept <= cfg.max_violations
            } else {
                true
            }
        });
        truncated_reason = Some(format!(
            "violations truncated to max_violations={}",
            cfg.max_violations
        ));
    }

    let counts = SeverityCounts::from_results(&results);

    ModelEvaluation {
        name: model.name.clone(),
        unique_id: model.unique_id.clone(),
        results,
        counts,
        truncated_reason,
    }
}

/// A panic escaping `evaluate` is an authoring defect in the rule. It is
/// confined to its own (rule, model) pair and reported with both
/// identifiers; unrelated pairs keep evaluating.
fn run_rule(rule: &dyn Rule, model: &Model) -> RuleOutcome {
    match panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(model))) {
        Ok(Some(violation)) => RuleOutcome::Violated { violation },
        Ok(None) => RuleOutcome::Passed,
        Err(payload) => RuleOutcome::Errored {
            message: format!(
                "rule `{}` panicked while evaluating model `{}`: {}",
                rule.name(),
                model.identifier(),
                panic_message(payload.as_ref())
            ),
        },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

fn compare_results(a: &RuleResult, b: &RuleResult) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (critical -> high -> medium -> low)
    // 2) rule name
    let severity_rank = |sev: Severity| match sev {
        Severity::Critical => 0,
        Severity::High => 1,
        Severity::Medium => 2,
        Severity::Low => 3,
    };
    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then_with(|| a.rule.cmp(&b.rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RulePolicy;
    use crate::rule::rule;
    use crate::test_support::{model_from_json, named_model};
    use modelscore_types::RuleViolation;
    use serde_json::json;

    fn registry_of(rules: Vec<crate::rule::FnRule>) -> RuleRegistry {
        let mut registry = RuleRegistry::new();
        for r in rules {
            registry.register(Box::new(r)).unwrap();
        }
        registry
    }

    #[test]
    fn panicking_rule_is_isolated_to_its_pair() {
        let panicking = rule("models.panics", |_model: &Model| panic!("boom"))
            .doc("Always panics.")
            .build()
            .unwrap();
        let steady = rule("models.steady", |_model: &Model| {
            Some(RuleViolation::new("Always violated."))
        })
        .doc("Always violated.")
        .build()
        .unwrap();

        let registry = registry_of(vec![panicking, steady]);
        let models = vec![named_model("model1"), named_model("model2")];
        let report = evaluate(&models, &registry, &EffectiveConfig::default());

        assert_eq!(report.data.errors_total, 2);
        assert_eq!(report.data.violations_total, 2);
        for evaluation in &report.models {
            let errored = evaluation
                .results
                .iter()
                .find(|r| r.rule == "models.panics")
                .unwrap();
            match &errored.outcome {
                RuleOutcome::Errored { message } => {
                    assert!(message.contains("models.panics"));
                    assert!(message.contains(&evaluation.name));
                    assert!(message.contains("boom"));
                }
                other => panic!("expected an errored outcome, got {other:?}"),
            }
            assert_eq!(evaluation.violations().count(), 1);
        }
    }

    #[test]
    fn disabled_rules_are_skipped_entirely() {
        let flagging = rule("models.flag", |_model: &Model| {
            Some(RuleViolation::new("flagged"))
        })
        .doc("Flags everything.")
        .build()
        .unwrap();

        let registry = registry_of(vec![flagging]);
        let mut cfg = EffectiveConfig::default();
        cfg.rules
            .insert("models.flag".to_string(), RulePolicy::disabled());

        let report = evaluate(&[named_model("m")], &registry, &cfg);
        assert!(report.models[0].results.is_empty());
        assert_eq!(report.data.violations_total, 0);
    }

    #[test]
    fn severity_override_applies_to_results() {
        let flagging = rule("models.flag", |_model: &Model| {
            Some(RuleViolation::new("flagged"))
        })
        .doc("Flags everything.")
        .build()
        .unwrap();

        let registry = registry_of(vec![flagging]);
        let mut cfg = EffectiveConfig::default();
        cfg.rules.insert(
            "models.flag".to_string(),
            RulePolicy::enabled_with_severity(Severity::Critical),
        );

        let report = evaluate(&[named_model("m")], &registry, &cfg);
        assert_eq!(report.models[0].results[0].severity, Severity::Critical);
        assert_eq!(report.models[0].counts.critical, 1);
    }

    #[test]
    fn models_are_reported_in_name_order() {
        let noop = rule("models.noop", |_model: &Model| None)
            .doc("Never violated.")
            .build()
            .unwrap();
        let registry = registry_of(vec![noop]);

        let models = vec![named_model("zeta"), named_model("alpha"), named_model("mid")];
        let report = evaluate(&models, &registry, &EffectiveConfig::default());

        let names: Vec<_> = report.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn results_are_sorted_by_severity_then_rule_name() {
        let low = rule("models.a_low", |_m: &Model| Some(RuleViolation::new("low")))
            .doc("Low.")
            .severity(Severity::Low)
            .build()
            .unwrap();
        let critical = rule("models.z_critical", |_m: &Model| {
            Some(RuleViolation::new("critical"))
        })
        .doc("Critical.")
        .severity(Severity::Critical)
        .build()
        .unwrap();
        let medium = rule("models.m_medium", |_m: &Model| {
            Some(RuleViolation::new("medium"))
        })
        .doc("Medium.")
        .build()
        .unwrap();

        let registry = registry_of(vec![low, critical, medium]);
        let report = evaluate(
            &[named_model("m")],
            &registry,
            &EffectiveConfig::default(),
        );

        let order: Vec<_> = report.models[0]
            .results
            .iter()
            .map(|r| r.rule.as_str())
            .collect();
        assert_eq!(
            order,
            vec!["models.z_critical", "models.m_medium", "models.a_low"]
        );
    }

    #[test]
    fn violations_are_truncated_at_max_violations() {
        let rules: Vec<_> = (0..5)
            .map(|i| {
                rule(&format!("models.flag{i}"), |_m: &Model| {
                    Some(RuleViolation::new("flagged"))
                })
                .doc("Flags everything.")
                .build()
                .unwrap()
            })
            .collect();
        let registry = registry_of(rules);

        let cfg = EffectiveConfig {
            max_violations: 2,
            ..EffectiveConfig::default()
        };
        let report = evaluate(&[named_model("m")], &registry, &cfg);

        let evaluation = &report.models[0];
        assert_eq!(evaluation.violations().count(), 2);
        assert_eq!(
            evaluation.truncated_reason.as_deref(),
            Some("violations truncated to max_violations=2")
        );
        assert_eq!(report.data.violations_total, 2);
    }

    #[test]
    fn evaluation_with_builtin_rules_matches_model_state() {
        let registry = crate::registry::default_registry().unwrap();

        let documented = model_from_json(json!({
            "name": "documented",
            "unique_id": "model.pkg.documented",
            "description": "Fully described.",
            "meta": { "owner": "analytics" },
            "columns": {
                "id": { "name": "id", "description": "Key." }
            },
            "raw_code": "select 1"
        }));
        let bare = model_from_json(json!({ "name": "bare" }));

        let report = evaluate(
            &[documented, bare],
            &registry,
            &EffectiveConfig::default(),
        );

        let bare_eval = report.models.iter().find(|m| m.name == "bare").unwrap();
        let documented_eval = report
            .models
            .iter()
            .find(|m| m.name == "documented")
            .unwrap();

        assert_eq!(documented_eval.violations().count(), 0);
        assert!(bare_eval.violations().count() >= 2);
        assert_eq!(report.data.errors_total, 0);
    }
}
