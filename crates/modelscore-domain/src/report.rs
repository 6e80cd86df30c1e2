use modelscore_types::{RuleViolation, Severity, UniqueId};
use serde::Serialize;

/// Outcome of one (rule, model) pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RuleOutcome {
    Passed,
    Violated { violation: RuleViolation },
    Errored { message: String },
}

/// One evaluated (rule, model) pair with the severity that applied.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RuleResult {
    pub rule: String,
    pub severity: Severity,
    pub outcome: RuleOutcome,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SeverityCounts {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub critical: u32,
}

impl SeverityCounts {
    /// Counts violations only; passes and errors carry no weight.
    pub fn from_results(results: &[RuleResult]) -> Self {
        let mut counts = SeverityCounts::default();
        for r in results {
            if !matches!(r.outcome, RuleOutcome::Violated { .. }) {
                continue;
            }
            match r.severity {
                Severity::Low => counts.low += 1,
                Severity::Medium => counts.medium += 1,
                Severity::High => counts.high += 1,
                Severity::Critical => counts.critical += 1,
            }
        }
        counts
    }
}

/// All outcomes for one model, deterministically ordered.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelEvaluation {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<UniqueId>,
    pub results: Vec<RuleResult>,
    pub counts: SeverityCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

impl ModelEvaluation {
    pub fn violations(&self) -> impl Iterator<Item = &RuleViolation> {
        self.results.iter().filter_map(|r| match &r.outcome {
            RuleOutcome::Violated { violation } => Some(violation),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EvaluationData {
    pub models_evaluated: u32,
    pub rules_registered: u32,
    pub violations_total: u32,
    pub errors_total: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub models: Vec<ModelEvaluation>,
    pub data: EvaluationData,
}
