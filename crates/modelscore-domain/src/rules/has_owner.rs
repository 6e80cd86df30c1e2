use crate::model::Model;
use crate::rule::{FnRule, RuleDefinitionError, rule};
use modelscore_types::{RuleViolation, Severity, ids};

pub fn has_owner() -> Result<FnRule, RuleDefinitionError> {
    rule(ids::RULE_HAS_OWNER, |model: &Model| {
        if model.owner().is_some() {
            return None;
        }
        Some(RuleViolation::new(format!(
            "Model {} has no owner.",
            model.name
        )))
    })
    .description("A model should have an owner defined under `meta.owner`.")
    .severity(Severity::High)
    .build()
}
