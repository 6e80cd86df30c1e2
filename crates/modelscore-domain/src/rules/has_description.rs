use crate::model::Model;
use crate::rule::{FnRule, RuleDefinitionError, rule};
use modelscore_types::{RuleViolation, ids};

pub fn has_description() -> Result<FnRule, RuleDefinitionError> {
    rule(ids::RULE_HAS_DESCRIPTION, |model: &Model| {
        if model.has_description() {
            return None;
        }
        Some(RuleViolation::new(format!(
            "Model {} has no description.",
            model.name
        )))
    })
    .doc("A model should have a description.")
    .build()
}
