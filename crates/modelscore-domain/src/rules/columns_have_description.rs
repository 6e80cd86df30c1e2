use crate::model::Model;
use crate::rule::Rule;
use modelscore_types::{RuleViolation, ids};

/// All columns of a model should carry a description.
pub struct ColumnsHaveDescription;

impl Rule for ColumnsHaveDescription {
    fn name(&self) -> &str {
        ids::RULE_COLUMNS_HAVE_DESCRIPTION
    }

    fn description(&self) -> &str {
        "All columns of a model should have a description."
    }

    fn evaluate(&self, model: &Model) -> Option<RuleViolation> {
        let undocumented: Vec<&str> = model
            .columns
            .iter()
            .filter(|c| !c.has_description())
            .map(|c| c.name.as_str())
            .collect();

        if undocumented.is_empty() {
            return None;
        }
        Some(RuleViolation::new(format!(
            "Columns without a description: {}.",
            undocumented.join(", ")
        )))
    }
}
