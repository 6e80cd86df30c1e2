use crate::model::Model;
use crate::rule::Rule;
use modelscore_types::{RuleViolation, Severity, ids};

/// A model's compiled SQL should stay below a line budget.
///
/// Models without `raw_code` pass: the manifest may omit source text and
/// absence is not a length violation.
pub struct SqlHasReasonableNumberOfLines {
    pub max_lines: usize,
}

impl Default for SqlHasReasonableNumberOfLines {
    fn default() -> Self {
        Self { max_lines: 200 }
    }
}

impl Rule for SqlHasReasonableNumberOfLines {
    fn name(&self) -> &str {
        ids::RULE_SQL_HAS_REASONABLE_NUMBER_OF_LINES
    }

    fn description(&self) -> &str {
        "The SQL of a model should not exceed the line budget."
    }

    fn severity(&self) -> Severity {
        Severity::Low
    }

    fn evaluate(&self, model: &Model) -> Option<RuleViolation> {
        let code = model.raw_code.as_deref()?;
        let lines = code.lines().count();
        if lines <= self.max_lines {
            return None;
        }
        Some(RuleViolation::new(format!(
            "Model {} has too many lines of SQL: {} (max {}).",
            model.name, lines, self.max_lines
        )))
    }
}
