use crate::model::Model;
use modelscore_types::{RuleViolation, Severity};
use thiserror::Error;

/// A unit of evaluation logic that checks one property of a model.
///
/// Every rule, however it is declared, is polymorphic over this single
/// capability. `evaluate` must be a pure function of the model's state:
/// no hidden globals, no IO.
pub trait Rule: Send + Sync {
    /// Stable dotted name, e.g. `models.has_description`.
    fn name(&self) -> &str;

    /// Human-readable description of what the rule checks.
    fn description(&self) -> &str;

    fn severity(&self) -> Severity {
        Severity::default()
    }

    /// `None` when the model satisfies the rule.
    fn evaluate(&self, model: &Model) -> Option<RuleViolation>;
}

/// Raised while declaring or registering rules, before any evaluation runs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleDefinitionError {
    #[error("rule `{0}` has neither an explicit description nor a documentation string")]
    MissingDescription(String),
    #[error("a rule named `{0}` is already registered")]
    DuplicateRule(String),
}

type EvalFn = dyn Fn(&Model) -> Option<RuleViolation> + Send + Sync;

/// A rule declared from a plain function plus metadata.
pub struct FnRule {
    name: String,
    description: String,
    severity: Severity,
    eval: Box<EvalFn>,
}

impl Rule for FnRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, model: &Model) -> Option<RuleViolation> {
        (self.eval)(model)
    }
}

impl std::fmt::Debug for FnRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

/// Entry point for function-based rule declarations.
///
/// The builder normalizes the declaration styles into [`FnRule`]: attach a
/// documentation string with [`RuleBuilder::doc`], or set the description
/// explicitly with [`RuleBuilder::description`] (the explicit form wins).
pub fn rule<F>(name: &str, eval: F) -> RuleBuilder
where
    F: Fn(&Model) -> Option<RuleViolation> + Send + Sync + 'static,
{
    RuleBuilder {
        name: name.to_string(),
        doc: None,
        description: None,
        severity: Severity::default(),
        eval: Box::new(eval),
    }
}

pub struct RuleBuilder {
    name: String,
    doc: Option<String>,
    description: Option<String>,
    severity: Severity,
    eval: Box<EvalFn>,
}

impl RuleBuilder {
    /// Documentation string attached to the underlying function. Used as the
    /// description unless an explicit one is set.
    pub fn doc<S: Into<String>>(mut self, text: S) -> Self {
        self.doc = Some(text.into());
        self
    }

    /// Explicit description, overriding any documentation string.
    pub fn description<S: Into<String>>(mut self, text: S) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Resolve the declaration. Fails when neither an explicit description
    /// nor a non-blank documentation string is present, so misconfigured
    /// rules surface before they ever run.
    pub fn build(self) -> Result<FnRule, RuleDefinitionError> {
        let description = self
            .description
            .or(self.doc)
            .filter(|d| !d.trim().is_empty())
            .ok_or(RuleDefinitionError::MissingDescription(self.name.clone()))?;

        Ok(FnRule {
            name: self.name,
            description,
            severity: self.severity,
            eval: self.eval,
        })
    }
}
