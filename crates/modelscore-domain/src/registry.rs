use crate::rule::{Rule, RuleDefinitionError};
use crate::rules;

/// Ordered collection of rules. Registration order is evaluation order.
///
/// Duplicate names are rejected so a policy entry can never silently apply
/// to two different rules.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) -> Result<(), RuleDefinitionError> {
        if self.rules.iter().any(|r| r.name() == rule.name()) {
            return Err(RuleDefinitionError::DuplicateRule(rule.name().to_string()));
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Registry pre-populated with the built-in rule set.
pub fn default_registry() -> Result<RuleRegistry, RuleDefinitionError> {
    let mut registry = RuleRegistry::new();
    for rule in rules::all()? {
        registry.register(rule)?;
    }
    Ok(registry)
}
