use crate::rule::Rule;
use modelscore_types::Severity;
use std::collections::BTreeMap;

/// Per-rule policy: enable/disable and an optional severity override.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulePolicy {
    pub enabled: bool,
    pub severity: Option<Severity>,
}

impl RulePolicy {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            severity: None,
        }
    }

    pub fn enabled_with_severity(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity: Some(severity),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: None,
        }
    }
}

/// Resolved configuration consumed by the engine.
///
/// Rules without a policy entry run at their declared severity; an entry can
/// disable a rule or override its severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub max_violations: usize,
    pub rules: BTreeMap<String, RulePolicy>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            max_violations: 200,
            rules: BTreeMap::new(),
        }
    }
}

impl EffectiveConfig {
    /// Effective severity for a rule, or `None` when the rule is disabled.
    pub fn effective_severity(&self, rule: &dyn Rule) -> Option<Severity> {
        match self.rules.get(rule.name()) {
            Some(policy) if !policy.enabled => None,
            Some(policy) => Some(policy.severity.unwrap_or_else(|| rule.severity())),
            None => Some(rule.severity()),
        }
    }
}
