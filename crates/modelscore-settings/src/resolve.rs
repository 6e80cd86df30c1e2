use crate::model::ModelscoreConfigV1;
use anyhow::bail;
use modelscore_domain::policy::{EffectiveConfig, RulePolicy};
use modelscore_types::Severity;
use std::collections::BTreeMap;

/// Caller-supplied overrides applied on top of the parsed config.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub max_violations: Option<u32>,
}

pub(crate) fn resolve_config(
    cfg: ModelscoreConfigV1,
    overrides: Overrides,
) -> anyhow::Result<EffectiveConfig> {
    let mut rules = BTreeMap::new();
    for (name, rule_cfg) in cfg.rules {
        let severity = match rule_cfg.severity.as_deref() {
            None => None,
            Some(s) => Some(parse_severity(s)?),
        };
        rules.insert(
            name,
            RulePolicy {
                enabled: rule_cfg.enabled.unwrap_or(true),
                severity,
            },
        );
    }

    let max_violations = overrides
        .max_violations
        .or(cfg.max_violations)
        .map(|v| v as usize)
        .unwrap_or_else(|| EffectiveConfig::default().max_violations);

    Ok(EffectiveConfig {
        max_violations,
        rules,
    })
}

fn parse_severity(input: &str) -> anyhow::Result<Severity> {
    Ok(match input {
        "low" => Severity::Low,
        "medium" => Severity::Medium,
        "high" => Severity::High,
        "critical" => Severity::Critical,
        other => bail!("unknown severity `{other}` (expected low|medium|high|critical)"),
    })
}
