//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings. Discovering where the configuration lives is the
//! caller's concern.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{ModelscoreConfigV1, RuleConfig};
pub use resolve::Overrides;

use modelscore_domain::policy::EffectiveConfig;

/// Parse `modelscore.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ModelscoreConfigV1> {
    let cfg: ModelscoreConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (defaults + overrides +
/// per-rule config).
pub fn resolve_config(
    cfg: ModelscoreConfigV1,
    overrides: Overrides,
) -> anyhow::Result<EffectiveConfig> {
    resolve::resolve_config(cfg, overrides)
}
