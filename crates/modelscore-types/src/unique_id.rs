use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical dotted node identifier as emitted by the data build tool,
/// e.g. `model.package.model1`.
///
/// Normalization rules are intentionally simple and deterministic:
/// - surrounding whitespace is stripped
/// - segments are separated by `.`; the first segment is the resource type,
///   the last segment is the node's short name
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct UniqueId(String);

impl UniqueId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resource type segment (`model` in `model.package.model1`).
    pub fn resource_type(&self) -> &str {
        self.0.split('.').next().unwrap_or("")
    }

    /// Short name segment (`model1` in `model.package.model1`).
    pub fn name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or("")
    }
}

impl From<&str> for UniqueId {
    fn from(value: &str) -> Self {
        UniqueId::new(value)
    }
}

impl From<String> for UniqueId {
    fn from(value: String) -> Self {
        UniqueId::new(value)
    }
}

impl std::fmt::Display for UniqueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
