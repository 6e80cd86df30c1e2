//! Stable identifiers for the built-in rules.
//!
//! A rule name is a dotted namespace: `<subject>.<property>`.

// Rules: models
pub const RULE_HAS_DESCRIPTION: &str = "models.has_description";
pub const RULE_COLUMNS_HAVE_DESCRIPTION: &str = "models.columns_have_description";
pub const RULE_HAS_OWNER: &str = "models.has_owner";
pub const RULE_SQL_HAS_REASONABLE_NUMBER_OF_LINES: &str =
    "models.sql_has_reasonable_number_of_lines";
