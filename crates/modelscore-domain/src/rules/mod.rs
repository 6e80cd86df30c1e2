//! Built-in rule set.
//!
//! One rule per module. Function-based rules go through the builder in
//! [`crate::rule`]; struct-based rules implement the trait directly.

use crate::rule::{Rule, RuleDefinitionError};

mod columns_have_description;
mod has_description;
mod has_owner;
mod sql_has_reasonable_number_of_lines;

pub use columns_have_description::ColumnsHaveDescription;
pub use has_description::has_description;
pub use has_owner::has_owner;
pub use sql_has_reasonable_number_of_lines::SqlHasReasonableNumberOfLines;

#[cfg(test)]
mod tests;

/// Every built-in rule, in registration order.
pub fn all() -> Result<Vec<Box<dyn Rule>>, RuleDefinitionError> {
    Ok(vec![
        Box::new(has_description()?),
        Box::new(ColumnsHaveDescription),
        Box::new(has_owner()?),
        Box::new(SqlHasReasonableNumberOfLines::default()),
    ])
}
