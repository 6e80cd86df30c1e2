use super::{
    ColumnsHaveDescription, SqlHasReasonableNumberOfLines, has_description, has_owner,
};
use crate::rule::Rule;
use crate::test_support::model_from_json;
use modelscore_types::{Severity, ids};
use serde_json::json;

#[test]
fn has_description_flags_missing_and_blank_descriptions() {
    let rule = has_description().unwrap();
    assert_eq!(rule.name(), ids::RULE_HAS_DESCRIPTION);

    let missing = model_from_json(json!({ "name": "customers" }));
    let violation = rule.evaluate(&missing).unwrap();
    assert_eq!(violation.message, "Model customers has no description.");

    let blank = model_from_json(json!({ "name": "customers", "description": "  " }));
    assert!(rule.evaluate(&blank).is_some());

    let documented =
        model_from_json(json!({ "name": "customers", "description": "Customer master." }));
    assert!(rule.evaluate(&documented).is_none());
}

#[test]
fn columns_have_description_lists_offending_columns() {
    let rule = ColumnsHaveDescription;

    let model = model_from_json(json!({
        "name": "orders",
        "columns": {
            "id": { "name": "id", "description": "Key." },
            "amount": { "name": "amount" },
            "status": { "name": "status", "description": "" }
        }
    }));

    let violation = rule.evaluate(&model).unwrap();
    assert_eq!(
        violation.message,
        "Columns without a description: amount, status."
    );
}

#[test]
fn columns_have_description_passes_without_columns() {
    let model = model_from_json(json!({ "name": "orders" }));
    assert!(ColumnsHaveDescription.evaluate(&model).is_none());
}

#[test]
fn has_owner_reads_meta_owner() {
    let rule = has_owner().unwrap();
    assert_eq!(rule.severity(), Severity::High);

    let unowned = model_from_json(json!({ "name": "orders", "meta": {} }));
    assert!(rule.evaluate(&unowned).is_some());

    let owned = model_from_json(json!({
        "name": "orders",
        "meta": { "owner": "analytics" }
    }));
    assert!(rule.evaluate(&owned).is_none());
}

#[test]
fn sql_line_budget_counts_lines() {
    let rule = SqlHasReasonableNumberOfLines { max_lines: 2 };

    let short = model_from_json(json!({ "name": "m", "raw_code": "select 1\nfrom t" }));
    assert!(rule.evaluate(&short).is_none());

    let long = model_from_json(json!({
        "name": "m",
        "raw_code": "select 1\nfrom t\nwhere x = 1"
    }));
    let violation = rule.evaluate(&long).unwrap();
    assert_eq!(
        violation.message,
        "Model m has too many lines of SQL: 3 (max 2)."
    );
}

#[test]
fn sql_line_budget_ignores_models_without_code() {
    let rule = SqlHasReasonableNumberOfLines::default();
    let model = model_from_json(json!({ "name": "m" }));
    assert!(rule.evaluate(&model).is_none());
}

#[test]
fn builtin_rules_expose_descriptions() {
    for rule in super::all().unwrap() {
        assert!(
            !rule.description().trim().is_empty(),
            "rule `{}` must describe itself",
            rule.name()
        );
    }
}
