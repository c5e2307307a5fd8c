//! Integration test: validate user profile payloads against the user
//! template in `tests/fixtures/`.
//!
//! The fixtures mix YAML and JSON so both loaders feed the matcher.

use std::path::PathBuf;

use tmpl_core::{load_document, load_template, Document, Template, TypeTag, Value};
use tmpl_schema::{
    extract_leaves, reconcile_keys, reconcile_types, validate, TemplateMatcher, TypeCheck,
    LEAF_COUNT_MISMATCH_MESSAGE,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn user_template() -> Template {
    load_template(&fixtures_dir().join("user.template.yaml")).expect("Failed to load template")
}

fn fixture(name: &str) -> Document {
    load_document(&fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {name}: {e}"))
}

#[test]
fn test_conformant_profile_validates() {
    let report = validate(&fixture("john.json"), &user_template());
    assert!(report.is_valid(), "unexpected problems: {:?}", report.problems());
}

#[test]
fn test_profile_missing_city() {
    let eric = fixture("eric.yaml");
    let template = user_template();

    let keys = reconcile_keys(&eric, &template);
    assert_eq!(keys.to_string(), "Missing Keys = city");
    assert!(keys.extra.is_empty());

    // One leaf fewer than the template, so no positional comparison.
    let types = reconcile_types(&eric, &template);
    assert_eq!(
        types,
        TypeCheck::LeafCountMismatch {
            document_leaves: 7,
            template_leaves: 8,
        }
    );
    assert_eq!(types.to_string(), LEAF_COUNT_MISMATCH_MESSAGE);
}

#[test]
fn test_profile_with_text_month() {
    let michael = fixture("michael.json");
    let template = user_template();

    assert!(reconcile_keys(&michael, &template).is_match());

    let types = reconcile_types(&michael, &template);
    let mismatches = types.mismatches();
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].value, Value::from("May"));
    assert_eq!(mismatches[0].expected, TypeTag::Integer);
    assert_eq!(mismatches[0].actual, TypeTag::Text);
    assert_eq!(
        mismatches[0].to_string(),
        "Data type mismatch at value May: expected int, got str"
    );
}

#[test]
fn test_leaf_order_follows_stack_traversal() {
    // user_id first, then the last-pushed subtree (bio), and within bio
    // its last child (birthplace) before dob; name comes last.
    let leaves: Vec<Value> = extract_leaves(&fixture("michael.json"))
        .into_iter()
        .cloned()
        .collect();
    let expected: Vec<Value> = vec![
        102.into(),
        "United Kingdom".into(),
        "Sheffield".into(),
        1943.into(),
        "May".into(),
        5.into(),
        "Michael".into(),
        "Palin".into(),
    ];
    assert_eq!(leaves, expected);
}

#[test]
fn test_matcher_over_all_fixtures() {
    let matcher = TemplateMatcher::new(user_template());
    let results: Vec<(&str, bool)> = ["john.json", "eric.yaml", "michael.json"]
        .into_iter()
        .map(|name| (name, matcher.validate(&fixture(name)).is_valid()))
        .collect();
    assert_eq!(
        results,
        vec![("john.json", true), ("eric.yaml", false), ("michael.json", false)]
    );
}

#[test]
fn test_report_json_output() {
    let report = validate(&fixture("michael.json"), &user_template());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["keys"]["missing"], serde_json::json!([]));
    assert_eq!(json["types"]["status"], "compared");
    assert_eq!(json["types"]["mismatches"][0]["value"], "May");
    assert_eq!(json["types"]["mismatches"][0]["expected"], "int");
    assert_eq!(json["types"]["mismatches"][0]["actual"], "str");
    assert_eq!(json["types"]["mismatches"][0]["position"], 4);
}
