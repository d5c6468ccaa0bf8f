use fluentschema::conformance::{cases, run};
use fluentschema::{is, SchemaError, SchemaRegistry, Value};

#[test]
fn every_conformance_case_passes() {
    let failures: Vec<&str> = cases()
        .iter()
        .filter(|c| !c.run())
        .map(|c| c.description)
        .collect();

    assert!(failures.is_empty(), "failing cases: {failures:?}");
}

#[test]
fn full_run_reports_all_passed() {
    let report = run(None);
    assert_eq!(report.total(), cases().len());
    assert_eq!(report.failed(), 0);
    assert!(report.all_passed());
}

#[test]
fn filtered_run_covers_matching_cases_only() {
    let report = run(Some("objects"));
    assert!(report.total() >= 4);
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.description.contains("objects")));
}

#[test]
fn facade_exposes_registry_workflow() {
    let mut registry = SchemaRegistry::new();
    registry
        .register(
            "tag",
            is::string().which(|s| s.as_str().is_some_and(|s| !s.is_empty())),
        )
        .expect("registration should succeed");

    assert!(registry.ensure("tag", &Value::from("rust")).is_ok());
    assert!(matches!(
        registry.ensure("tag", &Value::from("")),
        Err(SchemaError::Rejected { .. })
    ));
}

#[test]
fn reexported_modules_agree() {
    let schema: fluentschema::schema::Schema = is::optional().number();
    let value: fluentschema::value::Value = fluentschema::value::ABSENT.clone();
    assert!(schema.validate(&value));
}
