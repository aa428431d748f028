mod common;

use common::{VALID_METADATA, Workspace};
use training_validator::training::{Error, Issue, ValidationRequest, run};

fn request(ws: &Workspace, subject: &str) -> ValidationRequest {
    ValidationRequest::builder()
        .subject(subject)
        .metadata_path(ws.metadata_path())
        .schema_root(ws.root())
        .build()
        .unwrap()
}

#[test]
fn test_valid_submission_passes() {
    let ws = Workspace::new(&["csv"]);
    ws.write_metadata(VALID_METADATA);
    ws.add_file("data.csv");
    ws.add_file("README.md");

    let report = run(&request(&ws, "computer_science")).unwrap();
    assert!(report.passed(), "unexpected issues: {:?}", report.issues().collect::<Vec<_>>());
}

#[test]
fn test_issues_are_ordered_fields_dates_formats() {
    let ws = Workspace::new(&["csv", "json"]);
    ws.write_metadata(
        &VALID_METADATA
            .replace("license: MIT\n", "")
            .replace("\"2024-01-02\"", "\"01-01-2024\""),
    );
    ws.add_file("data.xyz");

    let report = run(&request(&ws, "chemistry")).unwrap();
    let issues: Vec<_> = report.issues().cloned().collect();
    assert_eq!(
        issues,
        vec![
            Issue::MissingField {
                field: "license".into()
            },
            Issue::InvalidDate {
                field: "last_updated".into(),
                value: "01-01-2024".into()
            },
            Issue::UnsupportedFormat {
                file: "data.xyz".into(),
                extension: "xyz".into(),
                allowed: vec!["csv".into(), "json".into()],
            },
        ]
    );
}

#[test]
fn test_invalid_subject_aborts_before_loading() {
    let ws = Workspace::new(&["csv"]);
    // No metadata file is written; the subject check must fail first.
    let err = run(&request(&ws, "biology")).unwrap_err();
    assert!(matches!(err, Error::InvalidSubject { .. }));
}

#[test]
fn test_missing_schema_is_fatal() {
    let ws = Workspace::new(&["csv"]);
    ws.write_metadata(VALID_METADATA);
    std::fs::remove_file(ws.root().join("mathematics/schema/training_schema.yaml")).unwrap();

    let err = run(&request(&ws, "mathematics")).unwrap_err();
    assert!(matches!(err, Error::SchemaNotFound { .. }));
}

#[test]
fn test_missing_metadata_is_fatal() {
    let ws = Workspace::new(&["csv"]);
    let err = run(&request(&ws, "mathematics")).unwrap_err();
    assert!(matches!(err, Error::MetadataNotFound { .. }));
}
