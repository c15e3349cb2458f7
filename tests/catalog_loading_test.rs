//! Catalog loading from files
use gtd_actions::{Catalog, CatalogError, ContextId, Effort, Priority, Storage, Task};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_catalog(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_exporter_payload_round_trip_into_catalog() {
    let file = write_catalog(
        ".json",
        r#"[
            ["errands", "computer"],
            ["Alice", "Bob"],
            [
                ["6f1c", "Send invoice", "Use the new template", null, "2024-03-08T14:30:00", 2, 1, [1], [1]],
                ["7a2d", "Drop off parcel", null, null, null, 0, 0, [0, 0], []]
            ]
        ]"#,
    );
    let catalog = Storage::new(file.path()).load().unwrap();

    let invoice = &catalog.tasks()[0];
    assert_eq!(invoice.priority, Priority::high);
    assert_eq!(invoice.effort, Effort::low);
    assert_eq!(catalog.context_name(invoice.contexts[0]), Some("computer"));
    assert_eq!(catalog.person_name(invoice.people[0]), Some("Bob"));
    assert_eq!(catalog.tasks()[1].contexts, vec![ContextId::from_index(0)]);
}

#[test]
fn test_toml_document_appends_undeclared_names() {
    let file = write_catalog(
        ".toml",
        r#"
contexts = ["home"]

[[tasks]]
id = "a"
title = "Fix shelf"
contexts = ["hardware-store", "home"]
people = ["Bob"]
effort = "medium"
priority = "important"
"#,
    );
    let catalog = Storage::new(file.path()).load().unwrap();

    assert_eq!(catalog.contexts(), ["home", "hardware-store"]);
    assert_eq!(catalog.context_id("hardware-store"), Some(ContextId::from_index(1)));
    assert_eq!(catalog.people(), ["Bob"]);
}

#[test]
fn test_out_of_range_person_is_an_invalid_catalog() {
    let file = write_catalog(
        ".json",
        r#"[[], ["Alice"], [["a", "x", null, null, null, 0, 0, [], [1]]]]"#,
    );
    let err = Storage::new(file.path()).load().err().unwrap();
    assert!(format!("{:#}", err).contains("person index 1"));
}

#[test]
fn test_catalog_new_fails_fast() {
    let task = Task {
        id: "a".to_string(),
        contexts: vec![ContextId::from_index(0)],
        ..Default::default()
    };
    let result = Catalog::new(vec![], vec![], vec![task]);
    assert!(matches!(result, Err(CatalogError::ContextOutOfRange { .. })));
}

#[test]
fn test_malformed_timestamp_rejected() {
    let file = write_catalog(
        ".toml",
        "[[tasks]]\nid = \"a\"\ntitle = \"x\"\ndeadline = \"next week\"\n",
    );
    assert!(Storage::new(file.path()).load().is_err());
}
