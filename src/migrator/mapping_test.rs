use crate::migrator::errors::MigrateError;
use crate::migrator::mapping::MigrationMapping;
use indoc::indoc;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_parse_preserves_document_order() {
    let mapping = MigrationMapping::parse(indoc! {r#"
        {
            "zeta": "c3",
            "alpha:one": "c1",
            "mid:two:three": "c2"
        }
    "#})
    .unwrap();

    let order: Vec<(&str, &str)> = mapping.iter().collect();
    assert_eq!(
        order,
        vec![("zeta", "c3"), ("alpha:one", "c1"), ("mid:two:three", "c2")]
    );
    assert_eq!(mapping.len(), 3);
    assert_eq!(mapping.get("alpha:one"), Some("c1"));
}

#[test]
fn test_parse_empty_object() {
    let mapping = MigrationMapping::parse("{}").unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn test_parse_rejects_non_string_values() {
    assert!(MigrationMapping::parse(r#"{"intro": 1}"#).is_err());
    assert!(MigrationMapping::parse(r#"{"intro": {"id": "c1"}}"#).is_err());
    assert!(MigrationMapping::parse(r#"{"intro": ["c1"]}"#).is_err());
}

#[test]
fn test_parse_rejects_non_object_documents() {
    assert!(MigrationMapping::parse(r#"["intro", "c1"]"#).is_err());
    assert!(MigrationMapping::parse(r#""intro""#).is_err());
    assert!(MigrationMapping::parse(r#"{"intro": "c1""#).is_err());
}

#[test]
fn test_load_missing_file_is_read_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("migration-mapping.json");

    let err = MigrationMapping::load(&path).unwrap_err();
    assert!(matches!(err, MigrateError::MappingRead { .. }));
}

#[test]
fn test_load_malformed_file_is_parse_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("migration-mapping.json");
    fs::write(&path, "{ not json").unwrap();

    let err = MigrationMapping::load(&path).unwrap_err();
    assert!(matches!(err, MigrateError::MappingParse { .. }));
    assert!(err.to_string().contains("migration-mapping.json"));
}
