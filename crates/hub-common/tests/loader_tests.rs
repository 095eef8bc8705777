//! Tests for hub record loading.

use hub_common::{load_hubs, parse_hubs, HubError, HubRecord};
use test_utils::{fixtures, temp_test_dir};

#[test]
fn test_parse_single_hub() {
    let hubs = parse_hubs(fixtures::hubs::SQUARE_HUB).unwrap();
    assert_eq!(
        hubs,
        vec![HubRecord::new("HUB", "POLYGON((0 0,10 0,10 10,0 10,0 0))")]
    );
}

#[test]
fn test_parse_empty_array() {
    let hubs = parse_hubs(fixtures::hubs::EMPTY).unwrap();
    assert!(hubs.is_empty());
}

#[test]
fn test_parse_preserves_order() {
    let hubs = parse_hubs(fixtures::hubs::MIXED).unwrap();
    let names: Vec<&str> = hubs.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["MI", "BAD", "MW"]);
}

#[test]
fn test_parse_malformed_json() {
    let err = parse_hubs(fixtures::hubs::MALFORMED).unwrap_err();
    assert!(matches!(err, HubError::Json(_)));
}

#[test]
fn test_parse_object_instead_of_array() {
    let err = parse_hubs(r#"{"name": "HUB", "polygon": "POINT(0 0)"}"#).unwrap_err();
    assert!(matches!(err, HubError::Json(_)));
}

#[test]
fn test_load_from_file() {
    let dir = temp_test_dir();
    let path = dir.path().join("hubs.json");
    std::fs::write(&path, fixtures::hubs::MIXED).unwrap();

    let hubs = load_hubs(&path).unwrap();
    assert_eq!(hubs.len(), 3);
}

#[test]
fn test_load_missing_file() {
    let dir = temp_test_dir();
    let path = dir.path().join("missing.json");

    let err = load_hubs(&path).unwrap_err();
    match err {
        HubError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {:?}", other),
    }
}
