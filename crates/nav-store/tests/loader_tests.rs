//! File-based loader tests

use nav_store::{load_catalog, load_graph, StoreError};
use std::io::Write;
use tempfile::Builder;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_demo_catalog_from_disk() {
    let file = write_temp(".json", nav_store::demo::CATALOG_JSON);
    let catalog = load_catalog(file.path()).unwrap();

    let subs: Vec<_> = catalog
        .sub_categories("Electronics")
        .map(|k| k.as_str())
        .collect();
    assert_eq!(subs, vec!["Computers", "Smartphones"]);
}

#[test]
fn loads_yaml_graph_from_disk() {
    let yaml = r"
start: intro
nodes:
  - id: intro
    title: Intro
    body: Hello
    links: [outro]
  - id: outro
    title: Outro
    body: Bye
    links: [intro]
";
    let file = write_temp(".yaml", yaml);
    let graph = load_graph(file.path()).unwrap();
    assert_eq!(graph.start().title, "Intro");
    assert_eq!(graph.links("outro").next().unwrap().title, "Intro");
}

#[test]
fn missing_file_is_io_error() {
    let err = load_catalog("/definitely/not/here/catalog.json").unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(!err.is_integrity_error());
}

#[test]
fn unsupported_extension_rejected_before_read() {
    let file = write_temp(".csv", "a,b,c");
    let err = load_graph(file.path()).unwrap_err();
    assert!(matches!(err, StoreError::UnsupportedFormat(_)));
}

#[test]
fn dangling_link_rejected_at_load_time() {
    let json = r#"{"start": "a", "nodes": [
        {"id": "a", "title": "A", "links": ["b", "c"]},
        {"id": "b", "title": "B", "links": []}
    ]}"#;
    let file = write_temp(".json", json);
    match load_graph(file.path()).unwrap_err() {
        StoreError::DanglingLink { from, to } => {
            assert_eq!(from.as_str(), "a");
            assert_eq!(to.as_str(), "c");
        }
        other => panic!("unexpected error: {other}"),
    }
}
