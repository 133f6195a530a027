//! Dataset loaders
//!
//! Reads catalogs and chapter graphs from JSON, YAML or TOML documents.
//! The format is picked from the file extension. Validation runs right
//! after decoding, so a successful load always yields a valid store.

use crate::catalog::{Catalog, CatalogDocument};
use crate::error::StoreError;
use crate::graph::{ChapterGraph, GraphDataset};
use serde::de::DeserializeOwned;
use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl DatasetFormat {
    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(StoreError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn decode<T: DeserializeOwned>(self, text: &str) -> Result<T, StoreError> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| StoreError::parse(self, e)),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| StoreError::parse(self, e)),
            Self::Toml => toml::from_str(text).map_err(|e| StoreError::parse(self, e)),
        }
    }
}

impl Display for DatasetFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        })
    }
}

/// Parse a catalog document
///
/// The document is the nested mapping itself:
/// `{ "Electronics": { "Computers": { "Laptops": [ {id, name, price} ] } } }`.
/// A key repeated under one parent is rejected in every format.
pub fn catalog_from_str(text: &str, format: DatasetFormat) -> Result<Catalog, StoreError> {
    let document: CatalogDocument = format.decode(text)?;
    let catalog = Catalog::from_document(document)?;
    tracing::info!(
        format = %format,
        categories = catalog.category_count(),
        items = catalog.item_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse a chapter graph document
pub fn graph_from_str(text: &str, format: DatasetFormat) -> Result<ChapterGraph, StoreError> {
    let dataset: GraphDataset = format.decode(text)?;
    let graph = dataset.into_graph()?;
    tracing::info!(
        format = %format,
        nodes = graph.len(),
        links = graph.link_count(),
        start = %graph.start_id(),
        "chapter graph loaded"
    );
    Ok(graph)
}

/// Load a catalog file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, StoreError> {
    let path = path.as_ref();
    let format = DatasetFormat::from_path(path)?;
    catalog_from_str(&read(path)?, format)
}

/// Load a chapter graph file
pub fn load_graph(path: impl AsRef<Path>) -> Result<ChapterGraph, StoreError> {
    let path = path.as_ref();
    let format = DatasetFormat::from_path(path)?;
    graph_from_str(&read(path)?, format)
}

fn read(path: &Path) -> Result<String, StoreError> {
    std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Level;

    #[test]
    fn format_from_extension() {
        assert_eq!(DatasetFormat::from_path(Path::new("a.json")).unwrap(), DatasetFormat::Json);
        assert_eq!(DatasetFormat::from_path(Path::new("a.YML")).unwrap(), DatasetFormat::Yaml);
        assert_eq!(DatasetFormat::from_path(Path::new("a.toml")).unwrap(), DatasetFormat::Toml);
        assert!(DatasetFormat::from_path(Path::new("a.csv")).is_err());
        assert!(DatasetFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn yaml_catalog() {
        let yaml = r"
Fashion:
  MensWear:
    Shirts:
      - { id: shirt1, name: Cotton Polo, price: $49 }
";
        let catalog = catalog_from_str(yaml, DatasetFormat::Yaml).unwrap();
        assert_eq!(catalog.items("Fashion", "MensWear", "Shirts").len(), 1);
    }

    #[test]
    fn toml_graph_with_start() {
        let text = r#"
start = "b"

[[nodes]]
id = "a"
title = "A"
links = ["b"]

[[nodes]]
id = "b"
title = "B"
links = ["a"]
"#;
        let graph = graph_from_str(text, DatasetFormat::Toml).unwrap();
        assert_eq!(graph.start_id().as_str(), "b");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = catalog_from_str("{not json", DatasetFormat::Json).unwrap_err();
        assert!(matches!(err, StoreError::Parse { format: DatasetFormat::Json, .. }));
    }

    #[test]
    fn dangling_link_surfaces_through_loader() {
        let json = r#"{"nodes": [{"id": "a", "title": "A", "links": ["b"]}]}"#;
        let err = graph_from_str(json, DatasetFormat::Json).unwrap_err();
        assert!(matches!(err, StoreError::DanglingLink { .. }));
    }

    #[test]
    fn duplicate_item_keeps_integrity_variant() {
        let json = r#"{"Fashion": {"MensWear": {"Pants": [
            {"id": "p", "name": "Chino", "price": "$59"},
            {"id": "p", "name": "Denim", "price": "$89"}
        ]}}}"#;
        let err = catalog_from_str(json, DatasetFormat::Json).unwrap_err();
        assert!(err.is_integrity_error());
    }

    #[test]
    fn repeated_category_rejected_in_json() {
        let json = r#"{
            "Electronics": {"Computers": {"Laptops": [
                {"id": "lap1", "name": "MacBook Pro", "price": "$1999"}
            ]}},
            "Fashion": {"MensWear": {"Shirts": []}},
            "Electronics": {"Smartphones": {"Apple": [
                {"id": "phone1", "name": "iPhone 13", "price": "$799"}
            ]}}
        }"#;
        let err = catalog_from_str(json, DatasetFormat::Json).unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateKey { level: Level::Category, ref key }
                if key.as_str() == "Electronics"
        ));
    }

    #[test]
    fn repeated_leaf_group_rejected_in_yaml() {
        let yaml = r"
Electronics:
  Computers:
    Laptops:
      - { id: lap1, name: MacBook Pro, price: $1999 }
    Laptops:
      - { id: lap2, name: Dell XPS, price: $1299 }
";
        let err = catalog_from_str(yaml, DatasetFormat::Yaml).unwrap_err();
        assert_eq!(err.to_string(), "duplicate leaf group 'Laptops'");
        assert!(err.is_integrity_error());
    }

    #[test]
    fn empty_key_is_invalid_id() {
        let err = catalog_from_str(r#"{"": {}}"#, DatasetFormat::Json).unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
    }
}
