//! Built-in demo datasets
//!
//! The product catalog and the five-chapter storybook shipped with the
//! dashboard, embedded at compile time. They go through the same loaders
//! as user files, so they are validated the same way.

use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::graph::ChapterGraph;
use crate::loader::{catalog_from_str, graph_from_str, DatasetFormat};

/// Raw catalog document
pub const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Raw storybook document
pub const STORYBOOK_JSON: &str = include_str!("../data/storybook.json");

/// Electronics / Fashion product catalog
pub fn catalog() -> Result<Catalog, StoreError> {
    catalog_from_str(CATALOG_JSON, DatasetFormat::Json)
}

/// Storybook chapters, starting at `chapter1`
pub fn storybook() -> Result<ChapterGraph, StoreError> {
    graph_from_str(STORYBOOK_JSON, DatasetFormat::Json)
}
