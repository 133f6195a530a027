//! Content Store
//!
//! Static, preloaded, read-only datasets for the navigation engine.
//!
//! # Overview
//!
//! The store provides:
//! - **Catalog**: fixed-depth `category > subcategory > leaf group > items` tree
//! - **ChapterGraph**: directed node set with links, cycles allowed
//! - **GraphBuilder**: load-time link integrity checks
//! - **Loaders**: JSON, YAML and TOML documents
//!
//! # Example
//!
//! ```rust
//! use nav_store::{catalog_from_str, DatasetFormat};
//!
//! let json = r#"{"Fashion": {"MensWear": {"Shirts": [
//!     {"id": "shirt1", "name": "Cotton Polo", "price": "$49"}
//! ]}}}"#;
//!
//! let catalog = catalog_from_str(json, DatasetFormat::Json).unwrap();
//! assert_eq!(catalog.items("Fashion", "MensWear", "Shirts").len(), 1);
//! assert!(catalog.items("Fashion", "MensWear", "Hats").is_empty());
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod demo;
pub mod error;
pub mod graph;
pub mod id;
pub mod loader;

// Re-exports
pub use catalog::{Catalog, CatalogTree, Item, LeafGroups, SubCategories};
pub use error::StoreError;
pub use graph::{ChapterGraph, GraphBuilder, GraphDataset, NodeRecord};
pub use id::{IdError, Key, Level, NodeId};
pub use loader::{catalog_from_str, graph_from_str, load_catalog, load_graph, DatasetFormat};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for store consumers
    pub use crate::{
        Catalog, ChapterGraph, DatasetFormat, GraphBuilder, Item, Key, Level, NodeId, NodeRecord,
        StoreError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
