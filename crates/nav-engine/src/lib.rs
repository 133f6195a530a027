//! Navigation Engine
//!
//! State machines that move a cursor over read-only content from
//! `nav-store`.
//!
//! # Overview
//!
//! The engine provides:
//! - **HierarchyNavigator**: drill-down through the fixed-depth catalog
//! - **GraphNavigator**: free movement through a chapter graph with a back stack
//! - **Breadcrumb**: trail derived from navigator state
//! - **HistoryStack**: LIFO record of visited positions
//!
//! Navigators share content through `Arc` and own their own cursor and
//! history, so any number of independent sessions can run over one store.
//!
//! # Example
//!
//! ```rust
//! use nav_engine::prelude::*;
//! use nav_store::demo;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(demo::catalog().unwrap());
//! let mut shop = HierarchyNavigator::new(Arc::clone(&catalog));
//! shop.descend(Key::new("Electronics").unwrap()).unwrap();
//! shop.descend(Key::new("Computers").unwrap()).unwrap();
//! assert_eq!(shop.view().kind, ViewKind::LeafGroupGrid);
//!
//! let other = HierarchyNavigator::new(catalog);
//! assert_eq!(other.view().kind, ViewKind::CategoryGrid);
//! ```

#![warn(missing_docs)]

pub mod breadcrumb;
pub mod command;
pub mod config;
pub mod cursor;
pub mod error;
pub mod graph;
pub mod hierarchy;
pub mod history;
pub mod navigator;

// Re-exports
pub use breadcrumb::{Breadcrumb, Crumb, CrumbKind, HOME_LABEL};
pub use command::{GraphCommand, HierarchyCommand};
pub use config::{NavigatorConfig, UnknownKeyPolicy};
pub use cursor::{Cursor, CursorFields, ViewKind};
pub use error::NavigationError;
pub use graph::{GraphNavigator, MenuEntry, NodeView};
pub use hierarchy::{Entries, HierarchyNavigator, HierarchyView};
pub use history::HistoryStack;
pub use navigator::{Navigator, Outcome};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for engine consumers
    pub use crate::{
        Breadcrumb, Cursor, GraphCommand, GraphNavigator, HierarchyCommand, HierarchyNavigator,
        NavigationError, Navigator, NavigatorConfig, Outcome, UnknownKeyPolicy, ViewKind,
    };
    pub use nav_store::{Key, Level, NodeId};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
