//! Error types for the content store
//!
//! Every variant here is raised while a dataset is being loaded. Once a
//! [`Catalog`](crate::Catalog) or [`ChapterGraph`](crate::ChapterGraph)
//! exists it is valid for its whole lifetime.

use crate::id::{IdError, Key, Level, NodeId};
use crate::loader::DatasetFormat;
use std::path::PathBuf;

/// Main store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Dataset file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File extension does not map to a known format
    #[error("unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    /// Document is syntactically or structurally malformed
    #[error("{format} parse error: {message}")]
    Parse {
        /// Format being parsed
        format: DatasetFormat,
        /// Parser message
        message: String,
    },

    /// Identifier failed validation
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),

    /// A key appears twice under the same parent
    #[error("duplicate {level} '{key}'")]
    DuplicateKey {
        /// Level of the repeated key
        level: Level,
        /// Repeated key
        key: Key,
    },

    /// Two items in one leaf group share an id
    #[error("duplicate item '{item}' in {category} > {sub_category} > {leaf_group}")]
    DuplicateItem {
        /// Category key
        category: Key,
        /// Subcategory key
        sub_category: Key,
        /// Leaf group key
        leaf_group: Key,
        /// Repeated item id
        item: String,
    },

    /// Two graph nodes share an id
    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    /// A link points at a node that does not exist
    #[error("dangling link from '{from}' to unknown node '{to}'")]
    DanglingLink {
        /// Node holding the link
        from: NodeId,
        /// Unresolved target
        to: NodeId,
    },

    /// Designated start node is not in the graph
    #[error("start node '{0}' not found")]
    UnknownStart(NodeId),

    /// Graph has no nodes to start from
    #[error("graph contains no nodes")]
    EmptyGraph,
}

impl StoreError {
    /// Integrity errors describe bad content rather than a bad file
    #[inline]
    #[must_use]
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidId(_)
                | Self::DuplicateKey { .. }
                | Self::DuplicateItem { .. }
                | Self::DuplicateNode(_)
                | Self::DanglingLink { .. }
                | Self::UnknownStart(_)
                | Self::EmptyGraph
        )
    }

    pub(crate) fn parse(format: DatasetFormat, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            format,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_link_display_names_both_ends() {
        let err = StoreError::DanglingLink {
            from: NodeId::new("chapter1").unwrap(),
            to: NodeId::new("chapter9").unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("chapter1"));
        assert!(msg.contains("chapter9"));
        assert!(err.is_integrity_error());
    }

    #[test]
    fn duplicate_key_display_names_level() {
        let err = StoreError::DuplicateKey {
            level: Level::SubCategory,
            key: Key::new("Computers").unwrap(),
        };
        assert_eq!(err.to_string(), "duplicate subcategory 'Computers'");
        assert!(err.is_integrity_error());
    }

    #[test]
    fn parse_error_is_not_integrity() {
        let err = StoreError::parse(DatasetFormat::Json, "expected value");
        assert!(err.to_string().starts_with("JSON parse error"));
        assert!(!err.is_integrity_error());
    }
}
