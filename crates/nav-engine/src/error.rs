//! Error types for the navigation engine
//!
//! Every error here is local to one navigation call and leaves the
//! navigator exactly as it was. Going back with an empty history is not
//! an error.

use nav_store::{Key, Level};

/// Main navigation error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// `go_to` target is not in the graph
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Hierarchy key is not in the catalog (strict policy only)
    #[error("unknown {level}: {key}")]
    UnknownKey {
        /// Level of the unresolved key
        level: Level,
        /// Unresolved key
        key: Key,
    },

    /// A level was set below an unset ancestor
    #[error("{level} set without a {missing}")]
    StructuralPrecondition {
        /// Level that was set
        level: Level,
        /// Ancestor that was missing
        missing: Level,
    },

    /// Tried to descend below the item list
    #[error("no level below the item list")]
    AtLeaf,
}

impl NavigationError {
    /// Reference to content that does not exist
    #[inline]
    #[must_use]
    pub fn is_unknown_reference(&self) -> bool {
        matches!(self, Self::UnknownNode(_) | Self::UnknownKey { .. })
    }

    /// Caller built an impossible position
    #[inline]
    #[must_use]
    pub fn is_caller_bug(&self) -> bool {
        matches!(self, Self::StructuralPrecondition { .. } | Self::AtLeaf)
    }
}
