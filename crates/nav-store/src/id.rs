//! Identifiers for navigable content
//!
//! Provides [`Key`] for naming children in the catalog tree and [`NodeId`]
//! for naming nodes in the chapter graph. Both are non-empty strings; the
//! check runs at construction and during deserialization, so an empty
//! identifier never reaches a navigator.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

/// Key of one child in the catalog tree (category, subcategory or leaf group)
///
/// # Example
/// ```
/// use nav_store::Key;
///
/// let key = Key::new("Electronics").unwrap();
/// assert_eq!(key.as_str(), "Electronics");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key(String);

/// Identifier of a node in the chapter graph
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

macro_rules! string_id {
    ($ty:ident, $what:literal) => {
        impl $ty {
            #[doc = concat!("Create a new ", $what, ", rejecting empty strings")]
            pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(IdError::Empty { kind: $what });
                }
                Ok(Self(value))
            }

            /// Borrow as string slice
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume into the owned string
            #[inline]
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = IdError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $ty {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(Key, "key");
string_id!(NodeId, "node id");

/// The three keyed levels of the catalog tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Top level
    Category,
    /// Second level
    SubCategory,
    /// Third level; its children are items
    LeafGroup,
}

impl Level {
    /// All levels, top-down
    pub const ALL: [Level; 3] = [Level::Category, Level::SubCategory, Level::LeafGroup];

    /// Depth of a cursor that has this level selected (1-based)
    #[inline]
    #[must_use]
    pub fn depth(self) -> usize {
        match self {
            Level::Category => 1,
            Level::SubCategory => 2,
            Level::LeafGroup => 3,
        }
    }

    /// Human-readable name
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Level::Category => "category",
            Level::SubCategory => "subcategory",
            Level::LeafGroup => "leaf group",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors for identifier construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// Empty or whitespace-only identifier
    #[error("{kind} cannot be empty")]
    Empty {
        /// Which identifier was being built
        kind: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_rejects_empty() {
        assert!(Key::new("").is_err());
        assert!(Key::new("   ").is_err());
        assert!(Key::new("Laptops").is_ok());
    }

    #[test]
    fn node_id_parses_and_displays() {
        let id: NodeId = "chapter1".parse().unwrap();
        assert_eq!(id.to_string(), "chapter1");
        assert_eq!(id.as_str(), "chapter1");
    }

    #[test]
    fn key_deserialize_checks_empty() {
        let ok: Result<Key, _> = serde_json::from_str("\"Fashion\"");
        assert_eq!(ok.unwrap().as_str(), "Fashion");

        let err: Result<Key, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }

    #[test]
    fn level_depths_are_one_based() {
        let depths: Vec<_> = Level::ALL.iter().map(|l| l.depth()).collect();
        assert_eq!(depths, vec![1, 2, 3]);
    }
}
