//! Hierarchy cursor and derived view kinds
//!
//! [`Cursor`] is the single source of truth for where a hierarchy
//! navigator is. Each variant carries every ancestor key, so a cursor with
//! a subcategory but no category cannot be built. Cursors are immutable:
//! every transition produces a new value.

use crate::error::NavigationError;
use nav_store::{Key, Level};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Position in the catalog tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CursorFields", try_from = "CursorFields")]
pub enum Cursor {
    /// Nothing selected; category grid
    #[default]
    Root,
    /// Category selected; subcategory grid
    Category {
        /// Selected category
        category: Key,
    },
    /// Category and subcategory selected; leaf group grid
    SubCategory {
        /// Selected category
        category: Key,
        /// Selected subcategory
        sub_category: Key,
    },
    /// All three levels selected; item list
    LeafGroup {
        /// Selected category
        category: Key,
        /// Selected subcategory
        sub_category: Key,
        /// Selected leaf group
        leaf_group: Key,
    },
}

impl Cursor {
    /// Root cursor
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::Root
    }

    /// Rebuild a cursor from nullable fields
    ///
    /// Rejects a field that is set below an unset one.
    pub fn from_fields(
        category: Option<Key>,
        sub_category: Option<Key>,
        leaf_group: Option<Key>,
    ) -> Result<Self, NavigationError> {
        match (category, sub_category, leaf_group) {
            (None, None, None) => Ok(Self::Root),
            (Some(category), None, None) => Ok(Self::Category { category }),
            (Some(category), Some(sub_category), None) => Ok(Self::SubCategory {
                category,
                sub_category,
            }),
            (Some(category), Some(sub_category), Some(leaf_group)) => Ok(Self::LeafGroup {
                category,
                sub_category,
                leaf_group,
            }),
            (None, Some(_), _) => Err(NavigationError::StructuralPrecondition {
                level: Level::SubCategory,
                missing: Level::Category,
            }),
            (_, None, Some(_)) => Err(NavigationError::StructuralPrecondition {
                level: Level::LeafGroup,
                missing: Level::SubCategory,
            }),
        }
    }

    /// Selected category, if any
    #[must_use]
    pub fn category(&self) -> Option<&Key> {
        match self {
            Self::Root => None,
            Self::Category { category }
            | Self::SubCategory { category, .. }
            | Self::LeafGroup { category, .. } => Some(category),
        }
    }

    /// Selected subcategory, if any
    #[must_use]
    pub fn sub_category(&self) -> Option<&Key> {
        match self {
            Self::Root | Self::Category { .. } => None,
            Self::SubCategory { sub_category, .. } | Self::LeafGroup { sub_category, .. } => {
                Some(sub_category)
            }
        }
    }

    /// Selected leaf group, if any
    #[must_use]
    pub fn leaf_group(&self) -> Option<&Key> {
        match self {
            Self::LeafGroup { leaf_group, .. } => Some(leaf_group),
            _ => None,
        }
    }

    /// Key selected at `level`, if any
    #[must_use]
    pub fn selected(&self, level: Level) -> Option<&Key> {
        match level {
            Level::Category => self.category(),
            Level::SubCategory => self.sub_category(),
            Level::LeafGroup => self.leaf_group(),
        }
    }

    /// Number of selected levels (0-3)
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Root => 0,
            Self::Category { .. } => 1,
            Self::SubCategory { .. } => 2,
            Self::LeafGroup { .. } => 3,
        }
    }

    /// Check for the root cursor
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// View rendered for this cursor
    #[inline]
    #[must_use]
    pub fn view_kind(&self) -> ViewKind {
        ViewKind::from_depth(self.depth())
    }

    /// Selected keys, top-down, paired with their level
    #[must_use]
    pub fn keys(&self) -> Vec<(Level, &Key)> {
        Level::ALL
            .iter()
            .filter_map(|&level| self.selected(level).map(|key| (level, key)))
            .collect()
    }

    /// Cursor one level up; `None` at root
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::Root => None,
            Self::Category { .. } => Some(Self::Root),
            Self::SubCategory { category, .. } => Some(Self::Category {
                category: category.clone(),
            }),
            Self::LeafGroup {
                category,
                sub_category,
                ..
            } => Some(Self::SubCategory {
                category: category.clone(),
                sub_category: sub_category.clone(),
            }),
        }
    }

    /// Cursor one level down; `None` at the item list
    #[must_use]
    pub fn child(&self, key: Key) -> Option<Self> {
        match self {
            Self::Root => Some(Self::Category { category: key }),
            Self::Category { category } => Some(Self::SubCategory {
                category: category.clone(),
                sub_category: key,
            }),
            Self::SubCategory {
                category,
                sub_category,
            } => Some(Self::LeafGroup {
                category: category.clone(),
                sub_category: sub_category.clone(),
                leaf_group: key,
            }),
            Self::LeafGroup { .. } => None,
        }
    }

    /// Cursor cut down to at most `depth` levels
    #[must_use]
    pub fn truncate(&self, depth: usize) -> Self {
        let mut cursor = self.clone();
        while cursor.depth() > depth {
            match cursor.parent() {
                Some(parent) => cursor = parent,
                None => break,
            }
        }
        cursor
    }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for (_, key) in self.keys() {
            write!(f, "/{key}")?;
        }
        Ok(())
    }
}

/// Flat, nullable form of a cursor used for serialization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorFields {
    /// Selected category
    pub category: Option<Key>,
    /// Selected subcategory
    pub sub_category: Option<Key>,
    /// Selected leaf group
    pub leaf_group: Option<Key>,
}

impl From<Cursor> for CursorFields {
    fn from(cursor: Cursor) -> Self {
        Self {
            category: cursor.category().cloned(),
            sub_category: cursor.sub_category().cloned(),
            leaf_group: cursor.leaf_group().cloned(),
        }
    }
}

impl TryFrom<CursorFields> for Cursor {
    type Error = NavigationError;

    fn try_from(fields: CursorFields) -> Result<Self, Self::Error> {
        Cursor::from_fields(fields.category, fields.sub_category, fields.leaf_group)
    }
}

/// Derived UI mode of a hierarchy navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// Depth 0
    CategoryGrid,
    /// Depth 1
    SubCategoryGrid,
    /// Depth 2
    LeafGroupGrid,
    /// Depth 3
    ItemList,
}

impl ViewKind {
    /// View for a cursor of the given depth
    #[inline]
    #[must_use]
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => Self::CategoryGrid,
            1 => Self::SubCategoryGrid,
            2 => Self::LeafGroupGrid,
            _ => Self::ItemList,
        }
    }

    /// Level the cards of this grid select; `None` for the item list
    #[inline]
    #[must_use]
    pub fn child_level(self) -> Option<Level> {
        match self {
            Self::CategoryGrid => Some(Level::Category),
            Self::SubCategoryGrid => Some(Level::SubCategory),
            Self::LeafGroupGrid => Some(Level::LeafGroup),
            Self::ItemList => None,
        }
    }

    /// Check for one of the three grids
    #[inline]
    #[must_use]
    pub fn is_grid(self) -> bool {
        !matches!(self, Self::ItemList)
    }
}

impl Display for ViewKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CategoryGrid => "category grid",
            Self::SubCategoryGrid => "subcategory grid",
            Self::LeafGroupGrid => "leaf group grid",
            Self::ItemList => "item list",
        })
    }
}
