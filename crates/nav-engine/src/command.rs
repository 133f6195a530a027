//! Navigation commands
//!
//! UI events ("user selected X") are translated into commands before they
//! reach a navigator. Hierarchy commands carry every ancestor key, so the
//! cursor after a command depends on the command alone.

use crate::cursor::{Cursor, ViewKind};
use crate::error::NavigationError;
use nav_store::{Key, Level, NodeId};
use serde::{Deserialize, Serialize};

/// Command for a hierarchy navigator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HierarchyCommand {
    /// Select a category, or go home with `None`; clears deeper levels
    SelectCategory(Option<Key>),
    /// Select a subcategory, or return to the subcategory grid with `None`
    SelectSubCategory {
        /// Ancestor category
        category: Key,
        /// Subcategory to select
        sub_category: Option<Key>,
    },
    /// Select a leaf group and show its items
    SelectLeafGroup {
        /// Ancestor category
        category: Key,
        /// Ancestor subcategory
        sub_category: Key,
        /// Leaf group to select
        leaf_group: Key,
    },
}

impl HierarchyCommand {
    /// Cursor after this command
    #[must_use]
    pub fn target(&self) -> Cursor {
        match self.clone() {
            Self::SelectCategory(None) => Cursor::Root,
            Self::SelectCategory(Some(category))
            | Self::SelectSubCategory {
                category,
                sub_category: None,
            } => Cursor::Category { category },
            Self::SelectSubCategory {
                category,
                sub_category: Some(sub_category),
            } => Cursor::SubCategory {
                category,
                sub_category,
            },
            Self::SelectLeafGroup {
                category,
                sub_category,
                leaf_group,
            } => Cursor::LeafGroup {
                category,
                sub_category,
                leaf_group,
            },
        }
    }

    /// View shown after this command
    #[inline]
    #[must_use]
    pub fn target_view(&self) -> ViewKind {
        self.target().view_kind()
    }

    /// Command that lands on `cursor`
    #[must_use]
    pub fn select(cursor: &Cursor) -> Self {
        match cursor.clone() {
            Cursor::Root => Self::SelectCategory(None),
            Cursor::Category { category } => Self::SelectCategory(Some(category)),
            Cursor::SubCategory {
                category,
                sub_category,
            } => Self::SelectSubCategory {
                category,
                sub_category: Some(sub_category),
            },
            Cursor::LeafGroup {
                category,
                sub_category,
                leaf_group,
            } => Self::SelectLeafGroup {
                category,
                sub_category,
                leaf_group,
            },
        }
    }

    /// Select `key` at `level`, keeping the ancestors already in `cursor`
    pub fn select_at(cursor: &Cursor, level: Level, key: Key) -> Result<Self, NavigationError> {
        let ancestor = |missing: Level| {
            cursor
                .selected(missing)
                .cloned()
                .ok_or(NavigationError::StructuralPrecondition { level, missing })
        };
        Ok(match level {
            Level::Category => Self::SelectCategory(Some(key)),
            Level::SubCategory => Self::SelectSubCategory {
                category: ancestor(Level::Category)?,
                sub_category: Some(key),
            },
            Level::LeafGroup => Self::SelectLeafGroup {
                category: ancestor(Level::Category)?,
                sub_category: ancestor(Level::SubCategory)?,
                leaf_group: key,
            },
        })
    }

    /// Command emitted by a grid card `key` shown at `cursor`
    pub fn descend(cursor: &Cursor, key: Key) -> Result<Self, NavigationError> {
        cursor
            .child(key)
            .map(|child| Self::select(&child))
            .ok_or(NavigationError::AtLeaf)
    }
}

/// Command for a graph navigator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphCommand {
    /// Move to a node, recording the current one
    GoTo(NodeId),
    /// Return to the most recently recorded node
    GoBack,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Key {
        Key::new(s).unwrap()
    }

    #[test]
    fn target_view_depends_on_command_only() {
        assert_eq!(HierarchyCommand::SelectCategory(None).target_view(), ViewKind::CategoryGrid);
        assert_eq!(
            HierarchyCommand::SelectCategory(Some(key("Fashion"))).target_view(),
            ViewKind::SubCategoryGrid
        );
        assert_eq!(
            HierarchyCommand::SelectSubCategory {
                category: key("Fashion"),
                sub_category: None
            }
            .target_view(),
            ViewKind::SubCategoryGrid
        );
        assert_eq!(
            HierarchyCommand::SelectSubCategory {
                category: key("Fashion"),
                sub_category: Some(key("MensWear"))
            }
            .target_view(),
            ViewKind::LeafGroupGrid
        );
        assert_eq!(
            HierarchyCommand::SelectLeafGroup {
                category: key("Fashion"),
                sub_category: key("MensWear"),
                leaf_group: key("Shirts"),
            }
            .target_view(),
            ViewKind::ItemList
        );
    }

    #[test]
    fn select_round_trips_through_target() {
        let cursor = Cursor::SubCategory {
            category: key("Electronics"),
            sub_category: key("Smartphones"),
        };
        assert_eq!(HierarchyCommand::select(&cursor).target(), cursor);
    }

    #[test]
    fn select_at_requires_ancestors() {
        let at_category = Cursor::Category {
            category: key("Electronics"),
        };
        let cmd = HierarchyCommand::select_at(&at_category, Level::SubCategory, key("Computers"))
            .unwrap();
        assert_eq!(cmd.target_view(), ViewKind::LeafGroupGrid);

        let err = HierarchyCommand::select_at(&at_category, Level::LeafGroup, key("Laptops"))
            .unwrap_err();
        assert_eq!(
            err,
            NavigationError::StructuralPrecondition {
                level: Level::LeafGroup,
                missing: Level::SubCategory
            }
        );

        let err = HierarchyCommand::select_at(&Cursor::Root, Level::SubCategory, key("Computers"))
            .unwrap_err();
        assert!(err.is_caller_bug());
    }

    #[test]
    fn select_at_replaces_deeper_levels() {
        let at_leaf = Cursor::LeafGroup {
            category: key("Electronics"),
            sub_category: key("Computers"),
            leaf_group: key("Laptops"),
        };
        let cmd = HierarchyCommand::select_at(&at_leaf, Level::SubCategory, key("Smartphones"))
            .unwrap();
        assert_eq!(
            cmd.target(),
            Cursor::SubCategory {
                category: key("Electronics"),
                sub_category: key("Smartphones"),
            }
        );
    }

    #[test]
    fn descend_from_each_grid() {
        let cmd = HierarchyCommand::descend(&Cursor::Root, key("Electronics")).unwrap();
        assert_eq!(cmd, HierarchyCommand::SelectCategory(Some(key("Electronics"))));

        let at_sub = Cursor::SubCategory {
            category: key("Electronics"),
            sub_category: key("Computers"),
        };
        let cmd = HierarchyCommand::descend(&at_sub, key("Laptops")).unwrap();
        assert_eq!(cmd.target_view(), ViewKind::ItemList);

        let at_leaf = cmd.target();
        assert_eq!(
            HierarchyCommand::descend(&at_leaf, key("More")),
            Err(NavigationError::AtLeaf)
        );
    }
}
