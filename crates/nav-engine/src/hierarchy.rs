//! Hierarchy Navigator
//!
//! Drill-down navigation through the fixed-depth catalog:
//! category grid → subcategory grid → leaf group grid → item list.
//!
//! The navigator owns one [`Cursor`] and a shared handle to the catalog.
//! Every operation replaces the cursor wholesale; selecting a level always
//! clears the levels below it.

use crate::breadcrumb::{Breadcrumb, Crumb};
use crate::command::HierarchyCommand;
use crate::config::NavigatorConfig;
use crate::cursor::{Cursor, ViewKind};
use crate::error::NavigationError;
use crate::navigator::{Navigator, Outcome};
use nav_store::{Catalog, Item, Key, Level};
use serde::Serialize;
use std::sync::Arc;

/// Drill-down navigator over a [`Catalog`]
///
/// # Example
/// ```
/// use nav_engine::{HierarchyNavigator, Navigator, ViewKind};
/// use nav_store::{demo, Key};
/// use std::sync::Arc;
///
/// let catalog = Arc::new(demo::catalog().unwrap());
/// let mut nav = HierarchyNavigator::new(catalog);
///
/// nav.select_category(Some(Key::new("Electronics").unwrap())).unwrap();
/// assert_eq!(nav.view().kind, ViewKind::SubCategoryGrid);
/// assert_eq!(nav.breadcrumb().to_string(), "Home > Electronics");
/// ```
#[derive(Debug, Clone)]
pub struct HierarchyNavigator {
    catalog: Arc<Catalog>,
    cursor: Cursor,
    config: NavigatorConfig,
}

impl HierarchyNavigator {
    /// Create a navigator at the root
    #[inline]
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, NavigatorConfig::default())
    }

    /// Create a navigator at the root with custom configuration
    #[inline]
    #[must_use]
    pub fn with_config(catalog: Arc<Catalog>, config: NavigatorConfig) -> Self {
        Self {
            catalog,
            cursor: Cursor::Root,
            config,
        }
    }

    /// Current cursor
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Current view kind
    #[inline]
    #[must_use]
    pub fn view_kind(&self) -> ViewKind {
        self.cursor.view_kind()
    }

    /// Shared catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Configuration in effect
    #[inline]
    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Select a category (`None` goes home); clears subcategory and leaf group
    pub fn select_category(&mut self, category: Option<Key>) -> Result<Outcome, NavigationError> {
        self.apply(HierarchyCommand::SelectCategory(category))
    }

    /// Select a subcategory under `category` (`None` shows its subcategory grid)
    pub fn select_sub_category(
        &mut self,
        category: Key,
        sub_category: Option<Key>,
    ) -> Result<Outcome, NavigationError> {
        self.apply(HierarchyCommand::SelectSubCategory {
            category,
            sub_category,
        })
    }

    /// Select a leaf group and show its items
    pub fn select_leaf_group(
        &mut self,
        category: Key,
        sub_category: Key,
        leaf_group: Key,
    ) -> Result<Outcome, NavigationError> {
        self.apply(HierarchyCommand::SelectLeafGroup {
            category,
            sub_category,
            leaf_group,
        })
    }

    /// Go back to the category grid
    pub fn home(&mut self) -> Outcome {
        self.replace(Cursor::Root)
    }

    /// Go up one level; no-op at root
    pub fn ascend(&mut self) -> Outcome {
        match self.cursor.parent() {
            Some(parent) => self.replace(parent),
            None => Outcome::Unchanged,
        }
    }

    /// Select `key` in the grid currently shown
    pub fn descend(&mut self, key: Key) -> Result<Outcome, NavigationError> {
        let command = HierarchyCommand::descend(&self.cursor, key)?;
        self.apply(command)
    }

    /// Follow a breadcrumb; the current crumb does nothing
    pub fn activate(&mut self, crumb: &Crumb) -> Result<Outcome, NavigationError> {
        match &crumb.on_activate {
            Some(command) => self.apply(command.clone()),
            None => Ok(Outcome::Unchanged),
        }
    }

    fn check_known(&self, target: &Cursor) -> Result<(), NavigationError> {
        if !self.config.is_strict() {
            return Ok(());
        }
        let unknown = |level: Level, key: &Key| NavigationError::UnknownKey {
            level,
            key: key.clone(),
        };
        if let Some(category) = target.category() {
            if !self.catalog.contains_category(category) {
                return Err(unknown(Level::Category, category));
            }
            if let Some(sub_category) = target.sub_category() {
                if !self.catalog.contains_sub_category(category, sub_category) {
                    return Err(unknown(Level::SubCategory, sub_category));
                }
                if let Some(leaf_group) = target.leaf_group() {
                    if !self
                        .catalog
                        .contains_leaf_group(category, sub_category, leaf_group)
                    {
                        return Err(unknown(Level::LeafGroup, leaf_group));
                    }
                }
            }
        }
        Ok(())
    }

    fn replace(&mut self, target: Cursor) -> Outcome {
        if target == self.cursor {
            return Outcome::Unchanged;
        }
        tracing::debug!(
            from = %self.cursor,
            to = %target,
            view = %target.view_kind(),
            "hierarchy transition"
        );
        self.cursor = target;
        Outcome::Moved
    }
}

impl Navigator for HierarchyNavigator {
    type Command = HierarchyCommand;
    type View<'a> = HierarchyView<'a>;

    fn apply(&mut self, command: HierarchyCommand) -> Result<Outcome, NavigationError> {
        let target = command.target();
        if let Err(err) = self.check_known(&target) {
            tracing::warn!(cursor = %self.cursor, error = %err, "hierarchy navigation rejected");
            return Err(err);
        }
        Ok(self.replace(target))
    }

    fn view(&self) -> HierarchyView<'_> {
        let catalog = self.catalog.as_ref();
        let entries = match &self.cursor {
            Cursor::Root => Entries::Keys(catalog.categories().collect()),
            Cursor::Category { category } => {
                Entries::Keys(catalog.sub_categories(category).collect())
            }
            Cursor::SubCategory {
                category,
                sub_category,
            } => Entries::Keys(catalog.leaf_groups(category, sub_category).collect()),
            Cursor::LeafGroup {
                category,
                sub_category,
                leaf_group,
            } => Entries::Items(catalog.items(category, sub_category, leaf_group)),
        };
        HierarchyView {
            kind: self.cursor.view_kind(),
            cursor: &self.cursor,
            entries,
        }
    }

    fn breadcrumb(&self) -> Breadcrumb {
        Breadcrumb::for_cursor(&self.cursor)
    }
}

/// What the hierarchy navigator shows right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyView<'a> {
    /// Which grid or list
    pub kind: ViewKind,
    /// Cursor the view was resolved from
    pub cursor: &'a Cursor,
    /// Grid cards or items
    pub entries: Entries<'a>,
}

/// Resolved contents of a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum Entries<'a> {
    /// Child keys of a grid, in catalog order
    Keys(Vec<&'a Key>),
    /// Items of a leaf group
    Items(&'a [Item]),
}

impl<'a> Entries<'a> {
    /// Grid keys, if this is a grid
    #[must_use]
    pub fn keys(&self) -> Option<&[&'a Key]> {
        match self {
            Self::Keys(keys) => Some(keys),
            Self::Items(_) => None,
        }
    }

    /// Items, if this is the item list
    #[must_use]
    pub fn items(&self) -> Option<&'a [Item]> {
        match self {
            Self::Keys(_) => None,
            Self::Items(items) => Some(*items),
        }
    }

    /// Number of cards or items
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Keys(keys) => keys.len(),
            Self::Items(items) => items.len(),
        }
    }

    /// Check for an empty view
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Labels of cards or item names
    #[must_use]
    pub fn labels(&self) -> Vec<&'a str> {
        match self {
            Self::Keys(keys) => keys.iter().map(|k| k.as_str()).collect(),
            Self::Items(items) => items.iter().map(|i| i.name.as_str()).collect(),
        }
    }
}
