//! Breadcrumb reconstruction
//!
//! A breadcrumb is a pure projection of navigator state; nothing here is
//! stored. For a hierarchy cursor the trail is Home followed by one crumb
//! per selected level, the last crumb marking the current position. For a
//! graph node the trail is just the node title.

use crate::command::HierarchyCommand;
use crate::cursor::Cursor;
use nav_store::{Level, NodeRecord};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Label shown for the root crumb
pub const HOME_LABEL: &str = "Home";

/// What a crumb stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrumbKind {
    /// Catalog root
    Home,
    /// Selected catalog level
    Level(Level),
    /// Current graph node
    Node,
}

/// One breadcrumb entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Display label
    pub label: String,
    /// Entry kind
    pub kind: CrumbKind,
    /// Whether activating the crumb navigates
    pub clickable: bool,
    /// Command issued on activation; `None` for the current position
    pub on_activate: Option<HierarchyCommand>,
}

impl Crumb {
    /// Check for the current (non-clickable) position
    #[inline]
    #[must_use]
    pub fn is_current(&self) -> bool {
        !self.clickable
    }
}

/// Ordered breadcrumb trail
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Breadcrumb {
    crumbs: Vec<Crumb>,
}

impl Breadcrumb {
    /// Trail for a hierarchy cursor
    ///
    /// Activating a crumb re-selects that level, dropping everything below.
    #[must_use]
    pub fn for_cursor(cursor: &Cursor) -> Self {
        let depth = cursor.depth();
        let mut crumbs = Vec::with_capacity(depth + 1);

        crumbs.push(Self::crumb(HOME_LABEL.to_string(), CrumbKind::Home, cursor, 0));
        for (level, key) in cursor.keys() {
            crumbs.push(Self::crumb(
                key.to_string(),
                CrumbKind::Level(level),
                cursor,
                level.depth(),
            ));
        }

        Self { crumbs }
    }

    /// Trail for a graph node: its title, not clickable
    #[must_use]
    pub fn for_node(node: &NodeRecord) -> Self {
        Self {
            crumbs: vec![Crumb {
                label: node.title.clone(),
                kind: CrumbKind::Node,
                clickable: false,
                on_activate: None,
            }],
        }
    }

    fn crumb(label: String, kind: CrumbKind, cursor: &Cursor, depth: usize) -> Crumb {
        let clickable = depth < cursor.depth();
        Crumb {
            label,
            kind,
            clickable,
            on_activate: clickable.then(|| HierarchyCommand::select(&cursor.truncate(depth))),
        }
    }

    /// All crumbs, root first
    #[inline]
    #[must_use]
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// Current position (last crumb)
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&Crumb> {
        self.crumbs.last()
    }

    /// Labels, root first
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    /// Number of crumbs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    /// Check for empty trail
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    /// Iterate root first
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Crumb> {
        self.crumbs.iter()
    }
}

impl Display for Breadcrumb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(" > "))
    }
}
