//! Shared navigator shape
//!
//! Both navigators take a command, move (or refuse to), and expose a view
//! and a breadcrumb derived from their state.

use crate::breadcrumb::Breadcrumb;
use crate::error::NavigationError;
use serde::Serialize;

/// Result of an accepted command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// State changed
    Moved,
    /// Command accepted but state is identical (e.g. going back with no history)
    Unchanged,
}

impl Outcome {
    /// Check for a state change
    #[inline]
    #[must_use]
    pub fn is_moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Cursor over read-only content
///
/// A rejected command returns an error and must leave the navigator
/// untouched.
pub trait Navigator {
    /// Command accepted by [`Navigator::apply`]
    type Command;

    /// Rendered view, borrowing from the navigator's content
    type View<'a>
    where
        Self: 'a;

    /// Apply one command atomically
    fn apply(&mut self, command: Self::Command) -> Result<Outcome, NavigationError>;

    /// Current view
    fn view(&self) -> Self::View<'_>;

    /// Current breadcrumb trail
    fn breadcrumb(&self) -> Breadcrumb;
}
