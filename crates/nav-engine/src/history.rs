//! History stack
//!
//! Unbounded undo record of previously visited positions. Pushing happens
//! once per forward move, revisits included; popping discards the entry.
//! There is no redo side.

use serde::{Deserialize, Serialize};

/// LIFO stack of visited positions, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryStack<T> {
    entries: Vec<T>,
}

impl<T> HistoryStack<T> {
    /// Create empty stack
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a position on top
    #[inline]
    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Remove and return the most recent position
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop()
    }

    /// Most recent position
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.entries.last()
    }

    /// Number of recorded positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for empty stack
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, oldest first
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Iterate oldest first
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Drop every entry
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for HistoryStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a HistoryStack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
