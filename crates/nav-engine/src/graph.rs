//! Graph Navigator
//!
//! Free movement through a [`ChapterGraph`] with a LIFO back stack.
//!
//! `go_to` is not restricted to linked nodes: any node in the graph can be
//! entered (the menu shows all of them). Links are exposed through the view
//! as suggestions. Going to the node already shown still pushes it, so a
//! later `go_back` returns to the same node.

use crate::breadcrumb::Breadcrumb;
use crate::command::GraphCommand;
use crate::error::NavigationError;
use crate::history::HistoryStack;
use crate::navigator::{Navigator, Outcome};
use nav_store::{ChapterGraph, NodeId, NodeRecord};
use serde::Serialize;
use std::sync::Arc;

/// Navigator over a chapter graph
///
/// # Example
/// ```
/// use nav_engine::GraphNavigator;
/// use nav_store::demo;
/// use std::sync::Arc;
///
/// let mut nav = GraphNavigator::new(Arc::new(demo::storybook().unwrap()));
/// nav.go_to("chapter4").unwrap();
/// assert_eq!(nav.history_len(), 1);
///
/// let back = nav.go_back().unwrap();
/// assert_eq!(back.id.as_str(), "chapter1");
/// assert!(!nav.can_go_back());
/// ```
#[derive(Debug, Clone)]
pub struct GraphNavigator {
    graph: Arc<ChapterGraph>,
    current: NodeId,
    history: HistoryStack<NodeId>,
}

impl GraphNavigator {
    /// Create a navigator on the graph's start node with empty history
    #[must_use]
    pub fn new(graph: Arc<ChapterGraph>) -> Self {
        let current = graph.start_id().clone();
        Self {
            graph,
            current,
            history: HistoryStack::new(),
        }
    }

    /// Create a navigator on `start` instead of the graph's start node
    pub fn starting_at(graph: Arc<ChapterGraph>, start: &str) -> Result<Self, NavigationError> {
        let Some(record) = graph.get(start) else {
            return Err(NavigationError::UnknownNode(start.to_string()));
        };
        let current = record.id.clone();
        Ok(Self {
            graph,
            current,
            history: HistoryStack::new(),
        })
    }

    /// Move to `id`, pushing the current node onto the history
    ///
    /// An unknown `id` leaves node and history untouched.
    pub fn go_to(&mut self, id: &str) -> Result<&NodeRecord, NavigationError> {
        let Some(target) = self.graph.get(id) else {
            tracing::warn!(current = %self.current, target = id, "graph navigation rejected");
            return Err(NavigationError::UnknownNode(id.to_string()));
        };
        let target = target.id.clone();

        let depth = self.history.len() + 1;
        tracing::debug!(from = %self.current, to = %target, depth, "go to");
        let previous = std::mem::replace(&mut self.current, target);
        self.history.push(previous);
        Ok(self.current())
    }

    /// Return to the most recently recorded node
    ///
    /// Returns `None` and changes nothing when the history is empty.
    pub fn go_back(&mut self) -> Option<&NodeRecord> {
        let previous = self.history.pop()?;
        let depth = self.history.len();
        tracing::debug!(from = %self.current, to = %previous, depth, "go back");
        self.current = previous;
        Some(self.current())
    }

    /// Node currently shown
    #[must_use]
    pub fn current(&self) -> &NodeRecord {
        // current is always a node of the graph
        &self.graph[self.current.as_str()]
    }

    /// Id of the node currently shown
    #[inline]
    #[must_use]
    pub fn current_id(&self) -> &NodeId {
        &self.current
    }

    /// Back stack, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &HistoryStack<NodeId> {
        &self.history
    }

    /// Number of recorded nodes
    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether `go_back` would move
    #[inline]
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Shared graph
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &Arc<ChapterGraph> {
        &self.graph
    }

    /// Every node in load order, flagging the current one
    #[must_use]
    pub fn menu(&self) -> Vec<MenuEntry<'_>> {
        self.graph
            .nodes()
            .map(|node| MenuEntry {
                id: &node.id,
                title: &node.title,
                current: node.id == self.current,
            })
            .collect()
    }
}

impl Navigator for GraphNavigator {
    type Command = GraphCommand;
    type View<'a> = NodeView<'a>;

    fn apply(&mut self, command: GraphCommand) -> Result<Outcome, NavigationError> {
        match command {
            GraphCommand::GoTo(id) => self.go_to(&id).map(|_| Outcome::Moved),
            GraphCommand::GoBack => Ok(if self.go_back().is_some() {
                Outcome::Moved
            } else {
                Outcome::Unchanged
            }),
        }
    }

    fn view(&self) -> NodeView<'_> {
        let node = self.current();
        NodeView {
            node,
            related: self.graph.links(&node.id).collect(),
            can_go_back: self.can_go_back(),
            history_len: self.history.len(),
        }
    }

    fn breadcrumb(&self) -> Breadcrumb {
        Breadcrumb::for_node(self.current())
    }
}

/// What the graph navigator shows right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView<'a> {
    /// Current node
    pub node: &'a NodeRecord,
    /// Linked nodes, in link order
    pub related: Vec<&'a NodeRecord>,
    /// Back control enabled
    pub can_go_back: bool,
    /// Depth of the back stack
    pub history_len: usize,
}

impl NodeView<'_> {
    /// Titles of linked nodes
    #[must_use]
    pub fn related_titles(&self) -> Vec<&str> {
        self.related.iter().map(|n| n.title.as_str()).collect()
    }
}

/// One row of the node menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry<'a> {
    /// Node id
    pub id: &'a NodeId,
    /// Node title
    pub title: &'a str,
    /// Node currently shown
    pub current: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn navigator() -> GraphNavigator {
        GraphNavigator::new(Arc::new(nav_store::demo::storybook().unwrap()))
    }

    #[test]
    fn starts_on_start_node() {
        let nav = navigator();
        assert_eq!(nav.current_id().as_str(), "chapter1");
        assert!(!nav.can_go_back());
        assert_eq!(nav.breadcrumb().to_string(), "Chapter 1: The Beginning");
    }

    #[test]
    fn go_to_and_back() {
        let mut nav = navigator();
        nav.go_to("chapter4").unwrap();
        nav.go_to("chapter1").unwrap();
        let ids: Vec<_> = nav.history().iter().map(NodeId::as_str).collect();
        assert_eq!(ids, vec!["chapter1", "chapter4"]);

        assert_eq!(nav.go_back().unwrap().id.as_str(), "chapter4");
        assert_eq!(nav.go_back().unwrap().id.as_str(), "chapter1");
        assert!(nav.go_back().is_none());
        assert_eq!(nav.current_id().as_str(), "chapter1");
    }

    #[test]
    fn unknown_node_changes_nothing() {
        let mut nav = navigator();
        nav.go_to("chapter2").unwrap();

        let err = nav.go_to("chapter9").unwrap_err();
        assert_eq!(err, NavigationError::UnknownNode("chapter9".to_string()));
        assert_eq!(nav.current_id().as_str(), "chapter2");
        assert_eq!(nav.history_len(), 1);

        assert!(nav.go_to("").unwrap_err().is_unknown_reference());
        assert_eq!(nav.history_len(), 1);
    }

    #[test]
    fn go_to_current_still_records() {
        let mut nav = navigator();
        nav.go_to("chapter1").unwrap();
        assert_eq!(nav.history_len(), 1);
        assert_eq!(nav.go_back().unwrap().id.as_str(), "chapter1");
    }

    #[test]
    fn go_to_is_not_restricted_to_links() {
        let mut nav = navigator();
        assert!(!nav.current().links.iter().any(|l| l.as_str() == "chapter5"));
        nav.go_to("chapter5").unwrap();
        assert_eq!(nav.current_id().as_str(), "chapter5");
    }

    #[test]
    fn view_lists_related_nodes() {
        let mut nav = navigator();
        nav.go_to("chapter4").unwrap();
        let view = nav.view();

        assert_eq!(
            view.related_titles(),
            vec!["Chapter 1: The Beginning", "Chapter 5: The Climax"]
        );
        assert!(view.can_go_back);
        assert_eq!(view.history_len, 1);
    }

    #[test]
    fn menu_flags_current() {
        let mut nav = navigator();
        nav.go_to("chapter3").unwrap();
        let current: Vec<_> = nav
            .menu()
            .into_iter()
            .filter(|e| e.current)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(current, vec!["chapter3"]);
        assert_eq!(nav.menu().len(), 5);
    }

    #[test]
    fn starting_at_validates_node() {
        let graph = Arc::new(nav_store::demo::storybook().unwrap());
        let nav = GraphNavigator::starting_at(Arc::clone(&graph), "chapter3").unwrap();
        assert_eq!(nav.current().title, "Chapter 3: The Revelation");
        assert!(GraphNavigator::starting_at(graph, "epilogue").is_err());
    }

    #[test]
    fn apply_maps_outcomes() {
        let mut nav = navigator();
        assert_eq!(nav.apply(GraphCommand::GoBack), Ok(Outcome::Unchanged));
        assert_eq!(
            nav.apply(GraphCommand::GoTo(NodeId::new("chapter2").unwrap())),
            Ok(Outcome::Moved)
        );
        assert_eq!(nav.apply(GraphCommand::GoBack), Ok(Outcome::Moved));
    }
}
