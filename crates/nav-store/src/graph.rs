//! Chapter graph - hypertext-like node set
//!
//! The primary interface is [`GraphBuilder`]: records are added one by one,
//! then [`GraphBuilder::build`] checks link integrity and produces a sealed
//! [`ChapterGraph`]. A `ChapterGraph` has no public constructor, so every
//! graph a navigator sees has passed validation and every link resolves.
//!
//! Cycles and self-links are valid; the graph is not a DAG.

use crate::error::StoreError;
use crate::id::NodeId;
use indexmap::IndexMap;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One node as ingested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Unique id
    pub id: NodeId,
    /// Display title
    pub title: String,
    /// Body payload
    #[serde(alias = "content", default)]
    pub body: String,
    /// Outgoing link targets, in display order
    #[serde(alias = "linkedChapters", default)]
    pub links: Vec<NodeId>,
}

impl NodeRecord {
    /// Create a record without links
    #[inline]
    #[must_use]
    pub fn new(id: NodeId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            links: Vec::new(),
        }
    }

    /// With outgoing links
    #[inline]
    #[must_use]
    pub fn with_links(mut self, links: impl IntoIterator<Item = NodeId>) -> Self {
        self.links = links.into_iter().collect();
        self
    }
}

/// Flat dataset document: optional start node plus records
///
/// A bare list of records is accepted too; the first record is then the
/// start node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GraphDataset {
    /// `{ start, nodes }`
    Document {
        /// Designated start node
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<NodeId>,
        /// Node records in display order
        nodes: Vec<NodeRecord>,
    },
    /// `[record, ...]`
    Records(Vec<NodeRecord>),
}

#[derive(Deserialize)]
struct DocumentFields {
    #[serde(default)]
    start: Option<NodeId>,
    nodes: Vec<NodeRecord>,
}

// Dispatch on the document shape so record errors keep their own message
impl<'de> Deserialize<'de> for GraphDataset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DatasetVisitor;

        impl<'de> Visitor<'de> for DatasetVisitor {
            type Value = GraphDataset;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a `{ start, nodes }` document or a list of node records")
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let fields = DocumentFields::deserialize(MapAccessDeserializer::new(map))?;
                Ok(GraphDataset::Document {
                    start: fields.start,
                    nodes: fields.nodes,
                })
            }

            fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                Vec::deserialize(SeqAccessDeserializer::new(seq)).map(GraphDataset::Records)
            }
        }

        deserializer.deserialize_any(DatasetVisitor)
    }
}

impl GraphDataset {
    /// Validate into a graph
    pub fn into_graph(self) -> Result<ChapterGraph, StoreError> {
        let (start, nodes) = match self {
            Self::Document { start, nodes } => (start, nodes),
            Self::Records(nodes) => (None, nodes),
        };
        let mut builder = GraphBuilder::new();
        if let Some(start) = start {
            builder.set_start(start);
        }
        for record in nodes {
            builder.add_node(record)?;
        }
        builder.build()
    }
}

/// Builder for validated chapter graphs
///
/// Usage:
/// ```
/// use nav_store::{GraphBuilder, NodeId, NodeRecord};
///
/// let a = NodeId::new("a").unwrap();
/// let b = NodeId::new("b").unwrap();
///
/// let mut builder = GraphBuilder::new();
/// builder.add_node(NodeRecord::new(a.clone(), "A", "").with_links([b.clone()])).unwrap();
/// builder.add_node(NodeRecord::new(b.clone(), "B", "").with_links([a.clone()])).unwrap();
///
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.start().id, a);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: IndexMap<NodeId, NodeRecord>,
    start: Option<NodeId>,
}

impl GraphBuilder {
    /// Create an empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes added so far
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Designate the start node (defaults to the first node added)
    pub fn set_start(&mut self, start: NodeId) -> &mut Self {
        self.start = Some(start);
        self
    }

    /// Add a node; link targets may be added later
    pub fn add_node(&mut self, record: NodeRecord) -> Result<&mut Self, StoreError> {
        if self.nodes.contains_key(&record.id) {
            return Err(StoreError::DuplicateNode(record.id));
        }
        self.nodes.insert(record.id.clone(), record);
        Ok(self)
    }

    /// Validate and seal the graph
    ///
    /// # Checks
    /// 1. At least one node
    /// 2. The start node exists
    /// 3. Every link resolves to a node
    pub fn build(self) -> Result<ChapterGraph, StoreError> {
        let start = match self.start {
            Some(start) => start,
            None => self
                .nodes
                .keys()
                .next()
                .cloned()
                .ok_or(StoreError::EmptyGraph)?,
        };
        if self.nodes.is_empty() {
            return Err(StoreError::EmptyGraph);
        }
        if !self.nodes.contains_key(&start) {
            return Err(StoreError::UnknownStart(start));
        }

        for record in self.nodes.values() {
            if let Some(missing) = record.links.iter().find(|to| !self.nodes.contains_key(*to)) {
                return Err(StoreError::DanglingLink {
                    from: record.id.clone(),
                    to: missing.clone(),
                });
            }
        }

        let link_count = self.nodes.values().map(|r| r.links.len()).sum::<usize>();
        tracing::debug!(
            nodes = self.nodes.len(),
            links = link_count,
            start = %start,
            "chapter graph validated"
        );

        Ok(ChapterGraph {
            nodes: self.nodes,
            start,
        })
    }
}

/// Validated, read-only chapter graph
///
/// Can only be obtained from [`GraphBuilder::build`] (or a loader, which
/// goes through it). Node order is load order and doubles as menu order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterGraph {
    nodes: IndexMap<NodeId, NodeRecord>,
    start: NodeId,
}

impl ChapterGraph {
    /// Designated start node
    #[must_use]
    pub fn start(&self) -> &NodeRecord {
        // start is checked by the builder
        &self[self.start.as_str()]
    }

    /// Id of the start node
    #[inline]
    #[must_use]
    pub fn start_id(&self) -> &NodeId {
        &self.start
    }

    /// Look up a node
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NodeRecord> {
        self.nodes.get(id)
    }

    /// Check a node exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes in load order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NodeRecord> + '_ {
        self.nodes.values()
    }

    /// Outgoing neighbours of `id`, resolved, in link order
    ///
    /// Empty if `id` is unknown.
    pub fn links<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a NodeRecord> + 'a {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|record| record.links.iter())
            .filter_map(|to| self.nodes.get(to))
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a built graph
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of links
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.nodes.values().map(|r| r.links.len()).sum()
    }

    /// Export back to a dataset document
    #[must_use]
    pub fn to_dataset(&self) -> GraphDataset {
        GraphDataset::Document {
            start: Some(self.start.clone()),
            nodes: self.nodes.values().cloned().collect(),
        }
    }
}

impl<'a> std::ops::Index<&'a str> for ChapterGraph {
    type Output = NodeRecord;

    /// # Panics
    /// If `id` is not in the graph. Use [`ChapterGraph::get`] for untrusted ids.
    fn index(&self, id: &'a str) -> &NodeRecord {
        &self.nodes[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::new(s).unwrap()
    }

    fn record(s: &str, links: &[&str]) -> NodeRecord {
        NodeRecord::new(id(s), s.to_uppercase(), "").with_links(links.iter().map(|l| id(l)))
    }

    #[test]
    fn build_defaults_start_to_first() {
        let mut builder = GraphBuilder::new();
        builder.add_node(record("b", &["a"])).unwrap();
        builder.add_node(record("a", &["b"])).unwrap();

        let graph = builder.build().unwrap();
        assert_eq!(graph.start_id().as_str(), "b");
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn rejects_duplicate_node() {
        let mut builder = GraphBuilder::new();
        builder.add_node(record("a", &[])).unwrap();
        let err = builder.add_node(record("a", &[])).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateNode(ref n) if n.as_str() == "a"));
    }

    #[test]
    fn rejects_dangling_link() {
        let mut builder = GraphBuilder::new();
        builder.add_node(record("a", &["ghost"])).unwrap();

        let err = builder.build().unwrap_err();
        match err {
            StoreError::DanglingLink { from, to } => {
                assert_eq!(from.as_str(), "a");
                assert_eq!(to.as_str(), "ghost");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unknown_start_and_empty() {
        let mut builder = GraphBuilder::new();
        builder.set_start(id("z"));
        builder.add_node(record("a", &[])).unwrap();
        assert!(matches!(builder.build(), Err(StoreError::UnknownStart(_))));

        assert!(matches!(GraphBuilder::new().build(), Err(StoreError::EmptyGraph)));
    }

    #[test]
    fn cycles_and_self_links_are_valid() {
        let mut builder = GraphBuilder::new();
        builder.add_node(record("a", &["a", "b"])).unwrap();
        builder.add_node(record("b", &["a"])).unwrap();

        let graph = builder.build().unwrap();
        let linked: Vec<_> = graph.links("a").map(|n| n.id.as_str()).collect();
        assert_eq!(linked, vec!["a", "b"]);
        assert_eq!(graph.link_count(), 3);
    }

    #[test]
    fn links_of_unknown_node_are_empty() {
        let mut builder = GraphBuilder::new();
        builder.add_node(record("a", &[])).unwrap();
        let graph = builder.build().unwrap();
        assert_eq!(graph.links("nope").count(), 0);
    }

    #[test]
    fn dataset_reports_bad_record() {
        let list = r#"[{"id": "chapter1", "body": "no title"}]"#;
        let err = serde_json::from_str::<GraphDataset>(list).unwrap_err();
        assert!(err.to_string().contains("missing field `title`"), "{err}");

        let document = r#"{"start": "a", "nodes": [{"id": "a", "title": "A", "links": "b"}]}"#;
        let err = serde_json::from_str::<GraphDataset>(document).unwrap_err();
        assert!(err.to_string().contains("invalid type"), "{err}");

        let err = serde_json::from_str::<GraphDataset>("42").unwrap_err();
        assert!(err.to_string().contains("list of node records"), "{err}");
    }

    #[test]
    fn dataset_accepts_camel_case_aliases() {
        let json = r#"[
            {"id": "chapter1", "title": "One", "content": "text", "linkedChapters": ["chapter2"]},
            {"id": "chapter2", "title": "Two", "content": "more", "linkedChapters": []}
        ]"#;
        let dataset: GraphDataset = serde_json::from_str(json).unwrap();
        let graph = dataset.into_graph().unwrap();
        assert_eq!(graph.start().body, "text");
        assert_eq!(graph.links("chapter1").count(), 1);
    }
}
