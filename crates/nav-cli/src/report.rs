//! Text and JSON rendering of navigator state

use nav_engine::{Entries, GraphNavigator, HierarchyNavigator, NavigationError, Navigator, Outcome};
use nav_store::{Catalog, ChapterGraph};
use serde_json::{json, Value};
use std::fmt::Write as _;

/// Output style selected by `--json`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Text,
    Json,
}

impl Format {
    pub(crate) fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

pub(crate) fn catalog_summary(catalog: &Catalog, format: Format) -> String {
    match format {
        Format::Text => format!(
            "catalog: {} categories, {} items",
            catalog.category_count(),
            catalog.item_count()
        ),
        Format::Json => json!({
            "catalog": {
                "categories": catalog.category_count(),
                "items": catalog.item_count(),
            }
        })
        .to_string(),
    }
}

pub(crate) fn graph_summary(graph: &ChapterGraph, format: Format) -> String {
    match format {
        Format::Text => format!(
            "graph: {} nodes, {} links, start {}",
            graph.len(),
            graph.link_count(),
            graph.start_id()
        ),
        Format::Json => json!({
            "graph": {
                "nodes": graph.len(),
                "links": graph.link_count(),
                "start": graph.start_id(),
            }
        })
        .to_string(),
    }
}

/// State of a hierarchy navigator after `step`
pub(crate) fn hierarchy_state(
    step: &str,
    result: &Result<Outcome, NavigationError>,
    nav: &HierarchyNavigator,
    format: Format,
) -> String {
    let view = nav.view();
    let trail = nav.breadcrumb();
    match format {
        Format::Json => json!({
            "step": step,
            "outcome": outcome_value(result),
            "breadcrumb": trail.labels(),
            "view": view,
        })
        .to_string(),
        Format::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "> {step}{}", outcome_suffix(result));
            let _ = writeln!(out, "{trail}");
            match &view.entries {
                Entries::Keys(keys) if keys.is_empty() => {
                    let _ = write!(out, "  [{}] (empty)", view.kind);
                }
                Entries::Keys(keys) => {
                    let labels: Vec<_> = keys.iter().map(|k| k.as_str()).collect();
                    let _ = write!(out, "  [{}] {}", view.kind, labels.join(", "));
                }
                Entries::Items(items) => {
                    let _ = write!(out, "  [{}] {} items", view.kind, items.len());
                    for item in *items {
                        let _ = write!(out, "\n    {:<16} {}", item.name, item.price);
                    }
                }
            }
            out
        }
    }
}

/// State of a graph navigator after `step`
pub(crate) fn graph_state(
    step: &str,
    result: &Result<Outcome, NavigationError>,
    nav: &GraphNavigator,
    format: Format,
) -> String {
    let view = nav.view();
    match format {
        Format::Json => json!({
            "step": step,
            "outcome": outcome_value(result),
            "current": view.node.id,
            "title": view.node.title,
            "related": view.related.iter().map(|n| &n.id).collect::<Vec<_>>(),
            "history": nav.history(),
        })
        .to_string(),
        Format::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "> {step}{}", outcome_suffix(result));
            let _ = writeln!(out, "{}", view.node.title);
            let _ = writeln!(out, "  related: {}", view.related_titles().join(", "));
            let _ = write!(
                out,
                "  history: {}{}",
                view.history_len,
                if view.can_go_back { "" } else { " (back disabled)" }
            );
            out
        }
    }
}

fn outcome_value(result: &Result<Outcome, NavigationError>) -> Value {
    match result {
        Ok(outcome) => json!(outcome),
        Err(err) => json!({ "error": err.to_string() }),
    }
}

fn outcome_suffix(result: &Result<Outcome, NavigationError>) -> String {
    match result {
        Ok(Outcome::Moved) => String::new(),
        Ok(Outcome::Unchanged) => " (unchanged)".to_string(),
        Err(err) => format!(" rejected: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_store::{demo, Key};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn text_hierarchy_lists_items() {
        let mut nav = HierarchyNavigator::new(Arc::new(demo::catalog().unwrap()));
        let result = nav.select_leaf_group(
            Key::new("Fashion").unwrap(),
            Key::new("MensWear").unwrap(),
            Key::new("Shirts").unwrap(),
        );
        let out = hierarchy_state("leaf:Shirts", &result, &nav, Format::Text);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines[0], "> leaf:Shirts");
        assert_eq!(lines[1], "Home > Fashion > MensWear > Shirts");
        assert_eq!(lines[2], "  [item list] 2 items");
        assert!(lines[3].contains("Cotton Polo"));
    }

    #[test]
    fn json_graph_reports_rejection() {
        let mut nav = GraphNavigator::new(Arc::new(demo::storybook().unwrap()));
        let result = nav.go_to("chapter9").map(|_| Outcome::Moved);
        let out = graph_state("goto:chapter9", &result, &nav, Format::Json);
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["outcome"]["error"], "unknown node: chapter9");
        assert_eq!(value["current"], "chapter1");
        assert_eq!(value["history"], json!([]));
    }

    #[test]
    fn summaries() {
        let catalog = demo::catalog().unwrap();
        assert_eq!(
            catalog_summary(&catalog, Format::Text),
            "catalog: 2 categories, 12 items"
        );
        let graph = demo::storybook().unwrap();
        assert_eq!(
            graph_summary(&graph, Format::Text),
            "graph: 5 nodes, 10 links, start chapter1"
        );
    }
}
