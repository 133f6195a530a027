//! Testing utilities for the navigation workspace
//!
//! Shared fixtures, proptest strategies and invariant assertions.

#![allow(missing_docs)]

use nav_engine::{
    Cursor, GraphCommand, GraphNavigator, HierarchyCommand, HierarchyNavigator, NavigationError,
    Navigator, NavigatorConfig, Outcome,
};
use nav_store::{demo, Catalog, ChapterGraph, Key, NodeId};
use proptest::prelude::*;
use std::sync::Arc;

pub const DEMO_CATEGORIES: &[&str] = &["Electronics", "Fashion"];
pub const DEMO_SUB_CATEGORIES: &[&str] = &["Computers", "Smartphones", "MensWear"];
pub const DEMO_LEAF_GROUPS: &[&str] = &[
    "Laptops", "Desktops", "Apple", "Samsung", "Shirts", "Pants",
];
pub const DEMO_CHAPTERS: &[&str] = &["chapter1", "chapter2", "chapter3", "chapter4", "chapter5"];

pub fn key(s: &str) -> Key {
    Key::new(s).unwrap()
}

pub fn node_id(s: &str) -> NodeId {
    NodeId::new(s).unwrap()
}

pub fn demo_catalog() -> Arc<Catalog> {
    Arc::new(demo::catalog().unwrap())
}

pub fn demo_storybook() -> Arc<ChapterGraph> {
    Arc::new(demo::storybook().unwrap())
}

pub fn hierarchy_navigator() -> HierarchyNavigator {
    HierarchyNavigator::new(demo_catalog())
}

pub fn strict_hierarchy_navigator() -> HierarchyNavigator {
    HierarchyNavigator::with_config(demo_catalog(), NavigatorConfig::strict())
}

pub fn graph_navigator() -> GraphNavigator {
    GraphNavigator::new(demo_storybook())
}

/// One user action on a hierarchy navigator
#[derive(Debug, Clone, PartialEq)]
pub enum HierarchyStep {
    Apply(HierarchyCommand),
    Home,
    Ascend,
    Descend(Key),
}

pub fn apply_step(
    nav: &mut HierarchyNavigator,
    step: HierarchyStep,
) -> Result<Outcome, NavigationError> {
    match step {
        HierarchyStep::Apply(command) => nav.apply(command),
        HierarchyStep::Home => Ok(nav.home()),
        HierarchyStep::Ascend => Ok(nav.ascend()),
        HierarchyStep::Descend(key) => nav.descend(key),
    }
}

// Mostly demo keys, sometimes an unknown one
fn key_from(pool: &'static [&'static str]) -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => proptest::sample::select(pool).prop_map(key),
        1 => "[A-Z][a-z]{2,8}".prop_map(|s| key(&s)),
    ]
}

pub fn category_key() -> impl Strategy<Value = Key> {
    key_from(DEMO_CATEGORIES)
}

pub fn sub_category_key() -> impl Strategy<Value = Key> {
    key_from(DEMO_SUB_CATEGORIES)
}

pub fn leaf_group_key() -> impl Strategy<Value = Key> {
    key_from(DEMO_LEAF_GROUPS)
}

pub fn any_key() -> impl Strategy<Value = Key> {
    prop_oneof![category_key(), sub_category_key(), leaf_group_key()]
}

pub fn hierarchy_command() -> impl Strategy<Value = HierarchyCommand> {
    prop_oneof![
        proptest::option::of(category_key()).prop_map(HierarchyCommand::SelectCategory),
        (category_key(), proptest::option::of(sub_category_key())).prop_map(
            |(category, sub_category)| HierarchyCommand::SelectSubCategory {
                category,
                sub_category,
            }
        ),
        (category_key(), sub_category_key(), leaf_group_key()).prop_map(
            |(category, sub_category, leaf_group)| HierarchyCommand::SelectLeafGroup {
                category,
                sub_category,
                leaf_group,
            }
        ),
    ]
}

pub fn hierarchy_step() -> impl Strategy<Value = HierarchyStep> {
    prop_oneof![
        4 => hierarchy_command().prop_map(HierarchyStep::Apply),
        1 => Just(HierarchyStep::Home),
        2 => Just(HierarchyStep::Ascend),
        3 => any_key().prop_map(HierarchyStep::Descend),
    ]
}

pub fn cursor() -> impl Strategy<Value = Cursor> {
    hierarchy_command().prop_map(|command| command.target())
}

pub fn chapter_id() -> impl Strategy<Value = NodeId> {
    proptest::sample::select(DEMO_CHAPTERS).prop_map(node_id)
}

pub fn graph_command() -> impl Strategy<Value = GraphCommand> {
    prop_oneof![
        3 => chapter_id().prop_map(GraphCommand::GoTo),
        1 => Just(node_id("epilogue")).prop_map(GraphCommand::GoTo),
        2 => Just(GraphCommand::GoBack),
    ]
}

/// Check the derived outputs of a hierarchy navigator agree with its cursor
pub fn assert_hierarchy_consistent(nav: &HierarchyNavigator) {
    let cursor = nav.cursor();
    let depth = cursor.depth();

    if cursor.leaf_group().is_some() {
        assert!(cursor.sub_category().is_some(), "leaf group without subcategory: {cursor}");
    }
    if cursor.sub_category().is_some() {
        assert!(cursor.category().is_some(), "subcategory without category: {cursor}");
    }

    let view = nav.view();
    assert_eq!(view.kind, nav_engine::ViewKind::from_depth(depth));
    assert_eq!(view.entries.items().is_some(), depth == 3);

    let trail = nav.breadcrumb();
    assert_eq!(trail.len(), depth + 1);
    assert!(trail.current().is_some_and(nav_engine::Crumb::is_current));
    assert_eq!(
        trail.iter().filter(|c| c.clickable).count(),
        depth,
        "every crumb but the last is clickable"
    );
}

/// Check the derived outputs of a graph navigator agree with its state
pub fn assert_graph_consistent(nav: &GraphNavigator) {
    assert!(nav.graph().contains(nav.current_id()));
    assert_eq!(nav.can_go_back(), nav.history_len() > 0);
    assert!(nav.history().iter().all(|id| nav.graph().contains(id)));

    let view = nav.view();
    assert_eq!(view.node.id, *nav.current_id());
    assert_eq!(view.history_len, nav.history_len());
    assert_eq!(nav.menu().iter().filter(|e| e.current).count(), 1);
}
