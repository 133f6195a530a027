//! Catalog - fixed-depth content tree
//!
//! Provides [`Catalog`], a read-only `category -> subcategory -> leaf group
//! -> items` mapping. The three keyed levels are encoded in the type, so an
//! item can only ever live at depth three.
//!
//! All lookups fail soft: an unknown key resolves to an empty listing.

use crate::error::StoreError;
use crate::id::{Key, Level};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

/// Leaf groups under one subcategory, each holding its items
pub type LeafGroups = IndexMap<Key, Vec<Item>>;

/// Subcategories under one category
pub type SubCategories = IndexMap<Key, LeafGroups>;

/// Raw nested mapping as ingested, before validation
pub type CatalogTree = IndexMap<Key, SubCategories>;

/// Catalog document as written, before keys are checked
pub type CatalogDocument = DocumentMap<DocumentMap<DocumentMap<Vec<Item>>>>;

/// Mapping in document order with repeated keys kept
///
/// Map deserializers overwrite a repeated key; this keeps every entry so
/// the repeat can be reported instead of losing the earlier subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> DocumentMap<V> {
    /// Number of entries, repeats included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for DocumentMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<V> IntoIterator for DocumentMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for DocumentMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = DocumentMap<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of named entries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(DocumentMap { entries })
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Terminal entry listed under a leaf group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Rendering key, unique within its leaf group
    pub id: String,
    /// Display name
    pub name: String,
    /// Display price, kept verbatim (e.g. `"$1999"`)
    pub price: String,
    /// Optional image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    /// Create an item without image
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            image: None,
        }
    }

    /// With image reference
    #[inline]
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Validated, insertion-ordered catalog tree
///
/// Child listings keep the order of the source document, which is the
/// order grids are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogTree")]
pub struct Catalog {
    tree: CatalogTree,
}

impl Catalog {
    /// Validate a raw tree and seal it
    ///
    /// Fails if two items in the same leaf group share an id.
    pub fn from_tree(tree: CatalogTree) -> Result<Self, StoreError> {
        for (category, subs) in &tree {
            for (sub_category, leaves) in subs {
                for (leaf_group, items) in leaves {
                    let mut seen = HashSet::with_capacity(items.len());
                    for item in items {
                        if !seen.insert(item.id.as_str()) {
                            return Err(StoreError::DuplicateItem {
                                category: category.clone(),
                                sub_category: sub_category.clone(),
                                leaf_group: leaf_group.clone(),
                                item: item.id.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(Self { tree })
    }

    /// Check keys of a parsed document, then validate it like [`Catalog::from_tree`]
    ///
    /// Fails on an empty key or on a key repeated under the same parent.
    pub fn from_document(document: CatalogDocument) -> Result<Self, StoreError> {
        let mut tree = CatalogTree::with_capacity(document.len());
        for (category, subs) in document {
            let mut sub_tree = SubCategories::with_capacity(subs.len());
            for (sub_category, leaves) in subs {
                let mut leaf_tree = LeafGroups::with_capacity(leaves.len());
                for (leaf_group, items) in leaves {
                    insert_unique(&mut leaf_tree, Level::LeafGroup, leaf_group, items)?;
                }
                insert_unique(&mut sub_tree, Level::SubCategory, sub_category, leaf_tree)?;
            }
            insert_unique(&mut tree, Level::Category, category, sub_tree)?;
        }
        Self::from_tree(tree)
    }

    /// Empty catalog
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Top-level keys
    pub fn categories(&self) -> impl Iterator<Item = &Key> + '_ {
        self.tree.keys()
    }

    /// Keys under `category`; empty if unknown
    pub fn sub_categories<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a Key> + 'a {
        self.tree.get(category).into_iter().flat_map(IndexMap::keys)
    }

    /// Keys under `category > sub_category`; empty if unknown
    pub fn leaf_groups<'a>(
        &'a self,
        category: &str,
        sub_category: &str,
    ) -> impl Iterator<Item = &'a Key> + 'a {
        self.subtree(category, sub_category)
            .into_iter()
            .flat_map(IndexMap::keys)
    }

    /// Items under `category > sub_category > leaf_group`; empty if unknown
    #[must_use]
    pub fn items(&self, category: &str, sub_category: &str, leaf_group: &str) -> &[Item] {
        self.subtree(category, sub_category)
            .and_then(|leaves| leaves.get(leaf_group))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check a category exists
    #[inline]
    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.tree.contains_key(category)
    }

    /// Check a subcategory exists under its category
    #[inline]
    #[must_use]
    pub fn contains_sub_category(&self, category: &str, sub_category: &str) -> bool {
        self.subtree(category, sub_category).is_some()
    }

    /// Check a leaf group exists under its ancestors
    #[inline]
    #[must_use]
    pub fn contains_leaf_group(
        &self,
        category: &str,
        sub_category: &str,
        leaf_group: &str,
    ) -> bool {
        self.subtree(category, sub_category)
            .is_some_and(|leaves| leaves.contains_key(leaf_group))
    }

    /// Number of categories
    #[inline]
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.tree.len()
    }

    /// Number of items across all leaf groups
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.tree
            .values()
            .flat_map(IndexMap::values)
            .flat_map(IndexMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Borrow the underlying tree
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &CatalogTree {
        &self.tree
    }

    fn subtree(&self, category: &str, sub_category: &str) -> Option<&LeafGroups> {
        self.tree.get(category)?.get(sub_category)
    }
}

fn insert_unique<V>(
    map: &mut IndexMap<Key, V>,
    level: Level,
    key: String,
    value: V,
) -> Result<(), StoreError> {
    match map.entry(Key::new(key)?) {
        Entry::Occupied(entry) => Err(StoreError::DuplicateKey {
            level,
            key: entry.key().clone(),
        }),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = StoreError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        Self::from_document(document)
    }
}

impl TryFrom<CatalogTree> for Catalog {
    type Error = StoreError;

    fn try_from(tree: CatalogTree) -> Result<Self, Self::Error> {
        Self::from_tree(tree)
    }
}

impl From<Catalog> for CatalogTree {
    fn from(catalog: Catalog) -> Self {
        catalog.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(s: &str) -> Key {
        Key::new(s).unwrap()
    }

    fn sample() -> Catalog {
        let mut leaves = LeafGroups::new();
        leaves.insert(
            key("Laptops"),
            vec![Item::new("lap1", "MacBook Pro", "$1999"), Item::new("lap2", "Dell XPS", "$1299")],
        );
        leaves.insert(key("Desktops"), vec![Item::new("desk1", "iMac", "$1499")]);
        let mut subs = SubCategories::new();
        subs.insert(key("Computers"), leaves);
        subs.insert(key("Smartphones"), LeafGroups::new());
        let mut tree = CatalogTree::new();
        tree.insert(key("Electronics"), subs);
        Catalog::from_tree(tree).unwrap()
    }

    #[test]
    fn listings_keep_insertion_order() {
        let catalog = sample();
        let subs: Vec<_> = catalog.sub_categories("Electronics").map(Key::as_str).collect();
        assert_eq!(subs, vec!["Computers", "Smartphones"]);

        let leaves: Vec<_> = catalog
            .leaf_groups("Electronics", "Computers")
            .map(Key::as_str)
            .collect();
        assert_eq!(leaves, vec!["Laptops", "Desktops"]);
    }

    #[test]
    fn unknown_keys_fail_soft() {
        let catalog = sample();
        assert_eq!(catalog.sub_categories("Toys").count(), 0);
        assert_eq!(catalog.leaf_groups("Electronics", "Tablets").count(), 0);
        assert!(catalog.items("Electronics", "Computers", "Servers").is_empty());
        assert!(catalog.items("Toys", "Lego", "Sets").is_empty());
    }

    #[test]
    fn membership_checks() {
        let catalog = sample();
        assert!(catalog.contains_category("Electronics"));
        assert!(catalog.contains_sub_category("Electronics", "Smartphones"));
        assert!(catalog.contains_leaf_group("Electronics", "Computers", "Laptops"));
        assert!(!catalog.contains_leaf_group("Electronics", "Smartphones", "Laptops"));
        assert_eq!(catalog.item_count(), 3);
    }

    #[test]
    fn duplicate_item_rejected() {
        let mut leaves = LeafGroups::new();
        leaves.insert(
            key("Shirts"),
            vec![Item::new("s1", "Polo", "$49"), Item::new("s1", "Formal", "$79")],
        );
        let mut subs = SubCategories::new();
        subs.insert(key("MensWear"), leaves);
        let mut tree = CatalogTree::new();
        tree.insert(key("Fashion"), subs);

        let err = Catalog::from_tree(tree).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateItem { ref item, .. } if item == "s1"));
    }

    fn document(entries: Vec<(&str, DocumentMap<DocumentMap<Vec<Item>>>)>) -> CatalogDocument {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    fn subtree(sub: &str, leaf: &str, items: Vec<Item>) -> DocumentMap<DocumentMap<Vec<Item>>> {
        let leaves = [(leaf.to_string(), items)].into_iter().collect();
        [(sub.to_string(), leaves)].into_iter().collect()
    }

    #[test]
    fn repeated_category_rejected() {
        let doc = document(vec![
            (
                "Electronics",
                subtree("Computers", "Laptops", vec![Item::new("lap1", "MacBook Pro", "$1999")]),
            ),
            ("Electronics", subtree("Smartphones", "Apple", vec![])),
        ]);
        let err = Catalog::from_document(doc).unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateKey { level: Level::Category, ref key }
                if key.as_str() == "Electronics"
        ));
    }

    #[test]
    fn same_key_under_different_parents_is_fine() {
        let doc = document(vec![
            ("Electronics", subtree("Sale", "Laptops", vec![])),
            ("Fashion", subtree("Sale", "Laptops", vec![])),
        ]);
        let catalog = Catalog::from_document(doc).unwrap();
        assert!(catalog.contains_leaf_group("Fashion", "Sale", "Laptops"));
    }

    #[test]
    fn empty_document_key_is_invalid_id() {
        let doc = document(vec![("  ", subtree("Computers", "Laptops", vec![]))]);
        let err = Catalog::from_document(doc).unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
        assert!(err.is_integrity_error());
    }
}
