//! Navigation items and their arena storage.
//!
//! Page contexts carry navigation as nested [`NavigationEntry`] values.
//! [`NavigationArena::from_entries`] flattens them into indexed nodes so the
//! tree can be walked, searched and serialized without recursive ownership.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Index of a node inside a [`NavigationArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in arena order (depth-first, pre-order).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A navigation entry in its nested, serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Site path of the entry, without language prefix.
    pub path: String,

    /// Display title.
    pub title: String,

    /// Off-site link; when set the entry renders as an external leaf.
    #[serde(default, alias = "externalHref", skip_serializing_if = "Option::is_none")]
    pub external_href: Option<String>,

    /// Ordered child entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,

    /// Whether the entry has its own page. Headers of branches without
    /// content toggle their accordion instead of navigating.
    #[serde(default, alias = "hasContent")]
    pub has_content: bool,
}

/// Root of an article's navigation, as supplied by the page context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    /// Section key; the tree's root path is `/{key}`.
    pub key: String,

    /// Section title, used for the navigation's accessible label.
    pub title: String,

    /// Top-level entries.
    #[serde(default)]
    pub children: Vec<NavigationEntry>,
}

impl NavigationContext {
    /// Returns the root path of this section.
    #[must_use]
    pub fn root_path(&self) -> String {
        format!("/{}", self.key)
    }

    /// Returns `true` when there is nothing to navigate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Builds the arena for this section's entries.
    #[must_use]
    pub fn arena(&self) -> NavigationArena {
        NavigationArena::from_entries(&self.children)
    }
}

/// How an item is rendered; the cases are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemShape {
    /// No children, no external link: a plain navigable link.
    Link,
    /// External link; children are ignored.
    External,
    /// Children and no external link: an accordion header plus subtree.
    Branch,
}

/// A node stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    /// Site path, without language prefix.
    pub path: String,
    /// Display title.
    pub title: String,
    /// Off-site link.
    pub external_href: Option<String>,
    /// Whether the item has its own page.
    pub has_content: bool,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl NavigationItem {
    /// Ordered child ids.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent id, `None` for top-level items.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns `true` if the item has at least one child.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Rendering shape of this item.
    #[must_use]
    pub fn shape(&self) -> ItemShape {
        if self.external_href.is_some() {
            ItemShape::External
        } else if self.children.is_empty() {
            ItemShape::Link
        } else {
            ItemShape::Branch
        }
    }
}

/// Flat storage for a navigation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationArena {
    nodes: Vec<NavigationItem>,
    roots: Vec<NodeId>,
}

impl NavigationArena {
    /// Flattens nested entries into an arena, preserving order.
    #[must_use]
    pub fn from_entries(entries: &[NavigationEntry]) -> Self {
        let mut arena = Self::default();
        for entry in entries {
            let id = arena.insert(entry, None);
            arena.roots.push(id);
        }
        arena
    }

    fn insert(&mut self, entry: &NavigationEntry, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NavigationItem {
            path: entry.path.clone(),
            title: entry.title.clone(),
            external_href: entry.external_href.clone(),
            has_content: entry.has_content,
            children: Vec::with_capacity(entry.children.len()),
            parent,
        });

        let children: Vec<NodeId> = entry
            .children
            .iter()
            .map(|child| self.insert(child, Some(id)))
            .collect();
        self.nodes[id.0].children = children;
        id
    }

    /// Top-level item ids.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&NavigationItem> {
        self.nodes.get(id.0)
    }

    /// Total number of items at every depth.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates all items in depth-first order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NavigationItem)> {
        self.nodes.iter().enumerate().map(|(i, item)| (NodeId(i), item))
    }

    /// Finds the first item (depth-first) with the given path.
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        self.iter().find(|(_, item)| item.path == path).map(|(id, _)| id)
    }

    /// Depth of an item; top-level items have depth 0.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cursor = self.get(id).and_then(NavigationItem::parent);
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.get(parent).and_then(NavigationItem::parent);
        }
        depth
    }

    /// Rebuilds the nested form.
    #[must_use]
    pub fn to_entries(&self) -> Vec<NavigationEntry> {
        self.roots.iter().map(|&id| self.entry(id)).collect()
    }

    fn entry(&self, id: NodeId) -> NavigationEntry {
        let item = &self[id];
        NavigationEntry {
            path: item.path.clone(),
            title: item.title.clone(),
            external_href: item.external_href.clone(),
            children: item.children.iter().map(|&c| self.entry(c)).collect(),
            has_content: item.has_content,
        }
    }
}

impl Index<NodeId> for NavigationArena {
    type Output = NavigationItem;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
