//! Recursive navigation tree view.
//!
//! A [`NavigationTree`] is one level of the rendered navigation. Every
//! branch item owns a nested, non-root tree for its children, each with its
//! own [`ExpansionState`]. Collapsed subtrees stay in the view; renderers
//! hide them by height so they can still be measured and transitioned.

use std::collections::BTreeMap;

use super::active::is_active;
use super::expansion::{ExpansionState, ToggleOutcome};
use super::item::{ItemShape, NavigationArena, NodeId};
use super::observer::BindingDeps;
use super::position::Position;

/// Rendering-independent view of one navigation item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRow<'a> {
    /// Plain navigable link.
    Link {
        /// Target path.
        path: &'a str,
        /// Label.
        title: &'a str,
        /// Whether the current location is under this path.
        active: bool,
    },
    /// External link row with an "external" affordance.
    External {
        /// Off-site target.
        href: &'a str,
        /// Label.
        title: &'a str,
    },
    /// Accordion header followed by its subtree.
    Branch {
        /// Header link target; also the accordion id.
        path: &'a str,
        /// Label.
        title: &'a str,
        /// Whether the header navigates rather than toggles.
        has_content: bool,
        /// Whether the current location is under this path.
        active: bool,
        /// Whether the subtree is open.
        expanded: bool,
        /// Rows of the subtree, present even when collapsed.
        children: Vec<NavRow<'a>>,
    },
}

impl NavRow<'_> {
    /// Label of the row.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Link { title, .. } | Self::External { title, .. } | Self::Branch { title, .. } => {
                title
            }
        }
    }
}

/// One level of the navigation, with nested subtrees for its branches.
#[derive(Debug, Clone)]
pub struct NavigationTree<'a> {
    arena: &'a NavigationArena,
    lang: &'a str,
    current_path: &'a str,
    path: String,
    items: Vec<NodeId>,
    expansion: ExpansionState,
    subtrees: BTreeMap<NodeId, NavigationTree<'a>>,
    is_root: bool,
    auto_scroll: bool,
}

impl<'a> NavigationTree<'a> {
    /// Builds the root tree over the arena's top-level items.
    ///
    /// `path` is the tree's identity (the section root, e.g. `/docs`).
    #[must_use]
    pub fn root(
        arena: &'a NavigationArena,
        path: impl Into<String>,
        lang: &'a str,
        current_path: &'a str,
    ) -> Self {
        Self::build(arena, arena.roots(), path.into(), lang, current_path, true)
    }

    fn build(
        arena: &'a NavigationArena,
        items: &[NodeId],
        path: String,
        lang: &'a str,
        current_path: &'a str,
        is_root: bool,
    ) -> Self {
        let subtrees = items
            .iter()
            .filter(|&&id| arena[id].shape() == ItemShape::Branch)
            .map(|&id| {
                let item = &arena[id];
                let child = Self::build(
                    arena,
                    item.children(),
                    item.path.clone(),
                    lang,
                    current_path,
                    false,
                );
                (id, child)
            })
            .collect();

        Self {
            arena,
            lang,
            current_path,
            path,
            items: items.to_vec(),
            expansion: ExpansionState::for_level(arena, items, lang, current_path),
            subtrees,
            is_root,
            auto_scroll: true,
        }
    }

    /// Enables or disables scroll tracking. Secondary (mobile) instances
    /// are built with tracking off.
    #[must_use]
    pub const fn with_auto_scroll(mut self, auto_scroll: bool) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    /// Identity path of this level.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Language tag.
    #[must_use]
    pub const fn lang(&self) -> &str {
        self.lang
    }

    /// Items at this level, in order.
    #[must_use]
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// Returns `true` for the root instance.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.is_root
    }

    /// Returns `true` if scroll tracking is enabled.
    #[must_use]
    pub const fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    /// Expansion state of this level.
    #[must_use]
    pub const fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Subtree rendered under a branch item.
    #[must_use]
    pub fn subtree(&self, id: NodeId) -> Option<&Self> {
        self.subtrees.get(&id)
    }

    /// Active-path test for an item.
    #[must_use]
    pub fn is_active(&self, id: NodeId) -> bool {
        self.arena
            .get(id)
            .is_some_and(|item| is_active(self.current_path, self.lang, &item.path))
    }

    /// Returns whether the branch with `path` is expanded, searching nested
    /// levels.
    #[must_use]
    pub fn is_expanded(&self, path: &str) -> bool {
        if self.expansion.contains(path) {
            return self.expansion.is_expanded(path);
        }
        self.subtrees.values().any(|t| t.is_expanded(path))
    }

    /// Handles a click on the header of the branch with `path`.
    ///
    /// Returns `None` when no branch with that path exists at any depth.
    pub fn toggle(&mut self, path: &str) -> Option<ToggleOutcome> {
        if let Some(&id) = self.items.iter().find(|&&id| self.arena[id].path == path) {
            let outcome = self
                .expansion
                .toggle(&self.arena[id], self.lang, self.current_path);
            if outcome != ToggleOutcome::Ignored {
                return Some(outcome);
            }
        }
        self.subtrees.values_mut().find_map(|t| t.toggle(path))
    }

    /// Inputs for this tree's viewport listener binding.
    #[must_use]
    pub fn binding_deps(&self, position: Position, mounted: bool) -> BindingDeps {
        BindingDeps {
            root: self.path.clone(),
            is_root: self.is_root,
            mounted,
            position,
            expansion_revision: self.expansion.revision(),
            auto_scroll: self.auto_scroll,
        }
    }

    /// Builds the view of this level and everything below it.
    #[must_use]
    pub fn rows(&self) -> Vec<NavRow<'a>> {
        self.items.iter().map(|&id| self.row(id)).collect()
    }

    fn row(&self, id: NodeId) -> NavRow<'a> {
        let arena = self.arena;
        let item = &arena[id];
        let active = is_active(self.current_path, self.lang, &item.path);

        match (item.shape(), item.external_href.as_deref()) {
            (ItemShape::External, Some(href)) => NavRow::External {
                href,
                title: &item.title,
            },
            (ItemShape::Branch, _) => NavRow::Branch {
                path: &item.path,
                title: &item.title,
                has_content: item.has_content,
                active,
                expanded: self.expansion.is_expanded(&item.path),
                children: self.subtrees.get(&id).map(Self::rows).unwrap_or_default(),
            },
            _ => NavRow::Link {
                path: &item.path,
                title: &item.title,
                active,
            },
        }
    }
}
