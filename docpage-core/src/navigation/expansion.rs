//! Accordion expansion state for one level of the navigation tree.

use indexmap::IndexMap;
use tracing::debug;

use super::active::is_active;
use super::item::{ItemShape, NavigationArena, NavigationItem, NodeId};

/// Result of clicking a branch header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The branch has its own page; the click navigates and state is unchanged.
    Navigate,
    /// The branch contains the current page and stays open.
    Locked,
    /// Expansion flipped; carries the new value.
    Toggled {
        /// Whether the branch is now expanded.
        expanded: bool,
    },
    /// The item is not a branch at this level.
    Ignored,
}

/// Expanded flags keyed by item path, one entry per branch of a level.
///
/// `revision` increases on every change so observers can detect updates
/// without comparing maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: IndexMap<String, bool>,
    revision: u64,
}

impl ExpansionState {
    /// Initial state for `items`: every branch starts expanded exactly when
    /// it is on the active path. External items are leaves and get no entry.
    #[must_use]
    pub fn for_level(
        arena: &NavigationArena,
        items: &[NodeId],
        lang: &str,
        current_path: &str,
    ) -> Self {
        let expanded = items
            .iter()
            .filter_map(|&id| arena.get(id))
            .filter(|item| item.shape() == ItemShape::Branch)
            .map(|item| {
                (
                    item.path.clone(),
                    is_active(current_path, lang, &item.path),
                )
            })
            .collect();

        Self {
            expanded,
            revision: 0,
        }
    }

    /// Returns whether the branch with `path` is expanded.
    #[must_use]
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.get(path).copied().unwrap_or(false)
    }

    /// Returns `true` if `path` is a branch tracked at this level.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.expanded.contains_key(path)
    }

    /// Number of branches tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Returns `true` if the level has no branches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Iterates `(path, expanded)` in item order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.expanded.iter().map(|(p, &e)| (p.as_str(), e))
    }

    /// Change counter, bumped on every successful toggle.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies a header click on `item`.
    ///
    /// Branches with content navigate instead of toggling; a branch on the
    /// active path cannot be collapsed by the user.
    pub fn toggle(
        &mut self,
        item: &NavigationItem,
        lang: &str,
        current_path: &str,
    ) -> ToggleOutcome {
        if !self.contains(&item.path) {
            return ToggleOutcome::Ignored;
        }
        if item.has_content {
            return ToggleOutcome::Navigate;
        }
        if is_active(current_path, lang, &item.path) {
            debug!(path = %item.path, "toggle ignored for active branch");
            return ToggleOutcome::Locked;
        }

        let expanded = !self.is_expanded(&item.path);
        self.expanded.insert(item.path.clone(), expanded);
        self.revision += 1;
        debug!(path = %item.path, expanded, "accordion toggled");
        ToggleOutcome::Toggled { expanded }
    }
}
