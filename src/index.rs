//! Tree index: lazy materialization, expand/collapse state, breadcrumbs.
//!
//! A [`TreeIndex`] owns one static [`Outline`] plus the arena of nodes
//! materialized from it so far. It is a plain value passed by the caller;
//! there is no ambient global tree cache.

use generational_arena::Index;
use itertools::{Itertools, Position};
use serde::Deserialize;
use tracing::instrument;

use crate::arena::{NavArena, NavNode};
use crate::errors::{NavError, NavResult};
use crate::outline::Outline;

/// Tunables for breadcrumb resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Landing page used when the requested target has no outline entry
    pub default_target: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            default_target: "index.html".to_string(),
        }
    }
}

/// Materialized navigation tree over a static outline.
///
/// Nodes come into existence on the first expansion request of their parent
/// and are cached for the whole session. Collapsing only clears the
/// `expanded` flag; the materialized children are retained for cheap
/// re-expansion.
#[derive(Debug)]
pub struct TreeIndex {
    outline: Outline,
    arena: NavArena,
    root: Index,
    config: IndexConfig,
}

impl TreeIndex {
    pub fn new(outline: Outline) -> Self {
        Self::with_config(outline, IndexConfig::default())
    }

    /// Build the index and materialize the top level.
    ///
    /// The top level is always visible in a rendered tree, so it is
    /// materialized eagerly; everything below stays lazy.
    #[instrument(level = "debug", skip(outline, config))]
    pub fn with_config(outline: Outline, config: IndexConfig) -> Self {
        let mut arena = NavArena::new();
        let root = arena.insert(NavNode {
            label: String::new(),
            link: None,
            depth: 0,
            parent: None,
            children: Vec::new(),
            expanded: true,
            children_visited: false,
            is_last: true,
            expandable: !outline.is_empty(),
            outline_path: Vec::new(),
        });
        let mut index = Self {
            outline,
            arena,
            root,
            config,
        };
        index.materialize_children(root);
        index
    }

    /// The synthetic root node. It carries no label and is never rendered
    /// itself; the top-level outline entries are its children.
    pub fn root(&self) -> Index {
        self.root
    }

    pub fn node(&self, idx: Index) -> Option<&NavNode> {
        self.arena.get(idx)
    }

    pub fn arena(&self) -> &NavArena {
        &self.arena
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn is_expanded(&self, idx: Index) -> bool {
        self.arena.get(idx).is_some_and(|node| node.expanded)
    }

    /// Materialize the node's outline children, in outline order.
    ///
    /// Idempotent: once the `children_visited` flag is set, repeat calls
    /// change nothing and return no indices. The outline is trusted static
    /// data, so there are no error conditions; a stale index simply yields
    /// nothing.
    ///
    /// Returns the newly created node indices so a controller can announce
    /// the fresh rows.
    #[instrument(level = "debug", skip(self))]
    pub fn materialize_children(&mut self, idx: Index) -> Vec<Index> {
        let (path, depth) = match self.arena.get(idx) {
            Some(node) if !node.children_visited => {
                (node.outline_path.clone(), node.depth)
            }
            _ => return Vec::new(),
        };

        if let Some(node) = self.arena.get_mut(idx) {
            node.children_visited = true;
        }

        let Some(entries) = self.outline.children_at(&path) else {
            return Vec::new();
        };

        let mut created = Vec::with_capacity(entries.len());
        for (position, (i, entry)) in entries.iter().enumerate().with_position() {
            let mut outline_path = path.clone();
            outline_path.push(i);
            let child = NavNode {
                label: entry.label.clone(),
                link: entry.link.clone(),
                depth: depth + 1,
                parent: Some(idx),
                children: Vec::new(),
                expanded: false,
                children_visited: false,
                is_last: matches!(position, Position::Last | Position::Only),
                expandable: entry.is_expandable(),
                outline_path,
            };
            created.push(self.arena.insert(child));
        }

        created
    }

    /// Show the node's children, materializing them first if needed.
    ///
    /// No-op for leaves and for already-expanded nodes. Returns whether the
    /// state actually changed.
    #[instrument(level = "debug", skip(self))]
    pub fn expand(&mut self, idx: Index) -> NavResult<bool> {
        let node = self.arena.get(idx).ok_or(NavError::NodeNotFound(idx))?;
        if !node.expandable || node.expanded {
            return Ok(false);
        }

        self.materialize_children(idx);
        if let Some(node) = self.arena.get_mut(idx) {
            node.expanded = true;
        }
        Ok(true)
    }

    /// Hide the node's children. Materialized children are retained.
    #[instrument(level = "debug", skip(self))]
    pub fn collapse(&mut self, idx: Index) -> NavResult<bool> {
        let node = self.arena.get_mut(idx).ok_or(NavError::NodeNotFound(idx))?;
        let changed = node.expanded;
        node.expanded = false;
        Ok(changed)
    }

    /// Expand if collapsed, collapse if expanded.
    ///
    /// Returns the resulting expanded state.
    #[instrument(level = "debug", skip(self))]
    pub fn toggle(&mut self, idx: Index) -> NavResult<bool> {
        let expanded = self
            .arena
            .get(idx)
            .ok_or(NavError::NodeNotFound(idx))?
            .expanded;
        if expanded {
            self.collapse(idx)?;
            Ok(false)
        } else {
            self.expand(idx)?;
            Ok(self.is_expanded(idx))
        }
    }

    /// Breadcrumb path for a target, with fallback to the default landing
    /// page. None means no selection is highlighted; that is a normal
    /// outcome, not an error.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_breadcrumb(&self, target: &str) -> Option<Vec<usize>> {
        self.outline
            .find_path(target)
            .or_else(|| self.outline.find_path(&self.config.default_target))
    }

    /// Expand the whole trail down to the target's node and return it.
    ///
    /// Every node on the trail is materialized and expanded; the final node
    /// is the one to highlight as selected. `Ok(None)` when neither the
    /// target nor the default landing page has an outline entry.
    #[instrument(level = "debug", skip(self))]
    pub fn reveal(&mut self, target: &str) -> NavResult<Option<Index>> {
        let Some(breadcrumb) = self.resolve_breadcrumb(target) else {
            return Ok(None);
        };

        let mut current = self.root;
        for &child_pos in &breadcrumb {
            self.materialize_children(current);
            let node = self
                .arena
                .get(current)
                .ok_or(NavError::NodeNotFound(current))?;
            let child = node.children.get(child_pos).copied().ok_or_else(|| {
                NavError::InvalidEntry {
                    path: breadcrumb.clone(),
                    reason: "breadcrumb step out of range".to_string(),
                }
            })?;
            self.expand(child)?;
            current = child;
        }

        Ok(Some(current))
    }
}
