use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Runtime navigation node, materialized lazily from an outline entry.
#[derive(Debug)]
pub struct NavNode {
    /// Display label copied from the outline entry
    pub label: String,
    /// Navigation target, None for grouping entries and the root
    pub link: Option<String>,
    /// Distance from the synthetic root (the root itself is 0)
    pub depth: usize,
    /// Index of the parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of materialized child nodes, in outline order
    pub children: Vec<Index>,
    /// Whether the node's child container is currently shown
    pub expanded: bool,
    /// Guard for lazy materialization: set once the outline children
    /// have been turned into nodes
    pub children_visited: bool,
    /// Last-sibling marker, used only for rendering decisions
    pub is_last: bool,
    /// Whether the outline entry behind this node has children at all
    pub expandable: bool,
    /// Index-path into the static outline this node was materialized from
    pub outline_path: Vec<usize>,
}

impl NavNode {
    pub fn is_leaf(&self) -> bool {
        !self.expandable
    }
}

impl fmt::Display for NavNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.link {
            Some(link) => write!(f, "{} ({})", self.label, link),
            None => write!(f, "{}", self.label),
        }
    }
}

/// Arena-based storage for the materialized navigation tree.
///
/// Uses a generational arena for memory-safe node references and O(1)
/// lookups. Nodes are created on first expansion of their parent and kept
/// for the whole session; nothing is ever removed.
#[derive(Debug, Default)]
pub struct NavArena {
    /// Arena storage for all materialized nodes
    arena: Arena<NavNode>,
    /// Index of the synthetic root, None until it is inserted
    root: Option<Index>,
}

impl NavArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node and wire it into its parent's child list.
    ///
    /// A node without a parent becomes the root.
    #[instrument(level = "trace", skip(self, node))]
    pub fn insert(&mut self, node: NavNode) -> Index {
        let parent = node.parent;
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get(&self, idx: Index) -> Option<&NavNode> {
        self.arena.get(idx)
    }

    pub fn get_mut(&mut self, idx: Index) -> Option<&mut NavNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Number of materialized nodes, the synthetic root included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> NavIterator {
        NavIterator::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIterator {
        PostOrderIterator::new(self)
    }

    /// Depth of the materialized tree (0 for an empty arena).
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}

/// Pre-order traversal over all materialized nodes.
pub struct NavIterator<'a> {
    arena: &'a NavArena,
    stack: Vec<Index>,
}

impl<'a> NavIterator<'a> {
    fn new(arena: &'a NavArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for NavIterator<'a> {
    type Item = (Index, &'a NavNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

/// Post-order traversal: children before their parent.
pub struct PostOrderIterator<'a> {
    arena: &'a NavArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(arena: &'a NavArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push((root, false));
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a NavNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
