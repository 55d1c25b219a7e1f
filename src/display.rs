//! Terminal rendering of outlines and materialized indexes via termtree.

use generational_arena::Index;
use termtree::Tree;

use crate::index::TreeIndex;
use crate::outline::{Outline, OutlineEntry};

pub trait TreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeConvert for OutlineEntry {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .children
            .iter()
            .flatten()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(self.to_string()).with_leaves(leaves)
    }
}

/// The whole static outline, expansion state ignored.
impl TreeConvert for Outline {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .entries()
            .iter()
            .map(|entry| entry.to_tree_string())
            .collect();

        Tree::new("outline".to_string()).with_leaves(leaves)
    }
}

/// The materialized tree as currently visible: children of collapsed nodes
/// are pruned, unmaterialized subtrees do not appear at all.
impl TreeConvert for TreeIndex {
    fn to_tree_string(&self) -> Tree<String> {
        fn build(index: &TreeIndex, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = index.node(node_idx) {
                for &child_idx in &node.children {
                    if let Some(child) = index.node(child_idx) {
                        let mut child_tree = Tree::new(child.to_string());
                        if child.expanded {
                            build(index, child_idx, &mut child_tree);
                        }
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        let mut tree = Tree::new("navtree".to_string());
        build(self, self.root(), &mut tree);
        tree
    }
}
