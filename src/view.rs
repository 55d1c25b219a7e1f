//! Rendering-collaborator interface.
//!
//! The index never draws anything itself. A host implements [`NavView`] and
//! receives row-level requests; how rows are laid out, what the indicators
//! look like and how scrolling works are host concerns.

use generational_arena::Index;

use crate::arena::NavNode;

/// Visual state indicator for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIndicator {
    /// No children, nothing to expand
    Leaf,
    /// Expandable, child container hidden
    Collapsed,
    /// Expandable, child container shown
    Expanded,
}

impl RowIndicator {
    pub fn for_node(node: &NavNode) -> Self {
        if node.is_leaf() {
            Self::Leaf
        } else if node.expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }
}

/// Everything a host needs to draw one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSpec {
    /// Indentation level (top-level rows are at depth 1)
    pub depth: usize,
    pub indicator: RowIndicator,
    pub label: String,
    /// Navigation target, None for grouping rows
    pub link: Option<String>,
    /// Whether this is the last sibling in its container
    pub is_last: bool,
}

impl RowSpec {
    pub fn for_node(node: &NavNode) -> Self {
        Self {
            depth: node.depth,
            indicator: RowIndicator::for_node(node),
            label: node.label.clone(),
            link: node.link.clone(),
            is_last: node.is_last,
        }
    }
}

/// Receives navigation state changes and draws them however it likes.
pub trait NavView {
    /// A row for a newly materialized node. Rows arrive in sibling order,
    /// under a still-hidden container until `set_children_visible`.
    fn create_row(&mut self, node: Index, row: &RowSpec);

    /// Show or hide a node's child container.
    fn set_children_visible(&mut self, node: Index, visible: bool);

    /// Refresh the expand/collapse indicator of an existing row.
    fn set_indicator(&mut self, node: Index, indicator: RowIndicator);

    /// Mark the row as the single selected one and bring it into view.
    fn select_row(&mut self, node: Index);
}

/// One recorded [`NavView`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    RowCreated { node: Index, row: RowSpec },
    ChildrenVisible { node: Index, visible: bool },
    IndicatorSet { node: Index, indicator: RowIndicator },
    RowSelected { node: Index },
}

/// View that records every call, for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl NavView for RecordingView {
    fn create_row(&mut self, node: Index, row: &RowSpec) {
        self.events.push(ViewEvent::RowCreated {
            node,
            row: row.clone(),
        });
    }

    fn set_children_visible(&mut self, node: Index, visible: bool) {
        self.events.push(ViewEvent::ChildrenVisible { node, visible });
    }

    fn set_indicator(&mut self, node: Index, indicator: RowIndicator) {
        self.events.push(ViewEvent::IndicatorSet { node, indicator });
    }

    fn select_row(&mut self, node: Index) {
        self.events.push(ViewEvent::RowSelected { node });
    }
}
