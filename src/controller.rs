//! Command dispatch for navigation state changes.
//!
//! All mutation funnels through [`NavController::apply`]: a command names a
//! node (or a target page) and the controller reports the resulting state
//! changes to the caller's [`NavView`]. This keeps "what changed" here and
//! "how it is drawn" with the view implementation.

use generational_arena::Index;
use tracing::instrument;

use crate::errors::{NavError, NavResult};
use crate::index::TreeIndex;
use crate::view::{NavView, RowIndicator, RowSpec};

/// A navigation state change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    /// Flip a node between expanded and collapsed
    Toggle(Index),
    Expand(Index),
    Collapse(Index),
    /// Reveal and highlight the row for a target page
    Select { target: String },
}

/// Applies commands to a [`TreeIndex`] and reports to a [`NavView`].
#[derive(Debug)]
pub struct NavController {
    index: TreeIndex,
}

impl NavController {
    pub fn new(index: TreeIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    pub fn into_index(self) -> TreeIndex {
        self.index
    }

    #[instrument(level = "debug", skip(self, view))]
    pub fn apply(&mut self, command: NavCommand, view: &mut dyn NavView) -> NavResult<()> {
        match command {
            NavCommand::Toggle(idx) => {
                let expanded = self
                    .index
                    .node(idx)
                    .ok_or(NavError::NodeNotFound(idx))?
                    .expanded;
                if expanded {
                    self.collapse(idx, view)
                } else {
                    self.expand(idx, view)
                }
            }
            NavCommand::Expand(idx) => self.expand(idx, view),
            NavCommand::Collapse(idx) => self.collapse(idx, view),
            NavCommand::Select { target } => self.select(&target, view),
        }
    }

    fn expand(&mut self, idx: Index, view: &mut dyn NavView) -> NavResult<()> {
        let created = self.index.materialize_children(idx);
        self.announce_rows(&created, view);
        if self.index.expand(idx)? {
            view.set_children_visible(idx, true);
            view.set_indicator(idx, RowIndicator::Expanded);
        }
        Ok(())
    }

    fn collapse(&mut self, idx: Index, view: &mut dyn NavView) -> NavResult<()> {
        if self.index.collapse(idx)? {
            view.set_children_visible(idx, false);
            view.set_indicator(idx, RowIndicator::Collapsed);
        }
        Ok(())
    }

    /// Expand the breadcrumb trail for the target and select its row.
    ///
    /// A target that resolves to nothing (not even via the fallback landing
    /// page) produces no view calls at all.
    fn select(&mut self, target: &str, view: &mut dyn NavView) -> NavResult<()> {
        let Some(breadcrumb) = self.index.resolve_breadcrumb(target) else {
            return Ok(());
        };

        let mut current = self.index.root();
        for &child_pos in &breadcrumb {
            let child = self
                .index
                .node(current)
                .ok_or(NavError::NodeNotFound(current))?
                .children
                .get(child_pos)
                .copied()
                .ok_or_else(|| NavError::InvalidEntry {
                    path: breadcrumb.clone(),
                    reason: "breadcrumb step out of range".to_string(),
                })?;
            self.expand(child, view)?;
            current = child;
        }
        view.select_row(current);
        Ok(())
    }

    fn announce_rows(&self, created: &[Index], view: &mut dyn NavView) {
        for &idx in created {
            if let Some(node) = self.index.node(idx) {
                view.create_row(idx, &RowSpec::for_node(node));
            }
        }
    }
}
