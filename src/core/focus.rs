use super::id::Id;
use super::tree::{Sense, UiTree};

/// Sequential keyboard navigation over the focus-sensed nodes of a `UiTree`.
///
/// The ring holds only the focused id; the traversal order is the tree's
/// registration order, re-read on every move so it stays correct when the
/// widget set changes between frames. A node that disappears (or loses its
/// focus sense, e.g. a button on a slide that became hidden) simply drops out:
/// the next move lands on the first focusable node again.
#[derive(Clone, Copy, Debug, Default)]
pub struct FocusRing {
    current: Option<Id>,
}

impl FocusRing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Id> {
        self.current
    }

    pub fn is_focused(&self, id: Id) -> bool {
        self.current == Some(id)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn focus_next(&mut self, tree: &UiTree) {
        self.advance(tree, 1);
    }

    pub fn focus_prev(&mut self, tree: &UiTree) {
        self.advance(tree, -1);
    }

    /// Drop focus if the focused node no longer exists or is no longer
    /// focusable in this frame's tree.
    pub fn sync(&mut self, tree: &UiTree) {
        if let Some(id) = self.current {
            let alive = tree
                .node(id)
                .map(|n| n.sense.contains(Sense::FOCUS))
                .unwrap_or(false);
            if !alive {
                self.current = None;
            }
        }
    }

    fn advance(&mut self, tree: &UiTree, dir: isize) {
        let ids: Vec<Id> = tree.nodes_with_sense(Sense::FOCUS).map(|n| n.id).collect();
        if ids.is_empty() {
            self.current = None;
            return;
        }

        let next = match self.current.and_then(|id| ids.iter().position(|c| *c == id)) {
            Some(pos) => {
                let len = ids.len() as isize;
                (((pos as isize + dir) % len + len) % len) as usize
            }
            // No current focus (or it went stale): enter the ring at an end.
            None if dir >= 0 => 0,
            None => ids.len() - 1,
        };
        self.current = Some(ids[next]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/focus.rs"]
mod tests;
