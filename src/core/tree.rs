use super::geom::{Pos, Rect};
use super::id::Id;
use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Sense(u16);

impl Sense {
    pub const NONE: Self = Self(0);
    pub const HOVER: Self = Self(1 << 0);
    pub const CLICK: Self = Self(1 << 1);
    /// Reachable via sequential keyboard navigation (`FocusRing`).
    pub const FOCUS: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Sense {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Sense {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// What a node means to the host, carried as plain indices so the host can
/// map a hit or focus target back to its own message/card data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Unknown,
    /// One transcript entry.
    Message { index: usize },
    /// A card wrapper outside any slide context.
    Card,
    /// A card wrapper rendered as one slide among several.
    Slide { index: usize, total: usize },
    /// Accessible grouping for a card's buttons; present only when non-empty.
    ButtonGroup { count: usize },
    /// One button row; `card` is the owning widget's id for demuxing.
    Button { card: u32, index: usize },
    QuickReply { index: usize },
    Image,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: Id,
    pub rect: Rect,
    pub layer: u8,
    pub z: u32,
    pub sense: Sense,
    pub kind: NodeKind,
}

impl Node {
    pub fn contains(&self, p: Pos) -> bool {
        self.rect.contains(p)
    }
}

/// Interaction nodes collected during a render pass, in registration order.
#[derive(Clone, Debug, Default)]
pub struct UiTree {
    nodes: Vec<Node>,
}

impl UiTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn push(&mut self, mut node: Node) {
        // Default z-order: insertion order within the same layer.
        if node.z == 0 {
            node.z = self.nodes.len() as u32;
        }
        self.nodes.push(node);
    }

    pub fn hit_test(&self, p: Pos) -> Option<&Node> {
        // Highest layer wins; within a layer, higher z wins.
        self.nodes
            .iter()
            .filter(|n| n.contains(p))
            .max_by(|a, b| (a.layer, a.z).cmp(&(b.layer, b.z)))
    }

    pub fn hit_test_with_sense(&self, p: Pos, required: Sense) -> Option<&Node> {
        self.nodes
            .iter()
            .filter(|n| n.sense.contains(required) && n.contains(p))
            .max_by(|a, b| (a.layer, a.z).cmp(&(b.layer, b.z)))
    }

    /// Nodes carrying `required`, in registration order.
    pub fn nodes_with_sense(&self, required: Sense) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(move |n| n.sense.contains(required))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/tree.rs"]
mod tests;
