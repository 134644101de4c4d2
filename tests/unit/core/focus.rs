use super::*;
use crate::core::geom::Rect;
use crate::core::tree::{Node, NodeKind};

fn tree_with(senses: &[Sense]) -> UiTree {
    let mut tree = UiTree::new();
    for (i, sense) in senses.iter().enumerate() {
        tree.push(Node {
            id: Id::raw(i as u64 + 1),
            rect: Rect::new(0, i as u16, 4, 1),
            layer: 0,
            z: 0,
            sense: *sense,
            kind: NodeKind::Unknown,
        });
    }
    tree
}

#[test]
fn next_enters_at_first_focusable() {
    let tree = tree_with(&[Sense::HOVER, Sense::FOCUS, Sense::FOCUS]);
    let mut ring = FocusRing::new();
    ring.focus_next(&tree);
    assert_eq!(ring.current(), Some(Id::raw(2)));
}

#[test]
fn prev_enters_at_last_focusable() {
    let tree = tree_with(&[Sense::FOCUS, Sense::FOCUS, Sense::HOVER]);
    let mut ring = FocusRing::new();
    ring.focus_prev(&tree);
    assert_eq!(ring.current(), Some(Id::raw(2)));
}

#[test]
fn traversal_skips_unfocusable_nodes_and_wraps() {
    let tree = tree_with(&[Sense::FOCUS, Sense::CLICK, Sense::FOCUS]);
    let mut ring = FocusRing::new();

    ring.focus_next(&tree);
    assert_eq!(ring.current(), Some(Id::raw(1)));
    ring.focus_next(&tree);
    assert_eq!(ring.current(), Some(Id::raw(3)));
    ring.focus_next(&tree);
    assert_eq!(ring.current(), Some(Id::raw(1)));

    ring.focus_prev(&tree);
    assert_eq!(ring.current(), Some(Id::raw(3)));
}

#[test]
fn advance_with_no_focusables_clears() {
    let tree = tree_with(&[Sense::HOVER, Sense::CLICK]);
    let mut ring = FocusRing::new();
    ring.focus_next(&tree);
    assert_eq!(ring.current(), None);
}

#[test]
fn stale_focus_reenters_at_an_end() {
    let tree = tree_with(&[Sense::FOCUS, Sense::FOCUS]);
    let mut ring = FocusRing::new();
    ring.focus_next(&tree);
    assert_eq!(ring.current(), Some(Id::raw(1)));

    // The focused node disappears from the next frame's tree.
    let next_frame = tree_with(&[Sense::HOVER, Sense::FOCUS]);
    ring.focus_next(&next_frame);
    assert_eq!(ring.current(), Some(Id::raw(2)));
}

#[test]
fn sync_drops_missing_or_unfocusable_nodes() {
    let tree = tree_with(&[Sense::FOCUS]);
    let mut ring = FocusRing::new();
    ring.focus_next(&tree);
    assert_eq!(ring.current(), Some(Id::raw(1)));

    // Same id, focus sense gone.
    let demoted = tree_with(&[Sense::HOVER]);
    ring.sync(&demoted);
    assert_eq!(ring.current(), None);

    ring.focus_next(&tree);
    ring.sync(&tree_with(&[]));
    assert_eq!(ring.current(), None);
}

#[test]
fn is_focused_and_clear() {
    let tree = tree_with(&[Sense::FOCUS]);
    let mut ring = FocusRing::new();
    ring.focus_next(&tree);
    assert!(ring.is_focused(Id::raw(1)));
    ring.clear();
    assert!(!ring.is_focused(Id::raw(1)));
    assert_eq!(ring.current(), None);
}
