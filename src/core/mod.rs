//! Paint and interaction primitives.
//!
//! Widgets record `PaintCmd`s into a `Painter` and interaction `Node`s into a
//! `UiTree`; a backend replays the commands, and the host evaluates input
//! against the nodes. Nothing in here touches a terminal.

pub mod focus;
pub mod geom;
pub mod id;
pub mod painter;
pub mod style;
pub mod tree;
pub mod widget;
