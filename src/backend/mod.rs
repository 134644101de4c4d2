//! Rendering backends.
//!
//! A backend replays the frame's recorded paint commands onto a surface. The
//! trait isolates the widgets from `ratatui` types, and lets tests replay
//! frames into an in-memory buffer with the `terminal` feature off.

use crate::core::geom::{Pos, Rect};
use crate::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "terminal")]
#[path = "ratatui.rs"]
pub mod terminal;
