//! The chat widget set.
//!
//! Every widget here is presentational: it reads message data and theme,
//! paints into the frame's `Painter`, and registers interaction nodes in the
//! `UiTree`. None of them own state beyond the render call; scroll and focus
//! state live with the host and are passed in by reference.

pub mod button;
pub mod card;
pub mod carousel;
pub mod quick_reply;
pub mod transcript;
