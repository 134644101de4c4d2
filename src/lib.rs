//! chatkit - presentational chat widgets for terminal UIs
//!
//! Module structure:
//! - core: render framework (Painter, UiTree, FocusRing, Widget)
//! - theme: semantic color tokens, terminal color support, adaptation
//! - render: pluggable text/image renderer registries
//! - message: the serde data model hosts feed into the widgets
//! - widgets: transcript, card, button row, quick replies, carousel
//! - backend: paint-command replay (ratatui terminal, headless test)
//! - config: host-facing configuration object

pub mod backend;
pub mod config;
pub mod core;
pub mod message;
pub mod render;
pub mod theme;
pub mod widgets;
