use super::geom::{Insets, Rect};
use super::painter::Painter;
use super::tree::UiTree;
use crate::render::RendererSettings;
use crate::theme::Theme;

/// Render context handed to widgets.
///
/// Carries the target rect, the paint/interaction sinks, and the two shared
/// read-only inputs every widget needs: the theme and the renderer registries.
/// Both are passed explicitly rather than read from any ambient state.
pub struct Ui<'a> {
    pub rect: Rect,
    pub painter: &'a mut Painter,
    pub tree: &'a mut UiTree,
    pub theme: &'a Theme,
    pub renderers: &'a RendererSettings,
}

impl<'a> Ui<'a> {
    pub fn new(
        rect: Rect,
        painter: &'a mut Painter,
        tree: &'a mut UiTree,
        theme: &'a Theme,
        renderers: &'a RendererSettings,
    ) -> Self {
        Self {
            rect,
            painter,
            tree,
            theme,
            renderers,
        }
    }

    pub fn with_rect<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Ui<'_>) -> R) -> R {
        let mut child = Ui {
            rect,
            painter: &mut *self.painter,
            tree: &mut *self.tree,
            theme: self.theme,
            renderers: self.renderers,
        };
        f(&mut child)
    }

    pub fn inset(&mut self, insets: Insets) {
        self.rect = self.rect.inset(insets);
    }

    pub fn take_top(&mut self, h: u16) -> Rect {
        let (top, rest) = self.rect.split_top(h);
        self.rect = rest;
        top
    }

    pub fn take_bottom(&mut self, h: u16) -> Rect {
        let (rest, bottom) = self.rect.split_bottom(h);
        self.rect = rest;
        bottom
    }

    pub fn take_left(&mut self, w: u16) -> Rect {
        let (left, rest) = self.rect.split_left(w);
        self.rect = rest;
        left
    }

    pub fn take_right(&mut self, w: u16) -> Rect {
        let (rest, right) = self.rect.split_right(w);
        self.rect = rest;
        right
    }
}

pub trait Widget {
    fn ui(&mut self, ui: &mut Ui);
}
