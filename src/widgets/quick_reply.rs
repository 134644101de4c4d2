use unicode_width::UnicodeWidthStr;

use crate::core::geom::{Pos, Rect};
use crate::core::id::{Id, IdPath};
use crate::core::style::{Style, StyleChain};
use crate::core::tree::{Node, NodeKind, Sense};
use crate::core::widget::{Ui, Widget};
use crate::message::QuickReply;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug)]
pub struct QuickReplyStyles {
    pub base: Style,
    pub pill: Style,
    pub focused: Style,
}

impl QuickReplyStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            base: Style::default().fg(theme.text_fg),
            pill: Style::default()
                .fg(theme.quick_reply_fg)
                .bg(theme.quick_reply_bg),
            focused: Style::default()
                .fg(theme.quick_reply_focused_fg)
                .bg(theme.quick_reply_focused_bg),
        }
    }
}

/// One row of quick-reply pills.
///
/// Pills that do not fit the row are dropped whole; a pill is never clipped
/// mid-label.
pub struct QuickReplyBar<'a> {
    pub id_base: IdPath,
    pub layer: u8,
    pub replies: &'a [QuickReply],
    pub focused: Option<Id>,
    pub custom_style: Option<Style>,
}

impl QuickReplyBar<'_> {
    pub fn measure(&self) -> u16 {
        if self.replies.is_empty() {
            0
        } else {
            1
        }
    }
}

impl Widget for QuickReplyBar<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let area = ui.rect;
        if area.is_empty() || self.replies.is_empty() {
            return;
        }

        let styles = QuickReplyStyles::from_theme(ui.theme);
        let override_style = ui.theme.overrides.quick_reply;
        let chain = StyleChain::base(styles.base)
            .with(styles.pill)
            .with_opt(self.custom_style.or(override_style));
        let resolved = chain.resolve();

        let mut x = area.x;
        let mut dropped = 0usize;
        for (idx, reply) in self.replies.iter().enumerate() {
            let text = format!(" {} ", reply.label);
            let w = text.width().min(u16::MAX as usize) as u16;
            if x.saturating_add(w) > area.right() {
                dropped = self.replies.len() - idx;
                break;
            }

            let pill = Rect::new(x, area.y, w, 1);
            let id = self.id_base.push_str("reply").push_u64(idx as u64).finish();
            ui.tree.push(Node {
                id,
                rect: pill,
                layer: self.layer,
                z: 0,
                sense: Sense::HOVER | Sense::CLICK | Sense::FOCUS,
                kind: NodeKind::QuickReply { index: idx },
            });

            let style = if self.focused == Some(id) {
                resolved.patch(styles.focused)
            } else {
                resolved
            };
            ui.painter.fill_rect(pill, style);
            ui.painter
                .text_clipped(Pos::new(pill.x, pill.y), text, style, pill);

            x = x.saturating_add(w).saturating_add(1);
        }

        if dropped > 0 {
            tracing::debug!(dropped, "quick replies did not fit the row");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/quick_reply.rs"]
mod tests;
